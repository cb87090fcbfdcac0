//! Electrostatic Force Calculator Main Application
//! Main window with the calculation form and the results area.

use crate::charts::ChartProjector;
use crate::data::MeasurementStore;
use crate::gui::{CalculationForm, FormAction, ResultsAction, ResultsView};
use egui::{Color32, RichText, SidePanel};

/// Outcome of the last user action, shown in the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    Added(String),
    Removed(String),
    /// Submission rejected; also shown under the form.
    Rejected(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> String {
        match self {
            Status::Ready => "Ready".to_string(),
            Status::Added(label) => format!("Added {}", label),
            Status::Removed(label) => format!("Removed {}", label),
            Status::Rejected(message) | Status::Error(message) => format!("Error: {}", message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Rejected(_) | Status::Error(_))
    }
}

/// User actions the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Calculate,
    Delete(usize),
}

/// Everything the window shows, owned in one place.
pub struct AppState {
    pub store: MeasurementStore,
    pub projector: ChartProjector,
    pub form: CalculationForm,
    pub status: Status,
}

impl AppState {
    /// State around `store`, with the chart already synchronized.
    pub fn new(store: MeasurementStore) -> Self {
        let mut projector = ChartProjector::default();
        projector.sync(&store);
        Self {
            store,
            projector,
            form: CalculationForm::new(),
            status: Status::Ready,
        }
    }

    /// Apply one action, then bring the chart up to date.
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::Calculate => match self.form.submit(&mut self.store) {
                Ok(()) => {
                    self.status = Status::Added(self.form.label.trim().to_string());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "submission rejected");
                    self.status = Status::Rejected(e.to_string());
                }
            },
            AppAction::Delete(index) => match self.store.remove_at(index) {
                Ok(removed) => {
                    tracing::info!(index, label = removed.label(), "measurement removed");
                    self.status = Status::Removed(removed.label().to_string());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "removal ignored");
                    self.status = Status::Error(e.to_string());
                }
            },
        }
        self.projector.sync_if_changed(&self.store);
    }

    /// Error text for the form, if the last action failed.
    fn form_error(&self) -> Option<String> {
        match &self.status {
            Status::Rejected(message) => Some(message.clone()),
            _ => None,
        }
    }
}

/// Main application window.
pub struct CoulombApp {
    state: AppState,
    results: ResultsView,
}

impl CoulombApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, store: MeasurementStore) -> Self {
        tracing::info!(records = store.len(), "calculator started");
        Self {
            state: AppState::new(store),
            results: ResultsView::new(),
        }
    }

    fn draw_status(ui: &mut egui::Ui, status: &Status) {
        let color = match status {
            Status::Rejected(_) | Status::Error(_) => Color32::from_rgb(220, 53, 69),
            Status::Added(_) | Status::Removed(_) => Color32::from_rgb(40, 167, 69),
            Status::Ready => Color32::GRAY,
        };
        ui.label(RichText::new(status.message()).size(11.0).color(color));
    }
}

impl eframe::App for CoulombApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("ElectroStatic Force Calculator")
                        .size(24.0)
                        .strong(),
                );
                ui.add_space(6.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                Self::draw_status(ui, &self.state.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new("F = k·q₁·q₂ / d²,  k = 9×10⁹ N·m²/C²")
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
            });
        });

        // Left panel - Calculation Form
        SidePanel::left("form_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                let error = self.state.form_error();
                if self.state.form.show(ui, error.as_deref()) == FormAction::Calculate {
                    actions.push(AppAction::Calculate);
                }
            });

        // Central panel - Chart and cards
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = self.results.show(
                ui,
                self.state.projector.chart(),
                self.state.store.all(),
            );
            if let ResultsAction::Delete(index) = action {
                actions.push(AppAction::Delete(index));
            }
        });

        if !actions.is_empty() {
            for action in actions {
                self.state.apply(action);
            }
            ctx.request_repaint();
        }
    }
}
