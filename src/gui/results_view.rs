//! Results View
//! Central panel: the force chart followed by a responsive grid of cards,
//! one per measurement.

use crate::charts::{ChartPlotter, LineSeries};
use crate::data::{format_display, Measurement};
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 10.0;
const CARD_WIDTH: f32 = 190.0;
const CARD_FILL: Color32 = Color32::from_rgb(147, 197, 253);

/// Number of card columns that fit in `avail_width`, at least one.
pub fn card_columns(avail_width: f32) -> usize {
    ((avail_width / (CARD_WIDTH + CARD_SPACING)).floor() as usize).max(1)
}

/// Store index of the card drawn at `row`, `col` in a grid `columns` wide.
pub fn card_index(row: usize, col: usize, columns: usize) -> usize {
    row * columns + col
}

/// Draws the chart and the card grid; reports which card was deleted.
#[derive(Default)]
pub struct ResultsView;

impl ResultsView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &self,
        ui: &mut egui::Ui,
        chart: &LineSeries,
        records: &[Measurement],
    ) -> ResultsAction {
        let mut action = ResultsAction::None;

        ui.label(RichText::new("Results").size(18.0).strong());
        ui.add_space(5.0);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ChartPlotter::draw_force_chart(ui, chart);
                ui.add_space(15.0);

                let num_columns = card_columns(ui.available_width());
                for (row, chunk) in records.chunks(num_columns).enumerate() {
                    ui.horizontal(|ui| {
                        for (col, record) in chunk.iter().enumerate() {
                            let index = card_index(row, col, num_columns);
                            if Self::draw_card(ui, record) {
                                action = ResultsAction::Delete(index);
                            }
                            ui.add_space(CARD_SPACING);
                        }
                    });
                    ui.add_space(CARD_SPACING);
                }
            });

        action
    }

    /// Draw one card. Returns true when its delete button was clicked.
    fn draw_card(ui: &mut egui::Ui, record: &Measurement) -> bool {
        let mut delete = false;
        let text = Color32::BLACK;

        egui::Frame::none()
            .rounding(6.0)
            .fill(CARD_FILL.gamma_multiply(0.8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH - 20.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(record.label())
                                .size(18.0)
                                .italics()
                                .color(text),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .small_button("🗑")
                                .on_hover_text("Delete measurement")
                                .clicked()
                            {
                                delete = true;
                            }
                        });
                    });

                    let rows = [
                        ("Charge A", record.charge1()),
                        ("Charge B", record.charge2()),
                        ("Distance", record.distance()),
                    ];
                    for (name, value) in rows {
                        ui.label(
                            RichText::new(format!("{}: {}", name, format_display(value)))
                                .color(text),
                        );
                    }

                    ui.separator();
                    ui.label(
                        RichText::new(format!("Force: {}", format_display(record.force())))
                            .strong()
                            .color(text),
                    );
                });
            });

        delete
    }
}

/// Actions triggered from the results area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    None,
    Delete(usize),
}
