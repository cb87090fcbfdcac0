//! Calculation Form Panel
//! Left side panel collecting the two charges, the distance and a label.

use crate::data::{Measurement, MeasurementStore};
use crate::physics::{evaluate, ForceError, ParseError};
use egui::{Color32, RichText};
use std::fmt;
use thiserror::Error;

/// The four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Charge1,
    Charge2,
    Distance,
    Label,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Charge1 => "Charge 1",
            Field::Charge2 => "Charge 2",
            Field::Distance => "Distance",
            Field::Label => "Label",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("{field}: {source}")]
    Parse { field: Field, source: ParseError },
    #[error(transparent)]
    Force(#[from] ForceError),
}

/// Raw text of the form fields.
#[derive(Debug, Clone, Default)]
pub struct CalculationForm {
    pub charge1: String,
    pub charge2: String,
    pub distance: String,
    pub label: String,
}

impl CalculationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with the given raw inputs.
    pub fn with_inputs(charge1: &str, charge2: &str, distance: &str, label: &str) -> Self {
        Self {
            charge1: charge1.to_string(),
            charge2: charge2.to_string(),
            distance: distance.to_string(),
            label: label.to_string(),
        }
    }

    fn fields(&self) -> [(Field, &str); 4] {
        [
            (Field::Charge1, self.charge1.as_str()),
            (Field::Charge2, self.charge2.as_str()),
            (Field::Distance, self.distance.as_str()),
            (Field::Label, self.label.as_str()),
        ]
    }

    /// First empty field, if any.
    pub fn missing_field(&self) -> Option<Field> {
        self.fields()
            .into_iter()
            .find(|(_, text)| text.trim().is_empty())
            .map(|(field, _)| field)
    }

    /// Submission is allowed once every field has text.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    fn parse_field(field: Field, text: &str) -> Result<f64, FormError> {
        evaluate(text).map_err(|source| FormError::Parse { field, source })
    }

    /// Parse the inputs into a record without touching any store.
    pub fn build_measurement(&self) -> Result<Measurement, FormError> {
        if let Some(field) = self.missing_field() {
            return Err(FormError::MissingField(field));
        }

        let q1 = Self::parse_field(Field::Charge1, &self.charge1)?;
        let q2 = Self::parse_field(Field::Charge2, &self.charge2)?;
        let d = Self::parse_field(Field::Distance, &self.distance)?;

        Ok(Measurement::new(q1, q2, d, self.label.trim())?)
    }

    /// Evaluate the form and append the result to `store`.
    /// On error the store is left untouched.
    pub fn submit(&self, store: &mut MeasurementStore) -> Result<(), FormError> {
        let record = self.build_measurement()?;
        tracing::info!(
            label = record.label(),
            force = record.force(),
            "measurement added"
        );
        store.append(record);
        Ok(())
    }

    /// Draw the form. `error` is shown under the button.
    pub fn show(&mut self, ui: &mut egui::Ui, error: Option<&str>) -> FormAction {
        let mut action = FormAction::None;

        ui.label(RichText::new("Input").size(18.0).strong());
        ui.add_space(8.0);

        let label_width = 80.0;
        let inputs: [(&str, &str, &mut String); 4] = [
            ("Charge 1:", "3*10^-6", &mut self.charge1),
            ("Charge 2:", "-3*10^-6", &mut self.charge2),
            ("Distance:", "0.19", &mut self.distance),
            ("Label:", "Calculation 1", &mut self.label),
        ];

        let mut submitted = false;
        for (caption, hint, text) in inputs {
            ui.horizontal(|ui| {
                ui.add_sized([label_width, 20.0], egui::Label::new(caption));
                let response = ui.add(egui::TextEdit::singleline(text).hint_text(hint));
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
            });
            ui.add_space(5.0);
        }

        ui.add_space(10.0);

        let complete = self.is_complete();
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(complete, |ui| {
                let button = egui::Button::new(RichText::new("Calculate").size(16.0))
                    .min_size(egui::vec2(160.0, 32.0));
                if ui.add(button).clicked() {
                    action = FormAction::Calculate;
                }
            });
        });
        if submitted && complete {
            action = FormAction::Calculate;
        }

        if let Some(message) = error {
            ui.add_space(8.0);
            ui.label(
                RichText::new(message)
                    .size(12.0)
                    .color(Color32::from_rgb(220, 53, 69)),
            );
        }

        action
    }
}

/// Actions triggered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Calculate,
}
