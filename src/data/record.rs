//! Measurement Record Module
//! The single domain entity plus its display formatting.

use crate::physics::{coulomb_force, ForceError};

/// Decimal places shown on cards.
pub const DISPLAY_DECIMALS: usize = 5;

/// One stored calculation. Immutable once built; `force` is computed at
/// construction and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    charge1: f64,
    charge2: f64,
    distance: f64,
    label: String,
    force: f64,
}

impl Measurement {
    /// Build a record, deriving the force from Coulomb's law.
    pub fn new(
        charge1: f64,
        charge2: f64,
        distance: f64,
        label: impl Into<String>,
    ) -> Result<Self, ForceError> {
        let force = coulomb_force(charge1, charge2, distance)?;
        Ok(Self {
            charge1,
            charge2,
            distance,
            label: label.into(),
            force,
        })
    }

    pub fn charge1(&self) -> f64 {
        self.charge1
    }

    pub fn charge2(&self) -> f64 {
        self.charge2
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn force(&self) -> f64 {
        self.force
    }

    /// The three records every session starts with.
    pub fn seed() -> Vec<Measurement> {
        [(100.0, "F1", 22.5), (50.0, "F2", 90.0), (25.0, "F3", 360.0)]
            .into_iter()
            .map(|(distance, label, force)| Measurement {
                charge1: 0.005,
                charge2: 0.005,
                distance,
                label: label.to_string(),
                force,
            })
            .collect()
    }
}

/// Magnitude from which values are shown in exponent form.
const EXPONENT_CUTOFF: f64 = 1e21;

/// Round to [`DISPLAY_DECIMALS`] places and drop trailing zeros, so
/// `22.5` shows as `22.5` and `3e-6` as `0.00000` → `0`. Magnitudes of
/// 1e21 and above are shown as `1e+21`.
///
/// Only used for display; stored values keep full precision.
pub fn format_display(value: f64) -> String {
    if value.abs() >= EXPONENT_CUTOFF {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    let fixed = format!("{:.*}", DISPLAY_DECIMALS, value);
    match fixed.parse::<f64>() {
        // Collapse -0 to 0
        Ok(rounded) if rounded == 0.0 => "0".to_string(),
        Ok(rounded) => rounded.to_string(),
        Err(_) => fixed,
    }
}
