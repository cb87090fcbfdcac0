//! Coulomb's law.

use thiserror::Error;

/// Coulomb's constant (N·m²/C²), rounded the way the calculator always has.
pub const COULOMB_K: f64 = 9e9;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ForceError {
    #[error("distance must not be zero")]
    DivisionByZero,
    #[error("force is too large to represent")]
    NonFinite,
}

/// Electrostatic force in newtons between charges `q1`, `q2` (coulombs)
/// separated by `distance` metres. Negative means attraction.
pub fn coulomb_force(q1: f64, q2: f64, distance: f64) -> Result<f64, ForceError> {
    if distance == 0.0 {
        return Err(ForceError::DivisionByZero);
    }

    let force = COULOMB_K * (q1 * q2) / distance.powi(2);
    if !force.is_finite() {
        return Err(ForceError::NonFinite);
    }
    Ok(force)
}
