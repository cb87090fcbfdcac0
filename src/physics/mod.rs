//! Physics module - expression parsing and Coulomb's law

mod coulomb;
pub mod expr;

pub use coulomb::{coulomb_force, ForceError, COULOMB_K};
pub use expr::{evaluate, ParseError};
