//! Electrostatic Force Calculator
//!
//! Computes the Coulomb force between two point charges and keeps a running
//! chart and card list of every calculation.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod physics;
