//! Data module - measurement records and their store

mod record;
mod store;

pub use record::{format_display, Measurement, DISPLAY_DECIMALS};
pub use store::{MeasurementStore, StoreError};
