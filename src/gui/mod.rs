//! GUI module - User interface components

mod app;
mod form_panel;
mod results_view;

pub use app::{AppAction, AppState, CoulombApp, Status};
pub use form_panel::{CalculationForm, Field, FormAction, FormError};
pub use results_view::{card_columns, card_index, ResultsAction, ResultsView};
