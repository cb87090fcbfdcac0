//! End-to-end flows through form, store and chart, without a window.

use coulomb_calc::data::{format_display, MeasurementStore};
use coulomb_calc::gui::{AppAction, AppState, CalculationForm, FormError, Status};
use coulomb_calc::physics::{ForceError, ParseError};

#[test]
fn seeded_state_and_first_sync() {
    let state = AppState::new(MeasurementStore::seeded());

    let records = state.store.all();
    assert_eq!(records.len(), 3);
    let labels: Vec<&str> = records.iter().map(|m| m.label()).collect();
    let forces: Vec<f64> = records.iter().map(|m| m.force()).collect();
    assert_eq!(labels, ["F1", "F2", "F3"]);
    assert_eq!(forces, [22.5, 90.0, 360.0]);

    let chart = state.projector.chart();
    assert_eq!(chart.labels(), ["F1", "F2", "F3"]);
    assert_eq!(chart.values(), [22.5, 90.0, 360.0]);
}

#[test]
fn attraction_between_opposite_charges() {
    let mut state = AppState::new(MeasurementStore::seeded());
    state.form = CalculationForm::with_inputs("3*10^-6", "-3*10^-6", "0.19", "Calc1");
    state.apply(AppAction::Calculate);

    let last = state.store.all().last().unwrap();
    assert_eq!(last.label(), "Calc1");
    assert!(last.force() < 0.0);
    assert!((last.force() - -2.2437).abs() < 1e-4);
    assert_eq!(format_display(last.force()), "-2.24377");
    assert_eq!(state.projector.chart().point_count(), 4);
}

#[test]
fn zero_distance_is_rejected() {
    let mut store = MeasurementStore::seeded();
    let form = CalculationForm::with_inputs("1", "1", "0", "zero");
    assert_eq!(
        form.submit(&mut store),
        Err(FormError::Force(ForceError::DivisionByZero))
    );
    assert_eq!(store.len(), 3);
}

#[test]
fn malformed_expression_is_rejected() {
    let mut state = AppState::new(MeasurementStore::seeded());
    state.form = CalculationForm::with_inputs("process.exit()", "1", "1", "bad");
    state.apply(AppAction::Calculate);

    assert!(matches!(state.status, Status::Rejected(_)));
    assert_eq!(state.store.len(), 3);
    assert!(matches!(
        state.form.build_measurement(),
        Err(FormError::Parse {
            source: ParseError::UnexpectedChar { ch: 'p', pos: 0 },
            ..
        })
    ));
}

#[test]
fn delete_button_removes_by_index() {
    let mut state = AppState::new(MeasurementStore::seeded());
    state.apply(AppAction::Delete(1));

    let labels: Vec<&str> = state.store.all().iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["F1", "F3"]);
    assert_eq!(state.projector.chart().labels(), ["F1", "F3"]);
}

#[test]
fn start_empty_then_add() {
    let mut state = AppState::new(MeasurementStore::new());
    assert_eq!(state.projector.chart().point_count(), 0);

    state.form = CalculationForm::with_inputs("0.005", "0.005", "(2+3)*5", "F3");
    state.apply(AppAction::Calculate);
    let values = state.projector.chart().values();
    assert_eq!(values.len(), 1);
    assert!((values[0] - 360.0).abs() < 1e-9);

    state.apply(AppAction::Delete(0));
    state.apply(AppAction::Delete(0));
    assert!(state.status.is_error());
    assert!(state.store.is_empty());
    assert_eq!(state.projector.chart().point_count(), 0);
}
