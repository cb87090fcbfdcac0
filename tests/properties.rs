//! Property-based tests for the calculator core.

use proptest::prelude::*;

use coulomb_calc::charts::ChartProjector;
use coulomb_calc::data::{format_display, Measurement, MeasurementStore};
use coulomb_calc::gui::CalculationForm;
use coulomb_calc::physics::{evaluate, COULOMB_K};

fn charge() -> impl Strategy<Value = f64> {
    -1e-2f64..1e-2
}

fn distance() -> impl Strategy<Value = f64> {
    prop_oneof![1e-3f64..1e3, -1e3f64..-1e-3]
}

#[derive(Debug, Clone)]
enum Op {
    Append(String),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[A-Za-z0-9]{1,6}".prop_map(Op::Append),
        (0usize..12).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Submitting valid inputs appends one record with the Coulomb force.
    #[test]
    fn submit_matches_formula(q1 in charge(), q2 in charge(), d in distance()) {
        let mut store = MeasurementStore::seeded();
        let before = store.len();
        let form = CalculationForm::with_inputs(
            &format!("{:e}", q1),
            &format!("{:e}", q2),
            &format!("{:e}", d),
            "p",
        );
        form.submit(&mut store).unwrap();

        prop_assert_eq!(store.len(), before + 1);
        let expected = COULOMB_K * q1 * q2 / (d * d);
        let got = store.all()[before].force();
        prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1e-300));
    }

    /// Literal text evaluates to the number it spells.
    #[test]
    fn literal_round_trip(x in -1e12f64..1e12) {
        prop_assert_eq!(evaluate(&format!("{:e}", x)).unwrap(), x);
    }

    /// Formatting an already formatted value changes nothing.
    #[test]
    fn display_formatting_is_idempotent(x in prop_oneof![-1e9f64..1e9, -1e300f64..1e300]) {
        let once = format_display(x);
        let twice = format_display(once.parse::<f64>().unwrap());
        prop_assert_eq!(once, twice);
    }

    /// `remove_at` drops exactly the chosen record and keeps the rest in order.
    #[test]
    fn remove_preserves_order(n in 1usize..10, pick in 0usize..10) {
        let i = pick % n;
        let mut store = MeasurementStore::new();
        for k in 0..n {
            store.append(Measurement::new(1e-6, 1e-6, 1.0, format!("r{k}")).unwrap());
        }
        let expected: Vec<String> = (0..n).filter(|&k| k != i).map(|k| format!("r{k}")).collect();

        let removed = store.remove_at(i).unwrap();
        prop_assert_eq!(removed.label(), format!("r{i}"));
        let labels: Vec<String> = store.all().iter().map(|m| m.label().to_string()).collect();
        prop_assert_eq!(labels, expected);
    }

    /// After any mix of appends and removals the chart mirrors the store.
    #[test]
    fn chart_tracks_store(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = MeasurementStore::seeded();
        let mut projector = ChartProjector::default();
        projector.sync(&store);

        for op in ops {
            match op {
                Op::Append(label) => {
                    store.append(Measurement::new(2e-6, 3e-6, 0.5, label).unwrap());
                }
                Op::Remove(i) => {
                    let len = store.len();
                    let result = store.remove_at(i);
                    prop_assert_eq!(result.is_ok(), i < len);
                }
            }
            projector.sync_if_changed(&store);

            let chart = projector.chart();
            prop_assert_eq!(chart.point_count(), store.len());
            prop_assert_eq!(chart.labels().len(), store.len());
            for (label, record) in chart.labels().iter().zip(store.all()) {
                prop_assert_eq!(label.as_str(), record.label());
            }
        }
    }
}
