//! Chart Projector
//! Keeps the force chart in step with the measurement store.

use crate::charts::{LineSeries, SeriesConfig, SeriesSink};
use crate::data::MeasurementStore;

/// Owns the chart widget and rebuilds its series from the store.
pub struct ChartProjector {
    chart: LineSeries,
    synced_revision: Option<u64>,
}

impl Default for ChartProjector {
    fn default() -> Self {
        Self::new(SeriesConfig::default())
    }
}

impl ChartProjector {
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            chart: LineSeries::new(config),
            synced_revision: None,
        }
    }

    /// Read-only access for drawing.
    pub fn chart(&self) -> &LineSeries {
        &self.chart
    }

    /// Clear the chart, push every record in store order, then commit.
    pub fn sync(&mut self, store: &MeasurementStore) {
        while self.chart.pop() {}
        for record in store.all() {
            self.chart.push(record.label(), record.force());
        }
        self.chart.commit();
        self.synced_revision = Some(store.revision());

        tracing::debug!(
            points = self.chart.point_count(),
            revision = store.revision(),
            "chart synchronized"
        );
    }

    /// Resync only if the store changed since the last sync.
    pub fn sync_if_changed(&mut self, store: &MeasurementStore) -> bool {
        if self.synced_revision == Some(store.revision()) {
            return false;
        }
        self.sync(store);
        true
    }
}
