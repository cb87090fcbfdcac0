//! Line Series Widget
//! Labelled data points with a staging buffer and a committed snapshot.

/// Minimal contract the projector needs from a chart widget.
///
/// `push` and `pop` edit pending state; nothing is visible until `commit`.
pub trait SeriesSink {
    /// Append one (x-label, y-value) pair.
    fn push(&mut self, label: &str, value: f64);
    /// Remove the last pair. Returns `false` if there was none.
    fn pop(&mut self) -> bool;
    /// Number of pending pairs.
    fn len(&self) -> usize;
    /// Publish pending pairs as the drawn state.
    fn commit(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Static configuration the widget is created with.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    pub begin_at_zero: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            name: "Force".to_string(),
            x_label: "Label".to_string(),
            y_label: "Force (N)".to_string(),
            begin_at_zero: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Points {
    labels: Vec<String>,
    values: Vec<f64>,
}

/// Line chart data owned by the chart projector.
#[derive(Debug, Clone)]
pub struct LineSeries {
    config: SeriesConfig,
    pending: Points,
    committed: Points,
    commits: u64,
}

impl LineSeries {
    /// New widget with an empty dataset.
    pub fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            pending: Points::default(),
            committed: Points::default(),
            commits: 0,
        }
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Labels as of the last commit.
    pub fn labels(&self) -> &[String] {
        &self.committed.labels
    }

    /// Values as of the last commit.
    pub fn values(&self) -> &[f64] {
        &self.committed.values
    }

    /// Number of drawn points.
    pub fn point_count(&self) -> usize {
        self.committed.values.len()
    }

    /// How many redraws have been committed.
    pub fn commits(&self) -> u64 {
        self.commits
    }
}

impl SeriesSink for LineSeries {
    fn push(&mut self, label: &str, value: f64) {
        self.pending.labels.push(label.to_string());
        self.pending.values.push(value);
    }

    fn pop(&mut self) -> bool {
        let popped = self.pending.labels.pop().is_some();
        self.pending.values.pop();
        popped
    }

    fn len(&self) -> usize {
        self.pending.values.len()
    }

    fn commit(&mut self) {
        self.committed = self.pending.clone();
        self.commits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let series = LineSeries::new(SeriesConfig::default());
        assert_eq!(series.point_count(), 0);
        assert!(series.is_empty());
        assert_eq!(series.config().name, "Force");
    }

    #[test]
    fn edits_invisible_until_commit() {
        let mut series = LineSeries::new(SeriesConfig::default());
        series.push("a", 1.0);
        series.push("b", 2.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.point_count(), 0);

        series.commit();
        assert_eq!(series.labels(), ["a", "b"]);
        assert_eq!(series.values(), [1.0, 2.0]);

        assert!(series.pop());
        assert_eq!(series.point_count(), 2);
        series.commit();
        assert_eq!(series.labels(), ["a"]);
        assert_eq!(series.commits(), 2);
    }

    #[test]
    fn pop_on_empty() {
        let mut series = LineSeries::new(SeriesConfig::default());
        assert!(!series.pop());
    }
}
