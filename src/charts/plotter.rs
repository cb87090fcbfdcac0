//! Chart Plotter Module
//! Draws the committed force series using egui_plot.

use crate::charts::LineSeries;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Line colour
pub const BORDER_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Point colours, cycled by index
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(255, 99, 132),  // Red
    Color32::from_rgb(54, 162, 235),  // Blue
    Color32::from_rgb(255, 206, 86),  // Yellow
    Color32::from_rgb(75, 192, 192),  // Green
    Color32::from_rgb(153, 102, 255), // Purple
    Color32::from_rgb(255, 159, 64),  // Orange
];

const CHART_HEIGHT: f32 = 320.0;

/// Draws a [`LineSeries`] as a category line chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Colour for the point at `index`.
    pub fn point_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Category label for an x-axis grid mark, empty between categories.
    pub fn axis_label(labels: &[String], x: f64) -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    pub fn draw_force_chart(ui: &mut egui::Ui, series: &LineSeries) {
        if series.point_count() == 0 {
            ui.add_space(10.0);
            ui.label(RichText::new("Nothing to see yet!").size(16.0).italics());
            ui.add_space(10.0);
        }

        let config = series.config();
        let labels = series.labels().to_vec();
        let values = series.values();

        let mut plot = Plot::new("force_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(config.x_label.clone())
            .y_axis_label(config.y_label.clone())
            .x_axis_formatter(move |mark, _range| Self::axis_label(&labels, mark.value));
        if config.begin_at_zero {
            plot = plot.include_y(0.0);
        }

        plot.show(ui, |plot_ui| {
            if values.is_empty() {
                return;
            }

            let line_points: PlotPoints = values
                .iter()
                .enumerate()
                .map(|(i, &v)| [i as f64, v])
                .collect();
            plot_ui.line(
                Line::new(line_points)
                    .color(BORDER_COLOR)
                    .width(1.5)
                    .name(&config.name),
            );

            for (i, &v) in values.iter().enumerate() {
                let color = Self::point_color(i);
                plot_ui.points(
                    Points::new(vec![[i as f64, v]])
                        .radius(4.0)
                        .color(color.gamma_multiply(0.8)),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_only_on_categories() {
        let labels = vec!["F1".to_string(), "F2".to_string()];
        assert_eq!(ChartPlotter::axis_label(&labels, 0.0), "F1");
        assert_eq!(ChartPlotter::axis_label(&labels, 1.0), "F2");
        assert_eq!(ChartPlotter::axis_label(&labels, 0.5), "");
        assert_eq!(ChartPlotter::axis_label(&labels, 2.0), "");
        assert_eq!(ChartPlotter::axis_label(&labels, -1.0), "");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(ChartPlotter::point_color(0), ChartPlotter::point_color(PALETTE.len()));
    }
}
