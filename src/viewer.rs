//! Native window showing the selected fitness series.

use eframe::egui::{self, Color32};
use egui_plot::{Corner, Legend, Line, LineStyle, MarkerShape, Plot, Points};

use crate::plotting::{CHART_TITLE, X_LABEL, Y_LABEL};
use crate::selection::SeriesSpec;

const MARKER_RADIUS: f32 = 4.0;

pub struct FitnessViewer {
    series: Vec<SeriesSpec>,
}

impl FitnessViewer {
    pub fn new(series: Vec<SeriesSpec>) -> Self {
        Self { series }
    }
}

pub fn series_color(spec: &SeriesSpec) -> Color32 {
    Color32::from_rgb(spec.color.0, spec.color.1, spec.color.2)
}

fn plot_points(spec: &SeriesSpec) -> Vec<[f64; 2]> {
    spec.points
        .iter()
        .map(|&(generation, fitness)| [generation as f64, fitness])
        .collect()
}

impl eframe::App for FitnessViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(CHART_TITLE);
            });

            Plot::new("fitness_evolution")
                .legend(Legend::default().position(Corner::RightBottom))
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL)
                .show_grid(true)
                .show(ui, |plot_ui| {
                    for spec in &self.series {
                        let color = series_color(spec);
                        let mut line = Line::new(spec.label.clone(), plot_points(spec))
                            .color(color)
                            .width(spec.line_width);
                        if spec.dashed {
                            line = line.style(LineStyle::dashed_dense());
                        }
                        plot_ui.line(line);

                        if spec.markers {
                            // Same name as the line so both share one legend entry.
                            plot_ui.points(
                                Points::new(spec.label.clone(), plot_points(spec))
                                    .shape(MarkerShape::Circle)
                                    .filled(true)
                                    .radius(MARKER_RADIUS)
                                    .color(color),
                            );
                        }
                    }
                });
        });
    }
}

/// Open the window and block until the user closes it.
pub fn show_fitness_window(series: Vec<SeriesSpec>) -> Result<(), Box<dyn std::error::Error>> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(CHART_TITLE)
            .with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fitness Evolution",
        native_options,
        Box::new(move |_cc| Ok(Box::new(FitnessViewer::new(series)))),
    )
    .map_err(|e| format!("failed to open display window: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FitnessDataset;
    use crate::selection::{select_series, BEST_RUN_COLOR};

    #[test]
    fn best_run_keeps_its_color() {
        let series = select_series(&FitnessDataset::new(), &[11], false).unwrap();
        assert_eq!(
            series_color(&series[0]),
            Color32::from_rgb(BEST_RUN_COLOR.0, BEST_RUN_COLOR.1, BEST_RUN_COLOR.2)
        );
    }

    #[test]
    fn window_points_keep_sentinel() {
        let series = select_series(&FitnessDataset::new(), &[15], false).unwrap();
        let points = plot_points(&series[0]);
        assert_eq!(points[0], [20.0, 0.0]);
        assert_eq!(points.len(), 10);
    }
}
