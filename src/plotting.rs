use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::selection::SeriesSpec;

pub const CHART_TITLE: &str = "Fitness Evolution Across Generations";
pub const X_LABEL: &str = "Generation";
pub const Y_LABEL: &str = "Fitness";

const FONT_FAMILY: &str = "sans-serif";
const TITLE_FONT_PT: f64 = 16.0;
const AXIS_LABEL_FONT_PT: f64 = 14.0;
const TICK_FONT_PT: f64 = 10.0;
const MARKER_RADIUS_PT: f64 = 3.0;
const MARGIN_PT: f64 = 6.0;
const AXIS_PADDING: f64 = 0.05;

/// Highest accepted resolution. The bitmap backend allocates the whole canvas
/// up front, 14400 x 8400 px at the default figure size.
pub const MAX_DPI: u32 = 1200;

/// Physical figure size; pixel dimensions follow from the DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSpec {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Default for FigureSpec {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 7.0,
            dpi: 300,
        }
    }
}

impl FigureSpec {
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Convert typographic points to pixels at this DPI.
    pub fn pt_to_px(&self, pt: f64) -> u32 {
        (pt * self.dpi as f64 / 72.0).round().max(1.0) as u32
    }
}

/// Whether text can be rendered on this host (chart text needs a system font).
pub fn fonts_available() -> bool {
    (FONT_FAMILY, 12).into_font().box_size(Y_LABEL).is_ok()
}

/// Padded axis ranges covering every plotted point, sentinel zeros included.
pub fn axis_ranges(series: &[SeriesSpec]) -> (Range<f64>, Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);

    for &(g, f) in series.iter().flat_map(|s| s.points.iter()) {
        let g = g as f64;
        x_min = x_min.min(g);
        x_max = x_max.max(g);
        y_min = y_min.min(f);
        y_max = y_max.max(f);
    }

    if !x_min.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let margin = if span > 0.0 {
        span * AXIS_PADDING
    } else {
        min.abs().max(1.0) * AXIS_PADDING
    };
    (min - margin)..(max + margin)
}

/// Plot fitness trajectories of the selected runs and save them as a bitmap
pub fn plot_fitness_evolution(
    series: &[SeriesSpec],
    figure: &FigureSpec,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if series.is_empty() {
        return Err("no series to plot".into());
    }
    if figure.dpi == 0 || figure.dpi > MAX_DPI {
        return Err(format!("dpi must be between 1 and {}, got {}", MAX_DPI, figure.dpi).into());
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(output_path, figure.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = axis_ranges(series);
    let tick_px = figure.pt_to_px(TICK_FONT_PT);
    let label_px = figure.pt_to_px(AXIS_LABEL_FONT_PT);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            CHART_TITLE,
            (FONT_FAMILY, figure.pt_to_px(TITLE_FONT_PT)).into_font(),
        )
        .margin(figure.pt_to_px(MARGIN_PT))
        .x_label_area_size(tick_px + label_px * 2)
        .y_label_area_size(tick_px * 3 + label_px * 2)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style((FONT_FAMILY, label_px))
        .label_style((FONT_FAMILY, tick_px))
        .x_labels(10)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        // plotters mesh lines cannot be dashed
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&TRANSPARENT)
        .draw()?;

    let marker_radius = figure.pt_to_px(MARKER_RADIUS_PT);
    let legend_len = figure.pt_to_px(20.0) as i32;

    for spec in series {
        let color = spec.color;
        let style = color.stroke_width(figure.pt_to_px(spec.line_width as f64));
        let points: Vec<(f64, f64)> = spec
            .points
            .iter()
            .map(|&(generation, fitness)| (generation as f64, fitness))
            .collect();

        let anno = if spec.dashed {
            let dash = figure.pt_to_px(6.0);
            chart.draw_series(DashedLineSeries::new(points.clone(), dash, dash / 2, style))?
        } else {
            chart.draw_series(LineSeries::new(points.clone(), style))?
        };
        anno.label(spec.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));

        if spec.markers {
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, marker_radius, color.filled())),
            )?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font((FONT_FAMILY, tick_px))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    println!("📊 Fitness plot saved to: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FitnessDataset;
    use crate::selection::select_series;
    use tempfile::TempDir;

    #[test]
    fn reference_figure_is_3600_by_2100() {
        let figure = FigureSpec::default();
        assert_eq!(figure.pixel_size(), (3600, 2100));
        // 16 pt title at 300 dpi
        assert_eq!(figure.pt_to_px(16.0), 67);
    }

    #[test]
    fn axis_ranges_cover_best_run() {
        let series = select_series(&FitnessDataset::new(), &[11], false).unwrap();
        let (x, y) = axis_ranges(&series);

        assert!(x.start < 20.0 && x.end > 200.0);
        assert!(y.start < 1958.0 && y.end > 2086.0);
        assert!(y.start > 0.0);
    }

    #[test]
    fn axis_ranges_reach_down_to_sentinel() {
        let series = select_series(&FitnessDataset::new(), &[10], false).unwrap();
        let (_, y) = axis_ranges(&series);
        assert!(y.start < 0.0, "sentinel zero must stay visible: {:?}", y);
    }

    #[test]
    fn flat_series_still_gets_a_range() {
        let series = select_series(&FitnessDataset::new(), &[4], false).unwrap();
        let (_, y) = axis_ranges(&series);
        assert!(y.start < 2036.0 && y.end > 2036.0);
    }

    #[test]
    fn empty_series_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = plot_fitness_evolution(&[], &FigureSpec::default(), &dir.path().join("x.png"));
        assert!(result.is_err());
    }

    #[test]
    fn oversized_dpi_is_rejected_before_allocating() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.png");
        let series = select_series(&FitnessDataset::new(), &[11], false).unwrap();
        let figure = FigureSpec {
            dpi: 5000,
            ..FigureSpec::default()
        };

        let err = plot_fitness_evolution(&series, &figure, &path).unwrap_err();
        assert!(err.to_string().contains("5000"));
        assert!(!path.exists());
    }

    #[test]
    fn renders_png_at_requested_resolution() {
        if !fonts_available() {
            assert!(
                std::env::var_os("FITNESS_SKIP_FONT_TESTS").is_some(),
                "no system font available for chart text; install one or set FITNESS_SKIP_FONT_TESTS=1"
            );
            eprintln!("⚠️  skipping: no system font available for chart text");
            return;
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("figures").join("fitness.png");
        let figure = FigureSpec {
            dpi: 50,
            ..FigureSpec::default()
        };
        let series = select_series(&FitnessDataset::new(), &[11, 10], true).unwrap();

        plot_fitness_evolution(&series, &figure, &path).unwrap();

        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!((w, h), (600, 350));
    }
}
