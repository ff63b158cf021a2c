use plotters::style::RGBColor;

use crate::data::FitnessDataset;

/// Color of the best run in the reference figure.
pub const BEST_RUN_COLOR: RGBColor = RGBColor(0x8E, 0x24, 0xAA);

/// Line width (points) of the best run.
pub const HIGHLIGHT_LINE_WIDTH: f32 = 3.0;

/// Line width (points) of every other run.
pub const DEFAULT_LINE_WIDTH: f32 = 1.5;

const AVERAGE_LINE_WIDTH: f32 = 2.0;

/// Colors handed out to the remaining selected runs, in selection order.
const PALETTE: [RGBColor; 8] = [
    RGBColor(0x1F, 0x77, 0xB4),
    RGBColor(0xFF, 0x7F, 0x0E),
    RGBColor(0x2C, 0xA0, 0x2C),
    RGBColor(0xD6, 0x27, 0x28),
    RGBColor(0x8C, 0x56, 0x4B),
    RGBColor(0xE3, 0x77, 0xC2),
    RGBColor(0x7F, 0x7F, 0x7F),
    RGBColor(0x17, 0xBE, 0xCF),
];

/// One line of the chart, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    /// Source run (0-based); `None` for derived series such as the average.
    pub run_index: Option<usize>,
    pub points: Vec<(u32, f64)>, // (generation, fitness)
    pub color: RGBColor,
    pub line_width: f32,
    pub markers: bool,
    pub dashed: bool,
}

impl SeriesSpec {
    pub fn fitness_values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, f)| *f).collect()
    }

    pub fn generations(&self) -> Vec<u32> {
        self.points.iter().map(|(g, _)| *g).collect()
    }
}

/// Index of the run with the highest final fitness (first one on ties).
pub fn best_run_index(dataset: &FitnessDataset) -> Option<usize> {
    dataset
        .final_values()
        .iter()
        .enumerate()
        .fold(None::<(usize, u32)>, |best, (idx, &value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}

/// Build the series to draw for the given runs.
///
/// Readings are passed through untouched: a sentinel 0 stays a 0 point.
pub fn select_series(
    dataset: &FitnessDataset,
    run_indices: &[usize],
    include_average: bool,
) -> Result<Vec<SeriesSpec>, String> {
    if run_indices.is_empty() {
        return Err("no runs selected for plotting".to_string());
    }

    let best = best_run_index(dataset);
    let mut next_color = 0;
    let mut series = Vec::with_capacity(run_indices.len() + 1);

    for &index in run_indices {
        let trajectory = dataset.trajectory(index).ok_or_else(|| {
            format!(
                "run index {} out of range (dataset has {} runs)",
                index,
                dataset.num_runs()
            )
        })?;

        let highlighted = Some(index) == best;
        let (color, line_width, label) = if highlighted {
            (
                BEST_RUN_COLOR,
                HIGHLIGHT_LINE_WIDTH,
                format!("Run {} (Best)", index + 1),
            )
        } else {
            let color = PALETTE[next_color % PALETTE.len()];
            next_color += 1;
            (color, DEFAULT_LINE_WIDTH, format!("Run {}", index + 1))
        };

        series.push(SeriesSpec {
            label,
            run_index: Some(index),
            points: trajectory
                .into_iter()
                .map(|(generation, fitness)| (generation, fitness as f64))
                .collect(),
            color,
            line_width,
            markers: true,
            dashed: false,
        });
    }

    if include_average {
        series.push(SeriesSpec {
            label: "Average of all runs".to_string(),
            run_index: None,
            points: dataset.mean_trajectory(),
            color: RGBColor(0, 0, 0),
            line_width: AVERAGE_LINE_WIDTH,
            markers: false,
            dashed: true,
        });
    }

    Ok(series)
}
