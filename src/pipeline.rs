use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use crate::analysis::FinalFitnessStats;
use crate::config::PlotConfig;
use crate::data::FitnessDataset;
use crate::plotting::{fonts_available, plot_fitness_evolution};
use crate::selection::{select_series, SeriesSpec};

/// What a pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub image_path: PathBuf,
    pub stats_path: Option<PathBuf>,
    pub stats: FinalFitnessStats,
    pub series: Vec<SeriesSpec>,
}

/// Select, render, and report. Statistic lines go to `out`.
///
/// The interactive window is left to the caller so headless runs can reuse
/// everything else.
pub fn run_pipeline<W: Write>(
    config: &PlotConfig,
    dataset: &FitnessDataset,
    out: &mut W,
) -> Result<PipelineOutcome, Box<dyn Error>> {
    config.validate(dataset)?;

    if !fonts_available() {
        return Err("no usable system font found for chart text".into());
    }

    let series = select_series(dataset, &config.runs, config.show_average)?;
    plot_fitness_evolution(&series, &config.figure, &config.output_path)?;

    let stats = FinalFitnessStats::from_dataset(dataset)?;
    stats.write_report(out)?;
    out.flush()?;

    if let Some(path) = &config.stats_json {
        stats.save_json(path)?;
        println!("💾 Statistics saved to: {}", path.display());
    }

    Ok(PipelineOutcome {
        image_path: config.output_path.clone(),
        stats_path: config.stats_json.clone(),
        stats,
        series,
    })
}

/// Headless report: the pipeline output followed by which runs hold the extremes.
pub fn run_report<W: Write>(
    config: &PlotConfig,
    dataset: &FitnessDataset,
    out: &mut W,
) -> Result<PipelineOutcome, Box<dyn Error>> {
    let outcome = run_pipeline(config, dataset, out)?;
    outcome.stats.write_run_details(out)?;
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selection_fails_before_rendering() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = PlotConfig {
            output_path: dir.path().join("never.png"),
            runs: vec![42],
            ..PlotConfig::default()
        };

        let mut out = Vec::new();
        let err = run_pipeline(&config, &FitnessDataset::new(), &mut out).unwrap_err();

        assert!(err.to_string().contains("42"));
        assert!(!config.output_path.exists());
        assert!(out.is_empty());
    }

    #[test]
    fn oversized_dpi_fails_before_rendering() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = PlotConfig {
            output_path: dir.path().join("huge.png"),
            ..PlotConfig::default()
        };
        config.figure.dpi = 5000;

        let mut out = Vec::new();
        let err = run_pipeline(&config, &FitnessDataset::new(), &mut out).unwrap_err();

        assert!(err.to_string().contains("FITNESS_DPI"));
        assert!(!config.output_path.exists());
        assert!(out.is_empty());
    }
}
