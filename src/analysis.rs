use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::data::FitnessDataset;

/// Summary of the final-generation fitness across all runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalFitnessStats {
    pub runs: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `runs`, not `runs - 1`).
    pub std_dev: f64,
    pub best: u32,
    pub worst: u32,
    pub best_run: usize,  // 1-based
    pub worst_run: usize, // 1-based
}

impl FinalFitnessStats {
    /// Statistics over the last column of the dataset.
    pub fn from_dataset(dataset: &FitnessDataset) -> Result<Self, String> {
        Self::from_values(&dataset.final_values())
    }

    /// Statistics over final fitness values listed in run order.
    pub fn from_values(values: &[u32]) -> Result<Self, String> {
        if values.is_empty() {
            return Err("cannot compute statistics over zero runs".to_string());
        }

        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        // First occurrence wins on ties for both extremes.
        let (mut best_idx, mut worst_idx) = (0, 0);
        for (idx, &value) in values.iter().enumerate() {
            if value > values[best_idx] {
                best_idx = idx;
            }
            if value < values[worst_idx] {
                worst_idx = idx;
            }
        }

        Ok(Self {
            runs: values.len(),
            mean,
            std_dev: variance.sqrt(),
            best: values[best_idx],
            worst: values[worst_idx],
            best_run: best_idx + 1,
            worst_run: worst_idx + 1,
        })
    }

    /// The four statistic lines, in print order.
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Final fitness mean: {:.2}", self.mean),
            format!("Standard deviation: {:.2}", self.std_dev),
            format!("Best fitness: {}", self.best),
            format!("Worst fitness: {}", self.worst),
        ]
    }

    /// Print the banner and the four statistic lines.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "===== EXPERIMENT STATISTICS =====")?;
        for line in self.summary_lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Which runs hold the extremes.
    pub fn write_run_details<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Runs: {}", self.runs)?;
        writeln!(out, "Best run: {} ({})", self.best_run, self.best)?;
        writeln!(out, "Worst run: {} ({})", self.worst_run, self.worst)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_statistics() {
        let stats = FinalFitnessStats::from_dataset(&FitnessDataset::new()).unwrap();

        assert_eq!(stats.runs, 20);
        assert!((stats.mean - 2024.20).abs() < 0.005, "mean = {}", stats.mean);
        assert!((stats.std_dev - 26.13).abs() < 0.005, "std = {}", stats.std_dev);
        assert_eq!(stats.best, 2086);
        assert_eq!(stats.worst, 1974);
        assert_eq!(stats.best_run, 12);
        assert_eq!(stats.worst_run, 11);
    }

    #[test]
    fn computation_is_idempotent() {
        let dataset = FitnessDataset::new();
        let first = FinalFitnessStats::from_dataset(&dataset).unwrap();
        let second = FinalFitnessStats::from_dataset(&dataset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_formats_two_decimals_and_integers() {
        let stats = FinalFitnessStats::from_dataset(&FitnessDataset::new()).unwrap();
        let mut buf = Vec::new();
        stats.write_report(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "===== EXPERIMENT STATISTICS =====",
                "Final fitness mean: 2024.20",
                "Standard deviation: 26.13",
                "Best fitness: 2086",
                "Worst fitness: 1974",
            ]
        );
    }

    #[test]
    fn uses_population_standard_deviation() {
        let stats = FinalFitnessStats::from_values(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_run_has_zero_spread() {
        let stats = FinalFitnessStats::from_values(&[1993]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.best_run, 1);
        assert_eq!(stats.worst_run, 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(FinalFitnessStats::from_values(&[]).is_err());
    }

    #[test]
    fn run_details_name_extreme_runs() {
        let stats = FinalFitnessStats::from_dataset(&FitnessDataset::new()).unwrap();
        let mut buf = Vec::new();
        stats.write_run_details(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Best run: 12 (2086)"));
        assert!(text.contains("Worst run: 11 (1974)"));
    }
}
