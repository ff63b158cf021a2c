use std::path::PathBuf;

use crate::data::FitnessDataset;
use crate::plotting::{FigureSpec, MAX_DPI};

pub const ENV_OUTPUT: &str = "FITNESS_OUTPUT";
pub const ENV_DPI: &str = "FITNESS_DPI";
pub const ENV_RUNS: &str = "FITNESS_RUNS";
pub const ENV_SHOW_AVERAGE: &str = "FITNESS_SHOW_AVERAGE";
pub const ENV_NO_WINDOW: &str = "FITNESS_NO_WINDOW";
pub const ENV_STATS_JSON: &str = "FITNESS_STATS_JSON";

pub const DEFAULT_OUTPUT: &str = "fitness_evolution.png";
pub const DEFAULT_STATS_JSON: &str = "fitness_statistics.json";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub output_path: PathBuf,
    pub figure: FigureSpec,
    /// 0-based run indices to draw.
    pub runs: Vec<usize>,
    pub show_average: bool,
    pub show_window: bool,
    pub stats_json: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            figure: FigureSpec::default(),
            runs: vec![11],
            show_average: false,
            show_window: true,
            stats_json: None,
        }
    }
}

impl PlotConfig {
    /// Defaults overridden by `FITNESS_*` environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_OUTPUT) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(dpi) = lookup(ENV_DPI) {
            config.figure.dpi = dpi
                .trim()
                .parse()
                .map_err(|_| format!("{} must be a positive integer, got {:?}", ENV_DPI, dpi))?;
        }
        if let Some(runs) = lookup(ENV_RUNS) {
            config.runs = parse_run_list(&runs)?;
        }
        if let Some(flag) = lookup(ENV_SHOW_AVERAGE) {
            config.show_average = parse_flag(ENV_SHOW_AVERAGE, &flag)?;
        }
        if let Some(flag) = lookup(ENV_NO_WINDOW) {
            config.show_window = !parse_flag(ENV_NO_WINDOW, &flag)?;
        }
        if let Some(path) = lookup(ENV_STATS_JSON) {
            config.stats_json = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Apply command-line switches on top of the environment.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|a| a.as_ref() == "--no-window") {
            self.show_window = false;
        }
    }

    /// Headless variant: no window, and a JSON export unless one was configured.
    pub fn into_report(mut self) -> Self {
        self.show_window = false;
        if self.stats_json.is_none() {
            self.stats_json = Some(PathBuf::from(DEFAULT_STATS_JSON));
        }
        self
    }

    pub fn validate(&self, dataset: &FitnessDataset) -> Result<(), String> {
        if self.figure.dpi == 0 {
            return Err(format!("{} must be greater than zero", ENV_DPI));
        }
        if self.figure.dpi > MAX_DPI {
            return Err(format!(
                "{} must be at most {}, got {}",
                ENV_DPI, MAX_DPI, self.figure.dpi
            ));
        }
        if self.runs.is_empty() {
            return Err("at least one run must be selected".to_string());
        }
        if let Some(&bad) = self.runs.iter().find(|&&r| r >= dataset.num_runs()) {
            return Err(format!(
                "run index {} out of range (dataset has {} runs)",
                bad,
                dataset.num_runs()
            ));
        }
        Ok(())
    }
}

fn parse_run_list(raw: &str) -> Result<Vec<usize>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("{}: invalid run index {:?}", ENV_RUNS, s))
        })
        .collect()
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(format!("{} must be a boolean, got {:?}", name, other)),
    }
}
