/// Number of sampled generations per run.
pub const SAMPLES_PER_RUN: usize = 10;

/// Reading recorded when no valid individual existed yet at that sample.
pub const SENTINEL: u32 = 0;

/// Best-fitness readings of the knapsack GA experiment:
/// `FITNESS_DATA[run][sample]`, samples taken at generations 20, 40, ..., 200.
const FITNESS_DATA: [[u32; SAMPLES_PER_RUN]; 20] = [
    [1953, 1953, 1953, 1953, 2014, 2014, 2014, 2014, 2040, 2040], // Run 1
    [1991, 1991, 1991, 1991, 1994, 2037, 2037, 2037, 2037, 2037], // Run 2
    [1954, 1954, 2008, 2008, 2008, 2008, 2008, 2008, 2008, 2008], // Run 3
    [2013, 2013, 2013, 2013, 2013, 2013, 2013, 2013, 2013, 2013], // Run 4
    [2036, 2036, 2036, 2036, 2036, 2036, 2036, 2036, 2036, 2036], // Run 5
    [2026, 2026, 2026, 2026, 2026, 2026, 2026, 2026, 2026, 2026], // Run 6
    [1983, 1983, 1983, 1983, 2013, 2013, 2013, 2013, 2013, 2013], // Run 7
    [2028, 2028, 2028, 2028, 2028, 2028, 2028, 2028, 2028, 2028], // Run 8
    [2005, 2005, 2005, 2005, 2005, 2005, 2006, 2056, 2056, 2056], // Run 9
    [1940, 1940, 1960, 1960, 1960, 1960, 2060, 2060, 2060, 2060], // Run 10
    [0, 1879, 1879, 1879, 1879, 1974, 1974, 1974, 1974, 1974],    // Run 11
    [1958, 1958, 1977, 2005, 2005, 2005, 2005, 2086, 2086, 2086], // Run 12
    [1871, 1919, 1996, 1996, 1996, 1996, 1996, 1996, 1996, 2001], // Run 13
    [1874, 1874, 1945, 1945, 1945, 1994, 1994, 1994, 1994, 1994], // Run 14
    [1960, 1960, 1960, 1960, 2000, 2006, 2010, 2010, 2010, 2010], // Run 15
    [0, 1980, 1980, 1980, 1980, 1980, 1980, 1993, 1993, 1993],    // Run 16
    [1966, 1966, 1966, 1970, 1970, 2056, 2056, 2056, 2056, 2056], // Run 17
    [1917, 1917, 2021, 2021, 2021, 2021, 2021, 2021, 2021, 2021], // Run 18
    [2007, 2007, 2007, 2007, 2007, 2007, 2007, 2007, 2007, 2007], // Run 19
    [0, 2023, 2023, 2023, 2025, 2025, 2025, 2025, 2025, 2025],    // Run 20
];

/// Generations at which fitness was sampled.
const GENERATIONS: [u32; SAMPLES_PER_RUN] = [20, 40, 60, 80, 100, 120, 140, 160, 180, 200];

/// Fitness-evolution table of a genetic-algorithm experiment.
///
/// The table is embedded at compile time and never mutated, so every
/// accessor hands out borrowed views.
#[derive(Debug, Clone, Copy)]
pub struct FitnessDataset {
    runs: &'static [[u32; SAMPLES_PER_RUN]],
    generations: &'static [u32; SAMPLES_PER_RUN],
}

impl Default for FitnessDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl FitnessDataset {
    /// The embedded 20-run experiment.
    pub fn new() -> Self {
        Self {
            runs: &FITNESS_DATA,
            generations: &GENERATIONS,
        }
    }

    pub fn num_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn generations(&self) -> &[u32; SAMPLES_PER_RUN] {
        self.generations
    }

    pub fn runs(&self) -> &[[u32; SAMPLES_PER_RUN]] {
        self.runs
    }

    /// Readings of a single run (0-based index).
    pub fn run(&self, index: usize) -> Option<&[u32; SAMPLES_PER_RUN]> {
        self.runs.get(index)
    }

    /// Readings of a run paired with their generation, sentinels included.
    pub fn trajectory(&self, index: usize) -> Option<Vec<(u32, u32)>> {
        self.run(index).map(|readings| {
            self.generations
                .iter()
                .copied()
                .zip(readings.iter().copied())
                .collect()
        })
    }

    /// Final-generation reading of every run, in run order.
    pub fn final_values(&self) -> Vec<u32> {
        self.runs.iter().map(|run| run[SAMPLES_PER_RUN - 1]).collect()
    }

    /// Mean reading per generation across all runs.
    ///
    /// Sentinels are averaged in as literal zeros.
    pub fn mean_trajectory(&self) -> Vec<(u32, f64)> {
        let n = self.runs.len().max(1) as f64;
        self.generations
            .iter()
            .enumerate()
            .map(|(sample, &generation)| {
                let total: f64 = self.runs.iter().map(|run| run[sample] as f64).sum();
                (generation, total / n)
            })
            .collect()
    }
}

pub fn is_sentinel(value: u32) -> bool {
    value == SENTINEL
}
