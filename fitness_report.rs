/// Regenerate the fitness figure and a JSON statistics export without opening a window
/// Usage: cargo run --bin fitness-report --release
use fitness_plot::{config::PlotConfig, data::FitnessDataset, pipeline::run_report};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📊 Generating fitness report from embedded experiment data...");
    println!();

    let config = PlotConfig::from_env()?.into_report();

    let dataset = FitnessDataset::new();
    let outcome = {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        run_report(&config, &dataset, &mut handle)?
    };

    println!();
    println!("✅ Report generated successfully!");
    println!();
    println!("📂 Output files:");
    println!("  {:<40} - Fitness evolution figure", outcome.image_path.display());
    if let Some(path) = &outcome.stats_path {
        println!("  {:<40} - Final fitness statistics", path.display());
    }
    println!();

    Ok(())
}
