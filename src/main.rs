use fitness_plot::{config::PlotConfig, data::FitnessDataset, pipeline::run_pipeline};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = PlotConfig::from_env()?;
    config.apply_args(std::env::args());

    let dataset = FitnessDataset::new();

    let runs: Vec<String> = config.runs.iter().map(|r| (r + 1).to_string()).collect();
    println!(
        "🎨 Plotting fitness evolution of run(s) {} ({} runs x {} generations)",
        runs.join(", "),
        dataset.num_runs(),
        dataset.generations().len()
    );

    let outcome = {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        run_pipeline(&config, &dataset, &mut handle)?
    };

    if config.show_window {
        show_window(outcome)?;
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn show_window(
    outcome: fitness_plot::pipeline::PipelineOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    fitness_plot::viewer::show_fitness_window(outcome.series)
}

#[cfg(not(feature = "gui"))]
fn show_window(
    outcome: fitness_plot::pipeline::PipelineOutcome,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!(
        "⚠️  Warning: built without the `gui` feature, open {} to view the chart",
        outcome.image_path.display()
    );
    Ok(())
}
