use std::process::exit;

use clap::Parser;
use crossbeam::channel;
use log::{error, info};
use serde::Serialize;

use mcpool::{PiEstimator, Result, ThreadPool, WorkerPool};

const DEFAULT_SAMPLES: u32 = 1_000_000;
const DEFAULT_TASKS: u32 = 4;

#[derive(Parser)]
#[command(name = "mcpool", version, about = "Estimate pi with Monte Carlo sampling on a worker pool")]
struct Cli {
    /// Samples drawn per task
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: u32,

    /// Number of estimation tasks to fan out (seeds seed..seed+tasks)
    #[arg(long, default_value_t = DEFAULT_TASKS)]
    tasks: u32,

    /// Worker threads; defaults to the number of available CPUs
    #[arg(long)]
    threads: Option<u32>,

    /// Base seed for the first task
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    estimate: f64,
    samples_per_task: u32,
    tasks: u32,
    threads: u32,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let threads = cli.threads.unwrap_or(num_cpus::get().max(1) as u32);
    let tasks = cli.tasks.max(1);

    info!("mcpool {}", env!("CARGO_PKG_VERSION"));
    info!("{} tasks x {} samples on {} workers", tasks, cli.samples, threads);

    let estimator = PiEstimator::new(WorkerPool::new(threads)?);

    let (tx, rx) = channel::unbounded();
    for i in 0..tasks {
        let tx = tx.clone();
        estimator.submit_async(cli.samples, cli.seed + u64::from(i), move |outcome| {
            let _ = tx.send(outcome);
        })?;
    }
    drop(tx);

    let mut sum = 0.0;
    for outcome in rx.iter() {
        sum += outcome?;
    }
    estimator.shutdown();

    let summary = Summary {
        estimate: sum / f64::from(tasks),
        samples_per_task: cli.samples,
        tasks,
        threads,
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&summary).expect("summary serializes")
        );
    } else {
        println!(
            "Estimated pi: {} ({} tasks x {} samples)",
            summary.estimate, summary.tasks, summary.samples_per_task
        );
    }

    Ok(())
}
