use anyhow::ensure;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use min_pq::MinHeap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Natural,
    Reversed,
    Shuffled,
}

#[derive(Parser, Debug)]
#[command(name = "heap-benchmark")]
#[command(about = "A min-heap performance testing tool")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    /// Arrangement of the values handed to `build`
    #[arg(long, value_enum, default_value = "shuffled")]
    order: Order,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut log_builder = env_logger::builder();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
    debug!("arguments: {args:#?}");

    let size = args.size;
    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut values: Vec<u64> = (0..size as u64).collect();
    match args.order {
        Order::Natural => {}
        Order::Reversed => values.reverse(),
        Order::Shuffled => values.shuffle(&mut rng),
    }
    let extra: Vec<u64> = (0..size).map(|_| rng.random_range(0..size as u64 * 2)).collect();

    info!("running with {:?} input and {} values", args.order, size);

    let start = Instant::now();
    let mut heap = MinHeap::build(values);
    ensure!(heap.len() == size, "built heap holds {} values", heap.len());
    let built = Instant::now();

    for (i, value) in extra.into_iter().enumerate() {
        heap.insert(value);
        ensure!(heap.len() == size + i + 1, "insert did not grow the heap");
    }
    let inserted = Instant::now();

    let mut previous = None;
    let mut extracted = 0;
    while let Some(value) = heap.extract_min() {
        if let Some(previous) = previous {
            ensure!(previous <= value, "extracted {value} after {previous}");
        }
        previous = Some(value);
        extracted += 1;
    }
    ensure!(extracted == size * 2, "extracted {extracted} of {} values", size * 2);
    let end = Instant::now();

    info!(
        "build took {} seconds",
        built.saturating_duration_since(start).as_secs_f32()
    );
    info!(
        "inserts took {} seconds",
        inserted.saturating_duration_since(built).as_secs_f32()
    );
    info!(
        "extractions took {} seconds",
        end.saturating_duration_since(inserted).as_secs_f32()
    );
    info!(
        "total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
    Ok(())
}
