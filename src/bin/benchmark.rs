//! Generation throughput benchmark across grid sizes

use std::time::Instant;

use toroidal_life::{Seed, Universe, UniverseConfig, UniverseResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn benchmark_tick(size: u32, iterations: u32) -> UniverseResult<f64> {
    let config = UniverseConfig::new(size, size).with_seed(Seed::Random(0xC0FFEE));
    let mut universe = Universe::with_config(config)?;

    let start = Instant::now();
    for _ in 0..iterations {
        universe.tick();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;

    info!(size, live = universe.live_count(), "benchmark finished");
    Ok(ms)
}

fn main() -> UniverseResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "M cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_tick(size, iterations)?;
        let cells = size as f64 * size as f64;

        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }

    Ok(())
}
