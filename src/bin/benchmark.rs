//! Serial vs parallel stepping on random soups of growing size

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use sparse_life::{Algorithm, LiveCells, domain::Bounds};

const DENSITY: f64 = 0.3;

/// Average milliseconds per generation
fn benchmark(algorithm: Algorithm, soup: &LiveCells, iterations: u32) -> f64 {
    let mut cells = soup.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        cells = algorithm.step(&cells);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sizes = [64, 128, 256, 512, 1024];
    let iterations = 10;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>6} {:>10} {:>12} {:>12} {:>8}", "side", "cells", "serial ms", "parallel ms", "speedup");
    for side in sizes {
        let half = side / 2;
        let soup = LiveCells::random(Bounds::new(-half, -half, half - 1, half - 1), DENSITY, &mut rng);
        log::debug!("soup {side}x{side}: {} live cells", soup.len());

        let serial = benchmark(Algorithm::Serial, &soup, iterations);
        let parallel = benchmark(Algorithm::Parallel, &soup, iterations);
        println!(
            "{:>6} {:>10} {:>12.2} {:>12.2} {:>7.2}x",
            side,
            soup.len(),
            serial,
            parallel,
            serial / parallel
        );
    }
}
