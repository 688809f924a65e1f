use std::time::Instant;

use gol_grid::{DefaultEngine, Engine, DEFAULT_FILL_RATE};

// Properties to change for fun.
const WIDTH: usize = 64;
const HEIGHT: usize = 64;
const MAX_EVOLUTIONS: u64 = 1024;
const SEED: u64 = 42;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut field = DefaultEngine::random(WIDTH, HEIGHT, Some(SEED), DEFAULT_FILL_RATE).unwrap();
    println!(
        "Soup {}x{} starts with {} alive cells",
        WIDTH,
        HEIGHT,
        field.population()
    );

    let timer = Instant::now();
    let applied = field.evolve_many(MAX_EVOLUTIONS);
    println!(
        "Applied {} evolutions in {:?}, {} cells alive",
        applied,
        timer.elapsed(),
        field.population()
    );
    if applied < MAX_EVOLUTIONS {
        println!("Field stabilized at evolution {}", field.generation());
    }
}
