//! Headless Game of Life driver.
//!
//! Builds a world from `LIFE_*` environment variables, then advances it on a
//! fixed interval, printing the board after every generation. Stops after
//! `LIFE_GENERATIONS` generations or when every cell is dead.

mod config;

use std::io::{self, Write};
use std::time::Instant;

use life_world::World;
use tracing::{info, warn};

use crate::config::RunnerConfig;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_runner=info".parse()?)
                .add_directive("life_world=info".parse()?),
        )
        .init();

    let config = RunnerConfig::from_env()?;
    info!(
        width = config.width,
        height = config.height,
        seed = ?config.seed,
        pattern = config.pattern.map(|p| p.name),
        "Starting world"
    );

    let mut world = World::new(config.width, config.height, config.seed)?;
    if let Some(pattern) = config.pattern {
        let (pw, ph) = pattern.extent();
        world.clear();
        world.place(
            pattern,
            config.width.saturating_sub(pw) / 2,
            config.height.saturating_sub(ph) / 2,
        )?;
    }
    print_world(&world)?;

    while config.generations == 0 || world.generation() < config.generations {
        let start = Instant::now();

        let transition = world.advance_generation();
        print_world(&world)?;
        info!(
            generation = transition.generation,
            births = transition.births,
            deaths = transition.deaths,
            population = transition.population,
            "Advanced generation"
        );

        if world.is_extinct() {
            warn!(generation = world.generation(), "World is extinct");
            break;
        }

        // Sleep to hold the configured interval
        if let Some(rest) = config.interval.checked_sub(start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}

fn print_world(world: &World) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "generation {}", world.generation())?;
    write!(stdout, "{world}")?;
    stdout.flush()
}
