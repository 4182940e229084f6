//! Runner configuration read from `LIFE_*` environment variables.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use eyre::eyre;
use life_world::{Pattern, Seed};

#[derive(Debug)]
pub struct RunnerConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Seed,
    /// Built-in pattern placed at the centre of an otherwise empty world.
    pub pattern: Option<&'static Pattern>,
    /// Generations to run; 0 runs until the world is extinct.
    pub generations: u64,
    pub interval: Duration,
}

impl RunnerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let seed = match lookup("LIFE_SEED") {
            None => Seed::default(),
            Some(raw) if raw.trim().eq_ignore_ascii_case("random") => Seed::Random,
            Some(raw) => Seed::Fixed(
                raw.trim()
                    .parse()
                    .map_err(|e| eyre!("invalid LIFE_SEED={raw:?}: {e}"))?,
            ),
        };

        let pattern = match lookup("LIFE_PATTERN") {
            None => None,
            Some(name) => Some(
                Pattern::by_name(name.trim())
                    .ok_or_else(|| eyre!("unknown LIFE_PATTERN={name:?}"))?,
            ),
        };

        Ok(Self {
            width: parse_var(&lookup, "LIFE_WIDTH", 32)?,
            height: parse_var(&lookup, "LIFE_HEIGHT", 16)?,
            seed,
            pattern,
            generations: parse_var(&lookup, "LIFE_GENERATIONS", 100)?,
            interval: Duration::from_millis(parse_var(&lookup, "LIFE_INTERVAL_MS", 100)?),
        })
    }
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre!("invalid {key}={raw:?}: {e}")),
    }
}
