/// How a [`World`](crate::World) picks its initial alive/dead pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seed {
    /// Fresh entropy on every construction.
    Random,
    /// Reproducible pattern: the same seed always yields the same grid.
    Fixed(u64),
}

impl Seed {
    /// Seed used when randomization is turned off.
    pub const DEFAULT_FIXED: u64 = 110_100;

    /// Map the boolean `randomize` switch onto a seed.
    pub const fn from_randomize(randomize: bool) -> Self {
        if randomize {
            Seed::Random
        } else {
            Seed::Fixed(Self::DEFAULT_FIXED)
        }
    }

    /// Random source for this seed.
    pub fn rng(self) -> fastrand::Rng {
        match self {
            Seed::Random => fastrand::Rng::new(),
            Seed::Fixed(seed) => fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Fixed(Self::DEFAULT_FIXED)
    }
}
