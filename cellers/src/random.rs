use rand::{
    distributions::{Bernoulli, BernoulliError, Distribution as _},
    Rng,
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Source of the random wall decisions.
///
/// `true` means "build the wall". It's consulted at most once per decision and never
/// reentrantly. Any `FnMut() -> bool` closure is a source on its own.
pub trait WallSource {
    fn wall(&mut self) -> bool;
}

impl<F> WallSource for F
where
    F: FnMut() -> bool,
{
    fn wall(&mut self) -> bool {
        self()
    }
}

/// Wall source backed by a random number generator, with configurable chance of a wall.
#[derive(Debug, Clone)]
pub struct RngWalls<R> {
    rng: R,
    dist: Bernoulli,
}

impl<R: Rng> RngWalls<R> {
    /// Fair coin, every wall has the same chance to be built or not.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            dist: Bernoulli::new(0.5).expect("0.5 is a valid probability"),
        }
    }

    /// Biased coin, lower chance makes wider open areas, higher chance makes longer corridors.
    pub fn with_wall_chance(rng: R, chance: f64) -> Result<Self, BernoulliError> {
        Ok(Self {
            rng,
            dist: Bernoulli::new(chance)?,
        })
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> WallSource for RngWalls<R> {
    fn wall(&mut self) -> bool {
        self.dist.sample(&mut self.rng)
    }
}
