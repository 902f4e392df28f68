//! @acp:module "Catalog Chooser"
//! @acp:summary "Random, seeded and fixed choice of the daily book"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Catalog choice
//!
//! The daily book is picked through a [`Chooser`] so runs can be random in
//! production and deterministic in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` candidates
pub trait Chooser {
    /// `None` only when `len` is zero
    fn choose(&mut self, len: usize) -> Option<usize>;
}

/// Uniform choice from the thread-local generator
#[derive(Debug, Default)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| rand::rng().random_range(0..len))
    }
}

/// Uniform choice from a seeded generator, reproducible across runs
#[derive(Debug)]
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Chooser for SeededChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Always the same index, wrapped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0 % len)
    }
}

impl<F> Chooser for F
where
    F: FnMut(usize) -> Option<usize>,
{
    fn choose(&mut self, len: usize) -> Option<usize> {
        self(len).filter(|&i| i < len)
    }
}

/// Build the chooser for a run: seeded when a seed is configured
pub fn chooser_for(seed: Option<u64>) -> Box<dyn Chooser> {
    match seed {
        Some(seed) => Box::new(SeededChooser::new(seed)),
        None => Box::new(RandomChooser),
    }
}
