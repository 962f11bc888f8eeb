use crate::domain::ports::NumberGenerator;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        if min > max {
            return Vec::new();
        }
        let span = usize::from(max - min) + 1;
        index::sample(&mut self.rng, span, count.min(span))
            .into_iter()
            .map(|offset| min + offset as u8)
            .collect()
    }
}
