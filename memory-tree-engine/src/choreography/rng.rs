use bevy::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};

/// Single randomness source for population generation. Seedable so tests can
/// replay a generation run; entropy-seeded in the app.
#[derive(Resource)]
pub struct ChoreographyRng(pub SmallRng);

impl ChoreographyRng {
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for ChoreographyRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
