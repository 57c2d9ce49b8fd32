use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ADJECTIVES: [&str; 8] = [
    "Happy", "Swift", "Noble", "Brave", "Kind", "Witty", "Calm", "Eager",
];

pub const NOUNS: [&str; 8] = [
    "Panda", "Eagle", "Badger", "Helper", "Watcher", "Giver", "Knight", "Wizard",
];

/// Inclusive bounds of the numeric suffix.
pub const SUFFIX_MIN: u32 = 1;
pub const SUFFIX_MAX: u32 = 99;

/// Draw a fresh identity from the thread-local RNG, e.g. `"HappyBadger-92"`.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Draw an identity from `rng`. Every call is an independent draw.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    let suffix = rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX);
    format!("{}{}-{}", adjective, noun, suffix)
}

/// Owns an RNG so callers that regenerate repeatedly (the onboarding flow)
/// can be seeded in tests.
pub struct IdentityGenerator<R: Rng = StdRng> {
    rng: R,
}

impl IdentityGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IdentityGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> String {
        generate_with(&mut self.rng)
    }
}

impl Default for IdentityGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
