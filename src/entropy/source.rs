use rand::rngs::{StdRng, ThreadRng};
use rand::{RngCore, SeedableRng};

/// Where generation draws its randomness from.
///
/// `Thread` is the default and is backed by the thread-local CSPRNG.
/// `Seeded` is deterministic: the same seed and request always produce the
/// same password.
pub enum Source {
    Thread(ThreadRng),
    Seeded(StdRng),
}

impl Source {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::debug!("using seeded generator");
                Source::Seeded(StdRng::seed_from_u64(seed))
            }
            None => Source::Thread(rand::rng()),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Source::Thread(_) => "thread-local CSPRNG",
            Source::Seeded(_) => "seeded StdRng (deterministic)",
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::from_seed(None)
    }
}

impl RngCore for Source {
    fn next_u32(&mut self) -> u32 {
        match self {
            Source::Thread(rng) => rng.next_u32(),
            Source::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Source::Thread(rng) => rng.next_u64(),
            Source::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Source::Thread(rng) => rng.fill_bytes(dst),
            Source::Seeded(rng) => rng.fill_bytes(dst),
        }
    }
}
