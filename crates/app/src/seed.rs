//! Dice seed for a launch: the configured one, or fresh entropy.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Configured(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Configured(seed) | Self::Generated(seed) => seed,
        }
    }
}

static LAUNCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Clock, pid and a process-local counter folded through splitmix64.
pub fn generate_runtime_seed() -> u64 {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_nanos());
    let folded_clock = (nanos as u64) ^ ((nanos >> 64) as u64);
    let pid = u64::from(process::id()).rotate_left(17);
    let count = LAUNCH_COUNTER.fetch_add(1, Ordering::Relaxed).rotate_left(7);
    splitmix64(folded_clock ^ pid ^ count)
}

pub fn resolve_seed(configured: Option<u64>, generated: u64) -> SeedChoice {
    configured.map_or(SeedChoice::Generated(generated), SeedChoice::Configured)
}

fn splitmix64(mut z: u64) -> u64 {
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
