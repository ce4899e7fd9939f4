//! Application layer: comparator configuration and random source setup.
//!
//! # Usage
//!
//! ```
//! use automata_search::app::{ComparatorConfig, rng_for};
//! use automata_search::search;
//!
//! let config = ComparatorConfig::default().with_depth(3).with_seed(42);
//! let mut rng = rng_for(config.seed);
//! let report = search::run(&config, &mut rng)?;
//! assert!(report.agree);
//! # Ok::<(), automata_search::Error>(())
//! ```

pub mod config;

use rand::{SeedableRng, random, rngs::StdRng};

pub use config::ComparatorConfig;

/// Random source for a run: seeded when `seed` is given, otherwise fresh.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(random()),
    }
}
