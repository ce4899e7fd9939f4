//! Side-by-side comparison of search strategies on the same tree

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Serialize, Serializer};

use super::{
    strategy::{AlphaBeta, Minimax, SearchStrategy},
    tree::{GameNode, GameTree, Score},
};
use crate::{Error, Result, app::ComparatorConfig};

/// Result of one strategy searching one tree.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub strategy: String,
    pub value: Score,
    pub nodes_visited: usize,
    pub cutoffs: usize,
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// Elapsed wall-clock time in microseconds.
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e6
    }
}

fn serialize_micros<S: Serializer>(
    elapsed: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1e6)
}

/// Everything reported for a single generated tree.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub depth: u32,
    pub width: usize,
    pub node_count: usize,
    pub leaf_count: usize,
    /// Leaf values drawn with replacement
    pub sample: Vec<Score>,
    pub outcomes: Vec<SearchOutcome>,
    /// Whether every strategy returned the same root value
    pub agree: bool,
}

impl ComparisonReport {
    pub fn outcome(&self, strategy: &str) -> Option<&SearchOutcome> {
        self.outcomes.iter().find(|o| o.strategy == strategy)
    }

    /// Alpha-beta visits divided by minimax visits.
    pub fn pruning_ratio(&self) -> Option<f64> {
        let minimax = self.outcome("minimax")?;
        let alpha_beta = self.outcome("alpha-beta")?;
        if minimax.nodes_visited == 0 {
            return None;
        }
        Some(alpha_beta.nodes_visited as f64 / minimax.nodes_visited as f64)
    }
}

/// Aggregate figures for one strategy over several trials.
#[derive(Debug, Clone, Serialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub mean_nodes_visited: f64,
    pub mean_elapsed_us: f64,
    pub total_cutoffs: usize,
}

/// Aggregate of [`run_trials`].
#[derive(Debug, Clone, Serialize)]
pub struct TrialSummary {
    pub trials: usize,
    pub depth: u32,
    pub width: usize,
    pub node_count: usize,
    pub strategies: Vec<StrategySummary>,
    pub mean_pruning_ratio: f64,
}

/// Reset `strategy`, search `root` with the maximizer to move, and time it.
pub fn measure(strategy: &mut dyn SearchStrategy, root: &GameNode) -> SearchOutcome {
    strategy.reset();
    let start = Instant::now();
    let value = strategy.search(root, true);
    let elapsed = start.elapsed();

    log::debug!(
        "{}: value={value} nodes={} cutoffs={} elapsed={elapsed:?}",
        strategy.name(),
        strategy.nodes_visited(),
        strategy.cutoffs()
    );

    SearchOutcome {
        strategy: strategy.name().to_string(),
        value,
        nodes_visited: strategy.nodes_visited(),
        cutoffs: strategy.cutoffs(),
        elapsed,
    }
}

/// Search `tree` with minimax and alpha-beta and sample `sample_size` leaves.
pub fn compare<R: Rng + ?Sized>(
    tree: &GameTree,
    sample_size: usize,
    rng: &mut R,
) -> ComparisonReport {
    let mut strategies: Vec<Box<dyn SearchStrategy>> =
        vec![Box::new(Minimax::new()), Box::new(AlphaBeta::new())];

    let outcomes: Vec<SearchOutcome> = strategies
        .iter_mut()
        .map(|strategy| measure(strategy.as_mut(), tree.root()))
        .collect();
    let agree = outcomes.windows(2).all(|pair| pair[0].value == pair[1].value);

    ComparisonReport {
        depth: tree.depth(),
        width: tree.width(),
        node_count: tree.node_count(),
        leaf_count: tree.leaf_count(),
        sample: tree.sample_leaves(sample_size, rng),
        outcomes,
        agree,
    }
}

/// Generate one tree from `config` and compare the strategies on it.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] for an invalid configuration and
/// [`Error::ResultMismatch`] if the strategies disagree.
pub fn run<R: Rng + ?Sized>(config: &ComparatorConfig, rng: &mut R) -> Result<ComparisonReport> {
    config.validate()?;
    let tree = GameTree::generate(config.depth, config.width, config.leaf_range(), rng)?;
    let report = compare(&tree, config.sample_size, rng);
    ensure_agreement(&report)?;
    Ok(report)
}

/// Run `config.trials` independent comparisons and average the results.
///
/// # Errors
///
/// Same as [`run`], for any trial.
pub fn run_trials<R: Rng + ?Sized>(
    config: &ComparatorConfig,
    rng: &mut R,
) -> Result<TrialSummary> {
    config.validate()?;

    let mut reports = Vec::with_capacity(config.trials);
    for trial in 0..config.trials {
        let report = run(config, rng)?;
        log::info!(
            "trial {}/{}: value={} ratio={:.3}",
            trial + 1,
            config.trials,
            report.outcomes.first().map_or(0, |o| o.value),
            report.pruning_ratio().unwrap_or(1.0)
        );
        reports.push(report);
    }

    let trials = reports.len() as f64;
    let names: Vec<String> = reports
        .first()
        .map(|r| r.outcomes.iter().map(|o| o.strategy.clone()).collect())
        .unwrap_or_default();

    let strategies = names
        .into_iter()
        .map(|name| {
            let outcomes: Vec<&SearchOutcome> =
                reports.iter().filter_map(|r| r.outcome(&name)).collect();
            StrategySummary {
                mean_nodes_visited: outcomes.iter().map(|o| o.nodes_visited as f64).sum::<f64>()
                    / trials,
                mean_elapsed_us: outcomes.iter().map(|o| o.elapsed_micros()).sum::<f64>() / trials,
                total_cutoffs: outcomes.iter().map(|o| o.cutoffs).sum(),
                strategy: name,
            }
        })
        .collect();

    let mean_pruning_ratio = reports
        .iter()
        .map(|r| r.pruning_ratio().unwrap_or(1.0))
        .sum::<f64>()
        / trials;

    Ok(TrialSummary {
        trials: reports.len(),
        depth: config.depth,
        width: config.width,
        node_count: reports.first().map_or(0, |r| r.node_count),
        strategies,
        mean_pruning_ratio,
    })
}

fn ensure_agreement(report: &ComparisonReport) -> Result<()> {
    if report.agree {
        return Ok(());
    }
    let value_of = |name: &str| report.outcome(name).map_or(0, |o| o.value);
    Err(Error::ResultMismatch {
        minimax: value_of("minimax"),
        alpha_beta: value_of("alpha-beta"),
    })
}
