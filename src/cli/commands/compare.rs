//! Compare command - Minimax versus alpha-beta on a random game tree

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    app::{ComparatorConfig, rng_for},
    cli::output::{
        format_kv, format_number, format_scores, print_kv, print_section, print_subsection,
    },
    search::{self, ComparisonReport, Score, TrialSummary},
    utils::format_micros,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Compare minimax and alpha-beta search on a random game tree")]
pub struct CompareArgs {
    /// Tree depth (leaves sit at depth 0)
    #[arg(long, short = 'd', default_value_t = 5)]
    pub depth: u32,

    /// Children per internal node
    #[arg(long, short = 'w', default_value_t = 3)]
    pub width: usize,

    /// Smallest leaf score (inclusive)
    #[arg(long, default_value_t = -100, allow_negative_numbers = true)]
    pub min: Score,

    /// Largest leaf score (exclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: Score,

    /// Number of leaf values to show
    #[arg(long, short = 's', default_value_t = 10)]
    pub samples: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent trees to compare
    #[arg(long, short = 't', default_value_t = 1)]
    pub trials: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Default for CompareArgs {
    fn default() -> Self {
        let config = ComparatorConfig::default();
        Self {
            depth: config.depth,
            width: config.width,
            min: config.leaf_min,
            max: config.leaf_max,
            samples: config.sample_size,
            seed: config.seed,
            trials: config.trials,
            format: OutputFormat::default(),
        }
    }
}

impl CompareArgs {
    pub fn config(&self) -> ComparatorConfig {
        let config = ComparatorConfig::new(self.depth, self.width)
            .with_leaf_range(self.min, self.max)
            .with_sample_size(self.samples)
            .with_trials(self.trials);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;
    let mut rng = rng_for(config.seed);

    if config.trials == 1 {
        let report = search::run(&config, &mut rng)?;
        match args.format {
            OutputFormat::Text => print_report(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
    } else {
        let summary = search::run_trials(&config, &mut rng)?;
        match args.format {
            OutputFormat::Text => print_summary(&summary),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        }
    }

    Ok(())
}

fn print_report(report: &ComparisonReport) {
    print!("{}", format_report(report));
}

/// Text report: sampled leaves, one block per strategy, then tree totals.
pub fn format_report(report: &ComparisonReport) -> String {
    let mut lines = vec![format!("Sampled leaves: {}", format_scores(&report.sample))];

    for outcome in &report.outcomes {
        lines.push(String::new());
        lines.push(outcome.strategy.clone());
        lines.push("-".repeat(40));
        lines.push(format_kv("Result", &outcome.value.to_string()));
        lines.push(format_kv("Nodes visited", &format_number(outcome.nodes_visited)));
        if outcome.cutoffs > 0 {
            lines.push(format_kv("Cutoffs", &format_number(outcome.cutoffs)));
        }
        lines.push(format_kv("Elapsed", &format_micros(outcome.elapsed)));
    }

    lines.push(String::new());
    lines.push(format_kv(
        "Tree",
        &format!(
            "depth {} x width {} ({} nodes)",
            report.depth,
            report.width,
            format_number(report.node_count)
        ),
    ));
    lines.push(format_kv("Results agree", &report.agree.to_string()));
    if let Some(ratio) = report.pruning_ratio() {
        lines.push(format_kv("Pruning ratio", &format!("{ratio:.3}")));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn print_summary(summary: &TrialSummary) {
    print_section(&format!(
        "{} trials, depth {} x width {} ({} nodes each)",
        summary.trials,
        summary.depth,
        summary.width,
        format_number(summary.node_count)
    ));

    for strategy in &summary.strategies {
        print_subsection(&strategy.strategy);
        print_kv("Mean nodes", &format!("{:.1}", strategy.mean_nodes_visited));
        print_kv("Mean elapsed", &format!("{:.2} µs", strategy.mean_elapsed_us));
        print_kv("Total cutoffs", &format_number(strategy.total_cutoffs));
    }

    println!();
    print_kv(
        "Mean pruning ratio",
        &format!("{:.3}", summary.mean_pruning_ratio),
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::search::SearchOutcome;

    #[test]
    fn test_default_args_match_default_config() {
        assert_eq!(CompareArgs::default().config(), ComparatorConfig::default());
    }

    #[test]
    fn test_args_build_config() {
        let args = CompareArgs::try_parse_from([
            "compare", "--depth", "3", "--width", "2", "--min", "-5", "--max", "5", "--seed",
            "9", "--trials", "4",
        ])
        .unwrap();

        let config = args.config();
        assert_eq!(config.depth, 3);
        assert_eq!(config.width, 2);
        assert_eq!(config.leaf_range(), -5..5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.trials, 4);
    }

    #[test]
    fn test_report_lists_sample_then_strategy_blocks() {
        let report = ComparisonReport {
            depth: 2,
            width: 2,
            node_count: 7,
            leaf_count: 4,
            sample: vec![4, 1, 1],
            outcomes: vec![
                SearchOutcome {
                    strategy: "minimax".to_string(),
                    value: 3,
                    nodes_visited: 7,
                    cutoffs: 0,
                    elapsed: Duration::from_nanos(1_500),
                },
                SearchOutcome {
                    strategy: "alpha-beta".to_string(),
                    value: 3,
                    nodes_visited: 6,
                    cutoffs: 1,
                    elapsed: Duration::from_nanos(800),
                },
            ],
            agree: true,
        };

        let text = format_report(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Sampled leaves: 4, 1, 1");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "minimax");
        assert_eq!(lines[4], format_kv("Result", "3"));
        assert_eq!(lines[5], format_kv("Nodes visited", "7"));
        assert_eq!(lines[6], format_kv("Elapsed", "1.50 µs"));
        assert_eq!(lines[8], "alpha-beta");
        assert_eq!(lines[10], format_kv("Result", "3"));
        assert_eq!(lines[11], format_kv("Nodes visited", "6"));
        assert_eq!(lines[12], format_kv("Cutoffs", "1"));
        assert_eq!(lines[13], format_kv("Elapsed", "0.80 µs"));
        assert!(text.contains(&format_kv("Results agree", "true")));
        assert!(text.contains(&format_kv("Pruning ratio", "0.857")));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_execute_rejects_too_deep_tree() {
        let args = CompareArgs {
            depth: 1_000_000,
            width: 1,
            ..CompareArgs::default()
        };
        assert!(execute(args).is_err());
    }

    #[test]
    fn test_execute_rejects_invalid_config() {
        let args = CompareArgs {
            width: 0,
            ..CompareArgs::default()
        };
        assert!(execute(args).is_err());
    }
}
