// Dweve Benchdiff - Benchmark Comparison Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Compare command: the one report-generation pass.
//!
//! Loads the results export(s), compares against the published baselines,
//! prints the run summary, and with `--update` merges the run into the
//! persisted report document group by group. The table and summary printed
//! to the console always reflect only this run; the persisted document is
//! the merged state.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use benchdiff::{
    comparison_table, dual_comparison_table, export_rows, load_baselines, load_prior_report,
    load_results, merge, render_dual_report, render_report, CompareConfig, ReportMeta, ScoreMap,
    VerdictTally,
};
use colored::Colorize;
use std::collections::BTreeSet;
use std::fs;

/// Runs one report-generation pass from parsed arguments.
pub fn run(args: &Cli) -> Result<()> {
    let config = CompareConfig::default();
    let meta = build_meta(args);

    println!(
        "Parsing {} results from {}...",
        meta.candidate_label(0),
        args.results.display()
    );
    let results_a = load_results(&args.results)?;
    println!("  Found {} benchmarks", results_a.len());

    let results_b = match &args.results_b {
        Some(path) => {
            println!(
                "Parsing {} results from {}...",
                meta.candidate_label(1),
                path.display()
            );
            let results = load_results(path)?;
            println!("  Found {} benchmarks", results.len());
            Some(results)
        }
        None => None,
    };

    println!("Parsing baselines from {}...", args.baseline.display());
    let baselines = load_baselines(&args.baseline);
    println!("  Found {} baselines", baselines.len());

    let (table, tally) = match &results_b {
        Some(b) => dual_comparison_table(&results_a, b, &baselines, &meta, &config),
        None => comparison_table(&results_a, &baselines, &meta, &config),
    };

    if args.print_table {
        println!("\n{}", table);
    }

    print_summary(&tally, &meta);

    if let Some(path) = &args.json {
        let candidates: Vec<&ScoreMap> = match &results_b {
            Some(b) => vec![&results_a, b],
            None => vec![&results_a],
        };
        let rows = export_rows(&candidates, &baselines, &config);
        let json = serde_json::to_string_pretty(&rows)?;
        fs::write(path, json).map_err(|e| CliError::io(path, e))?;
        println!("Exported {} rows to {}", rows.len(), path.display());
    }

    if args.update {
        update_report(args, &results_a, results_b.as_ref(), &baselines, &meta, &config)?;
    } else {
        println!(
            "\nTo update {}, run with the --update flag",
            args.report.display()
        );
    }

    Ok(())
}

/// Builds the report metadata for this run.
fn build_meta(args: &Cli) -> ReportMeta {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

    let labels = match &args.results_b {
        Some(_) => vec![
            args.candidate.clone(),
            args.candidate_b
                .clone()
                .unwrap_or_else(|| "Candidate B".to_string()),
        ],
        None => vec![args.candidate.clone()],
    };

    let title = match labels.as_slice() {
        [a, b] => format!("Benchmark Comparison: {} vs {} vs Baseline", a, b),
        [a] => format!("Benchmark Comparison: {} vs Baseline", a),
        _ => "Benchmark Comparison".to_string(),
    };

    let mut meta = ReportMeta::new(title, generated_at).with_candidate_labels(labels);
    if let Some(environment) = &args.env {
        meta = meta.with_environment(environment.clone());
    }
    meta
}

/// Prints the win/loss/tie banner for this run to the console.
fn print_summary(tally: &VerdictTally, meta: &ReportMeta) {
    if tally.total == 0 {
        println!("No benchmarks compared.");
        return;
    }

    let candidate_label = if meta.candidate_labels.len() > 1 {
        "Candidate"
    } else {
        meta.candidate_label(0)
    };

    println!();
    println!("{}", "=".repeat(60));
    println!("BENCHMARK COMPARISON SUMMARY");
    println!("{}", "=".repeat(60));
    println!(
        "  {} wins: {} ({}%)",
        candidate_label,
        tally.candidate_wins.to_string().green(),
        tally.pct(tally.candidate_wins)
    );
    println!(
        "  {} wins: {} ({}%)",
        meta.baseline_label,
        tally.baseline_wins.to_string().red(),
        tally.pct(tally.baseline_wins)
    );
    println!(
        "  Ties: {} ({}%)",
        tally.ties.to_string().yellow(),
        tally.pct(tally.ties)
    );
    println!("  Total: {}", tally.total);
    println!("{}", "=".repeat(60));
}

/// Merges this run into the persisted report document and rewrites it.
fn update_report(
    args: &Cli,
    results_a: &ScoreMap,
    results_b: Option<&ScoreMap>,
    baselines: &ScoreMap,
    meta: &ReportMeta,
    config: &CompareConfig,
) -> Result<()> {
    let prior = load_prior_report(&args.report);

    let (merged_a, touched_a) = merge(results_a, &prior.primary);

    let (document, touched, total) = match results_b {
        Some(b) => {
            let (merged_b, touched_b) = merge(b, &prior.secondary);
            let touched: BTreeSet<String> = touched_a.union(&touched_b).cloned().collect();
            let mut identities: BTreeSet<&String> = merged_a.keys().collect();
            identities.extend(merged_b.keys());
            let total = identities.len();
            let document =
                render_dual_report(&merged_a, &merged_b, baselines, &touched, meta, config);
            (document, touched, total)
        }
        None => {
            let total = merged_a.len();
            let document = render_report(&merged_a, baselines, &touched_a, meta, config);
            (document, touched_a, total)
        }
    };

    if let Some(parent) = args.report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }
    }
    fs::write(&args.report, document).map_err(|e| CliError::io(&args.report, e))?;

    println!("Updated {}", args.report.display());
    println!(
        "  Updated groups: {}",
        touched.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!("  Total benchmarks: {}", total);
    Ok(())
}
