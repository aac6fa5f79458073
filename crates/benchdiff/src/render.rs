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

//! Markdown rendering of the merged, classified comparison.
//!
//! Rendering is a pure function of its inputs: the timestamp comes in
//! through [`ReportMeta`], never from the clock, so the same inputs always
//! produce the same document. Groups render in catalog order (unknown
//! groups last, alphabetically) with one bold header row each; benchmarks
//! render lexicographically by short name.

use crate::classify::{classify, classify_pair, Comparison, Contender, DualComparison, Diff, Verdict};
use crate::config::CompareConfig;
use crate::taxonomy::{group_of, group_sort_key, qualified_label, short_name};
use crate::ScoreMap;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Display metadata for a rendered report.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Report title.
    pub title: String,
    /// Timestamp string for the metadata block. Supplied by the caller so
    /// rendering stays deterministic.
    pub generated_at: String,
    /// Optional environment note (hardware, runtime).
    pub environment: Option<String>,
    /// Display label for the baseline column.
    pub baseline_label: String,
    /// Display labels for the candidate columns, in column order.
    pub candidate_labels: Vec<String>,
}

impl ReportMeta {
    /// Creates report metadata with default column labels.
    pub fn new(title: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: generated_at.into(),
            environment: None,
            baseline_label: "Baseline".to_string(),
            candidate_labels: vec!["Candidate".to_string()],
        }
    }

    /// Sets the environment note.
    pub fn with_environment(mut self, note: impl Into<String>) -> Self {
        self.environment = Some(note.into());
        self
    }

    /// Sets the baseline column label.
    pub fn with_baseline_label(mut self, label: impl Into<String>) -> Self {
        self.baseline_label = label.into();
        self
    }

    /// Sets the candidate column labels.
    pub fn with_candidate_labels(mut self, labels: Vec<String>) -> Self {
        self.candidate_labels = labels;
        self
    }

    /// Label for candidate column `index`, falling back to a generic name.
    pub fn candidate_label(&self, index: usize) -> &str {
        match self.candidate_labels.get(index) {
            Some(label) => label.as_str(),
            None if index == 0 => "Candidate A",
            None => "Candidate B",
        }
    }

    /// Label naming "the candidates" collectively in summary rows.
    fn summary_candidate_label(&self) -> &str {
        if self.candidate_labels.len() > 1 {
            "Candidate"
        } else {
            self.candidate_label(0)
        }
    }
}

/// Verdict counters across all rendered rows.
///
/// `total` counts every row, including rows with no baseline; the three
/// verdict buckets only count comparable rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerdictTally {
    /// Rows where the candidate beat the baseline.
    pub candidate_wins: usize,
    /// Rows where the baseline held.
    pub baseline_wins: usize,
    /// Rows inside the noise band.
    pub ties: usize,
    /// All rendered rows.
    pub total: usize,
}

impl VerdictTally {
    /// Records one rendered row; `None` means no comparison was possible.
    pub fn record(&mut self, comparison: Option<&Comparison>) {
        self.total += 1;
        match comparison.map(|c| c.verdict) {
            Some(Verdict::Candidate) => self.candidate_wins += 1,
            Some(Verdict::Baseline) => self.baseline_wins += 1,
            Some(Verdict::Tie) => self.ties += 1,
            None => {}
        }
    }

    /// Rows that had a baseline to compare against.
    pub fn comparable(&self) -> usize {
        self.candidate_wins + self.baseline_wins + self.ties
    }

    /// Integer percentage of a bucket over the total row count.
    pub fn pct(&self, count: usize) -> usize {
        count * 100 / self.total.max(1)
    }
}

/// One classified row in machine-readable form.
#[derive(Debug, Clone, Serialize)]
pub struct RowExport {
    /// `Group.benchmark` identity.
    pub identity: String,
    /// Group component.
    pub group: String,
    /// Benchmark short name.
    pub benchmark: String,
    /// External baseline score, when one exists.
    pub baseline: Option<f64>,
    /// Candidate scores in column order.
    pub candidates: Vec<Option<f64>>,
    /// Single-candidate comparison against the baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    /// Two-stage comparison for dual-candidate runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dual: Option<DualComparison>,
}

/// Formats a score with precision scaled to its magnitude.
pub fn format_score(score: f64) -> String {
    if score < 0.01 {
        format!("{:.3}", score)
    } else if score < 1.0 {
        format!("{:.2}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn format_opt_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format_score(value),
        None => "N/A".to_string(),
    }
}

fn format_diff(comparison: &Comparison) -> String {
    match (comparison.diff, comparison.verdict) {
        (Diff::Undefined, _) => "+N/A".to_string(),
        (Diff::Pct(pct), Verdict::Tie) => format!("{:+.0}%", pct),
        (Diff::Pct(pct), Verdict::Candidate) => format!("**{:.0}%**", pct),
        (Diff::Pct(pct), Verdict::Baseline) => format!("+{:.0}%", pct),
    }
}

fn format_winner(comparison: &Comparison, candidate_label: &str, baseline_label: &str) -> String {
    match comparison.verdict {
        Verdict::Candidate => format!("**{}**", candidate_label),
        Verdict::Baseline => baseline_label.to_string(),
        Verdict::Tie => "Tie".to_string(),
    }
}

/// Groups the union of identities across the given maps, in display order.
fn grouped_identities(maps: &[&ScoreMap]) -> Vec<(String, Vec<String>)> {
    let mut grouped: HashMap<String, BTreeSet<String>> = HashMap::new();
    for map in maps {
        for identity in map.keys() {
            grouped
                .entry(group_of(identity).to_string())
                .or_default()
                .insert(identity.clone());
        }
    }

    let mut groups: Vec<(String, Vec<String>)> = grouped
        .into_iter()
        .map(|(group, identities)| (group, identities.into_iter().collect()))
        .collect();
    groups.sort_by_key(|(group, _)| group_sort_key(group));
    groups
}

/// Generates the grouped comparison table for one candidate.
///
/// Returns the table text and the verdict tally across its rows. Rows with
/// no baseline render `N/A` / `-` cells instead of a comparison.
pub fn comparison_table(
    candidate: &ScoreMap,
    baselines: &ScoreMap,
    meta: &ReportMeta,
    config: &CompareConfig,
) -> (String, VerdictTally) {
    let mut lines = Vec::new();
    let mut tally = VerdictTally::default();

    lines.push(format!(
        "| Benchmark | {} (ns) | {} (ns) | Diff | Winner |",
        meta.baseline_label,
        meta.candidate_label(0)
    ));
    lines.push("|-----------|---------------:|----------------:|-----:|:------:|".to_string());

    for (group, identities) in grouped_identities(&[candidate]) {
        lines.push(format!(
            "| **{}** ({}) | | | | |",
            group,
            qualified_label(&group)
        ));

        for identity in identities {
            let score = match candidate.get(&identity) {
                Some(&score) => score,
                None => continue,
            };
            let bench = short_name(&identity);

            match baselines.get(&identity) {
                Some(&base) => {
                    let comparison = classify(score, base, config);
                    tally.record(Some(&comparison));
                    lines.push(format!(
                        "| {} | {} | {} | {} | {} |",
                        bench,
                        format_score(base),
                        format_score(score),
                        format_diff(&comparison),
                        format_winner(&comparison, meta.candidate_label(0), &meta.baseline_label),
                    ));
                }
                None => {
                    tally.record(None);
                    lines.push(format!(
                        "| {} | N/A | {} | - | - |",
                        bench,
                        format_score(score)
                    ));
                }
            }
        }
    }

    (lines.join("\n"), tally)
}

/// Generates the grouped comparison table for two competing candidates.
///
/// Each row shows both candidate scores, the head-to-head best, and the
/// winner's verdict against the baseline. The tally counts the
/// winner-vs-baseline stage.
pub fn dual_comparison_table(
    candidate_a: &ScoreMap,
    candidate_b: &ScoreMap,
    baselines: &ScoreMap,
    meta: &ReportMeta,
    config: &CompareConfig,
) -> (String, VerdictTally) {
    let label_a = meta.candidate_label(0);
    let label_b = meta.candidate_label(1);

    let mut lines = Vec::new();
    let mut tally = VerdictTally::default();

    lines.push(format!(
        "| Benchmark | {} (ns) | {} (ns) | {} (ns) | Best | Diff | Winner |",
        meta.baseline_label, label_a, label_b
    ));
    lines.push(
        "|-----------|---------------:|----------------:|----------------:|:----:|-----:|:------:|"
            .to_string(),
    );

    for (group, identities) in grouped_identities(&[candidate_a, candidate_b]) {
        lines.push(format!(
            "| **{}** ({}) | | | | | | |",
            group,
            qualified_label(&group)
        ));

        for identity in identities {
            let a = candidate_a.get(&identity).copied();
            let b = candidate_b.get(&identity).copied();
            let base = baselines.get(&identity).copied();

            let dual = match classify_pair(a, b, base, config) {
                Some(dual) => dual,
                None => continue,
            };

            let best = match dual.head_to_head {
                Some(head) => match head.verdict {
                    Verdict::Candidate => format!("**{}**", label_a),
                    Verdict::Baseline => format!("**{}**", label_b),
                    Verdict::Tie => "Tie".to_string(),
                },
                None => "-".to_string(),
            };

            let winner_label = match dual.winner {
                Contender::A => label_a,
                Contender::B => label_b,
            };

            let (diff_cell, winner_cell) = match dual.versus_baseline.as_ref() {
                Some(comparison) => (
                    format_diff(comparison),
                    format_winner(comparison, winner_label, &meta.baseline_label),
                ),
                None => ("-".to_string(), "-".to_string()),
            };
            tally.record(dual.versus_baseline.as_ref());

            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} | {} |",
                short_name(&identity),
                format_opt_score(base),
                format_opt_score(a),
                format_opt_score(b),
                best,
                diff_cell,
                winner_cell,
            ));
        }
    }

    (lines.join("\n"), tally)
}

fn summary_table(tally: &VerdictTally, meta: &ReportMeta) -> String {
    let candidate_label = meta.summary_candidate_label();

    let mut md = String::new();
    md.push_str("| Metric | Count | % |\n");
    md.push_str("|--------|------:|--:|\n");
    md.push_str(&format!(
        "| **{} Wins** | {} | {}% |\n",
        candidate_label,
        tally.candidate_wins,
        tally.pct(tally.candidate_wins)
    ));
    md.push_str(&format!(
        "| **{} Wins** | {} | {}% |\n",
        meta.baseline_label,
        tally.baseline_wins,
        tally.pct(tally.baseline_wins)
    ));
    md.push_str(&format!(
        "| **Ties** | {} | {}% |\n",
        tally.ties,
        tally.pct(tally.ties)
    ));
    md.push_str(&format!("| **Total** | {} | 100% |\n", tally.total));
    md
}

fn render_document(
    table: String,
    tally: &VerdictTally,
    touched: &BTreeSet<String>,
    meta: &ReportMeta,
    config: &CompareConfig,
    extra_legend: Option<String>,
) -> String {
    let groups_line = if touched.is_empty() {
        "All".to_string()
    } else {
        touched.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    let mut md = String::new();
    md.push_str(&format!("# {}\n\n", meta.title));
    md.push_str(&format!("**Last Updated:** {}\n", meta.generated_at));
    md.push_str(&format!("**Groups Updated:** {}\n", groups_line));
    if let Some(environment) = &meta.environment {
        md.push_str(&format!("**Environment:** {}\n", environment));
    }

    md.push_str("\n## Summary\n\n");
    md.push_str(&summary_table(tally, meta));

    md.push_str("\n## Full Comparison Table\n\n");
    md.push_str(&table);

    md.push_str("\n\n---\n\n**Legend:**\n");
    md.push_str(&format!(
        "- **Diff** = (({} - {}) / {} x 100)\n",
        meta.summary_candidate_label(),
        meta.baseline_label,
        meta.baseline_label
    ));
    md.push_str("- **Winner** = Lower time (faster) wins\n");
    md.push_str(&format!(
        "- Bold values indicate significant wins (>{:.0}% difference)\n",
        config.noise_band_pct
    ));
    if let Some(extra) = extra_legend {
        md.push_str(&extra);
    }
    md.push_str(
        "\n**Note:** Baseline and candidate runs may come from different hardware; \
         differences near the noise band are not meaningful.\n",
    );
    md
}

/// Renders the full report document for one candidate.
pub fn render_report(
    candidate: &ScoreMap,
    baselines: &ScoreMap,
    touched: &BTreeSet<String>,
    meta: &ReportMeta,
    config: &CompareConfig,
) -> String {
    let (table, tally) = comparison_table(candidate, baselines, meta, config);
    render_document(table, &tally, touched, meta, config, None)
}

/// Renders the full report document for two competing candidates.
pub fn render_dual_report(
    candidate_a: &ScoreMap,
    candidate_b: &ScoreMap,
    baselines: &ScoreMap,
    touched: &BTreeSet<String>,
    meta: &ReportMeta,
    config: &CompareConfig,
) -> String {
    let (table, tally) = dual_comparison_table(candidate_a, candidate_b, baselines, meta, config);
    let best_note = format!(
        "- **Best** = head-to-head winner between {} and {}\n",
        meta.candidate_label(0),
        meta.candidate_label(1)
    );
    render_document(table, &tally, touched, meta, config, Some(best_note))
}

/// Classifies every identity across the candidate maps into exportable rows.
///
/// Rows come out in display order. One candidate map produces
/// single-candidate comparisons; two or more produce the two-stage form for
/// the first pair.
pub fn export_rows(
    candidates: &[&ScoreMap],
    baselines: &ScoreMap,
    config: &CompareConfig,
) -> Vec<RowExport> {
    let mut rows = Vec::new();

    for (_, identities) in grouped_identities(candidates) {
        for identity in identities {
            let scores: Vec<Option<f64>> = candidates
                .iter()
                .map(|map| map.get(&identity).copied())
                .collect();
            let baseline = baselines.get(&identity).copied();

            let (comparison, dual) = if candidates.len() >= 2 {
                (None, classify_pair(scores[0], scores[1], baseline, config))
            } else {
                let comparison = scores
                    .first()
                    .copied()
                    .flatten()
                    .zip(baseline)
                    .map(|(score, base)| classify(score, base, config));
                (comparison, None)
            };

            rows.push(RowExport {
                group: group_of(&identity).to_string(),
                benchmark: short_name(&identity).to_string(),
                identity,
                baseline,
                candidates: scores,
                comparison,
                dual,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> ScoreMap {
        entries
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect()
    }

    fn meta() -> ReportMeta {
        ReportMeta::new("Benchmark Comparison", "2025-11-02 10:00")
    }

    #[test]
    fn test_format_score_precision_by_magnitude() {
        assert_eq!(format_score(0.001), "0.001");
        assert_eq!(format_score(0.005), "0.005");
        assert_eq!(format_score(0.85), "0.85");
        assert_eq!(format_score(12.5), "12.5");
        assert_eq!(format_score(150.54), "150.5");
    }

    #[test]
    fn test_single_table_win_row() {
        let candidate = map(&[("CircuitOps.create", 12.5)]);
        let baselines = map(&[("CircuitOps.create", 15.0)]);
        let (table, tally) = comparison_table(&candidate, &baselines, &meta(), &CompareConfig::default());

        assert!(table.contains("| **CircuitOps** (Core Primitives) | | | | |"));
        assert!(table.contains("| create | 15.0 | 12.5 | **-17%** | **Candidate** |"));
        assert_eq!(tally.candidate_wins, 1);
        assert_eq!(tally.total, 1);
    }

    #[test]
    fn test_single_table_no_baseline_row() {
        let candidate = map(&[("CircuitOps.create", 12.5)]);
        let (table, tally) = comparison_table(&candidate, &ScoreMap::new(), &meta(), &CompareConfig::default());

        assert!(table.contains("| create | N/A | 12.5 | - | - |"));
        assert_eq!(tally.total, 1);
        assert_eq!(tally.comparable(), 0);
    }

    #[test]
    fn test_group_ordering_known_then_unknown() {
        let candidate = map(&[
            ("Zebra.op", 1.0),
            ("NameOps.lookup", 1.0),
            ("Alpha.op", 1.0),
            ("CircuitOps.create", 1.0),
        ]);
        let (table, _) = comparison_table(&candidate, &ScoreMap::new(), &meta(), &CompareConfig::default());

        let circuit = table.find("**CircuitOps**").unwrap();
        let name = table.find("**NameOps**").unwrap();
        let alpha = table.find("**Alpha**").unwrap();
        let zebra = table.find("**Zebra**").unwrap();
        assert!(circuit < name && name < alpha && alpha < zebra);
        assert!(table.contains("| **Alpha** (Other) |"));
    }

    #[test]
    fn test_benchmarks_sorted_within_group() {
        let candidate = map(&[
            ("NameOps.walk", 1.0),
            ("NameOps.get", 1.0),
            ("NameOps.lookup", 1.0),
        ]);
        let (table, _) = comparison_table(&candidate, &ScoreMap::new(), &meta(), &CompareConfig::default());

        let get = table.find("| get |").unwrap();
        let lookup = table.find("| lookup |").unwrap();
        let walk = table.find("| walk |").unwrap();
        assert!(get < lookup && lookup < walk);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let candidate = map(&[
            ("CircuitOps.create", 12.5),
            ("NameOps.lookup", 3.25),
            ("Zebra.op", 7.0),
        ]);
        let baselines = map(&[("CircuitOps.create", 15.0)]);
        let touched = BTreeSet::from(["CircuitOps".to_string()]);
        let config = CompareConfig::default();

        let first = render_report(&candidate, &baselines, &touched, &meta(), &config);
        let second = render_report(&candidate, &baselines, &touched, &meta(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_document_sections() {
        let candidate = map(&[("CircuitOps.create", 12.5)]);
        let baselines = map(&[("CircuitOps.create", 15.0)]);
        let touched = BTreeSet::from(["CircuitOps".to_string()]);

        let doc = render_report(
            &candidate,
            &baselines,
            &touched,
            &meta().with_environment("JDK 25, Azure VM"),
            &CompareConfig::default(),
        );

        assert!(doc.starts_with("# Benchmark Comparison\n"));
        assert!(doc.contains("**Last Updated:** 2025-11-02 10:00"));
        assert!(doc.contains("**Groups Updated:** CircuitOps"));
        assert!(doc.contains("**Environment:** JDK 25, Azure VM"));
        assert!(doc.contains("## Summary"));
        assert!(doc.contains("| **Candidate Wins** | 1 | 100% |"));
        assert!(doc.contains("| **Total** | 1 | 100% |"));
        assert!(doc.contains("## Full Comparison Table"));
        assert!(doc.contains("**Legend:**"));
        assert!(doc.contains("significant wins (>5% difference)"));
    }

    #[test]
    fn test_empty_touched_set_reports_all() {
        let candidate = map(&[("Zebra.op", 1.0)]);
        let doc = render_report(
            &candidate,
            &ScoreMap::new(),
            &BTreeSet::new(),
            &meta(),
            &CompareConfig::default(),
        );
        assert!(doc.contains("**Groups Updated:** All"));
    }

    #[test]
    fn test_summary_percentages() {
        let mut tally = VerdictTally::default();
        for _ in 0..3 {
            tally.record(Some(&Comparison {
                verdict: Verdict::Tie,
                diff: Diff::Pct(0.0),
            }));
        }
        tally.record(None);

        assert_eq!(tally.total, 4);
        assert_eq!(tally.comparable(), 3);
        assert_eq!(tally.pct(tally.ties), 75);
    }

    #[test]
    fn test_dual_table_rows() {
        let a = map(&[("PipeOps.emit", 3.5)]);
        let b = map(&[("PipeOps.emit", 3.8), ("PipeOps.drain", 5.9)]);
        let baselines = map(&[("PipeOps.emit", 4.1)]);
        let meta = meta().with_candidate_labels(vec!["A".to_string(), "B".to_string()]);

        let (table, tally) = dual_comparison_table(&a, &b, &baselines, &meta, &CompareConfig::default());

        assert!(table.contains("| Benchmark | Baseline (ns) | A (ns) | B (ns) | Best | Diff | Winner |"));
        // 3.5 vs 3.8 beats the band; 3.5 vs 4.1 is -14.6%.
        assert!(table.contains("| emit | 4.1 | 3.5 | 3.8 | **A** | **-15%** | **A** |"));
        // Only B ran drain, and there is no baseline for it.
        assert!(table.contains("| drain | N/A | N/A | 5.9 | - | - | - |"));
        assert_eq!(tally.candidate_wins, 1);
        assert_eq!(tally.total, 2);
    }

    #[test]
    fn test_dual_report_round_trips_through_prior_extractor() {
        let a = map(&[("PipeOps.emit", 3.5)]);
        let b = map(&[("PipeOps.emit", 3.8)]);
        let doc = render_dual_report(
            &a,
            &b,
            &ScoreMap::new(),
            &BTreeSet::from(["PipeOps".to_string()]),
            &meta().with_candidate_labels(vec!["A".to_string(), "B".to_string()]),
            &CompareConfig::default(),
        );

        let state = crate::extract::parse_prior_report(&doc);
        assert_eq!(state.primary, a);
        assert_eq!(state.secondary, b);
    }

    #[test]
    fn test_export_rows_single() {
        let candidate = map(&[("CircuitOps.create", 12.5), ("NameOps.lookup", 3.25)]);
        let baselines = map(&[("CircuitOps.create", 15.0)]);
        let rows = export_rows(&[&candidate], &baselines, &CompareConfig::default());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].identity, "CircuitOps.create");
        assert_eq!(rows[0].baseline, Some(15.0));
        assert_eq!(rows[0].comparison.unwrap().verdict, Verdict::Candidate);
        assert!(rows[1].comparison.is_none());
    }

    #[test]
    fn test_export_rows_dual() {
        let a = map(&[("PipeOps.emit", 3.5)]);
        let b = map(&[("PipeOps.emit", 3.8)]);
        let rows = export_rows(&[&a, &b], &ScoreMap::new(), &CompareConfig::default());

        assert_eq!(rows.len(), 1);
        let dual = rows[0].dual.unwrap();
        assert_eq!(dual.winner, Contender::A);
        assert!(dual.versus_baseline.is_none());
    }
}
