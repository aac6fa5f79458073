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

//! End-to-end pipeline tests: extract, merge, classify, render.

use benchdiff::{
    comparison_table, merge, parse_baselines, parse_prior_report, parse_results, render_report,
    CompareConfig, ReportMeta, ScoreMap,
};
use std::collections::BTreeSet;

fn meta() -> ReportMeta {
    ReportMeta::new("Benchmark Comparison", "2025-11-02 10:00")
}

fn map(entries: &[(&str, f64)]) -> ScoreMap {
    entries
        .iter()
        .map(|&(k, v)| (k.to_string(), v))
        .collect()
}

#[test]
fn single_row_candidate_win() {
    let results = parse_results(
        r#"[{"benchmark": "pkg.Foo.CircuitOps.create", "primaryMetric": {"score": 12.5}}]"#,
    )
    .unwrap();
    let baselines = parse_baselines(
        "pkg.Foo.CircuitOps.create    avgt   25   15.000 ± 0.250  ns/op\n",
    );

    let (table, tally) =
        comparison_table(&results, &baselines, &meta(), &CompareConfig::default());

    assert!(table.contains("| create | 15.0 | 12.5 | **-17%** | **Candidate** |"));
    assert_eq!(tally.candidate_wins, 1);
    assert_eq!(tally.baseline_wins, 0);
    assert_eq!(tally.ties, 0);
    assert_eq!(tally.total, 1);
}

#[test]
fn single_row_within_band_is_tie() {
    let results = parse_results(
        r#"[{"benchmark": "pkg.Foo.CircuitOps.create", "primaryMetric": {"score": 12.5}}]"#,
    )
    .unwrap();
    let baselines = parse_baselines(
        "pkg.Foo.CircuitOps.create    avgt   25   12.800 ± 0.100  ns/op\n",
    );

    let (table, tally) =
        comparison_table(&results, &baselines, &meta(), &CompareConfig::default());

    assert!(table.contains("| create | 12.8 | 12.5 | -2% | Tie |"));
    assert_eq!(tally.ties, 1);
}

#[test]
fn merge_replaces_touched_group_and_keeps_the_rest() {
    let new = map(&[("CircuitOps.create", 10.0)]);
    let prior = map(&[
        ("CircuitOps.create", 12.0),
        ("CircuitOps.destroy", 20.0),
        ("NameOps.lookup", 5.0),
    ]);

    let (merged, touched) = merge(&new, &prior);

    assert_eq!(touched, BTreeSet::from(["CircuitOps".to_string()]));
    assert_eq!(
        merged,
        map(&[("CircuitOps.create", 10.0), ("NameOps.lookup", 5.0)])
    );
}

#[test]
fn missing_baseline_document_degrades_to_not_comparable() {
    let results = parse_results(
        r#"[
            {"benchmark": "pkg.Foo.CircuitOps.create", "primaryMetric": {"score": 12.5}},
            {"benchmark": "pkg.Foo.NameOps.lookup", "primaryMetric": {"score": 3.2}}
        ]"#,
    )
    .unwrap();
    let baselines = parse_baselines("");

    let doc = render_report(
        &results,
        &baselines,
        &BTreeSet::new(),
        &meta(),
        &CompareConfig::default(),
    );

    assert!(doc.contains("| create | N/A | 12.5 | - | - |"));
    assert!(doc.contains("| lookup | N/A | 3.2 | - | - |"));
    assert!(doc.contains("| **Candidate Wins** | 0 | 0% |"));
    assert!(doc.contains("| **Total** | 2 | 100% |"));
}

#[test]
fn rendered_report_round_trips_through_prior_extractor() {
    // Values chosen to survive the precision-by-magnitude formatting.
    let merged = map(&[
        ("CircuitOps.create", 12.5),
        ("CircuitOps.destroy", 150.5),
        ("NameOps.lookup", 3.2),
        ("StateOps.read", 0.85),
        ("Custom.thing", 0.005),
    ]);
    let baselines = map(&[("CircuitOps.create", 15.0)]);

    let doc = render_report(
        &merged,
        &baselines,
        &BTreeSet::from(["CircuitOps".to_string()]),
        &meta(),
        &CompareConfig::default(),
    );

    let state = parse_prior_report(&doc);
    assert_eq!(state.primary, merged);
    assert!(state.secondary.is_empty());
}

#[test]
fn incremental_update_over_two_runs() {
    // First run: CircuitOps only, no prior report.
    let first = parse_results(
        r#"[
            {"benchmark": "pkg.Foo.CircuitOps.create", "primaryMetric": {"score": 12.5}},
            {"benchmark": "pkg.Foo.CircuitOps.destroy", "primaryMetric": {"score": 20.1}}
        ]"#,
    )
    .unwrap();
    let baselines = ScoreMap::new();
    let config = CompareConfig::default();

    let (merged, touched) = merge(&first, &ScoreMap::new());
    let doc = render_report(&merged, &baselines, &touched, &meta(), &config);

    // Second run: NameOps plus a re-run of a shrunken CircuitOps.
    let second = parse_results(
        r#"[
            {"benchmark": "pkg.Foo.CircuitOps.create", "primaryMetric": {"score": 11.0}},
            {"benchmark": "pkg.Foo.NameOps.lookup", "primaryMetric": {"score": 3.2}}
        ]"#,
    )
    .unwrap();
    let prior = parse_prior_report(&doc);
    let (merged, touched) = merge(&second, &prior.primary);

    assert_eq!(touched, BTreeSet::from(["CircuitOps".to_string(), "NameOps".to_string()]));
    // destroy was dropped with its group; lookup was added.
    assert_eq!(
        merged,
        map(&[("CircuitOps.create", 11.0), ("NameOps.lookup", 3.2)])
    );

    let doc = render_report(&merged, &baselines, &touched, &meta(), &config);
    assert!(doc.contains("**Groups Updated:** CircuitOps, NameOps"));
}
