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

//! Benchmark score reconciliation and comparison reporting.
//!
//! Ingests microbenchmark measurements from two independently produced
//! sources, merges fresh results into previously persisted report state one
//! group at a time, classifies each benchmark against its baseline under a
//! tolerance-banded comparison rule, and renders the result as a grouped
//! Markdown table.
//!
//! ## Pipeline
//!
//! 1. [`extract`] turns the three input formats (structured results export,
//!    published baseline document, the tool's own prior report) into
//!    identity → score maps.
//! 2. [`taxonomy`] derives canonical identities and display labels.
//! 3. [`merge`] replaces touched groups whole, carrying untouched groups
//!    over from the prior report.
//! 4. [`classify`] produces a verdict and signed difference per benchmark.
//! 5. [`render`] emits the final report document.
//!
//! All steps are pure transformations over in-memory maps; the only
//! persistent state is the report document on disk.

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod merge;
pub mod render;
pub mod taxonomy;

pub use classify::{
    classify, classify_pair, Comparison, Contender, Diff, DualComparison, Verdict,
};
pub use config::{CompareConfig, NEAR_ZERO_SCORE, NOISE_BAND_PCT};
pub use error::{Error, Result};
pub use extract::{
    load_baselines, load_prior_report, load_results, parse_baselines, parse_prior_report,
    parse_results, PriorState,
};
pub use merge::{merge, touched_groups};
pub use render::{
    comparison_table, dual_comparison_table, export_rows, render_dual_report, render_report,
    ReportMeta, RowExport, VerdictTally,
};

use std::collections::HashMap;

/// Identity (`Group.benchmark`) to scalar score, time per operation in
/// nanoseconds. Lower is better. Duplicate identities from one source
/// overwrite silently; the last record wins.
pub type ScoreMap = HashMap<String, f64>;
