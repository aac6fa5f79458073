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

//! CLI argument definitions.
//!
//! One results export runs the legacy single-candidate comparison; a second
//! export switches to dual-candidate mode, where the two candidates face
//! each other first and the better one faces the baseline.

use clap::Parser;
use std::path::PathBuf;

/// Benchmark comparison report generator.
///
/// Parses a structured benchmark results export, compares it against
/// published baseline scores, and maintains a Markdown comparison report
/// that merges fresh results one group at a time.
#[derive(Parser, Debug)]
#[command(name = "benchdiff")]
#[command(author, version, about = "Benchmark comparison report generator", long_about = None)]
pub struct Cli {
    /// Results export for the candidate implementation
    pub results: PathBuf,

    /// Results export for a second, competing candidate
    pub results_b: Option<PathBuf>,

    /// Print the comparison table to stdout
    #[arg(long)]
    pub print_table: bool,

    /// Merge this run into the report document and rewrite it
    #[arg(long)]
    pub update: bool,

    /// Report document path
    #[arg(long, default_value = "docs/BENCHMARK-COMPARISON.md")]
    pub report: PathBuf,

    /// Baseline document path
    #[arg(long, default_value = "BASELINES.md")]
    pub baseline: PathBuf,

    /// Also export the classified rows as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Display label for the first candidate column
    #[arg(long, default_value = "Candidate")]
    pub candidate: String,

    /// Display label for the second candidate column
    #[arg(long)]
    pub candidate_b: Option<String>,

    /// Environment note for the report metadata block
    #[arg(long)]
    pub env: Option<String>,
}
