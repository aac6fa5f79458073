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

//! Re-extraction of the tool's own previously rendered report.
//!
//! Best-effort re-parse of a self-authored format, recognizing two line
//! shapes: a group-header row (bold group name in the first cell) that sets
//! the current group, and a data row (benchmark, baseline cell, candidate
//! score, optional second candidate score) that yields one entry per
//! candidate column. Data rows before any group header are orphans and are
//! dropped; every other line is skipped silently.

use crate::ScoreMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static GROUP_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\| \*\*(\w+)\*\*").expect("group header pattern"));

static DATA_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\| (\w+) \| ([\d.]+|N/A) \| ([\d.]+|N/A) \|(?: ([\d.]+|N/A) \|)?")
        .expect("data row pattern")
});

/// Candidate scores recovered from a previously rendered report.
///
/// Single-candidate reports fill only `primary`; dual-candidate reports
/// fill both maps. Baseline cells are not recovered; baselines are always
/// re-read from their own document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorState {
    /// Scores from the first candidate column.
    pub primary: ScoreMap,
    /// Scores from the second candidate column, when the report has one.
    pub secondary: ScoreMap,
}

impl PriorState {
    /// Whether nothing was recovered.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

/// Recovers merged report state from previously rendered report text.
pub fn parse_prior_report(text: &str) -> PriorState {
    let mut state = PriorState::default();
    let mut current_group: Option<String> = None;

    for line in text.lines() {
        if let Some(caps) = GROUP_HEADER.captures(line) {
            current_group = Some(caps[1].to_string());
            continue;
        }

        if let (Some(group), Some(caps)) = (current_group.as_deref(), DATA_ROW.captures(line)) {
            let identity = format!("{}.{}", group, &caps[1]);
            if let Ok(score) = caps[3].parse::<f64>() {
                state.primary.insert(identity.clone(), score);
            }
            if let Some(cell) = caps.get(4) {
                if let Ok(score) = cell.as_str().parse::<f64>() {
                    state.secondary.insert(identity, score);
                }
            }
        }
    }

    state
}

/// Reads and re-parses the prior report.
///
/// No file yet is a valid state: the first run of the tool starts from an
/// empty report.
pub fn load_prior_report(path: &Path) -> PriorState {
    match fs::read_to_string(path) {
        Ok(content) => parse_prior_report(&content),
        Err(_) => PriorState::default(),
    }
}
