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

//! Measurement extraction from the structured results export.
//!
//! The export is a JSON array of run records. Only the fully-qualified
//! benchmark name and the primary metric score are consumed; all other
//! fields are ignored.

use crate::error::{Error, Result};
use crate::taxonomy::derive_identity;
use crate::ScoreMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One record of the results export.
#[derive(Debug, Deserialize)]
struct ResultRecord {
    /// Dotted fully-qualified benchmark name.
    benchmark: String,
    /// Nested metric block carrying the scalar score.
    #[serde(rename = "primaryMetric")]
    primary_metric: PrimaryMetric,
}

#[derive(Debug, Deserialize)]
struct PrimaryMetric {
    score: f64,
}

/// Parses a results export into identity → score.
///
/// Identity is the last two dot-separated segments of the fully-qualified
/// benchmark name. Scores pass through unvalidated; zero and negative
/// values are accepted. A record missing a required field fails the whole
/// parse; there is no partial recovery.
pub fn parse_results(json: &str) -> serde_json::Result<ScoreMap> {
    let records: Vec<ResultRecord> = serde_json::from_str(json)?;

    let mut results = ScoreMap::new();
    for record in records {
        results.insert(
            derive_identity(&record.benchmark),
            record.primary_metric.score,
        );
    }

    Ok(results)
}

/// Reads and parses a results export from disk.
///
/// A missing or unreadable file is fatal: the export is the one required
/// input of a run.
pub fn load_results(path: &Path) -> Result<ScoreMap> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_results(&content).map_err(|e| Error::schema(path, e))
}
