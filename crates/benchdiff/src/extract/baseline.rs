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

//! Baseline extraction from the published benchmark document.
//!
//! The document is free text that embeds harness result lines of the shape
//!
//! ```text
//! io.vendor.jmh.CircuitOps.create    avgt   25   12.500 ± 0.250  ns/op
//! ```
//!
//! The last two path segments name the group and benchmark. Immeasurably
//! fast scores appear as the near-zero sentinel `≈ 10⁻³` instead of a
//! number and normalize to [`NEAR_ZERO_SCORE`]; the sentinel is never
//! evaluated as an expression. Lines that do not match are skipped, so this
//! extractor cannot fail; zero matches is the caller's soft warning, not an
//! error.

use crate::config::NEAR_ZERO_SCORE;
use crate::ScoreMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static BASELINE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.]+\.(\w+)\.(\w+)\s+avgt\s+\d+\s+((?:[\d.]+\s*)?≈\s*10⁻³|[\d.]+)\s*±")
        .expect("baseline line pattern")
});

/// Parses baseline scores out of the published document text.
///
/// Returns whatever matched; unrecognized lines are ignored.
pub fn parse_baselines(text: &str) -> ScoreMap {
    let mut baselines = ScoreMap::new();

    for caps in BASELINE_LINE.captures_iter(text) {
        let score_str = &caps[3];
        let score = if score_str.contains('≈') || score_str.contains("10⁻³") {
            NEAR_ZERO_SCORE
        } else {
            match score_str.parse::<f64>() {
                Ok(value) => value,
                Err(_) => continue,
            }
        };

        baselines.insert(format!("{}.{}", &caps[1], &caps[2]), score);
    }

    baselines
}

/// Reads and parses the baseline document.
///
/// A missing document is non-fatal: it yields an empty map and a console
/// warning, and every comparison downstream degrades to "not comparable".
pub fn load_baselines(path: &Path) -> ScoreMap {
    match fs::read_to_string(path) {
        Ok(content) => parse_baselines(&content),
        Err(_) => {
            eprintln!("Warning: baseline document {} not found", path.display());
            ScoreMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_lines() {
        let text = "\
# Published Benchmarks

io.vendor.jmh.CircuitOps.create      avgt   25    15.000 ± 0.250  ns/op
io.vendor.jmh.core.NameOps.lookup    avgt   25     3.210 ± 0.040  ns/op
";
        let baselines = parse_baselines(text);
        assert_eq!(baselines.len(), 2);
        assert_eq!(baselines["CircuitOps.create"], 15.0);
        assert_eq!(baselines["NameOps.lookup"], 3.21);
    }

    #[test]
    fn test_near_zero_sentinel() {
        let text = "io.vendor.jmh.PipeOps.emit    avgt   25    ≈ 10⁻³  ± 0.001  ns/op\n";
        let baselines = parse_baselines(text);
        assert_eq!(baselines["PipeOps.emit"], NEAR_ZERO_SCORE);
    }

    #[test]
    fn test_unmatched_lines_are_skipped() {
        let text = "\
Some prose about the setup.

| a markdown | table |
io.vendor.jmh.StateOps.read   avgt   25   0.850 ± 0.010  ns/op
Trailing notes.
";
        let baselines = parse_baselines(text);
        assert_eq!(baselines.len(), 1);
        assert_eq!(baselines["StateOps.read"], 0.85);
    }

    #[test]
    fn test_no_matches_yields_empty_map() {
        assert!(parse_baselines("nothing to see here").is_empty());
        assert!(parse_baselines("").is_empty());
    }

    #[test]
    fn test_load_missing_document_is_empty() {
        let baselines = load_baselines(Path::new("does/not/exist.md"));
        assert!(baselines.is_empty());
    }

    #[test]
    fn test_load_document_from_disk() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            "io.vendor.jmh.FlowOps.pull   avgt   25   2.500 ± 0.020  ns/op\n",
        )
        .unwrap();

        let baselines = load_baselines(file.path());
        assert_eq!(baselines["FlowOps.pull"], 2.5);
    }
}
