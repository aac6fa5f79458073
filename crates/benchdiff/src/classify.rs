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

//! Tolerance-banded score classification.
//!
//! Scores are time per operation; lower is better. Two scores within the
//! indifference band of each other are a tie. A baseline below the
//! near-zero floor is immeasurably fast: no finite percentage against it is
//! meaningful, so the comparison carries [`Diff::Undefined`] instead of a
//! number.

use crate::config::CompareConfig;
use serde::{Deserialize, Serialize};

/// Categorical outcome of comparing a candidate score to a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Candidate is faster beyond the noise band.
    Candidate,
    /// Baseline is faster beyond the noise band, or immeasurably fast.
    Baseline,
    /// The scores are within the noise band of each other.
    Tie,
}

/// Signed relative difference, or the marker for an incomputable one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Diff {
    /// Percentage difference relative to the baseline; negative means the
    /// candidate is faster.
    Pct(f64),
    /// No meaningful magnitude: the baseline is below the measurable floor.
    Undefined,
}

/// Outcome of one candidate-vs-baseline comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Categorical verdict.
    pub verdict: Verdict,
    /// Signed difference backing the verdict.
    pub diff: Diff,
}

/// Classifies a candidate score against a baseline score.
pub fn classify(candidate: f64, baseline: f64, config: &CompareConfig) -> Comparison {
    if baseline < config.near_zero_score {
        if candidate < config.near_zero_score {
            return Comparison {
                verdict: Verdict::Tie,
                diff: Diff::Pct(0.0),
            };
        }
        // The candidate cannot meaningfully be compared to an immeasurably
        // fast baseline; the baseline wins with no finite magnitude.
        return Comparison {
            verdict: Verdict::Baseline,
            diff: Diff::Undefined,
        };
    }

    let pct = (candidate - baseline) / baseline * 100.0;
    let verdict = if pct.abs() < config.noise_band_pct {
        Verdict::Tie
    } else if pct < 0.0 {
        Verdict::Candidate
    } else {
        Verdict::Baseline
    };

    Comparison {
        verdict,
        diff: Diff::Pct(pct),
    }
}

/// Which of two competing candidates a comparison stage selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contender {
    /// The first candidate.
    A,
    /// The second candidate.
    B,
}

/// Two-stage outcome for a pair of competing candidates.
///
/// Stage one compares the candidates head to head under the same
/// indifference band; stage two compares the faster of the two against the
/// external baseline. Both stages stay separately inspectable; neither is
/// collapsed into the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualComparison {
    /// Candidate A against candidate B (B in the baseline position), when
    /// both ran.
    pub head_to_head: Option<Comparison>,
    /// The side whose score goes on to face the baseline.
    pub winner: Contender,
    /// The winning candidate against the external baseline, when one
    /// exists.
    pub versus_baseline: Option<Comparison>,
}

/// Classifies a pair of competing candidate scores against a baseline.
///
/// The winner is the numerically faster side even when the head-to-head
/// verdict is a tie; a tie on equal scores keeps candidate A. A side that
/// did not run concedes the head-to-head by absence. Returns `None` only
/// when neither candidate ran.
pub fn classify_pair(
    a: Option<f64>,
    b: Option<f64>,
    baseline: Option<f64>,
    config: &CompareConfig,
) -> Option<DualComparison> {
    let (winner, winner_score, head_to_head) = match (a, b) {
        (Some(a), Some(b)) => {
            let head = classify(a, b, config);
            let winner = if a <= b { Contender::A } else { Contender::B };
            (winner, a.min(b), Some(head))
        }
        (Some(a), None) => (Contender::A, a, None),
        (None, Some(b)) => (Contender::B, b, None),
        (None, None) => return None,
    };

    let versus_baseline = baseline.map(|base| classify(winner_score, base, config));

    Some(DualComparison {
        head_to_head,
        winner,
        versus_baseline,
    })
}
