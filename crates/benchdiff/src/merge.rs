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

//! Group-atomic merge of fresh results into persisted report state.
//!
//! Replacement is full-replace-per-group, never a per-benchmark diff: once
//! a group is touched by a new run, all of its previously persisted rows
//! are dropped before the new rows land, so benchmarks removed or renamed
//! upstream cannot linger as stale rows. The flip side is that a run which
//! only exercised part of a group discards the rest of that group's
//! history.

use crate::taxonomy::{group_of, KNOWN_GROUPS};
use crate::ScoreMap;
use std::collections::BTreeSet;

/// Known groups touched by a result set.
pub fn touched_groups(results: &ScoreMap) -> BTreeSet<String> {
    results
        .keys()
        .map(|identity| group_of(identity))
        .filter(|group| KNOWN_GROUPS.contains(group))
        .map(str::to_string)
        .collect()
}

/// Merges new results into existing ones, replacing touched groups whole.
///
/// Returns the merged map and the set of touched groups. Untouched groups
/// pass through unchanged.
pub fn merge(new_results: &ScoreMap, existing_results: &ScoreMap) -> (ScoreMap, BTreeSet<String>) {
    let touched = touched_groups(new_results);

    let mut merged = existing_results.clone();
    merged.retain(|identity, _| !touched.contains(group_of(identity)));
    merged.extend(new_results.iter().map(|(k, v)| (k.clone(), *v)));

    (merged, touched)
}
