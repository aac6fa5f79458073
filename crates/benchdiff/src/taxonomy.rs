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

//! Benchmark identity resolution and the fixed group taxonomy.
//!
//! An identity is `Group.benchmark`. The taxonomy classifies each known
//! group under a category and, for some, a subcategory; it only shapes
//! display labels and ordering, never scoring. Groups outside the catalog
//! are accepted: they label under [`OTHER_CATEGORY`] and sort after the
//! known groups, so the pipeline keeps working when new groups appear
//! before the catalog is updated.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known benchmark groups, in display order.
pub const KNOWN_GROUPS: &[&str] = &[
    "CircuitOps",
    "ConduitOps",
    "CortexOps",
    "FlowOps",
    "NameOps",
    "PipeOps",
    "ReservoirOps",
    "ScopeOps",
    "StateOps",
    "SubscriberOps",
];

/// Category label for groups absent from the taxonomy.
pub const OTHER_CATEGORY: &str = "Other";

/// Classification of one known group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupClass {
    /// Top-level category.
    pub category: &'static str,
    /// Optional subcategory.
    pub subcategory: Option<&'static str>,
}

static TAXONOMY: Lazy<HashMap<&'static str, GroupClass>> = Lazy::new(|| {
    let classes: &[(&str, &str, Option<&str>)] = &[
        ("CircuitOps", "Core Primitives", None),
        ("NameOps", "Core Primitives", Some("Naming")),
        ("StateOps", "Core Primitives", Some("State")),
        ("ScopeOps", "Core Primitives", Some("State")),
        ("ConduitOps", "Messaging", Some("Channels")),
        ("PipeOps", "Messaging", Some("Channels")),
        ("SubscriberOps", "Messaging", Some("Delivery")),
        ("FlowOps", "Messaging", Some("Delivery")),
        ("CortexOps", "Runtime", None),
        ("ReservoirOps", "Runtime", None),
    ];

    classes
        .iter()
        .map(|&(group, category, subcategory)| {
            (
                group,
                GroupClass {
                    category,
                    subcategory,
                },
            )
        })
        .collect()
});

/// Derives the canonical identity from a dotted fully-qualified name.
///
/// Takes the last two dot-separated segments (`Group.benchmark`); a name
/// with fewer than two segments is used verbatim.
pub fn derive_identity(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split('.').collect();
    if parts.len() >= 2 {
        format!("{}.{}", parts[parts.len() - 2], parts[parts.len() - 1])
    } else {
        full_name.to_string()
    }
}

/// Group component of an identity.
pub fn group_of(identity: &str) -> &str {
    identity.split('.').next().unwrap_or(identity)
}

/// Benchmark short name of an identity.
pub fn short_name(identity: &str) -> &str {
    identity.rsplit('.').next().unwrap_or(identity)
}

/// Looks up the taxonomy classification for a group.
pub fn classify_group(group: &str) -> Option<GroupClass> {
    TAXONOMY.get(group).copied()
}

/// Fully-qualified display label for a group.
pub fn qualified_label(group: &str) -> String {
    match TAXONOMY.get(group) {
        Some(GroupClass {
            category,
            subcategory: Some(sub),
        }) => format!("{} / {}", category, sub),
        Some(GroupClass { category, .. }) => (*category).to_string(),
        None => OTHER_CATEGORY.to_string(),
    }
}

/// Sort key for group display order.
///
/// Known groups come first in catalog order; unknown groups follow,
/// alphabetically.
pub fn group_sort_key(group: &str) -> (usize, usize, String) {
    match KNOWN_GROUPS.iter().position(|g| *g == group) {
        Some(index) => (0, index, String::new()),
        None => (1, 0, group.to_string()),
    }
}
