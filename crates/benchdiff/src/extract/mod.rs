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

//! Extraction of identity → score maps from the three input formats.
//!
//! Each extractor is a pure `(text) -> map` function with a thin I/O
//! wrapper, so the parsing strategies stay testable independently of the
//! documents they consume:
//!
//! - [`results`]: the structured results export. Schema violations are
//!   fatal.
//! - [`baseline`]: the published baseline document. Never fails; a missing
//!   document yields an empty map and a warning.
//! - [`prior`]: the tool's own previously rendered report. Never fails; a
//!   missing document is a valid empty state.

pub mod baseline;
pub mod prior;
pub mod results;

pub use baseline::{load_baselines, parse_baselines};
pub use prior::{load_prior_report, parse_prior_report, PriorState};
pub use results::{load_results, parse_results};
