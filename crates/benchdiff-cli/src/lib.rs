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

//! Benchdiff CLI: argument parsing and the report-generation command.
//!
//! The binary wires [`cli::Cli`] into [`commands::run`], which drives the
//! core pipeline in `benchdiff`: load the results export(s), compare them
//! against the published baselines, print the run summary, and optionally
//! merge the run into the persisted report document.

pub mod cli;
pub mod commands;
pub mod error;
