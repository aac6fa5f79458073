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

//! Structured error types for benchdiff operations.
//!
//! Fatal conditions are limited to a missing or unreadable results export
//! and schema violations inside it. Everything else (missing baseline
//! document, unrecognized report lines, absent counterpart scores) is a
//! data state, not an error: extraction degrades to empty or partial maps
//! and classification degrades to "not comparable".

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchdiff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for benchdiff operations.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The structured results export violated its schema.
    ///
    /// Raised when a record lacks the benchmark name or the nested score
    /// field. The extractor does not attempt partial recovery.
    #[error("Invalid results export '{path}': {message}")]
    Schema {
        /// The file path of the offending export
        path: PathBuf,
        /// The underlying parse error message
        message: String,
    },
}

impl Error {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a schema error with file path context.
    pub fn schema(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Schema {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
