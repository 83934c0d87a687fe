// Dweve GeoWKT - Well-Known Text for Coordinate Reference Systems
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

//! Structured error types for the GeoWKT CLI.

use geowkt::WktError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for GeoWKT CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use geowkt_cli::error::CliError;
///
/// fn load(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// File read, write or metadata access failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds `GEOWKT_MAX_FILE_SIZE`.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The reader or writer raised an error.
    #[error("{0}")]
    Wkt(#[from] WktError),

    /// The input holds no recognizable WKT entity.
    #[error("No WKT entity found in '{path}'{}", suffix(.reason))]
    NoEntity {
        path: PathBuf,
        /// Reason recorded by the reader, with its offset
        reason: Option<String>,
    },

    /// JSON serialization of the model failed.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// Returned by `format --check`.
    #[error("File is not in canonical form")]
    NotCanonical,
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// ```rust,no_run
    /// use geowkt_cli::error::CliError;
    ///
    /// const MAX_SIZE: u64 = 64 * 1024 * 1024;
    /// let err = CliError::file_too_large("huge.prj", 200_000_000, MAX_SIZE);
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn no_entity(path: impl Into<PathBuf>, reason: Option<String>) -> Self {
        Self::NoEntity {
            path: path.into(),
            reason,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

fn suffix(reason: &Option<String>) -> String {
    reason
        .as_ref()
        .map(|r| format!(": {}", r))
        .unwrap_or_default()
}
