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

//! CLI command implementations

mod format;
mod inspect;
mod validate;

pub use format::format;
pub use inspect::{build_tree, inspect, render_tree, TreeNode};
pub use validate::validate;

use crate::error::CliError;
use geowkt::{parse_with_options, ParseOptions, WktReader, WktValue};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum file size (64 MB).
/// Can be overridden via the `GEOWKT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("GEOWKT_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked from metadata before any bytes are read.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be accessed, the file exceeds
/// `GEOWKT_MAX_FILE_SIZE`, or the content cannot be read as UTF-8.
///
/// # Examples
///
/// ```no_run
/// use geowkt_cli::commands::read_file;
///
/// # fn main() -> Result<(), geowkt_cli::error::CliError> {
/// let content = read_file("wgs84.prj")?;
/// assert!(content.contains("GEOGCS"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file or stdout cannot be written.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

/// Read the single entity in `content`.
///
/// Malformed input becomes [`CliError::NoEntity`] carrying the reader's first
/// recorded failure; in strict mode it is a `Syntax` error instead.
pub(crate) fn read_value(
    file: &str,
    content: &str,
    options: &ParseOptions,
) -> Result<WktValue, CliError> {
    if let Some(value) = parse_with_options(content, options)? {
        debug!(file, kind = value.kind_name(), "read entity");
        return Ok(value);
    }

    // Lenient miss: read again to recover the failure position.
    let mut reader = WktReader::from_text(content, options);
    let failure = match reader.read_document()? {
        Some(_) => None,
        None => reader
            .last_failure()
            .map(|f| format!("{} at offset {}", f.reason, f.offset)),
    };
    Err(CliError::no_entity(file, failure))
}
