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

//! Format command - WKT re-serialization

use super::{read_file, read_value, write_output};
use crate::error::CliError;
use geowkt::{to_wkt_with_config, ParseOptions, WriterConfig};

/// Re-serialize a WKT file.
///
/// # Arguments
///
/// * `file` - Path to the WKT file
/// * `output` - Optional output path; stdout when `None`
/// * `pretty` - Tab-indent nested entities
/// * `check` - Only compare the file with its formatted form
/// * `keep_names` - Skip the `_`/space name correction on both read and
///   write
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or holds no entity, if the
/// output cannot be written, or, in check mode, if the file differs from its
/// formatted form.
///
/// # Examples
///
/// ```no_run
/// use geowkt_cli::commands::format;
///
/// # fn main() -> Result<(), geowkt_cli::error::CliError> {
/// // Compact, to stdout
/// format("wgs84.prj", None, false, false, false)?;
///
/// // Is the file already pretty-printed?
/// format("wgs84.prj", None, true, true, false)?;
/// # Ok(())
/// # }
/// ```
pub fn format(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    check: bool,
    keep_names: bool,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let options = ParseOptions::builder().correct_names(!keep_names).build();
    let value = read_value(file, &content, &options)?;

    let config = WriterConfig::builder()
        .pretty(pretty)
        .correct_names(!keep_names)
        .build();
    let formatted = to_wkt_with_config(&value, &config)?;

    if check {
        let normalized_original = content.replace("\r\n", "\n");
        if formatted.trim() != normalized_original.trim() {
            return Err(CliError::NotCanonical);
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&formatted, output)
    }
}
