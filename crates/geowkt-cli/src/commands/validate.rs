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

//! Validate command - WKT syntax validation

use super::{read_file, read_value};
use crate::error::CliError;
use colored::Colorize;
use geowkt::{CoordinateOperation, ParseOptions, WktValue};

/// Validate a WKT file.
///
/// Reads exactly one entity and prints its kind and name.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not one well-formed WKT
/// entity. In strict mode the error is a `Syntax` error carrying the offset
/// of the first problem.
///
/// # Examples
///
/// ```no_run
/// use geowkt_cli::commands::validate;
///
/// # fn main() -> Result<(), geowkt_cli::error::CliError> {
/// validate("wgs84.prj", true)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str, strict: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let options = ParseOptions::builder().strict(strict).build();

    match read_value(file, &content, &options) {
        Ok(value) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Kind: {}", value.kind_name());
            if let Some(keyword) = keyword_of(&value) {
                println!("  Keyword: {}", keyword);
            }
            if let Some(name) = value.name().filter(|n| !n.is_empty()) {
                println!("  Name: {}", name);
            }
            if let Some(auth) = value.as_crs().and_then(|crs| crs.authority()) {
                println!("  Authority: {}:{}", auth.name, auth.code);
            }
            if strict {
                println!("  Mode: strict");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}

fn keyword_of(value: &WktValue) -> Option<&'static str> {
    match value {
        WktValue::Crs(crs) => Some(crs.keyword()),
        WktValue::Operation(op) => Some(match op {
            CoordinateOperation::Parameterized(_) => "PARAM_MT",
            CoordinateOperation::Concatenated(_) => "CONCAT_MT",
            CoordinateOperation::Inverse(_) => "INVERSE_MT",
            CoordinateOperation::PassThrough(_) => "PASSTHROUGH_MT",
        }),
        _ => None,
    }
}
