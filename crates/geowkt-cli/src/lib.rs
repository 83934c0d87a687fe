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

//! GeoWKT CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Check that a file holds one well-formed WKT entity
//! - **format**: Re-serialize a file, compact or tab-indented
//! - **inspect**: Print the parsed model as a tree, or as JSON
//!
//! # Examples
//!
//! ```no_run
//! use geowkt_cli::commands::{format, validate};
//!
//! # fn main() -> Result<(), geowkt_cli::error::CliError> {
//! // Lenient validation reports the reader's first failure reason
//! validate("wgs84.prj", false)?;
//!
//! // Pretty-print to a new file
//! format("wgs84.prj", Some("wgs84.pretty.prj"), true, false, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files are size-checked before reading (`GEOWKT_MAX_FILE_SIZE`, in
//! bytes) and the reader's nesting and element limits stay in force.

pub mod cli;
pub mod commands;
pub mod error;
