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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use geowkt_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a WKT file
    ///
    /// Reads one entity and reports its kind and name. In strict mode any
    /// malformed input is an error with the offending offset.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Strict mode (fail on any syntax problem)
        #[arg(short, long)]
        strict: bool,
    },

    /// Re-serialize a WKT file
    ///
    /// Writes the entity back out, compact on one line by default or
    /// tab-indented with --pretty.
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Indent nested entities with tabs
        #[arg(short, long)]
        pretty: bool,

        /// Check only (exit 1 if the file differs from its formatted form)
        #[arg(short, long)]
        check: bool,

        /// Keep parameter and projection names exactly as written
        #[arg(long)]
        keep_names: bool,
    },

    /// Print the parsed model
    ///
    /// Shows the entity as a tree, or as JSON with --json.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit JSON instead of a tree
        #[arg(short, long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read, holds no WKT entity, fails
    /// strict validation, or cannot be written back.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Validate { file, strict } => commands::validate(&file, strict),
            Commands::Format {
                file,
                output,
                pretty,
                check,
                keep_names,
            } => commands::format(&file, output.as_deref(), pretty, check, keep_names),
            Commands::Inspect { file, json } => commands::inspect(&file, json),
        }
    }
}
