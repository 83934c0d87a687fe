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

//! GeoWKT Command Line Interface

use clap::Parser;
use geowkt_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// GeoWKT - Well-Known Text for coordinate reference systems
///
/// Validates, reformats and inspects OGC WKT 1 descriptions of coordinate
/// reference systems and coordinate operations.
///
/// # Examples
///
/// ```bash
/// # Validate a WKT file
/// geowkt validate wgs84.prj
///
/// # Re-serialize with tab indentation
/// geowkt format wgs84.prj --pretty --output formatted.prj
///
/// # Dump the parsed model as JSON
/// geowkt inspect wgs84.prj --json
/// ```
#[derive(Parser)]
#[command(name = "geowkt")]
#[command(author, version, about = "GeoWKT - Well-Known Text for coordinate reference systems", long_about = None)]
struct Cli {
    /// Log reader decisions (authority substitution, datum repair) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
