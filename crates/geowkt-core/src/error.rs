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

//! Error types for WKT reading and writing.
//!
//! Malformed input is *not* an error by default: the reader reports it as
//! `Ok(None)`. A [`WktError`] is raised for the conditions that cannot be
//! expressed as "no entity":
//!
//! - semantically invalid input such as `INVERSE_MT` around an operation that
//!   has no inverse ([`WktErrorKind::NoInverse`]);
//! - values the writer cannot serialize ([`WktErrorKind::Unsupported`]);
//! - exceeded resource limits ([`WktErrorKind::Security`]);
//! - strict-mode promotion of a soft failure ([`WktErrorKind::Syntax`]).

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WktErrorKind {
    /// Malformed input reported in strict mode.
    Syntax,
    /// An inverse was requested for an operation that has none.
    NoInverse,
    /// The writer was asked to serialize a value it has no form for.
    Unsupported,
    /// Security limit exceeded.
    Security,
    /// I/O error while reading the input.
    IO,
}

impl fmt::Display for WktErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::NoInverse => write!(f, "NoInverseError"),
            Self::Unsupported => write!(f, "UnsupportedError"),
            Self::Security => write!(f, "SecurityError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error raised while reading or writing WKT.
#[derive(Debug, Clone, Error)]
#[error("{kind} at offset {offset}: {message}")]
pub struct WktError {
    /// The kind of error.
    pub kind: WktErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Character offset into the input (0 when not tied to input).
    pub offset: usize,
    /// Additional context (e.g., "while reading GEOGCS").
    pub context: Option<String>,
}

impl WktError {
    /// Create a new error.
    pub fn new(kind: WktErrorKind, message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            offset,
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    // Convenience constructors for each error kind
    pub fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::new(WktErrorKind::Syntax, message, offset)
    }

    pub fn no_inverse(message: impl Into<String>, offset: usize) -> Self {
        Self::new(WktErrorKind::NoInverse, message, offset)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(WktErrorKind::Unsupported, message, 0)
    }

    pub fn security(message: impl Into<String>, offset: usize) -> Self {
        Self::new(WktErrorKind::Security, message, offset)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(WktErrorKind::IO, message, 0)
    }
}

impl From<std::io::Error> for WktError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for WKT operations.
pub type WktResult<T> = Result<T, WktError>;
