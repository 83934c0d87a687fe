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

//! Error context helpers.
//!
//! ```rust
//! use geowkt::{parse_strict, WktResultExt};
//!
//! fn load(name: &str, text: &str) -> Result<geowkt::WktValue, geowkt::WktError> {
//!     parse_strict(text).with_context(|| format!("while loading {}", name))
//! }
//!
//! let err = load("bad.prj", "GEOGCS[").unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while loading bad.prj"));
//! ```

use crate::WktError;
use std::fmt;

/// Extension trait for adding context to results on their way up.
pub trait WktResultExt<T> {
    /// The error type being extended.
    type ErrorType;

    /// Add context to an error.
    ///
    /// New context is prepended to existing context, separated by `"; "`.
    fn context<C>(self, context: C) -> Result<T, WktError>
    where
        C: fmt::Display;

    /// Add context computed only on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, WktError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error into a `WktError`.
    fn map_err_to_wkt<F>(self, f: F) -> Result<T, WktError>
    where
        F: FnOnce(Self::ErrorType) -> WktError;
}

impl<T> WktResultExt<T> for Result<T, WktError> {
    type ErrorType = WktError;

    fn context<C>(self, context: C) -> Result<T, WktError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, WktError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context(e, f().to_string()))
    }

    fn map_err_to_wkt<F>(self, _f: F) -> Result<T, WktError>
    where
        F: FnOnce(Self::ErrorType) -> WktError,
    {
        self
    }
}

impl<T> WktResultExt<T> for Result<T, std::io::Error> {
    type ErrorType = std::io::Error;

    fn context<C>(self, context: C) -> Result<T, WktError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| WktError::from(e).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, WktError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| WktError::from(e).with_context(f().to_string()))
    }

    fn map_err_to_wkt<F>(self, f: F) -> Result<T, WktError>
    where
        F: FnOnce(Self::ErrorType) -> WktError,
    {
        self.map_err(f)
    }
}

fn add_context(mut error: WktError, new_context: String) -> WktError {
    if new_context.is_empty() {
        return error;
    }
    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });
    error
}
