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

//! Security limits for WKT reading.

/// Configurable limits for reader security.
///
/// The WKT grammar is recursive, so adversarially deep input would otherwise
/// exhaust the stack. Every limit fails closed with a
/// [`WktErrorKind::Security`](crate::WktErrorKind::Security) error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 16M).
    pub max_input_size: usize,
    /// Maximum bracket nesting depth (default: 100).
    pub max_nesting_depth: usize,
    /// Maximum number of elements in one parameter list (default: 10k).
    pub max_params: usize,
    /// Maximum length of a quoted string or numeric literal (default: 64k).
    pub max_token_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024,
            max_nesting_depth: 100,
            max_params: 10_000,
            max_token_length: 64 * 1024,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_nesting_depth: usize::MAX,
            max_params: usize::MAX,
            max_token_length: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default limits tests ====================

    #[test]
    fn test_default_max_nesting_depth() {
        assert_eq!(Limits::default().max_nesting_depth, 100);
    }

    #[test]
    fn test_default_max_params() {
        assert_eq!(Limits::default().max_params, 10_000);
    }

    #[test]
    fn test_default_max_token_length() {
        assert_eq!(Limits::default().max_token_length, 64 * 1024);
    }

    #[test]
    fn test_default_max_input_size() {
        assert_eq!(Limits::default().max_input_size, 16 * 1024 * 1024);
    }

    // ==================== Unlimited limits tests ====================

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_nesting_depth, usize::MAX);
        assert_eq!(limits.max_params, usize::MAX);
        assert_eq!(limits.max_token_length, usize::MAX);
    }

    #[test]
    fn test_limits_debug() {
        let debug = format!("{:?}", Limits::default());
        assert!(debug.contains("max_nesting_depth"));
        assert!(debug.contains("max_params"));
    }
}
