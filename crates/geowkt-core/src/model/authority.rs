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

//! Authority tags: `(namespace, code)` pairs such as EPSG:4326.

use std::fmt;

/// An authority reference attached to an entity.
///
/// Codes are stored as text. A numeric code in the input (`AUTHORITY["EPSG",4326]`)
/// is converted to its decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorityTag {
    /// Authority namespace, e.g. `EPSG`.
    pub name: String,
    /// Code within the namespace.
    pub code: String,
}

impl AuthorityTag {
    /// Create a new authority tag.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Case-insensitive comparison of both name and code.
    pub fn matches(&self, name: &str, code: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) && self.code.eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for AuthorityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.code)
    }
}
