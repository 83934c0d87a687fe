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

//! Authority resolution.
//!
//! A resolver maps an authority tag read from the input (for example
//! `AUTHORITY["EPSG","4326"]`) to a canonical, already-built object. When a
//! resolver answers, the reader returns that object instead of the one
//! described by the text.

use crate::model::{AuthorityTag, Crs, Datum, OperationMethod, PrimeMeridian, Spheroid, Unit};
use std::sync::Arc;

/// Lookup service for canonical objects by authority tag.
///
/// Every method defaults to "unknown", so an implementation only overrides
/// the lookups it supports.
pub trait AuthorityResolver: Send + Sync {
    /// Canonical form of an authority tag itself.
    fn authority_tag(&self, _name: &str, _code: &str) -> Option<AuthorityTag> {
        None
    }

    fn crs(&self, _tag: &AuthorityTag) -> Option<Crs> {
        None
    }

    fn datum(&self, _tag: &AuthorityTag) -> Option<Datum> {
        None
    }

    fn spheroid(&self, _tag: &AuthorityTag) -> Option<Arc<Spheroid>> {
        None
    }

    fn prime_meridian(&self, _tag: &AuthorityTag) -> Option<Arc<PrimeMeridian>> {
        None
    }

    fn unit(&self, _tag: &AuthorityTag) -> Option<Arc<Unit>> {
        None
    }

    fn operation_method(&self, _tag: &AuthorityTag) -> Option<Arc<OperationMethod>> {
        None
    }
}

/// A fixed table of CRS entries, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CrsTable {
    entries: Vec<(AuthorityTag, Crs)>,
}

impl CrsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning `self` for chaining.
    pub fn with(mut self, tag: AuthorityTag, crs: Crs) -> Self {
        self.entries.push((tag, crs));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AuthorityResolver for CrsTable {
    fn crs(&self, tag: &AuthorityTag) -> Option<Crs> {
        self.entries
            .iter()
            .find(|(t, _)| t.matches(&tag.name, &tag.code))
            .map(|(_, crs)| crs.clone())
    }
}
