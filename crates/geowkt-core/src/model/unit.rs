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

//! Units of measure.

use super::authority::AuthorityTag;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Quantity measured by a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    /// Factor is relative to the metre.
    Length,
    /// Factor is relative to the radian.
    Angle,
}

/// A unit of measure with its conversion factor to the base unit of its kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub name: String,
    pub factor: f64,
    pub kind: UnitKind,
    pub authority: Option<AuthorityTag>,
}

static METRE: Lazy<Arc<Unit>> = Lazy::new(|| {
    Arc::new(Unit {
        name: "metre".to_string(),
        factor: 1.0,
        kind: UnitKind::Length,
        authority: Some(AuthorityTag::new("EPSG", "9001")),
    })
});

static DEGREE: Lazy<Arc<Unit>> = Lazy::new(|| {
    Arc::new(Unit {
        name: "degree".to_string(),
        factor: std::f64::consts::PI / 180.0,
        kind: UnitKind::Angle,
        authority: Some(AuthorityTag::new("EPSG", "9122")),
    })
});

static RADIAN: Lazy<Arc<Unit>> = Lazy::new(|| {
    Arc::new(Unit {
        name: "radian".to_string(),
        factor: 1.0,
        kind: UnitKind::Angle,
        authority: Some(AuthorityTag::new("EPSG", "9101")),
    })
});

impl Unit {
    /// Create a unit, inferring its kind from the name.
    pub fn new(name: impl Into<String>, factor: f64, authority: Option<AuthorityTag>) -> Self {
        let name = name.into();
        let kind = Self::infer_kind(&name);
        Self {
            name,
            factor,
            kind,
            authority,
        }
    }

    /// Shared metre instance.
    pub fn metre() -> Arc<Unit> {
        Arc::clone(&METRE)
    }

    /// Shared degree instance.
    pub fn degree() -> Arc<Unit> {
        Arc::clone(&DEGREE)
    }

    /// Shared radian instance.
    pub fn radian() -> Arc<Unit> {
        Arc::clone(&RADIAN)
    }

    /// Guess whether a unit name denotes an angle or a length.
    ///
    /// Names are matched case-insensitively; anything not recognized as an
    /// angle is treated as a length.
    pub fn infer_kind(name: &str) -> UnitKind {
        let lower = name.trim().to_ascii_lowercase();
        let angular = lower.contains("degree")
            || lower.contains("radian")
            || lower.starts_with("arc")
            || matches!(lower.as_str(), "grad" | "grads" | "gon" | "mil" | "mils");
        if angular {
            UnitKind::Angle
        } else {
            UnitKind::Length
        }
    }

    /// Return `unit` as the given kind, copying only when the kind differs.
    pub fn coerce(unit: &Arc<Unit>, kind: UnitKind) -> Arc<Unit> {
        if unit.kind == kind {
            Arc::clone(unit)
        } else {
            Arc::new(Unit {
                kind,
                ..Unit::clone(unit)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Kind inference tests ====================

    #[test]
    fn test_infer_angular_names() {
        for name in ["degree", "Degree", "radian", "microradian", "grad", "gon", "arc-second", "mil"] {
            assert_eq!(Unit::infer_kind(name), UnitKind::Angle, "{}", name);
        }
    }

    #[test]
    fn test_infer_linear_names() {
        for name in ["metre", "US survey foot", "mile", "kilometre", ""] {
            assert_eq!(Unit::infer_kind(name), UnitKind::Length, "{}", name);
        }
    }

    // ==================== Shared default tests ====================

    #[test]
    fn test_defaults_are_shared() {
        assert!(Arc::ptr_eq(&Unit::metre(), &Unit::metre()));
        assert!(Arc::ptr_eq(&Unit::degree(), &Unit::degree()));
        assert_eq!(Unit::radian().factor, 1.0);
    }

    // ==================== Coercion tests ====================

    #[test]
    fn test_coerce_same_kind_keeps_pointer() {
        let degree = Unit::degree();
        let coerced = Unit::coerce(&degree, UnitKind::Angle);
        assert!(Arc::ptr_eq(&degree, &coerced));
    }

    #[test]
    fn test_coerce_other_kind_copies() {
        let unit = Arc::new(Unit::new("foo", 2.0, None));
        let coerced = Unit::coerce(&unit, UnitKind::Angle);
        assert_eq!(coerced.kind, UnitKind::Angle);
        assert_eq!(coerced.name, "foo");
        assert_eq!(coerced.factor, 2.0);
        assert_eq!(unit.kind, UnitKind::Length);
    }
}
