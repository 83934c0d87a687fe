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

//! Datums.

use super::authority::AuthorityTag;
use super::spheroid::{Helmert7, PrimeMeridian, Spheroid};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// OGC datum type code as carried by `VERT_DATUM` and `LOCAL_DATUM`.
///
/// Codes outside the named constants are preserved as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatumType(pub i32);

impl DatumType {
    pub const NONE: Self = Self(0);
    pub const HORIZONTAL_OTHER: Self = Self(1000);
    pub const HORIZONTAL_CLASSIC: Self = Self(1001);
    pub const HORIZONTAL_GEOCENTRIC: Self = Self(1002);
    pub const VERTICAL_OTHER: Self = Self(2000);
    pub const VERTICAL_ORTHOMETRIC: Self = Self(2001);
    pub const VERTICAL_ELLIPSOIDAL: Self = Self(2002);
    pub const VERTICAL_ALTITUDE_BAROMETRIC: Self = Self(2003);
    pub const VERTICAL_NORMAL: Self = Self(2004);
    pub const VERTICAL_GEOID_MODEL_DERIVED: Self = Self(2005);
    pub const VERTICAL_DEPTH: Self = Self(2006);
    pub const LOCAL_OTHER: Self = Self(10000);

    pub fn code(&self) -> i32 {
        self.0
    }

    /// Whether the code is in the horizontal range (1000..2000).
    pub fn is_horizontal(&self) -> bool {
        (1000..2000).contains(&self.0)
    }

    /// Whether the code is in the vertical range (2000..3000).
    pub fn is_vertical(&self) -> bool {
        (2000..3000).contains(&self.0)
    }

    /// Whether the code is in the local range (10000..).
    pub fn is_local(&self) -> bool {
        self.0 >= 10000
    }
}

/// A geodetic datum: spheroid, optional prime meridian and optional
/// transformation to WGS 84.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalDatum {
    pub name: String,
    pub spheroid: Arc<Spheroid>,
    pub prime_meridian: Option<Arc<PrimeMeridian>>,
    pub to_wgs84: Option<Helmert7>,
    pub authority: Option<AuthorityTag>,
}

static WGS84_DATUM: Lazy<Arc<HorizontalDatum>> = Lazy::new(|| {
    Arc::new(HorizontalDatum {
        name: "WGS_1984".to_string(),
        spheroid: Spheroid::wgs84(),
        prime_meridian: Some(PrimeMeridian::greenwich()),
        to_wgs84: None,
        authority: Some(AuthorityTag::new("EPSG", "6326")),
    })
});

impl HorizontalDatum {
    /// Shared WGS 84 datum (with the Greenwich meridian).
    pub fn wgs84() -> Arc<HorizontalDatum> {
        Arc::clone(&WGS84_DATUM)
    }

    /// Copy of this datum carrying the given prime meridian.
    pub fn with_prime_meridian(&self, prime_meridian: Arc<PrimeMeridian>) -> Self {
        Self {
            prime_meridian: Some(prime_meridian),
            ..self.clone()
        }
    }
}

/// A datum described only by name and type code (vertical and local datums).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasicDatum {
    pub name: String,
    pub datum_type: DatumType,
    pub authority: Option<AuthorityTag>,
}

/// Any datum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum {
    /// `DATUM[...]`
    Horizontal(Arc<HorizontalDatum>),
    /// `VERT_DATUM[...]`
    Vertical(Arc<BasicDatum>),
    /// `LOCAL_DATUM[...]`
    Local(Arc<BasicDatum>),
}

impl Datum {
    pub fn name(&self) -> &str {
        match self {
            Self::Horizontal(d) => &d.name,
            Self::Vertical(d) | Self::Local(d) => &d.name,
        }
    }

    pub fn authority(&self) -> Option<&AuthorityTag> {
        match self {
            Self::Horizontal(d) => d.authority.as_ref(),
            Self::Vertical(d) | Self::Local(d) => d.authority.as_ref(),
        }
    }

    /// Type code; horizontal datums report [`DatumType::HORIZONTAL_CLASSIC`].
    pub fn datum_type(&self) -> DatumType {
        match self {
            Self::Horizontal(_) => DatumType::HORIZONTAL_CLASSIC,
            Self::Vertical(d) | Self::Local(d) => d.datum_type,
        }
    }

    pub fn as_horizontal(&self) -> Option<&Arc<HorizontalDatum>> {
        match self {
            Self::Horizontal(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== DatumType tests ====================

    #[test]
    fn test_datum_type_ranges() {
        assert!(DatumType::HORIZONTAL_CLASSIC.is_horizontal());
        assert!(DatumType::VERTICAL_OTHER.is_vertical());
        assert!(DatumType::VERTICAL_DEPTH.is_vertical());
        assert!(DatumType::LOCAL_OTHER.is_local());
        assert!(!DatumType::NONE.is_vertical());
        assert!(!DatumType::NONE.is_local());
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        assert_eq!(DatumType(2999).code(), 2999);
    }

    // ==================== Datum tests ====================

    #[test]
    fn test_with_prime_meridian_copies() {
        let datum = HorizontalDatum {
            name: "D".to_string(),
            spheroid: Spheroid::wgs84(),
            prime_meridian: None,
            to_wgs84: None,
            authority: None,
        };
        let repaired = datum.with_prime_meridian(PrimeMeridian::greenwich());
        assert!(datum.prime_meridian.is_none());
        assert_eq!(repaired.name, "D");
        assert_eq!(repaired.prime_meridian, Some(PrimeMeridian::greenwich()));
    }

    #[test]
    fn test_datum_accessors() {
        let vertical = Datum::Vertical(Arc::new(BasicDatum {
            name: "NAVD88".to_string(),
            datum_type: DatumType::VERTICAL_ORTHOMETRIC,
            authority: Some(AuthorityTag::new("EPSG", "5103")),
        }));
        assert_eq!(vertical.name(), "NAVD88");
        assert_eq!(vertical.datum_type(), DatumType(2001));
        assert_eq!(vertical.authority().map(|a| a.code.as_str()), Some("5103"));
        assert!(vertical.as_horizontal().is_none());

        let horizontal = Datum::Horizontal(HorizontalDatum::wgs84());
        assert_eq!(horizontal.name(), "WGS_1984");
        assert!(horizontal.as_horizontal().is_some());
    }
}
