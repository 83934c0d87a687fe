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

//! Geodetic components: spheroids, prime meridians and the Helmert
//! transformation to WGS 84.

use super::authority::AuthorityTag;
use super::unit::Unit;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// A reference ellipsoid defined by its semi-major axis and inverse flattening.
///
/// Values missing from the input are NaN.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spheroid {
    pub name: String,
    /// Semi-major axis in metres.
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub authority: Option<AuthorityTag>,
}

static WGS84_SPHEROID: Lazy<Arc<Spheroid>> = Lazy::new(|| {
    Arc::new(Spheroid {
        name: "WGS 84".to_string(),
        semi_major_axis: 6_378_137.0,
        inverse_flattening: 298.257_223_563,
        authority: Some(AuthorityTag::new("EPSG", "7030")),
    })
});

impl Spheroid {
    pub fn new(
        name: impl Into<String>,
        semi_major_axis: f64,
        inverse_flattening: f64,
        authority: Option<AuthorityTag>,
    ) -> Self {
        Self {
            name: name.into(),
            semi_major_axis,
            inverse_flattening,
            authority,
        }
    }

    /// Shared WGS 84 ellipsoid.
    pub fn wgs84() -> Arc<Spheroid> {
        Arc::clone(&WGS84_SPHEROID)
    }
}

/// The meridian from which longitudes are measured.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeMeridian {
    pub name: String,
    /// Longitude relative to Greenwich, expressed in `unit`.
    pub longitude: f64,
    pub unit: Arc<Unit>,
    pub authority: Option<AuthorityTag>,
}

static GREENWICH: Lazy<Arc<PrimeMeridian>> = Lazy::new(|| {
    Arc::new(PrimeMeridian {
        name: "Greenwich".to_string(),
        longitude: 0.0,
        unit: Unit::degree(),
        authority: Some(AuthorityTag::new("EPSG", "8901")),
    })
});

impl PrimeMeridian {
    pub fn new(name: impl Into<String>, longitude: f64, authority: Option<AuthorityTag>) -> Self {
        Self {
            name: name.into(),
            longitude,
            unit: Unit::degree(),
            authority,
        }
    }

    /// Shared Greenwich meridian.
    pub fn greenwich() -> Arc<PrimeMeridian> {
        Arc::clone(&GREENWICH)
    }
}

/// Seven-parameter Helmert transformation (`TOWGS84`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Helmert7 {
    /// Translations in metres.
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    /// Rotations in arc-seconds.
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Scale difference in parts per million.
    pub scale_ppm: f64,
}

impl Helmert7 {
    /// Build from up to seven values in WKT order, padding with zeros.
    pub fn from_values(values: &[f64]) -> Self {
        let at = |i: usize| values.get(i).copied().unwrap_or(0.0);
        Self {
            dx: at(0),
            dy: at(1),
            dz: at(2),
            rx: at(3),
            ry: at(4),
            rz: at(5),
            scale_ppm: at(6),
        }
    }

    /// The seven values in WKT order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.dx,
            self.dy,
            self.dz,
            self.rx,
            self.ry,
            self.rz,
            self.scale_ppm,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_spheroid() {
        let s = Spheroid::wgs84();
        assert_eq!(s.semi_major_axis, 6_378_137.0);
        assert_eq!(s.inverse_flattening, 298.257_223_563);
        assert!(Arc::ptr_eq(&s, &Spheroid::wgs84()));
    }

    #[test]
    fn test_prime_meridian_uses_degrees() {
        let pm = PrimeMeridian::new("Paris", 2.337229167, None);
        assert_eq!(pm.unit.name, "degree");
        assert_eq!(PrimeMeridian::greenwich().longitude, 0.0);
    }

    // ==================== Helmert tests ====================

    #[test]
    fn test_helmert_pads_missing_values() {
        let h = Helmert7::from_values(&[1.0, 2.0, 3.0]);
        assert_eq!(h.values(), [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_helmert_ignores_extra_values() {
        let h = Helmert7::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(h.scale_ppm, 7.0);
    }
}
