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

//! Coordinate reference systems.

use super::authority::AuthorityTag;
use super::axis::Axis;
use super::datum::{Datum, HorizontalDatum};
use super::operation::{CoordinateOperation, ParameterizedOperation};
use super::unit::Unit;
use std::sync::Arc;

/// Latitude/longitude CRS (`GEOGCS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeographicCrs {
    pub name: String,
    pub datum: Arc<HorizontalDatum>,
    /// Angular unit.
    pub unit: Arc<Unit>,
    pub axes: Vec<Axis>,
    pub authority: Option<AuthorityTag>,
}

/// Earth-centred cartesian CRS (`GEOCCS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeocentricCrs {
    pub name: String,
    pub datum: Arc<HorizontalDatum>,
    /// Linear unit.
    pub unit: Arc<Unit>,
    pub axes: Vec<Axis>,
    pub authority: Option<AuthorityTag>,
}

/// Map projection of a geodetic CRS (`PROJCS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCrs {
    pub name: String,
    /// Geographic or geocentric base.
    pub base: Crs,
    /// Projection method and its parameters.
    pub projection: Arc<ParameterizedOperation>,
    pub unit: Arc<Unit>,
    pub axes: Vec<Axis>,
    pub authority: Option<AuthorityTag>,
}

/// Height or depth CRS (`VERT_CS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalCrs {
    pub name: String,
    pub datum: Datum,
    pub unit: Arc<Unit>,
    pub axis: Axis,
    pub authority: Option<AuthorityTag>,
}

/// Engineering CRS (`LOCAL_CS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalCrs {
    pub name: String,
    pub datum: Datum,
    pub unit: Arc<Unit>,
    pub axes: Vec<Axis>,
    pub authority: Option<AuthorityTag>,
}

/// Head plus tail CRS (`COMPD_CS`), e.g. horizontal plus vertical.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundCrs {
    pub name: String,
    pub head: Crs,
    pub tail: Crs,
    pub authority: Option<AuthorityTag>,
}

/// CRS defined by an operation to a base CRS (`FITTED_CS`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedCrs {
    pub name: String,
    pub to_base: CoordinateOperation,
    pub base: Crs,
}

/// Any coordinate reference system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crs {
    Geographic(Arc<GeographicCrs>),
    Geocentric(Arc<GeocentricCrs>),
    Projected(Arc<ProjectedCrs>),
    Vertical(Arc<VerticalCrs>),
    Local(Arc<LocalCrs>),
    Compound(Arc<CompoundCrs>),
    Fitted(Arc<FittedCrs>),
}

impl Crs {
    pub fn name(&self) -> &str {
        match self {
            Self::Geographic(c) => &c.name,
            Self::Geocentric(c) => &c.name,
            Self::Projected(c) => &c.name,
            Self::Vertical(c) => &c.name,
            Self::Local(c) => &c.name,
            Self::Compound(c) => &c.name,
            Self::Fitted(c) => &c.name,
        }
    }

    /// Authority tag; fitted systems never carry one.
    pub fn authority(&self) -> Option<&AuthorityTag> {
        match self {
            Self::Geographic(c) => c.authority.as_ref(),
            Self::Geocentric(c) => c.authority.as_ref(),
            Self::Projected(c) => c.authority.as_ref(),
            Self::Vertical(c) => c.authority.as_ref(),
            Self::Local(c) => c.authority.as_ref(),
            Self::Compound(c) => c.authority.as_ref(),
            Self::Fitted(_) => None,
        }
    }

    /// The WKT keyword spelling of this CRS kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Geographic(_) => "GEOGCS",
            Self::Geocentric(_) => "GEOCCS",
            Self::Projected(_) => "PROJCS",
            Self::Vertical(_) => "VERT_CS",
            Self::Local(_) => "LOCAL_CS",
            Self::Compound(_) => "COMPD_CS",
            Self::Fitted(_) => "FITTED_CS",
        }
    }

    /// Geographic and geocentric systems are geodetic.
    pub fn is_geodetic(&self) -> bool {
        matches!(self, Self::Geographic(_) | Self::Geocentric(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::axis::AxisOrientation;

    fn geographic(name: &str) -> Crs {
        Crs::Geographic(Arc::new(GeographicCrs {
            name: name.to_string(),
            datum: HorizontalDatum::wgs84(),
            unit: Unit::degree(),
            axes: vec![],
            authority: Some(AuthorityTag::new("EPSG", "4326")),
        }))
    }

    #[test]
    fn test_accessors() {
        let crs = geographic("WGS 84");
        assert_eq!(crs.name(), "WGS 84");
        assert_eq!(crs.keyword(), "GEOGCS");
        assert_eq!(crs.authority().map(ToString::to_string).as_deref(), Some("EPSG:4326"));
        assert!(crs.is_geodetic());
    }

    #[test]
    fn test_compound_is_not_geodetic() {
        let vertical = Crs::Vertical(Arc::new(VerticalCrs {
            name: "NAVD88".to_string(),
            datum: Datum::Horizontal(HorizontalDatum::wgs84()),
            unit: Unit::metre(),
            axis: Axis::new("Up", AxisOrientation::Up),
            authority: None,
        }));
        let compound = Crs::Compound(Arc::new(CompoundCrs {
            name: "C".to_string(),
            head: geographic("H"),
            tail: vertical,
            authority: None,
        }));
        assert!(!compound.is_geodetic());
        assert_eq!(compound.keyword(), "COMPD_CS");
    }
}
