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

//! The parsed value union.

use super::authority::AuthorityTag;
use super::axis::Axis;
use super::crs::Crs;
use super::datum::Datum;
use super::operation::{CoordinateOperation, NamedParameter, OperationMethod};
use super::spheroid::{Helmert7, PrimeMeridian, Spheroid};
use super::unit::Unit;
use crate::lex::WktKeyword;
use std::sync::Arc;

/// One entity read from WKT.
///
/// Every element of a parameter list is one of these, and so is the result
/// of a top-level read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WktValue {
    Number(f64),
    Text(String),
    /// A bare keyword token, such as an axis direction.
    Keyword(WktKeyword),
    Authority(AuthorityTag),
    Axis(Axis),
    Parameter(NamedParameter),
    Operation(CoordinateOperation),
    /// `PROJECTION[...]`
    OperationMethod(Arc<OperationMethod>),
    Crs(Crs),
    Datum(Datum),
    Spheroid(Arc<Spheroid>),
    PrimeMeridian(Arc<PrimeMeridian>),
    Unit(Arc<Unit>),
    /// `TOWGS84[...]`
    Helmert(Helmert7),
}

impl WktValue {
    /// Short human-readable name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Keyword(_) => "keyword",
            Self::Authority(_) => "authority",
            Self::Axis(_) => "axis",
            Self::Parameter(_) => "parameter",
            Self::Operation(_) => "operation",
            Self::OperationMethod(_) => "projection",
            Self::Crs(_) => "crs",
            Self::Datum(_) => "datum",
            Self::Spheroid(_) => "spheroid",
            Self::PrimeMeridian(_) => "prime meridian",
            Self::Unit(_) => "unit",
            Self::Helmert(_) => "towgs84",
        }
    }

    /// Name of the entity, for variants that carry one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Authority(a) => Some(&a.name),
            Self::Axis(a) => Some(&a.name),
            Self::Parameter(p) => Some(&p.name),
            Self::Operation(op) => Some(op.name()),
            Self::OperationMethod(m) => Some(&m.name),
            Self::Crs(c) => Some(c.name()),
            Self::Datum(d) => Some(d.name()),
            Self::Spheroid(s) => Some(&s.name),
            Self::PrimeMeridian(p) => Some(&p.name),
            Self::Unit(u) => Some(&u.name),
            Self::Number(_) | Self::Keyword(_) | Self::Helmert(_) => None,
        }
    }

    pub fn as_crs(&self) -> Option<&Crs> {
        match self {
            Self::Crs(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&CoordinateOperation> {
        match self {
            Self::Operation(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Arc<Unit>> {
        match self {
            Self::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_axis(&self) -> Option<&Axis> {
        match self {
            Self::Axis(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Crs> for WktValue {
    fn from(crs: Crs) -> Self {
        Self::Crs(crs)
    }
}

impl From<CoordinateOperation> for WktValue {
    fn from(op: CoordinateOperation) -> Self {
        Self::Operation(op)
    }
}

impl From<Datum> for WktValue {
    fn from(datum: Datum) -> Self {
        Self::Datum(datum)
    }
}
