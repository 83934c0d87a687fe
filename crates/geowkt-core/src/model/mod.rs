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

//! Domain model for WKT entities.
//!
//! All entities are immutable once built and shared through `Arc`, so a
//! resolver can hand out canonical instances that compare pointer-equal.

mod authority;
mod axis;
mod crs;
mod datum;
mod operation;
mod spheroid;
mod unit;
mod value;

pub use authority::AuthorityTag;
pub use axis::{Axis, AxisOrientation};
pub use crs::{
    CompoundCrs, Crs, FittedCrs, GeocentricCrs, GeographicCrs, LocalCrs, ProjectedCrs,
    VerticalCrs,
};
pub use datum::{BasicDatum, Datum, DatumType, HorizontalDatum};
pub use operation::{
    ConcatenatedOperation, CoordinateOperation, InverseOperation, NamedParameter,
    OperationMethod, ParameterValue, ParameterizedOperation, PassThroughOperation,
};
pub use spheroid::{Helmert7, PrimeMeridian, Spheroid};
pub use unit::{Unit, UnitKind};
pub use value::WktValue;
