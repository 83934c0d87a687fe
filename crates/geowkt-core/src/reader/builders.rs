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

//! One builder per keyword.
//!
//! Each builder reads its parameter list once and classifies the elements
//! by kind. Names take the last string seen, except where the grammar fixes
//! positions (`AUTHORITY`, `PARAMETER`, the numbers of `SPHEROID` and
//! `TOWGS84`). When the entity carries an authority tag and a resolver knows
//! an object of the same kind, that object is returned instead.

use super::WktReader;
use crate::error::WktResult;
use crate::model::{
    AuthorityTag, Axis, AxisOrientation, BasicDatum, CompoundCrs, ConcatenatedOperation,
    CoordinateOperation, Crs, Datum, DatumType, FittedCrs, GeocentricCrs, GeographicCrs, Helmert7,
    HorizontalDatum, LocalCrs, NamedParameter, OperationMethod, ParameterValue,
    ParameterizedOperation, PassThroughOperation, PrimeMeridian, ProjectedCrs, Spheroid, Unit,
    UnitKind, VerticalCrs, WktValue,
};
use crate::resolver::AuthorityResolver;
use std::sync::Arc;
use tracing::debug;

/// Read the parameter list, or return `Ok(None)` from the builder.
macro_rules! params {
    ($reader:expr) => {
        match $reader.read_params()? {
            Some(params) => params,
            None => return Ok(None),
        }
    };
}

/// Text form of an authority element; numeric codes print without a fraction.
fn authority_text(value: &WktValue) -> String {
    match value {
        WktValue::Text(s) => s.clone(),
        WktValue::Number(n) => n.to_string(),
        WktValue::Keyword(k) => k.as_str().to_string(),
        _ => String::new(),
    }
}

impl<I: Iterator<Item = char>> WktReader<'_, I> {
    /// Look up a canonical object for `authority`, logging a substitution.
    fn substitute<T>(
        &self,
        authority: Option<&AuthorityTag>,
        entity: &'static str,
        lookup: impl Fn(&dyn AuthorityResolver, &AuthorityTag) -> Option<T>,
    ) -> Option<T> {
        let tag = authority?;
        let found = self.options.resolve(|r| lookup(r, tag))?;
        debug!(authority = %tag, entity, "substituted entity from authority");
        Some(found)
    }

    fn substitute_crs(
        &self,
        authority: Option<&AuthorityTag>,
        entity: &'static str,
        kind: fn(&Crs) -> bool,
    ) -> Option<WktValue> {
        self.substitute(authority, entity, |r, tag| r.crs(tag).filter(kind))
            .map(WktValue::Crs)
    }

    // ==================== Components ====================

    pub(super) fn read_authority(&mut self) -> WktResult<Option<WktValue>> {
        let params = params!(self);
        let name = params.first().map(authority_text).unwrap_or_default();
        let code = params.get(1).map(authority_text).unwrap_or_default();

        let tag = self
            .options
            .resolve(|r| r.authority_tag(&name, &code))
            .unwrap_or_else(|| AuthorityTag::new(name, code));
        Ok(Some(WktValue::Authority(tag)))
    }

    pub(super) fn read_axis(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = None;
        let mut orientation = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) if name.is_none() => name = Some(s),
                WktValue::Keyword(k) if orientation.is_none() => orientation = Some(k),
                _ => {}
            }
        }

        let orientation = orientation
            .and_then(|k| k.orientation())
            .unwrap_or(AxisOrientation::Other);
        Ok(Some(WktValue::Axis(Axis::new(name.unwrap_or_default(), orientation))))
    }

    pub(super) fn read_parameter(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut params = params!(self).into_iter();
        let name = match params.next() {
            Some(WktValue::Text(name)) => self.options.fix_name(&name),
            _ => return self.fail("PARAMETER requires a name", start),
        };
        let value = match params.next() {
            Some(WktValue::Number(n)) => ParameterValue::Number(n),
            Some(WktValue::Text(s)) => ParameterValue::Text(s),
            _ => ParameterValue::Empty,
        };
        Ok(Some(WktValue::Parameter(NamedParameter::new(name, value))))
    }

    pub(super) fn read_spheroid(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut numbers = Vec::with_capacity(2);
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Number(n) => numbers.push(n),
                _ => {}
            }
        }

        if let Some(found) = self.substitute(authority.as_ref(), "SPHEROID", |r, t| r.spheroid(t)) {
            return Ok(Some(WktValue::Spheroid(found)));
        }
        let semi_major_axis = numbers.first().copied().unwrap_or(f64::NAN);
        let inverse_flattening = numbers.get(1).copied().unwrap_or(f64::NAN);
        Ok(Some(WktValue::Spheroid(Arc::new(Spheroid::new(
            name,
            semi_major_axis,
            inverse_flattening,
            authority,
        )))))
    }

    pub(super) fn read_prime_meridian(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut longitude = 0.0;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Number(n) => longitude = n,
                _ => {}
            }
        }

        if let Some(found) = self.substitute(authority.as_ref(), "PRIMEM", |r, t| r.prime_meridian(t)) {
            return Ok(Some(WktValue::PrimeMeridian(found)));
        }
        Ok(Some(WktValue::PrimeMeridian(Arc::new(PrimeMeridian::new(
            name, longitude, authority,
        )))))
    }

    pub(super) fn read_unit(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut factor = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Number(n) => factor = Some(n),
                _ => {}
            }
        }

        if let Some(found) = self.substitute(authority.as_ref(), "UNIT", |r, t| r.unit(t)) {
            return Ok(Some(WktValue::Unit(found)));
        }
        Ok(Some(WktValue::Unit(Arc::new(Unit::new(
            name,
            factor.unwrap_or(1.0),
            authority,
        )))))
    }

    pub(super) fn read_to_wgs84(&mut self) -> WktResult<Option<WktValue>> {
        let values: Vec<f64> = params!(self).iter().filter_map(WktValue::as_f64).collect();
        Ok(Some(WktValue::Helmert(Helmert7::from_values(&values))))
    }

    pub(super) fn read_projection(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                _ => {}
            }
        }

        if let Some(found) =
            self.substitute(authority.as_ref(), "PROJECTION", |r, t| r.operation_method(t))
        {
            return Ok(Some(WktValue::OperationMethod(found)));
        }
        let name = self.options.fix_name(&name);
        Ok(Some(WktValue::OperationMethod(Arc::new(OperationMethod::new(
            name, authority,
        )))))
    }

    // ==================== Datums ====================

    pub(super) fn read_horizontal_datum(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut spheroid = None;
        let mut to_wgs84 = None;
        let mut prime_meridian = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Spheroid(s) => spheroid = Some(s),
                WktValue::Helmert(h) => to_wgs84 = Some(h),
                WktValue::PrimeMeridian(p) => prime_meridian = Some(p),
                _ => {}
            }
        }

        if let Some(found) = self.substitute(authority.as_ref(), "DATUM", |r, t| {
            r.datum(t).filter(|d| matches!(d, Datum::Horizontal(_)))
        }) {
            return Ok(Some(WktValue::Datum(found)));
        }
        Ok(Some(WktValue::Datum(Datum::Horizontal(Arc::new(HorizontalDatum {
            name,
            spheroid: spheroid.unwrap_or_else(Spheroid::wgs84),
            prime_meridian,
            to_wgs84,
            authority,
        })))))
    }

    /// `VERT_DATUM` (`vertical`) or `LOCAL_DATUM`.
    pub(super) fn read_basic_datum(&mut self, vertical: bool) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut datum_type = if vertical {
            DatumType::VERTICAL_OTHER
        } else {
            DatumType::LOCAL_OTHER
        };
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Number(n) => datum_type = DatumType(n as i32),
                _ => {}
            }
        }

        let entity = if vertical { "VERT_DATUM" } else { "LOCAL_DATUM" };
        if let Some(found) = self.substitute(authority.as_ref(), entity, |r, t| r.datum(t)) {
            return Ok(Some(WktValue::Datum(found)));
        }
        let datum = Arc::new(BasicDatum {
            name,
            datum_type,
            authority,
        });
        Ok(Some(WktValue::Datum(if vertical {
            Datum::Vertical(datum)
        } else {
            Datum::Local(datum)
        })))
    }

    // ==================== Coordinate reference systems ====================

    pub(super) fn read_geographic_cs(&mut self) -> WktResult<Option<WktValue>> {
        let parts = self.read_geodetic_parts()?;
        let Some(parts) = parts else {
            return Ok(None);
        };
        if let Some(found) =
            self.substitute_crs(parts.authority.as_ref(), "GEOGCS", |c| matches!(c, Crs::Geographic(_)))
        {
            return Ok(Some(found));
        }
        let unit = parts.unit.unwrap_or_else(Unit::degree);
        Ok(Some(WktValue::Crs(Crs::Geographic(Arc::new(GeographicCrs {
            name: parts.name,
            datum: parts.datum,
            unit: Unit::coerce(&unit, UnitKind::Angle),
            axes: parts.axes,
            authority: parts.authority,
        })))))
    }

    pub(super) fn read_geocentric_cs(&mut self) -> WktResult<Option<WktValue>> {
        let parts = self.read_geodetic_parts()?;
        let Some(parts) = parts else {
            return Ok(None);
        };
        if let Some(found) =
            self.substitute_crs(parts.authority.as_ref(), "GEOCCS", |c| matches!(c, Crs::Geocentric(_)))
        {
            return Ok(Some(found));
        }
        let unit = parts.unit.unwrap_or_else(Unit::metre);
        Ok(Some(WktValue::Crs(Crs::Geocentric(Arc::new(GeocentricCrs {
            name: parts.name,
            datum: parts.datum,
            unit: Unit::coerce(&unit, UnitKind::Length),
            axes: parts.axes,
            authority: parts.authority,
        })))))
    }

    /// Shared body of `GEOGCS` and `GEOCCS`.
    ///
    /// A datum read without a prime meridian is rebuilt around a sibling
    /// `PRIMEM`, since that is where WKT 1 places it.
    fn read_geodetic_parts(&mut self) -> WktResult<Option<GeodeticParts>> {
        let mut name = String::new();
        let mut authority = None;
        let mut datum: Option<Arc<HorizontalDatum>> = None;
        let mut prime_meridian = None;
        let mut unit = None;
        let mut axes = Vec::new();
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Datum(Datum::Horizontal(d)) => datum = Some(d),
                WktValue::PrimeMeridian(p) => prime_meridian = Some(p),
                WktValue::Unit(u) => unit = Some(u),
                WktValue::Axis(a) => axes.push(a),
                _ => {}
            }
        }

        let datum = match (datum, prime_meridian) {
            (Some(d), Some(pm)) if d.prime_meridian.is_none() => {
                debug!(datum = %d.name, prime_meridian = %pm.name, "attaching prime meridian to datum");
                Arc::new(d.with_prime_meridian(pm))
            }
            (Some(d), _) => d,
            (None, _) => HorizontalDatum::wgs84(),
        };
        Ok(Some(GeodeticParts {
            name,
            authority,
            datum,
            unit,
            axes,
        }))
    }

    pub(super) fn read_projected_cs(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut name = String::new();
        let mut authority = None;
        let mut base = None;
        let mut method: Option<Arc<OperationMethod>> = None;
        let mut parameters = Vec::new();
        let mut unit = None;
        let mut axes = Vec::new();
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Crs(c) if c.is_geodetic() => base = Some(c),
                WktValue::OperationMethod(m) => method = Some(m),
                WktValue::Parameter(p) => parameters.push(p),
                WktValue::Unit(u) => unit = Some(u),
                WktValue::Axis(a) => axes.push(a),
                _ => {}
            }
        }

        if let Some(found) =
            self.substitute_crs(authority.as_ref(), "PROJCS", |c| matches!(c, Crs::Projected(_)))
        {
            return Ok(Some(found));
        }
        let Some(base) = base else {
            return self.fail("PROJCS requires a geographic or geocentric base", start);
        };
        let projection = ParameterizedOperation {
            name: method.as_ref().map(|m| m.name.clone()).unwrap_or_default(),
            method,
            parameters,
            has_inverse: true,
        };
        let unit = unit.unwrap_or_else(Unit::metre);
        Ok(Some(WktValue::Crs(Crs::Projected(Arc::new(ProjectedCrs {
            name,
            base,
            projection: Arc::new(projection),
            unit: Unit::coerce(&unit, UnitKind::Length),
            axes,
            authority,
        })))))
    }

    pub(super) fn read_vertical_cs(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut name = String::new();
        let mut authority = None;
        let mut datum = None;
        let mut unit = None;
        let mut axis = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Datum(d) => datum = Some(d),
                WktValue::Unit(u) => unit = Some(u),
                WktValue::Axis(a) => axis = Some(a),
                _ => {}
            }
        }

        if let Some(found) =
            self.substitute_crs(authority.as_ref(), "VERT_CS", |c| matches!(c, Crs::Vertical(_)))
        {
            return Ok(Some(found));
        }
        let Some(axis) = axis else {
            return self.fail("VERT_CS requires an axis", start);
        };
        Ok(Some(WktValue::Crs(Crs::Vertical(Arc::new(VerticalCrs {
            name,
            datum: datum.unwrap_or_else(|| Datum::Horizontal(HorizontalDatum::wgs84())),
            unit: unit.unwrap_or_else(Unit::metre),
            axis,
            authority,
        })))))
    }

    pub(super) fn read_local_cs(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut authority = None;
        let mut datum = None;
        let mut unit = None;
        let mut axes = Vec::new();
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) => authority = Some(a),
                WktValue::Datum(d) => datum = Some(d),
                WktValue::Unit(u) => unit = Some(u),
                WktValue::Axis(a) => axes.push(a),
                _ => {}
            }
        }

        if let Some(found) =
            self.substitute_crs(authority.as_ref(), "LOCAL_CS", |c| matches!(c, Crs::Local(_)))
        {
            return Ok(Some(found));
        }
        Ok(Some(WktValue::Crs(Crs::Local(Arc::new(LocalCrs {
            name,
            datum: datum.unwrap_or_else(|| Datum::Horizontal(HorizontalDatum::wgs84())),
            unit: unit.unwrap_or_else(Unit::metre),
            axes,
            authority,
        })))))
    }

    pub(super) fn read_compound_cs(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut name = String::new();
        let mut authority = None;
        let mut head = None;
        let mut tail = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Authority(a) if authority.is_none() => authority = Some(a),
                WktValue::Crs(c) if head.is_none() => head = Some(c),
                WktValue::Crs(c) if tail.is_none() => tail = Some(c),
                _ => {}
            }
        }

        if let Some(found) =
            self.substitute_crs(authority.as_ref(), "COMPD_CS", |c| matches!(c, Crs::Compound(_)))
        {
            return Ok(Some(found));
        }
        let (Some(head), Some(tail)) = (head, tail) else {
            return self.fail("COMPD_CS requires a head and a tail CRS", start);
        };
        Ok(Some(WktValue::Crs(Crs::Compound(Arc::new(CompoundCrs {
            name,
            head,
            tail,
            authority,
        })))))
    }

    pub(super) fn read_fitted_cs(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut name = String::new();
        let mut to_base = None;
        let mut base = None;
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Operation(op) => to_base = Some(op),
                WktValue::Crs(c) => base = Some(c),
                _ => {}
            }
        }

        let (Some(to_base), Some(base)) = (to_base, base) else {
            return self.fail("FITTED_CS requires a to-base operation and a base CRS", start);
        };
        Ok(Some(WktValue::Crs(Crs::Fitted(Arc::new(FittedCrs {
            name,
            to_base,
            base,
        })))))
    }

    // ==================== Coordinate operations ====================

    pub(super) fn read_param_mt(&mut self) -> WktResult<Option<WktValue>> {
        let mut name = String::new();
        let mut parameters = Vec::new();
        for param in params!(self) {
            match param {
                WktValue::Text(s) => name = s,
                WktValue::Parameter(p) => parameters.push(p),
                _ => {}
            }
        }

        let has_inverse = self.options.is_invertible(&name);
        Ok(Some(WktValue::Operation(CoordinateOperation::Parameterized(
            Arc::new(ParameterizedOperation {
                method: Some(Arc::new(OperationMethod::new(name.clone(), None))),
                name,
                parameters,
                has_inverse,
            }),
        ))))
    }

    pub(super) fn read_concat_mt(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let steps: Vec<CoordinateOperation> = params!(self)
            .into_iter()
            .filter_map(|p| match p {
                WktValue::Operation(op) => Some(op),
                _ => None,
            })
            .collect();
        if steps.is_empty() {
            return self.fail("CONCAT_MT requires at least one operation", start);
        }
        Ok(Some(WktValue::Operation(CoordinateOperation::Concatenated(
            Arc::new(ConcatenatedOperation { steps }),
        ))))
    }

    /// Reads the nested operation and returns its inverse.
    pub(super) fn read_inverse_mt(&mut self, keyword_offset: usize) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let forward = params!(self).into_iter().find_map(|p| match p {
            WktValue::Operation(op) => Some(op),
            _ => None,
        });
        let Some(forward) = forward else {
            return self.fail("INVERSE_MT requires an operation", start);
        };
        let inverse = forward.inverse().map_err(|mut e| {
            e.offset = keyword_offset;
            e
        })?;
        Ok(Some(WktValue::Operation(inverse)))
    }

    pub(super) fn read_pass_through_mt(&mut self) -> WktResult<Option<WktValue>> {
        let start = self.cursor.offset();
        let mut ordinate = 0.0;
        let mut core = None;
        for param in params!(self) {
            match param {
                WktValue::Number(n) => ordinate = n,
                WktValue::Operation(op) if core.is_none() => core = Some(op),
                _ => {}
            }
        }

        let Some(core) = core else {
            return self.fail("PASSTHROUGH_MT requires an operation", start);
        };
        if !ordinate.is_finite() || ordinate < 0.0 {
            return self.fail(format!("invalid first affected ordinate {}", ordinate), start);
        }
        Ok(Some(WktValue::Operation(CoordinateOperation::PassThrough(
            Arc::new(PassThroughOperation {
                first_affected_ordinate: ordinate.round() as usize,
                core,
            }),
        ))))
    }
}

struct GeodeticParts {
    name: String,
    authority: Option<AuthorityTag>,
    datum: Arc<HorizontalDatum>,
    unit: Option<Arc<Unit>>,
    axes: Vec<Axis>,
}
