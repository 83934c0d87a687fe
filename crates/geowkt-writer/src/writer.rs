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

//! The WKT writer.
//!
//! Every entity is written as a bracketed block. Elements of leaf entities
//! (`UNIT`, `AXIS`, `SPHEROID`, ...) stay on one line; nested entities of
//! composite ones (`GEOGCS`, `DATUM`, `CONCAT_MT`, ...) go on their own
//! tab-indented line when pretty printing. Closing brackets follow the last
//! element directly.

use crate::config::WriterConfig;
use crate::number::format_number;
use geowkt_core::{
    AuthorityTag, Axis, BasicDatum, CoordinateOperation, Crs, Datum, Helmert7,
    HorizontalDatum, NamedParameter, OperationMethod, ParameterValue, ParameterizedOperation,
    PrimeMeridian, Spheroid, Unit, WktError, WktKeyword, WktResult, WktValue,
};

/// Initial output buffer capacity.
const INITIAL_OUTPUT_CAPACITY: usize = 1024;

/// An open bracket awaiting its elements.
struct Block {
    items: usize,
}

/// Output length and indentation to return to when a write fails.
struct Mark {
    len: usize,
    indent: usize,
}

/// Serializes domain values to WKT.
///
/// A writer holds the output buffer and the current indentation, so each
/// thread writes with its own instance.
///
/// # Examples
///
/// ```
/// use geowkt_core::{Axis, AxisOrientation, WktValue};
/// use geowkt_writer::{WktWriter, WriterConfig};
///
/// let mut writer = WktWriter::new(WriterConfig::default());
/// writer.write_value(&WktValue::Axis(Axis::new("Lat", AxisOrientation::North))).unwrap();
/// assert_eq!(writer.finish(), r#"AXIS["Lat",NORTH]"#);
/// ```
pub struct WktWriter {
    config: WriterConfig,
    output: String,
    indent: usize,
}

impl WktWriter {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_CAPACITY),
            indent: 0,
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the writer and return its output.
    pub fn finish(self) -> String {
        self.output
    }

    // ==================== Layout ====================

    fn open(&mut self, keyword: WktKeyword) -> WktResult<Block> {
        if self.indent >= self.config.max_nesting_depth {
            return Err(WktError::security(
                format!(
                    "nesting depth exceeds limit of {} while writing {}",
                    self.config.max_nesting_depth, keyword
                ),
                0,
            ));
        }
        self.output.push_str(self.config.dialect.keyword_text(keyword));
        self.output.push('[');
        self.indent += 1;
        Ok(Block { items: 0 })
    }

    fn mark(&self) -> Mark {
        Mark {
            len: self.output.len(),
            indent: self.indent,
        }
    }

    /// Discard everything written since `mark` if `result` is an error.
    fn settle(&mut self, mark: Mark, result: WktResult<()>) -> WktResult<()> {
        if result.is_err() {
            self.output.truncate(mark.len);
            self.indent = mark.indent;
        }
        result
    }

    /// Separator before an element that stays on the current line.
    fn item(&mut self, block: &mut Block) {
        if block.items > 0 {
            self.output.push(',');
        }
        block.items += 1;
    }

    /// Separator before a nested entity that starts a new line.
    fn child(&mut self, block: &mut Block) {
        self.item(block);
        self.newline();
    }

    fn close(&mut self, _block: Block) {
        self.indent -= 1;
        self.output.push(']');
    }

    fn newline(&mut self) {
        if self.config.pretty {
            self.output.push('\n');
            for _ in 0..self.indent {
                self.output.push('\t');
            }
        }
    }

    fn quoted(&mut self, text: &str) {
        self.output.push('"');
        for c in text.chars() {
            if c == '"' {
                self.output.push('"');
            }
            self.output.push(c);
        }
        self.output.push('"');
    }

    fn number(&mut self, value: f64) {
        self.output.push_str(&format_number(value));
    }

    fn authority_item(&mut self, block: &mut Block, authority: Option<&AuthorityTag>) {
        if let Some(tag) = authority {
            self.item(block);
            self.write_authority_tag(tag);
        }
    }

    fn authority_line(&mut self, block: &mut Block, authority: Option<&AuthorityTag>) {
        if let Some(tag) = authority {
            self.child(block);
            self.write_authority_tag(tag);
        }
    }

    // ==================== Dispatch ====================

    /// Write any entity value.
    ///
    /// # Errors
    ///
    /// Bare numbers, strings and keywords have no WKT form of their own and
    /// yield an `Unsupported` error. Exceeding the nesting ceiling yields a
    /// `Security` error. A failed write leaves the output as it was before
    /// the call.
    pub fn write_value(&mut self, value: &WktValue) -> WktResult<()> {
        let mark = self.mark();
        let result = self.write_value_body(value);
        self.settle(mark, result)
    }

    fn write_value_body(&mut self, value: &WktValue) -> WktResult<()> {
        match value {
            WktValue::Authority(tag) => {
                self.write_authority_tag(tag);
                Ok(())
            }
            WktValue::Parameter(p) => self.write_parameter(p),
            WktValue::Operation(op) => self.write_operation(op),
            WktValue::Crs(crs) => self.write_crs(crs),
            WktValue::Spheroid(s) => self.write_spheroid(s),
            WktValue::PrimeMeridian(pm) => self.write_prime_meridian(pm),
            WktValue::Unit(u) => self.write_unit(u),
            WktValue::Datum(d) => self.write_datum(d),
            WktValue::Axis(a) => self.write_axis(a),
            WktValue::Helmert(h) => self.write_to_wgs84(h),
            WktValue::OperationMethod(m) => self.write_projection(m),
            WktValue::Number(_) | WktValue::Text(_) | WktValue::Keyword(_) => Err(
                WktError::unsupported(format!("cannot write a bare {}", value.kind_name())),
            ),
        }
    }

    // ==================== Components ====================

    pub fn write_authority_tag(&mut self, tag: &AuthorityTag) {
        self.output.push_str(self.config.dialect.keyword_text(WktKeyword::Authority));
        self.output.push('[');
        self.quoted(&tag.name);
        self.output.push(',');
        self.quoted(&tag.code);
        self.output.push(']');
    }

    pub fn write_parameter(&mut self, parameter: &NamedParameter) -> WktResult<()> {
        let mut name = self.config.fix_name(&parameter.name);
        if self.config.lowercase_parameter_names {
            name = name.to_lowercase();
        }
        let mut block = self.open(WktKeyword::Parameter)?;
        self.item(&mut block);
        self.quoted(&name);
        match &parameter.value {
            ParameterValue::Number(n) => {
                self.item(&mut block);
                self.number(*n);
            }
            ParameterValue::Text(s) => {
                self.item(&mut block);
                self.quoted(s);
            }
            ParameterValue::Empty => {}
        }
        self.close(block);
        Ok(())
    }

    pub fn write_axis(&mut self, axis: &Axis) -> WktResult<()> {
        let mut block = self.open(WktKeyword::Axis)?;
        self.item(&mut block);
        self.quoted(&axis.name);
        self.item(&mut block);
        self.output.push_str(self.config.dialect.orientation_text(axis.orientation));
        self.close(block);
        Ok(())
    }

    pub fn write_unit(&mut self, unit: &Unit) -> WktResult<()> {
        let mut block = self.open(WktKeyword::Unit)?;
        self.item(&mut block);
        self.quoted(&unit.name);
        self.item(&mut block);
        self.number(unit.factor);
        self.authority_item(&mut block, unit.authority.as_ref());
        self.close(block);
        Ok(())
    }

    pub fn write_spheroid(&mut self, spheroid: &Spheroid) -> WktResult<()> {
        let mut block = self.open(WktKeyword::Spheroid)?;
        self.item(&mut block);
        self.quoted(&spheroid.name);
        self.item(&mut block);
        self.number(spheroid.semi_major_axis);
        self.item(&mut block);
        self.number(spheroid.inverse_flattening);
        self.authority_item(&mut block, spheroid.authority.as_ref());
        self.close(block);
        Ok(())
    }

    pub fn write_prime_meridian(&mut self, prime_meridian: &PrimeMeridian) -> WktResult<()> {
        let mut block = self.open(WktKeyword::PrimeMeridian)?;
        self.item(&mut block);
        self.quoted(&prime_meridian.name);
        self.item(&mut block);
        self.number(prime_meridian.longitude);
        self.authority_item(&mut block, prime_meridian.authority.as_ref());
        self.close(block);
        Ok(())
    }

    pub fn write_to_wgs84(&mut self, helmert: &Helmert7) -> WktResult<()> {
        let mut block = self.open(WktKeyword::ToWgs84)?;
        for value in helmert.values() {
            self.item(&mut block);
            self.number(value);
        }
        self.close(block);
        Ok(())
    }

    /// `PROJECTION[...]` for an operation method.
    pub fn write_projection(&mut self, method: &OperationMethod) -> WktResult<()> {
        let name = self.config.fix_name(&method.name);
        let mut block = self.open(WktKeyword::Projection)?;
        self.item(&mut block);
        self.quoted(&name);
        if !self.config.suppress_projection_authority {
            self.authority_item(&mut block, method.authority.as_ref());
        }
        self.close(block);
        Ok(())
    }

    // ==================== Datums ====================

    /// Write a datum on its own, with its prime meridian inside.
    pub fn write_datum(&mut self, datum: &Datum) -> WktResult<()> {
        let mark = self.mark();
        let result = self.write_datum_body(datum);
        self.settle(mark, result)
    }

    fn write_datum_body(&mut self, datum: &Datum) -> WktResult<()> {
        match datum {
            Datum::Horizontal(d) => self.write_horizontal_datum(d, true),
            Datum::Vertical(d) => self.write_basic_datum(WktKeyword::VerticalDatum, d),
            Datum::Local(d) => self.write_basic_datum(WktKeyword::LocalDatum, d),
        }
    }

    /// Inside a geodetic CRS the prime meridian is a sibling of the datum.
    fn write_horizontal_datum(
        &mut self,
        datum: &HorizontalDatum,
        with_prime_meridian: bool,
    ) -> WktResult<()> {
        let mut block = self.open(WktKeyword::Datum)?;
        self.item(&mut block);
        self.quoted(&datum.name);
        self.child(&mut block);
        self.write_spheroid(&datum.spheroid)?;
        if let Some(h) = &datum.to_wgs84 {
            self.child(&mut block);
            self.write_to_wgs84(h)?;
        }
        if let Some(pm) = datum.prime_meridian.as_ref().filter(|_| with_prime_meridian) {
            self.child(&mut block);
            self.write_prime_meridian(pm)?;
        }
        self.authority_line(&mut block, datum.authority.as_ref());
        self.close(block);
        Ok(())
    }

    fn write_basic_datum(&mut self, keyword: WktKeyword, datum: &BasicDatum) -> WktResult<()> {
        let mut block = self.open(keyword)?;
        self.item(&mut block);
        self.quoted(&datum.name);
        self.item(&mut block);
        self.output.push_str(&datum.datum_type.code().to_string());
        self.authority_item(&mut block, datum.authority.as_ref());
        self.close(block);
        Ok(())
    }

    // ==================== Coordinate reference systems ====================

    pub fn write_crs(&mut self, crs: &Crs) -> WktResult<()> {
        let mark = self.mark();
        let result = self.write_crs_body(crs);
        self.settle(mark, result)
    }

    fn write_crs_body(&mut self, crs: &Crs) -> WktResult<()> {
        match crs {
            Crs::Geographic(c) => self.write_geodetic(
                WktKeyword::GeographicCs,
                &c.name,
                &c.datum,
                &c.unit,
                &c.axes,
                c.authority.as_ref(),
            ),
            Crs::Geocentric(c) => self.write_geodetic(
                WktKeyword::GeocentricCs,
                &c.name,
                &c.datum,
                &c.unit,
                &c.axes,
                c.authority.as_ref(),
            ),
            Crs::Projected(c) => {
                let mut block = self.open(WktKeyword::ProjectedCs)?;
                self.item(&mut block);
                self.quoted(&c.name);
                self.child(&mut block);
                self.write_crs(&c.base)?;
                if let Some(method) = &c.projection.method {
                    self.child(&mut block);
                    self.write_projection(method)?;
                }
                for p in &c.projection.parameters {
                    self.child(&mut block);
                    self.write_parameter(p)?;
                }
                self.child(&mut block);
                self.write_unit(&c.unit)?;
                for axis in &c.axes {
                    self.child(&mut block);
                    self.write_axis(axis)?;
                }
                self.authority_line(&mut block, c.authority.as_ref());
                self.close(block);
                Ok(())
            }
            Crs::Vertical(c) => {
                let mut block = self.open(WktKeyword::VerticalCs)?;
                self.item(&mut block);
                self.quoted(&c.name);
                self.child(&mut block);
                self.write_datum(&c.datum)?;
                self.child(&mut block);
                self.write_unit(&c.unit)?;
                self.child(&mut block);
                self.write_axis(&c.axis)?;
                self.authority_line(&mut block, c.authority.as_ref());
                self.close(block);
                Ok(())
            }
            Crs::Local(c) => {
                let mut block = self.open(WktKeyword::LocalCs)?;
                self.item(&mut block);
                self.quoted(&c.name);
                self.child(&mut block);
                self.write_datum(&c.datum)?;
                self.child(&mut block);
                self.write_unit(&c.unit)?;
                for axis in &c.axes {
                    self.child(&mut block);
                    self.write_axis(axis)?;
                }
                self.authority_line(&mut block, c.authority.as_ref());
                self.close(block);
                Ok(())
            }
            Crs::Compound(c) => {
                let mut block = self.open(WktKeyword::CompoundCs)?;
                self.item(&mut block);
                self.quoted(&c.name);
                self.child(&mut block);
                self.write_crs(&c.head)?;
                self.child(&mut block);
                self.write_crs(&c.tail)?;
                self.authority_line(&mut block, c.authority.as_ref());
                self.close(block);
                Ok(())
            }
            Crs::Fitted(c) => {
                let mut block = self.open(WktKeyword::FittedCs)?;
                self.item(&mut block);
                self.quoted(&c.name);
                self.child(&mut block);
                self.write_operation(&c.to_base)?;
                self.child(&mut block);
                self.write_crs(&c.base)?;
                self.close(block);
                Ok(())
            }
        }
    }

    /// `GEOGCS` and `GEOCCS` share one layout.
    fn write_geodetic(
        &mut self,
        keyword: WktKeyword,
        name: &str,
        datum: &HorizontalDatum,
        unit: &Unit,
        axes: &[Axis],
        authority: Option<&AuthorityTag>,
    ) -> WktResult<()> {
        let mut block = self.open(keyword)?;
        self.item(&mut block);
        self.quoted(name);
        self.child(&mut block);
        self.write_horizontal_datum(datum, false)?;
        if let Some(pm) = &datum.prime_meridian {
            self.child(&mut block);
            self.write_prime_meridian(pm)?;
        }
        self.child(&mut block);
        self.write_unit(unit)?;
        for axis in axes {
            self.child(&mut block);
            self.write_axis(axis)?;
        }
        self.authority_line(&mut block, authority);
        self.close(block);
        Ok(())
    }

    // ==================== Coordinate operations ====================

    pub fn write_operation(&mut self, operation: &CoordinateOperation) -> WktResult<()> {
        let mark = self.mark();
        let result = self.write_operation_body(operation);
        self.settle(mark, result)
    }

    fn write_operation_body(&mut self, operation: &CoordinateOperation) -> WktResult<()> {
        match operation {
            CoordinateOperation::Parameterized(op) => {
                let name = op.method.as_ref().map_or(op.name.as_str(), |m| m.name.as_str());
                let mut block = self.open(WktKeyword::ParamMt)?;
                self.item(&mut block);
                self.quoted(name);
                for p in &op.parameters {
                    self.child(&mut block);
                    self.write_parameter(p)?;
                }
                self.close(block);
            }
            CoordinateOperation::Concatenated(op) => {
                let mut block = self.open(WktKeyword::ConcatMt)?;
                for step in &op.steps {
                    self.child(&mut block);
                    self.write_operation(step)?;
                }
                self.close(block);
            }
            CoordinateOperation::Inverse(op) => {
                let mut block = self.open(WktKeyword::InverseMt)?;
                self.child(&mut block);
                self.write_operation(&op.core)?;
                self.close(block);
            }
            CoordinateOperation::PassThrough(op) => {
                let mut block = self.open(WktKeyword::PassThroughMt)?;
                self.item(&mut block);
                self.output.push_str(&op.first_affected_ordinate.to_string());
                self.child(&mut block);
                self.write_operation(&op.core)?;
                self.close(block);
            }
        }
        Ok(())
    }
}

/// Serialize a value with the given configuration.
pub fn to_wkt_string(value: &WktValue, config: &WriterConfig) -> WktResult<String> {
    let mut writer = WktWriter::new(config.clone());
    writer.write_value(value)?;
    Ok(writer.finish())
}
