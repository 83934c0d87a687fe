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

//! Output layout tests for the writer.

use geowkt_core::{parse, CoordinateOperation, NamedParameter, ParameterizedOperation, WktValue};
use geowkt_writer::{to_wkt, to_wkt_pretty, to_wkt_with_config, WriterConfig};
use std::sync::Arc;

fn flatten(pretty: &str) -> String {
    pretty.replace('\n', "").replace('\t', "")
}

fn param_mt(name: &str, parameters: &[(&str, f64)]) -> CoordinateOperation {
    let parameters = parameters
        .iter()
        .map(|(n, v)| NamedParameter::number(*n, *v))
        .collect();
    CoordinateOperation::from(ParameterizedOperation::new(name, parameters))
}

// ==================== Concatenated operation tests ====================

fn concatenation() -> WktValue {
    let inverse = param_mt(
        "Ellipsoid_To_Geocentric",
        &[("semi_major", 6378206.4), ("semi_minor", 6356583.8)],
    )
    .inverse()
    .unwrap();
    WktValue::Operation(CoordinateOperation::Concatenated(Arc::new(
        geowkt_core::ConcatenatedOperation {
            steps: vec![
                param_mt(
                    "Helmert_7_Parameter_Transformation",
                    &[
                        ("dx", 1.0),
                        ("dy", 2.0),
                        ("dz", 3.0),
                        ("rx", 4.0),
                        ("ry", 5.0),
                        ("rz", 6.0),
                        ("m", 7.0),
                    ],
                ),
                param_mt(
                    "Ellipsoid_To_Geocentric",
                    &[("semi major", 6378137.0), ("semi minor", 6356752.31414035)],
                ),
                inverse,
            ],
        },
    )))
}

const CONCATENATION_PRETTY: &[&str] = &[
    "CONCAT_MT[",
    "\tPARAM_MT[\"Helmert_7_Parameter_Transformation\",",
    "\t\tPARAMETER[\"dx\",1],",
    "\t\tPARAMETER[\"dy\",2],",
    "\t\tPARAMETER[\"dz\",3],",
    "\t\tPARAMETER[\"rx\",4],",
    "\t\tPARAMETER[\"ry\",5],",
    "\t\tPARAMETER[\"rz\",6],",
    "\t\tPARAMETER[\"m\",7]],",
    "\tPARAM_MT[\"Ellipsoid_To_Geocentric\",",
    "\t\tPARAMETER[\"semi_major\",6378137],",
    "\t\tPARAMETER[\"semi_minor\",6356752.31414035]],",
    "\tINVERSE_MT[",
    "\t\tPARAM_MT[\"Ellipsoid_To_Geocentric\",",
    "\t\t\tPARAMETER[\"semi_major\",6378206.4],",
    "\t\t\tPARAMETER[\"semi_minor\",6356583.8]]]]",
];

#[test]
fn test_concatenation_pretty() {
    let expected = CONCATENATION_PRETTY.join("\n");
    assert_eq!(to_wkt_pretty(&concatenation()).unwrap(), expected);
}

#[test]
fn test_concatenation_compact() {
    let expected = flatten(&CONCATENATION_PRETTY.join("\n"));
    assert_eq!(to_wkt(&concatenation()).unwrap(), expected);
}

#[test]
fn test_concatenation_reads_back() {
    let text = to_wkt(&concatenation()).unwrap();
    let value = parse(&text).unwrap().unwrap();
    assert_eq!(to_wkt(&value).unwrap(), text);
}

// ==================== Compound CRS tests ====================

const BRITISH_NATIONAL_GRID: &[&str] = &[
    "COMPD_CS[\"OSGB36 / British National Grid + ODN\",",
    "\tPROJCS[\"OSGB 1936 / British National Grid\",",
    "\t\tGEOGCS[\"OSGB 1936\",",
    "\t\t\tDATUM[\"OSGB_1936\",",
    "\t\t\t\tSPHEROID[\"Airy 1830\",6377563.396,299.3249646,AUTHORITY[\"EPSG\",\"7001\"]],",
    "\t\t\t\tTOWGS84[375,-111,431,0,0,0,0],",
    "\t\t\t\tAUTHORITY[\"EPSG\",\"6277\"]],",
    "\t\t\tPRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",\"8901\"]],",
    "\t\t\tUNIT[\"DMSH\",0.0174532925199433,AUTHORITY[\"EPSG\",\"9108\"]],",
    "\t\t\tAXIS[\"Lat\",NORTH],",
    "\t\t\tAXIS[\"Long\",EAST],",
    "\t\t\tAUTHORITY[\"EPSG\",\"4277\"]],",
    "\t\tPROJECTION[\"Transverse_Mercator\"],",
    "\t\tPARAMETER[\"latitude_of_origin\",49],",
    "\t\tPARAMETER[\"central_meridian\",-2],",
    "\t\tPARAMETER[\"scale_factor\",0.999601272],",
    "\t\tPARAMETER[\"false_easting\",400000],",
    "\t\tPARAMETER[\"false_northing\",-100000],",
    "\t\tUNIT[\"metre\",1,AUTHORITY[\"EPSG\",\"9001\"]],",
    "\t\tAXIS[\"E\",EAST],",
    "\t\tAXIS[\"N\",NORTH],",
    "\t\tAUTHORITY[\"EPSG\",\"27700\"]],",
    "\tVERT_CS[\"Newlyn\",",
    "\t\tVERT_DATUM[\"Ordnance Datum Newlyn\",2005,AUTHORITY[\"EPSG\",\"5101\"]],",
    "\t\tUNIT[\"metre\",1,AUTHORITY[\"EPSG\",\"9001\"]],",
    "\t\tAXIS[\"Up\",UP],",
    "\t\tAUTHORITY[\"EPSG\",\"5701\"]],",
    "\tAUTHORITY[\"EPSG\",\"7405\"]]",
];

#[test]
fn test_compound_pretty_from_flat() {
    let pretty = BRITISH_NATIONAL_GRID.join("\n");
    let flat = flatten(&pretty);
    let value = parse(&flat).unwrap().unwrap();
    assert_eq!(to_wkt_pretty(&value).unwrap(), pretty);
    assert_eq!(to_wkt(&value).unwrap(), flat);
}

#[test]
fn test_compound_pretty_is_idempotent() {
    let pretty = BRITISH_NATIONAL_GRID.join("\n");
    let value = parse(&pretty).unwrap().unwrap();
    let once = to_wkt_pretty(&value).unwrap();
    let twice = to_wkt_pretty(&parse(&once).unwrap().unwrap()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, pretty);
}

#[test]
fn test_pretty_and_compact_differ_only_in_whitespace() {
    let value = parse(&BRITISH_NATIONAL_GRID.join("")).unwrap().unwrap();
    let pretty = to_wkt_pretty(&value).unwrap();
    let compact = to_wkt(&value).unwrap();
    assert_ne!(pretty, compact);
    assert_eq!(flatten(&pretty), compact);
}

// ==================== Configuration tests ====================

#[test]
fn test_keep_names() {
    let value = parse(r#"PROJCS["P",GEOGCS["G"],PROJECTION["Transverse_Mercator"],PARAMETER["scale_factor",1]]"#)
        .unwrap()
        .unwrap();
    let config = WriterConfig::new().with_correct_names(false);
    let text = to_wkt_with_config(&value, &config).unwrap();
    assert!(text.contains(r#"PROJECTION["Transverse Mercator"]"#));
    assert!(text.contains(r#"PARAMETER["scale factor",1]"#));
}

#[test]
fn test_projection_authority_round_trip_when_not_suppressed() {
    let text = r#"PROJCS["P",GEOGCS["G"],PROJECTION["Mercator_1SP",AUTHORITY["EPSG","9804"]]]"#;
    let value = parse(text).unwrap().unwrap();
    let config = WriterConfig::builder().suppress_projection_authority(false).build();
    let written = to_wkt_with_config(&value, &config).unwrap();
    assert!(written.contains(r#"PROJECTION["Mercator_1SP",AUTHORITY["EPSG","9804"]]"#));
    assert_eq!(parse(&written).unwrap().unwrap(), value);
}
