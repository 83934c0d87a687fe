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

//! Inspect command - WKT model visualization

use super::{read_file, read_value};
use crate::error::CliError;
use colored::Colorize;
use geowkt::writer::format_number;
use geowkt::{
    AuthorityTag, Axis, BasicDatum, CoordinateOperation, Crs, Datum, Helmert7, HorizontalDatum,
    NamedParameter, OperationMethod, ParameterValue, ParseOptions, PrimeMeridian, Spheroid, Unit,
    UnitKind, WktValue,
};

/// One line of the inspect tree: a WKT keyword, a short summary and the
/// nested entities.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub label: &'static str,
    pub detail: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: &'static str, detail: impl Into<String>) -> Self {
        Self {
            label,
            detail: detail.into(),
            children: Vec::new(),
        }
    }

    fn with(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    fn with_opt(self, child: Option<TreeNode>) -> Self {
        match child {
            Some(c) => self.with(c),
            None => self,
        }
    }

    fn with_all(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Print the entity in a WKT file as a tree, or as JSON.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, holds no entity, or cannot be
/// serialized to JSON.
///
/// # Examples
///
/// ```no_run
/// use geowkt_cli::commands::inspect;
///
/// # fn main() -> Result<(), geowkt_cli::error::CliError> {
/// inspect("wgs84.prj", false)?;
/// inspect("wgs84.prj", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, json: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let value = read_value(file, &content, &ParseOptions::default())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_tree(&build_tree(&value)));
    }
    Ok(())
}

/// Render a tree with box-drawing guides, one entity per line.
pub fn render_tree(root: &TreeNode) -> String {
    let mut out = String::new();
    push_line(&mut out, root);
    render_children(&mut out, &root.children, "");
    out
}

fn push_line(out: &mut String, node: &TreeNode) {
    out.push_str(&node.label.cyan().bold().to_string());
    if !node.detail.is_empty() {
        out.push(' ');
        out.push_str(&node.detail);
    }
    out.push('\n');
}

fn render_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        push_line(out, child);
        let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
        render_children(out, &child.children, &nested);
    }
}

/// Build the inspect tree for any parsed value.
pub fn build_tree(value: &WktValue) -> TreeNode {
    match value {
        WktValue::Number(n) => TreeNode::leaf("NUMBER", format_number(*n)),
        WktValue::Text(s) => TreeNode::leaf("TEXT", quoted(s)),
        WktValue::Keyword(k) => TreeNode::leaf("KEYWORD", k.to_string()),
        WktValue::Authority(a) => authority_node(a),
        WktValue::Axis(a) => axis_node(a),
        WktValue::Parameter(p) => parameter_node(p),
        WktValue::Operation(op) => operation_node(op),
        WktValue::OperationMethod(m) => projection_node(m),
        WktValue::Crs(crs) => crs_node(crs),
        WktValue::Datum(d) => datum_node(d),
        WktValue::Spheroid(s) => spheroid_node(s),
        WktValue::PrimeMeridian(pm) => prime_meridian_node(pm),
        WktValue::Unit(u) => unit_node(u),
        WktValue::Helmert(h) => helmert_node(h),
    }
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

fn authority_node(a: &AuthorityTag) -> TreeNode {
    TreeNode::leaf("AUTHORITY", format!("{}:{}", a.name, a.code))
}

fn authority_child(a: &Option<AuthorityTag>) -> Option<TreeNode> {
    a.as_ref().map(authority_node)
}

fn axis_node(a: &Axis) -> TreeNode {
    TreeNode::leaf("AXIS", format!("{} {}", quoted(&a.name), a.orientation))
}

fn unit_node(u: &Unit) -> TreeNode {
    let kind = match u.kind {
        UnitKind::Length => "length",
        UnitKind::Angle => "angle",
    };
    TreeNode::leaf(
        "UNIT",
        format!("{} {} ({})", quoted(&u.name), format_number(u.factor), kind),
    )
    .with_opt(authority_child(&u.authority))
}

fn spheroid_node(s: &Spheroid) -> TreeNode {
    TreeNode::leaf(
        "SPHEROID",
        format!(
            "{} a={} 1/f={}",
            quoted(&s.name),
            format_number(s.semi_major_axis),
            format_number(s.inverse_flattening)
        ),
    )
    .with_opt(authority_child(&s.authority))
}

fn prime_meridian_node(pm: &PrimeMeridian) -> TreeNode {
    TreeNode::leaf(
        "PRIMEM",
        format!("{} {}", quoted(&pm.name), format_number(pm.longitude)),
    )
    .with_opt(authority_child(&pm.authority))
}

fn helmert_node(h: &Helmert7) -> TreeNode {
    let values: Vec<String> = h.values().iter().map(|v| format_number(*v)).collect();
    TreeNode::leaf("TOWGS84", values.join(","))
}

fn horizontal_datum_node(d: &HorizontalDatum) -> TreeNode {
    TreeNode::leaf("DATUM", quoted(&d.name))
        .with(spheroid_node(&d.spheroid))
        .with_opt(d.to_wgs84.as_ref().map(helmert_node))
        .with_opt(d.prime_meridian.as_deref().map(prime_meridian_node))
        .with_opt(authority_child(&d.authority))
}

fn basic_datum_node(label: &'static str, d: &BasicDatum) -> TreeNode {
    TreeNode::leaf(
        label,
        format!("{} type={}", quoted(&d.name), d.datum_type.code()),
    )
    .with_opt(authority_child(&d.authority))
}

fn datum_node(d: &Datum) -> TreeNode {
    match d {
        Datum::Horizontal(h) => horizontal_datum_node(h),
        Datum::Vertical(b) => basic_datum_node("VERT_DATUM", b),
        Datum::Local(b) => basic_datum_node("LOCAL_DATUM", b),
    }
}

fn parameter_node(p: &NamedParameter) -> TreeNode {
    let value = match &p.value {
        ParameterValue::Number(n) => format_number(*n),
        ParameterValue::Text(s) => quoted(s),
        ParameterValue::Empty => "(empty)".to_string(),
    };
    TreeNode::leaf("PARAMETER", format!("{} = {}", quoted(&p.name), value))
}

fn projection_node(m: &OperationMethod) -> TreeNode {
    TreeNode::leaf("PROJECTION", quoted(&m.name)).with_opt(authority_child(&m.authority))
}

fn operation_node(op: &CoordinateOperation) -> TreeNode {
    match op {
        CoordinateOperation::Parameterized(p) => {
            let detail = if p.has_inverse {
                quoted(&p.name)
            } else {
                format!("{} (no inverse)", quoted(&p.name))
            };
            TreeNode::leaf("PARAM_MT", detail).with_all(p.parameters.iter().map(parameter_node))
        }
        CoordinateOperation::Concatenated(c) => {
            TreeNode::leaf("CONCAT_MT", format!("{} steps", c.steps.len()))
                .with_all(c.steps.iter().map(operation_node))
        }
        CoordinateOperation::Inverse(inv) => {
            TreeNode::leaf("INVERSE_MT", "").with(operation_node(&inv.core))
        }
        CoordinateOperation::PassThrough(pt) => TreeNode::leaf(
            "PASSTHROUGH_MT",
            format!("first ordinate {}", pt.first_affected_ordinate),
        )
        .with(operation_node(&pt.core)),
    }
}

fn crs_node(crs: &Crs) -> TreeNode {
    let head = TreeNode::leaf(crs.keyword(), quoted(crs.name()));
    match crs {
        Crs::Geographic(g) => head
            .with(horizontal_datum_node(&g.datum))
            .with(unit_node(&g.unit))
            .with_all(g.axes.iter().map(axis_node))
            .with_opt(authority_child(&g.authority)),
        Crs::Geocentric(g) => head
            .with(horizontal_datum_node(&g.datum))
            .with(unit_node(&g.unit))
            .with_all(g.axes.iter().map(axis_node))
            .with_opt(authority_child(&g.authority)),
        Crs::Projected(p) => {
            let method = p
                .projection
                .method
                .as_deref()
                .map(projection_node)
                .unwrap_or_else(|| TreeNode::leaf("PROJECTION", quoted(&p.projection.name)));
            head.with(crs_node(&p.base))
                .with(method)
                .with_all(p.projection.parameters.iter().map(parameter_node))
                .with(unit_node(&p.unit))
                .with_all(p.axes.iter().map(axis_node))
                .with_opt(authority_child(&p.authority))
        }
        Crs::Vertical(v) => head
            .with(datum_node(&v.datum))
            .with(unit_node(&v.unit))
            .with(axis_node(&v.axis))
            .with_opt(authority_child(&v.authority)),
        Crs::Local(l) => head
            .with(datum_node(&l.datum))
            .with(unit_node(&l.unit))
            .with_all(l.axes.iter().map(axis_node))
            .with_opt(authority_child(&l.authority)),
        Crs::Compound(c) => head
            .with(crs_node(&c.head))
            .with(crs_node(&c.tail))
            .with_opt(authority_child(&c.authority)),
        Crs::Fitted(f) => head.with(operation_node(&f.to_base)).with(crs_node(&f.base)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geowkt::parse;

    fn tree(wkt: &str) -> TreeNode {
        build_tree(&parse(wkt).unwrap().unwrap())
    }

    // ==================== build_tree tests ====================

    #[test]
    fn test_geographic_tree_shape() {
        let node = tree(
            r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.0174532925199433]]"#,
        );
        assert_eq!(node.label, "GEOGCS");
        assert_eq!(node.detail, "\"WGS 84\"");
        let labels: Vec<_> = node.children.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["DATUM", "UNIT"]);

        let datum = &node.children[0];
        let datum_labels: Vec<_> = datum.children.iter().map(|c| c.label).collect();
        assert_eq!(datum_labels, vec!["SPHEROID", "PRIMEM"]);
        assert_eq!(datum.children[0].detail, "\"WGS 84\" a=6378137 1/f=298.257223563");
    }

    #[test]
    fn test_operation_tree() {
        let node = tree(
            r#"CONCAT_MT[PARAM_MT["Affine",PARAMETER["elt_0_0",2]],INVERSE_MT[PARAM_MT["Molodenski"]]]"#,
        );
        assert_eq!(node.label, "CONCAT_MT");
        assert_eq!(node.detail, "2 steps");
        assert_eq!(node.children[0].children[0].detail, "\"elt 0 0\" = 2");
        assert_eq!(node.children[1].label, "INVERSE_MT");
        assert_eq!(node.children[1].children[0].detail, "\"Molodenski\"");
    }

    #[test]
    fn test_parameter_values() {
        let node = tree(r#"PARAM_MT["X",PARAMETER["a","text"],PARAMETER["b"]]"#);
        assert_eq!(node.children[0].detail, "\"a\" = \"text\"");
        assert_eq!(node.children[1].detail, "\"b\" = (empty)");
    }

    #[test]
    fn test_vertical_tree() {
        let node = tree(
            r#"VERT_CS["Newlyn",VERT_DATUM["Ordnance Datum Newlyn",2005],UNIT["metre",1],AXIS["Up",UP]]"#,
        );
        assert_eq!(node.children[0].label, "VERT_DATUM");
        assert_eq!(node.children[0].detail, "\"Ordnance Datum Newlyn\" type=2005");
        assert_eq!(node.children[2].detail, "\"Up\" UP");
    }

    // ==================== render_tree tests ====================

    #[test]
    fn test_render_tree_guides() {
        colored::control::set_override(false);
        let root = TreeNode::leaf("CONCAT_MT", "2 steps")
            .with(TreeNode::leaf("PARAM_MT", "\"A\"").with(TreeNode::leaf("PARAMETER", "\"k\" = 1")))
            .with(TreeNode::leaf("PARAM_MT", "\"B\""));
        let text = render_tree(&root);
        assert_eq!(
            text,
            "CONCAT_MT 2 steps\n\
             ├── PARAM_MT \"A\"\n\
             │   └── PARAMETER \"k\" = 1\n\
             └── PARAM_MT \"B\"\n"
        );
    }

    #[test]
    fn test_render_empty_detail() {
        colored::control::set_override(false);
        let root = TreeNode::leaf("INVERSE_MT", "");
        assert_eq!(render_tree(&root), "INVERSE_MT\n");
    }
}
