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

//! Declarative coordinate operation descriptions.
//!
//! WKT only describes an operation (method name and parameters, or a
//! composition of other operations). Executing it is left to a projection
//! library. The one piece of algebra modelled here is inversion, which
//! `INVERSE_MT` needs at read time.

use super::authority::AuthorityTag;
use crate::error::{WktError, WktResult};
use std::sync::Arc;

/// A named operation method, as given by `PROJECTION` or `PARAM_MT`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationMethod {
    pub name: String,
    pub authority: Option<AuthorityTag>,
}

impl OperationMethod {
    pub fn new(name: impl Into<String>, authority: Option<AuthorityTag>) -> Self {
        Self {
            name: name.into(),
            authority,
        }
    }
}

/// Value of a `PARAMETER`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterValue {
    Number(f64),
    Text(String),
    /// `PARAMETER["name"]` with no value.
    Empty,
}

/// A `(name, value)` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedParameter {
    pub name: String,
    pub value: ParameterValue,
}

impl NamedParameter {
    pub fn new(name: impl Into<String>, value: ParameterValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, ParameterValue::Number(value))
    }

    /// Numeric value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            ParameterValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// A method applied with an ordered list of parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterizedOperation {
    pub name: String,
    pub method: Option<Arc<OperationMethod>>,
    pub parameters: Vec<NamedParameter>,
    /// Whether the method can be run backwards.
    pub has_inverse: bool,
}

impl ParameterizedOperation {
    /// Invertible operation whose method carries the same name.
    pub fn new(name: impl Into<String>, parameters: Vec<NamedParameter>) -> Self {
        let name = name.into();
        Self {
            method: Some(Arc::new(OperationMethod::new(name.clone(), None))),
            name,
            parameters,
            has_inverse: true,
        }
    }

    /// Look up a parameter by exact name.
    pub fn parameter(&self, name: &str) -> Option<&NamedParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// Steps executed in list order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcatenatedOperation {
    pub steps: Vec<CoordinateOperation>,
}

/// The inverse of a forward operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseOperation {
    /// The forward definition.
    pub core: CoordinateOperation,
}

/// An operation applied to a subset of ordinates starting at
/// `first_affected_ordinate` (0-based); other ordinates pass unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassThroughOperation {
    pub first_affected_ordinate: usize,
    pub core: CoordinateOperation,
}

/// Any coordinate operation description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateOperation {
    /// `PARAM_MT[...]`
    Parameterized(Arc<ParameterizedOperation>),
    /// `CONCAT_MT[...]`
    Concatenated(Arc<ConcatenatedOperation>),
    /// `INVERSE_MT[...]`
    Inverse(Arc<InverseOperation>),
    /// `PASSTHROUGH_MT[...]`
    PassThrough(Arc<PassThroughOperation>),
}

impl CoordinateOperation {
    /// Display name; composite operations have none.
    pub fn name(&self) -> &str {
        match self {
            Self::Parameterized(op) => &op.name,
            Self::Inverse(op) => op.core.name(),
            Self::PassThrough(op) => op.core.name(),
            Self::Concatenated(_) => "",
        }
    }

    pub fn has_inverse(&self) -> bool {
        match self {
            Self::Parameterized(op) => op.has_inverse,
            Self::Concatenated(op) => op.steps.iter().all(Self::has_inverse),
            Self::Inverse(_) => true,
            Self::PassThrough(op) => op.core.has_inverse(),
        }
    }

    /// Compute the inverse description.
    ///
    /// Inverting an inverse unwraps it; a concatenation inverts to its steps
    /// inverted in reverse order.
    ///
    /// # Errors
    ///
    /// Returns a `NoInverse` error when any component cannot be inverted.
    pub fn inverse(&self) -> WktResult<CoordinateOperation> {
        match self {
            Self::Parameterized(op) => {
                if op.has_inverse {
                    Ok(Self::Inverse(Arc::new(InverseOperation { core: self.clone() })))
                } else {
                    Err(WktError::no_inverse(
                        format!("operation '{}' has no inverse", op.name),
                        0,
                    ))
                }
            }
            Self::Concatenated(op) => {
                let steps = op
                    .steps
                    .iter()
                    .rev()
                    .map(Self::inverse)
                    .collect::<WktResult<Vec<_>>>()?;
                Ok(Self::Concatenated(Arc::new(ConcatenatedOperation { steps })))
            }
            Self::Inverse(op) => Ok(op.core.clone()),
            Self::PassThrough(op) => Ok(Self::PassThrough(Arc::new(PassThroughOperation {
                first_affected_ordinate: op.first_affected_ordinate,
                core: op.core.inverse()?,
            }))),
        }
    }

    pub fn as_parameterized(&self) -> Option<&Arc<ParameterizedOperation>> {
        match self {
            Self::Parameterized(op) => Some(op),
            _ => None,
        }
    }
}

impl From<ParameterizedOperation> for CoordinateOperation {
    fn from(op: ParameterizedOperation) -> Self {
        Self::Parameterized(Arc::new(op))
    }
}
