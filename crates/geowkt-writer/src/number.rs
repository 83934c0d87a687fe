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

//! Round-trip-safe number formatting.

/// Smallest magnitude printed in positional notation.
const MIN_POSITIONAL: f64 = 1e-7;

/// Magnitude from which exponent notation is used.
const MAX_POSITIONAL: f64 = 1e21;

/// Format `value` so that reading the text back yields the same `f64`.
///
/// Whole numbers print without a fractional part, very large and very small
/// magnitudes use exponent notation. Non-finite values print as `NaN`,
/// `inf` and `-inf`, which the reader does not accept.
///
/// # Examples
///
/// ```
/// use geowkt_writer::format_number;
///
/// assert_eq!(format_number(110.0), "110");
/// assert_eq!(format_number(0.0174532925199433), "0.0174532925199433");
/// assert_eq!(format_number(6.02e23), "6.02e23");
/// ```
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (MIN_POSITIONAL..MAX_POSITIONAL).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}
