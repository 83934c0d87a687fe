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

//! Reader configuration.

use crate::dialect::{DefaultDialect, Dialect, NumberCulture};
use crate::limits::Limits;
use crate::resolver::AuthorityResolver;
use std::fmt;
use std::sync::Arc;

/// Options controlling how WKT is read.
///
/// ParseOptions provides both direct field access and a fluent builder API.
///
/// # Examples
///
/// ```
/// use geowkt_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .strict(true)
///     .correct_names(false)
///     .non_invertible_method("Polynomial")
///     .build();
/// assert!(opts.strict);
/// assert!(!opts.correct_names);
/// assert!(!opts.is_invertible("polynomial"));
/// assert!(opts.is_invertible("Affine"));
/// ```
#[derive(Clone)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
    /// Report malformed input as a `Syntax` error instead of `Ok(None)`.
    pub strict: bool,
    /// Replace `_` with a space in parameter and projection names.
    pub correct_names: bool,
    /// Consult the resolvers when an entity carries an authority tag.
    pub resolve_authorities: bool,
    /// Tokens accepted inside numeric literals.
    pub culture: NumberCulture,
    pub dialect: Arc<dyn Dialect>,
    /// Consulted in order; the first answer wins.
    pub resolvers: Vec<Arc<dyn AuthorityResolver>>,
    /// `PARAM_MT` method names (case-insensitive) that have no inverse.
    pub non_invertible_methods: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            strict: false,
            correct_names: true,
            resolve_authorities: true,
            culture: NumberCulture::invariant(),
            dialect: Arc::new(DefaultDialect),
            resolvers: Vec::new(),
            non_invertible_methods: Vec::new(),
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("limits", &self.limits)
            .field("strict", &self.strict)
            .field("correct_names", &self.correct_names)
            .field("resolve_authorities", &self.resolve_authorities)
            .field("culture", &self.culture)
            .field("dialect", &self.dialect)
            .field("resolvers", &self.resolvers.len())
            .field("non_invertible_methods", &self.non_invertible_methods)
            .finish()
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }

    /// Whether a `PARAM_MT` method of this name can be inverted.
    pub fn is_invertible(&self, method_name: &str) -> bool {
        !self
            .non_invertible_methods
            .iter()
            .any(|m| m.eq_ignore_ascii_case(method_name))
    }

    /// Ask each resolver in turn, returning the first answer.
    ///
    /// Always `None` when authority resolution is disabled.
    pub fn resolve<T>(&self, lookup: impl Fn(&dyn AuthorityResolver) -> Option<T>) -> Option<T> {
        if !self.resolve_authorities {
            return None;
        }
        self.resolvers.iter().find_map(|r| lookup(r.as_ref()))
    }

    /// Apply name correction (`_` to space) when enabled.
    pub fn fix_name(&self, name: &str) -> String {
        if self.correct_names {
            name.replace('_', " ")
        } else {
            name.to_string()
        }
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Set the maximum bracket nesting depth (default: 100).
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_nesting_depth = depth;
        self
    }

    /// Set the maximum number of elements per parameter list (default: 10k).
    pub fn max_params(mut self, count: usize) -> Self {
        self.options.limits.max_params = count;
        self
    }

    /// Set the maximum length of a string or numeric token (default: 64k).
    pub fn max_token_length(mut self, length: usize) -> Self {
        self.options.limits.max_token_length = length;
        self
    }

    /// Set the maximum input size in bytes (default: 16M).
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.options.limits.max_input_size = size;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Set strict mode (default: false).
    ///
    /// When `true`, malformed input is a `Syntax` error carrying the reason.
    /// When `false`, it yields `Ok(None)`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Set name correction (default: true).
    pub fn correct_names(mut self, correct: bool) -> Self {
        self.options.correct_names = correct;
        self
    }

    /// Enable or disable authority resolution (default: true).
    pub fn resolve_authorities(mut self, resolve: bool) -> Self {
        self.options.resolve_authorities = resolve;
        self
    }

    pub fn culture(mut self, culture: NumberCulture) -> Self {
        self.options.culture = culture;
        self
    }

    pub fn dialect(mut self, dialect: Arc<dyn Dialect>) -> Self {
        self.options.dialect = dialect;
        self
    }

    /// Append a resolver. Resolvers are consulted in the order added.
    pub fn resolver(mut self, resolver: Arc<dyn AuthorityResolver>) -> Self {
        self.options.resolvers.push(resolver);
        self
    }

    /// Register a `PARAM_MT` method name as non-invertible.
    pub fn non_invertible_method(mut self, name: impl Into<String>) -> Self {
        self.options.non_invertible_methods.push(name.into());
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthorityTag, Unit};

    struct UnitResolver(&'static str);

    impl AuthorityResolver for UnitResolver {
        fn unit(&self, tag: &AuthorityTag) -> Option<Arc<Unit>> {
            (tag.code == self.0).then(Unit::metre)
        }
    }

    // ==================== Default tests ====================

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(!opts.strict);
        assert!(opts.correct_names);
        assert!(opts.resolve_authorities);
        assert!(opts.culture.is_invariant());
        assert!(opts.resolvers.is_empty());
        assert_eq!(opts.limits, Limits::default());
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_builder_sets_fields() {
        let opts = ParseOptions::builder()
            .max_depth(10)
            .max_params(20)
            .max_token_length(30)
            .max_input_size(40)
            .strict(true)
            .correct_names(false)
            .resolve_authorities(false)
            .non_invertible_method("Polynomial")
            .build();
        assert_eq!(opts.limits.max_nesting_depth, 10);
        assert_eq!(opts.limits.max_params, 20);
        assert_eq!(opts.limits.max_token_length, 30);
        assert_eq!(opts.limits.max_input_size, 40);
        assert!(opts.strict);
        assert!(!opts.correct_names);
        assert!(!opts.resolve_authorities);
        assert_eq!(opts.non_invertible_methods, vec!["Polynomial".to_string()]);
    }

    #[test]
    fn test_builder_default_matches_options_default() {
        let built = ParseOptionsBuilder::default().build();
        assert_eq!(built.limits, ParseOptions::default().limits);
        assert_eq!(built.strict, ParseOptions::default().strict);
    }

    // ==================== Policy tests ====================

    #[test]
    fn test_is_invertible_ignores_case() {
        let opts = ParseOptions::builder().non_invertible_method("X").build();
        assert!(!opts.is_invertible("X"));
        assert!(!opts.is_invertible("x"));
        assert!(opts.is_invertible("Mercator_1SP"));
    }

    #[test]
    fn test_fix_name() {
        assert_eq!(ParseOptions::default().fix_name("central_meridian"), "central meridian");
        let keep = ParseOptions::builder().correct_names(false).build();
        assert_eq!(keep.fix_name("central_meridian"), "central_meridian");
    }

    #[test]
    fn test_resolve_first_answer_wins() {
        let opts = ParseOptions::builder()
            .resolver(Arc::new(UnitResolver("1")))
            .resolver(Arc::new(UnitResolver("2")))
            .build();
        let tag = AuthorityTag::new("EPSG", "2");
        assert!(opts.resolve(|r| r.unit(&tag)).is_some());
        let missing = AuthorityTag::new("EPSG", "3");
        assert!(opts.resolve(|r| r.unit(&missing)).is_none());
    }

    #[test]
    fn test_resolve_disabled() {
        let opts = ParseOptions::builder()
            .resolver(Arc::new(UnitResolver("1")))
            .resolve_authorities(false)
            .build();
        let tag = AuthorityTag::new("EPSG", "1");
        assert!(opts.resolve(|r| r.unit(&tag)).is_none());
    }

    #[test]
    fn test_debug_hides_resolvers() {
        let opts = ParseOptions::builder().resolver(Arc::new(UnitResolver("1"))).build();
        let debug = format!("{:?}", opts);
        assert!(debug.contains("resolvers: 1"));
    }
}
