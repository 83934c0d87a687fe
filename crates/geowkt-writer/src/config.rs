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

//! Writer configuration.

use geowkt_core::{DefaultDialect, Dialect};
use std::sync::Arc;

/// Default ceiling on bracket nesting while writing.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1000;

/// Configuration for WKT output.
///
/// # Examples
///
/// ```
/// use geowkt_writer::WriterConfig;
///
/// let config = WriterConfig::default();
/// assert!(!config.pretty);
/// assert!(config.correct_names);
/// assert!(config.suppress_projection_authority);
///
/// let config = WriterConfig::new().with_pretty(true).with_correct_names(false);
/// assert!(config.pretty);
/// assert!(!config.correct_names);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct WriterConfig {
    /// Break nested entities onto tab-indented lines.
    ///
    /// Default: `false`
    pub pretty: bool,

    /// Write spaces in parameter and projection names as underscores.
    ///
    /// Default: `true`
    pub correct_names: bool,

    /// Omit the `AUTHORITY` of a `PROJECTION`.
    ///
    /// Many consumers reject an authority in that position.
    ///
    /// Default: `true`
    pub suppress_projection_authority: bool,

    /// Lower-case parameter names.
    ///
    /// Default: `false`
    pub lowercase_parameter_names: bool,

    /// Keyword and orientation spelling.
    pub dialect: Arc<dyn Dialect>,

    /// Deepest bracket nesting the writer will produce.
    ///
    /// Default: 1000
    pub max_nesting_depth: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            correct_names: true,
            suppress_projection_authority: true,
            lowercase_parameter_names: false,
            dialect: Arc::new(DefaultDialect),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with pretty printing enabled.
    pub fn pretty() -> Self {
        Self::default().with_pretty(true)
    }

    /// Create a new builder for constructing a `WriterConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geowkt_writer::WriterConfig;
    ///
    /// let config = WriterConfig::builder()
    ///     .pretty(true)
    ///     .lowercase_parameter_names(true)
    ///     .build();
    /// assert!(config.pretty);
    /// assert!(config.lowercase_parameter_names);
    /// ```
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::new()
    }

    /// Set pretty printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set name correction.
    pub fn with_correct_names(mut self, correct_names: bool) -> Self {
        self.correct_names = correct_names;
        self
    }

    /// Parameter or projection name as written.
    pub(crate) fn fix_name(&self, name: &str) -> String {
        if self.correct_names {
            name.replace(' ', "_")
        } else {
            name.to_string()
        }
    }
}

/// Builder for constructing a `WriterConfig` with a chainable API.
#[derive(Debug, Clone, Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn correct_names(mut self, correct_names: bool) -> Self {
        self.config.correct_names = correct_names;
        self
    }

    /// Set whether `PROJECTION[...]` omits its authority.
    pub fn suppress_projection_authority(mut self, suppress: bool) -> Self {
        self.config.suppress_projection_authority = suppress;
        self
    }

    pub fn lowercase_parameter_names(mut self, lowercase: bool) -> Self {
        self.config.lowercase_parameter_names = lowercase;
        self
    }

    /// Set the dialect used to spell keywords and orientations.
    pub fn dialect(mut self, dialect: Arc<dyn Dialect>) -> Self {
        self.config.dialect = dialect;
        self
    }

    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Build the `WriterConfig` from this builder.
    pub fn build(self) -> WriterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default tests ====================

    #[test]
    fn test_defaults() {
        let config = WriterConfig::default();
        assert!(!config.pretty);
        assert!(config.correct_names);
        assert!(config.suppress_projection_authority);
        assert!(!config.lowercase_parameter_names);
        assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_pretty_constructor() {
        assert!(WriterConfig::pretty().pretty);
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_builder_all_options() {
        let config = WriterConfig::builder()
            .pretty(true)
            .correct_names(false)
            .suppress_projection_authority(false)
            .lowercase_parameter_names(true)
            .max_nesting_depth(8)
            .build();
        assert!(config.pretty);
        assert!(!config.correct_names);
        assert!(!config.suppress_projection_authority);
        assert!(config.lowercase_parameter_names);
        assert_eq!(config.max_nesting_depth, 8);
    }

    // ==================== Name tests ====================

    #[test]
    fn test_fix_name() {
        let config = WriterConfig::default();
        assert_eq!(config.fix_name("central meridian"), "central_meridian");
        let config = config.with_correct_names(false);
        assert_eq!(config.fix_name("central meridian"), "central meridian");
    }
}
