// +-----------------------------------------------------------------------------------------------+
// | Copyright 2016 Sean Kerr                                                                      |
// |                                                                                               |
// | Licensed under the Apache License, Version 2.0 (the "License");                               |
// | you may not use this file except in compliance with the License.                              |
// | You may obtain a copy of the License at                                                       |
// |                                                                                               |
// |  http://www.apache.org/licenses/LICENSE-2.0                                                   |
// |                                                                                               |
// | Unless required by applicable law or agreed to in writing, software                           |
// | distributed under the License is distributed on an "AS IS" BASIS,                             |
// | WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.                      |
// | See the License for the specific language governing permissions and                           |
// | limitations under the License.                                                                |
// +-----------------------------------------------------------------------------------------------+
// | Author: Sean Kerr <sean@code-box.org>                                                         |
// +-----------------------------------------------------------------------------------------------+

//! Parser limits.

/// Default maximum amount of bytes within the start line and header block.
pub const DEFAULT_MAX_HEADER_SIZE: usize = 80 * 1024;

/// Parser limits.
///
/// ```
/// use http_push::ParserConfig;
///
/// let config = ParserConfig::new()
///                           .with_max_header_size(8 * 1024)
///                           .with_max_headers(64);
///
/// assert_eq!(config.max_header_size(), 8 * 1024);
/// assert_eq!(config.max_headers(), Some(64));
/// ```
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct ParserConfig {
    /// Maximum amount of bytes within the start line and header block, and within a chunked
    /// trailer block.
    max_header_size: usize,

    /// Maximum amount of header lines.
    max_headers: Option<usize>
}

impl ParserConfig {
    /// Create a new `ParserConfig` with default limits.
    pub fn new() -> ParserConfig {
        ParserConfig{
            max_header_size: DEFAULT_MAX_HEADER_SIZE,
            max_headers:     None
        }
    }

    /// Retrieve the maximum amount of bytes within the start line and header block.
    pub fn max_header_size(&self) -> usize {
        self.max_header_size
    }

    /// Retrieve the maximum amount of header lines, if limited.
    pub fn max_headers(&self) -> Option<usize> {
        self.max_headers
    }

    /// Set the maximum amount of bytes within the start line and header block.
    ///
    /// Exceeding this limit fails with
    /// [`ParserError::HeaderOverflow`](../http1/enum.ParserError.html#variant.HeaderOverflow).
    pub fn with_max_header_size(mut self, size: usize) -> ParserConfig {
        self.max_header_size = size;
        self
    }

    /// Set the maximum amount of header lines.
    ///
    /// Exceeding this limit fails with
    /// [`ParserError::TooManyHeaders`](../http1/enum.ParserError.html#variant.TooManyHeaders).
    pub fn with_max_headers(mut self, count: usize) -> ParserConfig {
        self.max_headers = Some(count);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig::new()
    }
}
