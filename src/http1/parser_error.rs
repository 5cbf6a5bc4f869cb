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

use crate::http1::http_handler::CallbackError;

use thiserror::Error;

/// Parser errors.
///
/// Every parser error is unrecoverable for the current message. The parser enters the
/// [`ParserState::Dead`](enum.ParserState.html#variant.Dead) state and returns the same error from
/// each call until [`Parser::reset()`](struct.Parser.html#method.reset) is executed.
#[derive(Clone,Copy,Debug,Error,PartialEq,Eq)]
pub enum ParserError {
    /// A handler callback returned an error.
    #[error("handler callback failed")]
    Callback,

    /// Both chunked transfer encoding and a content length were declared.
    #[error("conflicting body framing: chunked transfer encoding with content length")]
    ConflictingBodyFraming,

    /// Invalid CRLF sequence on byte `u8`.
    #[error("invalid CRLF sequence on byte {0}")]
    CrlfSequence(u8),

    /// The start line and header block exceeded the configured size.
    #[error("header size exceeds the configured limit")]
    HeaderOverflow,

    /// Invalid chunk size on byte `u8`.
    #[error("invalid chunk size on byte {0}")]
    InvalidChunkSize(u8),

    /// Non-numeric, negative, or disagreeing content length.
    #[error("invalid content length")]
    InvalidContentLength,

    /// Invalid header syntax on byte `u8`.
    #[error("invalid header syntax on byte {0}")]
    InvalidHeaderSyntax(u8),

    /// Invalid request method on byte `u8`.
    #[error("invalid method on byte {0}")]
    InvalidMethod(u8),

    /// Invalid start line on byte `u8`.
    #[error("invalid start line on byte {0}")]
    InvalidStartLine(u8),

    /// Invalid HTTP version on byte `u8`.
    #[error("invalid HTTP version on byte {0}")]
    InvalidVersion(u8),

    /// Header line count exceeded the configured limit.
    #[error("header count exceeds the configured limit")]
    TooManyHeaders,

    /// The stream ended before the message was complete.
    #[error("unexpected end of stream")]
    UnexpectedEof
}

impl ParserError {
    /// Retrieve the error code.
    ///
    /// ```
    /// use http_push::ParserError;
    ///
    /// assert_eq!(ParserError::InvalidMethod(b'L').code(), "INVALID_METHOD");
    /// ```
    pub fn code(&self) -> &'static str {
        match *self {
            ParserError::Callback               => "CALLBACK",
            ParserError::ConflictingBodyFraming => "CONFLICTING_BODY_FRAMING",
            ParserError::CrlfSequence(_)        => "CRLF_SEQUENCE",
            ParserError::HeaderOverflow         => "HEADER_OVERFLOW",
            ParserError::InvalidChunkSize(_)    => "INVALID_CHUNK_SIZE",
            ParserError::InvalidContentLength   => "INVALID_CONTENT_LENGTH",
            ParserError::InvalidHeaderSyntax(_) => "INVALID_HEADER_SYNTAX",
            ParserError::InvalidMethod(_)       => "INVALID_METHOD",
            ParserError::InvalidStartLine(_)    => "INVALID_START_LINE",
            ParserError::InvalidVersion(_)      => "INVALID_VERSION",
            ParserError::TooManyHeaders         => "TOO_MANY_HEADERS",
            ParserError::UnexpectedEof          => "UNEXPECTED_EOF"
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Errors returned from [`Parser::execute()`](struct.Parser.html#method.execute) and
/// [`Parser::finish()`](struct.Parser.html#method.finish).
#[derive(Debug,Error)]
pub enum Error {
    /// A handler callback returned this error. It is passed through unchanged.
    #[error("callback error: {0}")]
    Callback(CallbackError),

    /// The stream could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParserError)
}

impl Error {
    /// Retrieve the parser error, if this is a parse error.
    pub fn parser_error(&self) -> Option<ParserError> {
        match *self {
            Error::Parse(error) => Some(error),
            Error::Callback(_)  => None
        }
    }
}
