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

//! Body framing selection.

use crate::http1::message::{ Headers, Message, MessageKind };
use crate::http1::method::Method;
use crate::http1::parser_error::ParserError;

/// Body framing modes.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum BodyFraming {
    /// Body is sent using chunked transfer encoding.
    Chunked,

    /// Body is exactly this many bytes.
    ContentLength(u64),

    /// Message has no body.
    None,

    /// Body continues until the end of the stream.
    UntilClose
}

impl Default for BodyFraming {
    fn default() -> BodyFraming {
        BodyFraming::None
    }
}

// -------------------------------------------------------------------------------------------------

/// Framing details gathered from the header fields.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq)]
pub struct FramingHeaders {
    /// Indicates that `Transfer-Encoding` includes `chunked`.
    pub chunked: bool,

    /// Indicates that `Connection` includes `close`.
    pub connection_close: bool,

    /// Indicates that `Connection` includes `keep-alive`.
    pub connection_keep_alive: bool,

    /// Indicates that `Connection` includes `upgrade`.
    pub connection_upgrade: bool,

    /// Declared content length, or the error found while parsing it.
    pub content_length: Option<Result<u64, ParserError>>,

    /// Indicates that an `Upgrade` field is present.
    pub upgrade: bool
}

/// Iterate the comma separated, trimmed, non-empty list elements of `value`.
fn list_elements(value: &str) -> impl Iterator<Item = &str> {
    value.split(',')
         .map(|element| element.trim_matches(|c: char| c == ' ' || c == '\t'))
         .filter(|element| !element.is_empty())
}

/// Parse a `Content-Length` value. Repeated fields are combined with `", "` before they arrive
/// here, so every list element must be the same decimal number.
fn parse_content_length(value: &str) -> Result<u64, ParserError> {
    let mut length = None;

    for element in value.split(',') {
        let element = element.trim_matches(|c: char| c == ' ' || c == '\t');

        if element.is_empty() || !element.bytes().all(|byte| is_digit!(byte)) {
            return Err(ParserError::InvalidContentLength);
        }

        let parsed = element.parse::<u64>().map_err(|_| ParserError::InvalidContentLength)?;

        match length {
            Some(previous) if previous != parsed => {
                return Err(ParserError::InvalidContentLength);
            },
            _ => {
                length = Some(parsed);
            }
        }
    }

    length.ok_or(ParserError::InvalidContentLength)
}

impl FramingHeaders {
    /// Gather framing details from `headers`.
    ///
    /// Nothing is rejected here. An invalid content length is kept until
    /// [`select()`](fn.select.html) knows whether the message can have a body at all.
    pub fn inspect(headers: &Headers) -> FramingHeaders {
        let mut framing = FramingHeaders::default();

        for (name, value) in headers {
            if name.eq_ignore_ascii_case("connection") {
                for element in list_elements(value) {
                    if element.eq_ignore_ascii_case("close") {
                        framing.connection_close = true;
                    } else if element.eq_ignore_ascii_case("keep-alive") {
                        framing.connection_keep_alive = true;
                    } else if element.eq_ignore_ascii_case("upgrade") {
                        framing.connection_upgrade = true;
                    }
                }
            } else if name.eq_ignore_ascii_case("content-length") {
                framing.content_length = Some(parse_content_length(value));
            } else if name.eq_ignore_ascii_case("transfer-encoding") {
                framing.chunked = list_elements(value)
                                      .any(|element| element.eq_ignore_ascii_case("chunked"));
            } else if name.eq_ignore_ascii_case("upgrade") {
                framing.upgrade = true;
            }
        }

        framing
    }

    /// Retrieve the declared content length, if it is valid.
    pub fn valid_content_length(&self) -> Option<u64> {
        self.content_length.and_then(Result::ok)
    }

    /// Indicates the connection intent declared by the message: HTTP/1.1 and later persist
    /// unless `Connection: close` is present, and earlier versions persist only when
    /// `Connection: keep-alive` is present.
    pub fn keep_alive(&self, version: (u16, u16)) -> bool {
        if version >= (1, 1) {
            !self.connection_close
        } else {
            self.connection_keep_alive
        }
    }

    /// Indicates that `message` switches protocols once its headers are complete.
    pub fn upgrade(&self, message: &Message) -> bool {
        match message.kind {
            MessageKind::Request => {
                message.method == Some(Method::Connect)
                || (self.upgrade && self.connection_upgrade)
            },
            MessageKind::Response => {
                message.status_code == Some(101) && self.upgrade
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Indicates that a response with `status_code` never has a body.
fn is_bodiless_status(status_code: Option<u16>) -> bool {
    match status_code {
        Some(code) => (100..200).contains(&code) || code == 204 || code == 304,
        None       => false
    }
}

/// Select the body framing for `message`.
///
/// `skip_body` is set when the handler declared that the message has no body, such as a
/// response to a HEAD request. Messages that cannot have a body are settled before the
/// framing fields are checked, so their `Transfer-Encoding` and `Content-Length` are never
/// rejected.
///
/// Returns `ParserError::ConflictingBodyFraming` when chunked transfer encoding and a content
/// length are both declared, and `ParserError::InvalidContentLength` when the content length
/// is not a non-negative decimal number.
pub fn select(message:   &Message,
              framing:   &FramingHeaders,
              skip_body: bool) -> Result<BodyFraming, ParserError> {
    if skip_body
    || message.upgrade
    || (message.kind == MessageKind::Response && is_bodiless_status(message.status_code)) {
        return Ok(BodyFraming::None);
    }

    match (framing.chunked, framing.content_length) {
        (true, Some(_)) => {
            Err(ParserError::ConflictingBodyFraming)
        },
        (true, None) => {
            Ok(BodyFraming::Chunked)
        },
        (false, Some(length)) => {
            length.map(BodyFraming::ContentLength)
        },
        (false, None) => {
            if message.kind == MessageKind::Response
            && !framing.keep_alive(message.version.unwrap_or((1, 1))) {
                Ok(BodyFraming::UntilClose)
            } else {
                Ok(BodyFraming::None)
            }
        }
    }
}
