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

//! Incremental, push oriented HTTP/1.x parser.
//!
//! Bytes are handed to [`Parser::execute()`](http1/struct.Parser.html#method.execute) in chunks
//! of any size, split at any offset, and parse events are delivered to an
//! [`HttpHandler`](http1/trait.HttpHandler.html) implementation as soon as each boundary is
//! reached. Message bodies are framed by content length, chunked transfer encoding, or by the end
//! of the stream.

#![crate_name = "http_push"]

#[macro_use]
extern crate byte_slice;

#[macro_use]
mod byte;

#[macro_use]
pub mod fsm;

#[macro_use]
mod collect;

pub mod config;
pub mod handler;
pub mod http1;
pub mod url;

#[cfg(feature = "fixtures")]
pub mod fixture;

#[cfg(test)]
mod test;

pub use crate::config::ParserConfig;
pub use crate::fsm::Success;
pub use crate::http1::{ BodyFraming,
                        CallbackError,
                        CallbackResult,
                        Callbacks,
                        Error,
                        Flow,
                        Headers,
                        HttpHandler,
                        Message,
                        MessageKind,
                        Method,
                        Parser,
                        ParserError,
                        ParserState,
                        ParserType };

/// Crate major version.
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Crate minor version.
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Crate patch version.
pub const VERSION_PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
