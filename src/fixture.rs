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

//! JSON message fixtures.
//!
//! A fixture file holds an array of messages, each with its raw bytes and the values the parser
//! is expected to report. Fixtures are executed whole or split at a byte offset, and the
//! resulting [`FixtureReport`](struct.FixtureReport.html) is compared against the expected
//! values.
//!
//! ```
//! use http_push::fixture::Fixture;
//!
//! let fixtures = Fixture::from_json(r#"[{
//!     "name":              "curl get",
//!     "type":              "HTTP_REQUEST",
//!     "raw":               "GET /test HTTP/1.1\r\nHost: h\r\n\r\n",
//!     "should_keep_alive": true,
//!     "method":            "GET",
//!     "http_major":        1,
//!     "http_minor":        1,
//!     "request_url":       "/test",
//!     "request_path":      "/test",
//!     "query_string":      "",
//!     "fragment":          "",
//!     "num_headers":       1,
//!     "headers":           { "Host": "h" },
//!     "body":              ""
//! }]"#).unwrap();
//!
//! for fixture in &fixtures {
//!     fixture.check(&fixture.run(None).unwrap()).unwrap();
//! }
//! ```

use crate::handler::{ DebugHandler, Event };
use crate::fsm::Success;
use crate::http1::{ Error, Message, Parser, ParserType };

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error as ThisError;
use tracing::debug;

/// Fixture errors.
#[derive(Debug,ThisError)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("fixture read failed: {0}")]
    Io(#[from] io::Error),

    /// The fixture file is not valid fixture JSON.
    #[error("fixture decode failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A reported value differs from the expected value.
    #[error("fixture {name:?}: {field} expected {expected} found {found}")]
    Mismatch {
        /// Fixture name.
        name: String,

        /// Compared field.
        field: &'static str,

        /// Expected value.
        expected: String,

        /// Reported value.
        found: String
    },

    /// The parser rejected the fixture.
    #[error("fixture {name:?}: {error}")]
    Parser {
        /// Fixture name.
        name: String,

        /// Parser error.
        error: Error
    }
}

/// Fixture message types.
#[derive(Clone,Copy,Debug,Deserialize,PartialEq,Eq)]
pub enum FixtureType {
    /// Request fixture.
    #[serde(rename = "HTTP_REQUEST")]
    Request,

    /// Response fixture.
    #[serde(rename = "HTTP_RESPONSE")]
    Response
}

/// Fixture message.
#[derive(Clone,Debug,Deserialize)]
pub struct Fixture {
    /// Fixture name.
    pub name: String,

    /// Message type.
    #[serde(rename = "type")]
    pub kind: FixtureType,

    /// Raw message stream.
    pub raw: String,

    /// Expected body.
    #[serde(default)]
    pub body: String,

    /// Expected body length, for bodies too large to spell out.
    #[serde(default)]
    pub body_size: Option<usize>,

    /// Expected request URL fragment.
    #[serde(default)]
    pub fragment: Option<String>,

    /// Expected header fields, after repeated fields have been combined.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Expected HTTP major version.
    pub http_major: u16,

    /// Expected HTTP minor version.
    pub http_minor: u16,

    /// Expected request method.
    #[serde(default)]
    pub method: Option<String>,

    /// Expected amount of distinct header fields.
    pub num_headers: usize,

    /// Expected request URL query string.
    #[serde(default)]
    pub query_string: Option<String>,

    /// Expected request URL path.
    #[serde(default)]
    pub request_path: Option<String>,

    /// Expected raw request URL.
    #[serde(default)]
    pub request_url: Option<String>,

    /// Expected connection reuse.
    pub should_keep_alive: bool,

    /// Expected response status code.
    #[serde(default)]
    pub status_code: Option<u16>,

    /// Indicates that the message switches protocols.
    #[serde(default)]
    pub upgrade: bool,

    /// Expected bytes following an upgrade.
    #[serde(default)]
    pub upgrade_data: Option<String>
}

/// Values reported while a fixture was executed.
#[derive(Clone,Debug)]
pub struct FixtureReport {
    /// Collected body.
    pub body: Vec<u8>,

    /// Parser byte count.
    pub byte_count: usize,

    /// Handler events.
    pub events: Vec<Event>,

    /// Parsed message.
    pub message: Option<Message>,

    /// Amount of completed messages.
    pub message_complete: usize,

    /// Bytes following an upgrade.
    pub upgrade_data: Option<Vec<u8>>
}

impl Fixture {
    /// Decode fixtures from a JSON array.
    pub fn from_json(json: &str) -> Result<Vec<Fixture>, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load fixtures from the JSON file at `path`.
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Fixture>, FixtureError> {
        let fixtures = Fixture::from_json(&fs::read_to_string(path.as_ref())?)?;

        debug!(path = %path.as_ref().display(), count = fixtures.len(), "fixtures loaded");

        Ok(fixtures)
    }

    /// Retrieve the parser type matching this fixture.
    pub fn parser_type(&self) -> ParserType {
        match self.kind {
            FixtureType::Request  => ParserType::Request,
            FixtureType::Response => ParserType::Response
        }
    }

    /// Execute the fixture with a new parser.
    ///
    /// The raw stream is handed over whole when `split` is `None`. Otherwise it is handed over
    /// as two slices divided at byte offset `split`. The end of the stream is signaled once all
    /// bytes have been handed over.
    pub fn run(&self, split: Option<usize>) -> Result<FixtureReport, FixtureError> {
        self.run_with(split, DebugHandler::new())
    }

    /// Execute the fixture with a new parser that reports to `handler`.
    ///
    /// Bytes left unconsumed by a pause are handed over again before the next slice.
    pub fn run_with(&self, split: Option<usize>, handler: DebugHandler)
    -> Result<FixtureReport, FixtureError> {
        let raw    = self.raw.as_bytes();
        let split  = split.unwrap_or(raw.len()).min(raw.len());
        let mut p  = Parser::new(self.parser_type(), handler);
        let mut upgrade_data = None;

        debug!(name = %self.name, split, "running fixture");

        let mut offset = 0;

        'slices: for slice in &[&raw[..split], &raw[split..]] {
            let mut slice = *slice;

            loop {
                match p.execute(slice).map_err(|error| self.parser_error(error))? {
                    Success::Finished(length) => {
                        upgrade_data = Some(raw[offset + length..].to_vec());

                        break 'slices;
                    },
                    Success::Paused(length) => {
                        offset += length;
                        slice   = &slice[length..];
                    },
                    Success::Eos(length) => {
                        offset += length;

                        break;
                    }
                }
            }
        }

        if upgrade_data.is_none() {
            p.finish().map_err(|error| self.parser_error(error))?;
        }

        let byte_count = p.byte_count();
        let message    = p.message().cloned();
        let handler    = p.into_handler();

        Ok(FixtureReport{
            body:             handler.body,
            byte_count,
            events:           handler.events,
            message,
            message_complete: handler.message_complete,
            upgrade_data
        })
    }

    /// Compare `report` against the expected values.
    pub fn check(&self, report: &FixtureReport) -> Result<(), FixtureError> {
        let message = match report.message {
            Some(ref message) => message,
            None => {
                return Err(self.mismatch("message", "a message", "none"));
            }
        };

        self.compare("message_complete", 1, report.message_complete)?;
        self.compare("http_major", Some(self.http_major), message.http_major())?;
        self.compare("http_minor", Some(self.http_minor), message.http_minor())?;
        self.compare("should_keep_alive", self.should_keep_alive, message.keep_alive())?;
        self.compare("upgrade", self.upgrade, message.upgrade())?;
        self.compare("method",
                     self.method.as_deref(),
                     message.method().map(|method| method.as_str()))?;

        match self.kind {
            FixtureType::Request => {
                let target = message.target();

                self.compare("request_url",
                             self.request_url.as_deref(),
                             target.map(|target| target.as_str()))?;
                self.compare("request_path",
                             self.request_path.as_deref(),
                             target.map(|target| target.path()))?;
                self.compare("query_string",
                             self.query_string.as_deref(),
                             target.map(|target| target.query_string()))?;
                self.compare("fragment",
                             self.fragment.as_deref(),
                             target.map(|target| target.fragment()))?;
            },
            FixtureType::Response => {
                self.compare("status_code", self.status_code, message.status_code())?;
            }
        }

        self.compare("num_headers", self.num_headers, message.headers().len())?;

        for (name, value) in &self.headers {
            self.compare("headers", Some(value.as_str()), message.headers().get(name))?;
        }

        match self.body_size {
            Some(size) => {
                self.compare("body_size", size, report.body.len())?;
            },
            None => {
                let body = String::from_utf8_lossy(&report.body);

                self.compare("body", self.body.as_str(), &*body)?;
            }
        }

        if let Some(ref data) = self.upgrade_data {
            self.compare("upgrade_data",
                         Some(data.as_bytes()),
                         report.upgrade_data.as_deref())?;
        }

        Ok(())
    }

    /// Compare one expected value.
    fn compare<T: PartialEq + std::fmt::Debug>(&self, field: &'static str, expected: T, found: T)
    -> Result<(), FixtureError> {
        if expected == found {
            Ok(())
        } else {
            Err(self.mismatch(field, format!("{:?}", expected), format!("{:?}", found)))
        }
    }

    fn mismatch<E, F>(&self, field: &'static str, expected: E, found: F) -> FixtureError
    where E : Into<String>, F : Into<String> {
        FixtureError::Mismatch{
            name:     self.name.clone(),
            field,
            expected: expected.into(),
            found:    found.into()
        }
    }

    fn parser_error(&self, error: Error) -> FixtureError {
        FixtureError::Parser{
            name: self.name.clone(),
            error
        }
    }
}
