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

//! [`HttpHandler`](../../http1/trait.HttpHandler.html) implementation for debugging purposes.

use crate::http1::{ CallbackResult, Flow, Headers, HttpHandler };

use tracing::debug;

/// Recorded parser event.
#[derive(Clone,Debug,PartialEq,Eq)]
pub enum Event {
    /// Body data. Adjacent body segments are merged into one event.
    Body(Vec<u8>),

    /// Header field.
    HeaderField(String),

    /// Header value.
    HeaderValue(String),

    /// Headers complete, along with the amount of distinct header fields.
    HeadersComplete(usize),

    /// Message begin.
    MessageBegin,

    /// Message complete.
    MessageComplete,

    /// Request URL.
    Url(String)
}

/// `DebugHandler` records every parser event, and logs each one with `tracing` at debug level.
///
/// Because adjacent body segments are merged, two streams that differ only in how they were
/// split produce identical [`events`](#structfield.events).
///
/// If you're debugging large requests or responses, it's a good idea to pass fairly small chunks
/// of stream data at a time, and in between calls execute
/// [`reset()`](struct.DebugHandler.html#method.reset) when the recorded data is no longer
/// needed.
#[derive(Clone,Debug,Default)]
pub struct DebugHandler {
    /// All body data.
    pub body: Vec<u8>,

    /// Recorded events, in order.
    pub events: Vec<Event>,

    /// Flow returned from `on_headers_complete()`.
    pub flow: Flow,

    /// Header fields from the most recent `on_headers_complete()`.
    pub headers: Option<Headers>,

    /// Amount of `on_headers_complete()` executions.
    pub headers_complete: usize,

    /// Amount of `on_message_begin()` executions.
    pub message_begin: usize,

    /// Amount of `on_message_complete()` executions.
    pub message_complete: usize,

    /// Most recent request URL.
    pub url: String
}

impl DebugHandler {
    /// Create a new `DebugHandler`.
    pub fn new() -> DebugHandler {
        DebugHandler::default()
    }

    /// Create a new `DebugHandler` that returns `flow` from `on_headers_complete()`.
    pub fn with_flow(flow: Flow) -> DebugHandler {
        DebugHandler{
            flow,
            ..DebugHandler::default()
        }
    }

    /// Reset the recorded data. The configured flow is kept.
    pub fn reset(&mut self) {
        *self = DebugHandler::with_flow(self.flow);
    }
}

impl HttpHandler for DebugHandler {
    fn on_body(&mut self, data: &[u8]) -> CallbackResult {
        if data.iter().all(|byte| byte.is_ascii_graphic() || byte.is_ascii_whitespace()) {
            debug!(length = data.len(), data = %String::from_utf8_lossy(data), "on_body");
        } else {
            debug!(length = data.len(), "on_body *hidden*");
        }

        self.body.extend_from_slice(data);

        if let Some(Event::Body(previous)) = self.events.last_mut() {
            previous.extend_from_slice(data);
        } else {
            self.events.push(Event::Body(data.to_vec()));
        }

        Ok(())
    }

    fn on_header_field(&mut self, field: &str) -> CallbackResult {
        debug!(field, "on_header_field");

        self.events.push(Event::HeaderField(field.to_string()));

        Ok(())
    }

    fn on_header_value(&mut self, value: &str) -> CallbackResult {
        debug!(value, "on_header_value");

        self.events.push(Event::HeaderValue(value.to_string()));

        Ok(())
    }

    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        debug!(count = headers.len(), flow = ?self.flow, "on_headers_complete");

        self.events.push(Event::HeadersComplete(headers.len()));
        self.headers           = Some(headers.clone());
        self.headers_complete += 1;

        Ok(self.flow)
    }

    fn on_message_begin(&mut self) -> CallbackResult {
        debug!("on_message_begin");

        self.events.push(Event::MessageBegin);
        self.message_begin += 1;

        Ok(())
    }

    fn on_message_complete(&mut self) -> CallbackResult {
        debug!("on_message_complete");

        self.events.push(Event::MessageComplete);
        self.message_complete += 1;

        Ok(())
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        debug!(url, "on_url");

        self.events.push(Event::Url(url.to_string()));
        self.url = url.to_string();

        Ok(())
    }
}
