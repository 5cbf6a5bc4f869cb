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

use crate::http1::message::Headers;

use std::error;
use std::fmt;

/// Error returned from a handler callback.
pub type CallbackError = Box<dyn error::Error + Send + Sync>;

/// Handler callback return value.
pub type CallbackResult<T = ()> = Result<T, CallbackError>;

/// Parser flow requested by
/// [`HttpHandler::on_headers_complete()`](trait.HttpHandler.html#method.on_headers_complete).
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Flow {
    /// Continue parsing.
    Continue,

    /// Stop parsing after the blank line that ended the headers, and return
    /// [`Success::Paused`](../fsm/enum.Success.html#variant.Paused). The next call to
    /// [`Parser::execute()`](struct.Parser.html#method.execute) resumes with the body.
    Pause,

    /// The message has no body regardless of its header fields, such as a response to a HEAD
    /// request.
    SkipBody
}

impl Default for Flow {
    fn default() -> Flow {
        Flow::Continue
    }
}

// -------------------------------------------------------------------------------------------------

/// Type that handles HTTP/1.x parser events.
///
/// Every callback has a default implementation that does nothing. A callback returning `Err`
/// stops the parser, and the error is returned unchanged within
/// [`Error::Callback`](enum.Error.html#variant.Callback).
///
/// Callbacks marked *once per message* are executed exactly once for each message that reaches
/// that point. `on_url()`, `on_header_field()` and `on_header_value()` are executed once per
/// complete token, regardless of how the stream was split. `on_body()` may be executed any
/// amount of times per message.
#[allow(unused_variables)]
pub trait HttpHandler {
    /// Callback that is executed when a body segment has been located.
    ///
    /// *Note:* This may be executed multiple times in order to supply the entire body.
    fn on_body(&mut self, data: &[u8]) -> CallbackResult {
        Ok(())
    }

    /// Callback that is executed when a header field has been located. Within chunked trailers
    /// this is executed for each trailer field.
    fn on_header_field(&mut self, field: &str) -> CallbackResult {
        Ok(())
    }

    /// Callback that is executed when a header value has been located, directly after its
    /// field. Folded lines have been joined with a single space, and surrounding linear white
    /// space has been removed.
    ///
    /// Values that are not valid UTF-8 fail with `ParserError::InvalidHeaderSyntax` before this
    /// is executed.
    fn on_header_value(&mut self, value: &str) -> CallbackResult {
        Ok(())
    }

    /// Callback that is executed when the blank line ending the headers has been located. Once
    /// per message.
    ///
    /// **Returns:**
    ///
    /// The [`Flow`](enum.Flow.html) the parser should follow.
    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        Ok(Flow::Continue)
    }

    /// Callback that is executed when the first byte of a new message has been located. Once
    /// per message.
    fn on_message_begin(&mut self) -> CallbackResult {
        Ok(())
    }

    /// Callback that is executed when the message has been parsed entirely. Once per message.
    fn on_message_complete(&mut self) -> CallbackResult {
        Ok(())
    }

    /// Callback that is executed when the request URL has been located. URLs that are not valid
    /// UTF-8 fail with `ParserError::InvalidStartLine`.
    fn on_url(&mut self, url: &str) -> CallbackResult {
        Ok(())
    }
}

impl HttpHandler for () {
}

impl<T: HttpHandler + ?Sized> HttpHandler for &mut T {
    fn on_body(&mut self, data: &[u8]) -> CallbackResult {
        (**self).on_body(data)
    }

    fn on_header_field(&mut self, field: &str) -> CallbackResult {
        (**self).on_header_field(field)
    }

    fn on_header_value(&mut self, value: &str) -> CallbackResult {
        (**self).on_header_value(value)
    }

    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        (**self).on_headers_complete(headers)
    }

    fn on_message_begin(&mut self) -> CallbackResult {
        (**self).on_message_begin()
    }

    fn on_message_complete(&mut self) -> CallbackResult {
        (**self).on_message_complete()
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        (**self).on_url(url)
    }
}

// -------------------------------------------------------------------------------------------------

type BodyFn<'a>             = Box<dyn FnMut(&[u8]) -> CallbackResult + 'a>;
type HeadersCompleteFn<'a>  = Box<dyn FnMut(&Headers) -> CallbackResult<Flow> + 'a>;
type NotifyFn<'a>           = Box<dyn FnMut() -> CallbackResult + 'a>;
type TextFn<'a>             = Box<dyn FnMut(&str) -> CallbackResult + 'a>;

/// [`HttpHandler`](trait.HttpHandler.html) built from closures.
///
/// Callbacks that are not set do nothing.
///
/// ```
/// use http_push::{ Callbacks, Flow, Parser };
///
/// let mut body = Vec::new();
///
/// let callbacks = Callbacks::new()
///                           .on_headers_complete(|headers| {
///                               assert_eq!(headers.get("Host"), Some("h"));
///                               Ok(Flow::Continue)
///                           })
///                           .on_body(|data| {
///                               body.extend_from_slice(data);
///                               Ok(())
///                           });
///
/// let mut parser = Parser::request(callbacks);
///
/// parser.execute(b"POST / HTTP/1.1\r\nHost: h\r\nContent-Length: 2\r\n\r\nhi").unwrap();
///
/// drop(parser);
///
/// assert_eq!(body, b"hi");
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    body:             Option<BodyFn<'a>>,
    header_field:     Option<TextFn<'a>>,
    header_value:     Option<TextFn<'a>>,
    headers_complete: Option<HeadersCompleteFn<'a>>,
    message_begin:    Option<NotifyFn<'a>>,
    message_complete: Option<NotifyFn<'a>>,
    url:              Option<TextFn<'a>>
}

impl<'a> Callbacks<'a> {
    /// Create a new `Callbacks` without any callbacks set.
    pub fn new() -> Callbacks<'a> {
        Callbacks::default()
    }

    /// Set the body callback.
    pub fn on_body<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut(&[u8]) -> CallbackResult + 'a {
        self.body = Some(Box::new(function));
        self
    }

    /// Set the header field callback.
    pub fn on_header_field<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut(&str) -> CallbackResult + 'a {
        self.header_field = Some(Box::new(function));
        self
    }

    /// Set the header value callback.
    pub fn on_header_value<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut(&str) -> CallbackResult + 'a {
        self.header_value = Some(Box::new(function));
        self
    }

    /// Set the headers complete callback.
    pub fn on_headers_complete<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut(&Headers) -> CallbackResult<Flow> + 'a {
        self.headers_complete = Some(Box::new(function));
        self
    }

    /// Set the message begin callback.
    pub fn on_message_begin<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut() -> CallbackResult + 'a {
        self.message_begin = Some(Box::new(function));
        self
    }

    /// Set the message complete callback.
    pub fn on_message_complete<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut() -> CallbackResult + 'a {
        self.message_complete = Some(Box::new(function));
        self
    }

    /// Set the URL callback.
    pub fn on_url<F>(mut self, function: F) -> Callbacks<'a>
    where F : FnMut(&str) -> CallbackResult + 'a {
        self.url = Some(Box::new(function));
        self
    }
}

impl<'a> HttpHandler for Callbacks<'a> {
    fn on_body(&mut self, data: &[u8]) -> CallbackResult {
        self.body.as_mut().map_or(Ok(()), |function| function(data))
    }

    fn on_header_field(&mut self, field: &str) -> CallbackResult {
        self.header_field.as_mut().map_or(Ok(()), |function| function(field))
    }

    fn on_header_value(&mut self, value: &str) -> CallbackResult {
        self.header_value.as_mut().map_or(Ok(()), |function| function(value))
    }

    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        self.headers_complete.as_mut().map_or(Ok(Flow::Continue), |function| function(headers))
    }

    fn on_message_begin(&mut self) -> CallbackResult {
        self.message_begin.as_mut().map_or(Ok(()), |function| function())
    }

    fn on_message_complete(&mut self) -> CallbackResult {
        self.message_complete.as_mut().map_or(Ok(()), |function| function())
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        self.url.as_mut().map_or(Ok(()), |function| function(url))
    }
}

impl<'a> fmt::Debug for Callbacks<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("Callbacks")
                 .field("body",             &self.body.is_some())
                 .field("header_field",     &self.header_field.is_some())
                 .field("header_value",     &self.header_value.is_some())
                 .field("headers_complete", &self.headers_complete.is_some())
                 .field("message_begin",    &self.message_begin.is_some())
                 .field("message_complete", &self.message_complete.is_some())
                 .field("url",              &self.url.is_some())
                 .finish()
    }
}
