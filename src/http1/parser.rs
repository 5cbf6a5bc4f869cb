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

use crate::byte::{ is_field_value, is_token, is_url };
use crate::config::ParserConfig;
use crate::fsm::{ ParserValue, Success };
use crate::http1::body::{ self, BodyFraming, FramingHeaders };
use crate::http1::http_handler::{ CallbackError, Flow, HttpHandler };
use crate::http1::message::{ Headers, Message, MessageKind };
use crate::http1::method::Method;
use crate::http1::parser_error::{ Error, ParserError };
use crate::http1::parser_state::ParserState;
use crate::http1::parser_type::ParserType;
use crate::url::RequestTarget;

use byte_slice::ByteStream;
use std::str;
use tracing::{ debug, trace };

// -------------------------------------------------------------------------------------------------
// FLAGS
// -------------------------------------------------------------------------------------------------

/// A message has begun since construction or reset.
const F_MESSAGE: u8 = 0;

/// The current header line continues the previous header value.
const F_FOLD: u8 = 1;

/// Header states are parsing chunked trailers.
const F_TRAILER: u8 = 2;

/// A chunk extension has been located on the current chunk size line.
const F_EXTENSION: u8 = 3;

// -------------------------------------------------------------------------------------------------
// LIMITS
// -------------------------------------------------------------------------------------------------

/// Response start line prefix.
const HTTP_PREFIX: &[u8] = b"HTTP/";

/// Maximum digits within a status code.
const MAX_STATUS_DIGITS: usize = 3;

/// Maximum digits within a HTTP major or minor version.
const MAX_VERSION_DIGITS: usize = 3;

// -------------------------------------------------------------------------------------------------
// MACROS
// -------------------------------------------------------------------------------------------------

/// Indicates that a state flag is set.
macro_rules! has_flag {
    ($parser:expr, $flag:expr) => (
        $parser.flags & (1 << $flag) == (1 << $flag)
    );
}

/// Set a state flag.
macro_rules! set_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags |= 1 << $flag;
    });
}

/// Unset a state flag.
macro_rules! unset_flag {
    ($parser:expr, $flag:expr) => ({
        $parser.flags &= !(1 << $flag);
    });
}

// -------------------------------------------------------------------------------------------------

/// HTTP 1.x parser.
///
/// The parser owns its [`HttpHandler`](trait.HttpHandler.html), and keeps it across calls to
/// [`reset()`](#method.reset).
///
/// ```
/// use http_push::{ Parser, Success };
/// use http_push::handler::DebugHandler;
///
/// let mut parser = Parser::request(DebugHandler::new());
///
/// assert_eq!(parser.execute(b"GET /test?ok=1 HTTP/1.1\r\nHo").unwrap(), Success::Eos(27));
/// assert_eq!(parser.execute(b"st: h\r\n\r\n").unwrap(), Success::Eos(9));
///
/// assert_eq!(parser.request_path(), Some("/test"));
/// assert_eq!(parser.query_string(), Some("ok=1"));
/// assert_eq!(parser.headers().unwrap().get("host"), Some("h"));
/// assert_eq!(parser.handler().message_complete, 1);
/// ```
pub struct Parser<H: HttpHandler> {
    /// Total byte count processed.
    byte_count: usize,

    /// Error returned from the most recent handler callback.
    callback_error: Option<CallbackError>,

    /// Parser limits.
    config: ParserConfig,

    /// Error that killed the parser.
    error: Option<ParserError>,

    /// Header field being collected.
    field: Vec<u8>,

    /// State flags.
    flags: u8,

    /// Body framing of the current message.
    framing: BodyFraming,

    /// Handler implementation.
    handler: H,

    /// Amount of bytes within the start line and header block, or the trailer block.
    head_size: usize,

    /// Amount of header lines within the current message.
    header_count: usize,

    /// Index within the current token, or amount of collected digits.
    index: usize,

    /// Content length or chunk size remaining.
    length: u64,

    /// HTTP major version while the minor version is collected.
    major: u16,

    /// Current message.
    message: Message,

    /// Collected decimal number.
    number: u64,

    /// Parser type.
    parser_type: ParserType,

    /// Current state.
    state: ParserState,

    /// Method, URL, or reason phrase being collected.
    token: Vec<u8>,

    /// Header value being collected.
    value: Vec<u8>
}

impl<H: HttpHandler> Parser<H> {
    /// Create a new `Parser` of `parser_type` with default limits.
    pub fn new(parser_type: ParserType, handler: H) -> Parser<H> {
        Parser::with_config(parser_type, handler, ParserConfig::default())
    }

    /// Create a new `Parser` that detects requests and responses.
    pub fn both(handler: H) -> Parser<H> {
        Parser::new(ParserType::Both, handler)
    }

    /// Create a new `Parser` that parses requests.
    pub fn request(handler: H) -> Parser<H> {
        Parser::new(ParserType::Request, handler)
    }

    /// Create a new `Parser` that parses responses.
    pub fn response(handler: H) -> Parser<H> {
        Parser::new(ParserType::Response, handler)
    }

    /// Create a new `Parser` of `parser_type` with `config` limits.
    pub fn with_config(parser_type: ParserType, handler: H, config: ParserConfig) -> Parser<H> {
        Parser{
            byte_count:     0,
            callback_error: None,
            config,
            error:          None,
            field:          Vec::new(),
            flags:          0,
            framing:        BodyFraming::None,
            handler,
            head_size:      0,
            header_count:   0,
            index:          0,
            length:         0,
            major:          0,
            message:        Message::new(default_kind(parser_type)),
            number:         0,
            parser_type,
            state:          ParserState::MessageStart,
            token:          Vec::new(),
            value:          Vec::new()
        }
    }

    /// Retrieve the total byte count processed since the instantiation of `Parser`, or since the
    /// most recent reset.
    ///
    /// The byte count is updated when `execute()` completes. For precise accuracy, the best time
    /// to retrieve the byte count is outside of all callbacks.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Retrieve the parser limits.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Retrieve the error that killed the parser.
    pub fn error(&self) -> Option<ParserError> {
        self.error
    }

    /// Parse a slice of stream data.
    ///
    /// This may be executed any amount of times with successive slices of one stream. Slices may
    /// be split at any byte offset.
    ///
    /// **Returns:**
    ///
    /// - [`Success::Eos`](../fsm/enum.Success.html#variant.Eos) when all bytes were processed.
    /// - [`Success::Paused`](../fsm/enum.Success.html#variant.Paused) when
    ///   [`on_headers_complete()`](trait.HttpHandler.html#method.on_headers_complete) returned
    ///   [`Flow::Pause`](enum.Flow.html#variant.Pause).
    /// - [`Success::Finished`](../fsm/enum.Success.html#variant.Finished) when the message was an
    ///   upgrade, after which all calls return `Success::Finished(0)` until reset.
    ///
    /// **Errors:**
    ///
    /// Upon a parse error or a callback error the parser dies, and each following call returns
    /// the same [`ParserError`](enum.ParserError.html) until reset.
    pub fn execute(&mut self, stream: &[u8]) -> Result<Success, Error> {
        if let Some(error) = self.error {
            return Err(Error::Parse(error));
        }

        self.parse(&mut ByteStream::new(stream))
    }

    /// Signal that the stream has ended.
    ///
    /// A body that runs until the end of the stream is completed, and
    /// [`on_message_complete()`](trait.HttpHandler.html#method.on_message_complete) is executed.
    /// Between messages and after an upgrade this does nothing. Within any other message, the
    /// parser dies with [`ParserError::UnexpectedEof`](enum.ParserError.html#variant.UnexpectedEof).
    pub fn finish(&mut self) -> Result<(), Error> {
        if let Some(error) = self.error {
            return Err(Error::Parse(error));
        }

        match self.state {
            ParserState::MessageStart | ParserState::Upgraded => {
                Ok(())
            },
            ParserState::BodyUntilClose | ParserState::MessageDone => {
                set_state!(self, MessageDone);

                self.parse(&mut ByteStream::new(&[])).map(|_| ())
            },
            _ => {
                Err(self.die(ParserError::UnexpectedEof))
            }
        }
    }

    /// Retrieve the body framing of the current message.
    ///
    /// This is selected once headers are complete.
    pub fn framing(&self) -> BodyFraming {
        self.framing
    }

    /// Retrieve the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Retrieve the mutable handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the parser and retrieve the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Retrieve the current message, or the most recently completed message.
    ///
    /// This is `None` until a message begins, and after each reset.
    pub fn message(&self) -> Option<&Message> {
        if has_flag!(self, F_MESSAGE) {
            Some(&self.message)
        } else {
            None
        }
    }

    /// Retrieve the parser type.
    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Reset `Parser` to its initial state. The handler and limits are kept.
    ///
    /// This is legal at any time, including mid-message and after an error.
    ///
    /// **Returns:**
    ///
    /// `true`.
    pub fn reset(&mut self) -> bool {
        self.byte_count     = 0;
        self.callback_error = None;
        self.error          = None;
        self.flags          = 0;
        self.framing        = BodyFraming::None;
        self.head_size      = 0;
        self.header_count   = 0;
        self.index          = 0;
        self.length         = 0;
        self.major          = 0;
        self.message        = Message::new(default_kind(self.parser_type));
        self.number         = 0;
        self.state          = ParserState::MessageStart;

        self.field.clear();
        self.token.clear();
        self.value.clear();

        trace!("parser reset");

        true
    }

    /// Retrieve the current state.
    pub fn state(&self) -> ParserState {
        self.state
    }

    // ---------------------------------------------------------------------------------------------
    // MESSAGE INSPECTION
    // ---------------------------------------------------------------------------------------------

    /// Retrieve the request URL fragment.
    pub fn fragment(&self) -> Option<&str> {
        self.message().and_then(Message::target).map(RequestTarget::fragment)
    }

    /// Retrieve the header fields.
    pub fn headers(&self) -> Option<&Headers> {
        self.message().map(Message::headers)
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> Option<u16> {
        self.message().and_then(Message::http_major)
    }

    /// Retrieve the HTTP method.
    pub fn http_method(&self) -> Option<Method> {
        self.message().and_then(Message::method)
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> Option<u16> {
        self.message().and_then(Message::http_minor)
    }

    /// Retrieve the HTTP major and minor version.
    pub fn http_version(&self) -> Option<(u16, u16)> {
        self.message().and_then(Message::http_version)
    }

    /// Indicates that the connection may be reused after the current message.
    pub fn keep_alive(&self) -> bool {
        self.message().map_or(false, Message::keep_alive)
    }

    /// Retrieve the request URL query string.
    pub fn query_string(&self) -> Option<&str> {
        self.message().and_then(Message::target).map(RequestTarget::query_string)
    }

    /// Retrieve the response reason phrase.
    pub fn reason(&self) -> Option<&str> {
        self.message().and_then(Message::reason)
    }

    /// Retrieve the request URL path.
    pub fn request_path(&self) -> Option<&str> {
        self.message().and_then(Message::target).map(RequestTarget::path)
    }

    /// Retrieve the raw request URL.
    pub fn request_url(&self) -> Option<&str> {
        self.message().and_then(Message::target).map(RequestTarget::as_str)
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> Option<u16> {
        self.message().and_then(Message::status_code)
    }

    /// Indicates that the current message is an upgrade.
    pub fn upgrade(&self) -> bool {
        self.message().map_or(false, Message::upgrade)
    }

    // ---------------------------------------------------------------------------------------------
    // PARSER LOOP
    // ---------------------------------------------------------------------------------------------

    /// Kill the parser with `error`.
    fn die(&mut self, error: ParserError) -> Error {
        debug!(code = error.code(), state = ?self.state, "parser died");

        self.error = Some(error);
        self.state = ParserState::Dead;

        match (error, self.callback_error.take()) {
            (ParserError::Callback, Some(callback_error)) => Error::Callback(callback_error),
            _ => Error::Parse(error)
        }
    }

    /// Execute the current state function.
    #[inline]
    fn dispatch(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        match self.state {
            ParserState::Dead                 => self.dead(context),
            ParserState::Upgraded             => self.upgraded(context),
            ParserState::MessageStart         => self.message_start(context),
            ParserState::StartLine            => self.start_line(context),
            ParserState::RequestUrl           => self.request_target(context),
            ParserState::RequestHttp          => self.request_http(context),
            ParserState::RequestVersionMajor  => self.request_version_major(context),
            ParserState::RequestVersionMinor  => self.request_version_minor(context),
            ParserState::ResponseVersionMajor => self.response_version_major(context),
            ParserState::ResponseVersionMinor => self.response_version_minor(context),
            ParserState::ResponseStatusCode   => self.response_status_code(context),
            ParserState::ResponseReason       => self.response_reason(context),
            ParserState::StartLineLf          => self.start_line_lf(context),
            ParserState::HeaderLineStart      => self.header_line_start(context),
            ParserState::HeaderField          => self.header_field(context),
            ParserState::HeaderValueStart     => self.header_value_start(context),
            ParserState::HeaderValue          => self.header_value(context),
            ParserState::HeaderValueLf        => self.header_value_lf(context),
            ParserState::HeadersLf            => self.headers_lf(context),
            ParserState::HeadersDone          => self.headers_done(context),
            ParserState::BodyIdentity         => self.body_identity(context),
            ParserState::BodyUntilClose       => self.body_until_close(context),
            ParserState::ChunkSize            => self.chunk_size(context),
            ParserState::ChunkExtension       => self.chunk_extension(context),
            ParserState::ChunkSizeLf          => self.chunk_size_lf(context),
            ParserState::ChunkData            => self.chunk_data(context),
            ParserState::ChunkDataCr          => self.chunk_data_cr(context),
            ParserState::ChunkDataLf          => self.chunk_data_lf(context),
            ParserState::MessageDone          => self.message_done(context)
        }
    }

    /// Flush the collected header field and value to the handler and the message.
    fn flush_header(&mut self) -> Result<(), ParserError> {
        if self.field.is_empty() {
            return Ok(());
        }

        self.header_count += 1;

        if let Some(max) = self.config.max_headers() {
            if self.header_count > max {
                exit_error!(TooManyHeaders);
            }
        }

        let field = utf8_string(&self.field, ParserError::InvalidHeaderSyntax)?;
        let value = utf8_string(&self.value, ParserError::InvalidHeaderSyntax)?;

        self.field.clear();
        self.value.clear();

        callback!(self, on_header_field, &field);
        callback!(self, on_header_value, &value);

        self.message.headers.append(field, value);

        Ok(())
    }

    /// Main parser loop.
    fn parse(&mut self, context: &mut ByteStream) -> Result<Success, Error> {
        loop {
            let head  = self.state.is_head();
            let index = context.stream_index;

            let mut result = self.dispatch(context);

            if head && result.is_ok() {
                self.head_size += context.stream_index - index;

                if self.head_size > self.config.max_header_size() {
                    result = Err(ParserError::HeaderOverflow);
                }
            }

            match result {
                Ok(ParserValue::Continue) => {
                },
                Ok(ParserValue::Exit(success)) => {
                    self.byte_count += context.stream_index;

                    return Ok(success);
                },
                Err(error) => {
                    self.byte_count += context.stream_index;

                    return Err(self.die(error));
                }
            }
        }
    }

    // ---------------------------------------------------------------------------------------------
    // RFC RULES
    // ---------------------------------------------------------------------------------------------

    /*
    RFC 7230 section 3:

    HTTP-message   = start-line
                     *( header-field CRLF )
                     CRLF
                     [ message-body ]

    start-line     = request-line / status-line
    request-line   = method SP request-target SP HTTP-version CRLF
    status-line    = HTTP-version SP status-code SP reason-phrase CRLF
    HTTP-version   = HTTP-name "/" DIGIT "." DIGIT
    HTTP-name      = %x48.54.54.50 ; "HTTP", case-sensitive

    header-field   = field-name ":" OWS field-value OWS
    field-name     = token
    field-value    = *( field-content / obs-fold )
    obs-fold       = CRLF 1*( SP / HTAB )

    chunked-body   = *chunk
                     last-chunk
                     trailer-part
                     CRLF
    chunk          = chunk-size [ chunk-ext ] CRLF
                     chunk-data CRLF
    chunk-size     = 1*HEXDIG
    last-chunk     = 1*("0") [ chunk-ext ] CRLF

    Section 3.5: although the line terminator for the start-line and header fields is the
    sequence CRLF, a recipient MAY recognize a single LF as a line terminator and ignore any
    preceding CR.

    Leading empty lines before a request-line are ignored.
    */

    // ---------------------------------------------------------------------------------------------
    // START LINE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn message_start(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        bs_collect!(context,
            if context.byte != b'\r' && context.byte != b'\n' && !is_space_tab!(context.byte) {
                break;
            },
            exit_eos!(self, context)
        );

        bs_replay!(context);

        self.flags        = 1 << F_MESSAGE;
        self.framing      = BodyFraming::None;
        self.head_size    = 0;
        self.header_count = 0;
        self.message      = Message::new(default_kind(self.parser_type));

        self.token.clear();

        trace!(parser_type = %self.parser_type, "message begin");

        callback_transition!(
            self,
            context,
            on_message_begin,
            (),
            StartLine
        );
    }

    #[inline]
    fn start_line(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte == b' ' && self.parser_type.accepts_request() {
                match Method::from_bytes(&self.token) {
                    Some(method) => {
                        self.message.kind   = MessageKind::Request;
                        self.message.method = Some(method);

                        self.token.clear();

                        transition!(
                            self,
                            context,
                            RequestUrl
                        );
                    },
                    None => exit_error!(InvalidMethod, context.byte)
                }
            }

            self.token.push(context.byte);

            if self.parser_type.accepts_response() && HTTP_PREFIX.starts_with(&self.token) {
                if self.token.len() == HTTP_PREFIX.len() {
                    self.index        = 0;
                    self.message.kind = MessageKind::Response;
                    self.number       = 0;

                    self.token.clear();

                    transition!(
                        self,
                        context,
                        ResponseVersionMajor
                    );
                }
            } else if !self.parser_type.accepts_request() {
                exit_error!(InvalidStartLine, context.byte);
            } else if !Method::is_prefix(&self.token) {
                exit_error!(InvalidMethod, context.byte);
            }
        }
    }

    #[inline]
    fn start_line_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(
                self,
                context,
                HeaderLineStart
            );
        }

        exit_error!(CrlfSequence, context.byte);
    }

    // ---------------------------------------------------------------------------------------------
    // REQUEST STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn request_target(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        collect_buffered!(
            self,
            context,
            token,

            // stop on this byte
            context.byte == b' ',

            // allow these bytes
            is_url(context.byte),

            // on invalid byte
            InvalidStartLine
        );

        if self.token.is_empty() {
            exit_error!(InvalidStartLine, context.byte);
        }

        let target = RequestTarget::new(utf8_string(&self.token, ParserError::InvalidStartLine)?);

        self.index = 0;

        self.token.clear();

        set_state!(self, RequestHttp);

        callback!(self, on_url, target.as_str());

        self.message.target = Some(target);

        transition!(self, context);
    }

    #[inline]
    fn request_http(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        loop {
            exit_if_eos!(self, context);
            bs_next!(context);

            if context.byte != HTTP_PREFIX[self.index] {
                exit_error!(InvalidVersion, context.byte);
            }

            self.index += 1;

            if self.index == HTTP_PREFIX.len() {
                self.index  = 0;
                self.number = 0;

                transition!(
                    self,
                    context,
                    RequestVersionMajor
                );
            }
        }
    }

    #[inline]
    fn request_version_major(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_digits!(self, context, MAX_VERSION_DIGITS, InvalidVersion);

        if context.byte == b'.' && self.index > 0 {
            self.index  = 0;
            self.major  = self.number as u16;
            self.number = 0;

            transition!(
                self,
                context,
                RequestVersionMinor
            );
        }

        exit_error!(InvalidVersion, context.byte);
    }

    #[inline]
    fn request_version_minor(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_digits!(self, context, MAX_VERSION_DIGITS, InvalidVersion);

        if self.index > 0 && (context.byte == b'\r' || context.byte == b'\n') {
            self.message.version = Some((self.major, self.number as u16));

            if context.byte == b'\n' {
                bs_replay!(context);
            }

            transition!(
                self,
                context,
                StartLineLf
            );
        }

        exit_error!(InvalidVersion, context.byte);
    }

    // ---------------------------------------------------------------------------------------------
    // RESPONSE STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn response_version_major(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_digits!(self, context, MAX_VERSION_DIGITS, InvalidVersion);

        if context.byte == b'.' && self.index > 0 {
            self.index  = 0;
            self.major  = self.number as u16;
            self.number = 0;

            transition!(
                self,
                context,
                ResponseVersionMinor
            );
        }

        exit_error!(InvalidVersion, context.byte);
    }

    #[inline]
    fn response_version_minor(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_digits!(self, context, MAX_VERSION_DIGITS, InvalidVersion);

        if context.byte == b' ' && self.index > 0 {
            self.index           = 0;
            self.message.version = Some((self.major, self.number as u16));
            self.number          = 0;

            transition!(
                self,
                context,
                ResponseStatusCode
            );
        }

        exit_error!(InvalidVersion, context.byte);
    }

    #[inline]
    fn response_status_code(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        collect_digits!(self, context, MAX_STATUS_DIGITS, InvalidStartLine);

        if self.index == 0 {
            exit_error!(InvalidStartLine, context.byte);
        }

        self.message.status_code = Some(self.number as u16);

        if context.byte == b' ' {
            transition!(
                self,
                context,
                ResponseReason
            );
        } else if context.byte == b'\r' {
            transition!(
                self,
                context,
                StartLineLf
            );
        } else if context.byte == b'\n' {
            bs_replay!(context);

            transition!(
                self,
                context,
                StartLineLf
            );
        }

        exit_error!(InvalidStartLine, context.byte);
    }

    #[inline]
    fn response_reason(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        collect_buffered!(
            self,
            context,
            token,

            // stop on these bytes
            context.byte == b'\r' || context.byte == b'\n',

            // allow these bytes
            is_field_value(context.byte),

            // on invalid byte
            InvalidStartLine
        );

        let reason = utf8_string(&self.token, ParserError::InvalidStartLine)?;

        self.message.reason = Some(reason.trim_matches(|c: char| c == ' ' || c == '\t')
                                         .to_string());

        self.token.clear();

        if context.byte == b'\n' {
            bs_replay!(context);
        }

        transition!(
            self,
            context,
            StartLineLf
        );
    }

    // ---------------------------------------------------------------------------------------------
    // HEADER STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn header_line_start(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if is_space_tab!(context.byte) {
            if self.field.is_empty() {
                // nothing to continue
                exit_error!(InvalidHeaderSyntax, context.byte);
            }

            // multiline value
            set_flag!(self, F_FOLD);

            transition!(
                self,
                context,
                HeaderValueStart
            );
        }

        self.flush_header()?;

        if context.byte == b'\r' {
            transition!(
                self,
                context,
                HeadersLf
            );
        } else if context.byte == b'\n' {
            bs_replay!(context);

            transition!(
                self,
                context,
                HeadersLf
            );
        } else if is_token(context.byte) {
            bs_replay!(context);

            transition!(
                self,
                context,
                HeaderField
            );
        }

        exit_error!(InvalidHeaderSyntax, context.byte);
    }

    #[inline]
    fn header_field(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        collect_buffered!(
            self,
            context,
            field,

            // stop on this byte
            context.byte == b':',

            // allow these bytes
            is_token(context.byte),

            // on invalid byte
            InvalidHeaderSyntax
        );

        transition!(
            self,
            context,
            HeaderValueStart
        );
    }

    #[inline]
    fn header_value_start(&mut self, context: &mut ByteStream)
    -> Result<ParserValue, ParserError> {
        consume_space_tab!(
            context,

            // on end-of-stream
            exit_eos!(self, context)
        );

        bs_replay!(context);

        if has_flag!(self, F_FOLD)
        && !self.value.is_empty()
        && context.byte != b'\r'
        && context.byte != b'\n' {
            // folded lines are joined with a single space
            self.value.push(b' ');
        }

        unset_flag!(self, F_FOLD);

        transition!(
            self,
            context,
            HeaderValue
        );
    }

    #[inline]
    fn header_value(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        collect_buffered!(
            self,
            context,
            value,

            // stop on these bytes
            context.byte == b'\r' || context.byte == b'\n',

            // allow these bytes
            is_field_value(context.byte),

            // on invalid byte
            InvalidHeaderSyntax
        );

        while let Some(&byte) = self.value.last() {
            if !is_space_tab!(byte) {
                break;
            }

            self.value.pop();
        }

        if context.byte == b'\n' {
            bs_replay!(context);
        }

        transition!(
            self,
            context,
            HeaderValueLf
        );
    }

    #[inline]
    fn header_value_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(
                self,
                context,
                HeaderLineStart
            );
        }

        exit_error!(CrlfSequence, context.byte);
    }

    #[inline]
    fn headers_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            transition!(
                self,
                context,
                HeadersDone
            );
        }

        exit_error!(CrlfSequence, context.byte);
    }

    #[inline]
    fn headers_done(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        if has_flag!(self, F_TRAILER) {
            transition!(
                self,
                context,
                MessageDone
            );
        }

        let framing = FramingHeaders::inspect(&self.message.headers);
        let intent  = framing.keep_alive(self.message.version.unwrap_or((1, 1)));

        self.message.content_length = framing.valid_content_length();
        self.message.upgrade        = framing.upgrade(&self.message);

        let flow = callback!(self, on_headers_complete, &self.message.headers);

        self.framing            = body::select(&self.message, &framing, flow == Flow::SkipBody)?;
        self.message.keep_alive = intent && self.framing != BodyFraming::UntilClose;

        debug!(
            framing    = ?self.framing,
            keep_alive = self.message.keep_alive,
            upgrade    = self.message.upgrade,
            "headers complete"
        );

        match self.framing {
            BodyFraming::Chunked => {
                self.index  = 0;
                self.length = 0;

                set_state!(self, ChunkSize);
            },
            BodyFraming::ContentLength(length) if length > 0 => {
                self.length = length;

                set_state!(self, BodyIdentity);
            },
            BodyFraming::UntilClose => {
                set_state!(self, BodyUntilClose);
            },
            _ => {
                set_state!(self, MessageDone);
            }
        }

        if flow == Flow::Pause {
            trace!(state = ?self.state, "paused after headers");

            exit_paused!(self, context);
        }

        transition!(self, context);
    }

    // ---------------------------------------------------------------------------------------------
    // BODY STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn body_identity(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let length = self.length.min(bs_available!(context) as u64) as usize;

        bs_collect_length!(context, length);

        self.length -= length as u64;

        if self.length == 0 {
            callback_transition!(
                self,
                context,
                on_body,
                (bs_slice!(context)),
                MessageDone
            );
        }

        callback_transition!(
            self,
            context,
            on_body,
            (bs_slice!(context)),
            BodyIdentity
        );
    }

    #[inline]
    fn body_until_close(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        bs_collect_length!(context, bs_available!(context));

        callback_transition!(
            self,
            context,
            on_body,
            (bs_slice!(context)),
            BodyUntilClose
        );
    }

    // ---------------------------------------------------------------------------------------------
    // CHUNK STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn chunk_size(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        collect_hex!(self, context, InvalidChunkSize);

        if self.index == 0 {
            exit_error!(InvalidChunkSize, context.byte);
        }

        if context.byte == b'\r' {
            transition!(
                self,
                context,
                ChunkSizeLf
            );
        } else if context.byte == b'\n' {
            bs_replay!(context);

            transition!(
                self,
                context,
                ChunkSizeLf
            );
        } else if context.byte == b';' || is_space_tab!(context.byte) {
            unset_flag!(self, F_EXTENSION);

            bs_replay!(context);

            transition!(
                self,
                context,
                ChunkExtension
            );
        }

        exit_error!(InvalidChunkSize, context.byte);
    }

    #[inline]
    fn chunk_extension(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        bs_collect!(context,
            if context.byte == b'\r' || context.byte == b'\n' {
                break;
            } else if context.byte == b';' {
                set_flag!(self, F_EXTENSION);
            } else if !has_flag!(self, F_EXTENSION) && !is_space_tab!(context.byte) {
                // only linear white space may precede the extensions
                exit_error!(InvalidChunkSize, context.byte);
            } else if !is_field_value(context.byte) {
                exit_error!(InvalidChunkSize, context.byte);
            },
            exit_eos!(self, context)
        );

        if context.byte == b'\n' {
            bs_replay!(context);
        }

        transition!(
            self,
            context,
            ChunkSizeLf
        );
    }

    #[inline]
    fn chunk_size_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte != b'\n' {
            exit_error!(CrlfSequence, context.byte);
        }

        if self.length == 0 {
            // last chunk, trailers follow
            set_flag!(self, F_TRAILER);

            self.head_size = 0;

            transition!(
                self,
                context,
                HeaderLineStart
            );
        }

        transition!(
            self,
            context,
            ChunkData
        );
    }

    #[inline]
    fn chunk_data(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);

        let length = self.length.min(bs_available!(context) as u64) as usize;

        bs_collect_length!(context, length);

        self.length -= length as u64;

        if self.length == 0 {
            callback_transition!(
                self,
                context,
                on_body,
                (bs_slice!(context)),
                ChunkDataCr
            );
        }

        callback_transition!(
            self,
            context,
            on_body,
            (bs_slice!(context)),
            ChunkData
        );
    }

    #[inline]
    fn chunk_data_cr(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\r' {
            transition!(
                self,
                context,
                ChunkDataLf
            );
        } else if context.byte == b'\n' {
            bs_replay!(context);

            transition!(
                self,
                context,
                ChunkDataLf
            );
        }

        exit_error!(CrlfSequence, context.byte);
    }

    #[inline]
    fn chunk_data_lf(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_if_eos!(self, context);
        bs_next!(context);

        if context.byte == b'\n' {
            self.index  = 0;
            self.length = 0;

            transition!(
                self,
                context,
                ChunkSize
            );
        }

        exit_error!(CrlfSequence, context.byte);
    }

    // ---------------------------------------------------------------------------------------------
    // FINISHED STATES
    // ---------------------------------------------------------------------------------------------

    #[inline]
    fn dead(&mut self, _context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        Err(self.error.unwrap_or(ParserError::UnexpectedEof))
    }

    #[inline]
    fn message_done(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        trace!(upgrade = self.message.upgrade, "message complete");

        if self.message.upgrade {
            set_state!(self, Upgraded);

            callback!(self, on_message_complete);

            exit_finished!(self, context);
        }

        callback_transition!(
            self,
            context,
            on_message_complete,
            (),
            MessageStart
        );
    }

    #[inline]
    fn upgraded(&mut self, context: &mut ByteStream) -> Result<ParserValue, ParserError> {
        exit_finished!(self, context);
    }
}

/// Convert collected bytes into a `String`.
///
/// Bytes 0x80 thru 0xFF are accepted while collecting, but only as part of valid UTF-8
/// sequences. The first byte that breaks a sequence is reported with `error`.
fn utf8_string(bytes: &[u8], error: fn(u8) -> ParserError) -> Result<String, ParserError> {
    str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|utf8_error| error(bytes[utf8_error.valid_up_to()]))
}

/// Retrieve the message kind assumed before the start line is parsed.
fn default_kind(parser_type: ParserType) -> MessageKind {
    if parser_type == ParserType::Response {
        MessageKind::Response
    } else {
        MessageKind::Request
    }
}
