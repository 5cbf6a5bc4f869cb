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

/// Parser states.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
#[repr(u8)]
pub enum ParserState {
    /// An error was returned from a call to `Parser::execute()`.
    Dead,

    /// The message was an upgrade and the stream now belongs to another protocol.
    Upgraded,

    /// Stripping linear white space between messages.
    MessageStart,

    /// Parsing the request method, or detecting the `HTTP/` prefix of a response.
    StartLine,

    // ---------------------------------------------------------------------------------------------
    // REQUEST
    // ---------------------------------------------------------------------------------------------

    /// Parsing request URL.
    RequestUrl,

    /// Parsing request `HTTP/` prefix.
    RequestHttp,

    /// Parsing request HTTP major version.
    RequestVersionMajor,

    /// Parsing request HTTP minor version.
    RequestVersionMinor,

    // ---------------------------------------------------------------------------------------------
    // RESPONSE
    // ---------------------------------------------------------------------------------------------

    /// Parsing response HTTP major version.
    ResponseVersionMajor,

    /// Parsing response HTTP minor version.
    ResponseVersionMinor,

    /// Parsing response status code.
    ResponseStatusCode,

    /// Parsing response reason phrase.
    ResponseReason,

    /// Parsing line feed after the start line.
    StartLineLf,

    // ---------------------------------------------------------------------------------------------
    // HEADERS
    // ---------------------------------------------------------------------------------------------

    /// Parsing the first byte of a header line. Also used for chunked trailers.
    HeaderLineStart,

    /// Parsing header field.
    HeaderField,

    /// Stripping linear white space before header value.
    HeaderValueStart,

    /// Parsing header value.
    HeaderValue,

    /// Parsing line feed after header value.
    HeaderValueLf,

    /// Parsing line feed after the blank line ending the headers.
    HeadersLf,

    /// Headers have been parsed and body framing is selected.
    HeadersDone,

    // ---------------------------------------------------------------------------------------------
    // BODY
    // ---------------------------------------------------------------------------------------------

    /// Parsing body by content length.
    BodyIdentity,

    /// Parsing body until the end of the stream.
    BodyUntilClose,

    /// Parsing chunk size.
    ChunkSize,

    /// Parsing chunk extensions, or linear white space after chunk size.
    ChunkExtension,

    /// Parsing line feed after chunk size.
    ChunkSizeLf,

    /// Parsing chunk data.
    ChunkData,

    /// Parsing carriage return after chunk data.
    ChunkDataCr,

    /// Parsing line feed after chunk data.
    ChunkDataLf,

    /// Message has been parsed.
    MessageDone
}

impl ParserState {
    /// Indicates that this state parses the start line or header block, including chunked
    /// trailers. Bytes consumed in these states are counted against the header size limit.
    pub fn is_head(&self) -> bool {
        matches!(*self,
                 ParserState::StartLine
                 | ParserState::RequestUrl
                 | ParserState::RequestHttp
                 | ParserState::RequestVersionMajor
                 | ParserState::RequestVersionMinor
                 | ParserState::ResponseVersionMajor
                 | ParserState::ResponseVersionMinor
                 | ParserState::ResponseStatusCode
                 | ParserState::ResponseReason
                 | ParserState::StartLineLf
                 | ParserState::HeaderLineStart
                 | ParserState::HeaderField
                 | ParserState::HeaderValueStart
                 | ParserState::HeaderValue
                 | ParserState::HeaderValueLf
                 | ParserState::HeadersLf)
    }
}
