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

use crate::fsm::Success;
use crate::http1::{ Error, HttpHandler, Parser, ParserError, ParserState };

macro_rules! setup {
    () => (
        crate::http1::Parser::request(crate::handler::DebugHandler::new())
    );

    ($parser_type:ident) => (
        crate::http1::Parser::new(
            crate::http1::ParserType::$parser_type,
            crate::handler::DebugHandler::new()
        )
    );
}

mod byte;
mod callback;
mod detect;
mod method;
mod request;

fn assert_eos<H: HttpHandler>(
    parser: &mut Parser<H>,
    stream: &[u8],
    state:  ParserState
) {
    match parser.execute(stream) {
        Ok(Success::Eos(length)) => {
            assert_eq!(stream.len(), length);
            assert_eq!(state, parser.state());
        },
        result => panic!("assert_eos() Ok() match failed: {:?}", result)
    }
}

fn assert_error<H: HttpHandler>(
    parser: &mut Parser<H>,
    stream: &[u8],
    error:  ParserError
) {
    match parser.execute(stream) {
        Err(Error::Parse(error_)) => {
            assert_eq!(error, error_);
            assert_eq!(ParserState::Dead, parser.state());
        },
        result => panic!("assert_error() Err() match failed: {:?}", result)
    }
}

fn assert_finished<H: HttpHandler>(
    parser: &mut Parser<H>,
    stream: &[u8],
    length: usize
) {
    match parser.execute(stream) {
        Ok(Success::Finished(length_)) => {
            assert_eq!(length, length_);
            assert_eq!(ParserState::Upgraded, parser.state());
        },
        result => panic!("assert_finished() Ok() match failed: {:?}", result)
    }
}

fn assert_paused<H: HttpHandler>(
    parser: &mut Parser<H>,
    stream: &[u8],
    state:  ParserState,
    length: usize
) {
    match parser.execute(stream) {
        Ok(Success::Paused(length_)) => {
            assert_eq!(length, length_);
            assert_eq!(state, parser.state());
        },
        result => panic!("assert_paused() Ok() match failed: {:?}", result)
    }
}

/// Execute `stream` one byte at a time, expecting `Success::Eos` from each call.
fn iter_assert_eos<H: HttpHandler>(parser: &mut Parser<H>, stream: &[u8]) {
    for byte in stream {
        match parser.execute(&[*byte]) {
            Ok(Success::Eos(1)) => {
            },
            result => panic!(
                "iter_assert_eos() Success::Eos match failed on byte {:?}: {:?}",
                *byte as char,
                result
            )
        }
    }
}
