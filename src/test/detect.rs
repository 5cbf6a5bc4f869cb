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

use crate::http1::{ MessageKind, Method, ParserError, ParserState, ParserType };
use crate::test::*;

#[test]
fn default_type() {
    assert_eq!(ParserType::default(), ParserType::Both);
}

#[test]
fn request() {
    let mut p = setup!(Both);

    assert_eos(&mut p, b"HEAD /index.html HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.message().unwrap().kind(), MessageKind::Request);
    assert_eq!(p.http_method(), Some(Method::Head));
    assert_eq!(p.request_url(), Some("/index.html"));
}

#[test]
fn response() {
    let mut p = setup!(Both);

    assert_eos(&mut p, b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.message().unwrap().kind(), MessageKind::Response);
    assert_eq!(p.status_code(), Some(200));
}

#[test]
fn per_message() {
    let mut p = setup!(Both);

    assert_eos(&mut p, b"GET / HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert!(p.message().unwrap().is_request());

    assert_eos(&mut p, b"HTTP/1.1 204 No Content\r\n\r\n", ParserState::MessageStart);

    assert!(!p.message().unwrap().is_request());
    assert_eq!(p.http_method(), None);
    assert_eq!(p.handler().message_complete, 2);
}

#[test]
fn undecided_across_calls() {
    let mut p = setup!(Both);

    assert_eos(&mut p, b"H", ParserState::StartLine);
    assert_eos(&mut p, b"TT", ParserState::StartLine);
    assert_eos(&mut p, b"P/1.0 200 OK\r\n", ParserState::HeaderLineStart);

    assert_eq!(p.message().unwrap().kind(), MessageKind::Response);
}

#[test]
fn neither() {
    let mut p = setup!(Both);

    assert_error(&mut p, b"HX", ParserError::InvalidMethod(b'X'));

    let mut p = setup!(Both);

    assert_error(&mut p, b"XYZ", ParserError::InvalidMethod(b'X'));
}
