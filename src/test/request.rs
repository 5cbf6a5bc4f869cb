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

use crate::handler::Event;
use crate::http1::{ MessageKind, Method, ParserError, ParserState };
use crate::test::*;

const CURL_GET: &[u8] = b"GET /test HTTP/1.1\r\n\
                          User-Agent: curl/7.18.0\r\n\
                          Host: 0.0.0.0=5000\r\n\
                          Accept: */*\r\n\
                          \r\n";

#[test]
fn curl_get() {
    let mut p = setup!();

    assert_eos(&mut p, CURL_GET, ParserState::MessageStart);

    assert_eq!(p.http_method(), Some(Method::Get));
    assert_eq!(p.http_version(), Some((1, 1)));
    assert_eq!(p.request_url(), Some("/test"));
    assert_eq!(p.request_path(), Some("/test"));
    assert_eq!(p.query_string(), Some(""));
    assert_eq!(p.fragment(), Some(""));
    assert_eq!(p.status_code(), None);
    assert_eq!(p.message().unwrap().kind(), MessageKind::Request);
    assert!(p.keep_alive());
    assert!(!p.upgrade());

    let headers = p.headers().unwrap();

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.get("user-agent"), Some("curl/7.18.0"));
    assert_eq!(headers.get("HOST"), Some("0.0.0.0=5000"));
    assert_eq!(headers.get("Accept"), Some("*/*"));

    assert_eq!(
        p.handler().events,
        vec![Event::MessageBegin,
             Event::Url("/test".to_string()),
             Event::HeaderField("User-Agent".to_string()),
             Event::HeaderValue("curl/7.18.0".to_string()),
             Event::HeaderField("Host".to_string()),
             Event::HeaderValue("0.0.0.0=5000".to_string()),
             Event::HeaderField("Accept".to_string()),
             Event::HeaderValue("*/*".to_string()),
             Event::HeadersComplete(3),
             Event::MessageComplete]
    );

    assert_eq!(p.byte_count(), CURL_GET.len());
}

#[test]
fn curl_get_byte_at_a_time() {
    let mut whole = setup!();
    let mut split = setup!();

    assert_eos(&mut whole, CURL_GET, ParserState::MessageStart);

    iter_assert_eos(&mut split, CURL_GET);

    assert_eq!(whole.handler().events, split.handler().events);
    assert_eq!(whole.message(), split.message());
    assert_eq!(split.byte_count(), CURL_GET.len());
}

#[test]
fn post_with_body() {
    let mut p = setup!();

    assert_eos(
        &mut p,
        b"POST /post_identity_body_world?q=search#hey HTTP/1.1\r\n\
          Accept: */*\r\n\
          Content-Length: 5\r\n\
          \r\n\
          World",
        ParserState::MessageStart
    );

    assert_eq!(p.http_method(), Some(Method::Post));
    assert_eq!(p.request_url(), Some("/post_identity_body_world?q=search#hey"));
    assert_eq!(p.request_path(), Some("/post_identity_body_world"));
    assert_eq!(p.query_string(), Some("q=search"));
    assert_eq!(p.fragment(), Some("hey"));
    assert_eq!(p.message().unwrap().content_length(), Some(5));
    assert_eq!(p.handler().body, b"World");
    assert_eq!(p.handler().message_complete, 1);
}

#[test]
fn http_1_0_close() {
    let mut p = setup!();

    assert_eos(&mut p, b"GET / HTTP/1.0\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.http_major(), Some(1));
    assert_eq!(p.http_minor(), Some(0));
    assert!(!p.keep_alive());
}

#[test]
fn http_1_0_keep_alive() {
    let mut p = setup!();

    assert_eos(
        &mut p,
        b"GET / HTTP/1.0\r\nConnection: Keep-Alive\r\n\r\n",
        ParserState::MessageStart
    );

    assert!(p.keep_alive());
}

#[test]
fn http_1_1_connection_close() {
    let mut p = setup!();

    assert_eos(
        &mut p,
        b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n",
        ParserState::MessageStart
    );

    assert!(!p.keep_alive());
}

#[test]
fn leading_empty_lines() {
    let mut p = setup!();

    assert_eos(&mut p, b"\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.handler().message_begin, 0);
    assert!(p.message().is_none());

    assert_eos(&mut p, b"GET / HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.handler().message_begin, 1);
    assert_eq!(p.handler().message_complete, 1);
}

#[test]
fn line_feed_only() {
    let mut p = setup!();

    assert_eos(
        &mut p,
        b"GET /lf HTTP/1.1\nHost: example.com\nContent-Length: 2\n\nok",
        ParserState::MessageStart
    );

    assert_eq!(p.headers().unwrap().get("Host"), Some("example.com"));
    assert_eq!(p.handler().body, b"ok");
    assert_eq!(p.handler().message_complete, 1);
}

#[test]
fn asterisk_form() {
    let mut p = setup!();

    assert_eos(&mut p, b"OPTIONS * HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.http_method(), Some(Method::Options));
    assert_eq!(p.request_path(), Some("*"));
}

#[test]
fn absolute_form() {
    let mut p = setup!();

    assert_eos(
        &mut p,
        b"GET http://example.com:8080/a/b?c=d HTTP/1.1\r\n\r\n",
        ParserState::MessageStart
    );

    assert_eq!(p.request_url(), Some("http://example.com:8080/a/b?c=d"));
    assert_eq!(p.request_path(), Some("/a/b"));
    assert_eq!(p.query_string(), Some("c=d"));
}

#[test]
fn url_split_across_calls() {
    let mut p = setup!();

    assert_eos(&mut p, b"GET /fo", ParserState::RequestUrl);
    assert_eos(&mut p, b"o/ba", ParserState::RequestUrl);
    assert_eos(&mut p, b"r HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.handler().events[1], Event::Url("/foo/bar".to_string()));
}

#[test]
fn invalid_method() {
    let mut p = setup!();

    assert_error(&mut p, b"BLAH / HTTP/1.1\r\n\r\n", ParserError::InvalidMethod(b'L'));

    assert_eq!(p.handler().message_begin, 1);
    assert_eq!(p.handler().message_complete, 0);
}

#[test]
fn invalid_method_lower_case() {
    let mut p = setup!();

    assert_error(&mut p, b"get / HTTP/1.1\r\n\r\n", ParserError::InvalidMethod(b'g'));
}

#[test]
fn invalid_method_too_long() {
    let mut p = setup!();

    assert_error(&mut p, b"GETS / HTTP/1.1\r\n\r\n", ParserError::InvalidMethod(b'S'));
}

#[test]
fn invalid_method_prefix_only() {
    let mut p = setup!();

    // "PROP" is a prefix of PROPFIND, but not a method
    assert_error(&mut p, b"PROP / HTTP/1.1\r\n\r\n", ParserError::InvalidMethod(b' '));
}

#[test]
fn invalid_url_empty() {
    let mut p = setup!();

    assert_error(&mut p, b"GET  HTTP/1.1\r\n\r\n", ParserError::InvalidStartLine(b' '));
}

#[test]
fn invalid_url_byte() {
    let mut p = setup!();

    assert_error(&mut p, b"GET /\x7F HTTP/1.1\r\n\r\n", ParserError::InvalidStartLine(0x7F));
}

#[test]
fn invalid_url_utf8() {
    let mut p = setup!();

    assert_error(&mut p, b"GET /caf\xE9 HTTP/1.1\r\n\r\n", ParserError::InvalidStartLine(0xE9));

    assert!(p.handler().url.is_empty());
}

#[test]
fn invalid_missing_version() {
    let mut p = setup!();

    assert_error(&mut p, b"GET /\r\n\r\n", ParserError::InvalidStartLine(b'\r'));
}

#[test]
fn invalid_version() {
    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTX/1.1\r\n", ParserError::InvalidVersion(b'X'));

    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTP/1.x\r\n", ParserError::InvalidVersion(b'x'));

    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTP/.1\r\n", ParserError::InvalidVersion(b'.'));

    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTP/1.1 \r\n", ParserError::InvalidVersion(b' '));
}

#[test]
fn version_digit_limit() {
    let mut p = setup!();

    assert_eos(&mut p, b"GET / HTTP/999.999\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.http_version(), Some((999, 999)));

    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTP/1000.1\r\n", ParserError::InvalidVersion(b'0'));
}

#[test]
fn start_line_missing_line_feed() {
    let mut p = setup!();

    assert_error(&mut p, b"GET / HTTP/1.1\rX", ParserError::CrlfSequence(b'X'));
}

#[test]
fn response_rejected() {
    let mut p = setup!();

    assert_error(&mut p, b"HTTP/1.1 200 OK\r\n\r\n", ParserError::InvalidMethod(b'T'));
}
