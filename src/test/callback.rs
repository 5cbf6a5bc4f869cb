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

use crate::handler::DebugHandler;
use crate::http1::{ CallbackResult, Callbacks, Error, Flow, Headers, HttpHandler, Parser,
                    ParserError, ParserState };
use crate::test::*;

use std::error;
use std::fmt;

#[derive(Debug)]
struct Forbidden;

impl fmt::Display for Forbidden {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "forbidden")
    }
}

impl error::Error for Forbidden {
}

struct UrlHandler;

impl HttpHandler for UrlHandler {
    fn on_url(&mut self, url: &str) -> CallbackResult {
        if url.starts_with("/admin") {
            Err(Box::new(Forbidden))
        } else {
            Ok(())
        }
    }
}

#[test]
fn error_passes_through() {
    let mut p = Parser::request(UrlHandler);

    assert_eos(&mut p, b"GET /public HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    match p.execute(b"GET /admin HTTP/1.1\r\n\r\n") {
        Err(Error::Callback(error)) => {
            assert_eq!(error.to_string(), "forbidden");
            assert!(error.downcast_ref::<Forbidden>().is_some());
        },
        result => panic!("execute() Err(Error::Callback) match failed: {:?}", result)
    }

    assert_eq!(p.state(), ParserState::Dead);
    assert_eq!(p.error(), Some(ParserError::Callback));
    assert_eq!(p.error().unwrap().code(), "CALLBACK");

    // later calls report the failure without the original error
    assert_error(&mut p, b"", ParserError::Callback);
}

#[test]
fn error_from_headers_complete() {
    let mut p = Parser::request(
        Callbacks::new().on_headers_complete(|headers: &Headers| {
            if headers.contains("Expect") {
                Err("expectation failed".into())
            } else {
                Ok(Flow::Continue)
            }
        })
    );

    match p.execute(b"POST / HTTP/1.1\r\nExpect: 100-continue\r\nContent-Length: 1\r\n\r\nx") {
        Err(Error::Callback(error)) => {
            assert_eq!(error.to_string(), "expectation failed");
        },
        result => panic!("execute() Err(Error::Callback) match failed: {:?}", result)
    }
}

#[test]
fn error_from_body_stops_delivery() {
    let mut calls = 0;

    {
        let mut p = Parser::request(
            Callbacks::new().on_body(|_| {
                calls += 1;

                Err("stop".into())
            })
        );

        assert!(p.execute(b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nab").is_err());
        assert!(p.execute(b"cd").is_err());
    }

    assert_eq!(calls, 1);
}

#[test]
fn closures() {
    let mut fields  = Vec::new();
    let mut urls    = Vec::new();
    let mut begin   = 0;
    let mut done    = 0;

    {
        let mut p = Parser::request(
            Callbacks::new().on_message_begin(|| {
                                begin += 1;
                                Ok(())
                            })
                            .on_url(|url| {
                                urls.push(url.to_string());
                                Ok(())
                            })
                            .on_header_field(|field| {
                                fields.push(field.to_string());
                                Ok(())
                            })
                            .on_message_complete(|| {
                                done += 1;
                                Ok(())
                            })
        );

        assert_eos(
            &mut p,
            b"GET /a HTTP/1.1\r\nHost: h\r\n\r\nGET /b HTTP/1.1\r\nAccept: */*\r\n\r\n",
            ParserState::MessageStart
        );
    }

    assert_eq!(begin, 2);
    assert_eq!(done, 2);
    assert_eq!(urls, vec!["/a", "/b"]);
    assert_eq!(fields, vec!["Host", "Accept"]);
}

#[test]
fn borrowed_handler() {
    let mut h = DebugHandler::new();

    {
        let mut p = Parser::request(&mut h);

        assert_eos(&mut p, b"GET / HTTP/1.1\r\n\r\n", ParserState::MessageStart);
    }

    assert_eq!(h.message_complete, 1);
}

#[test]
fn unit_handler() {
    let mut p = Parser::request(());

    assert_eos(
        &mut p,
        b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc",
        ParserState::MessageStart
    );

    assert_eq!(p.message().unwrap().content_length(), Some(3));
}

#[test]
fn into_handler() {
    let mut p = setup!();

    assert_eos(&mut p, b"GET / HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    let h = p.into_handler();

    assert_eq!(h.url, "/");
    assert_eq!(h.message_complete, 1);
}
