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

use http_push::{ CallbackResult,
                 Callbacks,
                 Error,
                 Flow,
                 Headers,
                 HttpHandler,
                 Parser,
                 ParserError,
                 ParserState,
                 Success };

use std::collections::HashMap;
use std::fs;

#[derive(Default)]
struct HeadHandler {
    pub fields:   Vec<String>,
    pub headers:  HashMap<String, String>,
    pub url:      String,
    pub values:   Vec<String>
}

impl HttpHandler for HeadHandler {
    fn on_header_field(&mut self, field: &str) -> CallbackResult {
        self.fields.push(field.to_string());

        Ok(())
    }

    fn on_header_value(&mut self, value: &str) -> CallbackResult {
        self.values.push(value.to_string());

        Ok(())
    }

    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        for (name, value) in headers {
            self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        }

        Ok(Flow::Pause)
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        self.url.push_str(url);

        Ok(())
    }
}

#[test]
fn head() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let d     = fs::read("tests/data/head.dat").unwrap();
    let mut p = Parser::request(HeadHandler::default());

    let length = match p.execute(&d) {
        Ok(Success::Paused(length)) => length,
        result => panic!("{:?}", result)
    };

    assert_eq!(&d[length..], b"------WebKitFormBoundaryPplB3C4KqDmwKzm4--\r\n");
    assert_eq!(p.state(), ParserState::BodyIdentity);

    let message = p.message().unwrap();

    assert_eq!(message.http_version(), Some((1, 1)));
    assert_eq!(message.content_length(), Some(44));
    assert!(message.keep_alive());

    let h = p.handler();

    assert_eq!(h.url,
               "/multipart");

    assert_eq!(h.fields.len(),
               h.values.len());

    assert_eq!(h.headers.get("accept").unwrap(),
               "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8");

    assert_eq!(h.headers.get("accept-encoding").unwrap(),
               "gzip, deflate, br");

    assert_eq!(h.headers.get("connection").unwrap(),
               "keep-alive");

    assert_eq!(h.headers.get("content-type").unwrap(),
               "multipart/form-data; boundary=----WebKitFormBoundaryPplB3C4KqDmwKzm4");

    assert_eq!(h.headers.get("host").unwrap(),
               "localhost");

    assert_eq!(h.headers.get("user-agent").unwrap(),
               "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.87 Safari/537.36");

    assert_eq!(p.execute(&d[length..]).unwrap(), Success::Eos(d.len() - length));
    assert_eq!(p.state(), ParserState::MessageStart);
}

#[test]
fn closures_share_state() {
    let mut urls   = Vec::new();
    let mut bodies = Vec::new();

    {
        let callbacks = Callbacks::new()
                                  .on_url(|url| {
                                      urls.push(url.to_string());
                                      Ok(())
                                  })
                                  .on_body(|data| {
                                      bodies.extend_from_slice(data);
                                      Ok(())
                                  });

        let mut p = Parser::request(callbacks);

        for byte in b"PUT /a HTTP/1.1\r\nContent-Length: 1\r\n\r\nxPUT /b HTTP/1.1\r\nContent-Length: 1\r\n\r\ny" {
            p.execute(&[*byte]).unwrap();
        }
    }

    assert_eq!(urls, vec!["/a".to_string(), "/b".to_string()]);
    assert_eq!(bodies, b"xy");
}

#[test]
fn callback_error_is_returned_once_then_parse_error() {
    let callbacks = Callbacks::new().on_header_field(|field| {
        if field.eq_ignore_ascii_case("x-reject") {
            Err(format!("rejected {}", field).into())
        } else {
            Ok(())
        }
    });

    let mut p = Parser::request(callbacks);

    match p.execute(b"GET / HTTP/1.1\r\nHost: h\r\nX-Reject: 1\r\n\r\n") {
        Err(Error::Callback(error)) => {
            assert_eq!(error.to_string(), "rejected X-Reject");
        },
        result => panic!("{:?}", result)
    }

    assert_eq!(p.state(), ParserState::Dead);

    match p.execute(b"GET / HTTP/1.1\r\n\r\n") {
        Err(error) => {
            assert_eq!(error.parser_error(), Some(ParserError::Callback));
        },
        result => panic!("{:?}", result)
    }

    assert!(p.reset());
    assert!(p.execute(b"GET / HTTP/1.1\r\n\r\n").is_ok());
}
