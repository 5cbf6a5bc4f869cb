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

use http_push::{ CallbackResult, Flow, Headers, HttpHandler, Parser };

use std::collections::HashMap;

#[derive(Default)]
struct Handler {
    pub headers: HashMap<String, String>,
    pub url:     String
}

impl HttpHandler for Handler {
    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        for (field, value) in headers {
            self.headers.insert(field.to_ascii_lowercase(), value.to_string());
        }

        Ok(Flow::Continue)
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        self.url.push_str(url);

        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let mut p = Parser::request(Handler::default());

    // header fields arrive across two calls
    p.execute(b"GET /url HTTP/1.0\r\n\
                Header1: Value 1\r\n\
                Head").unwrap();

    p.execute(b"er2:   Value 2  \r\n\
                header1: Value 3\r\n\r\n").unwrap();

    let h = p.handler();

    assert_eq!(h.url, "/url");
    assert_eq!(h.headers.get("header1").unwrap(), "Value 1, Value 3");
    assert_eq!(h.headers.get("header2").unwrap(), "Value 2");

    for (field, value) in &h.headers {
        println!("{}: {}", field, value);
    }
}
