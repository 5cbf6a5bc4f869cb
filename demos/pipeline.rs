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

use http_push::{ CallbackResult, Flow, Headers, HttpHandler, Parser, ParserConfig, ParserType,
                 Success };

use std::io::{ self, Read };

#[derive(Default)]
struct Handler {
    size: usize,
    url:  String
}

impl HttpHandler for Handler {
    fn on_body(&mut self, data: &[u8]) -> CallbackResult {
        self.size += data.len();

        Ok(())
    }

    fn on_headers_complete(&mut self, headers: &Headers) -> CallbackResult<Flow> {
        println!("{} ({} header fields)", self.url, headers.len());

        Ok(Flow::Continue)
    }

    fn on_message_complete(&mut self) -> CallbackResult {
        println!("  body: {} bytes", self.size);

        self.size = 0;

        Ok(())
    }

    fn on_url(&mut self, url: &str) -> CallbackResult {
        self.url = url.to_string();

        Ok(())
    }
}

/// Parse pipelined requests from standard input, printing each request URL and body size.
///
/// ```text
/// printf 'GET / HTTP/1.1\r\n\r\nPOST /x HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc' \
///     | cargo run --example pipeline
/// ```
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config    = ParserConfig::new().with_max_headers(100);
    let mut p     = Parser::with_config(ParserType::Request, Handler::default(), config);
    let mut stdin = io::stdin();
    let mut buf   = [0; 4096];

    loop {
        let length = stdin.read(&mut buf)?;

        if length == 0 {
            break;
        }

        if let Success::Finished(_) = p.execute(&buf[..length])? {
            break;
        }
    }

    p.finish()?;

    Ok(())
}
