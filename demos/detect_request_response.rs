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

use http_push::handler::DebugHandler;
use http_push::{ MessageKind, Parser };

fn main() {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // a parser of type `Both` decides per message
    let mut p = Parser::both(DebugHandler::new());

    p.execute(b"GET /url HTTP/1.0\r\n\r\n").unwrap();

    {
        let message = p.message().unwrap();

        assert_eq!(message.kind(), MessageKind::Request);
        assert_eq!(message.target().unwrap().path(), "/url");
        println!("{:?} {:?}", message.kind(), message.method());
    }

    p.execute(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").unwrap();

    {
        let message = p.message().unwrap();

        assert_eq!(message.kind(), MessageKind::Response);
        assert_eq!(message.status_code(), Some(200));
        assert_eq!(message.reason(), Some("OK"));
        println!("{:?} {:?}", message.kind(), message.status_code());
    }

    assert_eq!(p.handler().message_complete, 2);
}
