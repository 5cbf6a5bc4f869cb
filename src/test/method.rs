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

use crate::http1::{ Method, ParserError, ParserState };
use crate::test::*;

const METHODS: &[(&str, Method)] = &[
    ("ACL",         Method::Acl),
    ("BIND",        Method::Bind),
    ("CHECKOUT",    Method::Checkout),
    ("CONNECT",     Method::Connect),
    ("COPY",        Method::Copy),
    ("DELETE",      Method::Delete),
    ("GET",         Method::Get),
    ("HEAD",        Method::Head),
    ("LINK",        Method::Link),
    ("LOCK",        Method::Lock),
    ("M-SEARCH",    Method::MSearch),
    ("MERGE",       Method::Merge),
    ("MKACTIVITY",  Method::MkActivity),
    ("MKCALENDAR",  Method::MkCalendar),
    ("MKCOL",       Method::MkCol),
    ("MOVE",        Method::Move),
    ("NOTIFY",      Method::Notify),
    ("OPTIONS",     Method::Options),
    ("PATCH",       Method::Patch),
    ("POST",        Method::Post),
    ("PROPFIND",    Method::PropFind),
    ("PROPPATCH",   Method::PropPatch),
    ("PURGE",       Method::Purge),
    ("PUT",         Method::Put),
    ("REBIND",      Method::Rebind),
    ("REPORT",      Method::Report),
    ("SEARCH",      Method::Search),
    ("SOURCE",      Method::Source),
    ("SUBSCRIBE",   Method::Subscribe),
    ("TRACE",       Method::Trace),
    ("UNBIND",      Method::Unbind),
    ("UNLINK",      Method::Unlink),
    ("UNLOCK",      Method::Unlock),
    ("UNSUBSCRIBE", Method::Unsubscribe)
];

#[test]
fn all_methods() {
    for &(name, method) in METHODS {
        let stream = format!("{} /resource HTTP/1.1\r\nContent-Length: 0\r\n\r\n", name);

        let mut p = setup!();

        match p.execute(stream.as_bytes()) {
            Ok(_) => {
                assert_eq!(p.http_method(), Some(method));
            },
            Err(error) => panic!("method {} failed: {}", name, error)
        }

        assert_eq!(method.as_str(), name);
        assert_eq!(method.to_string(), name);
        assert_eq!(Method::from_bytes(name.as_bytes()), Some(method));
    }
}

#[test]
fn all_methods_byte_at_a_time() {
    for &(name, method) in METHODS.iter().filter(|(_, method)| *method != Method::Connect) {
        let mut p = setup!();

        iter_assert_eos(&mut p, format!("{} / HTTP/1.1\r\n\r\n", name).as_bytes());

        assert_eq!(p.http_method(), Some(method));
        assert_eq!(p.state(), ParserState::MessageStart);
    }
}

#[test]
fn prefixes() {
    assert!(Method::is_prefix(b"M"));
    assert!(Method::is_prefix(b"M-"));
    assert!(Method::is_prefix(b"PROPP"));
    assert!(Method::is_prefix(b"UNSUB"));
    assert!(!Method::is_prefix(b"X"));
    assert!(!Method::is_prefix(b"GETS"));
    assert!(!Method::is_prefix(b"get"));
}

#[test]
fn shared_prefix_split() {
    let mut p = setup!();

    assert_eos(&mut p, b"UN", ParserState::StartLine);
    assert_eos(&mut p, b"SUBSCRIBE", ParserState::StartLine);
    assert_eos(&mut p, b" / HTTP/1.1\r\n\r\n", ParserState::MessageStart);

    assert_eq!(p.http_method(), Some(Method::Unsubscribe));
}

#[test]
fn case_sensitive() {
    let mut p = setup!();

    assert_error(&mut p, b"Get / HTTP/1.1\r\n\r\n", ParserError::InvalidMethod(b'e'));
}
