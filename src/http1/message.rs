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

use crate::http1::method::Method;
use crate::url::RequestTarget;

use std::slice;

/// Message kinds.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum MessageKind {
    /// Request message.
    Request,

    /// Response message.
    Response
}

// -------------------------------------------------------------------------------------------------

/// Ordered header fields.
///
/// Field names are compared ASCII case-insensitively. When a field name repeats, its value is
/// appended to the existing entry separated by `", "`, and the first spelling of the name is kept.
///
/// ```
/// use http_push::Headers;
///
/// let mut headers = Headers::new();
///
/// headers.append("Accept", "text/html");
/// headers.append("accept", "text/plain");
///
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers.get("ACCEPT"), Some("text/html, text/plain"));
/// ```
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct Headers {
    entries: Vec<(String, String)>
}

impl Headers {
    /// Create a new, empty `Headers`.
    pub fn new() -> Headers {
        Headers{ entries: Vec::new() }
    }

    /// Append a field, combining its value with an existing field of the same name.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where N : Into<String>, V : AsRef<str> {
        let name = name.into();

        match self.entries
                  .iter_mut()
                  .find(|(field, _)| field.eq_ignore_ascii_case(&name)) {
            Some((_, existing)) => {
                existing.push_str(", ");
                existing.push_str(value.as_ref());
            },
            None => {
                self.entries.push((name, value.as_ref().to_string()));
            }
        }
    }

    /// Indicates that a field named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Retrieve the value of the field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Indicates that there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retrieve an iterator over `(name, value)` pairs in the order they were first seen.
    pub fn iter(&self) -> Iter<'_> {
        Iter{ inner: self.entries.iter() }
    }

    /// Retrieve the amount of distinct fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item     = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over [`Headers`](struct.Headers.html) fields.
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        self.inner.next().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

// -------------------------------------------------------------------------------------------------

/// Parsed message.
///
/// A new `Message` is created each time a message begins, and is kept for inspection until the
/// next message begins or the parser is reset.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct Message {
    /// Declared content length.
    pub(crate) content_length: Option<u64>,

    /// Header fields, including chunked trailers.
    pub(crate) headers: Headers,

    /// Indicates that the connection may be reused.
    pub(crate) keep_alive: bool,

    /// Message kind.
    pub(crate) kind: MessageKind,

    /// Request method.
    pub(crate) method: Option<Method>,

    /// Response reason phrase.
    pub(crate) reason: Option<String>,

    /// Response status code.
    pub(crate) status_code: Option<u16>,

    /// Request target.
    pub(crate) target: Option<RequestTarget>,

    /// Indicates that the message is an upgrade or CONNECT request.
    pub(crate) upgrade: bool,

    /// HTTP major and minor version.
    pub(crate) version: Option<(u16, u16)>
}

impl Message {
    /// Create a new, empty `Message`.
    pub(crate) fn new(kind: MessageKind) -> Message {
        Message{
            content_length: None,
            headers:        Headers::new(),
            keep_alive:     false,
            kind,
            method:         None,
            reason:         None,
            status_code:    None,
            target:         None,
            upgrade:        false,
            version:        None
        }
    }

    /// Retrieve the declared content length.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Retrieve the header fields.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Retrieve the HTTP major version.
    pub fn http_major(&self) -> Option<u16> {
        self.version.map(|(major, _)| major)
    }

    /// Retrieve the HTTP minor version.
    pub fn http_minor(&self) -> Option<u16> {
        self.version.map(|(_, minor)| minor)
    }

    /// Retrieve the HTTP major and minor version.
    pub fn http_version(&self) -> Option<(u16, u16)> {
        self.version
    }

    /// Indicates that the message is a request.
    pub fn is_request(&self) -> bool {
        self.kind == MessageKind::Request
    }

    /// Indicates that the connection may be reused after this message.
    ///
    /// This is determined once headers are complete.
    pub fn keep_alive(&self) -> bool {
        self.keep_alive
    }

    /// Retrieve the message kind.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Retrieve the request method.
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Retrieve the response reason phrase.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Retrieve the response status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Retrieve the request target.
    pub fn target(&self) -> Option<&RequestTarget> {
        self.target.as_ref()
    }

    /// Indicates that the message is an upgrade or CONNECT request, or a protocol switching
    /// response.
    ///
    /// This is determined once headers are complete.
    pub fn upgrade(&self) -> bool {
        self.upgrade
    }
}
