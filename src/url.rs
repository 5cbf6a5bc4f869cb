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

//! Request target handling.

use std::fmt;

/// URL segments.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum UrlSegment<'a> {
    /// Authority segment. Found within absolute-form and authority-form targets.
    Authority(&'a str),

    /// Fragment segment.
    Fragment(&'a str),

    /// Path segment.
    Path(&'a str),

    /// Query string segment.
    QueryString(&'a str),

    /// Scheme segment.
    Scheme(&'a str)
}

impl<'a> fmt::Display for UrlSegment<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            UrlSegment::Authority(x)
            | UrlSegment::Fragment(x)
            | UrlSegment::Path(x)
            | UrlSegment::QueryString(x)
            | UrlSegment::Scheme(x) => {
                write!(formatter, "{}", x)
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Indicates that `scheme` is a valid URL scheme: an alphabetical byte followed by alphanumeric
/// bytes, `+`, `-`, or `.`.
fn is_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();

    match bytes.next() {
        Some(byte) if byte.is_ascii_alphabetic() => {
            bytes.all(|byte| {
                byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'-' || byte == b'.'
            })
        },
        _ => false
    }
}

/// Split a request target into segments, executing `segment_fn` for each segment found.
///
/// The fragment is split at the first `#`, and the query string at the first `?` preceding it.
/// Segments are reported in the order they appear. Empty query strings and fragments are still
/// reported when their delimiter is present.
///
/// ```
/// use http_push::url::{ parse_url, UrlSegment };
///
/// let mut segments = Vec::new();
///
/// parse_url("http://example.com/index.html?a=1#top", |segment| segments.push(segment));
///
/// assert_eq!(segments, vec![UrlSegment::Scheme("http"),
///                           UrlSegment::Authority("example.com"),
///                           UrlSegment::Path("/index.html"),
///                           UrlSegment::QueryString("a=1"),
///                           UrlSegment::Fragment("top")]);
/// ```
pub fn parse_url<'a, F>(url: &'a str, mut segment_fn: F)
where F : FnMut(UrlSegment<'a>) {
    let (rest, fragment) = match url.find('#') {
        Some(index) => (&url[..index], Some(&url[index + 1..])),
        None        => (url, None)
    };

    let (rest, query_string) = match rest.find('?') {
        Some(index) => (&rest[..index], Some(&rest[index + 1..])),
        None        => (rest, None)
    };

    if rest.starts_with('/') || rest == "*" {
        // origin-form and asterisk-form
        if !rest.is_empty() {
            segment_fn(UrlSegment::Path(rest));
        }
    } else if let Some(index) = rest.find("://").filter(|index| is_scheme(&rest[..*index])) {
        // absolute-form
        let authority = &rest[index + 3..];
        let split     = authority.find('/').unwrap_or(authority.len());

        segment_fn(UrlSegment::Scheme(&rest[..index]));
        segment_fn(UrlSegment::Authority(&authority[..split]));

        if split < authority.len() {
            segment_fn(UrlSegment::Path(&authority[split..]));
        }
    } else if !rest.is_empty() {
        // authority-form
        segment_fn(UrlSegment::Authority(rest));
    }

    if let Some(query_string) = query_string {
        segment_fn(UrlSegment::QueryString(query_string));
    }

    if let Some(fragment) = fragment {
        segment_fn(UrlSegment::Fragment(fragment));
    }
}

// -------------------------------------------------------------------------------------------------

/// Request target, along with its decomposed path, query string, and fragment.
///
/// Absent segments are empty strings.
#[derive(Clone,Debug,Default,PartialEq,Eq)]
pub struct RequestTarget {
    /// Fragment.
    fragment: String,

    /// Path.
    path: String,

    /// Query string.
    query_string: String,

    /// Raw request target.
    url: String
}

impl RequestTarget {
    /// Create a new `RequestTarget` by decomposing `url`.
    ///
    /// ```
    /// use http_push::url::RequestTarget;
    ///
    /// let target = RequestTarget::new("/test?ok=1".to_string());
    ///
    /// assert_eq!(target.path(), "/test");
    /// assert_eq!(target.query_string(), "ok=1");
    /// assert_eq!(target.fragment(), "");
    /// ```
    pub fn new(url: String) -> RequestTarget {
        let mut fragment     = String::new();
        let mut path         = String::new();
        let mut query_string = String::new();

        parse_url(&url, |segment| {
            match segment {
                UrlSegment::Fragment(x)    => fragment.push_str(x),
                UrlSegment::Path(x)        => path.push_str(x),
                UrlSegment::QueryString(x) => query_string.push_str(x),
                _ => {}
            }
        });

        RequestTarget{
            fragment,
            path,
            query_string,
            url
        }
    }

    /// Retrieve the raw request target.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Retrieve the fragment.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Retrieve the path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieve the query string.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.url)
    }
}
