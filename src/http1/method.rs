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

use std::fmt;

/// Request methods.
///
/// Standard methods, along with WebDAV, versioning, UPnP, and caching extensions.
#[derive(Clone,Copy,Debug,Hash,PartialEq,Eq)]
pub enum Method {
    Acl,
    Bind,
    Checkout,
    Connect,
    Copy,
    Delete,
    Get,
    Head,
    Link,
    Lock,
    MSearch,
    Merge,
    MkActivity,
    MkCalendar,
    MkCol,
    Move,
    Notify,
    Options,
    Patch,
    Post,
    PropFind,
    PropPatch,
    Purge,
    Put,
    Rebind,
    Report,
    Search,
    Source,
    Subscribe,
    Trace,
    Unbind,
    Unlink,
    Unlock,
    Unsubscribe
}

/// Method table, searched in order while the method token is collected.
static METHODS: [(&str, Method); 34] = [
    ("DELETE",      Method::Delete),
    ("GET",         Method::Get),
    ("HEAD",        Method::Head),
    ("POST",        Method::Post),
    ("PUT",         Method::Put),
    ("CONNECT",     Method::Connect),
    ("OPTIONS",     Method::Options),
    ("TRACE",       Method::Trace),
    ("PATCH",       Method::Patch),
    ("COPY",        Method::Copy),
    ("LOCK",        Method::Lock),
    ("MKCOL",       Method::MkCol),
    ("MOVE",        Method::Move),
    ("PROPFIND",    Method::PropFind),
    ("PROPPATCH",   Method::PropPatch),
    ("SEARCH",      Method::Search),
    ("UNLOCK",      Method::Unlock),
    ("BIND",        Method::Bind),
    ("REBIND",      Method::Rebind),
    ("UNBIND",      Method::Unbind),
    ("ACL",         Method::Acl),
    ("REPORT",      Method::Report),
    ("MKACTIVITY",  Method::MkActivity),
    ("CHECKOUT",    Method::Checkout),
    ("MERGE",       Method::Merge),
    ("M-SEARCH",    Method::MSearch),
    ("NOTIFY",      Method::Notify),
    ("SUBSCRIBE",   Method::Subscribe),
    ("UNSUBSCRIBE", Method::Unsubscribe),
    ("PURGE",       Method::Purge),
    ("MKCALENDAR",  Method::MkCalendar),
    ("LINK",        Method::Link),
    ("UNLINK",      Method::Unlink),
    ("SOURCE",      Method::Source)
];

impl Method {
    /// Retrieve the method name.
    pub fn as_str(&self) -> &'static str {
        METHODS.iter()
               .find(|(_, method)| method == self)
               .map_or("", |(name, _)| *name)
    }

    /// Find the method exactly matching `bytes`.
    ///
    /// ```
    /// use http_push::Method;
    ///
    /// assert_eq!(Method::from_bytes(b"M-SEARCH"), Some(Method::MSearch));
    /// assert_eq!(Method::from_bytes(b"get"), None);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Option<Method> {
        METHODS.iter()
               .find(|(name, _)| name.as_bytes() == bytes)
               .map(|(_, method)| *method)
    }

    /// Indicates that `bytes` is the beginning of at least one method name.
    pub fn is_prefix(bytes: &[u8]) -> bool {
        METHODS.iter().any(|(name, _)| name.as_bytes().starts_with(bytes))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
