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

/// Parser types.
#[derive(Clone,Copy,PartialEq,Eq)]
pub enum ParserType {
    /// Detect requests and responses per message. Messages beginning with `HTTP/` are responses.
    Both,

    /// Parse requests only.
    Request,

    /// Parse responses only.
    Response
}

impl ParserType {
    /// Indicates that this type accepts requests.
    pub fn accepts_request(&self) -> bool {
        *self != ParserType::Response
    }

    /// Indicates that this type accepts responses.
    pub fn accepts_response(&self) -> bool {
        *self != ParserType::Request
    }
}

impl Default for ParserType {
    fn default() -> ParserType {
        ParserType::Both
    }
}

impl fmt::Debug for ParserType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserType::Both => {
                write!(formatter, "ParserType::Both")
            },
            ParserType::Request => {
                write!(formatter, "ParserType::Request")
            },
            ParserType::Response => {
                write!(formatter, "ParserType::Response")
            }
        }
    }
}

impl fmt::Display for ParserType {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParserType::Both => {
                write!(formatter, "both")
            },
            ParserType::Request => {
                write!(formatter, "request")
            },
            ParserType::Response => {
                write!(formatter, "response")
            }
        }
    }
}
