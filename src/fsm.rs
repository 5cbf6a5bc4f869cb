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

//! Finite state machine macros and enums.

use std::fmt;

/// Execute handler callback `$function` and evaluate to its value.
///
/// When the callback returns an error, the error is stored on the parser and the state function
/// exits with `ParserError::Callback`.
macro_rules! callback {
    ($parser:expr, $function:ident $(, $data:expr)*) => ({
        match $parser.handler.$function($($data),*) {
            Ok(value) => value,
            Err(error) => {
                $parser.callback_error = Some(error);

                return Err(ParserError::Callback);
            }
        }
    });
}

/// Set `$state` and execute handler callback `$function`. If it succeeds, transition to
/// `$state`.
///
/// State is changed prior to executing the callback so that a failed callback never leaves the
/// parser positioned to execute it twice.
macro_rules! callback_transition {
    ($parser:expr, $context:expr, $function:ident, ($($data:expr),*), $state:ident) => ({
        set_state!($parser, $state);

        callback!($parser, $function $(, $data)*);

        transition!($parser, $context);
    });
}

/// Exit parser with `Success::Eos`.
macro_rules! exit_eos {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Eos($context.stream_index)));
    });
}

/// Exit parser with `ParserError`.
macro_rules! exit_error {
    ($error:ident, $byte:expr) => ({
        return Err(ParserError::$error($byte));
    });

    ($error:ident) => ({
        return Err(ParserError::$error);
    });
}

/// Exit parser with `Success::Finished`.
macro_rules! exit_finished {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Finished($context.stream_index)));
    });
}

/// If the stream is EOS, exit with `Success::Eos`. Otherwise do nothing.
macro_rules! exit_if_eos {
    ($parser:expr, $context:expr) => ({
        if bs_is_eos!($context) {
            exit_eos!($parser, $context);
        }
    });
}

/// Exit parser with `Success::Paused`.
macro_rules! exit_paused {
    ($parser:expr, $context:expr) => ({
        return Ok(ParserValue::Exit(Success::Paused($context.stream_index)));
    });
}

/// Set state.
macro_rules! set_state {
    ($parser:expr, $state:ident) => ({
        $parser.state = ParserState::$state;
    });
}

/// Transition to `$state`.
macro_rules! transition {
    ($parser:expr, $context:expr, $state:ident) => ({
        set_state!($parser, $state);

        bs_mark!($context, $context.stream_index);

        return Ok(ParserValue::Continue);
    });

    ($parser:expr, $context:expr) => ({
        bs_mark!($context, $context.stream_index);

        return Ok(ParserValue::Continue);
    });
}

// -------------------------------------------------------------------------------------------------

/// Parsing function return values.
pub enum ParserValue {
    /// Continue the parser loop.
    Continue,

    /// Exit the parser loop.
    Exit(Success)
}

// -------------------------------------------------------------------------------------------------

/// Parsing function success return values.
#[derive(Clone,Copy,PartialEq,Eq)]
pub enum Success {
    /// Additional stream data is expected.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of stream bytes that were processed. This value will always match
    ///          `stream.len()`.
    Eos(usize),

    /// The parser stopped because the upgraded protocol now owns the stream.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of stream bytes that were processed. Bytes after this offset belong to
    ///          the upgraded protocol and were not inspected.
    Finished(usize),

    /// [`HttpHandler::on_headers_complete()`](../http1/trait.HttpHandler.html#method.on_headers_complete)
    /// requested a pause.
    ///
    /// # Arguments
    ///
    /// **(1)**: The amount of stream bytes that were processed, up to and including the blank
    ///          line that ended the headers. Remaining bytes must be resubmitted to continue.
    Paused(usize)
}

impl Success {
    /// Retrieve the amount of stream bytes that were processed.
    pub fn consumed(&self) -> usize {
        match *self {
            Success::Eos(length)
            | Success::Finished(length)
            | Success::Paused(length) => length
        }
    }
}

impl fmt::Debug for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Success::Eos(length) => {
                write!(formatter, "Success::Eos({})", length)
            },
            Success::Finished(length) => {
                write!(formatter, "Success::Finished({})", length)
            },
            Success::Paused(length) => {
                write!(formatter, "Success::Paused({})", length)
            }
        }
    }
}

impl fmt::Display for Success {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.consumed())
    }
}
