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

//! Stream collection macros.

/// Collect bytes into the parser buffer `$buffer` until `$stop` yields `true`. Return `$error`
/// upon finding a byte that `$allow` rejects.
///
/// Upon end-of-stream the bytes collected so far are appended to `$buffer` before exiting with
/// `Success::Eos`, so that the token can be resumed by the next call. The stop byte is left in
/// `$context.byte` and is not appended.
macro_rules! collect_buffered {
    ($parser:expr, $context:expr, $buffer:ident, $stop:expr, $allow:expr, $error:ident) => ({
        bs_collect!($context,
            if $stop {
                break;
            } else if !$allow {
                exit_error!($error, $context.byte);
            },
            {
                $parser.$buffer.extend_from_slice(bs_slice!($context));

                exit_eos!($parser, $context);
            }
        );

        $parser.$buffer.extend_from_slice(bs_slice_ignore!($context));
    });
}

/// Collect and convert decimal digits into `$parser.number`, counting them in `$parser.index`.
///
/// Exit the collection loop upon finding a non-digit byte. Return `$error` when more than `$max`
/// digits are found.
macro_rules! collect_digits {
    ($parser:expr, $context:expr, $max:expr, $error:ident) => ({
        bs_collect!($context,
            if is_digit!($context.byte) {
                $parser.index += 1;

                if $parser.index > $max {
                    exit_error!($error, $context.byte);
                }

                $parser.number *= 10;
                $parser.number += ($context.byte - b'0') as u64;
            } else {
                break;
            },
            exit_eos!($parser, $context)
        );
    });
}

/// Collect and convert hex digits into `$parser.length`, counting them in `$parser.index`.
///
/// Exit the collection loop upon finding a non-hex byte. Return `$error` when the value overflows.
macro_rules! collect_hex {
    ($parser:expr, $context:expr, $error:ident) => ({
        bs_collect!($context,
            if is_hex!($context.byte) {
                let digit = hex_to_byte!($context.byte) as u64;

                $parser.index  += 1;
                $parser.length  = match $parser.length
                                           .checked_mul(16)
                                           .and_then(|length| length.checked_add(digit)) {
                    Some(length) => length,
                    None => exit_error!($error, $context.byte)
                };
            } else {
                break;
            },
            exit_eos!($parser, $context)
        );
    });
}

/// Consume all spaces and tabs, leaving the first other byte in `$context.byte`.
///
/// Execute `$on_eos` upon end-of-stream.
macro_rules! consume_space_tab {
    ($context:expr, $on_eos:expr) => ({
        bs_collect!($context,
            if !is_space_tab!($context.byte) {
                break;
            },
            $on_eos
        );
    });
}
