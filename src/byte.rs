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

//! Byte classification tables and macros.

/// Indicates that a byte is a digit.
macro_rules! is_digit {
    ($byte:expr) => (
        $byte > 0x2F && $byte < 0x3A
    );
}

/// Indicates that a byte is a hex digit.
macro_rules! is_hex {
    ($byte:expr) => (
        ($byte > 0x2F && $byte < 0x3A)
        || ($byte > 0x40 && $byte < 0x47)
        || ($byte > 0x60 && $byte < 0x67)
    );
}

/// Indicates that a byte is a space or horizontal tab.
macro_rules! is_space_tab {
    ($byte:expr) => (
        $byte == b' ' || $byte == b'\t'
    );
}

/// Convert a hex byte to its numeric value.
///
/// This assumes the byte is 0-9, A-F, or a-f.
macro_rules! hex_to_byte {
    ($byte:expr) => (
        if $byte > 0x2F && $byte < 0x3A {
            // digit
            $byte - b'0'
        } else if $byte > 0x40 && $byte < 0x5B {
            // upper-case
            $byte - 0x37
        } else {
            // lower-case
            $byte - 0x57
        }
    );
}

// -------------------------------------------------------------------------------------------------

/// Token bytes as defined by RFC 7230 section 3.2.6.
static TOKEN: [bool; 256] = [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  false, true,  true,  true,  true,  true,  false, false, true,

    // +   ,      -      .      /
    true,  false, true,  true,  false,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    false, false, false, false, false, false, false,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    false, false, false, true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    false, true,  false, true,

    // DEL
    false,

    // 128 - 255
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false

];

/// Request target bytes. All visible 7-bit bytes, along with bytes 0x80 thru 0xFF.
static URL: [bool; 256] = [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, false,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    false,

    // !   "      #      $      %      &      '      (      )      *
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // +   ,      -      .      /
    true,  true,  true,  true,  true,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    true,  true,  true,  true,  true,  true,  true,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    true,  true,  true,  true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    true,  true,  true,  true,

    // DEL
    false,

    // 128 - 255
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true

];

/// Header field value bytes. Horizontal tab, space, all visible 7-bit bytes, along with bytes 0x80
/// thru 0xFF.
static FIELD_VALUE: [bool; 256] = [

    // NUL SOH    STX    ETX    EOT    ENQ    ACK    BEL    BS     TAB
    false, false, false, false, false, false, false, false, false, true,

    // LF  VT     FF     CR     SO     SI     DLE    DC1    DC2    DC3
    false, false, false, false, false, false, false, false, false, false,

    // DC4 NAK    SYN    ETB    CAN    EM     SUB    ESC    FS     GS
    false, false, false, false, false, false, false, false, false, false,

    // RS  US
    false, false,

    // space
    true,

    // !   "      #      $      %      &      '      (      )      *
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // +   ,      -      .      /
    true,  true,  true,  true,  true,

    // 0   1      2      3      4      5      6      7      8      9
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // :   ;      <      =      >      ?      @
    true,  true,  true,  true,  true,  true,  true,

    // A   B      C      D      E      F      G      H      I      J
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // K   L      M      N      O      P      Q      R      S      T
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // U   V      W      X      Y      Z
    true,  true,  true,  true,  true,  true,

    // [   \      ]      ^      _      `
    true,  true,  true,  true,  true,  true,

    // a   b      c      d      e      f      g      h      i      j
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // k   l      m      n      o      p      q      r      s      t
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,

    // u   v      w      x      y      z
    true,  true,  true,  true,  true,  true,

    // {   |      }      ~
    true,  true,  true,  true,

    // DEL
    false,

    // 128 - 255
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true

];


/// Indicates that a byte is allowed within a header field value.
#[inline]
pub fn is_field_value(byte: u8) -> bool {
    FIELD_VALUE[byte as usize]
}

/// Indicates that a byte is a HTTP token.
#[inline]
pub fn is_token(byte: u8) -> bool {
    TOKEN[byte as usize]
}

/// Indicates that a byte is allowed within a request target.
#[inline]
pub fn is_url(byte: u8) -> bool {
    URL[byte as usize]
}
