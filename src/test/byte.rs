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

use crate::byte::{ is_field_value, is_token, is_url };

#[test]
fn hex_to_byte() {
    for (n, byte) in b"0123456789".iter().enumerate() {
        assert_eq!(hex_to_byte!(*byte), n as u8);
    }

    for (n, byte) in b"abcdef".iter().enumerate() {
        assert_eq!(hex_to_byte!(*byte), n as u8 + 10);
    }

    for (n, byte) in b"ABCDEF".iter().enumerate() {
        assert_eq!(hex_to_byte!(*byte), n as u8 + 10);
    }
}

#[test]
fn hex() {
    for byte in 0..=255u8 {
        assert_eq!(is_hex!(byte), byte.is_ascii_hexdigit());
        assert_eq!(is_digit!(byte), byte.is_ascii_digit());
    }
}

#[test]
fn tokens() {
    for byte in 0..=255u8 {
        let expected = byte.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&byte);

        assert_eq!(is_token(byte), expected, "byte {}", byte);
    }
}

#[test]
fn field_values() {
    for byte in 0..=255u8 {
        let expected = byte == b'\t' || (byte >= 0x20 && byte != 0x7F);

        assert_eq!(is_field_value(byte), expected, "byte {}", byte);
    }
}

#[test]
fn url() {
    for byte in 0..=255u8 {
        let expected = byte > 0x20 && byte != 0x7F;

        assert_eq!(is_url(byte), expected, "byte {}", byte);
    }
}
