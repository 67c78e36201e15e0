/// Base64URL encoding/decoding per RFC 4648
/// No padding, URL-safe characters
use crate::error::{Error, Result};

const BASE64URL_CHARSET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Map a Base64URL character to its 6-bit value
fn charset_value(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    let mut result = String::with_capacity((input.len() + 2) / 3 * 4);

    let mut chunks = input.chunks_exact(3);
    for chunk in &mut chunks {
        let group = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);

        result.push(BASE64URL_CHARSET[(group >> 18) as usize & 0x3f] as char);
        result.push(BASE64URL_CHARSET[(group >> 12) as usize & 0x3f] as char);
        result.push(BASE64URL_CHARSET[(group >> 6) as usize & 0x3f] as char);
        result.push(BASE64URL_CHARSET[group as usize & 0x3f] as char);
    }

    // Final 1- or 2-byte group encodes to 2 or 3 characters, no padding
    match chunks.remainder() {
        [b1] => {
            result.push(BASE64URL_CHARSET[(b1 >> 2) as usize] as char);
            result.push(BASE64URL_CHARSET[((b1 & 0x03) << 4) as usize] as char);
        }
        [b1, b2] => {
            result.push(BASE64URL_CHARSET[(b1 >> 2) as usize] as char);
            result.push(BASE64URL_CHARSET[(((b1 & 0x03) << 4) | (b2 >> 4)) as usize] as char);
            result.push(BASE64URL_CHARSET[((b2 & 0x0f) << 2) as usize] as char);
        }
        _ => {}
    }

    result
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
///
/// Accepts unpadded input. A length of 1 mod 4 can never be restored to a
/// valid padded Base64 quantum, so it is rejected outright.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();

    if bytes.len() % 4 == 1 {
        return Err(Error::InvalidBase64(
            "Incomplete Base64URL data".to_string(),
        ));
    }

    let mut result = Vec::with_capacity(bytes.len() / 4 * 3 + 2);

    for group in bytes.chunks(4) {
        let mut values = [0u8; 4];
        for (slot, &c) in values.iter_mut().zip(group) {
            *slot = charset_value(c).ok_or_else(|| {
                Error::InvalidBase64(format!("Invalid character: {}", c as char))
            })?;
        }

        // Only the final group can be short, and never by more than two chars
        result.push((values[0] << 2) | (values[1] >> 4));
        if group.len() > 2 {
            result.push((values[1] << 4) | (values[2] >> 2));
        }
        if group.len() > 3 {
            result.push((values[2] << 6) | values[3]);
        }
    }

    Ok(result)
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidBase64(format!("Invalid UTF-8: {e}")))
}
