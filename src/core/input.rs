use crate::domain::model::{HexPolicy, InputMethod, RawBuffer};
use crate::utils::error::InputError;
use crate::utils::validation;
use serde_json::{Map, Value};

/// Resolve the `input` section of a job document into a raw data buffer.
///
/// Dispatches on the `method` tag; the only decoder currently implemented is
/// `inline-data`, which carries the payload as a hex string in `data`.
pub fn resolve_input(
    section: &Map<String, Value>,
    policy: HexPolicy,
) -> Result<RawBuffer, InputError> {
    let Some(method) = validation::get_str(section, "method") else {
        tracing::error!("input method was not specified");
        return Err(InputError::MissingMethod);
    };

    match method.parse::<InputMethod>() {
        Ok(InputMethod::InlineData) => consume_inline_data(section, policy),
        Err(err) => {
            tracing::error!("unsupported input method: {}", method);
            Err(err)
        }
    }
}

/// Decode the inline hex string from the section into a byte buffer.
fn consume_inline_data(
    section: &Map<String, Value>,
    policy: HexPolicy,
) -> Result<RawBuffer, InputError> {
    let Some(hexstr) = validation::get_str(section, "data") else {
        tracing::error!("input data was not supplied");
        return Err(InputError::MissingField("data"));
    };

    // Screen the whole string before decoding anything.
    if !hexstr.bytes().all(|b| b.is_ascii_hexdigit()) {
        tracing::error!("input data is not a valid hex string");
        return Err(InputError::InvalidHex);
    }

    if policy == HexPolicy::Strict && hexstr.len() % 2 != 0 {
        tracing::error!("input data has an odd number of hex digits");
        return Err(InputError::OddLength);
    }

    // A trailing odd digit is dropped here under HexPolicy::Truncate.
    let byte_count = hexstr.len() / 2;
    let mut data = Vec::new();
    if data.try_reserve_exact(byte_count).is_err() {
        tracing::error!("out of memory");
        return Err(InputError::OutOfMemory);
    }

    for pair in hexstr.as_bytes().chunks_exact(2) {
        data.push(hex_val(pair[0]) << 4 | hex_val(pair[1]));
    }

    tracing::info!("{} bytes of input data consumed", data.len());
    Ok(RawBuffer::new(data))
}

/// Value of a single hex digit. Callers have already screened the input, so
/// every byte reaching here is an ASCII hex digit.
fn hex_val(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
