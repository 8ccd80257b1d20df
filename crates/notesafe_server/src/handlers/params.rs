//! Lenient parsing of path and query parameters.

use notesafe_core::AppError;

/// Parse an optional numeric query value.
///
/// Missing or blank values take `default`. Otherwise the leading integer is
/// read (`"20abc"` is 20, `"2.5"` is 2). A value with no leading digits maps
/// to `0`, which page clamping then replaces with its fallback. Integers too
/// large for `i64` saturate.
pub(super) fn parse_query_number(raw: Option<&str>, default: i64) -> i64 {
    let value = match raw.map(str::trim) {
        None | Some("") => return default,
        Some(value) => value,
    };

    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let digits = &unsigned[..digits_len];
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parse a note id from the request path.
pub(super) fn parse_note_id(raw: &str) -> Result<u64, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::Validation(format!(
            "Validation failed (numeric string is expected): '{}'",
            raw
        ))
    })
}
