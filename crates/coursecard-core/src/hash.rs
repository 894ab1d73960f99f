//! Polynomial string hash used to pick a card accent.

/// Hash `s` with the classic `h * 31 + c` recurrence over UTF-16 code units.
///
/// The accumulator wraps as a signed 32-bit integer; the result is its
/// absolute value. `unsigned_abs` keeps `i32::MIN` representable (`2^31`).
pub fn string_hash(s: &str) -> u32 {
    s.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}
