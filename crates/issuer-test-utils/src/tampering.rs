//! Token tampering helpers
//!
//! Produces copies of a token that differ from the original in exactly one
//! character, for checking that verification rejects every altered token.

/// Replacement used when altering a single base64url character.
fn substitute(c: char) -> char {
    if c == 'A' {
        'B'
    } else {
        'A'
    }
}

/// Return the token with the character at position `index` replaced.
///
/// Panics if `index` points at a segment separator or past the end.
pub fn tamper_at(token: &str, index: usize) -> String {
    let original = token
        .chars()
        .nth(index)
        .unwrap_or_else(|| panic!("index {} is past the end of the token", index));
    assert_ne!(original, '.', "index {} is a segment separator", index);

    token
        .chars()
        .enumerate()
        .map(|(i, c)| if i == index { substitute(c) } else { c })
        .collect()
}

/// Every single-character alteration of every segment of `token`.
///
/// Each entry is `(segment_index, tampered_token)`.
pub fn single_character_tamperings(token: &str) -> Vec<(usize, String)> {
    let mut segment = 0;
    let mut variants = Vec::new();

    for (index, c) in token.chars().enumerate() {
        if c == '.' {
            segment += 1;
            continue;
        }
        variants.push((segment, tamper_at(token, index)));
    }

    variants
}
