//! Name transformations usable as a registry name mapper.

/// Lowercases ASCII letters. This is the default name mapper.
pub fn to_lowercase(src: &str) -> String {
    src.to_ascii_lowercase()
}

/// Converts a camel-case identifier into lowercase, underscore-separated form.
///
/// An underscore is inserted before each uppercase ASCII letter that follows a
/// non-uppercase character, so runs of capitals stay together:
/// `UserID` becomes `user_id` and `ID` becomes `id`. The result is lowercased
/// in full, including non-ASCII letters.
pub fn to_snake_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 4);
    let mut prev_upper = false;

    for (i, ch) in src.char_indices() {
        let upper = ch.is_ascii_uppercase();
        if i > 0 && upper && !prev_upper {
            out.push('_');
        }
        prev_upper = upper;
        out.extend(ch.to_lowercase());
    }

    out
}
