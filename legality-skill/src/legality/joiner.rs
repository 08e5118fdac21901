//! Join format names into a spoken list.

/// Render `prefix` followed by the formats as "a, b and c.".
///
/// An empty list yields `prefix` plus the terminator; callers skip empty
/// buckets instead of speaking that.
pub fn join_formats<S: AsRef<str>>(prefix: &str, formats: &[S]) -> String {
    let len = formats.len();
    let mut text = String::from(prefix);

    if len == 0 {
        text.push('.');
        return text;
    }

    for (index, format) in formats.iter().enumerate() {
        text.push_str(format.as_ref());
        text.push_str(separator(index, len));
    }

    text
}

/// Text following the format at `index` in a list of `len` formats
fn separator(index: usize, len: usize) -> &'static str {
    if index + 2 < len {
        ", "
    } else if index + 1 < len {
        " and "
    } else {
        "."
    }
}
