//! Identifier quoting rules.

/// Returns true when `name` must be quoted to be read as one identifier.
///
/// That is the case for reserved words, for names starting with a digit and
/// for names containing anything other than ASCII letters, digits and `_`.
/// An empty name is left alone.
pub fn needs_quoting(name: &str, is_reserved: impl Fn(&str) -> bool) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_digit()
        || name.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_'))
        || is_reserved(name)
}
