/// Declares a string newtype with the given nutype validators. Values are
/// trimmed with [`trim`].
macro_rules! nutype_string {
    ($(#[$meta:meta])* $ident:ident($($validate:tt)*)) => {
        $(#[$meta])*
        #[::nutype::nutype(
            sanitize(with = |value: String| crate::macros::trim(&value).to_owned()),
            validate($($validate)*),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize),
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;

/// Strips leading and trailing whitespace the way a browser's
/// `String.prototype.trim` does.
///
/// Unlike [`str::trim`] this strips U+FEFF and keeps U+0085.
pub(crate) fn trim(value: &str) -> &str {
    value.trim_matches(is_page_whitespace)
}

fn is_page_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
