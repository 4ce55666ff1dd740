//! Normalized logger names.

use std::borrow::Borrow;
use std::fmt;

/// Cache key for a logger: the case-folded form of its name.
///
/// Each character is folded on its own with the Unicode default lowercase
/// mapping, so the result depends neither on the process locale nor on
/// neighbouring characters. `"Foo"`, `"foo"` and `"FOO"` share one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoggerKey(String);

impl LoggerKey {
    /// Normalize a logger name. An absent name is treated as `""`.
    pub fn normalize(name: Option<&str>) -> Self {
        Self(
            name.unwrap_or_default()
                .chars()
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LoggerKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LoggerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LoggerKey {
    fn from(name: &str) -> Self {
        Self::normalize(Some(name))
    }
}
