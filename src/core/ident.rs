//! Package-scoped asset identifiers.
//!
//! An identifier is `<package>-<uuid>`, where the uuid is in canonical
//! lowercase hyphenated form:
//!
//! ```text
//! nginx-0b3c1f2e-5a6d-4e7f-8a9b-0c1d2e3f4a5b
//! ```

use regex::{Captures, Regex};
use std::borrow::Cow;
use uuid::Uuid;

/// Field holding a document's own identifier.
pub const ID_FIELD: &str = "id";

const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// Mint a fresh identifier for `package`.
pub fn mint(package: &str) -> String {
    format!("{package}-{}", Uuid::new_v4().hyphenated())
}

/// Matcher for identifiers of a single package embedded in free text.
#[derive(Debug, Clone)]
pub struct IdentPattern {
    regex: Regex,
}

impl IdentPattern {
    /// Build the matcher for identifiers prefixed with `package`.
    pub fn new(package: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("{}-{UUID_PATTERN}", regex::escape(package)))?;
        Ok(Self { regex })
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Replace every non-overlapping match with the result of `f`.
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn replace_all<'t, F>(&self, text: &'t str, mut f: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> String,
    {
        self.regex
            .replace_all(text, |caps: &Captures<'_>| f(&caps[0]))
    }
}
