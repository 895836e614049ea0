//! Unicode locale identifiers with CLDR-style inheritance.
//!
//! A [`Locale`] is normalized on construction (`"SR_rs_LATN"` becomes
//! `"sr-Latn-RS"`) and resolves its parent chain for data lookups:
//!
//! 1. Language - Script - Region (`sr-Cyrl-RS`)
//! 2. Language - Script (`sr-Cyrl`)
//! 3. Language (`sr`)
//! 4. English (`en`)
//! 5. Empty locale
//!
//! Some locales have irregular parents, e.g. `es-AR` inherits from `es-419`.

mod parents;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A language, an optional script and an optional region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: String,
    region: String,
}

impl Locale {
    /// Creates a locale from an identifier such as `"en-US"` or `"sr_rs_latn"`.
    ///
    /// The first segment is the language. Later segments of 4 characters are
    /// the script, segments of 2 or 3 characters the region. Other segments
    /// are ignored.
    #[must_use]
    pub fn new(id: &str) -> Self {
        let id = id.to_lowercase().replace('_', "-");
        let mut locale = Self::default();
        for (i, part) in id.split('-').enumerate() {
            if i == 0 {
                locale.language = part.to_string();
                continue;
            }
            match part.len() {
                4 => locale.script = title_case(part),
                2 | 3 => locale.region = part.to_uppercase(),
                _ => {}
            }
        }
        locale
    }

    /// The empty locale, terminal value of every parent chain.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lowercase language subtag, e.g. `"sr"`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Titlecase script subtag, e.g. `"Latn"`, or `""`.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Uppercase region subtag, e.g. `"RS"`, or `""`.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns true if language, script and region are all empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.script.is_empty() && self.region.is_empty()
    }

    /// Returns the locale this one inherits data from.
    ///
    /// The parent of `en` and of the empty locale is the empty locale.
    #[must_use]
    pub fn parent(&self) -> Self {
        let id = self.to_string();
        if id.is_empty() || id == "en" {
            return Self::empty();
        }
        if let Some(parent) = parents::irregular_parent(&id) {
            return Self::new(parent);
        }

        if !self.region.is_empty() {
            Self {
                language: self.language.clone(),
                script: self.script.clone(),
                region: String::new(),
            }
        } else if !self.script.is_empty() {
            Self {
                language: self.language.clone(),
                ..Self::default()
            }
        } else {
            Self::new("en")
        }
    }

    /// Iterates over this locale and its parents, stopping before the empty
    /// locale.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        let start = (!self.is_empty()).then(|| self.clone());
        std::iter::successors(start, |locale| {
            let parent = locale.parent();
            (!parent.is_empty()).then_some(parent)
        })
    }
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.script.is_empty() {
            write!(f, "-{}", self.script)?;
        }
        if !self.region.is_empty() {
            write!(f, "-{}", self.region)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Locale {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::new(&id))
    }
}
