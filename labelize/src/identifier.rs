use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The identifier of a labelled record, as stored in a foreign key field.
///
/// Identifiers are either integers or strings. Nothing checks that an
/// identifier refers to an existing record; the label getter finds out.
///
/// # Examples
///
/// ```
/// use labelize::Identifier;
///
/// assert_eq!(Identifier::from(5), Identifier::Integer(5));
/// assert_eq!(Identifier::from("7"), Identifier::Text("7".to_owned()));
/// assert_eq!(Identifier::from(5).to_string(), "5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// An integer identifier.
    Integer(i64),
    /// A string identifier.
    Text(String),
}

impl Identifier {
    /// Returns `true` if the identifier is an empty or whitespace-only
    /// string.
    ///
    /// A blank identifier is treated the same as an unset one.
    ///
    /// ```
    /// use labelize::Identifier;
    ///
    /// assert!(Identifier::from("").is_blank());
    /// assert!(Identifier::from("  ").is_blank());
    /// assert!(!Identifier::from(0).is_blank());
    /// ```
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Integer(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Returns the integer value, if this is an integer identifier.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the string value, if this is a string identifier.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
