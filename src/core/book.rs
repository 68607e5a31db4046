//! Sub-ledger classifications shared by every entry kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-ledger a sequence number is scoped within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookType {
    /// Cash book
    Cash,
    /// Bank book
    Bank,
    /// Diocese book
    Diocese,
    /// Combined book, used by contra transfers only
    All,
}

impl BookType {
    /// Stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Bank => "bank",
            Self::Diocese => "diocese",
            Self::All => "all",
        }
    }

    /// Parses the stored form. Matching is exact; `"Cash"` is not a book type.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cash" => Some(Self::Cash),
            "bank" => Some(Self::Bank),
            "diocese" => Some(Self::Diocese),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_type_parse() {
        assert_eq!(BookType::parse("cash"), Some(BookType::Cash));
        assert_eq!(BookType::parse("all"), Some(BookType::All));
        assert_eq!(BookType::parse("Cash"), None);
        assert_eq!(BookType::parse("crypto"), None);
        assert_eq!(BookType::Diocese.to_string(), "diocese");
    }
}
