//! Player marks.

use serde::{Deserialize, Serialize};

/// Mark placed by a player.
///
/// Converts to and from its board symbol (`"X"` / `"O"`) through
/// `Display` and `FromStr`; iteration order is `Cross`, then `Naught`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Cross (`X`), the default starting mark.
    #[default]
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cross,
    /// Naught (`O`).
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Naught,
}

impl Mark {
    /// Returns the opposite mark.
    pub fn other(self) -> Self {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Naught => 'O',
        }
    }

    /// Parses a board symbol; `None` for anything but `'X'` or `'O'`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Mark::Cross),
            'O' => Some(Mark::Naught),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_other_is_involution() {
        assert_eq!(Mark::Cross.other(), Mark::Naught);
        assert_eq!(Mark::Naught.other(), Mark::Cross);
        for mark in Mark::iter() {
            assert_eq!(mark.other().other(), mark);
        }
    }

    #[test]
    fn test_string_symbols() {
        assert_eq!(Mark::Cross.to_string(), "X");
        assert_eq!(Mark::Naught.to_string(), "O");
        assert_eq!(Mark::from_str("O"), Ok(Mark::Naught));
        assert!(Mark::from_str("x").is_err());
    }

    #[test]
    fn test_char_symbols() {
        assert_eq!(Mark::from_symbol('X'), Some(Mark::Cross));
        assert_eq!(Mark::from_symbol(' '), None);
        assert_eq!(Mark::Naught.symbol(), 'O');
    }

    #[test]
    fn test_iteration_order() {
        let marks: Vec<Mark> = Mark::iter().collect();
        assert_eq!(marks, vec![Mark::Cross, Mark::Naught]);
    }
}
