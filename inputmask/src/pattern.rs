//! Classification of pattern characters.
//!
//! An expression is an ordered sequence of characters. Three reserved
//! letters are typed placeholders; every other character is a literal
//! separator emitted verbatim. There is no escape mechanism, so a literal
//! `D`, `L`, or `C` cannot be expressed.

/// A typed placeholder inside a mask expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    /// `D`: accepts a numeric input character.
    Digit,
    /// `L`: accepts an alphabetic input character.
    Letter,
    /// `C`: accepts an input character from the next unconsumed allow-list.
    Condition,
}

impl Placeholder {
    /// Classifies a single pattern character.
    ///
    /// Returns `None` for literals. Classification is case-sensitive and
    /// purely by character value: `d`, `l`, and `c` are literals.
    #[must_use]
    pub fn classify(ch: char) -> Option<Self> {
        match ch {
            'D' => Some(Self::Digit),
            'L' => Some(Self::Letter),
            'C' => Some(Self::Condition),
            _ => None,
        }
    }
}

/// Tests membership of `ch` in a comma-separated allow-list.
///
/// Spaces anywhere in the list are insignificant: `"7, 8"` allows `'7'` and
/// `'8'`. An alternative longer than one character after space-stripping can
/// never match, and a space itself can never be an allowed character.
pub(crate) fn allow_list_contains(list: &str, ch: char) -> bool {
    list.split(',').any(|alternative| {
        let mut chars = alternative.chars().filter(|c| *c != ' ');
        chars.next() == Some(ch) && chars.next().is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::{allow_list_contains, Placeholder};

    #[test]
    fn reserved_letters_classify() {
        assert_eq!(Placeholder::classify('D'), Some(Placeholder::Digit));
        assert_eq!(Placeholder::classify('L'), Some(Placeholder::Letter));
        assert_eq!(Placeholder::classify('C'), Some(Placeholder::Condition));
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert_eq!(Placeholder::classify('d'), None);
        assert_eq!(Placeholder::classify('l'), None);
        assert_eq!(Placeholder::classify('c'), None);
    }

    #[test]
    fn everything_else_is_a_literal() {
        for ch in ['+', '-', '(', ')', ' ', '7', 'x', 'й', '🔒'] {
            assert_eq!(Placeholder::classify(ch), None);
        }
    }

    #[test]
    fn allow_list_ignores_spaces() {
        assert!(allow_list_contains("7, 8", '7'));
        assert!(allow_list_contains("7, 8", '8'));
        assert!(allow_list_contains(" 7 ,8", '7'));
        assert!(!allow_list_contains("7, 8", '9'));
    }

    #[test]
    fn allow_list_rejects_multi_char_alternatives() {
        assert!(!allow_list_contains("78", '7'));
        assert!(!allow_list_contains("a b", 'a'));
    }

    #[test]
    fn allow_list_never_matches_a_space() {
        assert!(!allow_list_contains(" ", ' '));
        assert!(!allow_list_contains(", ,", ' '));
    }

    #[test]
    fn empty_allow_list_matches_nothing() {
        assert!(!allow_list_contains("", '7'));
    }
}
