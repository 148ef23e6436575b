//! Context-sensitive classification of bare words.
//!
//! The same word can be a property name in one position and a variable
//! name in another (`ADD width 100px` vs `VAR width = 100px`), so bare
//! words are classified by looking back over the tokens emitted so far.
//! The classifier is a pure function of the word plus an immutable view
//! of that prior output, which keeps the scanner single-pass and makes
//! the rules independently testable against synthetic token prefixes.

use super::token::Token;
use crate::vocab;

/// The lexical class a bare word resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Keyword,
    Value,
    Property,
    Variable,
}

/// Classifies `word` against the vocab tables and the already-emitted
/// token prefix.
///
/// Priority:
/// 1. members of the keyword set are always keywords;
/// 2. recognized bare CSS value words are values, unless they directly
///    follow a keyword (`VAR none = ...` declares a variable `none`);
/// 3. otherwise, relative to the most recent keyword: the word right
///    after `VAR` is the declared variable name; a recognized base
///    property is a property if the statement has not bound one yet;
/// 4. anything left is a variable name.
pub fn classify_word(word: &str, prior: &[Token]) -> WordClass {
    if vocab::KEYWORDS.contains(word) {
        return WordClass::Keyword;
    }

    let follows_keyword = matches!(prior.last(), Some(Token::Keyword(_)));
    if vocab::BARE_VALUE_KEYWORDS.contains(word) && !follows_keyword {
        return WordClass::Value;
    }

    if let Some(keyword_at) = prior
        .iter()
        .rposition(|token| matches!(token, Token::Keyword(_)))
    {
        let Some(Token::Keyword(keyword)) = prior.get(keyword_at) else {
            unreachable!("rposition matched a keyword");
        };

        if keyword == "VAR" && keyword_at == prior.len() - 1 {
            return WordClass::Variable;
        }

        let property_bound = matches!(prior.get(keyword_at + 1), Some(Token::Property(_)));
        if vocab::BASE_PROPERTIES.contains(word) && !property_bound {
            return WordClass::Property;
        }
    }

    WordClass::Variable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword(s: &str) -> Token {
        Token::Keyword(s.to_string())
    }

    #[test]
    fn keyword_wins_over_everything() {
        assert_eq!(classify_word("ADD", &[]), WordClass::Keyword);
        assert_eq!(classify_word("VAR", &[keyword("ADD")]), WordClass::Keyword);
    }

    #[test]
    fn property_after_add() {
        assert_eq!(
            classify_word("width", &[keyword("ADD")]),
            WordClass::Property
        );
    }

    #[test]
    fn second_property_slot_falls_through_to_variable() {
        let prior = [keyword("ADD"), Token::Property("width".into())];
        assert_eq!(classify_word("height", &prior), WordClass::Variable);
    }

    #[test]
    fn name_directly_after_var_is_a_variable() {
        assert_eq!(
            classify_word("width", &[keyword("VAR")]),
            WordClass::Variable
        );
    }

    #[test]
    fn bare_css_value_word_is_a_value_unless_it_follows_a_keyword() {
        let prior = [keyword("ADD"), Token::Property("background".into())];
        assert_eq!(classify_word("blue", &prior), WordClass::Value);
        assert_eq!(classify_word("none", &[keyword("VAR")]), WordClass::Variable);
    }

    #[test]
    fn unknown_word_without_context_is_a_variable() {
        assert_eq!(classify_word("whatever", &[]), WordClass::Variable);
    }
}
