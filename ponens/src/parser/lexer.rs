//! Tokens of formula text.
//!
//! Operators are written either as keywords or as symbols:
//!
//! | Operator      | Keyword   | Symbols        |
//! |---------------|-----------|----------------|
//! | negation      | `not`     | `~`, `!`       |
//! | conjunction   | `and`     | `&`            |
//! | disjunction   | `or`      | `\|`           |
//! | implication   | `implies` | `=>`, `->`     |
//! | biconditional | `iff`     | `<=>`, `<->`   |
//!
//! Keywords are matched as whole words, so `notable` and `orange` are identifiers.
//! An identifier is any other (non-empty) run of alphanumeric characters.

use crate::types::err::{self};

/// The kinds of token which may appear in formula text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    Not,
    And,
    Or,
    Implies,
    Iff,
    LParen,
    RParen,
}

/// A token, paired with the span of text it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,

    /// The byte offset of the first character of the token.
    pub start: usize,

    /// The byte offset immediately after the last character of the token.
    pub end: usize,
}

/// Symbols, longest first so that a prefix never shadows a longer symbol.
const SYMBOLS: [(&str, Token); 10] = [
    ("<=>", Token::Iff),
    ("<->", Token::Iff),
    ("=>", Token::Implies),
    ("->", Token::Implies),
    ("~", Token::Not),
    ("!", Token::Not),
    ("&", Token::And),
    ("|", Token::Or),
    ("(", Token::LParen),
    (")", Token::RParen),
];

fn keyword(word: &str) -> Option<Token> {
    match word {
        "not" => Some(Token::Not),
        "and" => Some(Token::And),
        "or" => Some(Token::Or),
        "implies" => Some(Token::Implies),
        "iff" => Some(Token::Iff),
        _ => None,
    }
}

/// Splits `text` into lexemes, or returns the position of the first character which begins no token.
pub fn tokenize(text: &str) -> Result<Vec<Lexeme>, err::ParseError> {
    let mut lexemes = Vec::default();
    let mut position = 0;

    'token_loop: while let Some(character) = text[position..].chars().next() {
        if character.is_whitespace() {
            position += character.len_utf8();
            continue;
        }

        if character.is_alphanumeric() {
            let length = text[position..]
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(text.len() - position);
            let word = &text[position..position + length];

            let token = keyword(word).unwrap_or_else(|| Token::Identifier(word.to_string()));
            lexemes.push(Lexeme {
                token,
                start: position,
                end: position + length,
            });
            position += length;
            continue;
        }

        for (symbol, token) in &SYMBOLS {
            if text[position..].starts_with(symbol) {
                lexemes.push(Lexeme {
                    token: token.clone(),
                    start: position,
                    end: position + symbol.len(),
                });
                position += symbol.len();
                continue 'token_loop;
            }
        }

        return Err(err::ParseError::InvalidCharacter {
            character,
            position,
        });
    }

    Ok(lexemes)
}
