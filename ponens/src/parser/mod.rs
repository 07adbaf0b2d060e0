/*!
Parses formula text to a [Formula].

Operators, from tightest to loosest binding:

| Operator  | Associativity |
|-----------|---------------|
| `not`     | right (unary) |
| `and`     | left          |
| `or`      | left          |
| `implies` | right         |
| `iff`     | left          |

Parentheses override precedence.
The whole of the text must be a single formula, so empty text and trailing tokens are errors.

Each parenthesis, negation, and binary operator nests the formula one level deeper, and text nested deeper than [NESTING_LIMIT] is refused.
So, every parsed formula is shallow enough to be displayed, evaluated, and normalised without exhausting the stack.
See the [lexer] for the symbols which may be used in place of keywords.

```rust
# use ponens::parser::parse;
# use ponens::structures::formula::Formula;
let formula = parse("not p and q implies r implies s iff t").unwrap();

let p_and_q = Formula::and(Formula::not(Formula::var("p")), Formula::var("q"));
let chain = Formula::implies(p_and_q, Formula::implies(Formula::var("r"), Formula::var("s")));
assert_eq!(formula, Formula::iff(chain, Formula::var("t")));

assert!(parse("p and").is_err());
assert!(parse("(p or q").is_err());
assert!(parse("p q").is_err());
```
*/

pub mod lexer;

use lexer::{Lexeme, Token};

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// The deepest nesting of parentheses, negations, and binary operators in a parsed formula.
pub const NESTING_LIMIT: usize = 256;

/// Parses `text` to a formula.
pub fn parse(text: &str) -> Result<Formula, err::ErrorKind> {
    let lexemes = lexer::tokenize(text)?;
    if lexemes.is_empty() {
        return Err(err::ErrorKind::from(err::ParseError::Empty));
    }

    let mut parser = Parser {
        text,
        lexemes,
        index: 0,
        nesting: 0,
    };

    let formula = parser.iff()?;

    if let Some(lexeme) = parser.peek() {
        return Err(err::ErrorKind::from(parser.unexpected(lexeme)));
    }

    log::trace!(target: targets::PARSER, "Parsed '{text}' as {formula}");
    Ok(formula)
}

/// A recursive descent parser, with a method for each level of precedence.
struct Parser<'t> {
    text: &'t str,
    lexemes: Vec<Lexeme>,
    index: usize,

    /// How deeply the lexeme under consideration is nested.
    nesting: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.index)
    }

    /// Advances past the next lexeme if it is `token`, and returns the position of the lexeme if so.
    fn eat(&mut self, token: &Token) -> Option<usize> {
        match self.peek() {
            Some(lexeme) if lexeme.token == *token => {
                let position = lexeme.start;
                self.index += 1;
                Some(position)
            }
            _ => None,
        }
    }

    /// Nests one level deeper, for the lexeme at `position`.
    fn nest(&mut self, position: usize) -> Result<(), err::ParseError> {
        self.nesting += 1;
        match self.nesting > NESTING_LIMIT {
            true => {
                log::debug!(target: targets::PARSER, "Refused nesting beyond {NESTING_LIMIT} at {position}");
                Err(err::ParseError::TooDeep { position })
            }
            false => Ok(()),
        }
    }

    fn unexpected(&self, lexeme: &Lexeme) -> err::ParseError {
        err::ParseError::UnexpectedToken {
            token: self.text[lexeme.start..lexeme.end].to_string(),
            position: lexeme.start,
        }
    }

    fn iff(&mut self) -> Result<Formula, err::ParseError> {
        let nesting = self.nesting;
        let mut formula = self.implies()?;
        while let Some(position) = self.eat(&Token::Iff) {
            self.nest(position)?;
            formula = Formula::iff(formula, self.implies()?);
        }
        self.nesting = nesting;
        Ok(formula)
    }

    fn implies(&mut self) -> Result<Formula, err::ParseError> {
        let antecedent = self.or()?;
        match self.eat(&Token::Implies) {
            Some(position) => {
                let nesting = self.nesting;
                self.nest(position)?;
                let consequent = self.implies()?;
                self.nesting = nesting;
                Ok(Formula::implies(antecedent, consequent))
            }
            None => Ok(antecedent),
        }
    }

    fn or(&mut self) -> Result<Formula, err::ParseError> {
        let nesting = self.nesting;
        let mut formula = self.and()?;
        while let Some(position) = self.eat(&Token::Or) {
            self.nest(position)?;
            formula = Formula::or(formula, self.and()?);
        }
        self.nesting = nesting;
        Ok(formula)
    }

    fn and(&mut self) -> Result<Formula, err::ParseError> {
        let nesting = self.nesting;
        let mut formula = self.not()?;
        while let Some(position) = self.eat(&Token::And) {
            self.nest(position)?;
            formula = Formula::and(formula, self.not()?);
        }
        self.nesting = nesting;
        Ok(formula)
    }

    fn not(&mut self) -> Result<Formula, err::ParseError> {
        match self.eat(&Token::Not) {
            Some(position) => {
                let nesting = self.nesting;
                self.nest(position)?;
                let operand = self.not()?;
                self.nesting = nesting;
                Ok(Formula::not(operand))
            }
            None => self.atom(),
        }
    }

    /// A variable, or a parenthesised formula.
    fn atom(&mut self) -> Result<Formula, err::ParseError> {
        let Some(lexeme) = self.peek().cloned() else {
            return Err(err::ParseError::UnexpectedEnd);
        };
        self.index += 1;

        match lexeme.token {
            Token::Identifier(name) => Ok(Formula::Variable(name)),

            Token::LParen => {
                let nesting = self.nesting;
                self.nest(lexeme.start)?;
                let formula = self.iff()?;
                self.nesting = nesting;

                match self.peek() {
                    Some(Lexeme {
                        token: Token::RParen,
                        ..
                    }) => {
                        self.index += 1;
                        Ok(formula)
                    }
                    Some(other) => Err(self.unexpected(other)),
                    None => Err(err::ParseError::UnclosedParenthesis {
                        position: lexeme.start,
                    }),
                }
            }

            _ => Err(self.unexpected(&lexeme)),
        }
    }
}
