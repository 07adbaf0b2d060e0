//! Error types used in the library.
//!
//! - Parse errors are the result of malformed formula text.
//! - Oracle errors mark the limits of deciding satisfiability by enumeration.
//! - Inference errors are failed preconditions of [modus ponens](crate::procedures::modus_ponens) or [resolution](crate::procedures::resolution).
//!
//! None of these are fatal.
//! On any error the [context](crate::context) is exactly as it was before the call which returned the error.
//!
//! Names of the error enums, for the most part, overlap with corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::formula::Formula;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Oracle(OracleError),
    Inference(InferenceError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Oracle(e) => write!(f, "{e}"),
            Self::Inference(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors during parsing.
///
/// Positions are byte offsets into the parsed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// An empty string (or only whitespace), where some formula was required.
    Empty,

    /// A character which cannot begin any token.
    InvalidCharacter { character: char, position: usize },

    /// A token which does not fit the grammar at the given position.
    UnexpectedToken { token: String, position: usize },

    /// The input ended while some part of a formula was still required.
    UnexpectedEnd,

    /// An opening parenthesis at the given position was never closed.
    UnclosedParenthesis { position: usize },

    /// The formula nests deeper than the [parser](crate::parser) allows, first at the given position.
    TooDeep { position: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "syntax error: empty formula"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(f, "syntax error: invalid character '{character}' at {position}"),
            Self::UnexpectedToken { token, position } => {
                write!(f, "syntax error: unexpected '{token}' at {position}")
            }
            Self::UnexpectedEnd => write!(f, "syntax error: unexpected end of formula"),
            Self::UnclosedParenthesis { position } => {
                write!(f, "syntax error: parenthesis opened at {position} is never closed")
            }
            Self::TooDeep { position } => {
                write!(f, "syntax error: formula nested too deeply at {position}")
            }
        }
    }
}

/// Errors from a satisfiability oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OracleError {
    /// There are more distinct variables than the configured limit allows enumerating.
    TooManyVariables { count: usize, limit: usize },

    /// An evaluation was requested on an assignment which gives no value to the named variable.
    Unassigned(String),
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyVariables { count, limit } => write!(
                f,
                "too many variables: {count} distinct variables exceeds the limit of {limit}"
            ),
            Self::Unassigned(name) => write!(f, "no value assigned to variable '{name}'"),
        }
    }
}

/// Failed preconditions of an inference rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InferenceError {
    /// The second argument to modus ponens is not (at the top level) an implication.
    NotAnImplication(Formula),

    /// The premise of modus ponens is not equivalent to the antecedent of the implication.
    AntecedentMismatch { premise: Formula, antecedent: Formula },

    /// An argument to resolution is not a disjunction of literals.
    NotAClause(Formula),

    /// No literal of the first clause has its complement in the second clause.
    NoComplementaryLiterals,
}

impl From<InferenceError> for ErrorKind {
    fn from(e: InferenceError) -> Self {
        ErrorKind::Inference(e)
    }
}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnImplication(formula) => {
                write!(f, "{formula} is not an implication")
            }
            Self::AntecedentMismatch {
                premise,
                antecedent,
            } => write!(
                f,
                "premise {premise} does not match implication antecedent {antecedent}"
            ),
            Self::NotAClause(formula) => {
                write!(f, "{formula} is not a disjunction of literals")
            }
            Self::NoComplementaryLiterals => {
                write!(f, "no complementary literals found; resolution not applicable")
            }
        }
    }
}
