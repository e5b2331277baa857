//! Lexigram is a parser construction toolkit built around two pieces: a mode
//! aware priority [Lexer] which splits input into channeled token streams, and
//! a BNF rule compiler which turns grammar notation into a
//! [RuleNode](grammar::RuleNode) tree for driving a recursive descent parser.
//!
//! # Overview
//!
//! A [Lexer] is declared as an ordered collection of [Terminal](lexeme::Terminal)s.
//! Each terminal pairs a token value with a [Matcher](lexeme::Matcher) and may
//! assign an output channel, a selection priority, and lexing mode effects.
//! Tokenizing walks the input once; at every position the highest priority
//! terminal whose matcher succeeds under the current mode wins. Input nobody
//! recognizes is never fatal; it is coalesced into failure [Fragment]s so that
//! callers can produce structured diagnostics.
//!
//! Grammar rules are written in a compact BNF notation with `|` alternation,
//! `( )` grouping and postfix `+`, `*`, `?` quantifiers, and are compiled into
//! a [RuleNode](grammar::RuleNode) tree whose variants mirror the grammar
//! structure.
//!
//! # Example
//!
//! ```
//! use lexigram::grammar::RuleNode;
//! use lexigram::lexeme::Terminal;
//! use lexigram::{Lexer, Position};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Token {
//!     If,
//!     Number,
//!     Space,
//! }
//!
//! let lexer = Lexer::new(vec![
//!     Terminal::literal(Token::If, "if").unwrap().priority(10),
//!     Terminal::pattern(Token::Number, r"[0-9]+").unwrap(),
//!     Terminal::pattern(Token::Space, r"\s+").unwrap().channel("skip"),
//! ]);
//!
//! let output = lexer.tokenize("if 42").unwrap();
//! let default = output.channel("default");
//! assert_eq!(default[0].content, "if");
//! assert_eq!(default[1].content, "42");
//! assert_eq!(default[1].start, Position::new(3, 1, 4));
//! assert_eq!(output.channel("skip").len(), 1);
//! assert!(output.fail.is_empty());
//!
//! let rule = RuleNode::compile("num (if num)*", &[("if", "if"), ("num", "num")]).unwrap();
//! assert_eq!(format!("{}", rule), "num (if num)*");
//! ```
//!
//! # License
//! [lexigram](crate) is provided under the MIT OR Apache-2.0 license.

mod error;
pub mod examples;
pub mod grammar;
mod lex;
pub mod lexeme;
mod tokenization;
mod util;

use lexeme::Terminal;
use once_cell::unsync::OnceCell;
use std::collections::HashMap;

pub use util::{Log, Position, PositionTracker};

#[derive(Debug, Hash, Clone, PartialEq, Eq)]
/// A successful terminal match: the consumed slice of the input together with
/// the token value of the matched terminal.
pub struct Token<TToken> {
    pub token: TToken,
    pub content: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Hash, Clone, PartialEq, Eq)]
/// A contiguous run of input no terminal recognized.
pub struct Fragment {
    pub content: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug)]
/// The outcome of [Lexer::tokenize]: matched tokens grouped per output
/// channel, and failure fragments in input order.
///
/// Every channel declared on a terminal is present in `success`, possibly
/// empty; no channel is created lazily during tokenization.
pub struct LexOutput<TToken> {
    pub success: HashMap<&'static str, Vec<Token<TToken>>>,
    pub fail: Vec<Fragment>,
}

/// An ordered registry of compiled terminals.
///
/// Terminals are held in selection order: priority descending, declaration
/// order among equal priorities. The registry is immutable once built.
pub struct TerminalSet<TToken> {
    terminals: Vec<Terminal<TToken>>,
    channels: Vec<&'static str>,
}

/// The tokenization engine driving a cursor across the input.
///
/// See the [crate] level documentation for an example.
pub struct Lexer<TToken> {
    terminals: TerminalSet<TToken>,
    log: OnceCell<Log<&'static str>>,
}

#[derive(Debug)]
/// An error raised while tokenizing when a matcher breaks its advance
/// contract, e.g. a predicate reporting a match which does not consume input.
pub struct LexError {
    pub pointer: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error describing structurally invalid grammar notation.
pub enum GrammarError {
    /// An opening parenthesis was never closed, or a closing one never opened.
    UnbalancedParenthesis,
    /// A postfix quantifier with no operand to bind to.
    DanglingOperator(char),
    /// An identifier which matched no entry of the symbol table.
    UnresolvedReference(String),
}
