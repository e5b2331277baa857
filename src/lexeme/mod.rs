//! A module consists of the terminal declaration utilities of the lexer.
//!
//! A [Terminal] pairs a token value with a [Matcher] and carries the
//! selection metadata the [Lexer](crate::Lexer) consults while tokenizing: an
//! output channel, a priority, and optional lexing mode effects. Matchers come
//! in three shapes: a fixed keyword, an anchored regular expression, and a
//! user supplied callback.
//!
//! Modes gate terminals behind a pushdown stack so that nestable contexts
//! like strings or block comments can activate their own terminal set. A
//! terminal without a mode is considered only while the stack is empty.
//!
//! # Example
//!
//! Tokenizing block comments into a separate channel with a pushed mode:
//!
//! ```
//! use lexigram::lexeme::Terminal;
//! use lexigram::Lexer;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Token {
//!     CommentOpen,
//!     CommentClose,
//!     CommentChar,
//!     Word,
//! }
//!
//! let lexer = Lexer::new(vec![
//!     Terminal::literal(Token::CommentOpen, "/*")
//!         .unwrap()
//!         .channel("comment")
//!         .push_mode("comment"),
//!     Terminal::literal(Token::CommentClose, "*/")
//!         .unwrap()
//!         .channel("comment")
//!         .mode("comment")
//!         .pop_mode(),
//!     Terminal::pattern(Token::CommentChar, r".")
//!         .unwrap()
//!         .channel("comment")
//!         .mode("comment"),
//!     Terminal::pattern(Token::Word, r"[a-z]+").unwrap(),
//! ]);
//!
//! let output = lexer.tokenize("a/*b*/c").unwrap();
//! let words: Vec<&str> = output
//!     .channel("default")
//!     .iter()
//!     .map(|t| t.content.as_str())
//!     .collect();
//! assert_eq!(words, vec!["a", "c"]);
//! let comment: Vec<&str> = output
//!     .channel("comment")
//!     .iter()
//!     .map(|t| t.content.as_str())
//!     .collect();
//! assert_eq!(comment, vec!["/*", "b", "*/"]);
//! assert!(output.fail.is_empty());
//! ```

mod matcher;
mod terminal;


use crate::Log;
use once_cell::unsync::OnceCell;
use regex::Regex;

/// The channel a terminal reports to unless one is assigned.
pub const DEFAULT_CHANNEL: &str = "default";

/// A pluggable match primitive: given the input and a byte offset, report the
/// end of a match beginning exactly there, or nothing.
///
/// A successful end offset is always strictly greater than the offered one;
/// matchers never produce zero width matches. Matchers hold no cross call
/// state and may be invoked any number of times at any offset.
///
/// # Example
/// ```
/// use lexigram::lexeme::Matcher;
///
/// let number = Matcher::pattern(r"[0-9]+").unwrap();
/// assert_eq!(number.find_end("a42", 1).unwrap(), Some(3));
/// // anchored at the offered position, never later
/// assert_eq!(number.find_end("a42", 0).unwrap(), None);
///
/// let keyword = Matcher::literal("if").unwrap();
/// assert_eq!(keyword.find_end("if x", 0).unwrap(), Some(2));
/// ```
pub struct Matcher {
    kind: MatcherKind,
}

enum MatcherKind {
    Literal(String),
    Pattern(Regex),
    Predicate(Box<dyn Fn(&str, usize) -> Option<usize>>),
}

/// A single terminal declaration: a token value, a [Matcher], and the
/// selection metadata consulted by the [Lexer](crate::Lexer).
///
/// Defaults are the `"default"` channel and priority `0`. Higher priority
/// terminals are tried first; among equal priorities the declaration order
/// decides. There is no longest match across terminals, so a terminal that
/// should shadow another at the same starting position must outrank it.
///
/// # Example
/// ```
/// use lexigram::lexeme::Terminal;
/// use lexigram::Lexer;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Token {
///     If,
///     Id,
/// }
///
/// let lexer = Lexer::new(vec![
///     Terminal::pattern(Token::Id, r"[a-z]+").unwrap(),
///     Terminal::literal(Token::If, "if").unwrap().priority(10),
/// ]);
///
/// let output = lexer.tokenize("if abc").unwrap();
/// let default = output.channel("default");
/// assert_eq!(default[0].token, Token::If);
/// assert_eq!(default[1].content, "abc");
/// // the space matched nobody and surfaces as a failure fragment
/// assert_eq!(output.fail[0].content, " ");
/// ```
pub struct Terminal<TToken> {
    pub(crate) token: TToken,
    pub(crate) matcher: Matcher,
    pub(crate) channel: &'static str,
    pub(crate) priority: i32,
    pub(crate) mode: Option<&'static str>,
    pub(crate) push_mode: Option<&'static str>,
    pub(crate) pop_mode: bool,
    pub(crate) log: OnceCell<Log<&'static str>>,
}
