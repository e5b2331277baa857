//! A module consists of the BNF rule compiler which turns grammar notation
//! into a [RuleNode] tree.
//!
//! The notation is compact: identifiers reference named symbols, `|` writes
//! alternation, `( )` group, and the postfix quantifiers `+`, `*` and `?`
//! bind to the directly preceding atom. Whitespace separates tokens; there
//! are no comments.
//!
//! ```text
//! grammar     := alternation
//! alternation := sequence ("|" sequence)*
//! sequence    := quantified+ | ε
//! quantified  := atom ("+" | "*" | "?")?
//! atom        := identifier | "(" alternation ")"
//! ```
//!
//! Compilation resolves identifiers against a name table, nests parenthesis
//! groups, and lowers the result into a tree whose variants mirror the
//! grammar structure. The compiler checks structure only; it does not try to
//! prove the grammar unambiguous or even finite.
//!
//! # Example
//!
//! ```
//! use lexigram::grammar::RuleNode;
//!
//! let symbols = [("a", "a"), ("b", "b")];
//! let rule = RuleNode::compile("a b | (a | b)+ | b?", &symbols).unwrap();
//! assert_eq!(
//!     rule,
//!     RuleNode::Alt(vec![
//!         RuleNode::Seq(vec![RuleNode::Ref("a"), RuleNode::Ref("b")]),
//!         RuleNode::More(Box::new(RuleNode::Alt(vec![
//!             RuleNode::Ref("a"),
//!             RuleNode::Ref("b"),
//!         ]))),
//!         RuleNode::Opt(Box::new(RuleNode::Ref("b"))),
//!     ])
//! );
//! // the canonical pretty printer round trips the notation
//! assert_eq!(format!("{}", rule), "a b | (a | b)+ | b?");
//! ```

mod group;
mod lowering;
mod resolver;
mod rule;
mod tokenizer;


/// A compiled grammar rule.
///
/// The tree mirrors the compositional structure of the grammar notation it
/// was lowered from. After lowering, [Seq](RuleNode::Seq) and
/// [Alt](RuleNode::Alt) always hold at least one child, the quantifier
/// variants wrap exactly one child, and single element sequences collapse
/// into the element itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleNode<TSym> {
    /// A reference to a named grammar symbol.
    Ref(TSym),
    /// A concatenation of rules, in order.
    Seq(Vec<RuleNode<TSym>>),
    /// Ordered alternative rules.
    Alt(Vec<RuleNode<TSym>>),
    /// One or more repetitions of the child.
    More(Box<RuleNode<TSym>>),
    /// Zero or more repetitions of the child.
    Repeat(Box<RuleNode<TSym>>),
    /// An optional child.
    Opt(Box<RuleNode<TSym>>),
    /// The empty production.
    Empty,
}

#[derive(Debug, Clone)]
/// One piece of an interleaved rule declaration: either grammar notation or
/// an already resolved symbol spliced in at its position.
pub enum RulePart<'s, TSym> {
    Src(&'s str),
    Sym(TSym),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An atom of grammar notation produced by the grammar tokenizer.
pub(crate) enum GrammarAtom<TSym> {
    Ident(String),
    Operator(char),
    Symbol(TSym),
}

#[derive(Debug, Clone, PartialEq)]
/// An intermediate tree of parenthesis groups, before alternation and
/// sequence discrimination.
pub(crate) enum GroupNode<TSym> {
    Atom(GrammarAtom<TSym>),
    Group(Vec<GroupNode<TSym>>),
}

pub(crate) const OPERATORS: [char; 6] = ['|', '(', ')', '+', '*', '?'];
