//! A tokenizer and grammar for JSON extended with `/* */` block comments.

use crate::grammar::RuleNode;
use crate::lexeme::Terminal;
use crate::Lexer;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsonToken {
    String,
    Number,
    Constant,
    Colon,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Space,
    CommentOpen,
    CommentText,
    CommentClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Grammar symbols of the JSON rules.
pub enum JsonSym {
    Value,
    Object,
    Array,
    Member,
    String,
    Number,
    Constant,
    Colon,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
}

impl Display for JsonSym {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JsonSym::Value => "value",
            JsonSym::Object => "object",
            JsonSym::Array => "array",
            JsonSym::Member => "member",
            JsonSym::String => "string",
            JsonSym::Number => "number",
            JsonSym::Constant => "constant",
            JsonSym::Colon => "colon",
            JsonSym::Comma => "comma",
            JsonSym::OpenBrace => "open_brace",
            JsonSym::CloseBrace => "close_brace",
            JsonSym::OpenBracket => "open_bracket",
            JsonSym::CloseBracket => "close_bracket",
        };
        write!(f, "{}", name)
    }
}

/// Build the lexer.
///
/// Whitespace is reported on the `"skip"` channel. A `/*` pushes the
/// `"comment"` mode, inside which only the comment terminals are active, and
/// `*/` pops it again; everything in between lands on the `"comment"`
/// channel. The close marker outranks the text terminal at every position.
pub fn json_lexer() -> Lexer<JsonToken> {
    Lexer::new(vec![
        Terminal::pattern(JsonToken::Space, r"\s+")
            .unwrap()
            .channel("skip"),
        Terminal::literal(JsonToken::CommentOpen, "/*")
            .unwrap()
            .channel("comment")
            .push_mode("comment"),
        Terminal::literal(JsonToken::CommentClose, "*/")
            .unwrap()
            .channel("comment")
            .mode("comment")
            .pop_mode()
            .priority(1),
        Terminal::pattern(JsonToken::CommentText, r"[^*]+|\*")
            .unwrap()
            .channel("comment")
            .mode("comment"),
        Terminal::literal(JsonToken::OpenBrace, "{").unwrap(),
        Terminal::literal(JsonToken::CloseBrace, "}").unwrap(),
        Terminal::literal(JsonToken::OpenBracket, "[").unwrap(),
        Terminal::literal(JsonToken::CloseBracket, "]").unwrap(),
        Terminal::literal(JsonToken::Comma, ",").unwrap(),
        Terminal::literal(JsonToken::Colon, ":").unwrap(),
        Terminal::pattern(JsonToken::String, r#""([^"\\\r\n]|\\.)*""#).unwrap(),
        Terminal::pattern(JsonToken::Number, r"([0-9]+)(\.[0-9]+)?([eE][+-]?[0-9]+)?").unwrap(),
        Terminal::pattern(JsonToken::Constant, r"(true|false|null)").unwrap(),
    ])
}

fn symbols() -> Vec<(&'static str, JsonSym)> {
    vec![
        ("value", JsonSym::Value),
        ("object", JsonSym::Object),
        ("array", JsonSym::Array),
        ("member", JsonSym::Member),
        ("string", JsonSym::String),
        ("number", JsonSym::Number),
        ("constant", JsonSym::Constant),
        ("colon", JsonSym::Colon),
        ("comma", JsonSym::Comma),
        ("open_brace", JsonSym::OpenBrace),
        ("close_brace", JsonSym::CloseBrace),
        ("open_bracket", JsonSym::OpenBracket),
        ("close_bracket", JsonSym::CloseBracket),
    ]
}

/// The JSON grammar as compiled rule trees, one per nonterminal.
pub fn json_grammar() -> Vec<(JsonSym, RuleNode<JsonSym>)> {
    let symbols = symbols();
    vec![
        (
            JsonSym::Value,
            RuleNode::compile("string | number | constant | object | array", &symbols).unwrap(),
        ),
        (
            JsonSym::Object,
            RuleNode::compile(
                "open_brace (member (comma member)*)? close_brace",
                &symbols,
            )
            .unwrap(),
        ),
        (
            JsonSym::Member,
            RuleNode::compile("string colon value", &symbols).unwrap(),
        ),
        (
            JsonSym::Array,
            RuleNode::compile(
                "open_bracket (value (comma value)*)? close_bracket",
                &symbols,
            )
            .unwrap(),
        ),
    ]
}
