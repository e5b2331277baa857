use crate::examples::json::{json_grammar, json_lexer, JsonSym, JsonToken};
use serde_json::Value as SerdeValue;
use std::time::Instant;

const SAMPLE: &str = r#"
{
    "quiz": {
        "maths": {
            "q1": {
                "question": "5 + 7 = ?",
                "options": ["10", "11", "12", "13"],
                "answer": "12",
                "points": 1.5,
                "retired": false
            },
            "q2": {
                "question": "12 - 8 = ?",
                "options": ["1", "2", "3", "4"],
                "answer": "4",
                "hint": null
            }
        }
    }
}
"#;

#[test]
fn tokenizes_commented_json() {
    let lexer = json_lexer();
    let output = lexer
        .tokenize(r#"{"a": /* answer */ 42, "b": [true, null]}"#)
        .unwrap();
    assert!(output.fail.is_empty());

    let default: Vec<JsonToken> = output
        .channel("default")
        .iter()
        .map(|t| t.token)
        .collect();
    assert_eq!(
        default,
        vec![
            JsonToken::OpenBrace,
            JsonToken::String,
            JsonToken::Colon,
            JsonToken::Number,
            JsonToken::Comma,
            JsonToken::String,
            JsonToken::Colon,
            JsonToken::OpenBracket,
            JsonToken::Constant,
            JsonToken::Comma,
            JsonToken::Constant,
            JsonToken::CloseBracket,
            JsonToken::CloseBrace,
        ]
    );

    let comment: Vec<&str> = output
        .channel("comment")
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(comment, vec!["/*", " answer ", "*/"]);
    assert!(!output.channel("skip").is_empty());
}

#[test]
fn lone_stars_inside_comments_do_not_close_them() {
    let lexer = json_lexer();
    let output = lexer.tokenize("/* a*b **/").unwrap();
    assert!(output.fail.is_empty());
    let comment: Vec<&str> = output
        .channel("comment")
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(comment, vec!["/*", " a", "*", "b ", "*", "*/"]);
    assert_eq!(
        output.channel("comment").last().unwrap().token,
        JsonToken::CommentClose
    );
}

#[test]
fn unterminated_comment_reaches_end_of_input() {
    let lexer = json_lexer();
    let output = lexer.tokenize("42 /* dangling").unwrap();
    // the mode stack is still pushed at end of input; nothing is lost
    assert!(output.fail.is_empty());
    assert_eq!(output.channel("default").len(), 1);
    let comment: String = output
        .channel("comment")
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(comment, "/* dangling");
}

#[test]
fn sample_document_tokenizes_cleanly() {
    let lexer = json_lexer();
    let output = lexer.tokenize(SAMPLE).unwrap();
    assert!(output.fail.is_empty());

    // cross check the string count against a reference JSON parser
    let parsed: SerdeValue = serde_json::from_str(SAMPLE).unwrap();
    fn count_strings(value: &SerdeValue) -> usize {
        match value {
            SerdeValue::String(_) => 1,
            SerdeValue::Array(items) => items.iter().map(count_strings).sum(),
            SerdeValue::Object(members) => members
                .iter()
                .map(|(_, v)| 1 + count_strings(v))
                .sum(),
            _ => 0,
        }
    }
    let strings = output
        .channel("default")
        .iter()
        .filter(|t| t.token == JsonToken::String)
        .count();
    assert_eq!(strings, count_strings(&parsed));
}

#[test]
fn tokenization_benchmark() {
    let lexer = json_lexer();
    let times = 100;

    let serde_instant = Instant::now();
    for _ in 0..times {
        serde_json::from_str::<SerdeValue>(SAMPLE).unwrap();
    }
    println!("Serde time:{:?}", serde_instant.elapsed());

    let lexer_instant = Instant::now();
    for _ in 0..times {
        lexer.tokenize(SAMPLE).unwrap();
    }
    println!("Lexer time:{:?}", lexer_instant.elapsed());
}

#[test]
fn json_grammar_compiles() {
    let rules = json_grammar();

    let (_, value) = rules
        .iter()
        .find(|(sym, _)| *sym == JsonSym::Value)
        .unwrap();
    assert!(value.contains_ref(&JsonSym::Object));
    assert!(value.contains_ref(&JsonSym::Array));

    let (_, member) = rules
        .iter()
        .find(|(sym, _)| *sym == JsonSym::Member)
        .unwrap();
    assert_eq!(format!("{}", member), "string colon value");

    let (_, object) = rules
        .iter()
        .find(|(sym, _)| *sym == JsonSym::Object)
        .unwrap();
    assert_eq!(
        format!("{}", object),
        "open_brace (member (comma member)*)? close_brace"
    );
}
