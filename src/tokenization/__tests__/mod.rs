use crate::lexeme::Terminal;
use crate::{Fragment, LexOutput, Lexer, Position, Token};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Tok {
    Kw,
    Num,
    Ws,
    Word,
    Open,
    Close,
    Any,
    F,
    For,
}

/// Merge every token and fragment by start index, check adjacency, and
/// rebuild the input from the contents.
fn reconstruct<TToken: Copy + Debug>(output: &LexOutput<TToken>) -> String {
    let mut entries: Vec<(usize, usize, &str)> = Vec::new();
    for tokens in output.success.values() {
        for t in tokens {
            assert!(t.end.index > t.start.index, "zero width success: {}", t);
            assert_eq!(t.end.index - t.start.index, t.content.len());
            entries.push((t.start.index, t.end.index, t.content.as_str()));
        }
    }
    for f in &output.fail {
        entries.push((f.start.index, f.end.index, f.content.as_str()));
    }
    entries.sort_by_key(|e| e.0);
    for pair in entries.windows(2) {
        assert_eq!(pair[1].0, pair[0].1, "gap between consecutive entries");
    }
    entries.iter().map(|e| e.2).collect()
}

fn keyword_lexer() -> Lexer<Tok> {
    Lexer::new(vec![
        Terminal::literal(Tok::Kw, "if").unwrap().priority(10),
        Terminal::pattern(Tok::Num, r"[0-9]+").unwrap(),
        Terminal::pattern(Tok::Ws, r"\s+").unwrap().channel("skip"),
    ])
}

#[test]
fn keyword_and_number() {
    let output = keyword_lexer().tokenize("if 42").unwrap();
    assert_eq!(
        output.channel("default"),
        [
            Token::new(
                Tok::Kw,
                "if".to_string(),
                Position::new(0, 1, 1),
                Position::new(2, 1, 3)
            ),
            Token::new(
                Tok::Num,
                "42".to_string(),
                Position::new(3, 1, 4),
                Position::new(5, 1, 6)
            ),
        ]
    );
    assert_eq!(
        output.channel("skip"),
        [Token::new(
            Tok::Ws,
            " ".to_string(),
            Position::new(2, 1, 3),
            Position::new(3, 1, 4)
        )]
    );
    assert!(output.fail.is_empty());
    assert_eq!(reconstruct(&output), "if 42");
}

#[test]
fn unrecognized_run_is_coalesced() {
    let output = keyword_lexer().tokenize("@@ if").unwrap();
    assert_eq!(
        output.channel("default"),
        [Token::new(
            Tok::Kw,
            "if".to_string(),
            Position::new(3, 1, 4),
            Position::new(5, 1, 6)
        )]
    );
    assert_eq!(
        output.channel("skip"),
        [Token::new(
            Tok::Ws,
            " ".to_string(),
            Position::new(2, 1, 3),
            Position::new(3, 1, 4)
        )]
    );
    assert_eq!(
        output.fail,
        [Fragment::new(
            "@@".to_string(),
            Position::new(0, 1, 1),
            Position::new(2, 1, 3)
        )]
    );
    assert_eq!(reconstruct(&output), "@@ if");
}

#[test]
fn trailing_unrecognized_run_is_flushed() {
    let output = keyword_lexer().tokenize("if @@").unwrap();
    assert_eq!(
        output.fail,
        [Fragment::new(
            "@@".to_string(),
            Position::new(3, 1, 4),
            Position::new(5, 1, 6)
        )]
    );
    assert_eq!(reconstruct(&output), "if @@");
}

fn comment_lexer() -> Lexer<Tok> {
    Lexer::new(vec![
        Terminal::literal(Tok::Open, "/*")
            .unwrap()
            .channel("comment")
            .push_mode("c"),
        Terminal::literal(Tok::Close, "*/")
            .unwrap()
            .channel("comment")
            .mode("c")
            .pop_mode(),
        Terminal::pattern(Tok::Any, r".")
            .unwrap()
            .channel("comment")
            .mode("c"),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ])
}

#[test]
fn mode_switch_routes_comment_tokens() {
    let output = comment_lexer().tokenize("a/*b*/c").unwrap();
    assert_eq!(
        output.channel("default"),
        [
            Token::new(
                Tok::Word,
                "a".to_string(),
                Position::new(0, 1, 1),
                Position::new(1, 1, 2)
            ),
            Token::new(
                Tok::Word,
                "c".to_string(),
                Position::new(6, 1, 7),
                Position::new(7, 1, 8)
            ),
        ]
    );
    assert_eq!(
        output.channel("comment"),
        [
            Token::new(
                Tok::Open,
                "/*".to_string(),
                Position::new(1, 1, 2),
                Position::new(3, 1, 4)
            ),
            Token::new(
                Tok::Any,
                "b".to_string(),
                Position::new(3, 1, 4),
                Position::new(4, 1, 5)
            ),
            Token::new(
                Tok::Close,
                "*/".to_string(),
                Position::new(4, 1, 5),
                Position::new(6, 1, 7)
            ),
        ]
    );
    assert!(output.fail.is_empty());
    assert_eq!(reconstruct(&output), "a/*b*/c");
}

#[test]
fn positions_advance_across_newlines() {
    let lexer = Lexer::new(vec![Terminal::pattern(Tok::Word, r"[a-z]+").unwrap()]);
    let output = lexer.tokenize("a\nbb").unwrap();
    assert_eq!(
        output.channel("default"),
        [
            Token::new(
                Tok::Word,
                "a".to_string(),
                Position::new(0, 1, 1),
                Position::new(1, 1, 2)
            ),
            Token::new(
                Tok::Word,
                "bb".to_string(),
                Position::new(2, 2, 1),
                Position::new(4, 2, 3)
            ),
        ]
    );
    assert_eq!(
        output.fail,
        [Fragment::new(
            "\n".to_string(),
            Position::new(1, 1, 2),
            Position::new(2, 2, 1)
        )]
    );
    assert_eq!(reconstruct(&output), "a\nbb");
}

#[test]
fn higher_priority_wins_regardless_of_declaration_order() {
    let lexer = Lexer::new(vec![
        Terminal::literal(Tok::For, "for").unwrap(),
        Terminal::literal(Tok::F, "f").unwrap().priority(5),
    ]);
    let output = lexer.tokenize("for").unwrap();
    // no longest match across terminals, the outranking "f" consumes first
    assert_eq!(output.channel("default")[0].token, Tok::F);
    assert_eq!(output.fail[0].content, "or");
}

#[test]
fn declaration_order_breaks_priority_ties() {
    let lexer = Lexer::new(vec![
        Terminal::literal(Tok::For, "for").unwrap(),
        Terminal::literal(Tok::F, "f").unwrap(),
    ]);
    let output = lexer.tokenize("for").unwrap();
    assert_eq!(output.channel("default")[0].token, Tok::For);
    assert!(output.fail.is_empty());

    let flipped = Lexer::new(vec![
        Terminal::literal(Tok::F, "f").unwrap(),
        Terminal::literal(Tok::For, "for").unwrap(),
    ]);
    let output = flipped.tokenize("for").unwrap();
    assert_eq!(output.channel("default")[0].token, Tok::F);
    assert_eq!(output.fail[0].content, "or");
}

#[test]
fn unset_mode_terminals_are_gated_off_inside_a_mode() {
    let lexer = Lexer::new(vec![
        Terminal::literal(Tok::Open, "<").unwrap().push_mode("m"),
        Terminal::literal(Tok::Close, ">")
            .unwrap()
            .mode("m")
            .pop_mode(),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ]);
    let output = lexer.tokenize("<ab>cd").unwrap();
    // inside the mode the word terminal is inactive
    assert_eq!(output.fail, [Fragment::new(
        "ab".to_string(),
        Position::new(1, 1, 2),
        Position::new(3, 1, 4)
    )]);
    let words: Vec<&str> = output
        .channel("default")
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(words, vec!["<", ">", "cd"]);
}

#[test]
fn moded_terminals_never_match_an_empty_stack() {
    let lexer = Lexer::new(vec![
        Terminal::pattern(Tok::Any, r".").unwrap().mode("m"),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ]);
    let output = lexer.tokenize("ab!").unwrap();
    assert_eq!(output.channel("default")[0].content, "ab");
    assert_eq!(output.fail[0].content, "!");
}

#[test]
fn push_then_pop_leaves_the_stack_unchanged() {
    let lexer = Lexer::new(vec![
        Terminal::literal(Tok::Any, "!")
            .unwrap()
            .push_mode("x")
            .pop_mode(),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ]);
    let output = lexer.tokenize("a!b").unwrap();
    let contents: Vec<&str> = output
        .channel("default")
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    // the unset mode terminal keeps matching after the swap
    assert_eq!(contents, vec!["a", "!", "b"]);
    assert!(output.fail.is_empty());
}

#[test]
fn pop_on_an_empty_stack_is_ignored() {
    let lexer = Lexer::new(vec![
        Terminal::literal(Tok::Any, "!").unwrap().pop_mode(),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ]);
    let output = lexer.tokenize("!ab").unwrap();
    assert_eq!(output.channel("default").len(), 2);
    assert!(output.fail.is_empty());
}

#[test]
fn declared_channels_are_present_even_when_empty() {
    let output = keyword_lexer().tokenize("if").unwrap();
    assert!(output.success.contains_key("skip"));
    assert!(output.channel("skip").is_empty());
}

#[test]
fn empty_input_yields_empty_output() {
    let output = keyword_lexer().tokenize("").unwrap();
    assert!(output.channel("default").is_empty());
    assert!(output.fail.is_empty());
}

#[test]
fn predicate_contract_violation_fails_the_tokenization() {
    let lexer = Lexer::new(vec![Terminal::predicate(Tok::Any, |_: &str, pointer| {
        Some(pointer)
    })]);
    let err = lexer.tokenize("abc").unwrap_err();
    assert_eq!(err.pointer, 0);
}

#[test]
fn predicate_terminal_consumes_input() {
    let lexer = Lexer::new(vec![
        Terminal::predicate(Tok::Num, |code: &str, pointer| {
            let len = code[pointer..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if len > 0 {
                Some(pointer + len)
            } else {
                None
            }
        }),
        Terminal::pattern(Tok::Word, r"[a-z]+").unwrap(),
    ]);
    let output = lexer.tokenize("12ab34").unwrap();
    let tokens: Vec<(Tok, &str)> = output
        .channel("default")
        .iter()
        .map(|t| (t.token, t.content.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![(Tok::Num, "12"), (Tok::Word, "ab"), (Tok::Num, "34")]
    );
}

#[test]
fn multi_byte_unrecognized_input_steps_whole_characters() {
    let lexer = Lexer::new(vec![Terminal::pattern(Tok::Word, r"[a-z]+").unwrap()]);
    let output = lexer.tokenize("aé☃b").unwrap();
    assert_eq!(output.fail[0].content, "é☃");
    assert_eq!(reconstruct(&output), "aé☃b");
}
