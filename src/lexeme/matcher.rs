use super::{Matcher, MatcherKind};
use crate::LexError;
use regex::Regex;

impl Matcher {
    /// Create a matcher for a fixed keyword.
    ///
    /// The keyword must not be empty; an empty keyword would match without
    /// consuming input.
    pub fn literal(keyword: &str) -> Result<Self, String> {
        if keyword.is_empty() {
            Err("Literal matcher requires a non empty keyword.".to_string())
        } else {
            Ok(Self {
                kind: MatcherKind::Literal(keyword.to_string()),
            })
        }
    }

    /// Create a matcher backed by a regular expression.
    ///
    /// The expression is compiled to match only at the offered position; a
    /// source without a leading `^` anchor is wrapped as `^(?:source)`.
    /// Given regex expression should not match an empty string.
    pub fn pattern(pattern: &str) -> Result<Self, String> {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^(?:{})", pattern)
        };
        let regexp = Regex::new(&anchored)
            .map_err(|err| format!("Pattern should be a valid regex expression.{:?}", err))?;
        if regexp.is_match("") {
            return Err(format!(
                "Regex expression '{}' should not be nullable.",
                regexp.as_str()
            ));
        }
        Ok(Self {
            kind: MatcherKind::Pattern(regexp),
        })
    }

    /// Wrap a user callback reporting the end of a match at the offered
    /// position, or [None] when there is no match.
    pub fn predicate<TF: Fn(&str, usize) -> Option<usize> + 'static>(f: TF) -> Self {
        Self {
            kind: MatcherKind::Predicate(Box::new(f)),
        }
    }

    /// Try to match at `pointer` and return the end of the consumed slice.
    ///
    /// A predicate reporting an end at or before `pointer`, or one outside
    /// the input, breaks the matcher contract and fails the running
    /// tokenization.
    pub fn find_end(&self, code: &str, pointer: usize) -> Result<Option<usize>, LexError> {
        match &self.kind {
            MatcherKind::Literal(keyword) => {
                if code[pointer..].starts_with(keyword.as_str()) {
                    Ok(Some(pointer + keyword.len()))
                } else {
                    Ok(None)
                }
            }
            MatcherKind::Pattern(regexp) => Ok(regexp
                .find(&code[pointer..])
                .map(|m| pointer + m.end())
                .filter(|end| *end > pointer)),
            MatcherKind::Predicate(f) => match f(code, pointer) {
                Some(end) if end <= pointer => Err(LexError::new(
                    pointer,
                    format!(
                        "Predicate matcher returned end {} at or before pointer {}.",
                        end, pointer
                    ),
                )),
                Some(end) if !code.is_char_boundary(end) => Err(LexError::new(
                    pointer,
                    format!(
                        "Predicate matcher returned end {} outside the input or inside a character.",
                        end
                    ),
                )),
                other => Ok(other),
            },
        }
    }
}
