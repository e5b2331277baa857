use super::{Matcher, Terminal, DEFAULT_CHANNEL};
use crate::Log;
use once_cell::unsync::OnceCell;

impl<TToken> Terminal<TToken> {
    /// Create a terminal from an already built [Matcher].
    pub fn new(token: TToken, matcher: Matcher) -> Self {
        Self {
            token,
            matcher,
            channel: DEFAULT_CHANNEL,
            priority: 0,
            mode: None,
            push_mode: None,
            pop_mode: false,
            log: OnceCell::new(),
        }
    }

    /// Create a terminal matching a fixed keyword.
    pub fn literal(token: TToken, keyword: &str) -> Result<Self, String> {
        Ok(Self::new(token, Matcher::literal(keyword)?))
    }

    /// Create a terminal matching a regular expression anchored at the cursor.
    pub fn pattern(token: TToken, pattern: &str) -> Result<Self, String> {
        Ok(Self::new(token, Matcher::pattern(pattern)?))
    }

    /// Create a terminal matching through a user callback.
    pub fn predicate<TF: Fn(&str, usize) -> Option<usize> + 'static>(token: TToken, f: TF) -> Self {
        Self::new(token, Matcher::predicate(f))
    }

    /// Assign the output channel the matched tokens are reported on.
    pub fn channel(mut self, channel: &'static str) -> Self {
        self.channel = channel;
        self
    }

    /// Assign the selection priority. Higher priority terminals are tried
    /// first at every position.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Gate the terminal to be considered only while `mode` is the top of the
    /// mode stack. A terminal without a mode is considered only while the
    /// stack is empty.
    pub fn mode(mut self, mode: &'static str) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Push `mode` onto the mode stack when the terminal matches.
    pub fn push_mode(mut self, mode: &'static str) -> Self {
        self.push_mode = Some(mode);
        self
    }

    /// Pop the mode stack when the terminal matches. A pop on an empty stack
    /// is ignored.
    pub fn pop_mode(mut self) -> Self {
        self.pop_mode = true;
        self
    }

    /// Set a log label to debug the terminal.
    /// Based on the level of the [Log], the lexer will report match results.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }
}
