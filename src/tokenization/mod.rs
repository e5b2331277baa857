use crate::lexeme::Terminal;
use crate::util::PositionTracker;
use crate::{Fragment, LexError, LexOutput, Lexer, Log, TerminalSet, Token};
use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::fmt::Debug;

#[cfg(test)]
mod __tests__;

impl<TToken> TerminalSet<TToken> {
    /// Build a registry from declared terminals.
    ///
    /// Terminals are reordered by priority, descending; declaration order is
    /// preserved among equal priorities. The distinct channels are collected
    /// here once, in declaration order.
    pub fn new(mut terminals: Vec<Terminal<TToken>>) -> Self {
        let mut channels: Vec<&'static str> = Vec::new();
        for terminal in &terminals {
            if !channels.contains(&terminal.channel) {
                channels.push(terminal.channel);
            }
        }
        // sort_by is stable, equal priorities keep declaration order
        terminals.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self {
            terminals,
            channels,
        }
    }

    /// Terminals in selection order.
    pub fn terminals(&self) -> &[Terminal<TToken>] {
        &self.terminals
    }

    /// The distinct output channels, in declaration order.
    pub fn channels(&self) -> &[&'static str] {
        &self.channels
    }
}

impl<TToken> Lexer<TToken> {
    /// Create a lexer from declared terminals.
    pub fn new(terminals: Vec<Terminal<TToken>>) -> Self {
        Self::from_set(TerminalSet::new(terminals))
    }

    /// Create a lexer from an already built [TerminalSet].
    pub fn from_set(terminals: TerminalSet<TToken>) -> Self {
        Self {
            terminals,
            log: OnceCell::new(),
        }
    }

    /// The registry the lexer selects terminals from.
    pub fn terminal_set(&self) -> &TerminalSet<TToken> {
        &self.terminals
    }

    /// Set a log label to debug the lexer.
    /// Based on the level of the [Log], the lexer will report mode switches,
    /// matched tokens and failure runs.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }
}

impl<TToken: Copy + Debug> Lexer<TToken> {
    /// Split `code` into channeled tokens and failure fragments.
    ///
    /// At every position the terminals are consulted in selection order,
    /// skipping the ones gated behind a different mode, and the first
    /// successful match wins. Input nobody recognizes is stepped over one
    /// character at a time and coalesced into failure [Fragment]s.
    ///
    /// The only [Err] outcome is a matcher breaking its advance contract;
    /// unrecognized input is reported through [LexOutput::fail] instead.
    pub fn tokenize(&self, code: &str) -> Result<LexOutput<TToken>, LexError> {
        let mut success: HashMap<&'static str, Vec<Token<TToken>>> = self
            .terminals
            .channels()
            .iter()
            .map(|channel| (*channel, Vec::new()))
            .collect();
        let mut fail: Vec<Fragment> = Vec::new();
        let mut tracker = PositionTracker::new();
        let mut mode_stack: Vec<&'static str> = Vec::new();
        let mut pointer: usize = 0;
        let mut error_start: Option<usize> = None;

        #[cfg(debug_assertions)]
        let debug = self.log.get().map_or(Log::None, |s| *s);

        while pointer < code.len() {
            let current_mode = mode_stack.last().copied();
            let mut matched: Option<(&Terminal<TToken>, usize)> = None;
            for terminal in self.terminals.terminals() {
                if terminal.mode != current_mode {
                    continue;
                }
                if let Some(end) = terminal.matcher.find_end(code, pointer)? {
                    matched = Some((terminal, end));
                    break;
                }
            }
            match matched {
                Some((terminal, end)) => {
                    if let Some(start) = error_start.take() {
                        let content = &code[start..pointer];
                        let (from, to) = tracker.advance(content);
                        #[cfg(debug_assertions)]
                        if debug.order() >= Log::Default(()).order() {
                            println!("[{}; Unmatched]: {:?} at {}", debug, content, from);
                        }
                        fail.push(Fragment::new(content.to_string(), from, to));
                    }

                    if let Some(mode) = terminal.push_mode {
                        mode_stack.push(mode);
                        #[cfg(debug_assertions)]
                        if debug.order() >= Log::Default(()).order() {
                            println!("[{}; Mode]: pushed '{}' at {}", debug, mode, pointer);
                        }
                    }
                    if terminal.pop_mode {
                        // a pop on an empty stack is ignored
                        let _popped = mode_stack.pop();
                        #[cfg(debug_assertions)]
                        if let Some(popped) = _popped {
                            if debug.order() >= Log::Default(()).order() {
                                println!("[{}; Mode]: popped '{}' at {}", debug, popped, pointer);
                            }
                        }
                    }

                    let content = &code[pointer..end];
                    let (from, to) = tracker.advance(content);
                    let lex = Token::new(terminal.token, content.to_string(), from, to);

                    #[cfg(debug_assertions)]
                    {
                        if let Some(label) = terminal.log.get() {
                            if label.order() >= Log::Success(()).order() {
                                println!(
                                    "[{}; TerminalSuccess]: token: {:?} from {} to {}",
                                    label, lex.token, lex.start, lex.end
                                );
                            }
                        }
                        if debug.order() >= Log::Success(()).order() {
                            println!("[{}; LexSuccess]: {}", debug, lex);
                        }
                    }

                    match success.get_mut(terminal.channel) {
                        Some(bucket) => bucket.push(lex),
                        None => panic!("Channel '{}' is not registered.", terminal.channel),
                    }
                    pointer = end;
                }
                None => {
                    if error_start.is_none() {
                        error_start = Some(pointer);
                    }
                    let step = code[pointer..].chars().next().map_or(1, |c| c.len_utf8());
                    pointer += step;
                }
            }
        }

        if let Some(start) = error_start {
            let content = &code[start..];
            let (from, to) = tracker.advance(content);
            #[cfg(debug_assertions)]
            if debug.order() >= Log::Default(()).order() {
                println!("[{}; Unmatched]: {:?} at {}", debug, content, from);
            }
            fail.push(Fragment::new(content.to_string(), from, to));
        }

        Ok(LexOutput { success, fail })
    }
}
