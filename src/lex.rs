use crate::{Fragment, LexOutput, Position, Token};
use std::fmt::{Debug, Display, Formatter};

impl<TToken> Token<TToken> {
    pub fn new(token: TToken, content: String, start: Position, end: Position) -> Self {
        Self {
            token,
            content,
            start,
            end,
        }
    }
}

impl<TToken: Debug> Display for Token<TToken> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("")
            .field(&self.token)
            .field(&self.content)
            .field(&self.start.index)
            .field(&self.end.index)
            .finish()
    }
}

impl Fragment {
    pub fn new(content: String, start: Position, end: Position) -> Self {
        Self {
            content,
            start,
            end,
        }
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("")
            .field(&self.content)
            .field(&self.start.index)
            .field(&self.end.index)
            .finish()
    }
}

impl<TToken> LexOutput<TToken> {
    /// Tokens captured on `channel`, in input order.
    ///
    /// An unknown channel name yields an empty slice.
    pub fn channel(&self, channel: &str) -> &[Token<TToken>] {
        self.success
            .get(channel)
            .map_or(&[], |tokens| tokens.as_slice())
    }
}
