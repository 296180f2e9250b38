use super::error::{LexicalError, LexicalErrorKind, Location};

/// Position-aware view over the raw source text.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    pub fn get_source(&self) -> &'src str {
        self.source
    }

    /// The current character or `None` once the input is exhausted.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.offset..)?.chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    pub fn location(&self) -> Location {
        Location {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    pub fn fail(&self, kind: LexicalErrorKind) -> LexicalError {
        LexicalError {
            kind,
            location: self.location(),
        }
    }
}
