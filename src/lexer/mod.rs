mod cursor;
mod error;
pub mod formatter;
mod token;

pub use cursor::Cursor;
pub use error::{LexicalError, LexicalErrorKind, Location};
pub use token::{Keyword, Token, TokenKind, KEYWORD_HASHMAP};

use compact_str::CompactString;

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

fn is_punctuation(c: char) -> bool {
    ",;(){}[]".contains(c)
}

fn is_operator(c: char) -> bool {
    "+-*/=%|&<>!".contains(c)
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '?' | '!')
}

/// Single token lookahead stream over a [`Cursor`].
#[derive(Debug)]
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    lookahead: Option<Token>,
    halted: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            lookahead: None,
            halted: false,
        }
    }

    pub fn get_source(&self) -> &'src str {
        self.cursor.get_source()
    }

    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Returns the next token without consuming it. `None` marks the end of input.
    pub fn peek(&mut self) -> Result<Option<&Token>, LexicalError> {
        if self.lookahead.is_none() {
            self.lookahead = self.read_token()?;
        }
        Ok(self.lookahead.as_ref())
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexicalError> {
        match self.lookahead.take() {
            Some(token) => Ok(Some(token)),
            None => self.read_token(),
        }
    }

    pub fn is_at_end(&mut self) -> Result<bool, LexicalError> {
        Ok(self.peek()?.is_none())
    }
}

impl<'src> Lexer<'src> {
    fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> CompactString {
        let mut lexeme = CompactString::default();
        while let Some(c) = self.cursor.peek() {
            if !predicate(c) {
                break;
            }
            lexeme.push(c);
            self.cursor.advance();
        }
        lexeme
    }

    fn read_token(&mut self) -> Result<Option<Token>, LexicalError> {
        loop {
            self.read_while(is_whitespace);
            let Some(c) = self.cursor.peek() else {
                return Ok(None);
            };

            let token = match c {
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '"' => self.lex_string(),
                '0'..='9' => self.lex_number()?,
                c if is_identifier_start(c) => self.lex_identifier(),
                c if is_punctuation(c) => {
                    self.cursor.advance();
                    Token::Punctuation(c)
                }
                c if is_operator(c) => Token::Operator(self.read_while(is_operator)),
                c => return Err(self.cursor.fail(LexicalErrorKind::Unexpected(c))),
            };
            return Ok(Some(token));
        }
    }

    fn skip_comment(&mut self) {
        self.read_while(|c| c != '\n');
        self.cursor.advance();
    }

    // Unterminated strings run to the end of the input.
    fn lex_string(&mut self) -> Token {
        self.cursor.advance();
        let mut value = CompactString::default();
        let mut escaped = false;
        while let Some(c) = self.cursor.advance() {
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                break;
            } else {
                value.push(c);
            }
        }
        Token::String(value)
    }

    fn lex_number(&mut self) -> Result<Token, LexicalError> {
        let mut seen_dot = false;
        let lexeme = self.read_while(|c| {
            if c == '.' {
                if seen_dot {
                    return false;
                }
                seen_dot = true;
                return true;
            }
            c.is_ascii_digit()
        });
        lexeme
            .parse()
            .map(Token::Number)
            .map_err(|_| self.cursor.fail(LexicalErrorKind::InvalidNumber(lexeme.to_string())))
    }

    fn lex_identifier(&mut self) -> Token {
        let lexeme = self.read_while(is_identifier);
        match KEYWORD_HASHMAP.get(lexeme.as_str()) {
            Some(keyword) => Token::Keyword(*keyword),
            None => Token::Variable(lexeme),
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token, LexicalError>;

    // Stops after the first error since the cursor does not move past it.
    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let item = self.next_token().transpose();
        if matches!(item, Some(Err(_))) {
            self.halted = true;
        }
        item
    }
}
