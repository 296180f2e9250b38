use compact_str::CompactString;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

/// The hashmap for keywords
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("if", Keyword::If);
    map.insert("then", Keyword::Then);
    map.insert("else", Keyword::Else);
    map.insert("def", Keyword::Def);
    map.insert("true", Keyword::True);
    map.insert("false", Keyword::False);
    map
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    Def,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Def => "def",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Variable,
    Number,
    String,
    Operator,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "Keyword"),
            TokenKind::Variable => write!(f, "Variable"),
            TokenKind::Number => write!(f, "Number"),
            TokenKind::String => write!(f, "String"),
            TokenKind::Operator => write!(f, "Operator"),
            TokenKind::Punctuation => write!(f, "Punctuation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Keyword(Keyword),
    Variable(CompactString),
    Number(f64),
    String(CompactString),
    Operator(CompactString),
    Punctuation(char),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Variable(_) => TokenKind::Variable,
            Token::Number(_) => TokenKind::Number,
            Token::String(_) => TokenKind::String,
            Token::Operator(_) => TokenKind::Operator,
            Token::Punctuation(_) => TokenKind::Punctuation,
        }
    }

    pub fn is_punctuation(&self, expected: char) -> bool {
        matches!(self, Token::Punctuation(c) if *c == expected)
    }

    pub fn is_keyword(&self, expected: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == expected)
    }

    /// Renders the token as a `{"type": ..., "value": ...}` object for diagnostics.
    pub fn to_json(&self) -> String {
        let value = match self {
            Token::Number(v) => v.to_string(),
            Token::Keyword(k) => json_string(k.as_str()),
            Token::Variable(v) | Token::String(v) | Token::Operator(v) => json_string(v),
            Token::Punctuation(c) => json_string(c.encode_utf8(&mut [0; 4])),
        };
        format!("{{\"type\":\"{}\",\"value\":{value}}}", self.kind())
    }
}

fn json_string(value: &str) -> String {
    let mut buffer = String::with_capacity(value.len() + 2);
    buffer.push('"');
    for c in value.chars() {
        match c {
            '"' => buffer.push_str("\\\""),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push_str("\\n"),
            '\r' => buffer.push_str("\\r"),
            '\t' => buffer.push_str("\\t"),
            c if (c as u32) < 0x20 => buffer.push_str(&format!("\\u{:04x}", c as u32)),
            c => buffer.push(c),
        }
    }
    buffer.push('"');
    buffer
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "{k}"),
            Token::Variable(v) | Token::Operator(v) => write!(f, "{v}"),
            Token::Number(v) => write!(f, "{v}"),
            Token::String(v) => write!(f, "{v:?}"),
            Token::Punctuation(c) => write!(f, "{c}"),
        }
    }
}
