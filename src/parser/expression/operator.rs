#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Or,
    And,
    GreaterThan,
    LessThan,
    LessThanEqual,
    GreaterThanEqual,
    EqualEqual,
    BangEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let operator = match lexeme {
            "||" => Self::Or,
            "&&" => Self::And,
            ">" => Self::GreaterThan,
            "<" => Self::LessThan,
            "<=" => Self::LessThanEqual,
            ">=" => Self::GreaterThanEqual,
            "==" => Self::EqualEqual,
            "!=" => Self::BangEqual,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Modulo,
            _ => return None,
        };
        Some(operator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThanEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    pub fn get_precedence(&self) -> u8 {
        match self {
            Self::Or => 2,
            Self::And => 3,
            Self::GreaterThan
            | Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThanEqual
            | Self::EqualEqual
            | Self::BangEqual => 7,
            Self::Add | Self::Subtract => 10,
            Self::Multiply | Self::Divide | Self::Modulo => 20,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any operator that may appear between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Assign,
    Binary(BinaryOperator),
}

impl InfixOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "=" => Some(Self::Assign),
            _ => BinaryOperator::from_lexeme(lexeme).map(Self::Binary),
        }
    }

    pub fn get_precedence(&self) -> u8 {
        match self {
            Self::Assign => 1,
            Self::Binary(operator) => operator.get_precedence(),
        }
    }
}
