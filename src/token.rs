/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, sign already folded in when it appears in prefix
    /// position directly before the digits
    Number(f64),
    /// A binary operator
    Op(Op),
    /// A recognized function name (`sin`, `cos`, `tan`, `log`, `ln`, `sqrt`)
    Function(String),
    /// A recognized constant name (`pi`, `π`, `e`)
    Constant(String),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// The postfix `!` operator
    Factorial,
}

/// Allowed binary operators in expressions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Plus,
    Minus,
    Mul,
    Div,
    Exp,
}

/// Binding precedence of a prefix `-` applied to a non-literal operand.
/// It sits between the multiplicative operators and `^`, so `-pi^2` is
/// `-(pi^2)` while `-2*3` is `(-2)*3`.
pub const NEG_PRECEDENCE: u8 = 3;

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first. Precedence 3 is reserved for the unary minus.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }
}
