use alloc::fmt;

pub trait Error : alloc::fmt::Display + alloc::fmt::Debug {}

/// An error which occurred while building a param tree.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum NodeError {
    /// There were leftover characters after a complete param was parsed.
    UnexpectedTokensAtEnd,

    /// An operand was expected, but the input ended instead.
    ExpectedOperand,

    /// A parenthesised group was opened but never closed.
    UnmatchedParenthesis,

    /// A text literal was opened but never closed.
    UnterminatedText,

    /// A number literal was too large to represent.
    Overflow,

    /// A character which cannot begin an operand was found.
    UnexpectedCharacter(char),
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeError::UnexpectedTokensAtEnd => write!(f, "unexpected characters at end of input"),
            NodeError::ExpectedOperand => write!(f, "expected an operand"),
            NodeError::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
            NodeError::UnterminatedText => write!(f, "unterminated text literal"),
            NodeError::Overflow => write!(f, "number literal too large"),
            NodeError::UnexpectedCharacter(c) => write!(f, "unexpected character '{}'", c),
        }
    }
}
impl Error for NodeError {}
