use alloc::{boxed::Box, string::String};
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::error::NodeError;

use super::node::Param;

/// Converts a character sequence into a single param tree. Used to implement [Param::parse].
///
/// Each `parse_levelN` method handles one precedence level, loosest binding first:
/// `||`, then `&&`, then comparisons, then `+`/`-`, then `*`/`/`, then unary operators and
/// operands. Binary operators at the same level associate to the left.
pub struct Parser<'a> {
    chars: &'a [char],
    index: usize,
}

impl<'a> Parser<'a> {
    pub fn new(chars: &'a [char]) -> Parser<'a> {
        Parser { chars, index: 0 }
    }

    pub fn parse(&mut self) -> Result<Param, NodeError> {
        let result = self.parse_level1()?;

        // Leftover characters is an error
        self.skip_whitespace();
        if self.index < self.chars.len() {
            Err(NodeError::UnexpectedTokensAtEnd)
        } else {
            Ok(result)
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() { break; }
            self.advance();
        }
    }

    /// If the upcoming characters are exactly `operator`, consumes them and returns true.
    /// Otherwise consumes nothing and returns false.
    fn accept(&mut self, operator: &str) -> bool {
        let mut end = self.index;
        for c in operator.chars() {
            if self.chars.get(end) != Some(&c) {
                return false;
            }
            end += 1;
        }

        self.index = end;
        true
    }

    fn parse_level1(&mut self) -> Result<Param, NodeError> {
        let mut out = self.parse_level2()?;

        loop {
            self.skip_whitespace();
            if self.accept("||") {
                out = Param::or(out, self.parse_level2()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level2(&mut self) -> Result<Param, NodeError> {
        let mut out = self.parse_level3()?;

        loop {
            self.skip_whitespace();
            if self.accept("&&") {
                out = Param::and(out, self.parse_level3()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level3(&mut self) -> Result<Param, NodeError> {
        let mut out = self.parse_level4()?;

        loop {
            self.skip_whitespace();

            // Two-character operators must be tried before their one-character prefixes
            if self.accept("==") {
                out = Param::equal(out, self.parse_level4()?);
            } else if self.accept("!=") {
                out = Param::not_equal(out, self.parse_level4()?);
            } else if self.accept("<=") {
                out = Param::less_or_equal(out, self.parse_level4()?);
            } else if self.accept(">=") {
                out = Param::greater_or_equal(out, self.parse_level4()?);
            } else if self.accept("<") {
                out = Param::less(out, self.parse_level4()?);
            } else if self.accept(">") {
                out = Param::greater(out, self.parse_level4()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level4(&mut self) -> Result<Param, NodeError> {
        let mut out = self.parse_level5()?;

        loop {
            self.skip_whitespace();
            if self.accept("+") {
                out = Param::add(out, self.parse_level5()?);
            } else if self.accept("-") {
                out = Param::subtract(out, self.parse_level5()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level5(&mut self) -> Result<Param, NodeError> {
        let mut out = self.parse_level6()?;

        loop {
            self.skip_whitespace();
            if self.accept("*") {
                out = Param::multiply(out, self.parse_level6()?);
            } else if self.accept("/") {
                out = Param::divide(out, self.parse_level6()?);
            } else {
                break;
            }
        }

        Ok(out)
    }

    fn parse_level6(&mut self) -> Result<Param, NodeError> {
        self.skip_whitespace();

        if self.accept("!") {
            return Ok(Param::Not(Box::new(self.parse_level6()?)));
        }
        if self.accept("-") {
            return Ok(Param::Negate(Box::new(self.parse_level6()?)));
        }

        match self.current() {
            Some('(') => {
                self.advance();
                let inner = self.parse_level1()?;

                self.skip_whitespace();
                if !self.accept(")") {
                    return Err(NodeError::UnmatchedParenthesis);
                }

                Ok(Param::Parentheses(Box::new(inner)))
            }

            Some('"') => {
                self.advance();

                let mut text = String::new();
                loop {
                    match self.current() {
                        Some('"') => {
                            self.advance();
                            break;
                        }
                        Some(c) => {
                            text.push(c);
                            self.advance();
                        }
                        None => return Err(NodeError::UnterminatedText),
                    }
                }

                Ok(Param::Text(text))
            }

            Some(c) if c.is_ascii_digit() => self.parse_number(),

            Some(c) if c.is_alphabetic() => {
                self.advance();
                Ok(Param::Variable(c))
            }

            Some(c) => Err(NodeError::UnexpectedCharacter(c)),
            None => Err(NodeError::ExpectedOperand),
        }
    }

    fn parse_number(&mut self) -> Result<Param, NodeError> {
        let ten = Decimal::from(10u8);
        let mut number = Decimal::zero();

        while let Some(d) = self.current().and_then(|c| c.to_digit(10)) {
            number = number.checked_mul(ten).ok_or(NodeError::Overflow)?;
            number = number.checked_add(Decimal::from(d)).ok_or(NodeError::Overflow)?;
            self.advance();
        }

        // A decimal part is optional, and may be empty - we accept "3."
        if let Some('.') = self.current() {
            self.advance();

            let mut scale = 0u32;
            while let Some(d) = self.current().and_then(|c| c.to_digit(10)) {
                number = number.checked_mul(ten).ok_or(NodeError::Overflow)?;
                number = number.checked_add(Decimal::from(d)).ok_or(NodeError::Overflow)?;
                scale += 1;
                self.advance();
            }

            number.set_scale(number.scale() + scale).map_err(|_| NodeError::Overflow)?;
        }

        Ok(Param::Number(number))
    }
}
