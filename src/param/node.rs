//! The definition of the param tree itself.

use alloc::{boxed::Box, string::String, vec::Vec};
use rust_decimal::Decimal;

use crate::error::NodeError;
use crate::render::{Displayable, Term, TermList};

use super::parser::Parser;

/// Two operands of a binary param node.
///
/// Both operands are owned exclusively by the pair and are present for its entire lifetime; a
/// binary node can never be in a half-built state. No compatibility checking is performed between
/// the operands' kinds - whoever builds the tree (usually the parser) is responsible for that.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Pair {
    pub left: Box<Param>,
    pub right: Box<Param>,
}

impl Pair {
    pub fn new(left: Param, right: Param) -> Pair {
        Pair {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A node in a rule expression tree.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Param {
    /// A number value.
    Number(Decimal),

    /// A variable, denoted by a particular character.
    Variable(char),

    /// A text value.
    Text(String),

    /// Arithmetic negation of the inner node.
    Negate(Box<Param>),

    /// Logical negation of the inner node.
    Not(Box<Param>),

    /// A parenthesised group around the inner node.
    Parentheses(Box<Param>),

    Add(Pair),
    Subtract(Pair),
    Multiply(Pair),
    Divide(Pair),

    Equal(Pair),
    NotEqual(Pair),
    Less(Pair),
    LessOrEqual(Pair),
    Greater(Pair),
    GreaterOrEqual(Pair),

    And(Pair),
    Or(Pair),
}

/// A fixed tag identifying which variant a [Param] is, independent of its operands.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ParamKind {
    Number,
    Variable,
    Text,
    Negate,
    Not,
    Parentheses,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    And,
    Or,
}

/// A coarse classification of the kind of value a [Param] stands for.
///
/// Comparisons and logical operators classify as [Number](SimpleType::Number) rather than a
/// distinct boolean category; the type system treats truth values as part of the numeric family.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum SimpleType {
    Number,
    Text,
}

impl Param {
    /// Parses `source` into a param tree.
    pub fn parse(source: &str) -> Result<Param, NodeError> {
        let chars = source.chars().collect::<Vec<_>>();
        Parser::new(&chars).parse()
    }

    pub fn add(left: Param, right: Param) -> Param { Param::Add(Pair::new(left, right)) }
    pub fn subtract(left: Param, right: Param) -> Param { Param::Subtract(Pair::new(left, right)) }
    pub fn multiply(left: Param, right: Param) -> Param { Param::Multiply(Pair::new(left, right)) }
    pub fn divide(left: Param, right: Param) -> Param { Param::Divide(Pair::new(left, right)) }
    pub fn equal(left: Param, right: Param) -> Param { Param::Equal(Pair::new(left, right)) }
    pub fn not_equal(left: Param, right: Param) -> Param { Param::NotEqual(Pair::new(left, right)) }
    pub fn less(left: Param, right: Param) -> Param { Param::Less(Pair::new(left, right)) }
    pub fn less_or_equal(left: Param, right: Param) -> Param { Param::LessOrEqual(Pair::new(left, right)) }
    pub fn greater(left: Param, right: Param) -> Param { Param::Greater(Pair::new(left, right)) }
    pub fn greater_or_equal(left: Param, right: Param) -> Param { Param::GreaterOrEqual(Pair::new(left, right)) }
    pub fn and(left: Param, right: Param) -> Param { Param::And(Pair::new(left, right)) }
    pub fn or(left: Param, right: Param) -> Param { Param::Or(Pair::new(left, right)) }

    /// Returns a clone of this node wrapped in `Parentheses`.
    pub fn in_parentheses(&self) -> Param {
        Param::Parentheses(Box::new(self.clone()))
    }

    /// The node-kind tag for this node. Fixed per variant, regardless of any operands.
    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Number(_) => ParamKind::Number,
            Param::Variable(_) => ParamKind::Variable,
            Param::Text(_) => ParamKind::Text,
            Param::Negate(_) => ParamKind::Negate,
            Param::Not(_) => ParamKind::Not,
            Param::Parentheses(_) => ParamKind::Parentheses,
            Param::Add(_) => ParamKind::Add,
            Param::Subtract(_) => ParamKind::Subtract,
            Param::Multiply(_) => ParamKind::Multiply,
            Param::Divide(_) => ParamKind::Divide,
            Param::Equal(_) => ParamKind::Equal,
            Param::NotEqual(_) => ParamKind::NotEqual,
            Param::Less(_) => ParamKind::Less,
            Param::LessOrEqual(_) => ParamKind::LessOrEqual,
            Param::Greater(_) => ParamKind::Greater,
            Param::GreaterOrEqual(_) => ParamKind::GreaterOrEqual,
            Param::And(_) => ParamKind::And,
            Param::Or(_) => ParamKind::Or,
        }
    }

    /// The simple type of the value this node stands for.
    ///
    /// Everything except text is in the numeric family, including comparisons and logical
    /// operators. Parentheses are transparent and report their inner node's simple type.
    pub fn simple_type(&self) -> SimpleType {
        match self {
            Param::Text(_) => SimpleType::Text,
            Param::Parentheses(inner) => inner.simple_type(),
            _ => SimpleType::Number,
        }
    }

    /// The fixed separator text rendered between the operands of a binary node, or `None` if this
    /// node is not binary.
    pub fn operator_text(&self) -> Option<&'static str> {
        match self {
            Param::Add(_) => Some(" + "),
            Param::Subtract(_) => Some(" - "),
            Param::Multiply(_) => Some(" * "),
            Param::Divide(_) => Some(" / "),
            Param::Equal(_) => Some(" == "),
            Param::NotEqual(_) => Some(" != "),
            Param::Less(_) => Some(" < "),
            Param::LessOrEqual(_) => Some(" <= "),
            Param::Greater(_) => Some(" > "),
            Param::GreaterOrEqual(_) => Some(" >= "),
            Param::And(_) => Some(" && "),
            Param::Or(_) => Some(" || "),
            _ => None,
        }
    }

    /// The operand pair of a binary node, or `None` if this node is not binary.
    pub fn pair(&self) -> Option<&Pair> {
        match self {
            Param::Add(pair) | Param::Subtract(pair)
            | Param::Multiply(pair) | Param::Divide(pair)
            | Param::Equal(pair) | Param::NotEqual(pair)
            | Param::Less(pair) | Param::LessOrEqual(pair)
            | Param::Greater(pair) | Param::GreaterOrEqual(pair)
            | Param::And(pair) | Param::Or(pair) => Some(pair),

            _ => None,
        }
    }
}

/// Displays a binary node: the left operand, then one `separator` term at the position the left
/// operand returned, then the right operand after the separator.
fn display_pair(pair: &Pair, separator: &'static str, terms: &mut TermList, at: usize) -> usize {
    let i = pair.left.display(terms, at);
    terms.insert(i, Term::Literal(separator));
    pair.right.display(terms, i + 1)
}

impl Displayable for Param {
    fn display(&self, terms: &mut TermList, at: usize) -> usize {
        match self {
            // Leaves insert exactly one term
            Param::Number(n) => {
                terms.insert(at, Term::Number(*n));
                at + 1
            }
            Param::Variable(v) => {
                terms.insert(at, Term::Variable(*v));
                at + 1
            }
            Param::Text(s) => {
                terms.insert(at, Term::Text(s.clone()));
                at + 1
            }

            Param::Negate(inner) => {
                terms.insert(at, Term::Literal("-"));
                inner.display(terms, at + 1)
            }
            Param::Not(inner) => {
                terms.insert(at, Term::Literal("!"));
                inner.display(terms, at + 1)
            }

            Param::Parentheses(inner) => {
                terms.insert(at, Term::Literal("("));
                let i = inner.display(terms, at + 1);
                terms.insert(i, Term::Literal(")"));
                i + 1
            }

            Param::Add(pair) => display_pair(pair, " + ", terms, at),
            Param::Subtract(pair) => display_pair(pair, " - ", terms, at),
            Param::Multiply(pair) => display_pair(pair, " * ", terms, at),
            Param::Divide(pair) => display_pair(pair, " / ", terms, at),
            Param::Equal(pair) => display_pair(pair, " == ", terms, at),
            Param::NotEqual(pair) => display_pair(pair, " != ", terms, at),
            Param::Less(pair) => display_pair(pair, " < ", terms, at),
            Param::LessOrEqual(pair) => display_pair(pair, " <= ", terms, at),
            Param::Greater(pair) => display_pair(pair, " > ", terms, at),
            Param::GreaterOrEqual(pair) => display_pair(pair, " >= ", terms, at),
            Param::And(pair) => display_pair(pair, " && ", terms, at),
            Param::Or(pair) => display_pair(pair, " || ", terms, at),
        }
    }
}
