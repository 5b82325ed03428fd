//! Display rendering for param trees.
//!
//! A param tree is flattened into an ordered list of [Term]s, each an atomic renderable unit.
//! Rendering works by *insertion*: a node inserts its terms into a caller-owned [TermList] at a
//! given position, shifting any later elements, and hands back the next free position. This lets
//! a node render into the middle of a list another component is already using, which is how an
//! editor splices a subexpression into an existing display line.

use alloc::{format, string::{String, ToString}, vec::Vec};
use rust_decimal::Decimal;

/// An atomic display token produced by rendering a param tree.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Term {
    /// A fixed piece of text, such as an operator separator or a parenthesis.
    Literal(&'static str),

    /// A number value.
    Number(Decimal),

    /// A variable, denoted by a particular character.
    Variable(char),

    /// A text value. Rendered surrounded by double quotes.
    Text(String),
}

impl Term {
    /// The text form of this term, as drawn by a renderer.
    pub fn text(&self) -> String {
        match self {
            Term::Literal(s) => String::from(*s),
            Term::Number(n) => n.to_string(),
            Term::Variable(v) => v.to_string(),
            Term::Text(s) => format!("\"{}\"", s),
        }
    }
}

/// An ordered, mutable sequence of [Term]s.
///
/// The list is owned by whoever is driving the render; nodes displaying into it insert terms but
/// never remove or overwrite them.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct TermList {
    pub items: Vec<Term>,
}

impl TermList {
    pub fn new() -> TermList {
        TermList { items: Vec::new() }
    }

    /// Inserts a term at the given index, shifting all terms after it towards the end.
    ///
    /// Panics if `index` is greater than the list's length, per [Vec::insert]'s contract.
    pub fn insert(&mut self, index: usize, term: Term) {
        self.items.insert(index, term);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Something which can be rendered into a [TermList].
pub trait Displayable {
    /// Inserts this item's terms into `terms`, starting at index `at`, and returns the next free
    /// position after them. The returned position is always the caller's next write position.
    fn display(&self, terms: &mut TermList, at: usize) -> usize;
}

/// Something which can draw [Term]s, one at a time, onto some output.
pub trait Renderer {
    /// Draws a single term.
    fn draw(&mut self, term: &Term);

    /// Displays `item` into a fresh [TermList] and draws every term in order.
    fn draw_all(&mut self, item: &impl Displayable) {
        let mut terms = TermList::new();
        item.display(&mut terms, 0);

        for term in &terms.items {
            self.draw(term);
        }
    }
}
