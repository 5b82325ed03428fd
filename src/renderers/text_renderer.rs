use alloc::string::String;

use crate::render::{Renderer, Term};

/// A renderer which concatenates the text of every term into a single string.
#[derive(Default, Clone, Debug)]
pub struct TextRenderer {
    pub output: String,
}

impl Renderer for TextRenderer {
    fn draw(&mut self, term: &Term) {
        self.output.push_str(&term.text());
    }
}
