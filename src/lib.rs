#![no_std]

extern crate alloc;

pub mod error;
pub mod param;
pub mod render;
pub mod renderers;

#[cfg(test)]
pub mod tests;

pub use crate::{
    param::node::{Param, ParamKind, Pair, SimpleType},
    render::{Displayable, Term, TermList},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
