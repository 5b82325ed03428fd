//! The param node tree, representing rule expressions.
//!
//! A [Param](node::Param) is one node of an expression tree: a value leaf, a unary node, or a
//! binary node holding a [Pair](node::Pair) of operands. Every node can classify itself (a fixed
//! node-kind tag and a coarse value-kind tag) and [render](crate::render) itself into a flat term
//! list.
//!
//! Trees are built either directly through the constructors on [Param](node::Param), or from text
//! with [Param::parse](node::Param::parse).

pub mod node;
mod parser;
