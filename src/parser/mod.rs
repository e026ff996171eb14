//! Parser for assistant replies written in lightweight markup

pub mod ast;
mod grammar;
pub mod inline;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
