//! A backtracking regex engine.
//!
//! Patterns are parsed by `regex-syntax`, compiled by [`bytecode::Compiler`]
//! and run by [`vm::Backtracker`]. Unlike the linear engines of the `regex`
//! crate, this one explores alternatives depth-first without memoization,
//! so its running time blows up on ambiguous patterns.

pub mod bytecode;
pub mod vm;

pub use vm::{Backtracker, SearchStats};
