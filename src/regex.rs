//! Building regexes
//!
//! This module defines [`Config`] and [`Builder`], which turn a pattern into
//! either the crate's [`Backtracker`] or the linear engine from the `regex`
//! crate.

use std::{error::Error, fmt};

use tracing::debug;

use crate::backtrack::{Backtracker, bytecode::Compiler};
use crate::backtrack::bytecode::CompileError;

/// Error returned when a pattern can't be turned into an engine.
#[derive(Debug)]
pub enum BuildError {
    Parse(regex_syntax::Error),
    Compile(CompileError),
    Linear(::regex::Error),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Parse(e) => write!(f, "Regex parse error: {e}"),
            BuildError::Compile(e) => write!(f, "Compile error: {e}"),
            BuildError::Linear(e) => write!(f, "Linear engine error: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::Parse(e) => Some(e),
            BuildError::Compile(e) => Some(e),
            BuildError::Linear(e) => Some(e),
        }
    }
}

impl From<regex_syntax::Error> for BuildError {
    fn from(value: regex_syntax::Error) -> Self {
        BuildError::Parse(value)
    }
}

impl From<CompileError> for BuildError {
    fn from(value: CompileError) -> Self {
        BuildError::Compile(value)
    }
}

impl From<::regex::Error> for BuildError {
    fn from(value: ::regex::Error) -> Self {
        BuildError::Linear(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Abort a backtracking search after that many steps. Ignored by the
    /// linear engine, which never needs it.
    pub step_limit: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Builder<'s> {
    pattern: &'s str,
    config: Config,
}

impl<'s> Builder<'s> {
    pub fn new(pattern: &'s str) -> Self {
        Self {
            pattern,
            config: Config::default(),
        }
    }

    pub fn step_limit(mut self, value: Option<u64>) -> Self {
        self.config.step_limit = value;
        self
    }

    pub fn backtrack(self) -> Result<Backtracker, BuildError> {
        let hir = regex_syntax::Parser::new().parse(self.pattern)?;
        let bytecode = Compiler::compile(hir)?;
        debug!(
            pattern = self.pattern,
            instructions = bytecode.instructions.len(),
            "compiled backtracker"
        );
        Ok(Backtracker::from_bytecode(bytecode, self.config.step_limit))
    }

    pub fn linear(self) -> Result<::regex::Regex, BuildError> {
        Ok(::regex::Regex::new(self.pattern)?)
    }
}
