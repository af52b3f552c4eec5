//! Command line options. Running without any flag reproduces the reference
//! table; the pattern and the measured sizes are fixed.

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Depth-first backtracking, exponential on ambiguous patterns
    Backtrack,
    /// The `regex` crate, linear in the subject length
    Linear,
}

#[derive(Debug, Parser)]
#[command(
    name = "blowup",
    about = "Time a regex match on growing worst-case subjects",
    version
)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Engine::Backtrack)]
    pub engine: Engine,

    /// Abort a backtracking search after that many steps
    #[arg(long)]
    pub step_limit: Option<u64>,
}
