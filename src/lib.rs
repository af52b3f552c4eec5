//! Measure how long a backtracking regex engine takes to reject subjects of
//! growing length, exposing catastrophic backtracking on the ambiguous
//! pattern `^(a|[ab])*$`.

pub mod backtrack;
pub mod cli;
pub mod clock;
pub mod harness;
pub mod matcher;
pub mod regex;

pub use backtrack::Backtracker;
pub use clock::{Clock, MonotonicClock};
pub use matcher::{MatchError, Matcher};
pub use crate::regex::{BuildError, Builder, Config};
