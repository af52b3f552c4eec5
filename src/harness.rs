//! Timing harness
//!
//! Builds worst-case subjects, times a single match on each of them and
//! prints the results as a markdown table:
//!
//! ```text
//! | String Length | Execution Time |
//! |--------------:|---------------:|
//! |             0 |           0.00 |
//! ```

use std::{error, fmt, io, ops::Range};

use tracing::{debug, info, trace};

use crate::{
    clock::Clock,
    matcher::{MatchError, Matcher},
};

/// Ambiguous pattern: both alternatives accept the filler.
pub const PATTERN: &str = "^(a|[ab])*$";
/// Character repeated to build the ambiguous run.
pub const FILLER: char = 'a';
/// Character neither alternative accepts, so every probe fails to match
/// only after all the ways of splitting the run have been tried.
pub const TERMINATOR: char = 'c';
/// Subject lengths measured by default.
pub const DEFAULT_SIZES: Range<usize> = 0..50;

pub const HEADER: &str = "| String Length | Execution Time |";
pub const SEPARATOR: &str = "|--------------:|---------------:|";

#[derive(Debug)]
pub enum Error {
    Match(MatchError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Match(e) => write!(f, "Match failed: {e}"),
            Error::Io(e) => write!(f, "Could not write table: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Match(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<MatchError> for Error {
    fn from(value: MatchError) -> Self {
        Error::Match(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

/// `n` fillers followed by the terminator.
pub fn probe_string(n: usize) -> String {
    let mut probe = String::with_capacity(n + TERMINATOR.len_utf8());
    probe.extend(std::iter::repeat_n(FILLER, n));
    probe.push(TERMINATOR);
    probe
}

/// Time a single match of `matcher` against the probe of size `n`, in
/// seconds. Only the match itself is measured.
pub fn time_probe<M, C>(matcher: &M, clock: &C, n: usize) -> Result<f64, MatchError>
where
    M: Matcher + ?Sized,
    C: Clock + ?Sized,
{
    let probe = probe_string(n);
    let start = clock.now();
    let matched = matcher.is_match(&probe)?;
    let end = clock.now();
    trace!(n, matched, "probe done");
    Ok(end.saturating_sub(start).as_secs_f64())
}

/// One line of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub len: usize,
    pub secs: f64,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {:>13} | {:>14.2} |", self.len, self.secs)
    }
}

/// Markdown table writer. Rows are flushed as soon as they're written so
/// slow sizes show progress.
pub struct Table<W: io::Write> {
    out: W,
}

impl<W: io::Write> Table<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()
    }

    pub fn write_row(&mut self, row: Row) -> io::Result<()> {
        writeln!(self.out, "{row}")?;
        self.out.flush()
    }
}

/// Time one probe per size and print the table to `out`.
pub fn run<M, C, W>(matcher: &M, clock: &C, sizes: Range<usize>, out: W) -> Result<(), Error>
where
    M: Matcher + ?Sized,
    C: Clock + ?Sized,
    W: io::Write,
{
    info!(from = sizes.start, to = sizes.end, "starting measurements");
    let mut table = Table::new(out);
    table.write_header()?;
    for len in sizes {
        let secs = time_probe(matcher, clock, len)?;
        debug!(len, secs, "measured");
        table.write_row(Row { len, secs })?;
    }
    Ok(())
}
