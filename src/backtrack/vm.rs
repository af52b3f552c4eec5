//! An interpreter for [`crate::backtrack::bytecode`].

use regex_syntax::hir::Look;
use tracing::trace;

use crate::{
    backtrack::bytecode::{Bytecode, Instruction::*},
    matcher::MatchError,
};

/// A classic backtracking interpreter.
///
/// Alternatives are explored depth-first, in priority order, and nothing
/// is memoized: a pattern with ambiguous alternatives takes time
/// exponential in the subject length to report a failure.
#[derive(Debug, Clone)]
pub struct Backtracker {
    bytecode: Bytecode,
    step_limit: Option<u64>,
}

/// Outcome of a search, along with the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub matched: bool,
    pub steps: u64,
}

#[derive(Debug)]
enum Job {
    Explore { pc: usize, pos: usize },
    Restore { slot: usize, value: Option<usize> },
}

struct State {
    stack: Vec<Job>,
    /// Loop entry positions, see [`crate::backtrack::bytecode::Instruction::Mark`]
    marks: Box<[Option<usize>]>,
    steps: u64,
}

impl State {
    fn new(slot_count: usize) -> Self {
        Self {
            stack: Vec::new(),
            marks: vec![None; slot_count].into_boxed_slice(),
            steps: 0,
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.marks.fill(None);
    }

    /// Overwrite a mark, remembering the previous value for when this
    /// branch is abandoned.
    fn mark(&mut self, slot: usize, pos: usize) {
        let value = self.marks[slot].replace(pos);
        self.stack.push(Job::Restore { slot, value });
    }
}

impl Backtracker {
    pub fn from_bytecode(bytecode: Bytecode, step_limit: Option<u64>) -> Self {
        Self {
            bytecode,
            step_limit,
        }
    }

    pub fn is_match(&self, subject: &str) -> Result<bool, MatchError> {
        Ok(self.search_stats(subject)?.matched)
    }

    /// Same as [`Backtracker::is_match`], but also reports how many steps
    /// the search took.
    pub fn search_stats(&self, subject: &str) -> Result<SearchStats, MatchError> {
        let mut state = State::new(self.bytecode.progress_slots);
        let matched = self.exec(subject, &mut state)?;
        Ok(SearchStats {
            matched,
            steps: state.steps,
        })
    }

    fn exec(&self, subject: &str, state: &mut State) -> Result<bool, MatchError> {
        let last_start = if self.bytecode.anchored_start {
            0
        } else {
            subject.len()
        };
        for start in (0..=last_start).filter(|&i| subject.is_char_boundary(i)) {
            if self.run(subject, start, state)? {
                trace!(start, steps = state.steps, "match found");
                return Ok(true);
            }
        }
        trace!(steps = state.steps, "no match");
        Ok(false)
    }

    fn tick(&self, state: &mut State) -> Result<(), MatchError> {
        state.steps += 1;
        match self.step_limit {
            Some(limit) if state.steps > limit => Err(MatchError::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    /// Run the program anchored at `start`.
    fn run(&self, subject: &str, start: usize, state: &mut State) -> Result<bool, MatchError> {
        let instructions = self.bytecode.instructions.as_slice();
        state.reset();
        state.stack.push(Job::Explore { pc: 0, pos: start });

        'jobs: while let Some(job) = state.stack.pop() {
            let (mut pc, mut pos) = match job {
                Job::Explore { pc, pos } => (pc, pos),
                Job::Restore { slot, value } => {
                    self.tick(state)?;
                    state.marks[slot] = value;
                    continue;
                }
            };
            loop {
                self.tick(state)?;
                match &instructions[pc] {
                    Consume(c) => match subject[pos..].chars().next() {
                        Some(next) if next == *c => {
                            pos += next.len_utf8();
                            pc += 1;
                        }
                        _ => continue 'jobs,
                    },
                    ConsumeClass(class) => match subject[pos..].chars().next() {
                        Some(next) if class_contains(class, next) => {
                            pos += next.len_utf8();
                            pc += 1;
                        }
                        _ => continue 'jobs,
                    },
                    Fork2(a, b) => {
                        state.stack.push(Job::Explore { pc: *b, pos });
                        pc = *a;
                    }
                    ForkN(branches) => {
                        for target in branches.iter().skip(1).rev() {
                            state.stack.push(Job::Explore { pc: *target, pos });
                        }
                        pc = branches[0];
                    }
                    Jmp(target) => pc = *target,
                    Mark(slot) => {
                        state.mark(*slot as usize, pos);
                        pc += 1;
                    }
                    Progress(slot) => {
                        if state.marks[*slot as usize] == Some(pos) {
                            continue 'jobs;
                        }
                        pc += 1;
                    }
                    Assertion(look) => {
                        let holds = match look {
                            Look::Start => pos == 0,
                            Look::End => pos == subject.len(),
                            // Rejected by the compiler
                            _ => false,
                        };
                        if !holds {
                            continue 'jobs;
                        }
                        pc += 1;
                    }
                    Accept => return Ok(true),
                }
            }
        }
        Ok(false)
    }
}

fn class_contains(class: &[(char, char)], c: char) -> bool {
    for (start, end) in class.iter() {
        if c < *start {
            return false;
        } else if c <= *end {
            return true;
        }
    }
    false
}
