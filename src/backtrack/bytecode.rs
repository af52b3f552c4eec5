//! A bytecode representation of a regular expression, suited for a
//! backtracking interpreter.
//!
//! This module contains the definition of [`Instruction`] and the
//! [`Compiler`] turning a [`regex_syntax::hir::Hir`] into a program.
//! The program size is linear in the size of the pattern, except for
//! counted repetitions which are unrolled.
use std::{error::Error, fmt, str};

use regex_syntax::hir::{Capture, Class, Hir, HirKind, Literal, Look, Repetition};

/// Bytecode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Consume(char),
    /// Sorted, non-overlapping inclusive ranges
    ConsumeClass(Box<[(char, char)]>),
    /// Try the first target, and on failure the second one
    Fork2(usize, usize),
    /// Try each target in order
    ForkN(Box<[usize]>),
    Jmp(usize),
    /// Only [`Look::Start`] and [`Look::End`]
    Assertion(Look),
    /// Record the current position in the given progress slot
    Mark(u32),
    /// Fail unless the position moved since the matching [`Instruction::Mark`]
    Progress(u32),
    Accept,
}

use Instruction::*;

/// Compilation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The pattern may match invalid UTF-8, which the interpreter can't walk.
    /// Only reachable with a [`Hir`] from a parser with `utf8(false)`.
    InvalidUtf8,
    /// Anything but `^` and `$` (text anchors).
    UnsupportedLook(Look),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidUtf8 => write!(f, "Pattern contains non-unicode sequence"),
            CompileError::UnsupportedLook(look) => {
                write!(f, "Pattern contains unsupported assertion {look:?}")
            }
        }
    }
}

impl Error for CompileError {}

#[derive(Debug, Default, Clone)]
pub struct Bytecode {
    pub instructions: Vec<Instruction>,
    /// Number of slots used by [`Instruction::Mark`] / [`Instruction::Progress`]
    pub progress_slots: usize,
    /// Whether every match must start at the beginning of the subject
    pub anchored_start: bool,
}

/// A compiler from [`regex_syntax::hir::Hir`] to
/// this bytecode representation.
#[derive(Debug, Default)]
pub struct Compiler {
    bytecode: Bytecode,
}

impl Compiler {
    /// Try to compile a regex in [`regex_syntax::hir::Hir`] form to
    /// this bytecode. Capture groups are compiled as plain groups.
    pub fn compile(hir: Hir) -> Result<Bytecode, CompileError> {
        let properties = hir.properties();
        if !properties.is_utf8() {
            return Err(CompileError::InvalidUtf8);
        }
        let anchored_start = properties.look_set_prefix().contains(Look::Start);

        let mut compiler = Compiler {
            bytecode: Bytecode {
                anchored_start,
                ..Default::default()
            },
        };
        compiler.compile_internal(hir)?;
        compiler.push(Accept);
        Ok(compiler.bytecode)
    }

    fn current_pc(&self) -> usize {
        self.bytecode.instructions.len()
    }

    fn push(&mut self, instruction: Instruction) {
        self.bytecode.instructions.push(instruction);
    }

    fn fork2(a: usize, b: usize, greedy: bool) -> Instruction {
        if greedy { Fork2(a, b) } else { Fork2(b, a) }
    }

    fn compile_internal(&mut self, hir: Hir) -> Result<(), CompileError> {
        match hir.into_kind() {
            HirKind::Empty => (),
            HirKind::Literal(Literal(bytes)) => {
                let string = str::from_utf8(&bytes).map_err(|_| CompileError::InvalidUtf8)?;
                for c in string.chars() {
                    self.push(Consume(c));
                }
            }
            HirKind::Class(class) => {
                let class = match class {
                    Class::Unicode(class_unicode) => class_unicode
                        .iter()
                        .map(|c| (c.start(), c.end()))
                        .collect::<Box<[_]>>(),
                    Class::Bytes(class_byte) => class_byte
                        .iter()
                        .map(|c| (char::from(c.start()), char::from(c.end())))
                        .collect::<Box<[_]>>(),
                };
                self.push(ConsumeClass(class));
            }
            HirKind::Look(look @ (Look::Start | Look::End)) => self.push(Assertion(look)),
            HirKind::Look(look) => return Err(CompileError::UnsupportedLook(look)),
            HirKind::Repetition(Repetition {
                min,
                max,
                greedy,
                sub,
            }) => {
                for _ in 0..min {
                    self.compile_internal(*sub.clone())?;
                }
                match max {
                    Some(max) => {
                        let mut forks_pc = Vec::with_capacity((max - min) as usize);
                        for _ in min..max {
                            forks_pc.push(self.current_pc());
                            // Patched once the end is known
                            self.push(Fork2(0, 0));
                            self.compile_internal(*sub.clone())?;
                        }
                        let end_pc = self.current_pc();
                        for fork_pc in forks_pc {
                            self.bytecode.instructions[fork_pc] =
                                Self::fork2(fork_pc + 1, end_pc, greedy);
                        }
                    }
                    None => self.compile_star(*sub, greedy)?,
                }
            }
            HirKind::Capture(Capture { sub, .. }) => self.compile_internal(*sub)?,
            HirKind::Concat(hirs) => {
                for hir in hirs {
                    self.compile_internal(hir)?;
                }
            }
            // regex-syntax calls e1|e2|e3 an alternation. Branches are tried
            // in order, which is what makes (a|[ab])* ambiguous on a run of a.
            HirKind::Alternation(hirs) => {
                let length = hirs.len();
                let mut fork_targets = Vec::with_capacity(length);
                let mut jmps = Vec::with_capacity(length - 1);
                let fork_pc = self.current_pc();
                self.push(ForkN(Box::default()));
                for (i, hir) in hirs.into_iter().enumerate() {
                    fork_targets.push(self.current_pc());
                    self.compile_internal(hir)?;
                    if i < length - 1 {
                        jmps.push(self.current_pc());
                        self.push(Jmp(0));
                    }
                }
                self.bytecode.instructions[fork_pc] = ForkN(fork_targets.into_boxed_slice());
                let end_pc = self.current_pc();
                for pc in jmps {
                    self.bytecode.instructions[pc] = Jmp(end_pc);
                }
            }
        }
        Ok(())
    }

    /// Unbounded repetition. When the body can match the empty string, an
    /// iteration that consumed nothing is rejected so the loop terminates.
    fn compile_star(&mut self, sub: Hir, greedy: bool) -> Result<(), CompileError> {
        let can_be_empty = sub.properties().minimum_len() == Some(0);
        let fork_pc = self.current_pc();
        self.push(Fork2(0, 0));
        let slot = if can_be_empty {
            let slot = self.bytecode.progress_slots as u32;
            self.bytecode.progress_slots += 1;
            self.push(Mark(slot));
            Some(slot)
        } else {
            None
        };
        self.compile_internal(sub)?;
        if let Some(slot) = slot {
            self.push(Progress(slot));
        }
        self.push(Jmp(fork_pc));
        self.bytecode.instructions[fork_pc] = Self::fork2(fork_pc + 1, self.current_pc(), greedy);
        Ok(())
    }
}
