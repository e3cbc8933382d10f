// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Debug, PartialEq, Eq)]
struct Stacks(Vec<Vec<u8>>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Step {
	count: usize,
	from: usize,
	to: usize,
}

#[derive(Clone, Copy, Debug)]
enum Crane {
	/// Moves one crate at a time, so a moved run ends up reversed.
	CrateMover9000,
	/// Moves a run of crates at once, keeping their order.
	CrateMover9001,
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum RearrangeError {
	#[error("step {step} takes {count} crates from stack {stack}, which only has {len}")]
	Underflow { step: usize, count: usize, stack: usize, len: usize },
	#[error(transparent)]
	Parse(#[from] parsing::ProcedureError),
}

impl Stacks {
	fn apply(&mut self, crane: Crane, step: Step) -> Result<(), (usize, usize)> {
		let from = &mut self.0[step.from];
		let len = from.len();
		if step.count > len { return Err((step.from + 1, len)) }
		let taken = from.split_off(len - step.count).into_iter();
		self.0[step.to].extend(match crane {
			Crane::CrateMover9000 => either::Either::Left(taken.rev()),
			Crane::CrateMover9001 => either::Either::Right(taken),
		});
		Ok(())
	}

	fn tops(&self) -> String {
		self.0.iter().filter_map(|stack| stack.last()).map(|&c| c as char).collect()
	}
}


fn input_from_str(s: &str) -> Result<(Stacks, Vec<Step>), parsing::ProcedureError> {
	parsing::procedure_from_str(s)
}


fn rearrange(input: &str, crane: Crane) -> Result<String, RearrangeError> {
	let (mut stacks, steps) = input_from_str(input)?;
	for (i, step) in steps.into_iter().enumerate() {
		stacks.apply(crane, step).map_err(|(stack, len)|
			RearrangeError::Underflow { step: i + 1, count: step.count, stack, len })?;
	}
	tracing::debug!(?crane, tops = %stacks.tops(), "rearranged");
	Ok(stacks.tops())
}

pub(crate) fn part1(input: &str) -> Result<String, RearrangeError> {
	rearrange(input, Crane::CrateMover9000)
}

pub(crate) fn part2(input: &str) -> Result<String, RearrangeError> {
	rearrange(input, Crane::CrateMover9001)
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Stacks, Step};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum StepError {
		#[error("expected `move <n> from <stack> to <stack>`")]
		Format,
		#[error("invalid number")]
		Number(#[from] ParseIntError),
		#[error("stack numbers start at 1")]
		ZeroStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::Itertools as _;
			let Some(("move", count, "from", from, "to", to)) = s.split_whitespace().collect_tuple()
				else { return Err(StepError::Format) };
			let stack = |n: &str| -> Result<usize, StepError> {
				n.parse::<usize>()?.checked_sub(1).ok_or(StepError::ZeroStack)
			};
			Ok(Step { count: count.parse()?, from: stack(from)?, to: stack(to)? })
		}
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum ProcedureError {
		#[error("no line numbering the stacks")]
		NoIndexLine,
		#[error("stacks on line {line} are not numbered 1, 2, 3, …")]
		Index { line: usize },
		#[error("invalid crate {found:?} on line {line}")]
		Crate { line: usize, found: char },
		#[error("line {line}")]
		Step { line: usize, #[source] source: StepError },
		#[error("step on line {line} refers to stack {stack}, but there are only {len}")]
		UnknownStack { line: usize, stack: usize, len: usize },
	}

	/// Finds the byte offset of each stack’s label in the line numbering the stacks.
	fn index_columns(line: &str, l: usize) -> Result<Vec<usize>, ProcedureError> {
		line.char_indices()
			.filter(|(_, c)| !c.is_whitespace())
			.enumerate()
			.map(|(i, (column, c))| match c.to_digit(10) {
				Some(n) if n as usize == i + 1 => Ok(column),
				_ => Err(ProcedureError::Index { line: l + 1 }),
			})
			.collect()
	}

	pub(super) fn procedure_from_str(s: &str) -> Result<(Stacks, Vec<Step>), ProcedureError> {
		let mut lines = s.lines().enumerate();

		let mut drawing = vec![];
		let columns = loop {
			match lines.next() {
				None => return Err(ProcedureError::NoIndexLine),
				Some((_, "")) => return Err(ProcedureError::NoIndexLine),
				Some((l, line)) if line.trim_start().starts_with(|c: char| c.is_ascii_digit()) =>
					break index_columns(line, l)?,
				Some(numbered_line) => drawing.push(numbered_line),
			}
		};

		let mut stacks = vec![vec![]; columns.len()];
		for (l, line) in drawing.into_iter().rev() {
			for (stack, &column) in stacks.iter_mut().zip(&columns) {
				match line.as_bytes().get(column) {
					None | Some(b' ') => (),
					Some(&b) if b.is_ascii_uppercase() => stack.push(b),
					Some(&b) => return Err(ProcedureError::Crate { line: l + 1, found: b as char }),
				}
			}
		}

		let len = stacks.len();
		let steps = lines
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let step: Step = line.parse()
					.map_err(|e| ProcedureError::Step { line: l + 1, source: e })?;
				if let Some(stack) = [step.from, step.to].into_iter().find(|&s| s >= len) {
					return Err(ProcedureError::UnknownStack { line: l + 1, stack: stack + 1, len })
				}
				Ok(step)
			})
			.collect::<Result<_, _>>()?;

		Ok((Stacks(stacks), steps))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };
	let (stacks, steps) = input_from_str(INPUT).unwrap();
	assert_eq!(stacks, Stacks(vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]));
	assert_eq!(steps[1], Step { count: 3, from: 0, to: 2 });
	assert_eq!(part1(INPUT).unwrap(), "CMZ");
	assert_eq!(part2(INPUT).unwrap(), "MCD");

	const UNDERFLOW: &str = indoc::indoc! { "
		[A]
		 1

		move 2 from 1 to 1
	" };
	assert!(matches!(part1(UNDERFLOW), Err(RearrangeError::Underflow { step: 1, count: 2, stack: 1, len: 1 })));
	assert!(matches!(part1(" 1   2 \n\nmove 1 from 3 to 1\n"),
		Err(RearrangeError::Parse(parsing::ProcedureError::UnknownStack { stack: 3, .. }))));
}
