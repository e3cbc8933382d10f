// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Noop,
	AddX(i64),
}

impl Instr {
	fn cycles(self) -> usize {
		match self { Instr::Noop => 1, Instr::AddX(_) => 2 }
	}
}

/// Yields the value of the X register *during* each cycle, starting at cycle 1.
struct Cpu<I> {
	instrs: I,
	x: i64,
	/// The instruction in flight and the cycles it has left.
	current: Option<(Instr, usize)>,
}

impl<I: Iterator<Item = Instr>> Cpu<I> {
	fn new(instrs: impl IntoIterator<IntoIter = I>) -> Self {
		Cpu { instrs: instrs.into_iter(), x: 1, current: None }
	}
}

impl<I: Iterator<Item = Instr>> Iterator for Cpu<I> {
	type Item = i64;

	fn next(&mut self) -> Option<i64> {
		let (instr, left) = match self.current.take() {
			Some(current) => current,
			None => {
				let instr = self.instrs.next()?;
				(instr, instr.cycles())
			}
		};

		let during = self.x;
		if left > 1 {
			self.current = Some((instr, left - 1));
		} else if let Instr::AddX(v) = instr {
			self.x += v;
		}
		Some(during)
	}
}


const COLUMNS: usize = 40;
const ROWS: usize = 6;

struct Crt { columns: usize, pixels: Vec<bool> }

impl Crt {
	fn draw(columns: usize, xs: impl Iterator<Item = i64>) -> Crt {
		let pixels = xs
			.enumerate()
			.map(|(i, x)| ((i % columns) as i64).abs_diff(x) <= 1)
			.collect();
		Crt { columns, pixels }
	}
}

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::Itertools as _;
		let rows = self.pixels.chunks(self.columns)
			.map(|row| row.iter().map(|&lit| if lit { '#' } else { '.' }).collect::<String>());
		write!(f, "{}", rows.format("\n"))
	}
}


fn input_instrs_from_str(s: &str) -> Result<Vec<Instr>, parsing::InstrsError> {
	parsing::instrs_from_str(s).collect()
}


pub(crate) fn part1(input: &str) -> Result<i64, parsing::InstrsError> {
	Ok(Cpu::new(input_instrs_from_str(input)?)
		.zip(1..)
		.filter(|(_, cycle)| cycle % COLUMNS == 20)
		.take(ROWS)
		.map(|(x, cycle)| cycle as i64 * x)
		.sum())
}

pub(crate) fn part2(input: &str) -> Result<impl std::fmt::Display, parsing::InstrsError> {
	let cpu = Cpu::new(input_instrs_from_str(input)?);
	Ok(Crt::draw(COLUMNS, cpu.take(COLUMNS * ROWS)))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum InstrError {
		#[error("unknown instruction {0:?}")]
		Unknown(String),
		#[error("invalid addx operand")]
		AddX(#[from] ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instr::Noop),
				Some(("addx", v)) => Ok(Instr::AddX(v.parse()?)),
				_ => Err(InstrError::Unknown(s.to_owned())),
			}
		}
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct InstrsError {
		line: usize,
		#[source]
		source: InstrError,
	}

	pub(super) fn instrs_from_str(s: &str) -> impl Iterator<Item = Result<Instr, InstrsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registers() {
		const INPUT: &str = indoc::indoc! { "
			noop
			addx 3
			addx -5
		" };
		let xs = Cpu::new(input_instrs_from_str(INPUT).unwrap()).collect::<Vec<_>>();
		assert_eq!(xs, [1, 1, 1, 4, 4]);
		assert_eq!(part1(INPUT).unwrap(), 0);
	}

	/// Runs `noop` and `addx 1` alternately, so X during cycle `c` is `1 + (c - 1) / 3`.
	fn creeping_program() -> String {
		std::iter::repeat("noop\naddx 1\n").take(COLUMNS * ROWS / 3).collect()
	}

	#[test]
	fn signal_strength() {
		let expected = [20, 60, 100, 140, 180, 220].into_iter()
			.map(|c| c * (1 + (c - 1) / 3))
			.sum::<i64>();
		assert_eq!(part1(&creeping_program()).unwrap(), expected);
		assert_eq!(part1(&"noop\n".repeat(240)).unwrap(), 720);
	}

	#[test]
	fn draw() {
		let row = format!("###{}", ".".repeat(COLUMNS - 3));
		let screen = vec![row; ROWS].join("\n");
		assert_eq!(part2(&"noop\n".repeat(240)).unwrap().to_string(), screen);

		assert_eq!(part2("addx 10\nnoop\nnoop\n").unwrap().to_string(), "##..");
	}
}
