// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape { Rock = 1, Paper = 2, Scissors = 3 }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome { Lose = 0, Draw = 3, Win = 6 }

impl Shape {
	const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

	fn against(self, theirs: Shape) -> Outcome {
		// Each shape beats the one just before it, cyclically
		match (self as u8 + 3 - theirs as u8) % 3 {
			0 => Outcome::Draw,
			1 => Outcome::Win,
			_ => Outcome::Lose,
		}
	}

	/// The shape to play against `theirs` to end up with `outcome`.
	fn answering(theirs: Shape, outcome: Outcome) -> Shape {
		let shift = match outcome { Outcome::Draw => 0, Outcome::Win => 1, Outcome::Lose => 2 };
		Shape::ALL[(theirs as usize - 1 + shift) % 3]
	}
}

/// The second column of the strategy guide, whose meaning differs per part.
#[derive(Clone, Copy, Debug)]
enum Code { X, Y, Z }

struct Round { theirs: Shape, code: Code }

impl Round {
	fn score(mine: Shape, outcome: Outcome) -> u64 {
		mine as u64 + outcome as u64
	}
}


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, parsing::RoundsError> {
	parsing::rounds_from_str(s).collect()
}


fn part1_impl(rounds: &[Round]) -> u64 {
	rounds.iter()
		.map(|&Round { theirs, code }| {
			let mine = match code { Code::X => Shape::Rock, Code::Y => Shape::Paper, Code::Z => Shape::Scissors };
			Round::score(mine, mine.against(theirs))
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part1_impl(&input_rounds_from_str(input)?))
}


fn part2_impl(rounds: &[Round]) -> u64 {
	rounds.iter()
		.map(|&Round { theirs, code }| {
			let outcome = match code { Code::X => Outcome::Lose, Code::Y => Outcome::Draw, Code::Z => Outcome::Win };
			Round::score(Shape::answering(theirs, outcome), outcome)
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::RoundsError> {
	Ok(part2_impl(&input_rounds_from_str(input)?))
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::{Shape, Code, Round};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum RoundError {
		#[error("expected two columns")]
		Format,
		#[error("invalid opponent shape {0:?}")]
		Theirs(String),
		#[error("invalid code {0:?}")]
		Code(String),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::Itertools as _;
			let (theirs, code) = s.split_whitespace().collect_tuple()
				.ok_or(RoundError::Format)?;
			let theirs = match theirs {
				"A" => Shape::Rock,
				"B" => Shape::Paper,
				"C" => Shape::Scissors,
				invalid => return Err(RoundError::Theirs(invalid.to_owned())),
			};
			let code = match code {
				"X" => Code::X,
				"Y" => Code::Y,
				"Z" => Code::Z,
				invalid => return Err(RoundError::Code(invalid.to_owned())),
			};
			Ok(Round { theirs, code })
		}
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct RoundsError {
		line: usize,
		#[source]
		source: RoundError,
	}

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };
	assert_eq!(part1(INPUT).unwrap(), 15);
	assert_eq!(part2(INPUT).unwrap(), 12);
	assert_eq!(Shape::Paper.against(Shape::Rock), Outcome::Win);
	assert_eq!(Shape::Rock.against(Shape::Paper), Outcome::Lose);
	assert_eq!(Shape::Scissors.against(Shape::Scissors), Outcome::Draw);
	for theirs in Shape::ALL {
		for outcome in [Outcome::Lose, Outcome::Draw, Outcome::Win] {
			assert_eq!(Shape::answering(theirs, outcome).against(theirs), outcome);
		}
	}
	assert!(part1("A W").is_err());
}
