// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Inclusive range of section IDs, never empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Sections { start: u32, end: u32 }

impl Sections {
	fn is_within(&self, other: &Sections) -> bool {
		other.start <= self.start && self.end <= other.end
	}

	fn intersects(&self, other: &Sections) -> bool {
		self.start <= other.end && other.start <= self.end
	}
}

struct Pair(Sections, Sections);


fn input_pairs_from_str(s: &str) -> Result<Vec<Pair>, parsing::PairsError> {
	parsing::pairs_from_str(s).collect()
}


fn count_pairs(pairs: &[Pair], pred: impl Fn(&Sections, &Sections) -> bool) -> usize {
	pairs.iter().filter(|Pair(left, right)| pred(left, right)).count()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(count_pairs(&input_pairs_from_str(input)?, |l, r| l.is_within(r) || r.is_within(l)))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PairsError> {
	Ok(count_pairs(&input_pairs_from_str(input)?, Sections::intersects))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Sections, Pair};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum SectionsError {
		#[error("expected `start-end`")]
		Format,
		#[error("invalid section ID")]
		Id(#[from] ParseIntError),
		#[error("range {start}-{end} ends before it starts")]
		Reversed { start: u32, end: u32 },
	}

	impl FromStr for Sections {
		type Err = SectionsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (start, end) = s.split_once('-').ok_or(SectionsError::Format)?;
			let (start, end) = (start.parse::<u32>()?, end.parse::<u32>()?);
			if end < start { return Err(SectionsError::Reversed { start, end }) }
			Ok(Sections { start, end })
		}
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum PairError {
		#[error("expected two comma-separated ranges")]
		Format,
		#[error("first elf")]
		Left(#[source] SectionsError),
		#[error("second elf")]
		Right(#[source] SectionsError),
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::Format)?;
			Ok(Pair(
				left.parse().map_err(PairError::Left)?,
				right.parse().map_err(PairError::Right)?))
		}
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct PairsError {
		line: usize,
		#[source]
		source: PairError,
	}

	pub(super) fn pairs_from_str(s: &str) -> impl Iterator<Item = Result<Pair, PairsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	assert_eq!(part1(INPUT).unwrap(), 2);
	assert_eq!(part2(INPUT).unwrap(), 4);
	assert!(part1("4-2,1-1").is_err());
	assert!(part2("1-2;3-4").is_err());
}
