// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Total calories carried by each elf.
struct Elves(Vec<u64>);

impl Elves {
	fn top_calories(&self, n: usize) -> u64 {
		use itertools::Itertools as _;
		self.0.iter()
			.sorted_unstable_by(|l, r| r.cmp(l))
			.take(n)
			.sum()
	}
}


fn input_elves_from_str(s: &str) -> Result<Elves, parsing::ElvesError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<u64, parsing::ElvesError> {
	Ok(input_elves_from_str(input)?.top_calories(1))
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::ElvesError> {
	Ok(input_elves_from_str(input)?.top_calories(3))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use {crate::util::blocks, super::Elves};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum ElvesError {
		#[error("no elves")]
		Empty,
		#[error("invalid calories on line {line}")]
		Calories { line: usize, #[source] source: ParseIntError },
	}

	impl FromStr for Elves {
		type Err = ElvesError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let blocks = blocks(s);
			if blocks.is_empty() { return Err(ElvesError::Empty) }
			blocks.into_iter()
				.map(|block| block.lines.iter()
					.enumerate()
					.map(|(l, line)| line.trim().parse::<u64>()
						.map_err(|e| ElvesError::Calories { line: block.line + l, source: e }))
					.sum::<Result<u64, _>>())
				.collect::<Result<_, _>>()
				.map(Elves)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	assert_eq!(part1(INPUT).unwrap(), 24_000);
	assert_eq!(part2(INPUT).unwrap(), 45_000);
	assert_eq!(input_elves_from_str("1\n\n2\n").unwrap().top_calories(5), 3);
	assert!(matches!(part1(""), Err(parsing::ElvesError::Empty)));
	assert!(matches!(part1("1\n\nx\n"), Err(parsing::ElvesError::Calories { line: 3, .. })));
}
