// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use {std::path::Path, anyhow::Context as _};


/// Declares the `dayNN` modules and generates [`DAYS`] plus a `solve` dispatcher over them.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	pub(crate) const DAYS: &[u8] = &[$( $day ),*];

	#[tracing::instrument(skip(input))]
	pub(crate) fn solve(day: u8, input: &str) -> anyhow::Result<[String; 2]> {
		use anyhow::Context as _;
		match day {
			$( $day => Ok([
				[<day $day>]::part1(input).context("part 1")?.to_string(),
				[<day $day>]::part2(input).context("part 2")?.to_string(),
			]), )*
			_ => anyhow::bail!("no solution for day {day}"),
		}
	}
} } }

pub(crate) use mod_days;


pub(crate) fn read_input(dir: &Path, day: u8) -> anyhow::Result<String> {
	let path = dir.join(format!("day{day:02}.txt"));
	std::fs::read_to_string(&path)
		.with_context(|| format!("reading input from {}", path.display()))
}


/// A run of non-blank lines, as separated by blank lines in the input.
pub(crate) struct Block<'s> {
	/// 1-based number of the block’s first line.
	pub(crate) line: usize,
	pub(crate) lines: Vec<&'s str>,
}

pub(crate) fn blocks(s: &str) -> Vec<Block<'_>> {
	use itertools::Itertools as _;
	let groups = s.lines().enumerate().group_by(|&(_, line)| line.is_empty());
	groups.into_iter()
		.filter_map(|(blank, group)| {
			if blank { return None }
			let (ls, lines): (Vec<_>, Vec<_>) = group.unzip();
			Some(Block { line: ls[0] + 1, lines })
		})
		.collect()
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		a
		b

		c


		d
	" };
	let parsed = blocks(INPUT);
	assert_eq!(parsed.len(), 3);
	assert_eq!(parsed.iter().map(|b| b.line).collect::<Vec<_>>(), [1, 4, 7]);
	assert_eq!(parsed[0].lines, ["a", "b"]);
	assert_eq!(parsed[2].lines, ["d"]);
	assert!(blocks("").is_empty());
}
