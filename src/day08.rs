// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Forest {
	heights: Vec<u8>,
	width: usize,
	height: usize,
}

impl Forest {
	fn at(&self, x: usize, y: usize) -> u8 {
		self.heights[y * self.width + x]
	}

	/// Marks every tree visible from outside, sweeping each line of sight from both ends.
	fn visible(&self) -> Vec<bool> {
		let mut visible = vec![false; self.heights.len()];
		let (w, h) = (self.width, self.height);

		let mut sweep = |line: &mut dyn Iterator<Item = usize>| {
			let mut tallest = None;
			for i in line {
				if tallest.map_or(true, |t| self.heights[i] > t) {
					visible[i] = true;
					tallest = Some(self.heights[i]);
				}
			}
		};

		for y in 0..h {
			sweep(&mut (0..w).map(|x| y * w + x));
			sweep(&mut (0..w).rev().map(|x| y * w + x));
		}
		for x in 0..w {
			sweep(&mut (0..h).map(|y| y * w + x));
			sweep(&mut (0..h).rev().map(|y| y * w + x));
		}

		visible
	}

	fn scenic_score(&self, x: usize, y: usize) -> usize {
		let height = self.at(x, y);
		let viewing_distance = |trees: &mut dyn Iterator<Item = u8>| {
			let mut count = 0;
			for tree in trees {
				count += 1;
				if tree >= height { break }
			}
			count
		};

		viewing_distance(&mut (0..y).rev().map(|y| self.at(x, y)))
			* viewing_distance(&mut (0..x).rev().map(|x| self.at(x, y)))
			* viewing_distance(&mut (x + 1..self.width).map(|x| self.at(x, y)))
			* viewing_distance(&mut (y + 1..self.height).map(|y| self.at(x, y)))
	}
}


fn input_forest_from_str(s: &str) -> Result<Forest, parsing::ForestError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::ForestError> {
	Ok(input_forest_from_str(input)?.visible().into_iter().filter(|&v| v).count())
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::ForestError> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};
	let forest = input_forest_from_str(input)?;
	Ok((0..forest.height)
		.into_par_iter()
		.map(|y| (0..forest.width)
			.map(|x| forest.scenic_score(x, y))
			.max()
			.unwrap_or(0))
		.max()
		.unwrap_or(0))
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum ForestError {
		#[error("no trees")]
		Empty,
		#[error("line {line} has {found} trees, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("invalid height {found:?} on line {line}, column {column}")]
		InvalidHeight { line: usize, column: usize, found: char },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			let mut height = 0;

			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				let len = *width.get_or_insert(line.len());
				if line.len() != len {
					return Err(ForestError::LineLen { line: l + 1, len, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(ForestError::InvalidHeight { line: l + 1, column: c + 1, found: b as char })
					}
					heights.push(b - b'0');
				}
				height += 1;
			}

			match width {
				None | Some(0) => Err(ForestError::Empty),
				Some(width) => Ok(Forest { heights, width, height }),
			}
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };
	let forest = input_forest_from_str(INPUT).unwrap();
	assert_eq!(forest.scenic_score(2, 1), 4);
	assert_eq!(forest.scenic_score(2, 3), 8);
	assert_eq!(forest.scenic_score(0, 2), 0);
	assert_eq!(part1(INPUT).unwrap(), 21);
	assert_eq!(part2(INPUT).unwrap(), 8);

	// Not square, and a zero-height edge is still visible
	assert_eq!(part1("000\n010\n").unwrap(), 6);
	assert!(matches!(part1("12\n3\n"), Err(parsing::ForestError::LineLen { line: 2, len: 2, found: 1 })));
	assert!(matches!(part1(""), Err(parsing::ForestError::Empty)));
}
