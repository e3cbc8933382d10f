// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Hill {
	heights: Vec<u8>,
	width: usize,
	start: usize,
	end: usize,
}

#[derive(Clone, Copy, Debug)]
enum Climb {
	/// Steps up at most one unit at a time.
	Up,
	/// Retraces climbs: steps down at most one unit at a time.
	Down,
}

impl Hill {
	fn neighbors(&self, pos: usize) -> impl Iterator<Item = usize> {
		let (w, len) = (self.width, self.heights.len());
		let left = (pos % w > 0).then(|| pos - 1);
		let up = (pos >= w).then(|| pos - w);
		let right = (pos % w < w - 1).then(|| pos + 1);
		let down = (pos + w < len).then(|| pos + w);
		[left, up, right, down].into_iter().flatten()
	}

	fn can_step(&self, climb: Climb, from: usize, to: usize) -> bool {
		let (from, to) = (self.heights[from], self.heights[to]);
		match climb {
			Climb::Up => to <= from + 1,
			Climb::Down => from <= to + 1,
		}
	}

	/// Breadth-first search; returns the shortest path from `from` to the first
	/// position satisfying `is_goal`, both ends included.
	fn climb(&self, climb: Climb, from: usize, is_goal: impl Fn(usize) -> bool) -> Option<Vec<usize>> {
		use std::collections::VecDeque;

		let mut came_from = vec![None; self.heights.len()];
		let mut queue = VecDeque::from([from]);
		came_from[from] = Some(from);

		while let Some(pos) = queue.pop_front() {
			if is_goal(pos) {
				let (mut path, mut at) = (vec![pos], pos);
				while at != from {
					at = came_from[at]?;
					path.push(at);
				}
				path.reverse();
				tracing::debug!(?climb, steps = path.len() - 1, explored = came_from.iter().flatten().count(), "reached goal");
				return Some(path)
			}

			for next in self.neighbors(pos) {
				if came_from[next].is_none() && self.can_step(climb, pos, next) {
					came_from[next] = Some(pos);
					queue.push_back(next);
				}
			}
		}

		None
	}
}


#[derive(thiserror::Error, Debug)]
pub(crate) enum ClimbError {
	#[error("no path to the goal")]
	NoPath,
	#[error(transparent)]
	Parse(#[from] parsing::HillError),
}


fn input_hill_from_str(s: &str) -> Result<Hill, parsing::HillError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> Result<usize, ClimbError> {
	let hill = input_hill_from_str(input)?;
	let path = hill.climb(Climb::Up, hill.start, |pos| pos == hill.end).ok_or(ClimbError::NoPath)?;
	Ok(path.len() - 1)
}

pub(crate) fn part2(input: &str) -> Result<usize, ClimbError> {
	let hill = input_hill_from_str(input)?;
	let path = hill.climb(Climb::Down, hill.end, |pos| hill.heights[pos] == 0).ok_or(ClimbError::NoPath)?;
	Ok(path.len() - 1)
}


pub(crate) mod parsing {
	use std::str::FromStr;
	use super::Hill;

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum HillError {
		#[error("line {line} is {found} long, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("invalid height {found:?} on line {line}, column {column}")]
		InvalidHeight { line: usize, column: usize, found: char },
		#[error("more than one `{0}`")]
		Duplicate(char),
		#[error("no `{0}`")]
		Missing(char),
	}

	impl FromStr for Hill {
		type Err = HillError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			let (mut start, mut end) = (None, None);

			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				let len = *width.get_or_insert(line.len());
				if line.len() != len { return Err(HillError::LineLen { line: l + 1, len, found: line.len() }) }

				for (c, b) in line.bytes().enumerate() {
					let (marker, height) = match b {
						b'S' => (Some(&mut start), b'a'),
						b'E' => (Some(&mut end), b'z'),
						b'a'..=b'z' => (None, b),
						found => return Err(HillError::InvalidHeight { line: l + 1, column: c + 1, found: found as char }),
					};
					if let Some(marker) = marker {
						if marker.replace(heights.len()).is_some() { return Err(HillError::Duplicate(b as char)) }
					}
					heights.push(height - b'a');
				}
			}

			Ok(Hill {
				width: width.ok_or(HillError::Missing('S'))?,
				start: start.ok_or(HillError::Missing('S'))?,
				end: end.ok_or(HillError::Missing('E'))?,
				heights,
			})
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };
	assert_eq!(part1(INPUT).unwrap(), 31);
	assert_eq!(part2(INPUT).unwrap(), 29);

	let hill = input_hill_from_str("SbcE\n").unwrap();
	assert_eq!(hill.climb(Climb::Up, hill.start, |pos| pos == 2), Some(vec![0, 1, 2]));
	assert!(matches!(part1("SbdE\n"), Err(ClimbError::NoPath)));
	assert!(matches!(part1("SaE\nSaa\n"), Err(ClimbError::Parse(parsing::HillError::Duplicate('S')))));
	assert!(matches!(part1("abc\n"), Err(ClimbError::Parse(parsing::HillError::Missing('S')))));
}
