// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::num::NonZeroUsize;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Pos { x: i64, y: i64 }

impl Pos {
	const ORIGIN: Pos = Pos { x: 0, y: 0 };

	fn chebyshev_len(self) -> i64 {
		self.x.abs().max(self.y.abs())
	}

	fn signum(self) -> Pos {
		Pos { x: self.x.signum(), y: self.y.signum() }
	}
}

impl std::ops::Add for Pos {
	type Output = Pos;
	fn add(self, rhs: Pos) -> Pos { Pos { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl std::ops::Sub for Pos {
	type Output = Pos;
	fn sub(self, rhs: Pos) -> Pos { Pos { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl std::ops::AddAssign for Pos {
	fn add_assign(&mut self, rhs: Pos) { *self = *self + rhs }
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Dir { Up, Down, Left, Right }

impl Dir {
	fn unit(self) -> Pos {
		match self {
			Dir::Up => Pos { x: 0, y: 1 },
			Dir::Down => Pos { x: 0, y: -1 },
			Dir::Left => Pos { x: -1, y: 0 },
			Dir::Right => Pos { x: 1, y: 0 },
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Motion { dir: Dir, steps: usize }


/// A chain of knots; index 0 is the head, the last one the tail.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Rope(Vec<Pos>);

impl Rope {
	pub(crate) fn new(knots: NonZeroUsize) -> Rope {
		Rope(vec![Pos::ORIGIN; knots.get()])
	}

	pub(crate) fn tail(&self) -> Pos {
		// Never empty, see `Rope::new`
		self.0[self.0.len() - 1]
	}

	/// Moves the head one unit in `dir`, and lets the other knots follow.
	pub(crate) fn step(&mut self, dir: Dir) {
		self.0[0] += dir.unit();

		for i in 1..self.0.len() {
			let gap = self.0[i - 1] - self.0[i];
			// Still touching; nothing further down the rope can move either
			if gap.chebyshev_len() <= 1 { break }
			debug_assert_eq!(gap.chebyshev_len(), 2);

			// Covers straight gaps (one component is zero) as well as diagonal ones
			self.0[i] += gap.signum();
		}
	}
}


/// Yields the tail’s position before any step, and then after every unit step.
pub(crate) fn tail_trajectory(
	knots: NonZeroUsize,
	motions: impl IntoIterator<Item = Motion>,
) -> impl Iterator<Item = Pos> {
	let mut rope = Rope::new(knots);
	let start = rope.tail();
	std::iter::once(start).chain(motions.into_iter()
		.flat_map(|Motion { dir, steps }| std::iter::repeat(dir).take(steps))
		.map(move |dir| {
			rope.step(dir);
			rope.tail()
		}))
}

pub(crate) fn run(motions: impl IntoIterator<Item = Motion>, knots: NonZeroUsize) -> usize {
	use std::collections::HashSet;
	let visited = tail_trajectory(knots, motions).collect::<HashSet<_>>().len();
	tracing::debug!(knots = knots.get(), visited, "rope settled");
	visited
}


pub(crate) fn input_motions_from_str(s: &str) -> Result<Vec<Motion>, parsing::MotionsError> {
	parsing::motions_from_str(s).collect()
}


const SHORT_ROPE: NonZeroUsize = match NonZeroUsize::new(2) { Some(n) => n, None => unreachable!() };
const LONG_ROPE: NonZeroUsize = match NonZeroUsize::new(10) { Some(n) => n, None => unreachable!() };

pub(crate) fn part1(input: &str) -> Result<usize, parsing::MotionsError> {
	Ok(run(input_motions_from_str(input)?, SHORT_ROPE))
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::MotionsError> {
	Ok(run(input_motions_from_str(input)?, LONG_ROPE))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Motion};

	#[derive(thiserror::Error, Debug, PartialEq, Eq)]
	#[error("invalid direction {0:?} (expected one of U, D, L, R)")]
	pub(crate) struct InvalidDirection(pub(crate) String);

	impl FromStr for Dir {
		type Err = InvalidDirection;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s {
				"U" => Ok(Dir::Up),
				"D" => Ok(Dir::Down),
				"L" => Ok(Dir::Left),
				"R" => Ok(Dir::Right),
				invalid => Err(InvalidDirection(invalid.to_owned())),
			}
		}
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum MotionError {
		#[error("expected a direction and a distance")]
		Format,
		#[error(transparent)]
		Dir(#[from] InvalidDirection),
		#[error("invalid distance")]
		Steps(#[source] ParseIntError),
		#[error("distance must be positive")]
		ZeroSteps,
	}

	impl FromStr for Motion {
		type Err = MotionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::Itertools as _;
			let (dir, steps) = s.split_whitespace().collect_tuple()
				.ok_or(MotionError::Format)?;
			let dir = dir.parse()?;
			let steps = steps.parse().map_err(MotionError::Steps)?;
			if steps == 0 { return Err(MotionError::ZeroSteps) }
			Ok(Motion { dir, steps })
		}
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct MotionsError {
		pub(crate) line: usize,
		#[source]
		pub(crate) source: MotionError,
	}

	pub(super) fn motions_from_str(s: &str) -> impl Iterator<Item = Result<Motion, MotionsError>> + '_ {
		s.lines().enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|e| MotionsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use {super::*, test_case::test_case};

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];

	fn knots(n: usize) -> NonZeroUsize {
		NonZeroUsize::new(n).unwrap()
	}

	#[test_case(0, 2 => 13; "short rope")]
	#[test_case(0, 10 => 1; "long rope, short motions")]
	#[test_case(1, 10 => 36; "long rope, long motions")]
	fn distinct_tail_cells(input: usize, n: usize) -> usize {
		crate::day09::run(input_motions_from_str(INPUTS[input]).unwrap(), knots(n))
	}

	#[test]
	fn parts() {
		assert_eq!(part1(INPUTS[0]).unwrap(), 13);
		assert_eq!(part2(INPUTS[0]).unwrap(), 1);
		assert_eq!(part2(INPUTS[1]).unwrap(), 36);
	}

	/// Every combination of direction and distance, in a fixed but twisty order.
	fn twisty_motions() -> Vec<Motion> {
		use {itertools::iproduct, Dir::*};
		iproduct!(1..=4, [Right, Up, Left, Up, Left, Down, Right, Down, Down])
			.map(|(steps, dir)| Motion { dir, steps: steps * 3 % 7 + 1 })
			.collect()
	}

	#[test]
	fn knots_keep_touching() {
		for n in [2, 3, 5, 10, 16] {
			let mut rope = Rope::new(knots(n));
			for Motion { dir, steps } in twisty_motions() {
				for _ in 0..steps {
					let before = rope.clone();
					rope.step(dir);
					for (i, pair) in rope.0.windows(2).enumerate() {
						assert!((pair[0] - pair[1]).chebyshev_len() <= 1,
							"knots {i} and {} apart after {dir:?} from {before:?}", i + 1);
					}
					for i in 1..n {
						if before.0[i - 1] == rope.0[i - 1] {
							assert_eq!(before.0[i], rope.0[i], "knot {i} moved on its own");
						}
					}
				}
			}
		}
	}

	#[test]
	fn single_knot_tail_is_head() {
		use std::collections::HashSet;
		let motions = twisty_motions();
		let mut head = Pos::ORIGIN;
		let mut visited = HashSet::from([head]);
		for Motion { dir, steps } in &motions {
			for _ in 0..*steps {
				head += dir.unit();
				visited.insert(head);
			}
		}
		assert_eq!(crate::day09::run(motions, knots(1)), visited.len());
	}

	#[test]
	fn trajectory_starts_at_origin() {
		let trajectory = tail_trajectory(knots(2), input_motions_from_str("R 2").unwrap())
			.collect::<Vec<_>>();
		assert_eq!(trajectory, [Pos::ORIGIN, Pos::ORIGIN, Pos { x: 1, y: 0 }]);
	}

	#[test]
	fn diagonal_gaps() {
		let mut rope = Rope::new(knots(3));
		rope.step(Dir::Up);
		rope.step(Dir::Right);
		assert_eq!(rope.0, [Pos { x: 1, y: 1 }, Pos::ORIGIN, Pos::ORIGIN]);
		rope.step(Dir::Up);
		assert_eq!(rope.0, [Pos { x: 1, y: 2 }, Pos { x: 1, y: 1 }, Pos::ORIGIN]);
		rope.step(Dir::Right);
		rope.step(Dir::Up);
		// Offset gap of (1, 2) collapses diagonally, then a true diagonal gap of (2, 2)
		assert_eq!(rope.0, [Pos { x: 2, y: 3 }, Pos { x: 2, y: 2 }, Pos { x: 1, y: 1 }]);
	}

	#[test]
	fn invalid_direction() {
		use parsing::{InvalidDirection, MotionError};
		let rope = Rope::new(knots(2));
		let mut moved = rope.clone();
		let result = "Q 3".parse::<Motion>().map(|Motion { dir, .. }| moved.step(dir));
		assert!(matches!(result, Err(MotionError::Dir(InvalidDirection(d))) if d == "Q"));
		assert_eq!(moved, rope);

		let err = part1("R 2\nQ 3\n").unwrap_err();
		assert_eq!(err.line, 2);
		assert!(matches!(err.source, MotionError::Dir(_)));
	}

	#[test]
	fn malformed_lines() {
		use parsing::MotionError;
		assert!(matches!("R".parse::<Motion>(), Err(MotionError::Format)));
		assert!(matches!("R x".parse::<Motion>(), Err(MotionError::Steps(_))));
		assert!(matches!("R 0".parse::<Motion>(), Err(MotionError::ZeroSteps)));
		assert!(matches!("R 1 2".parse::<Motion>(), Err(MotionError::Format)));
	}
}
