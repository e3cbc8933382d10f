// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Set of item priorities, bit `p` set for priority `p` (1 through 52).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Items(u64);

impl Items {
	fn priority(item: u8) -> u32 {
		if item.is_ascii_lowercase() { (item - b'a' + 1) as u32 } else { (item - b'A' + 27) as u32 }
	}

	fn from_bytes(items: &[u8]) -> Items {
		Items(items.iter().fold(0, |set, &item| set | 1_u64 << Items::priority(item)))
	}

	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	/// The priority of the only item in the set, if it contains exactly one.
	fn single(self) -> Option<u32> {
		(self.0.count_ones() == 1).then(|| self.0.trailing_zeros())
	}
}

struct Rucksack<'s>(&'s [u8]);

impl Rucksack<'_> {
	fn compartments(&self) -> [Items; 2] {
		let (left, right) = self.0.split_at(self.0.len() / 2);
		[Items::from_bytes(left), Items::from_bytes(right)]
	}

	fn items(&self) -> Items {
		Items::from_bytes(self.0)
	}
}


#[derive(thiserror::Error, Debug)]
pub(crate) enum SearchError {
	#[error("rucksack {0} does not have exactly one item in both compartments")]
	Misplaced(usize),
	#[error("group {0} does not share exactly one badge")]
	Badge(usize),
	#[error("last group only has {0} rucksacks")]
	IncompleteGroup(usize),
	#[error(transparent)]
	Parse(#[from] parsing::RucksacksError),
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, parsing::RucksacksError> {
	parsing::rucksacks_from_str(s).collect()
}


fn part1_impl(rucksacks: &[Rucksack<'_>]) -> Result<u32, SearchError> {
	rucksacks.iter()
		.enumerate()
		.map(|(i, rucksack)| {
			let [left, right] = rucksack.compartments();
			left.intersection(right).single().ok_or(SearchError::Misplaced(i + 1))
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u32, SearchError> {
	part1_impl(&input_rucksacks_from_str(input)?)
}


const GROUP_SIZE: usize = 3;

fn part2_impl(rucksacks: &[Rucksack<'_>]) -> Result<u32, SearchError> {
	rucksacks.chunks(GROUP_SIZE)
		.enumerate()
		.map(|(g, group)| {
			if group.len() < GROUP_SIZE { return Err(SearchError::IncompleteGroup(group.len())) }
			group.iter()
				.map(Rucksack::items)
				.reduce(Items::intersection)
				.and_then(Items::single)
				.ok_or(SearchError::Badge(g + 1))
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u32, SearchError> {
	part2_impl(&input_rucksacks_from_str(input)?)
}


pub(crate) mod parsing {
	use super::Rucksack;

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum RucksackError {
		#[error("odd number of items ({0})")]
		OddLen(usize),
		#[error("invalid item {0:?}")]
		InvalidItem(char),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
				return Err(RucksackError::InvalidItem(c))
			}
			if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
			Ok(Rucksack(s.as_bytes()))
		}
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct RucksacksError {
		line: usize,
		#[source]
		source: RucksackError,
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	assert_eq!(Items::from_bytes(b"pL").0, 1 << 16 | 1 << 38);
	assert_eq!(part1(INPUT).unwrap(), 157);
	assert_eq!(part2(INPUT).unwrap(), 70);
	assert!(matches!(part1("abcd"), Err(SearchError::Misplaced(1))));
	assert!(matches!(part2("ab\nab\n"), Err(SearchError::IncompleteGroup(2))));
	assert!(matches!(part1("ab1c"), Err(SearchError::Parse(_))));
}
