// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::cmp::Ordering;


#[derive(Clone, PartialEq, Eq, Debug)]
enum Packet {
	Int(u32),
	List(Vec<Packet>),
}

impl Ord for Packet {
	fn cmp(&self, other: &Self) -> Ordering {
		use Packet::*;
		match (self, other) {
			(Int(l), Int(r)) => l.cmp(r),
			(List(l), List(r)) => l.iter().cmp(r.iter()),
			(Int(_), List(r)) => std::slice::from_ref(self).iter().cmp(r.iter()),
			(List(l), Int(_)) => l.iter().cmp(std::slice::from_ref(other).iter()),
		}
	}
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Packet {
	fn divider(n: u32) -> Packet {
		Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
	}
}


fn input_pairs_from_str(s: &str) -> Result<Vec<[Packet; 2]>, parsing::PacketsError> {
	parsing::pairs_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<usize, parsing::PacketsError> {
	Ok(input_pairs_from_str(input)?
		.iter()
		.enumerate()
		.filter(|(_, [left, right])| left < right)
		.map(|(i, _)| i + 1)
		.sum())
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::PacketsError> {
	let dividers = [Packet::divider(2), Packet::divider(6)];
	let mut packets = input_pairs_from_str(input)?.into_iter().flatten().collect::<Vec<_>>();
	packets.extend(dividers.iter().cloned());
	packets.sort_unstable();
	Ok(dividers.iter()
		// Dividers are distinct from each other, and other equal packets sort next to them
		.map(|divider| packets.partition_point(|packet| packet < divider) + 1)
		.product())
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use {crate::util::blocks, super::Packet};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum PacketError {
		#[error("unexpected {found:?} at column {column}")]
		Unexpected { column: usize, found: char },
		#[error("unexpected end of packet")]
		End,
		#[error("invalid integer at column {column}")]
		Int { column: usize, #[source] source: ParseIntError },
		#[error("packet is not a list")]
		NotAList,
	}

	/// Recursive descent over the packet’s bytes, tracking the current offset.
	struct Parser<'s> { s: &'s str, at: usize }

	impl Parser<'_> {
		fn peek(&self) -> Option<u8> {
			self.s.as_bytes().get(self.at).copied()
		}

		fn expect(&mut self, b: u8) -> Result<(), PacketError> {
			match self.peek() {
				Some(found) if found == b => { self.at += 1; Ok(()) }
				Some(found) => Err(PacketError::Unexpected { column: self.at + 1, found: found as char }),
				None => Err(PacketError::End),
			}
		}

		fn packet(&mut self) -> Result<Packet, PacketError> {
			match self.peek() {
				Some(b'[') => self.list(),
				Some(b) if b.is_ascii_digit() => self.int(),
				Some(found) => Err(PacketError::Unexpected { column: self.at + 1, found: found as char }),
				None => Err(PacketError::End),
			}
		}

		fn list(&mut self) -> Result<Packet, PacketError> {
			self.expect(b'[')?;
			let mut items = vec![];
			if self.peek() == Some(b']') {
				self.at += 1;
				return Ok(Packet::List(items))
			}
			loop {
				items.push(self.packet()?);
				match self.peek() {
					Some(b',') => self.at += 1,
					_ => break,
				}
			}
			self.expect(b']')?;
			Ok(Packet::List(items))
		}

		fn int(&mut self) -> Result<Packet, PacketError> {
			let start = self.at;
			while self.peek().map_or(false, |b| b.is_ascii_digit()) { self.at += 1 }
			self.s[start..self.at].parse()
				.map(Packet::Int)
				.map_err(|e| PacketError::Int { column: start + 1, source: e })
		}
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut parser = Parser { s, at: 0 };
			let packet = parser.packet()?;
			if let Some(found) = parser.peek() {
				return Err(PacketError::Unexpected { column: parser.at + 1, found: found as char })
			}
			Ok(packet)
		}
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum PacketsError {
		#[error("line {line}")]
		Packet { line: usize, #[source] source: PacketError },
		#[error("block starting on line {line} has {len} packets, expected 2")]
		NotAPair { line: usize, len: usize },
	}

	pub(super) fn pairs_from_str(s: &str) -> Result<Vec<[Packet; 2]>, PacketsError> {
		blocks(s).into_iter()
			.map(|block| {
				let packets = block.lines.iter()
					.enumerate()
					.map(|(l, line)| {
						let line = line.trim();
						let to_err = |e| PacketsError::Packet { line: block.line + l, source: e };
						if !line.starts_with('[') { return Err(to_err(PacketError::NotAList)) }
						line.parse().map_err(to_err)
					})
					.collect::<Result<Vec<Packet>, _>>()?;
				let len = packets.len();
				<[Packet; 2]>::try_from(packets)
					.map_err(|_| PacketsError::NotAPair { line: block.line, len })
			})
			.collect()
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };
	assert_eq!("[10,[]]".parse::<Packet>().unwrap(),
		Packet::List(vec![Packet::Int(10), Packet::List(vec![])]));
	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 140);

	assert_eq!("[2]".parse::<Packet>().unwrap().cmp(&"2".parse().unwrap()), Ordering::Equal);
	assert!(matches!("[1,2".parse::<Packet>(), Err(parsing::PacketError::End)));
	assert!(matches!("[1;2]".parse::<Packet>(), Err(parsing::PacketError::Unexpected { column: 3, found: ';' })));
	assert!(matches!(part1("[1]\n"), Err(parsing::PacketsError::NotAPair { line: 1, len: 1 })));
}
