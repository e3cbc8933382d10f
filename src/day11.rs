// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::VecDeque;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operand { Old, Value(u64) }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operator { Add, Sub, Mul }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Operation(Operand, Operator, Operand);

impl Operation {
	/// The new worry level, or `None` if it doesn’t fit.
	fn apply(&self, old: u64) -> Option<u64> {
		let value = |operand| match operand { Operand::Old => old, Operand::Value(v) => v };
		let (lhs, rhs) = (value(self.0), value(self.2));
		match self.1 {
			Operator::Add => lhs.checked_add(rhs),
			Operator::Sub => Some(lhs.saturating_sub(rhs)),
			Operator::Mul => lhs.checked_mul(rhs),
		}
	}
}

#[derive(Clone, Debug)]
struct Monkey {
	items: VecDeque<u64>,
	operation: Operation,
	divisor: u64,
	/// Targets when the worry level is and isn’t divisible by `divisor`.
	targets: [usize; 2],
}

impl Monkey {
	fn target(&self, worry: u64) -> usize {
		if worry % self.divisor == 0 { self.targets[0] } else { self.targets[1] }
	}
}

/// What keeps worry levels manageable after each inspection.
#[derive(Clone, Copy, Debug)]
enum Relief {
	DivideBy(u64),
	/// Keeps divisibility by every monkey’s divisor intact.
	Modulo(u64),
}

impl Relief {
	fn apply(self, worry: u64) -> u64 {
		match self { Relief::DivideBy(d) => worry / d, Relief::Modulo(m) => worry % m }
	}
}


fn gcd(a: u64, b: u64) -> u64 {
	if b == 0 { a } else { gcd(b, a % b) }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum MonkeyBusinessError {
	#[error("worry level overflowed while monkey {monkey} inspected an item in round {round}")]
	Overflow { monkey: usize, round: usize },
	#[error(transparent)]
	Parse(#[from] parsing::MonkeysError),
}

fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: Relief) -> Result<u64, MonkeyBusinessError> {
	let mut inspections = vec![0_u64; monkeys.len()];

	for round in 1..=rounds {
		for i in 0..monkeys.len() {
			let items = std::mem::take(&mut monkeys[i].items);
			inspections[i] += items.len() as u64;
			for worry in items {
				let worry = monkeys[i].operation.apply(worry)
					.ok_or(MonkeyBusinessError::Overflow { monkey: i, round })?;
				let worry = relief.apply(worry);
				let target = monkeys[i].target(worry);
				monkeys[target].items.push_back(worry);
			}
		}
		if round % 1000 == 0 || round == rounds {
			tracing::trace!(round, ?inspections, "monkeys inspected");
		}
	}

	inspections.sort_unstable_by(|l, r| r.cmp(l));
	Ok(inspections.iter().take(2).product())
}


fn input_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, parsing::MonkeysError> {
	parsing::monkeys_from_str(s)
}


pub(crate) fn part1(input: &str) -> Result<u64, MonkeyBusinessError> {
	monkey_business(input_monkeys_from_str(input)?, 20, Relief::DivideBy(3))
}

pub(crate) fn part2(input: &str) -> Result<u64, MonkeyBusinessError> {
	let monkeys = input_monkeys_from_str(input)?;
	let lcm = monkeys.iter().fold(1, |lcm, monkey| lcm / gcd(lcm, monkey.divisor) * monkey.divisor);
	monkey_business(monkeys, 10_000, Relief::Modulo(lcm))
}


pub(crate) mod parsing {
	use std::{collections::VecDeque, num::ParseIntError, str::FromStr};
	use {crate::util::{blocks, Block}, super::{Operand, Operator, Operation, Monkey}};

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum OperationError {
		#[error("expected `new = <operand> <operator> <operand>`")]
		Format,
		#[error("unknown operator {0:?}")]
		Operator(String),
		#[error("invalid operand")]
		Operand(#[from] ParseIntError),
	}

	impl FromStr for Operand {
		type Err = ParseIntError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if s == "old" { Ok(Operand::Old) } else { s.parse().map(Operand::Value) }
		}
	}

	impl FromStr for Operation {
		type Err = OperationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use itertools::Itertools as _;
			let Some(("new", "=", lhs, operator, rhs)) = s.split_whitespace().collect_tuple()
				else { return Err(OperationError::Format) };
			let operator = match operator {
				"+" => Operator::Add,
				"-" => Operator::Sub,
				"*" => Operator::Mul,
				other => return Err(OperationError::Operator(other.to_owned())),
			};
			Ok(Operation(lhs.parse()?, operator, rhs.parse()?))
		}
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum MonkeyError {
		#[error("expected `{0}`")]
		Expected(&'static str),
		#[error("invalid number")]
		Number(#[from] ParseIntError),
		#[error(transparent)]
		Operation(#[from] OperationError),
		#[error("cannot test divisibility by zero")]
		ZeroDivisor,
	}

	fn field<'s>(line: Option<&&'s str>, prefix: &'static str) -> Result<&'s str, MonkeyError> {
		line.and_then(|&line| line.trim().strip_prefix(prefix))
			.map(str::trim)
			.ok_or(MonkeyError::Expected(prefix))
	}

	fn try_monkey_from_block(block: &Block<'_>) -> Result<(usize, Monkey), MonkeyError> {
		let mut lines = block.lines.iter();
		let id = field(lines.next(), "Monkey ")?;
		let id = id.strip_suffix(':').ok_or(MonkeyError::Expected("Monkey <id>:"))?.parse()?;
		let items = field(lines.next(), "Starting items:")?
			.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.map(str::parse::<u64>)
			.collect::<Result<VecDeque<_>, _>>()?;
		let operation = field(lines.next(), "Operation:")?.parse()?;
		let divisor = field(lines.next(), "Test: divisible by ")?.parse::<u64>()?;
		if divisor == 0 { return Err(MonkeyError::ZeroDivisor) }
		let if_true = field(lines.next(), "If true: throw to monkey ")?.parse()?;
		let if_false = field(lines.next(), "If false: throw to monkey ")?.parse()?;
		Ok((id, Monkey { items, operation, divisor, targets: [if_true, if_false] }))
	}

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum MonkeysError {
		#[error("no monkeys")]
		Empty,
		#[error("monkey on line {line}")]
		Monkey { line: usize, #[source] source: MonkeyError },
		#[error("monkey on line {line} has id {found}, expected {expected}")]
		Id { line: usize, expected: usize, found: usize },
		#[error("monkey {monkey} throws to monkey {target}, which is not another monkey")]
		Target { monkey: usize, target: usize },
	}

	pub(super) fn monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		let blocks = blocks(s);
		if blocks.is_empty() { return Err(MonkeysError::Empty) }

		let mut monkeys = Vec::with_capacity(blocks.len());
		for block in &blocks {
			let (id, monkey) = try_monkey_from_block(block)
				.map_err(|e| MonkeysError::Monkey { line: block.line, source: e })?;
			if id != monkeys.len() {
				return Err(MonkeysError::Id { line: block.line, expected: monkeys.len(), found: id })
			}
			monkeys.push(monkey);
		}

		for (id, monkey) in monkeys.iter().enumerate() {
			if let Some(&target) = monkey.targets.iter().find(|&&t| t == id || t >= monkeys.len()) {
				return Err(MonkeysError::Target { monkey: id, target })
			}
		}

		Ok(monkeys)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };
	let monkeys = input_monkeys_from_str(INPUT).unwrap();
	assert_eq!(monkeys[2].operation, Operation(Operand::Old, Operator::Mul, Operand::Old));
	assert_eq!(monkeys[1].items, [54, 65, 75, 74]);
	assert_eq!(monkeys[3].targets, [0, 1]);
	assert_eq!(part1(INPUT).unwrap(), 10605);
	assert_eq!(part2(INPUT).unwrap(), 2713310158);

	assert_eq!(gcd(12, 18), 6);
	assert_eq!("new = 4 - old".parse::<Operation>().unwrap().apply(1), Some(3));
	assert!(matches!(input_monkeys_from_str(&INPUT.replace("Monkey 2:", "Monkey 5:")),
		Err(parsing::MonkeysError::Id { expected: 2, found: 5, .. })));
	assert!(matches!(input_monkeys_from_str(&INPUT.replace("throw to monkey 3", "throw to monkey 4")),
		Err(parsing::MonkeysError::Target { monkey: 0, target: 4 })));

	// Squaring outgrows what dividing by 3 takes off
	const RUNAWAY: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 97
		  Operation: new = old * old
		  Test: divisible by 2
		    If true: throw to monkey 1
		    If false: throw to monkey 1

		Monkey 1:
		  Starting items:
		  Operation: new = old + 0
		  Test: divisible by 3
		    If true: throw to monkey 0
		    If false: throw to monkey 0
	" };
	assert!(matches!(part1(RUNAWAY), Err(MonkeyBusinessError::Overflow { monkey: 0, round: 5 })));
	assert!(matches!(part1("Monkey 0:\n"), Err(MonkeyBusinessError::Parse(_))));
}
