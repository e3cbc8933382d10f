// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13];

use {std::{num::NonZeroUsize, path::PathBuf}, anyhow::Context as _, clap::{Parser, Subcommand}};


const DEFAULT_INPUTS: &str = "inputs";


#[derive(Parser, Debug)]
#[command(name = "aoc2022", about = "Advent of Code 2022 solutions")]
struct Cli {
	#[command(subcommand)]
	cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Solve both parts of the given days (all of them by default)
	Solve {
		#[arg(value_name = "DAY")]
		days: Vec<u8>,
		/// Directory holding `dayNN.txt` input files
		#[arg(short, long, default_value = DEFAULT_INPUTS)]
		inputs: PathBuf,
	},

	/// Count the cells visited by the tail of ropes of the given lengths
	Rope {
		#[arg(short, long, value_delimiter = ',', default_values = ["2", "10"])]
		knots: Vec<NonZeroUsize>,
		file: PathBuf,
	},
}


fn solve_days(days: &[u8], inputs: &std::path::Path) -> anyhow::Result<()> {
	let days = if days.is_empty() { DAYS } else { days };
	for &day in days {
		let input = util::read_input(inputs, day)?;
		let [part1, part2] = solve(day, &input).with_context(|| format!("day {day}"))?;
		let sep = if part2.contains('\n') { "\n" } else { " " };
		println!("Day {day}; part 1: {part1}, part 2:{sep}{part2}");
	}
	Ok(())
}

fn run_ropes(knots: &[NonZeroUsize], file: &std::path::Path) -> anyhow::Result<()> {
	let input = std::fs::read_to_string(file)
		.with_context(|| format!("reading motions from {}", file.display()))?;
	let motions = day09::input_motions_from_str(&input)?;
	for &n in knots {
		println!("{n} knots: {}", day09::run(motions.iter().copied(), n));
	}
	Ok(())
}


fn main() -> anyhow::Result<()> {
	use tracing_subscriber::EnvFilter;
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	match Cli::parse().cmd {
		None => solve_days(&[], &PathBuf::from(DEFAULT_INPUTS)),
		Some(Commands::Solve { days, inputs }) => solve_days(&days, &inputs),
		Some(Commands::Rope { knots, file }) => run_ropes(&knots, &file),
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn knots(args: &[&str]) -> Result<Vec<usize>, clap::Error> {
		let cli = Cli::try_parse_from(["aoc2022", "rope"].into_iter()
			.chain(args.iter().copied())
			.chain(["motions.txt"]))?;
		match cli.cmd {
			Some(Commands::Rope { knots, .. }) => Ok(knots.into_iter().map(NonZeroUsize::get).collect()),
			other => panic!("expected the rope command, got {other:?}"),
		}
	}

	#[test]
	fn rope_lengths() {
		assert_eq!(knots(&[]).unwrap(), [2, 10]);
		assert_eq!(knots(&["-k", "1,3"]).unwrap(), [1, 3]);
		// Rejected while parsing arguments, before any rope runs
		assert!(knots(&["-k", "2,0"]).is_err());
		assert!(knots(&["--knots", "x"]).is_err());
	}

	#[test]
	fn default_inputs() {
		let Some(Commands::Solve { days, inputs }) = Cli::try_parse_from(["aoc2022", "solve"]).unwrap().cmd
			else { panic!("expected the solve command") };
		assert!(days.is_empty());
		assert_eq!(inputs, PathBuf::from(DEFAULT_INPUTS));
	}
}
