// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


#[derive(Default, Debug)]
struct Dir {
	parent: Option<usize>,
	dirs: HashMap<String, usize>,
	files: HashMap<String, u64>,
}

/// Directory tree, indexed by directory; index 0 is the root.
///
/// Directories are only ever appended, so every directory comes after its parent.
#[derive(Debug)]
struct FileSystem(Vec<Dir>);

impl FileSystem {
	const ROOT: usize = 0;

	fn new() -> FileSystem {
		FileSystem(vec![Dir::default()])
	}

	fn ensure_dir(&mut self, cwd: usize, name: &str) -> usize {
		if let Some(&dir) = self.0[cwd].dirs.get(name) { return dir }
		let dir = self.0.len();
		self.0.push(Dir { parent: Some(cwd), ..Dir::default() });
		self.0[cwd].dirs.insert(name.to_owned(), dir);
		dir
	}

	fn ensure_file(&mut self, cwd: usize, name: &str, size: u64) {
		self.0[cwd].files.entry(name.to_owned()).or_insert(size);
	}

	/// Total size of every directory, including everything nested in it.
	fn dir_sizes(&self) -> Vec<u64> {
		let mut sizes = self.0.iter().map(|dir| dir.files.values().sum()).collect::<Vec<u64>>();
		for (i, dir) in self.0.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { sizes[parent] += sizes[i] }
		}
		sizes
	}
}


fn input_file_system_from_str(s: &str) -> Result<FileSystem, parsing::TranscriptError> {
	s.parse()
}


const SMALL_DIR_SIZE: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;

pub(crate) fn part1(input: &str) -> Result<u64, parsing::TranscriptError> {
	let sizes = input_file_system_from_str(input)?.dir_sizes();
	Ok(sizes[FileSystem::ROOT + 1..].iter().filter(|&&size| size <= SMALL_DIR_SIZE).sum())
}

pub(crate) fn part2(input: &str) -> Result<u64, parsing::TranscriptError> {
	let sizes = input_file_system_from_str(input)?.dir_sizes();
	let used = sizes[FileSystem::ROOT];
	let to_free = (used + NEEDED_SPACE).saturating_sub(DISK_SIZE);
	tracing::debug!(used, to_free, "disk usage");
	// The root always qualifies, so there is a minimum
	Ok(sizes.into_iter().filter(|&size| size >= to_free).min().unwrap_or(used))
}


pub(crate) mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::FileSystem;

	#[derive(thiserror::Error, Debug)]
	pub(crate) enum LineError {
		#[error("unknown command {0:?}")]
		Command(String),
		#[error("invalid file size")]
		Size(#[from] ParseIntError),
		#[error("expected `dir <name>` or `<size> <name>`")]
		Format,
	}

	#[derive(thiserror::Error, Debug)]
	#[error("line {line}")]
	pub(crate) struct TranscriptError {
		line: usize,
		#[source]
		source: LineError,
	}

	impl FromStr for FileSystem {
		type Err = TranscriptError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut fs = FileSystem::new();
			let mut cwd = FileSystem::ROOT;

			for (l, line) in s.lines().enumerate() {
				let mut apply = || -> Result<(), LineError> {
					if let Some(command) = line.strip_prefix("$ ") {
						match command.split_once(' ') {
							None if command == "ls" => (),
							Some(("cd", "/")) => cwd = FileSystem::ROOT,
							Some(("cd", "..")) => cwd = fs.0[cwd].parent.unwrap_or(FileSystem::ROOT),
							Some(("cd", name)) => cwd = fs.ensure_dir(cwd, name),
							_ => return Err(LineError::Command(command.to_owned())),
						}
					} else if let Some(name) = line.strip_prefix("dir ") {
						fs.ensure_dir(cwd, name);
					} else if !line.is_empty() {
						let (size, name) = line.split_once(' ').ok_or(LineError::Format)?;
						fs.ensure_file(cwd, name, size.parse()?);
					}
					Ok(())
				};
				apply().map_err(|e| TranscriptError { line: l + 1, source: e })?;
			}

			Ok(fs)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };
	assert_eq!(part1(INPUT).unwrap(), 95437);
	assert_eq!(part2(INPUT).unwrap(), 24933642);

	// Listing twice doesn’t count twice, and `cd ..` at the root stays there
	let relisted = "$ cd ..\n$ ls\n10 a\n$ ls\n10 a\n$ cd x\n5 b\n";
	assert_eq!(input_file_system_from_str(relisted).unwrap().dir_sizes(), [15, 5]);
	assert!(part1("$ rm -rf /").is_err());
}
