// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub(crate) enum MarkerError {
	#[error("invalid character {found:?} at position {position}")]
	InvalidChar { position: usize, found: char },
	#[error("no run of {0} distinct characters")]
	NotFound(usize),
}


/// Returns the number of characters read up to and including the first run of `len` distinct ones.
fn find_marker(buffer: &str, len: usize) -> Result<usize, MarkerError> {
	let buffer = buffer.trim_end().as_bytes();
	if let Some(position) = buffer.iter().position(|b| !b.is_ascii_lowercase()) {
		return Err(MarkerError::InvalidChar { position: position + 1, found: buffer[position] as char })
	}

	let mut counts = [0_u16; 26];
	let mut distinct = 0;
	for (i, &b) in buffer.iter().enumerate() {
		let entering = &mut counts[(b - b'a') as usize];
		if *entering == 0 { distinct += 1 }
		*entering += 1;

		if i >= len {
			let leaving = &mut counts[(buffer[i - len] - b'a') as usize];
			*leaving -= 1;
			if *leaving == 0 { distinct -= 1 }
		}

		if distinct == len { return Ok(i + 1) }
	}

	Err(MarkerError::NotFound(len))
}


pub(crate) fn part1(input: &str) -> Result<usize, MarkerError> {
	find_marker(input, 4)
}

pub(crate) fn part2(input: &str) -> Result<usize, MarkerError> {
	find_marker(input, 14)
}


#[cfg(test)]
mod tests {
	use {super::*, test_case::test_case};

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb" => (7, 19))]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz" => (5, 23))]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg" => (6, 23))]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg" => (10, 29))]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw\n" => (11, 26))]
	fn markers(buffer: &str) -> (usize, usize) {
		(part1(buffer).unwrap(), part2(buffer).unwrap())
	}

	#[test]
	fn errors() {
		assert_eq!(part1("abcabc"), Err(MarkerError::NotFound(4)));
		assert_eq!(part1("abCd"), Err(MarkerError::InvalidChar { position: 3, found: 'C' }));
		assert_eq!(find_marker("abcd", 4), Ok(4));
	}
}
