#![doc = include_str!("../puzzles/06.md")]

use advent_of_code_2022::{debugln, Error, Result};

const START_OF_PACKET_LEN: usize = 4;
const START_OF_MESSAGE_LEN: usize = 14;

/// Returns how many bytes are read once the first run of `marker_len`
/// distinct bytes is complete.
fn find_marker(stream: &[u8], marker_len: usize) -> Option<usize> {
    // Occurrences of each byte in the current window.
    let mut counts = [0u16; 256];
    let mut distinct = 0;

    for (i, &byte) in stream.iter().enumerate() {
        if counts[byte as usize] == 0 {
            distinct += 1;
        }
        counts[byte as usize] += 1;

        if i >= marker_len {
            let leaving = stream[i - marker_len] as usize;
            counts[leaving] -= 1;
            if counts[leaving] == 0 {
                distinct -= 1;
            }
        }

        if distinct == marker_len {
            let marker = String::from_utf8_lossy(&stream[i + 1 - marker_len..=i]);
            debugln!("marker {marker:?} ends at {}", i + 1);
            return Some(i + 1);
        }
    }

    None
}

fn solve(input: &str, marker_len: usize) -> Result<usize> {
    find_marker(input.trim().as_bytes(), marker_len).ok_or(Error::NoSolution)
}

pub fn part_one(input: &str) -> Result<usize> {
    solve(input, START_OF_PACKET_LEN)
}

pub fn part_two(input: &str) -> Result<usize> {
    solve(input, START_OF_MESSAGE_LEN)
}

fn main() {
    let input = &advent_of_code_2022::read_input(6);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2022::read_file("examples", 6);
        assert_eq!(part_one(&input).ok(), Some(7));

        assert_eq!(part_one("bvwbjplbgvbhsrlpgdmjqwftvncz").ok(), Some(5));
        assert_eq!(part_one("nppdvjthqldpwncqszvftbrmjlhg").ok(), Some(6));
        assert_eq!(part_one("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg").ok(), Some(10));
        assert_eq!(part_one("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw").ok(), Some(11));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2022::read_file("examples", 6);
        assert_eq!(part_two(&input).ok(), Some(19));

        assert_eq!(part_two("bvwbjplbgvbhsrlpgdmjqwftvncz").ok(), Some(23));
        assert_eq!(part_two("nppdvjthqldpwncqszvftbrmjlhg").ok(), Some(23));
        assert_eq!(part_two("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg").ok(), Some(29));
        assert_eq!(part_two("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw").ok(), Some(26));
    }

    #[test]
    fn test_no_marker() {
        assert!(matches!(part_one("aabbaabb"), Err(Error::NoSolution)));
        assert!(matches!(part_one("abc"), Err(Error::NoSolution)));
        assert_eq!(part_one("abcd").ok(), Some(4));
    }
}
