#![doc = include_str!("../puzzles/04.md")]

use std::{fmt, ops::RangeInclusive};

use advent_of_code_2022::{debugln, helpers::parse, Result};

/// The sections one elf has to clean.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment {
    sections: RangeInclusive<u32>,
}

impl Assignment {
    pub fn new(first: u32, last: u32) -> Self {
        Self {
            sections: first..=last,
        }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.sections.start() <= other.sections.end()
            && other.sections.start() <= self.sections.end()
    }

    pub fn contains(&self, other: &Self) -> bool {
        self.sections.contains(other.sections.start())
            && self.sections.contains(other.sections.end())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sections.start(), self.sections.end())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair(Assignment, Assignment);

impl Pair {
    pub fn is_redundant(&self) -> bool {
        self.0.contains(&self.1) || self.1.contains(&self.0)
    }

    pub fn overlaps(&self) -> bool {
        self.0.overlaps(&self.1)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{ParseError, Parser, Stream};

    impl Assignment {
        // "2-4"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                parse::decimal_integer(),
                c::token('-'),
                parse::decimal_integer(),
            )
                .map(|(first, _, last)| Assignment::new(first, last))
        }
    }

    impl Pair {
        // "2-4,6-8"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (Assignment::parser(), c::token(','), Assignment::parser())
                .map(|(a, _, b)| Pair(a, b))
        }
    }
}

fn count_pairs(input: &str, keep: impl Fn(&Pair) -> bool) -> Result<usize> {
    let mut count = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let pair = parse::parse_line(index, line, Pair::parser())?;
        if keep(&pair) {
            debugln!("{pair}");
            count += 1;
        }
    }
    Ok(count)
}

pub fn part_one(input: &str) -> Result<usize> {
    count_pairs(input, Pair::is_redundant)
}

pub fn part_two(input: &str) -> Result<usize> {
    count_pairs(input, Pair::overlaps)
}

fn main() {
    let input = &advent_of_code_2022::read_input(4);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use advent_of_code_2022::Error;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2022::read_file("examples", 4);
        assert_eq!(part_one(&input).ok(), Some(2));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2022::read_file("examples", 4);
        assert_eq!(part_two(&input).ok(), Some(4));
    }

    #[test]
    fn test_touching_ranges_overlap() {
        let a = Assignment::new(5, 7);
        let b = Assignment::new(7, 9);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.contains(&b));
        assert!(Assignment::new(4, 6).contains(&Assignment::new(6, 6)));
    }

    #[test]
    fn test_bad_pair() {
        assert!(matches!(
            part_one("1-2,3-4\n1-2;3-4\n"),
            Err(Error::Parse { line: 2, .. })
        ));
    }
}
