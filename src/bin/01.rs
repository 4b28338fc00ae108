#![doc = include_str!("../puzzles/01.md")]

use advent_of_code_2022::{debugln, helpers::Itertools as _, Error, Result};

const TOP_ELVES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Elf {
    total_calories: u32,
}

impl Elf {
    /// Builds an elf from its numbered inventory lines.
    fn from_lines<'a>(lines: impl IntoIterator<Item = (usize, &'a str)>) -> Result<Self> {
        let mut total_calories: u32 = 0;
        for (index, line) in lines {
            let calories: u32 = line.trim().parse().map_err(|err| Error::parse(index, err))?;
            total_calories = total_calories.checked_add(calories).ok_or_else(|| {
                Error::InvalidInput(format!("calorie total overflows at line {}", index + 1))
            })?;
        }
        Ok(Self { total_calories })
    }
}

fn elves(input: &str) -> Result<Vec<Elf>> {
    let inventories = input
        .lines()
        .enumerate()
        .split_by(|(_, line)| line.trim().is_empty());
    let elves: Result<Vec<Elf>> = (&inventories).into_iter().map(Elf::from_lines).collect();
    elves
}

/// Returns the total calories carried by the elf with the highest sum of
/// calories in their snacks.
pub fn part_one(input: &str) -> Result<u32> {
    elves(input)?
        .into_iter()
        .max()
        .map(|elf| elf.total_calories)
        .ok_or(Error::NoSolution)
}

/// Returns the total calories carried by the three elves with the highest sum
/// of calories in their snacks.
pub fn part_two(input: &str) -> Result<u32> {
    let elves = elves(input)?;
    if elves.is_empty() {
        return Err(Error::NoSolution);
    }

    let top = elves.into_iter().max_n(TOP_ELVES);
    debugln!("top elves: {top:?}");

    Ok(top.into_iter().map(|elf| elf.total_calories).sum())
}

fn main() {
    let input = &advent_of_code_2022::read_input(1);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2022::read_file("examples", 1);
        assert_eq!(part_one(&input).ok(), Some(24000));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2022::read_file("examples", 1);
        assert_eq!(part_two(&input).ok(), Some(45000));
    }

    #[test]
    fn test_fewer_than_three_elves() {
        assert_eq!(part_two("1\n2\n\n4\n").ok(), Some(7));
    }

    #[test]
    fn test_bad_calories() {
        let err = part_one("100\n\n1x0\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_calorie_overflow() {
        let err = part_one("4294967295\n1\n").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(part_one("4294967294\n1\n").ok(), Some(u32::MAX));
    }

    #[test]
    fn test_no_elves() {
        assert!(matches!(part_one(""), Err(Error::NoSolution)));
        assert!(matches!(part_two(""), Err(Error::NoSolution)));
    }
}
