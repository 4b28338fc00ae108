#![doc = include_str!("../puzzles/05.md")]

use std::fmt;

use advent_of_code_2022::{
    debugln,
    helpers::{parse, slice_pair_mut},
    Error, Result,
};

/// Width of one stack column in the drawing, separator included.
const COLUMN_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Crate(pub char);

impl fmt::Display for Crate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Bottom crate first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Stack(Vec<Crate>);

impl Stack {
    #[inline]
    pub fn height(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn top(&self) -> Option<Crate> {
        self.0.last().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crane {
    /// Moves one crate at a time.
    CrateMover9000,
    /// Moves all the crates of a step at once.
    CrateMover9001,
}

impl Crane {
    fn lift(self, from: &mut Stack, to: &mut Stack, count: usize) {
        let start = from.height() - count;
        let lifted = from.0.drain(start..);
        match self {
            Crane::CrateMover9000 => to.0.extend(lifted.rev()),
            Crane::CrateMover9001 => to.0.extend(lifted),
        }
    }
}

/// One rearrangement step. Stacks are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} from {} to {}", self.count, self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Ship {
    stacks: Vec<Stack>,
}

impl Ship {
    /// Parses the drawing of the stacks, the last line being the stack
    /// numbers.
    pub fn from_drawing(lines: &[&str]) -> Result<Self> {
        let Some((numbers, rows)) = lines.split_last() else {
            return Err(Error::InvalidInput("missing stack drawing".to_owned()));
        };
        let n_stacks = numbers.split_whitespace().count();
        let mut stacks = vec![Stack::default(); n_stacks];

        // Bottom row first, so each stack is filled from the ground up.
        for (index, row) in rows.iter().enumerate().rev() {
            for (column, label) in row.chars().skip(1).step_by(COLUMN_WIDTH).enumerate() {
                if label.is_whitespace() {
                    continue;
                }
                let stack = stacks
                    .get_mut(column)
                    .ok_or_else(|| Error::parse(index, "crate outside of any stack"))?;
                stack.0.push(Crate(label));
            }
        }

        debugln!("{n_stacks} stacks");
        Ok(Self { stacks })
    }

    pub fn apply(&mut self, crane: Crane, m: Move) -> Result<()> {
        let invalid = || Error::InvalidInput(format!("{m}: no such pair of stacks"));
        let from = m.from.checked_sub(1).ok_or_else(invalid)?;
        let to = m.to.checked_sub(1).ok_or_else(invalid)?;
        let (from, to) = slice_pair_mut(&mut self.stacks, from, to).ok_or_else(invalid)?;

        if from.height() < m.count {
            return Err(Error::InvalidInput(format!(
                "{m}: stack only holds {} crates",
                from.height()
            )));
        }
        crane.lift(from, to, m.count);
        Ok(())
    }

    pub fn top_of_each_stack(&self) -> Result<String> {
        self.stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| {
                stack
                    .top()
                    .map(|krate| krate.0)
                    .ok_or_else(|| Error::InvalidInput(format!("stack {} is empty", i + 1)))
            })
            .collect()
    }
}

fn rearrange(input: &str, crane: Crane) -> Result<String> {
    let lines: Vec<&str> = input.lines().map(|line| line.trim_end()).collect();
    let Some(blank) = lines.iter().position(|line| line.is_empty()) else {
        return Err(Error::InvalidInput(
            "expected a blank line after the drawing".to_owned(),
        ));
    };

    let mut ship = Ship::from_drawing(&lines[..blank])?;
    debugln!("BEGIN:\n{ship}");

    for (index, line) in lines.iter().enumerate().skip(blank + 1) {
        if line.is_empty() {
            continue;
        }
        let m = parse::parse_line(index, line, Move::parser())?;
        ship.apply(crane, m)?;
        debugln!("{m}\n{ship}");
    }

    ship.top_of_each_stack()
}

pub fn part_one(input: &str) -> Result<String> {
    rearrange(input, Crane::CrateMover9000)
}

pub fn part_two(input: &str) -> Result<String> {
    rearrange(input, Crane::CrateMover9001)
}

fn main() {
    let input = &advent_of_code_2022::read_input(5);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}

mod parsing {
    use super::*;

    use combine::{parser::char::string, ParseError, Parser, Stream};

    impl Move {
        // "move 3 from 1 to 2"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                string("move "),
                parse::decimal_integer(),
                string(" from "),
                parse::decimal_integer(),
                string(" to "),
                parse::decimal_integer(),
            )
                .map(|(_, count, _, from, _, to)| Move { count, from, to })
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tallest = self.stacks.iter().map(Stack::height).max().unwrap_or(0);

        for height in (0..tallest).rev() {
            let row: Vec<String> = self
                .stacks
                .iter()
                .map(|stack| match stack.0.get(height) {
                    Some(krate) => krate.to_string(),
                    None => "   ".to_owned(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }

        let numbers: Vec<String> = (1..=self.stacks.len()).map(|n| format!("{n:^3}")).collect();
        writeln!(f, "{}", numbers.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2022::read_file("examples", 5);
        assert_eq!(part_one(&input).ok(), Some("CMZ".to_owned()));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2022::read_file("examples", 5);
        assert_eq!(part_two(&input).ok(), Some("MCD".to_owned()));
    }

    #[test]
    fn test_drawing() {
        let input = advent_of_code_2022::read_file("examples", 5);
        let lines: Vec<&str> = input.lines().take(4).collect();
        let ship = Ship::from_drawing(&lines).unwrap();
        let heights: Vec<usize> = ship.stacks.iter().map(Stack::height).collect();
        assert_eq!(heights, [2, 3, 1]);
        assert_eq!(ship.top_of_each_stack().ok(), Some("NDP".to_owned()));
        assert_eq!(ship.to_string(), lines.join("\n") + "\n");
    }

    #[test]
    fn test_drawing_without_trailing_spaces() {
        let ship = Ship::from_drawing(&["    [D]", "[N] [C]", " 1   2"]).unwrap();
        assert_eq!(ship.top_of_each_stack().ok(), Some("ND".to_owned()));
    }

    #[test]
    fn test_bad_moves() {
        let input = "[A]\n 1 \n\nmove 2 from 1 to 1\n";
        assert!(matches!(part_one(input), Err(Error::InvalidInput(_))));

        let input = "[A]    \n 1   2 \n\nmove 2 from 1 to 2\n";
        assert!(matches!(part_one(input), Err(Error::InvalidInput(_))));

        let input = "[A]    \n 1   2 \n\nmove 1 from 1 to 2\n";
        assert!(matches!(part_one(input), Err(Error::InvalidInput(_))));

        let input = "[A]    \n 1   2 \n\nmove one from 1 to 2\n";
        assert!(matches!(part_one(input), Err(Error::Parse { line: 4, .. })));
    }
}
