#![doc = include_str!("../puzzles/02.md")]

use advent_of_code_2022::{debugln, helpers::parse, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

/// What the second column of a strategy line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    Shape(Shape),
    Outcome(Outcome),
}

impl Shape {
    const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// The shape this one defeats.
    pub fn defeats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape to play against `theirs` to get `outcome`.
    pub fn for_outcome(theirs: Shape, outcome: Outcome) -> Shape {
        Self::ALL
            .into_iter()
            .find(|&mine| Outcome::of(mine, theirs) == outcome)
            .unwrap_or_else(|| unreachable!("every outcome is reachable"))
    }

    pub fn score(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }
}

impl Outcome {
    pub fn of(mine: Shape, theirs: Shape) -> Outcome {
        if mine.defeats() == theirs {
            Outcome::Win
        } else if theirs.defeats() == mine {
            Outcome::Loss
        } else {
            Outcome::Draw
        }
    }

    pub fn score(self) -> u32 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }
}

/// One line of the strategy guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Round {
    theirs: Shape,
    mine: Shape,
}

impl Round {
    pub fn new(theirs: Shape, response: Response) -> Self {
        let mine = match response {
            Response::Shape(shape) => shape,
            Response::Outcome(outcome) => Shape::for_outcome(theirs, outcome),
        };
        Self { theirs, mine }
    }

    pub fn score(&self) -> u32 {
        let outcome = Outcome::of(self.mine, self.theirs);
        let score = self.mine.score() + outcome.score();
        debugln!("{:?} vs. {:?}: {outcome:?}, {score}", self.mine, self.theirs);
        score
    }
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{ParseError, Parser, Stream};

    fn column<Input, T>(codes: [(char, T); 3]) -> impl Parser<Input, Output = T>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        T: Copy,
    {
        let [(first, x), (second, y), (third, z)] = codes;
        c::choice((
            c::token(first).map(move |_| x),
            c::token(second).map(move |_| y),
            c::token(third).map(move |_| z),
        ))
    }

    impl Shape {
        // "A" | "B" | "C"
        pub fn opponent_parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            column([('A', Shape::Rock), ('B', Shape::Paper), ('C', Shape::Scissors)])
        }
    }

    impl Response {
        // "X" | "Y" | "Z" as shapes
        pub fn shape_parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            column([('X', Shape::Rock), ('Y', Shape::Paper), ('Z', Shape::Scissors)])
                .map(Response::Shape)
        }

        // "X" | "Y" | "Z" as outcomes
        pub fn outcome_parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            column([('X', Outcome::Loss), ('Y', Outcome::Draw), ('Z', Outcome::Win)])
                .map(Response::Outcome)
        }
    }

    impl Round {
        // "A Y"
        pub fn parser<Input, R>(response: R) -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            R: Parser<Input, Output = Response>,
        {
            (Shape::opponent_parser(), c::token(' '), response)
                .map(|(theirs, _, response)| Round::new(theirs, response))
        }
    }
}

fn total_score(input: &str, second_column_is_outcome: bool) -> Result<u32> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| -> Result<u32> {
            let line = line.trim_end();
            let round = if second_column_is_outcome {
                parse::parse_line(index, line, Round::parser(Response::outcome_parser()))?
            } else {
                parse::parse_line(index, line, Round::parser(Response::shape_parser()))?
            };
            Ok(round.score())
        })
        .sum()
}

pub fn part_one(input: &str) -> Result<u32> {
    total_score(input, false)
}

pub fn part_two(input: &str) -> Result<u32> {
    total_score(input, true)
}

fn main() {
    let input = &advent_of_code_2022::read_input(2);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}
