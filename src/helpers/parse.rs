use combine::{easy, EasyParser, ParseError, Parser, Stream};

use crate::Error;

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, failing if anything is left over.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Like [`from_str`], for the line at 0-based `index` of the input, with the
/// failure turned into an [`Error::Parse`].
pub fn parse_line<'a, P>(index: usize, line: &'a str, parser: P) -> crate::Result<P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    from_str(line, parser).map_err(|err| {
        let err = err.map_position(|p| p.translate_position(line));
        Error::parse(index, format!("{line:?}: {err}").trim_end())
    })
}

/// Parses a run of ASCII digits into any integer type.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    combine::from_str(combine::many1::<String, _, _>(combine::parser::char::digit()))
}
