/*
 * Shared runner code for the daily solutions.
 * Prefer `./helpers.rs` if you want to extract code from your solutions.
 */
use std::env;
use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

pub mod error;
pub mod helpers;

pub use error::{Error, Result};

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Prints a line to stderr, but only in debug builds.
#[macro_export]
macro_rules! debugln {
    ($($tt:tt)*) => {
        if cfg!(debug_assertions) {
            eprintln!($($tt)*)
        }
    };
}

/// Runs one part of a solution and prints its labeled answer.
///
/// Exits the process with code 1 if the part fails.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        if let Err(err) = $crate::print_result($part, $solver, $input) {
            eprintln!("Part {}: error: {}", $part, err);
            std::process::exit(1);
        }
    }};
}

#[doc(hidden)]
pub fn print_result<T: Display>(
    part: u8,
    func: impl FnOnce(&str) -> Result<T>,
    input: &str,
) -> Result<()> {
    let timer = std::time::Instant::now();
    let result = func(input)?;
    let elapsed = timer.elapsed();
    println!(
        "{ANSI_BOLD}Part {part}:{ANSI_RESET} {result} {ANSI_ITALIC}(elapsed: {elapsed:.2?}){ANSI_RESET}"
    );
    Ok(())
}

/// Reads `src/<folder>/<day>.txt` relative to the current directory.
pub fn read_file(folder: &str, day: u8) -> String {
    let filepath = input_path(folder, day);
    fs::read_to_string(&filepath)
        .unwrap_or_else(|err| panic!("could not open {}: {err}", filepath.display()))
}

fn input_path(folder: &str, day: u8) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_default();
    cwd.join("src").join(folder).join(format!("{day:02}.txt"))
}

/// Where a solution binary takes its puzzle input from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// `src/inputs/DD.txt`
    Inputs,
    /// `src/examples/DD.txt`
    Example,
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// Parses the command line of a solution binary:
    ///
    /// ```text
    /// DD [--example] [PATH | -]
    /// ```
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let example = args.contains("--example");
        let path: Option<PathBuf> = args
            .opt_free_from_str()
            .map_err(|err| Error::InvalidInput(err.to_string()))?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::InvalidInput(format!(
                "unexpected arguments: {rest:?}"
            )));
        }

        Ok(match (example, path) {
            (true, None) => Self::Example,
            (true, Some(_)) => {
                return Err(Error::InvalidInput(
                    "--example cannot be combined with an input path".to_owned(),
                ))
            }
            (false, None) => Self::Inputs,
            (false, Some(path)) if path.as_os_str() == "-" => Self::Stdin,
            (false, Some(path)) => Self::Path(path),
        })
    }

    pub fn read(&self, day: u8) -> Result<String> {
        let contents = match self {
            Self::Inputs => fs::read_to_string(input_path("inputs", day))?,
            Self::Example => fs::read_to_string(input_path("examples", day))?,
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
            Self::Path(path) => fs::read_to_string(path)?,
        };
        Ok(contents)
    }
}

/// Loads the puzzle input for `day` as selected on the command line.
///
/// Exits the process with code 1 if the input can't be loaded.
pub fn read_input(day: u8) -> String {
    let loaded = InputSource::from_args(pico_args::Arguments::from_env())
        .and_then(|source| source.read(day));
    match loaded {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Day {day:02}: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn source(args: &[&str]) -> Result<InputSource> {
        let args = args.iter().map(OsString::from).collect();
        InputSource::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn input_source_from_args() {
        assert_eq!(source(&[]).unwrap(), InputSource::Inputs);
        assert_eq!(source(&["--example"]).unwrap(), InputSource::Example);
        assert_eq!(source(&["-"]).unwrap(), InputSource::Stdin);
        assert_eq!(
            source(&["in.txt"]).unwrap(),
            InputSource::Path("in.txt".into())
        );
    }

    #[test]
    fn input_source_rejects_extra_args() {
        assert!(matches!(
            source(&["a.txt", "b.txt"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            source(&["--example", "a.txt"]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn print_result_propagates_failure() {
        let result = print_result(1, |_| Err::<u32, _>(Error::NoSolution), "");
        assert!(matches!(result, Err(Error::NoSolution)));
    }
}
