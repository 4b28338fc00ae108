/*
 * Runs every solved day in release mode and reports the total time spent.
 */
use std::process::{Command, ExitCode};

use advent_of_code_2022::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

const DAYS: std::ops::RangeInclusive<u8> = 1..=8;

/// Pulls the `(elapsed: 1.23ms)` timings out of a solution's output.
fn extract_microseconds(output: &str) -> f64 {
    output
        .lines()
        .filter_map(|line| {
            let start = line.find("(elapsed: ")? + "(elapsed: ".len();
            let end = start + line[start..].find(')')?;
            parse_duration(&line[start..end])
        })
        .sum()
}

fn parse_duration(text: &str) -> Option<f64> {
    let split = text.find(|c: char| c.is_alphabetic() || c == 'µ')?;
    let (value, unit) = text.split_at(split);
    let value: f64 = value.parse().ok()?;
    let scale = match unit {
        "ns" => 0.001,
        "µs" => 1.0,
        "ms" => 1_000.0,
        "s" => 1_000_000.0,
        _ => return None,
    };
    Some(value * scale)
}

fn main() -> ExitCode {
    let mut total_micros = 0.0;
    let mut failed = false;

    for day in DAYS {
        let day = format!("{day:02}");
        let output = Command::new("cargo")
            .args(["run", "--release", "--bin", &day])
            .output();

        println!("{ANSI_BOLD}Day {day}{ANSI_RESET}");
        println!("------");

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                eprintln!("failed to run day {day}: {err}");
                failed = true;
                continue;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        print!("{stdout}");
        if !output.status.success() {
            eprintln!("{}", stderr.lines().last().unwrap_or_default());
            failed = true;
        }
        println!();

        total_micros += extract_microseconds(&stdout);
    }

    println!(
        "{ANSI_BOLD}Total:{ANSI_RESET} {ANSI_ITALIC}{:.2}ms{ANSI_RESET}",
        total_micros / 1000.0
    );

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
