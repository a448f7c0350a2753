use std::fs;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use tracing_subscriber::prelude::*;

/// Install the tracing subscriber used by every day.  `RUST_LOG`
/// overrides `default_filter`.
pub fn init_logging(default_filter: &str) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Reads the puzzle input from the file named by the first
/// command-line argument, or from stdin if there isn't one.
pub fn read_input() -> Result<String, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::debug!("reading input from {}", path);
            fs::read_to_string(&path).map_err(|e| format!("failed to read {}: {}", path, e))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("failed to read input: {}", e))?;
            Ok(input)
        }
    }
}

/// Splits `text` on `delim`, dropping pieces which are empty or all
/// whitespace.
pub fn split_nonblank<'a>(text: &'a str, delim: &str) -> Vec<&'a str> {
    text.split(delim)
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

pub fn read_lines<P: AsRef<Path>>(path: P, delim: &str) -> Result<Vec<String>, String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(split_nonblank(&text, delim)
        .into_iter()
        .map(String::from)
        .collect())
}

pub fn str_to_int(s: &str) -> Result<i64, String> {
    s.trim()
        .parse::<i64>()
        .map_err(|e| format!("expected an integer, got '{}': {}", s, e))
}

pub fn sum_int(nums: &[i64]) -> i64 {
    nums.iter().sum()
}

/// Largest of `nums`, but never less than zero.
pub fn max_int(nums: &[i64]) -> i64 {
    nums.iter().copied().fold(0, i64::max)
}

#[test]
fn test_split_nonblank() {
    assert_eq!(split_nonblank("1\n2\n\n3\n", "\n"), vec!["1", "2", "3"]);
    assert_eq!(split_nonblank("3,4,3\n", ","), vec!["3", "4", "3\n"]);
    assert_eq!(split_nonblank("a\n\nb\n\n  \n", "\n\n"), vec!["a", "b"]);
    assert!(split_nonblank("", "\n").is_empty());
}

#[test]
fn test_read_lines() {
    let path = std::env::temp_dir().join(format!("advent2021-read-lines-{}", std::process::id()));
    fs::write(&path, "199\n200\n\n208\n").expect("temp file should be writable");
    let lines = read_lines(&path, "\n");
    fs::remove_file(&path).expect("temp file should be removable");
    assert_eq!(lines, Ok(vec!["199".to_string(), "200".to_string(), "208".to_string()]));
    assert!(read_lines("/nonexistent/advent2021/input.txt", "\n").is_err());
}

#[test]
fn test_str_to_int() {
    assert_eq!(str_to_int("42"), Ok(42));
    assert_eq!(str_to_int("-7"), Ok(-7));
    assert_eq!(str_to_int("2\n"), Ok(2));
    assert!(str_to_int("forty").is_err());
    assert!(str_to_int("").is_err());
}

#[test]
fn test_sum_and_max() {
    assert_eq!(sum_int(&[]), 0);
    assert_eq!(sum_int(&[1, 2, 3]), 6);
    assert_eq!(max_int(&[]), 0);
    assert_eq!(max_int(&[3, 9, 2]), 9);
    assert_eq!(max_int(&[-3, -1]), 0);
}
