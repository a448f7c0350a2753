use std::collections::HashMap;

use advent2021::{init_logging, read_input, split_nonblank};
use tracing::{event, Level};

/// The lit segments of one display, bit 0 for `a` through bit 6 for `g`.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
struct Pattern(u8);

impl Pattern {
    fn segment_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Number of segments lit in exactly one of the two patterns.
    fn distance(&self, other: &Pattern) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl TryFrom<&str> for Pattern {
    type Error = String;
    fn try_from(s: &str) -> Result<Pattern, String> {
        let mut bits: u8 = 0;
        for ch in s.chars() {
            match ch {
                'a'..='g' => {
                    bits |= 1 << (ch as u8 - b'a');
                }
                _ => {
                    return Err(format!("unexpected segment '{}' in '{}'", ch, s));
                }
            }
        }
        if bits == 0 {
            Err("empty pattern".to_string())
        } else {
            Ok(Pattern(bits))
        }
    }
}

#[derive(Debug)]
struct Entry {
    samples: Vec<Pattern>,
    output: Vec<Pattern>,
}

fn parse_patterns(s: &str, expected: usize) -> Result<Vec<Pattern>, String> {
    let patterns = s
        .split_ascii_whitespace()
        .map(Pattern::try_from)
        .collect::<Result<Vec<Pattern>, String>>()?;
    if patterns.len() != expected {
        Err(format!(
            "expected {} patterns, got {}: {}",
            expected,
            patterns.len(),
            s
        ))
    } else {
        Ok(patterns)
    }
}

impl TryFrom<&str> for Entry {
    type Error = String;
    fn try_from(s: &str) -> Result<Entry, String> {
        let mut it = s.split('|');
        match (it.next(), it.next(), it.next()) {
            (Some(samples), Some(output), None) => Ok(Entry {
                samples: parse_patterns(samples, 10)?,
                output: parse_patterns(output, 4)?,
            }),
            (_, _, Some(_)) => Err(format!("too many '|' in input line: {}", s)),
            _ => Err(format!("expected two fields separated by '|': {}", s)),
        }
    }
}

fn parse_entries(input: &str) -> Result<Vec<Entry>, String> {
    split_nonblank(input, "\n")
        .into_iter()
        .map(Entry::try_from)
        .collect()
}

fn count_easy_digits(output: &[Pattern]) -> usize {
    // 1, 7, 4 and 8 respectively.
    output
        .iter()
        .filter(|p| matches!(p.segment_count(), 2 | 3 | 4 | 7))
        .count()
}

fn part1(entries: &[Entry]) -> usize {
    entries.iter().map(|entry| count_easy_digits(&entry.output)).sum()
}

/// Works out which pattern shows which digit.
///
/// Digits 1, 4, 7 and 8 have unique segment counts (2, 4, 3 and 7).
/// The rest are told apart by how many segments differ from the
/// patterns for 4 and 7:
///
/// | Segment count | Digit | Rule                               |
/// | ------------- | ----- | ---------------------------------- |
/// | 6             | 6     | 5 segments differ from 7           |
/// | 6             | 9     | 2 segments differ from 4           |
/// | 6             | 0     | otherwise                          |
/// | 5             | 2     | 5 segments differ from 4           |
/// | 5             | 3     | 2 segments differ from 7           |
/// | 5             | 5     | otherwise                          |
fn solve(samples: &[Pattern]) -> Result<HashMap<Pattern, u32>, String> {
    let find_unique = |segments: u32, digit: u32| -> Result<Pattern, String> {
        samples
            .iter()
            .find(|p| p.segment_count() == segments)
            .copied()
            .ok_or_else(|| format!("no {}-segment pattern for digit {}", segments, digit))
    };
    let one = find_unique(2, 1)?;
    let four = find_unique(4, 4)?;
    let seven = find_unique(3, 7)?;
    let eight = find_unique(7, 8)?;

    let mut digits: HashMap<Pattern, u32> = HashMap::with_capacity(10);
    for sample in samples {
        let digit = match sample.segment_count() {
            2 => 1,
            3 => 7,
            4 => 4,
            7 => 8,
            6 if sample.distance(&seven) == 5 => 6,
            6 if sample.distance(&four) == 2 => 9,
            6 => 0,
            5 if sample.distance(&four) == 5 => 2,
            5 if sample.distance(&seven) == 2 => 3,
            5 => 5,
            n => {
                return Err(format!("no digit has {} segments", n));
            }
        };
        digits.insert(*sample, digit);
    }
    event!(
        Level::TRACE,
        "1={:07b} 4={:07b} 7={:07b} 8={:07b}",
        one.0,
        four.0,
        seven.0,
        eight.0
    );
    Ok(digits)
}

fn find_output_value(entry: &Entry) -> Result<u32, String> {
    let digits = solve(&entry.samples)?;
    entry.output.iter().try_fold(0, |number, pattern| {
        match digits.get(pattern) {
            Some(digit) => Ok(number * 10 + digit),
            None => Err(format!("output pattern {:07b} is not among the samples", pattern.0)),
        }
    })
}

fn part2(entries: &[Entry]) -> Result<u32, String> {
    let mut total: u32 = 0;
    for entry in entries {
        let n = find_output_value(entry)?;
        event!(Level::DEBUG, "entry decodes to {:04}", n);
        total += n;
    }
    Ok(total)
}

#[cfg(test)]
const SAMPLE: &str = "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

#[test]
fn test_pattern() {
    assert_eq!(Pattern::try_from("ab"), Ok(Pattern(0b11)));
    assert_eq!(Pattern::try_from("ba"), Pattern::try_from("ab"));
    assert_eq!(
        Pattern::try_from("cf").expect("valid").distance(&Pattern::try_from("acf").expect("valid")),
        1
    );
    assert!(Pattern::try_from("abh").is_err());
    assert!(Pattern::try_from("").is_err());
}

#[test]
fn test_parse_entry() {
    assert!(Entry::try_from("ab cd | ab").is_err());
    assert!(Entry::try_from("acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab").is_err());
    assert!(Entry::try_from(
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb | cdfeb cdbaf"
    )
    .is_err());
}

#[test]
fn test_single_entry() {
    let entry = Entry::try_from(
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
    )
    .expect("valid test input");
    assert_eq!(find_output_value(&entry), Ok(5353));
}

#[test]
fn test_part1() {
    let entries = parse_entries(SAMPLE).expect("valid test input");
    assert_eq!(part1(&entries), 26);
}

#[test]
fn test_part2() {
    let entries = parse_entries(SAMPLE).expect("valid test input");
    assert_eq!(part2(&entries), Ok(61229));
}

fn run() -> Result<(), String> {
    init_logging("info");
    let entries = parse_entries(&read_input()?)?;
    event!(Level::DEBUG, "read {} entries", entries.len());
    println!("Day 08 part 1: {}", part1(&entries));
    println!("Day 08 part 2: {}", part2(&entries)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
