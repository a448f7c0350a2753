use advent2021::{init_logging, read_input, split_nonblank};
use tracing::{event, Level};

#[derive(Debug)]
struct Report {
    bitwidth: u32,
    readings: Vec<u32>,
}

fn parse_report(input: &str) -> Result<Report, String> {
    let lines = split_nonblank(input, "\n");
    let first = lines.first().ok_or_else(|| "empty diagnostic report".to_string())?;
    let bitwidth = first.trim().len() as u32;
    if bitwidth == 0 || bitwidth > 31 {
        return Err(format!("unsupported reading width {}", bitwidth));
    }
    let readings = lines
        .iter()
        .map(|line| {
            let line = line.trim();
            if line.len() as u32 != bitwidth {
                return Err(format!(
                    "expected {} bits, got {} in '{}'",
                    bitwidth,
                    line.len(),
                    line
                ));
            }
            u32::from_str_radix(line, 2).map_err(|e| format!("bad binary number '{}': {}", line, e))
        })
        .collect::<Result<Vec<u32>, String>>()?;
    Ok(Report { bitwidth, readings })
}

fn mask(bitwidth: u32, bitpos: u32) -> u32 {
    1 << (bitwidth - bitpos - 1)
}

/// The most common bit at `bitpos`; ties go to 1.
fn most_common(bitwidth: u32, bitpos: u32, readings: &[u32]) -> bool {
    let mask = mask(bitwidth, bitpos);
    let ones = readings.iter().filter(|&&n| n & mask == mask).count();
    ones * 2 >= readings.len()
}

fn part1(report: &Report) -> u64 {
    let mut gamma = 0;
    for bitpos in 0..report.bitwidth {
        if most_common(report.bitwidth, bitpos, &report.readings) {
            gamma |= mask(report.bitwidth, bitpos);
        }
    }
    let all_bits: u32 = (1 << report.bitwidth) - 1;
    let epsilon = !gamma & all_bits;
    event!(Level::DEBUG, "gamma={:b}={}, epsilon={:b}={}", gamma, gamma, epsilon, epsilon);
    u64::from(gamma) * u64::from(epsilon)
}

fn filter(report: &Report, keep_most_common: bool) -> Result<u32, String> {
    let bitwidth = report.bitwidth;
    let mut remaining = report.readings.clone();
    for bitpos in 0..bitwidth {
        if remaining.len() <= 1 {
            break;
        }
        let expected = most_common(bitwidth, bitpos, &remaining) == keep_most_common;
        let mask = mask(bitwidth, bitpos);
        remaining.retain(|x| (x & mask == mask) == expected);
        event!(
            Level::TRACE,
            "bit position {}: kept {} readings with bit {}",
            bitpos,
            remaining.len(),
            u8::from(expected)
        );
    }
    match remaining.as_slice() {
        [only] => Ok(*only),
        [] => Err("bit criteria eliminated every reading".to_string()),
        _ => Err(format!("{} readings left after filtering", remaining.len())),
    }
}

fn part2(report: &Report) -> Result<u64, String> {
    let oxygen_generator_rating = filter(report, true)?;
    let co2_scrubber_rating = filter(report, false)?;
    event!(
        Level::DEBUG,
        "oxygen generator rating={}, CO2 scrubber rating={}",
        oxygen_generator_rating,
        co2_scrubber_rating
    );
    Ok(u64::from(oxygen_generator_rating) * u64::from(co2_scrubber_rating))
}

#[cfg(test)]
const SAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

#[test]
fn test_most_common_tie() {
    assert!(most_common(2, 0, &[0b10, 0b01]));
    assert!(!most_common(2, 0, &[0b00, 0b01, 0b10]));
}

#[test]
fn test_part1() {
    let report = parse_report(SAMPLE).expect("valid test input");
    assert_eq!(part1(&report), 198);
}

#[test]
fn test_part2() {
    let report = parse_report(SAMPLE).expect("valid test input");
    assert_eq!(filter(&report, true), Ok(23));
    assert_eq!(filter(&report, false), Ok(10));
    assert_eq!(part2(&report), Ok(230));
}

#[test]
fn test_wide_readings() {
    let report = parse_report("10101010101010101010\n10101010101010101010\n01010101010101010101\n")
        .expect("valid test input");
    assert_eq!(part1(&report), 699050 * 349525);

    let report = parse_report("10101010101010101010\n01010101010101010101\n")
        .expect("valid test input");
    assert_eq!(part2(&report), Ok(699050 * 349525));
}

#[test]
fn test_co2_criterion_eliminates_everything() {
    let report = parse_report("110\n111\n").expect("valid test input");
    assert_eq!(filter(&report, true), Ok(0b111));
    assert!(filter(&report, false).is_err());
    assert!(part2(&report).is_err());
}

#[test]
fn test_bad_report() {
    assert!(parse_report("").is_err());
    assert!(parse_report("101\n11\n").is_err());
    assert!(parse_report("102\n").is_err());
}

fn run() -> Result<(), String> {
    init_logging("info");
    let report = parse_report(&read_input()?)?;
    event!(
        Level::DEBUG,
        "read {} readings of {} bits",
        report.readings.len(),
        report.bitwidth
    );
    println!("Day 03 part 1: {}", part1(&report));
    println!("Day 03 part 2: {}", part2(&report)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
