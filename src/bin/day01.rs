use advent2021::{init_logging, read_input, split_nonblank, str_to_int, sum_int};
use tracing::{event, Level};

fn parse_depths(input: &str) -> Result<Vec<i64>, String> {
    split_nonblank(input, "\n")
        .into_iter()
        .map(str_to_int)
        .collect()
}

fn count_increases(values: &[i64]) -> usize {
    values.windows(2).filter(|w| w[1] > w[0]).count()
}

fn part1(depths: &[i64]) -> usize {
    count_increases(depths)
}

fn part2(depths: &[i64]) -> usize {
    let sums: Vec<i64> = depths.windows(3).map(sum_int).collect();
    count_increases(&sums)
}

#[cfg(test)]
const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

#[test]
fn test_part1() {
    let depths = parse_depths(SAMPLE).expect("valid test input");
    assert_eq!(part1(&depths), 7);
}

#[test]
fn test_part2() {
    let depths = parse_depths(SAMPLE).expect("valid test input");
    assert_eq!(part2(&depths), 5);
}

#[test]
fn test_short_input() {
    assert_eq!(part1(&[]), 0);
    assert_eq!(part1(&[5]), 0);
    assert_eq!(part2(&[1, 2, 3]), 0);
    assert_eq!(part2(&[1, 2, 3, 4]), 1);
}

fn run() -> Result<(), String> {
    init_logging("info");
    let depths = parse_depths(&read_input()?)?;
    event!(Level::DEBUG, "read {} depth measurements", depths.len());
    println!("Day 01 part 1: {}", part1(&depths));
    println!("Day 01 part 2: {}", part2(&depths));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
