use advent2021::{init_logging, read_input, split_nonblank, str_to_int};
use tracing::{event, Level};

fn parse_positions(input: &str) -> Result<Vec<i64>, String> {
    split_nonblank(input, ",")
        .into_iter()
        .map(str_to_int)
        .collect()
}

fn cost_of_move_part1(from: i64, to: i64) -> i64 {
    (to - from).abs()
}

fn sum_of_values(first: i64, last: i64) -> i64 {
    let n = last - first + 1;
    (n * (first + last)) / 2
}

fn cost_of_move_part2(from: i64, to: i64) -> i64 {
    sum_of_values(0, (to - from).abs())
}

#[test]
fn test_cost_of_move_part2() {
    assert_eq!(cost_of_move_part2(1, 1), 0);
    assert_eq!(cost_of_move_part2(2, 2), 0);
    assert_eq!(cost_of_move_part2(1, 2), 1);
    assert_eq!(cost_of_move_part2(3, 2), 1);
    assert_eq!(cost_of_move_part2(1, 3), 1 + 2);
    assert_eq!(cost_of_move_part2(4, 1), 1 + 2 + 3);
    assert_eq!(cost_of_move_part2(16, 5), 66);
}

fn cost_of_dest(dest: i64, positions: &[i64], cost_of_move: fn(i64, i64) -> i64) -> i64 {
    positions.iter().map(|pos| cost_of_move(*pos, dest)).sum()
}

/// Finds the cheapest alignment position and its total cost.  Ties
/// go to the lowest position.
fn min_dest(positions: &[i64], cost_of_move: fn(i64, i64) -> i64) -> Option<(i64, i64)> {
    let min_pos = *positions.iter().min()?;
    let max_pos = *positions.iter().max()?;

    let mut best: Option<(i64, i64)> = None;
    for pos in min_pos..=max_pos {
        let cost = cost_of_dest(pos, positions, cost_of_move);
        best = match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((pos, cost)),
        };
    }
    best
}

#[cfg(test)]
const SAMPLE: &str = "16,1,2,0,4,2,7,1,2,14\n";

#[test]
fn test_part1() {
    let positions = parse_positions(SAMPLE).expect("valid test input");
    assert_eq!(cost_of_dest(1, &positions, cost_of_move_part1), 41);
    assert_eq!(min_dest(&positions, cost_of_move_part1), Some((2, 37)));
}

#[test]
fn test_part2() {
    let positions = parse_positions(SAMPLE).expect("valid test input");
    assert_eq!(cost_of_dest(2, &positions, cost_of_move_part2), 206);
    assert_eq!(min_dest(&positions, cost_of_move_part2), Some((5, 168)));
}

#[test]
fn test_no_crabs() {
    assert_eq!(min_dest(&[], cost_of_move_part1), None);
    assert_eq!(min_dest(&[3], cost_of_move_part2), Some((3, 0)));
}

#[test]
fn test_negative_positions() {
    let positions = parse_positions("-4,-1,-3\n").expect("valid test input");
    assert_eq!(min_dest(&positions, cost_of_move_part1), Some((-3, 3)));
    assert_eq!(min_dest(&positions, cost_of_move_part2), Some((-3, 4)));
}

fn report(part: u8, best: Option<(i64, i64)>) {
    match best {
        Some((pos, cost)) => {
            event!(Level::DEBUG, "part {}: align at {}", part, pos);
            println!("Day 07 part {}: {}", part, cost);
        }
        None => {
            println!("Day 07 part {}: no crabs, nothing to do", part);
        }
    }
}

fn run() -> Result<(), String> {
    init_logging("info");
    let positions = parse_positions(&read_input()?)?;
    event!(Level::DEBUG, "read {} crab positions", positions.len());
    report(1, min_dest(&positions, cost_of_move_part1));
    report(2, min_dest(&positions, cost_of_move_part2));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
