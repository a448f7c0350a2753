use advent2021::{init_logging, read_input, split_nonblank, str_to_int};
use tracing::{event, Level};

const PART1_DAYS: usize = 80;
const PART2_DAYS: usize = 256;
const RESET_TIMER: u8 = 6;
const NEWBORN_TIMER: u8 = 8;

fn parse_timers(input: &str) -> Result<Vec<u8>, String> {
    split_nonblank(input, ",")
        .into_iter()
        .map(|s| {
            let n = str_to_int(s)?;
            match u8::try_from(n) {
                Ok(t) if t <= NEWBORN_TIMER => Ok(t),
                _ => Err(format!("timer value {} is out of range", n)),
            }
        })
        .collect()
}

/// Advances every fish by one day; newborns are appended after the
/// existing fish.
fn generation(mut fish: Vec<u8>) -> Vec<u8> {
    let mut births = 0;
    for timer in fish.iter_mut() {
        if *timer == 0 {
            *timer = RESET_TIMER;
            births += 1;
        } else {
            *timer -= 1;
        }
    }
    fish.extend(std::iter::repeat(NEWBORN_TIMER).take(births));
    fish
}

/// Simulates each fish individually.
fn simulate(mut population: Vec<u8>, days: usize) -> usize {
    for day in 1..=days {
        population = generation(population);
        event!(
            Level::TRACE,
            "after {:2} {}: {} fish",
            day,
            if day == 1 { "day" } else { "days" },
            population.len()
        );
    }
    population.len()
}

/// Counts fish by timer value instead of tracking each one.
fn simulate_buckets(population: &[u8], days: usize) -> u64 {
    let mut counts = [0_u64; NEWBORN_TIMER as usize + 1];
    for timer in population {
        counts[*timer as usize] += 1;
    }
    for _ in 0..days {
        counts.rotate_left(1);
        // The fish which were at 0 are now in the last bucket, as
        // their offspring; the parents restart at 6.
        counts[RESET_TIMER as usize] += counts[NEWBORN_TIMER as usize];
    }
    counts.iter().sum()
}

fn part1(population: &[u8]) -> usize {
    simulate(population.to_vec(), PART1_DAYS)
}

fn part2(population: &[u8]) -> u64 {
    simulate_buckets(population, PART2_DAYS)
}

#[cfg(test)]
const SAMPLE: &str = "3,4,3,1,2\n";

#[test]
fn test_generation() {
    assert_eq!(generation(vec![3, 4, 3, 1, 2]), vec![2, 3, 2, 0, 1]);
    assert_eq!(generation(vec![2, 3, 2, 0, 1]), vec![1, 2, 1, 6, 0, 8]);
}

#[test]
fn test_simulations_agree() {
    let population = parse_timers(SAMPLE).expect("valid test input");
    assert_eq!(simulate(population.clone(), 18), 26);
    assert_eq!(simulate_buckets(&population, 18), 26);
    for days in 0..40 {
        assert_eq!(
            simulate(population.clone(), days) as u64,
            simulate_buckets(&population, days)
        );
    }
}

#[test]
fn test_part1() {
    let population = parse_timers(SAMPLE).expect("valid test input");
    assert_eq!(part1(&population), 5934);
}

#[test]
fn test_part2() {
    let population = parse_timers(SAMPLE).expect("valid test input");
    assert_eq!(part2(&population), 26984457539);
}

#[test]
fn test_bad_timer() {
    assert!(parse_timers("3,9\n").is_err());
    assert!(parse_timers("3,-1\n").is_err());
    assert!(parse_timers("3,x\n").is_err());
}

fn run() -> Result<(), String> {
    init_logging("info");
    let population = parse_timers(&read_input()?)?;
    event!(Level::DEBUG, "initial population is {} fish", population.len());
    println!("Day 06 part 1: {}", part1(&population));
    println!("Day 06 part 2: {}", part2(&population));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
