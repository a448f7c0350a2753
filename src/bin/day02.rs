use advent2021::{init_logging, read_input, split_nonblank, str_to_int};
use regex::Regex;
use tracing::{event, Level};

#[derive(Debug, PartialEq, Eq)]
enum Move {
    Down(i64),
    Up(i64),
    Forward(i64),
}

fn parse_move(re: &Regex, s: &str) -> Result<Move, String> {
    let caps = re
        .captures(s.trim())
        .ok_or_else(|| format!("expected '<forward|down|up> <distance>', got '{}'", s))?;
    let n = str_to_int(&caps[2])?;
    match &caps[1] {
        "down" => Ok(Move::Down(n)),
        "up" => Ok(Move::Up(n)),
        "forward" => Ok(Move::Forward(n)),
        other => Err(format!("expected up/down/forward, got {}", other)),
    }
}

fn parse_moves(input: &str) -> Result<Vec<Move>, String> {
    let re = Regex::new(r"^(\w+) (\d+)$").map_err(|e| e.to_string())?;
    split_nonblank(input, "\n")
        .into_iter()
        .map(|line| parse_move(&re, line))
        .collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Submarine {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Submarine {
    /// `up` and `down` change depth directly.
    fn steer(&mut self, m: &Move) {
        match m {
            Move::Down(x) => self.depth += x,
            Move::Up(x) => self.depth -= x,
            Move::Forward(x) => self.horizontal += x,
        }
    }

    /// `up` and `down` change aim; `forward` dives along it.
    fn steer_with_aim(&mut self, m: &Move) {
        match m {
            Move::Down(x) => self.aim += x,
            Move::Up(x) => self.aim -= x,
            Move::Forward(x) => {
                self.horizontal += x;
                self.depth += self.aim * x;
            }
        }
    }
}

fn dive(moves: &[Move], steer: fn(&mut Submarine, &Move)) -> i64 {
    let mut sub = Submarine::default();
    for m in moves {
        steer(&mut sub, m);
    }
    event!(Level::DEBUG, "final position: {:?}", sub);
    sub.horizontal * sub.depth
}

fn part1(moves: &[Move]) -> i64 {
    dive(moves, Submarine::steer)
}

fn part2(moves: &[Move]) -> i64 {
    dive(moves, Submarine::steer_with_aim)
}

#[cfg(test)]
const SAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

#[test]
fn test_parse_moves() {
    let moves = parse_moves("forward 5\nup 3\ndown 8\n").expect("valid test input");
    assert_eq!(moves, vec![Move::Forward(5), Move::Up(3), Move::Down(8)]);
    assert!(parse_moves("backward 5\n").is_err());
    assert!(parse_moves("forward\n").is_err());
    assert!(parse_moves("forward five\n").is_err());
    assert!(parse_moves("forward 5 6\n").is_err());
}

#[test]
fn test_steer_with_aim() {
    let mut sub = Submarine::default();
    sub.steer_with_aim(&Move::Down(5));
    sub.steer_with_aim(&Move::Forward(8));
    assert_eq!(
        sub,
        Submarine {
            horizontal: 8,
            depth: 40,
            aim: 5
        }
    );
}

#[test]
fn test_part1() {
    let moves = parse_moves(SAMPLE).expect("valid test input");
    assert_eq!(part1(&moves), 150);
}

#[test]
fn test_part2() {
    let moves = parse_moves(SAMPLE).expect("valid test input");
    assert_eq!(part2(&moves), 900);
}

fn run() -> Result<(), String> {
    init_logging("info");
    let moves = parse_moves(&read_input()?)?;
    event!(Level::DEBUG, "read {} moves", moves.len());
    println!("Day 02 part 1: {}", part1(&moves));
    println!("Day 02 part 2: {}", part2(&moves));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
