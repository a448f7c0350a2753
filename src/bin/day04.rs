use std::fmt::{self, Display, Formatter};

use advent2021::{init_logging, read_input, split_nonblank, str_to_int};
use ndarray::prelude::*;
use tracing::{event, Level};

const SIDE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: Array2<i64>,
    marked: Array2<bool>,
    won: bool,
}

impl Board {
    fn sum_unmarked(&self) -> i64 {
        self.numbers
            .iter()
            .zip(self.marked.iter())
            .filter(|(_, marked)| !**marked)
            .map(|(n, _)| n)
            .sum()
    }

    fn has_bingo(&self) -> bool {
        fn full(line: ArrayView1<bool>) -> bool {
            line.iter().all(|m| *m)
        }
        self.marked.rows().into_iter().any(full) || self.marked.columns().into_iter().any(full)
    }

    /// Marks `n` if present.  Returns true if this makes the board win.
    fn call_number(&mut self, n: i64) -> bool {
        for (pos, value) in self.numbers.indexed_iter() {
            if *value == n {
                self.marked[pos] = true;
            }
        }
        if !self.won && self.has_bingo() {
            self.won = true;
            true
        } else {
            false
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Board, String> {
        let mut cells: Vec<i64> = Vec::with_capacity(SIDE * SIDE);
        for line in split_nonblank(s, "\n") {
            let row = line
                .split_ascii_whitespace()
                .map(str_to_int)
                .collect::<Result<Vec<i64>, String>>()?;
            if row.len() != SIDE {
                return Err(format!("expected {} numbers in board row '{}'", SIDE, line));
            }
            cells.extend(row);
        }
        if cells.len() != SIDE * SIDE {
            return Err(format!(
                "expected {} board rows, got {}",
                SIDE,
                cells.len() / SIDE
            ));
        }
        let numbers = Array2::from_shape_vec((SIDE, SIDE), cells).map_err(|e| e.to_string())?;
        Ok(Board {
            numbers,
            marked: Array2::from_elem((SIDE, SIDE), false),
            won: false,
        })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (numrow, markrow) in self.numbers.rows().into_iter().zip(self.marked.rows()) {
            for (num, marked) in numrow.iter().zip(markrow.iter()) {
                if *marked {
                    write!(f, "[{:>2}]", num)?;
                } else {
                    write!(f, " {:>2} ", num)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Game {
    draws: Vec<i64>,
    boards: Vec<Board>,
}

fn parse_game(input: &str) -> Result<Game, String> {
    let sections = split_nonblank(input, "\n\n");
    let (first, rest) = sections
        .split_first()
        .ok_or_else(|| "empty input".to_string())?;
    let draws = first
        .trim()
        .split(',')
        .map(str_to_int)
        .collect::<Result<Vec<i64>, String>>()?;
    let boards = rest
        .iter()
        .map(|s| Board::try_from(*s))
        .collect::<Result<Vec<Board>, String>>()?;
    Ok(Game { draws, boards })
}

/// Plays every draw, returning the scores of the boards in the order
/// in which they won.
fn play(mut boards: Vec<Board>, draws: &[i64]) -> Vec<i64> {
    let mut scores: Vec<i64> = Vec::with_capacity(boards.len());
    for draw in draws {
        for board in boards.iter_mut().filter(|b| !b.won) {
            if board.call_number(*draw) {
                let score = board.sum_unmarked() * draw;
                event!(
                    Level::DEBUG,
                    "board wins on {} with score {}:\n{}",
                    draw,
                    score,
                    board
                );
                scores.push(score);
            }
        }
        if scores.len() == boards.len() {
            break;
        }
    }
    scores
}

fn part1(game: &Game) -> Option<i64> {
    play(game.boards.clone(), &game.draws).first().copied()
}

fn part2(game: &Game) -> Option<i64> {
    play(game.boards.clone(), &game.draws).last().copied()
}

#[cfg(test)]
const SAMPLE: &str = "7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

#[test]
fn test_parse_game() {
    let game = parse_game(SAMPLE).expect("valid test input");
    assert_eq!(game.draws.len(), 27);
    assert_eq!(game.boards.len(), 3);
    assert_eq!(game.boards[1].numbers[(2, 3)], 25);
}

#[test]
fn test_bad_board() {
    assert!(Board::try_from("1 2 3 4 5\n").is_err());
    assert!(Board::try_from("1 2 3 4\n5 6 7 8\n").is_err());
}

#[test]
fn test_column_wins() {
    let mut board =
        Board::try_from("1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25\n")
            .expect("valid test input");
    for n in [2, 7, 12, 17] {
        assert!(!board.call_number(n));
    }
    // Diagonals do not count.
    for n in [1, 13, 19] {
        assert!(!board.call_number(n));
    }
    assert!(board.call_number(22));
    assert_eq!(board.sum_unmarked(), 325 - (2 + 7 + 12 + 17 + 22 + 1 + 13 + 19));
    // A board only wins once.
    assert!(!board.call_number(25));
}

#[test]
fn test_part1() {
    let game = parse_game(SAMPLE).expect("valid test input");
    assert_eq!(part1(&game), Some(4512));
}

#[test]
fn test_part2() {
    let game = parse_game(SAMPLE).expect("valid test input");
    assert_eq!(part2(&game), Some(1924));
}

#[test]
fn test_no_winner() {
    let game = parse_game("7,4\n\n1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25\n")
        .expect("valid test input");
    assert_eq!(part1(&game), None);
    assert_eq!(part2(&game), None);
}

fn show(answer: Option<i64>) -> String {
    match answer {
        Some(score) => score.to_string(),
        None => "no board won".to_string(),
    }
}

fn run() -> Result<(), String> {
    init_logging("info");
    let game = parse_game(&read_input()?)?;
    event!(
        Level::DEBUG,
        "read {} draws and {} boards",
        game.draws.len(),
        game.boards.len()
    );
    println!("Day 04 part 1: {}", show(part1(&game)));
    println!("Day 04 part 2: {}", show(part2(&game)));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
