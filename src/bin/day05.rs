use std::cmp::{max, min};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use advent2021::{init_logging, read_input, split_nonblank};
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use tracing::{event, Level};

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
struct Point {
    pub x: i32,
    pub y: i32,
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Segment {
    pub from: Point,
    pub to: Point,
}

fn coordinate(input: &str) -> IResult<&str, i32> {
    map_res(digit1, FromStr::from_str)(input)
}

fn point(input: &str) -> IResult<&str, Point> {
    map(separated_pair(coordinate, char(','), coordinate), |(x, y)| {
        Point { x, y }
    })(input)
}

fn segment(input: &str) -> IResult<&str, (Point, Point)> {
    separated_pair(point, delimited(space0, tag("->"), space0), point)(input)
}

impl TryFrom<&str> for Segment {
    type Error = String;
    fn try_from(s: &str) -> Result<Segment, String> {
        match all_consuming(segment)(s.trim()) {
            Ok((_, (from, to))) => Segment::new(from, to),
            Err(e) => Err(format!("failed to parse '{}': {}", s, e)),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl Segment {
    /// Only horizontal, vertical and 45-degree segments are allowed.
    fn new(from: Point, to: Point) -> Result<Segment, String> {
        let (dx, dy) = ((to.x - from.x).abs(), (to.y - from.y).abs());
        if dx != 0 && dy != 0 && dx != dy {
            Err(format!("{} -> {} is not at a multiple of 45 degrees", from, to))
        } else {
            Ok(Segment { from, to })
        }
    }

    fn is_diagonal(&self) -> bool {
        self.from.x != self.to.x && self.from.y != self.to.y
    }

    /// Every point covered by the segment, endpoints included.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let from = self.from;
        let step = Point {
            x: (self.to.x - from.x).signum(),
            y: (self.to.y - from.y).signum(),
        };
        let len = (self.to.x - from.x).abs().max((self.to.y - from.y).abs());
        (0..=len).map(move |t| Point {
            x: from.x + t * step.x,
            y: from.y + t * step.y,
        })
    }
}

#[derive(Debug, Default)]
struct Diagram {
    points: HashMap<Point, usize>,
}

impl Diagram {
    fn draw(&mut self, seg: &Segment) {
        for p in seg.points() {
            *self.points.entry(p).or_insert(0) += 1;
        }
    }

    fn overlaps(&self) -> usize {
        self.points.values().filter(|count| **count >= 2).count()
    }
}

impl Display for Diagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (mut left, mut top) = (0, 0);
        let (mut right, mut bottom) = (0, 0);
        for p in self.points.keys() {
            left = min(left, p.x);
            top = min(top, p.y);
            right = max(right, p.x);
            bottom = max(bottom, p.y);
        }
        for y in top..=bottom {
            for x in left..=right {
                match self.points.get(&Point { x, y }) {
                    Some(n) => write!(f, "{}", n)?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

fn parse_segments(input: &str) -> Result<Vec<Segment>, String> {
    split_nonblank(input, "\n")
        .into_iter()
        .map(Segment::try_from)
        .collect()
}

fn count_overlaps(segments: &[Segment], include_diagonals: bool) -> usize {
    let mut diagram = Diagram::default();
    for seg in segments
        .iter()
        .filter(|seg| include_diagonals || !seg.is_diagonal())
    {
        event!(Level::TRACE, "drawing {}", seg);
        diagram.draw(seg);
    }
    event!(Level::TRACE, "diagram:\n{}", diagram);
    diagram.overlaps()
}

fn part1(segments: &[Segment]) -> usize {
    count_overlaps(segments, false)
}

fn part2(segments: &[Segment]) -> usize {
    count_overlaps(segments, true)
}

#[cfg(test)]
const SAMPLE: &str = "0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

#[test]
fn test_parse_segment() {
    assert_eq!(
        Segment::try_from("0,9 -> 5,9"),
        Ok(Segment {
            from: Point { x: 0, y: 9 },
            to: Point { x: 5, y: 9 },
        })
    );
    assert!(Segment::try_from("0,9 -> 5").is_err());
    assert!(Segment::try_from("0,9 => 5,9").is_err());
    assert!(Segment::try_from("0,9 -> 5,9 junk").is_err());
}

#[test]
fn test_diagonal() {
    let seg = Segment {
        from: Point { x: 9, y: 7 },
        to: Point { x: 7, y: 9 },
    };
    assert!(seg.is_diagonal());
    assert_eq!(
        seg.points().collect::<Vec<_>>(),
        vec![
            Point { x: 9, y: 7 },
            Point { x: 8, y: 8 },
            Point { x: 7, y: 9 },
        ]
    );
}

#[test]
fn test_reject_uneven_slope() {
    assert!(Segment::try_from("0,0 -> 3,1").is_err());
    assert!(Segment::try_from("5,5 -> 1,2").is_err());
    let seg = Segment::try_from("8,0 -> 0,8").expect("valid test input");
    assert_eq!(seg.points().count(), 9);
    assert_eq!(seg.points().last(), Some(Point { x: 0, y: 8 }));
}

#[test]
fn test_single_point() {
    let seg = Segment {
        from: Point { x: 3, y: 3 },
        to: Point { x: 3, y: 3 },
    };
    assert_eq!(seg.points().collect::<Vec<_>>(), vec![Point { x: 3, y: 3 }]);
}

#[test]
fn test_render() {
    let mut diagram = Diagram::default();
    diagram.draw(&Segment::try_from("0,0 -> 2,0").expect("valid test input"));
    diagram.draw(&Segment::try_from("1,0 -> 1,1").expect("valid test input"));
    assert_eq!(diagram.to_string(), "121\n.1.\n");
    assert_eq!(diagram.overlaps(), 1);

    let mut crowded = Diagram::default();
    for _ in 0..12 {
        crowded.draw(&Segment::try_from("0,0 -> 0,0").expect("valid test input"));
    }
    assert_eq!(crowded.to_string(), "12\n");
}

#[test]
fn test_part1() {
    let segments = parse_segments(SAMPLE).expect("valid test input");
    assert_eq!(part1(&segments), 5);
}

#[test]
fn test_part2() {
    let segments = parse_segments(SAMPLE).expect("valid test input");
    assert_eq!(part2(&segments), 12);
}

fn run() -> Result<(), String> {
    init_logging("info");
    let segments = parse_segments(&read_input()?)?;
    event!(Level::DEBUG, "read {} line segments", segments.len());
    println!("Day 05 part 1: {}", part1(&segments));
    println!("Day 05 part 2: {}", part2(&segments));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
