//! Obstacle layouts written as ASCII art.
//!
//! ```text
//! ##########
//! #S.......#
//! #.####...#
//! #....#..G#
//! ##########
//! ```
//!
//! `#` is an obstacle, `.` is free, `S` and `G` are optional free cells
//! marking a start and a goal. Lines must all have the same width.

use std::fmt;

use clearpath_core::{Point, Range};
use clearpath_paths::Grid;

const OBSTACLE: char = '#';
const FREE: char = '.';
const START: char = 'S';
const GOAL: char = 'G';

/// A rectangular obstacle layout parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    content: String,
    size: Point,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Layout {
    /// Parse a layout. Leading and trailing whitespace of the whole string is
    /// trimmed, individual lines are not.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut start = None;
        let mut goal = None;
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.split('\n').enumerate() {
            let y = y as i32;
            let mut x: i32 = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                match ch {
                    OBSTACLE | FREE => {}
                    START | GOAL => {
                        let marker = if ch == START { &mut start } else { &mut goal };
                        if marker.is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, pos });
                        }
                        *marker = Some(pos);
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                }
                x += 1;
            }
            match width {
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize {
                        line: y,
                        expected: w,
                        got: x,
                    });
                }
                Some(_) => {}
                None => width = Some(x),
            }
            height = y + 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            height = 0;
        }
        Ok(Self {
            content: s.to_string(),
            size: Point::new(width, height),
            start,
            goal,
        })
    }

    /// Read the obstacle state of `area` back into a layout. Markers are not
    /// recorded. Does not materialize cells.
    pub fn capture(grid: &Grid, area: Range) -> Self {
        let mut content = String::new();
        for y in area.min.y..area.max.y {
            if y > area.min.y {
                content.push('\n');
            }
            for x in area.min.x..area.max.x {
                let ch = if grid.is_obstacle(Point::new(x, y)) {
                    OBSTACLE
                } else {
                    FREE
                };
                content.push(ch);
            }
        }
        let size = if area.is_empty() {
            Point::ZERO
        } else {
            area.size()
        };
        Self {
            content,
            size,
            start: None,
            goal: None,
        }
    }

    /// The layout's text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// (width, height) in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Position of the `S` marker, relative to the top-left corner.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, relative to the top-left corner.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Visit every position with its character.
    pub fn iter(&self, mut f: impl FnMut(Point, char)) {
        for (y, line) in self.content.split('\n').enumerate() {
            for (x, ch) in line.chars().enumerate() {
                f(Point::new(x as i32, y as i32), ch);
            }
        }
    }

    /// Obstacle positions, relative to the top-left corner, row-major.
    pub fn obstacles(&self) -> Vec<Point> {
        let mut out = Vec::new();
        self.iter(|p, ch| {
            if ch == OBSTACLE {
                out.push(p);
            }
        });
        out
    }

    /// Write the layout into `grid` with its top-left corner at `origin`.
    ///
    /// Every covered cell is set, so free characters clear obstacles that
    /// were already there. Parts that would fall off the `i32` plane are
    /// dropped. Returns the number of obstacles written.
    pub fn apply(&self, grid: &mut Grid, origin: Point) -> usize {
        let mut count = 0;
        self.iter(|p, ch| {
            let Some(q) = origin.checked_add(p) else {
                return;
            };
            let obstacle = ch == OBSTACLE;
            grid.set_obstacle(q, obstacle);
            if obstacle {
                count += 1;
            }
        });
        log::debug!(
            "applied {}x{} layout at {origin}: {count} obstacles",
            self.size.x,
            self.size.y
        );
        count
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Layout {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.content)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Layout {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Layout::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the first line's.
    InconsistentSize { line: i32, expected: i32, got: i32 },
    /// A character other than `#`, `.`, `S` or `G`.
    InvalidRune { ch: char, pos: Point },
    /// `S` or `G` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                got,
            } => write!(
                f,
                "layout: line {line} is {got} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
