//! This module describes locations in the source code. There are two types of absolute positions
//! using indexes in the raw string that are [Byte] and [ByteRange]. There are also two types of
//! positions that are [Point] and [Range] that have line and column numbers instead as a better way
//! to generate error messages and warn users.

use core::fmt;
use std::fmt::Display;

/// Byte position in a source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Byte(pub usize);

impl Byte {
    /// Discovers a [Point] that is a line and column structure using the index inside the source
    /// code. Positions past the end of the code land on the last line.
    pub fn locate(&self, code: &str) -> Point {
        let mut acc = 0;
        let mut last = Point::default();

        for (line, code_line) in code.split_inclusive('\n').enumerate() {
            if acc + code_line.len() > self.0 {
                return Point {
                    line,
                    column: self.0 - acc,
                };
            }
            acc += code_line.len();
            last = Point {
                line,
                column: code_line.trim_end_matches(&['\r', '\n'][..]).len(),
            };
        }

        last
    }
}

/// Two byte positions inside a source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ByteRange(pub Byte, pub Byte);

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self(Byte(start), Byte(end))
    }

    /// A range that points to a single character.
    pub fn singleton(byte: usize) -> Self {
        Self(Byte(byte), Byte(byte + 1))
    }

    pub fn locate(&self, code: &str) -> Range {
        Range(self.0.locate(code), self.1.locate(code))
    }
}

/// Line and column position inside a source file.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

/// Two line and column positions ([Point]s) inside a source file.
#[derive(Debug, PartialEq, Eq)]
pub struct Range(pub Point, pub Point);

impl Range {
    /// Creates a new range using two byte positions.
    pub fn new(start: usize, end: usize, code: &str) -> Self {
        Self(Byte(start).locate(code), Byte(end).locate(code))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 != self.1 {
            write!(f, "{}~{}", self.0, self.1)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A node of some tree together with the place in the source code where it came from.
#[derive(Debug, Clone)]
pub struct Located<T> {
    pub location: ByteRange,
    pub data: T,
}

impl<T: Display> Display for Located<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

impl<T> Located<T> {
    pub fn new(location: ByteRange, data: T) -> Self {
        Self { location, data }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn locates_bytes_across_lines() {
        let code = "(define (x : number)\n  5)\nx";

        assert_eq!(Byte(0).locate(code), Point { line: 0, column: 0 });
        assert_eq!(Byte(23).locate(code), Point { line: 1, column: 2 });
        assert_eq!(Byte(26).locate(code), Point { line: 2, column: 0 });
    }

    #[test]
    fn carriage_returns_count_as_bytes_of_the_line() {
        let code = "(define (x : number)\r\n  5)\r\nx";

        assert_eq!(Byte(24).locate(code), Point { line: 1, column: 2 });
        assert_eq!(Byte(28).locate(code), Point { line: 2, column: 0 });
        assert_eq!(ByteRange::new(24, 25).locate(code).to_string(), "2:3~2:4");
    }

    #[test]
    fn out_of_bounds_lands_on_the_last_line() {
        let code = "ab\ncd";
        assert_eq!(Byte(99).locate(code), Point { line: 1, column: 2 });
    }

    #[test]
    fn displays_one_based_positions() {
        let range = Range::new(0, 3, "abcdef");
        assert_eq!(range.to_string(), "1:1~1:4");
    }
}
