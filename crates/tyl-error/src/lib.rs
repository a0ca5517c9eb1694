//! Diagnostics shared by the parser and the checker. An [Error] is a message attached to a place in
//! the source code and it only becomes readable text after it meets the code with
//! [Error::with_code].

use core::fmt;
use std::fmt::Display;

use tyl_location::{ByteRange, Point, Range};

#[derive(Debug, Clone)]
pub struct Error {
    pub message: String,
    pub location: ByteRange,
}

impl Error {
    pub fn new(message: impl Into<String>, location: ByteRange) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    pub fn with_code<'a>(&'a self, code: &'a str, file_name: &'a str) -> ErrorWithCode<'a> {
        ErrorWithCode {
            err: self,
            code,
            file_name,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

pub struct ErrorWithCode<'a> {
    err: &'a Error,
    code: &'a str,
    file_name: &'a str,
}

impl<'a> Display for ErrorWithCode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            err: Error { message, location },
            code,
            file_name,
        } = self;

        let Range(start @ Point { line, column }, end) = location.locate(code);
        const PAD: usize = 3;

        writeln!(f, "\n[error]: {message}\n")?;
        writeln!(f, "{:>PAD$} ┌─> {file_name}:{start}", "")?;
        writeln!(f, "{:>PAD$} │", "")?;

        for (line, line_number) in code.lines().skip(line).zip(line..=end.line) {
            writeln!(f, "{:>PAD$} │ {}", line_number + 1, line)?;
        }

        if line == end.line && end.column > column {
            let size = end.column - column;
            writeln!(f, "{:>PAD$} │ {:>column$}{:^>size$}", "", "", "")?;
        }

        writeln!(f, "{:>PAD$} │", "")
    }
}
