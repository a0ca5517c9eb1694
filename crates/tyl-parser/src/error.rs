use tyl_error::Error;
use tyl_location::ByteRange;

use lalrpop_util::{lexer::Token, ParseError};

pub fn from_lalrpop(err: ParseError<usize, Token, &str>) -> Error {
    use ParseError::*;
    match err {
        InvalidToken { location } => Error::new("invalid token", ByteRange::singleton(location)),
        UnrecognizedEof { location, .. } => {
            Error::new("unrecognized eof", ByteRange::singleton(location))
        }
        UnrecognizedToken {
            token: (start, Token(_, text), end),
            ..
        } => Error::new(
            format!("unrecognized token '{text}'"),
            ByteRange::new(start, end),
        ),
        ExtraToken {
            token: (start, Token(_, text), end),
        } => Error::new(format!("extra token '{text}'"), ByteRange::new(start, end)),
        User { error } => Error::new(error, ByteRange::default()),
    }
}
