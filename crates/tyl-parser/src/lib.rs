//! This module parses a text source code into a [tyl_tree::abstract] tree and type annotations into
//! [Type] trees, using a LALR(1) parser generator called LALRPOP. It does not include error
//! recovery strategies nor incremental parsing.

pub mod error;

use error::from_lalrpop;
use tyl_error::Error;
use tyl_tree::r#abstract::{Expr, Program, Type};

#[macro_use]
extern crate lalrpop_util;

lalrpop_mod!(
    #[allow(warnings)]
    /// The parsing module
    parser
);

/// A parser that reports its failures as [Error]s.
pub trait Parser<T> {
    fn parse(&self, code: &str) -> Result<T, Error>;
}

impl Parser<Program> for ProgramParser {
    fn parse(&self, code: &str) -> Result<Program, Error> {
        self.parse(code).map_err(from_lalrpop)
    }
}

impl Parser<Expr> for ExprParser {
    fn parse(&self, code: &str) -> Result<Expr, Error> {
        self.parse(code).map_err(from_lalrpop)
    }
}

impl Parser<Type> for TypeParser {
    fn parse(&self, code: &str) -> Result<Type, Error> {
        self.parse(code).map_err(from_lalrpop)
    }
}

pub struct Parsers {
    pub program: Box<dyn Parser<Program>>,
    pub expr: Box<dyn Parser<Expr>>,
    pub typ: Box<dyn Parser<Type>>,
}

impl Parser<Program> for Parsers {
    fn parse(&self, code: &str) -> Result<Program, Error> {
        self.program.parse(code)
    }
}

impl Parser<Expr> for Parsers {
    fn parse(&self, code: &str) -> Result<Expr, Error> {
        self.expr.parse(code)
    }
}

impl Parser<Type> for Parsers {
    fn parse(&self, code: &str) -> Result<Type, Error> {
        self.typ.parse(code)
    }
}

impl Default for Parsers {
    fn default() -> Self {
        Self {
            program: Box::new(ProgramParser::new()),
            expr: Box::new(ExprParser::new()),
            typ: Box::new(TypeParser::new()),
        }
    }
}

pub use parser::*;
