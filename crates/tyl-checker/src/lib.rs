//! This module is useful for type checking fully annotated [Expr]s and [Program]s. Every binding
//! site carries its type so nothing is inferred: the checker computes a type for each expression
//! and validates it against the declared ones with the [compat] relation.

use tyl_error::Error;
use tyl_parser::{Parser, Parsers};
use tyl_tree::r#abstract::{self, Expr, Program};

use self::{context::Ctx, error::TypeError, infer::Infer, types::Type};

pub mod compat;
pub mod context;
pub mod error;
pub mod infer;
pub mod types;

/// Computes the type of an expression in the empty context.
pub fn check_expr(expr: &Expr) -> Result<Type, TypeError> {
    expr.infer(Ctx::empty())
}

/// Computes the type of a program, the type of its last expression.
pub fn check_program(program: &Program) -> Result<Type, TypeError> {
    program.infer(Ctx::empty())
}

/// Parses a program and renders its type.
pub fn type_of_source(code: &str) -> Result<String, Error> {
    let program = Parser::<Program>::parse(&Parsers::default(), code)?;
    let typ = check_program(&program)?;
    Ok(typ.to_string())
}

/// Parses a type expression like `(number * (union boolean string) -> void)`.
pub fn parse_type(text: &str) -> Result<Type, Error> {
    let typ = Parser::<r#abstract::Type>::parse(&Parsers::default(), text)?;
    Ok(typ.infer(()))
}
