//! This module describes the tree that is generated from the parser. It contains pure syntactic
//! information together with the type annotations written by the user. The main types of this file
//! are [Expr], [Type] and [Program].
//!
//! Every node implements [Display] printing the concrete syntax back, so diagnostics can quote the
//! expression that failed.

use std::fmt::{self, Display};

use itertools::Itertools;
use tyl_location::Located;

/// Names that are parsed as [AtomKind::Primitive] instead of variables.
pub const PRIMITIVES: &[&str] = &[
    "+", "-", "*", "/", ">", "<", "=", "not", "and", "or", "eq?", "string=?", "number?",
    "boolean?", "string?", "symbol?", "list?", "pair?", "display", "newline", "cons", "car", "cdr",
    "list",
];

/// Expressions without sub expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    Number(f64),
    Boolean(bool),
    String(String),
    Identifier(String),
    Primitive(String),
}

impl AtomKind {
    /// Classifies a name as a primitive operator or a variable reference.
    pub fn identifier(name: String) -> Self {
        if PRIMITIVES.contains(&name.as_str()) {
            Self::Primitive(name)
        } else {
            Self::Identifier(name)
        }
    }
}

impl Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(true) => write!(f, "#t"),
            Self::Boolean(false) => write!(f, "#f"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Identifier(id) | Self::Primitive(id) => write!(f, "{id}"),
        }
    }
}

/// A variable together with its declared type, e.g. `(x : number)`.
#[derive(Debug, Clone)]
pub struct TypedVar {
    pub name: String,
    pub typ: Type,
}

impl Display for TypedVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {})", self.name, self.typ)
    }
}

/// A single binding of `let` and `letrec`.
#[derive(Debug, Clone)]
pub struct Binding {
    pub var: TypedVar,
    pub value: Expr,
}

impl Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.var, self.value)
    }
}

#[derive(Debug, Clone)]
pub struct IfNode {
    pub test: Box<Expr>,
    pub then: Box<Expr>,
    pub alt: Box<Expr>,
}

/// A lambda with per parameter declared types and a declared return type.
#[derive(Debug, Clone)]
pub struct ProcNode {
    pub params: Vec<TypedVar>,
    pub r#return: Type,
    pub body: Vec<Expr>,
}

impl ProcNode {
    pub fn new(params: Vec<TypedVar>, r#return: Type, body: Vec<Expr>) -> Self {
        Self {
            params,
            r#return,
            body,
        }
    }
}

impl Display for ProcNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lambda ({}) : {} {})",
            self.params.iter().join(" "),
            self.r#return,
            self.body.iter().join(" ")
        )
    }
}

#[derive(Debug, Clone)]
pub struct LetNode {
    pub bindings: Vec<Binding>,
    pub body: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct DefineNode {
    pub var: TypedVar,
    pub value: Box<Expr>,
}

/// Expressions are language constructions that intrinsically contain a value. E.g
///
/// ```scheme
/// (let (((x : number) 1)) (+ x 2)) ; (+ x 2) is the value of the whole expression.
/// ```
///
#[derive(Debug, Clone)]
pub enum ExprKind {
    Atom(AtomKind),
    If(IfNode),
    Proc(ProcNode),
    Application(Box<Expr>, Vec<Expr>),
    Let(LetNode),
    Letrec(LetNode),
    Define(DefineNode),
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(a) => write!(f, "{a}"),
            Self::If(IfNode { test, then, alt }) => write!(f, "(if {test} {then} {alt})"),
            Self::Proc(p) => write!(f, "{p}"),
            Self::Application(rator, rands) if rands.is_empty() => write!(f, "({rator})"),
            Self::Application(rator, rands) => write!(f, "({rator} {})", rands.iter().join(" ")),
            Self::Let(LetNode { bindings, body }) => write!(
                f,
                "(let ({}) {})",
                bindings.iter().join(" "),
                body.iter().join(" ")
            ),
            Self::Letrec(LetNode { bindings, body }) => write!(
                f,
                "(letrec ({}) {})",
                bindings.iter().join(" "),
                body.iter().join(" ")
            ),
            Self::Define(DefineNode { var, value }) => write!(f, "(define {var} {value})"),
        }
    }
}

pub type Expr = Located<ExprKind>;

/// A whole file: top level expressions that are checked in order.
#[derive(Debug, Clone)]
pub struct Program {
    pub exprs: Vec<Expr>,
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exprs.iter().join("\n"))
    }
}

#[derive(Debug, Clone)]
pub struct ProcTypeNode {
    pub params: Vec<Type>,
    pub r#return: Box<Type>,
}

impl ProcTypeNode {
    pub fn new(params: Vec<Type>, r#return: Type) -> Self {
        Self {
            params,
            r#return: Box::new(r#return),
        }
    }
}

impl Display for ProcTypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "(Empty -> {})", self.r#return)
        } else {
            write!(f, "({} -> {})", self.params.iter().join(" * "), self.r#return)
        }
    }
}

/// Type annotations as they were written. The checker lowers them into its own type model.
#[derive(Debug, Clone)]
pub enum TypeKind {
    Number,
    Boolean,
    String,
    Void,
    Variable(String),
    Proc(ProcTypeNode),
    Union(Vec<Type>),
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
            Self::Void => write!(f, "void"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Proc(n) => write!(f, "{n}"),
            Self::Union(members) => write!(f, "(union {})", members.iter().join(" ")),
        }
    }
}

pub type Type = Located<TypeKind>;

#[cfg(test)]
mod test {
    use super::*;
    use tyl_location::ByteRange;

    fn loc<T>(data: T) -> Located<T> {
        Located::new(ByteRange::default(), data)
    }

    #[test]
    fn classifies_primitives() {
        assert_eq!(
            AtomKind::identifier("string=?".to_string()),
            AtomKind::Primitive("string=?".to_string())
        );
        assert_eq!(
            AtomKind::identifier("odd?".to_string()),
            AtomKind::Identifier("odd?".to_string())
        );
    }

    #[test]
    fn prints_lambda_back() {
        let x = TypedVar {
            name: "x".to_string(),
            typ: loc(TypeKind::Number),
        };

        let body = loc(ExprKind::Application(
            Box::new(loc(ExprKind::Atom(AtomKind::Primitive("+".to_string())))),
            vec![
                loc(ExprKind::Atom(AtomKind::Identifier("x".to_string()))),
                loc(ExprKind::Atom(AtomKind::Number(1.0))),
            ],
        ));

        let proc = ExprKind::Proc(ProcNode {
            params: vec![x],
            r#return: loc(TypeKind::Number),
            body: vec![body],
        });

        assert_eq!(proc.to_string(), "(lambda ((x : number)) : number (+ x 1))");
    }

    #[test]
    fn prints_nullary_procedure_types() {
        let typ = TypeKind::Proc(ProcTypeNode {
            params: vec![],
            r#return: Box::new(loc(TypeKind::Void)),
        });

        assert_eq!(typ.to_string(), "(Empty -> void)");
    }
}
