//! Signatures of the primitive operators.

use crate::{
    context::Ctx,
    error::{TypeError, TypeErrorKind},
    types::{Type, TypeExpr},
};

/// Returns the signature of a primitive. Polymorphic primitives get new type variables every time
/// so two uses of the same primitive never share a variable.
pub fn primitive(ctx: &Ctx, op: &str) -> Result<Type, TypeError> {
    let num = TypeExpr::number;
    let boolean = TypeExpr::boolean;

    match op {
        "+" | "-" | "*" | "/" => Ok(TypeExpr::proc(vec![num(), num()], num())),
        ">" | "<" | "=" => Ok(TypeExpr::proc(vec![num(), num()], boolean())),
        "and" | "or" => Ok(TypeExpr::proc(vec![boolean(), boolean()], boolean())),
        "not" => Ok(TypeExpr::proc(vec![boolean()], boolean())),

        "number?" | "boolean?" | "string?" | "list?" | "pair?" | "symbol?" => {
            Ok(TypeExpr::proc(vec![ctx.new_var()], boolean()))
        }

        "eq?" | "string=?" => Ok(TypeExpr::proc(vec![ctx.new_var(), ctx.new_var()], boolean())),

        "display" => Ok(TypeExpr::proc(vec![ctx.new_var()], TypeExpr::void())),
        "newline" => Ok(TypeExpr::proc(vec![], TypeExpr::void())),

        _ => ctx.error(TypeErrorKind::UnimplementedPrimitive(op.to_string())),
    }
}
