//! This module exposes [compatible] and [check_compatible], the relation that decides if a type can
//! stand for another one at a use site. It is not symmetric: the rule that applies depends on which
//! side is atomic, a variable, a procedure or a union.

use std::fmt::Display;

use crate::{
    context::Ctx,
    error::{TypeError, TypeErrorKind},
    types::{Type, TypeExpr},
};

/// Checks if some component of a union has the same variant as `typ`. Only the variant is compared,
/// so two procedures with different signatures count as the same entry.
fn includes_tag(components: &[Type], typ: &TypeExpr) -> bool {
    components.iter().any(|component| component.tag() == typ.tag())
}

/// Decides if `left` and `right` are compatible. Parameters of procedures are compared in the
/// opposite direction of their return types.
pub fn compatible(left: &TypeExpr, right: &TypeExpr) -> bool {
    use TypeExpr::*;

    let result = match (left, right) {
        (l, r) if l.is_atomic() && r.is_atomic() => l == r,

        (Var(_), _) | (_, Var(_)) => left == right,

        (Proc(l_params, l_ret), Proc(r_params, r_ret)) => {
            l_params.len() == r_params.len()
                && compatible(l_ret, r_ret)
                && r_params
                    .iter()
                    .zip(l_params)
                    .all(|(r_param, l_param)| compatible(r_param, l_param))
        }

        (Union(l_components), Union(r_components)) => l_components
            .iter()
            .all(|component| includes_tag(r_components, component)),

        (Union(_), Proc(params, _)) => match params.as_slice() {
            [param] if !param.is_proc() => compatible(left, param),
            _ => false,
        },

        (Union(components), r) if r.is_atomic() => includes_tag(components, r),

        (l, Proc(params, _)) if l.is_atomic() => match params.as_slice() {
            [param] if param.is_atomic() => l == &**param,
            [param] => compatible(l, param),
            _ => false,
        },

        _ => false,
    };

    log::trace!("compatible({left}, {right}) = {result}");

    result
}

/// Fails with [TypeErrorKind::Incompatible] naming both types and the expression where they met.
pub fn check_compatible(
    ctx: &Ctx,
    left: &Type,
    right: &Type,
    expr: &impl Display,
) -> Result<(), TypeError> {
    if compatible(left, right) {
        Ok(())
    } else {
        ctx.error(TypeErrorKind::Incompatible {
            left: left.clone(),
            right: right.clone(),
            expr: expr.to_string(),
        })
    }
}
