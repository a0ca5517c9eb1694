//! Typing of expression sequences and whole programs. A `define` inside a sequence is visible to
//! the expressions that come after it.

use super::Infer;
use crate::{
    context::Ctx,
    error::{TypeError, TypeErrorKind},
    types::Type,
};

use tyl_tree::r#abstract::{DefineNode, Expr, ExprKind, Program};

/// Adds the name introduced by a `define` to the context, other expressions leave it untouched.
fn declare(ctx: Ctx, expr: &Expr) -> Ctx {
    match &expr.data {
        ExprKind::Define(DefineNode { var, .. }) => {
            let typ = var.typ.infer(());
            log::debug!("defined '{}' as {typ}", var.name);
            ctx.extend(var.name.clone(), typ)
        }
        _ => ctx,
    }
}

impl Infer for &[Expr] {
    type Context<'a> = Ctx;
    type Return = Result<Type, TypeError>;

    fn infer(self, mut ctx: Self::Context<'_>) -> Self::Return {
        let Some((last, init)) = self.split_last() else {
            return ctx.error(TypeErrorKind::EmptySequence);
        };

        for expr in init {
            expr.infer(ctx.clone())?;
            ctx = declare(ctx, expr);
        }

        last.infer(ctx)
    }
}

impl Infer for &Program {
    type Context<'a> = Ctx;
    type Return = Result<Type, TypeError>;

    fn infer(self, ctx: Self::Context<'_>) -> Self::Return {
        log::debug!("checking program with {} top level expressions", self.exprs.len());
        self.exprs.as_slice().infer(ctx)
    }
}
