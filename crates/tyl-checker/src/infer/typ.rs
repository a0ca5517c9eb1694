//! Lowering of type annotations into [Type]s.

use super::Infer;
use crate::types::{Type, TypeExpr};

use tyl_tree::r#abstract::{self, ProcTypeNode, TypeKind};

impl Infer for &r#abstract::Type {
    type Context<'a> = ();
    type Return = Type;

    fn infer(self, _: Self::Context<'_>) -> Self::Return {
        match &self.data {
            TypeKind::Number => TypeExpr::number(),
            TypeKind::Boolean => TypeExpr::boolean(),
            TypeKind::String => TypeExpr::string(),
            TypeKind::Void => TypeExpr::void(),
            TypeKind::Variable(name) => TypeExpr::var(name.clone()),

            TypeKind::Proc(ProcTypeNode { params, r#return }) => TypeExpr::proc(
                params.iter().map(|param| param.infer(())).collect(),
                r#return.infer(()),
            ),

            TypeKind::Union(members) => TypeExpr::union_of(members.iter().map(|m| m.infer(()))),
        }
    }
}
