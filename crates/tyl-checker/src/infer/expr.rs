//! Typing rules for expressions.

use super::{prim::primitive, Infer};
use crate::{
    compat::{check_compatible, compatible},
    context::Ctx,
    error::{TypeError, TypeErrorKind},
    types::{Type, TypeExpr},
};

use tyl_tree::r#abstract::*;

/// The signature declared by a lambda, its parameter types and its return type.
pub fn signature(proc: &ProcNode) -> (Vec<Type>, Type) {
    let params = proc.params.iter().map(|param| param.typ.infer(())).collect();
    (params, proc.r#return.infer(()))
}

fn param_names(proc: &ProcNode) -> impl Iterator<Item = String> + '_ {
    proc.params.iter().map(|param| param.name.clone())
}

fn binding_names(bindings: &[Binding]) -> impl Iterator<Item = String> + '_ {
    bindings.iter().map(|binding| binding.var.name.clone())
}

impl Infer for &Expr {
    type Context<'a> = Ctx;
    type Return = Result<Type, TypeError>;

    fn infer(self, ctx: Self::Context<'_>) -> Self::Return {
        use ExprKind::*;
        let ctx = ctx.set_position(self.location);

        log::trace!("typing {}", self.data);

        match &self.data {
            Atom(atom) => match atom {
                AtomKind::Number(_) => Ok(TypeExpr::number()),
                AtomKind::Boolean(_) => Ok(TypeExpr::boolean()),
                AtomKind::String(_) => Ok(TypeExpr::string()),
                AtomKind::Primitive(op) => primitive(&ctx, op),
                AtomKind::Identifier(x) => ctx.lookup(x),
            },

            If(IfNode { test, then, alt }) => {
                let test_type = test.infer(ctx.clone())?;

                if !compatible(&test_type, &TypeExpr::boolean()) {
                    return ctx.set_position(test.location).error(TypeErrorKind::TestNotBoolean {
                        found: test_type,
                        expr: self.to_string(),
                    });
                }

                let then_type = then.infer(ctx.clone())?;
                let alt_type = alt.infer(ctx)?;

                Ok(TypeExpr::union(then_type, alt_type))
            }

            Proc(proc) => {
                let (params, ret) = signature(proc);
                let body_ctx = ctx.extend_all(param_names(proc), params.iter().cloned());
                let body_type = proc.body.as_slice().infer(body_ctx)?;

                check_compatible(&ctx, &body_type, &ret, self)?;

                Ok(TypeExpr::proc(params, ret))
            }

            Application(rator, rands) => {
                let rator_type = rator.infer(ctx.clone())?;

                let TypeExpr::Proc(params, ret) = &*rator_type else {
                    return ctx.error(TypeErrorKind::NonProcedure {
                        found: rator_type.clone(),
                        expr: self.to_string(),
                    });
                };

                if params.len() != rands.len() {
                    return ctx.error(TypeErrorKind::ArityMismatch {
                        expected: params.len(),
                        found: rands.len(),
                        expr: self.to_string(),
                    });
                }

                for (param, rand) in params.iter().zip(rands) {
                    let rand_type = rand.infer(ctx.clone())?;
                    check_compatible(&ctx, param, &rand_type, self)?;
                }

                Ok(ret.clone())
            }

            Let(LetNode { bindings, body }) => {
                let declared = bindings
                    .iter()
                    .map(|binding| binding.var.typ.infer(()))
                    .collect::<Vec<_>>();

                for (binding, declared) in bindings.iter().zip(&declared) {
                    let value_type = binding.value.infer(ctx.clone())?;
                    check_compatible(&ctx, declared, &value_type, self)?;
                }

                let body_ctx = ctx.extend_all(binding_names(bindings), declared);
                body.as_slice().infer(body_ctx)
            }

            Letrec(LetNode { bindings, body }) => {
                let procs = bindings
                    .iter()
                    .map(|binding| match &binding.value.data {
                        Proc(proc) => Ok(proc),
                        _ => ctx
                            .set_position(binding.value.location)
                            .error(TypeErrorKind::LetrecNonProcedure(self.to_string())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let signatures = procs.iter().map(|proc| signature(proc)).collect::<Vec<_>>();

                let proc_types = signatures
                    .iter()
                    .map(|(params, ret)| TypeExpr::proc(params.clone(), ret.clone()))
                    .collect::<Vec<_>>();

                // Names are bound to the signature written on each lambda, the annotation of the
                // binding itself is not consulted.
                let outer = ctx.extend_all(binding_names(bindings), proc_types);

                let body_types = procs
                    .iter()
                    .zip(&signatures)
                    .map(|(proc, (params, _))| {
                        let inner = outer.extend_all(param_names(proc), params.iter().cloned());
                        proc.body.as_slice().infer(inner)
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                for (body_type, (_, ret)) in body_types.iter().zip(&signatures) {
                    check_compatible(&outer, body_type, ret, self)?;
                }

                body.as_slice().infer(outer)
            }

            Define(DefineNode { var, value }) => {
                let declared = var.typ.infer(());
                let value_ctx = ctx.extend(var.name.clone(), declared.clone());
                let value_type = value.infer(value_ctx)?;

                check_compatible(&ctx, &declared, &value_type, self)?;

                Ok(TypeExpr::void())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tyl_parser::ExprParser;

    fn type_of(code: &str) -> Result<String, TypeErrorKind> {
        let expr = ExprParser::new().parse(code).expect("parse error");
        expr.infer(Ctx::empty())
            .map(|typ| typ.to_string())
            .map_err(|err| err.kind)
    }

    #[test]
    fn atoms() {
        assert_eq!(type_of("5"), Ok("number".to_string()));
        assert_eq!(type_of("#t"), Ok("boolean".to_string()));
        assert_eq!(type_of("\"hi\""), Ok("string".to_string()));
    }

    #[test]
    fn primitive_applications() {
        assert_eq!(type_of("(+ 1 2)"), Ok("number".to_string()));
        assert_eq!(type_of("(* 1 2)"), Ok("number".to_string()));
        assert_eq!(type_of("(< 1 2)"), Ok("boolean".to_string()));
        assert_eq!(type_of("(not (< 1 2))"), Ok("boolean".to_string()));
        assert_eq!(type_of("(newline)"), Ok("void".to_string()));
    }

    #[test]
    fn polymorphic_primitives_reject_concrete_arguments() {
        assert!(matches!(
            type_of("(number? 1)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn if_branches_join_into_a_union() {
        assert_eq!(type_of("(if #t 1 2)"), Ok("number".to_string()));
        assert_eq!(type_of("(if (> 1 2) 1 2)"), Ok("number".to_string()));
        assert_eq!(type_of("(if #t 1 #t)"), Ok("(union boolean number)".to_string()));
        assert_eq!(
            type_of("(if #t (if #f 1 #t) \"ok\")"),
            Ok("(union boolean (union number string))".to_string())
        );
    }

    #[test]
    fn if_test_must_be_boolean() {
        assert!(matches!(
            type_of("(if 1 2 3)"),
            Err(TypeErrorKind::TestNotBoolean { .. })
        ));
    }

    #[test]
    fn if_test_is_checked_before_the_branches() {
        assert!(matches!(
            type_of("(if 1 x y)"),
            Err(TypeErrorKind::TestNotBoolean { .. })
        ));
        assert_eq!(
            type_of("(if #t x y)"),
            Err(TypeErrorKind::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn procedures_return_their_declared_signature() {
        assert_eq!(
            type_of("(lambda ((x : number)) : number x)"),
            Ok("(number -> number)".to_string())
        );
        assert_eq!(
            type_of("(lambda ((x : number)) : boolean (> x 1))"),
            Ok("(number -> boolean)".to_string())
        );
        assert_eq!(
            type_of("(lambda ((x : number)) : (number -> number) (lambda ((y : number)) : number (* y x)))"),
            Ok("(number -> (number -> number))".to_string())
        );
        assert_eq!(
            type_of("(lambda ((f : (number -> number))) : number (f 2))"),
            Ok("((number -> number) -> number)".to_string())
        );
        assert_eq!(
            type_of("(lambda () : number 1)"),
            Ok("(Empty -> number)".to_string())
        );
    }

    #[test]
    fn procedure_body_must_match_the_return_type() {
        assert!(matches!(
            type_of("(lambda ((x : number)) : boolean x)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn application_errors() {
        assert!(matches!(
            type_of("((lambda ((x : number)) : number x) 1 2)"),
            Err(TypeErrorKind::ArityMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
        assert!(matches!(
            type_of("(1 2)"),
            Err(TypeErrorKind::NonProcedure { .. })
        ));
        assert!(matches!(
            type_of("(+ 1 #t)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn let_bindings() {
        assert_eq!(type_of("(let (((x : number) 1)) (* x 2))"), Ok("number".to_string()));
        assert_eq!(
            type_of("(let (((x : number) 1) ((y : number) 3)) (+ x y))"),
            Ok("number".to_string())
        );
        assert_eq!(
            type_of("(let (((x : number) 1) ((y : number) 2)) (lambda ((a : number)) : number (+ (* x a) y)))"),
            Ok("(number -> number)".to_string())
        );
        assert!(matches!(
            type_of("(let (((x : number) #t)) x)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn let_bindings_do_not_see_each_other() {
        assert_eq!(
            type_of("(let (((x : number) 1) ((y : number) x)) y)"),
            Err(TypeErrorKind::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn let_accepts_values_of_a_declared_union() {
        assert_eq!(
            type_of("(let (((x : (union number boolean)) 1)) x)"),
            Ok("(union boolean number)".to_string())
        );
    }

    #[test]
    fn letrec_supports_recursion() {
        assert_eq!(
            type_of("(letrec (((p1 : (number -> number)) (lambda ((x : number)) : number (* x x)))) p1)"),
            Ok("(number -> number)".to_string())
        );
        assert_eq!(
            type_of("(letrec (((p1 : (number -> number)) (lambda ((x : number)) : number (* x x)))) (p1 2))"),
            Ok("number".to_string())
        );
    }

    #[test]
    fn letrec_supports_mutual_recursion() {
        let code = "
            (letrec (((odd? : (number -> boolean))
                      (lambda ((n : number)) : boolean (if (= n 0) #f (even? (- n 1)))))
                     ((even? : (number -> boolean))
                      (lambda ((n : number)) : boolean (if (= n 0) #t (odd? (- n 1))))))
              (odd? 12))";

        assert_eq!(type_of(code), Ok("boolean".to_string()));
    }

    #[test]
    fn letrec_only_binds_procedures() {
        assert!(matches!(
            type_of("(letrec (((x : number) 1)) x)"),
            Err(TypeErrorKind::LetrecNonProcedure(_))
        ));
    }

    #[test]
    fn letrec_checks_each_body_against_its_return_type() {
        assert!(matches!(
            type_of("(letrec (((f : (number -> boolean)) (lambda ((n : number)) : boolean n))) f)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn letrec_binds_the_signature_of_each_lambda() {
        assert_eq!(
            type_of("(letrec (((f : (number -> boolean)) (lambda ((x : number)) : number x))) (f 1))"),
            Ok("number".to_string())
        );
        assert_eq!(
            type_of("(letrec (((f : number) (lambda () : string \"s\"))) f)"),
            Ok("(Empty -> string)".to_string())
        );
    }

    #[test]
    fn define_is_void() {
        assert_eq!(type_of("(define (foo : number) 5)"), Ok("void".to_string()));
        assert_eq!(
            type_of("(define (foo : (number * number -> number)) (lambda ((x : number) (y : number)) : number (+ x y)))"),
            Ok("void".to_string())
        );
        assert_eq!(
            type_of("(define (x : (Empty -> number)) (lambda () : number 1))"),
            Ok("void".to_string())
        );
    }

    #[test]
    fn define_sees_its_own_name() {
        let code = "
            (define (fact : (number -> number))
              (lambda ((n : number)) : number
                (if (= n 0) 1 (* n (fact (- n 1))))))";

        assert_eq!(type_of(code), Ok("void".to_string()));
    }

    #[test]
    fn define_checks_the_declared_type() {
        assert!(matches!(
            type_of("(define (x : number) #t)"),
            Err(TypeErrorKind::Incompatible { .. })
        ));
    }

    #[test]
    fn unions_flow_into_procedure_arguments() {
        assert_eq!(
            type_of("(lambda ((t : ((union number boolean) -> string))) : string (t #t))"),
            Ok("(((union boolean number) -> string) -> string)".to_string())
        );
    }

    #[test]
    fn unimplemented_primitives() {
        assert_eq!(
            type_of("(car 1)"),
            Err(TypeErrorKind::UnimplementedPrimitive("car".to_string()))
        );
    }
}
