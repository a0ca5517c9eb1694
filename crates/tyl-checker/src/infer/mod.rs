//! Exposes an interface to compute the type of expressions, sequences, programs and type
//! annotations. The main construction of this module is the [Infer] trait.

pub mod expr;
pub mod prim;
pub mod program;
pub mod typ;

/// This trait exposes a function called [Infer::infer] that computes the type of a fully annotated
/// construction. A type rule that expresses this is:
///
/// ```md
///    G, x1: t1, ..., xn: tn |- body => t       t ~ r
/// -----------------------------------------------------
///   G |- (lambda ((x1 : t1) ... (xn : tn)) : r body) => (t1 * ... * tn -> r)
/// ```
///
pub trait Infer {
    type Context<'a>;
    type Return;

    /// Computes the type of a construction.
    fn infer(self, ctx: Self::Context<'_>) -> Self::Return;
}
