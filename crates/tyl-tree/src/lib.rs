//! This module joins the trees that come out of the parser. It does not have dependency with
//! anything of the toolchain, only with tyl-location that provides constructions to localize things
//! in the source code.
//!
//! The only tree available is [r#abstract], a purely syntactic tree where every binding site
//! already carries its type annotation.

pub mod r#abstract;
