//! The context is primarily a map from variable names to types that is on the left side of a type
//! judgment. It is persistent: extending a context builds a new one and leaves the old one intact,
//! so every scope keeps seeing its own bindings after an inner scope is gone.

use std::{cell::Cell, rc::Rc};

use itertools::Itertools;
use tyl_location::ByteRange;

use crate::error::{TypeError, TypeErrorKind};
use crate::types::{Type, TypeExpr};

#[derive(Clone, Default)]
pub struct Ctx {
    counter: Rc<Cell<usize>>,
    pub map: im_rc::HashMap<String, Type>,
    pub location: ByteRange,
}

impl Ctx {
    /// A context without bindings, every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extends a context with a new binding. It shadows any binding with the same name.
    pub fn extend(&self, name: String, typ: Type) -> Self {
        Self {
            map: self.map.update(name, typ),
            ..self.clone()
        }
    }

    /// Extends a context with names paired positionally with types. Both sides must have the same
    /// length, later pairs shadow earlier ones with the same name.
    pub fn extend_all(
        &self,
        names: impl IntoIterator<Item = String>,
        types: impl IntoIterator<Item = Type>,
    ) -> Self {
        let mut map = self.map.clone();
        for (name, typ) in names.into_iter().zip_eq(types) {
            map.insert(name, typ);
        }

        Self {
            map,
            ..self.clone()
        }
    }

    /// Sets the current location that we are type checking inside of the context.
    pub fn set_position(&self, location: ByteRange) -> Self {
        let mut c = self.clone();
        c.location = location;
        c
    }

    /// Looks up a variable name in the context.
    pub fn lookup(&self, name: &str) -> Result<Type, TypeError> {
        match self.map.get(name) {
            Some(typ) => Ok(typ.clone()),
            None => self.error(TypeErrorKind::UnboundVariable(name.to_string())),
        }
    }

    /// Creates a new name for a type variable. Names are never reused by contexts that share the
    /// same origin.
    pub fn new_name(&self) -> String {
        fn format_radix(mut x: usize) -> String {
            let mut result = vec![];
            loop {
                result.push((b'a' + (x % 26) as u8) as char);
                x /= 26;
                if x == 0 {
                    break;
                }
            }
            format!("'{}", result.into_iter().rev().collect::<String>())
        }

        let current = self.counter.get();
        self.counter.set(current + 1);
        format_radix(current)
    }

    /// Creates a type variable that is different from every other one created by this context.
    pub fn new_var(&self) -> Type {
        TypeExpr::var(self.new_name())
    }

    pub fn error<T>(&self, kind: TypeErrorKind) -> Result<T, TypeError> {
        Err(TypeError {
            kind,
            location: self.location,
        })
    }
}
