//! The closed grammar of type expressions. Types are immutable and shared through [Rc], so
//! combining two types (e.g. [TypeExpr::union]) always builds a new value.

use std::{
    fmt::{self, Display},
    rc::Rc,
};

use itertools::Itertools;

pub type Type = Rc<TypeExpr>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Number,
    Boolean,
    String,
    Void,

    /// A rigid placeholder. It's never substituted, two variables are the same type only if their
    /// names are the same.
    Var(String),

    Proc(Vec<Type>, Type),

    /// Flattened, deduplicated and sorted by the rendered form of each component when built with
    /// [TypeExpr::union] or [TypeExpr::union_of].
    Union(Vec<Type>),
}

/// The variant of a [TypeExpr] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Number,
    Boolean,
    String,
    Void,
    Var,
    Proc,
    Union,
}

impl TypeExpr {
    pub fn number() -> Type {
        Rc::new(Self::Number)
    }

    pub fn boolean() -> Type {
        Rc::new(Self::Boolean)
    }

    pub fn string() -> Type {
        Rc::new(Self::String)
    }

    pub fn void() -> Type {
        Rc::new(Self::Void)
    }

    pub fn var(name: impl Into<String>) -> Type {
        Rc::new(Self::Var(name.into()))
    }

    pub fn proc(params: Vec<Type>, ret: Type) -> Type {
        Rc::new(Self::Proc(params, ret))
    }

    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Number => TypeTag::Number,
            Self::Boolean => TypeTag::Boolean,
            Self::String => TypeTag::String,
            Self::Void => TypeTag::Void,
            Self::Var(_) => TypeTag::Var,
            Self::Proc(..) => TypeTag::Proc,
            Self::Union(_) => TypeTag::Union,
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Number | Self::Boolean | Self::String | Self::Void)
    }

    pub fn is_proc(&self) -> bool {
        matches!(self, Self::Proc(..))
    }

    /// The alternatives of a type: the components of a union or the type itself.
    pub fn components(self: &Rc<Self>) -> Vec<Type> {
        match &**self {
            Self::Union(components) => components.clone(),
            _ => vec![self.clone()],
        }
    }

    /// Builds the union of two types. Unions on either side are flattened, repeated components
    /// (by structural equality) are removed and the rest is sorted by its rendered form. If only
    /// one component is left, that component is returned instead of a union.
    pub fn union(left: Type, right: Type) -> Type {
        Self::union_of([left, right])
    }

    /// N-ary version of [TypeExpr::union].
    pub fn union_of(members: impl IntoIterator<Item = Type>) -> Type {
        let mut components = members
            .into_iter()
            .flat_map(|member| member.components())
            .unique()
            .collect::<Vec<_>>();

        components.sort_by_cached_key(|component| component.to_string());

        match components.len() {
            1 => components.remove(0),
            _ => Rc::new(Self::Union(components)),
        }
    }
}

fn fmt_union(f: &mut fmt::Formatter<'_>, components: &[Type]) -> fmt::Result {
    match components {
        [] => write!(f, "(union)"),
        [single] => write!(f, "{single}"),
        [first, rest @ ..] => {
            write!(f, "(union {first} ")?;
            fmt_union(f, rest)?;
            write!(f, ")")
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::String => write!(f, "string"),
            Self::Void => write!(f, "void"),
            Self::Var(name) => write!(f, "{name}"),
            Self::Proc(params, ret) if params.is_empty() => write!(f, "(Empty -> {ret})"),
            Self::Proc(params, ret) => write!(f, "({} -> {ret})", params.iter().join(" * ")),
            Self::Union(components) => fmt_union(f, components),
        }
    }
}
