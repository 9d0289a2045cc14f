//! The lilang type system.
//!
//! Types are shared-immutable: every holder keeps a [`TypeRef`]. Equality
//! of types is structural ([`Type::matches`]); tuples exist only as the
//! synthesized result of multi-return calls and are never written in
//! source.

use std::fmt;
use std::rc::Rc;

/// Shared-immutable handle to a type.
pub type TypeRef = Rc<Type>;

/// A lilang type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Float,
    String,
    Bool,
    /// Function type with ordered parameter and result types.
    Fn {
        params: Vec<TypeRef>,
        results: Vec<TypeRef>,
    },
    /// Array of a base type.
    Array(TypeRef),
    /// Pointer to a base type.
    Pointer(TypeRef),
    /// Synthesized result of a multi-return call.
    Tuple(Vec<TypeRef>),
    /// Sentinel carried by failed expressions; suppresses cascading
    /// errors because every check short-circuits on it.
    Invalid,
}

impl Type {
    pub fn int() -> TypeRef {
        Rc::new(Type::Int)
    }

    pub fn float() -> TypeRef {
        Rc::new(Type::Float)
    }

    pub fn string() -> TypeRef {
        Rc::new(Type::String)
    }

    pub fn bool() -> TypeRef {
        Rc::new(Type::Bool)
    }

    pub fn invalid() -> TypeRef {
        Rc::new(Type::Invalid)
    }

    pub fn pointer_to(base: TypeRef) -> TypeRef {
        Rc::new(Type::Pointer(base))
    }

    pub fn array_of(base: TypeRef) -> TypeRef {
        Rc::new(Type::Array(base))
    }

    pub fn tuple(parts: Vec<TypeRef>) -> TypeRef {
        Rc::new(Type::Tuple(parts))
    }

    pub fn func(params: Vec<TypeRef>, results: Vec<TypeRef>) -> TypeRef {
        Rc::new(Type::Fn { params, results })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Type::Invalid)
    }

    /// Int or float.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Types usable with the comparison operators.
    pub fn is_comparable(&self) -> bool {
        matches!(self, Type::Int | Type::Float | Type::Bool)
    }

    /// Structural type equality: same kind and, recursively, matching
    /// bases, parameters, results, and tuple components.
    pub fn matches(a: &TypeRef, b: &TypeRef) -> bool {
        match (&**a, &**b) {
            (Type::Int, Type::Int)
            | (Type::Float, Type::Float)
            | (Type::String, Type::String)
            | (Type::Bool, Type::Bool)
            | (Type::Invalid, Type::Invalid) => true,
            (Type::Array(x), Type::Array(y)) | (Type::Pointer(x), Type::Pointer(y)) => {
                Self::matches(x, y)
            }
            (
                Type::Fn {
                    params: p1,
                    results: r1,
                },
                Type::Fn {
                    params: p2,
                    results: r2,
                },
            ) => {
                p1.len() == p2.len()
                    && r1.len() == r2.len()
                    && p1.iter().zip(p2).all(|(x, y)| Self::matches(x, y))
                    && r1.iter().zip(r2).all(|(x, y)| Self::matches(x, y))
            }
            (Type::Tuple(t1), Type::Tuple(t2)) => {
                t1.len() == t2.len() && t1.iter().zip(t2).all(|(x, y)| Self::matches(x, y))
            }
            _ => false,
        }
    }

    /// A value of type `from` may be assigned to a slot of type `to`:
    /// matching types, or implicit conversion between int and float.
    pub fn assignable(from: &TypeRef, to: &TypeRef) -> bool {
        if Self::matches(from, to) {
            return true;
        }
        matches!(
            (&**from, &**to),
            (Type::Int, Type::Float) | (Type::Float, Type::Int)
        )
    }

    /// Explicit casts permit exactly what assignment permits.
    pub fn castable(from: &TypeRef, to: &TypeRef) -> bool {
        Self::assignable(from, to)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::String => write!(f, "string"),
            Type::Bool => write!(f, "bool"),
            Type::Fn { params, results } => {
                write!(f, "fn(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ")(")?;
                for (i, r) in results.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", r)?;
                }
                write!(f, ")")
            }
            Type::Array(base) => write!(f, "[]{}", base),
            Type::Pointer(base) => write!(f, "*{}", base),
            Type::Tuple(parts) => {
                write!(f, "(")?;
                for (i, p) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, ")")
            }
            Type::Invalid => write!(f, "invalid"),
        }
    }
}
