//! Type descriptors
//!
//! Run-time description of destination field types. Records report a
//! [`TypeDesc`] per field; coercion and transformer factories work against it.

use std::fmt;

/// Numeric primitive kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl NumberKind {
    /// Signed integer kinds
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// Unsigned integer kinds
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Floating point kinds
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Whether a signed value fits this kind without truncation
    pub fn holds_int(self, value: i64) -> bool {
        match self {
            Self::I8 => i8::try_from(value).is_ok(),
            Self::I16 => i16::try_from(value).is_ok(),
            Self::I32 => i32::try_from(value).is_ok(),
            Self::I64 => true,
            Self::Isize => isize::try_from(value).is_ok(),
            _ => false,
        }
    }

    /// Whether an unsigned value fits this kind without truncation
    pub fn holds_uint(self, value: u64) -> bool {
        match self {
            Self::U8 => u8::try_from(value).is_ok(),
            Self::U16 => u16::try_from(value).is_ok(),
            Self::U32 => u32::try_from(value).is_ok(),
            Self::U64 => true,
            Self::Usize => usize::try_from(value).is_ok(),
            _ => false,
        }
    }

    /// Rust spelling of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// Declared type of a record field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// Accepts any value
    Any,
    Bool,
    Number(NumberKind),
    String,
    /// Optional slot; `None` is the nil pointer
    Ptr(Box<TypeDesc>),
    /// Homogeneous sequence
    Seq(Box<TypeDesc>),
    /// String-keyed map
    Map(Box<TypeDesc>),
    /// Nested record, by type name
    Record(&'static str),
    /// Concrete shared object (`Arc<T>`), by identity
    Object(&'static str),
    /// Trait-object slot (`Arc<dyn Trait>`), by identity
    Interface(&'static str),
}

impl TypeDesc {
    /// Pointer to `inner`
    pub fn ptr(inner: TypeDesc) -> Self {
        Self::Ptr(Box::new(inner))
    }

    /// Sequence of `elem`
    pub fn seq(elem: TypeDesc) -> Self {
        Self::Seq(Box::new(elem))
    }

    /// Map of string to `value`
    pub fn map(value: TypeDesc) -> Self {
        Self::Map(Box::new(value))
    }

    /// Interface slot for the trait object `T`
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::Interface(interface_identity::<T>())
    }

    /// Object slot for the shared type `T`
    pub fn object<T: ?Sized + 'static>() -> Self {
        Self::Object(std::any::type_name::<T>())
    }

    pub fn is_ptr(&self) -> bool {
        matches!(self, Self::Ptr(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface(_))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Pointee of a pointer type
    pub fn elem(&self) -> Option<&TypeDesc> {
        match self {
            Self::Ptr(inner) | Self::Seq(inner) | Self::Map(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Value"),
            Self::Bool => f.write_str("bool"),
            Self::Number(kind) => f.write_str(kind.as_str()),
            Self::String => f.write_str("String"),
            Self::Ptr(inner) => write!(f, "Option<{inner}>"),
            Self::Seq(elem) => write!(f, "Vec<{elem}>"),
            Self::Map(value) => write!(f, "Map<String, {value}>"),
            Self::Record(name) => f.write_str(name),
            Self::Object(name) => write!(f, "Arc<{name}>"),
            Self::Interface(name) => write!(f, "Arc<{name}>"),
        }
    }
}

/// Stable identity of a (trait object) type
///
/// Used as the source path of auto-bound interface fields and as the key
/// under which implementations are registered, e.g.
/// `interface_identity::<dyn Logger>()`.
pub fn interface_identity<T: ?Sized + 'static>() -> &'static str {
    std::any::type_name::<T>()
}
