//! Type identities, descriptors and the declared type graph.
//!
//! A [`TypeDescriptor`] tells the converter what shape of value to produce.
//! Identities are plain [`TypeId`] tokens; the relations between them
//! (supertype, implemented interfaces) are declared as data in a
//! [`TypeGraph`] rather than discovered at runtime.
//!
//! ## Examples
//!
//! ```rust
//! use conf_literal::{parametrized, TypeDescriptor, TypeId};
//!
//! let int = TypeDescriptor::scalar(TypeId::INTEGER);
//! let list = parametrized(TypeId::LIST, vec![int.clone()]);
//! assert_eq!(list.to_string(), "List<Integer>");
//!
//! let array = TypeDescriptor::array_of(int);
//! assert_eq!(array.to_string(), "Integer[]");
//! ```

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Opaque, comparable name of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(Cow<'static, str>);

impl TypeId {
    pub const OBJECT: TypeId = TypeId::from_static("Object");
    pub const NUMBER: TypeId = TypeId::from_static("Number");
    pub const COMPARABLE: TypeId = TypeId::from_static("Comparable");
    pub const SERIALIZABLE: TypeId = TypeId::from_static("Serializable");
    pub const CHAR_SEQUENCE: TypeId = TypeId::from_static("CharSequence");
    pub const STRING: TypeId = TypeId::from_static("String");

    pub const INT: TypeId = TypeId::from_static("int");
    pub const INTEGER: TypeId = TypeId::from_static("Integer");
    pub const LONG: TypeId = TypeId::from_static("long");
    pub const LONG_OBJ: TypeId = TypeId::from_static("Long");
    pub const BOOLEAN: TypeId = TypeId::from_static("boolean");
    pub const BOOLEAN_OBJ: TypeId = TypeId::from_static("Boolean");
    pub const DOUBLE: TypeId = TypeId::from_static("double");
    pub const DOUBLE_OBJ: TypeId = TypeId::from_static("Double");

    pub const ITERABLE: TypeId = TypeId::from_static("Iterable");
    pub const COLLECTION: TypeId = TypeId::from_static("Collection");
    pub const SET: TypeId = TypeId::from_static("Set");
    pub const LIST: TypeId = TypeId::from_static("List");

    /// Creates an identity from a static name, usable in constants.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        TypeId(Cow::Borrowed(name))
    }

    /// Creates an identity from any name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::TypeId;
    ///
    /// assert_eq!(TypeId::new("Integer"), TypeId::INTEGER);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        TypeId(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the integer kinds handled by the range grammar.
    #[inline]
    #[must_use]
    pub fn is_integral(&self) -> bool {
        *self == TypeId::INT
            || *self == TypeId::INTEGER
            || *self == TypeId::LONG
            || *self == TypeId::LONG_OBJ
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeId {
    fn from(name: &'static str) -> Self {
        TypeId::from_static(name)
    }
}

/// The target shape of a conversion.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A plain type: scalar, enum or an unparameterized class
    Scalar(TypeId),
    /// A parameterized type such as `List<Integer>`
    Generic {
        raw: TypeId,
        args: Vec<TypeDescriptor>,
    },
    /// A fixed-length array of the element type
    ArrayOf(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    #[must_use]
    pub fn scalar(id: impl Into<TypeId>) -> Self {
        TypeDescriptor::Scalar(id.into())
    }

    #[must_use]
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(element))
    }

    /// Returns the scalar identity if this is a scalar descriptor.
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&TypeId> {
        match self {
            TypeDescriptor::Scalar(id) => Some(id),
            _ => None,
        }
    }

    /// Returns `true` if this is a scalar integer kind (`int`, `Integer`, `long`, `Long`).
    #[inline]
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.as_scalar().map_or(false, TypeId::is_integral)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Scalar(id) => write!(f, "{}", id),
            TypeDescriptor::Generic { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeDescriptor::ArrayOf(element) => write!(f, "{}[]", element),
        }
    }
}

/// Builds a [`TypeDescriptor::Generic`] from a raw identity and its element types.
///
/// No arity check happens here; a collection descriptor with anything other
/// than one element type fails at conversion time with [`Error::Arity`](crate::Error::Arity).
///
/// # Examples
///
/// ```rust
/// use conf_literal::{parametrized, TypeDescriptor, TypeId};
///
/// let set = parametrized(TypeId::SET, vec![TypeDescriptor::scalar(TypeId::STRING)]);
/// assert_eq!(set.to_string(), "Set<String>");
/// ```
#[must_use]
pub fn parametrized(raw: impl Into<TypeId>, args: Vec<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor::Generic {
        raw: raw.into(),
        args,
    }
}

/// What kind of type a graph entry declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Primitive,
    Class,
    Interface,
    /// An enumeration with its member names in declaration order
    Enum(Vec<String>),
}

/// Declared relations of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub supertype: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
}

impl TypeInfo {
    #[must_use]
    pub fn primitive() -> Self {
        TypeInfo {
            kind: TypeKind::Primitive,
            supertype: None,
            interfaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(supertype: Option<TypeId>, interfaces: Vec<TypeId>) -> Self {
        TypeInfo {
            kind: TypeKind::Class,
            supertype,
            interfaces,
        }
    }

    #[must_use]
    pub fn interface(extends: Vec<TypeId>) -> Self {
        TypeInfo {
            kind: TypeKind::Interface,
            supertype: None,
            interfaces: extends,
        }
    }

    /// Direct ancestors: the supertype first, then interfaces in declaration order.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeId> {
        self.supertype.iter().chain(self.interfaces.iter())
    }

    /// Member names if this is an enum.
    #[must_use]
    pub fn enum_members(&self) -> Option<&[String]> {
        match &self.kind {
            TypeKind::Enum(members) => Some(members),
            _ => None,
        }
    }
}

/// The declared supertype/interface graph the registry is closed over.
///
/// Entries keep declaration order so registry construction is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeGraph {
    types: IndexMap<TypeId, TypeInfo>,
}

impl TypeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in scalar and collection types with their usual ancestry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::{TypeGraph, TypeId};
    ///
    /// let graph = TypeGraph::standard();
    /// let set = graph.get(&TypeId::SET).unwrap();
    /// assert_eq!(set.ancestors().next(), Some(&TypeId::COLLECTION));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let boxed = |supertype: TypeId| {
            TypeInfo::class(
                Some(supertype),
                vec![TypeId::COMPARABLE, TypeId::SERIALIZABLE],
            )
        };

        let mut graph = TypeGraph::new();
        graph
            .declare(TypeId::OBJECT, TypeInfo::class(None, Vec::new()))
            .declare(TypeId::COMPARABLE, TypeInfo::interface(Vec::new()))
            .declare(TypeId::SERIALIZABLE, TypeInfo::interface(Vec::new()))
            .declare(TypeId::CHAR_SEQUENCE, TypeInfo::interface(Vec::new()))
            .declare(
                TypeId::NUMBER,
                TypeInfo::class(Some(TypeId::OBJECT), vec![TypeId::SERIALIZABLE]),
            )
            .declare(
                TypeId::STRING,
                TypeInfo::class(
                    Some(TypeId::OBJECT),
                    vec![
                        TypeId::SERIALIZABLE,
                        TypeId::COMPARABLE,
                        TypeId::CHAR_SEQUENCE,
                    ],
                ),
            )
            .declare(TypeId::INT, TypeInfo::primitive())
            .declare(TypeId::INTEGER, boxed(TypeId::NUMBER))
            .declare(TypeId::LONG, TypeInfo::primitive())
            .declare(TypeId::LONG_OBJ, boxed(TypeId::NUMBER))
            .declare(TypeId::BOOLEAN, TypeInfo::primitive())
            .declare(TypeId::BOOLEAN_OBJ, boxed(TypeId::OBJECT))
            .declare(TypeId::DOUBLE, TypeInfo::primitive())
            .declare(TypeId::DOUBLE_OBJ, boxed(TypeId::NUMBER))
            .declare(TypeId::ITERABLE, TypeInfo::interface(Vec::new()))
            .declare(
                TypeId::COLLECTION,
                TypeInfo::interface(vec![TypeId::ITERABLE]),
            )
            .declare(TypeId::SET, TypeInfo::interface(vec![TypeId::COLLECTION]))
            .declare(TypeId::LIST, TypeInfo::interface(vec![TypeId::COLLECTION]));
        graph
    }

    /// Declares (or redeclares) a type.
    pub fn declare(&mut self, id: impl Into<TypeId>, info: TypeInfo) -> &mut Self {
        self.types.insert(id.into(), info);
        self
    }

    /// Declares an enumeration with the given member names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conf_literal::{TypeGraph, TypeId};
    ///
    /// let mut graph = TypeGraph::standard();
    /// graph.declare_enum(TypeId::new("Color"), ["RED", "GREEN"]);
    /// assert!(graph.is_enum(&TypeId::new("Color")));
    /// ```
    pub fn declare_enum<I, S>(&mut self, id: impl Into<TypeId>, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members.into_iter().map(Into::into).collect();
        self.declare(
            id,
            TypeInfo {
                kind: TypeKind::Enum(members),
                supertype: None,
                interfaces: vec![TypeId::COMPARABLE, TypeId::SERIALIZABLE],
            },
        )
    }

    #[must_use]
    pub fn get(&self, id: &TypeId) -> Option<&TypeInfo> {
        self.types.get(id)
    }

    #[must_use]
    pub fn is_enum(&self, id: &TypeId) -> bool {
        self.enum_members(id).is_some()
    }

    #[must_use]
    pub fn enum_members(&self, id: &TypeId) -> Option<&[String]> {
        self.get(id).and_then(TypeInfo::enum_members)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
