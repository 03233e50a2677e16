//! Static schema descriptions
//!
//! A [`Shape`] describes a type without needing an instance of it: either a
//! scalar leaf, a record with an ordered list of [`FieldDescriptor`]s, or one
//! level of indirection (`Option<T>`, `Box<T>`, `&T`, ...) around another shape.

use std::fmt;

/// Structural description of a type
#[derive(Clone)]
pub enum Shape {
    /// Anything that is not a record: scalars, strings, sequences, maps, enums
    Leaf,
    /// A record with named fields in declaration order
    Record(Record),
    /// A pointer-like wrapper around another type
    Indirect(fn() -> Shape),
}

impl Shape {
    /// Shape of any leaf type, usable as a field shape function
    pub fn leaf() -> Shape {
        Shape::Leaf
    }

    /// Unwrap at most one level of indirection
    pub fn resolve(self) -> Shape {
        match self {
            Shape::Indirect(inner) => inner(),
            shape => shape,
        }
    }

    /// The record behind this shape, after resolving one level of indirection
    pub fn into_record(self) -> Option<Record> {
        match self.resolve() {
            Shape::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Whether this shape is a record, after resolving one level of indirection
    pub fn is_record(&self) -> bool {
        self.clone().into_record().is_some()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Leaf => f.write_str("Leaf"),
            Shape::Record(record) => f.debug_tuple("Record").field(record).finish(),
            // The wrapped shape is not expanded so that debug output never recurses.
            Shape::Indirect(_) => f.write_str("Indirect(..)"),
        }
    }
}

/// A record type: its name and fields in declaration order
#[derive(Debug, Clone)]
pub struct Record {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Record {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Value of the opt-out annotation that excludes a field and its subtree
pub const OPT_OUT: &str = "false";

/// One field of a record together with its binding metadata
#[derive(Clone)]
pub struct FieldDescriptor {
    /// Declared field identifier
    name: &'static str,
    /// Binding key segment, empty when the field is not configurable
    key: &'static str,
    /// Raw opt-out annotation, if present
    env: Option<&'static str>,
    /// Shape of the field type; `None` when the type was never inspected
    shape: Option<fn() -> Shape>,
}

impl FieldDescriptor {
    /// A field whose type is a leaf
    pub fn leaf(name: &'static str) -> Self {
        Self {
            name,
            key: "",
            env: None,
            shape: None,
        }
    }

    /// A field whose type is described by `shape`
    pub fn with_shape(name: &'static str, shape: fn() -> Shape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::leaf(name)
        }
    }

    /// A field of type `T`
    pub fn of<T: crate::Describe + ?Sized>(name: &'static str) -> Self {
        Self::with_shape(name, T::shape)
    }

    /// Set the binding key annotation
    pub fn key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    /// Set the opt-out annotation
    pub fn env(mut self, env: &'static str) -> Self {
        self.env = Some(env);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Binding key segment; empty when the field carries no key annotation
    pub fn binding_key(&self) -> &'static str {
        self.key
    }

    /// Raw opt-out annotation
    pub fn env_annotation(&self) -> Option<&'static str> {
        self.env
    }

    /// True when the opt-out annotation is literally `"false"`
    pub fn is_opted_out(&self) -> bool {
        self.env == Some(OPT_OUT)
    }

    /// Shape of the field type, with one level of indirection resolved
    pub fn shape(&self) -> Shape {
        self.shape.map_or(Shape::Leaf, |shape| shape()).resolve()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("env", &self.env)
            .finish_non_exhaustive()
    }
}
