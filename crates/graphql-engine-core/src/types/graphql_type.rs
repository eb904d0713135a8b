use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::sync::Arc;

/// A named type defined within a [`Schema`](crate::Schema).
///
/// Each variant shares its definition through an [`Arc`], so cloning a
/// `GraphQLType` is cheap and two clones refer to the same definition.
/// List and non-null wrappers are expressed by
/// [`TypeAnnotation`](crate::types::TypeAnnotation).
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
    Interface(Arc<InterfaceType>),
    Object(Arc<ObjectType>),
    Scalar(Arc<ScalarType>),
    Union(Arc<UnionType>),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    /// Whether both values refer to the very same definition (not merely
    /// definitions with equal names).
    pub fn is_same_definition(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::InputObject(a), Self::InputObject(b)) => Arc::ptr_eq(a, b),
            (Self::Interface(a), Self::Interface(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Scalar(a), Self::Scalar(b)) => Arc::ptr_eq(a, b),
            (Self::Union(a), Self::Union(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Scalars, enums and input objects may appear in argument, input field
    /// and variable positions.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Everything but input objects may appear as a field's type.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    /// Scalars and enums have no subfields.
    pub fn is_leaf_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    /// Objects, interfaces and unions take a selection set.
    pub fn is_composite_type(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    pub fn is_abstract_type(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_object_arc(&self) -> Option<&Arc<ObjectType>> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    /// The fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Object(t) => Some(t.fields()),
            Self::Interface(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Looks up a field of an object or interface type.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().and_then(|fields| fields.get(name))
    }
}

impl From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(Arc::new(value))
    }
}

impl From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(Arc::new(value))
    }
}

impl From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(Arc::new(value))
    }
}

impl From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(Arc::new(value))
    }
}

impl From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(Arc::new(value))
    }
}

impl From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(Arc::new(value))
    }
}
