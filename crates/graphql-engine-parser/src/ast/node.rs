//! A closed, kind-tagged view over every AST node type, plus the static
//! table of each kind's ordered child fields that drives traversal.

use crate::ast::*;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

macro_rules! ast_node_kinds {
    ($($kind:ident),* $(,)?) => {
        /// The kind of an AST node.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum NodeKind {
            $($kind),*
        }

        /// A borrowed reference to any AST node.
        #[derive(Clone, Copy, Debug)]
        pub enum AstNodeRef<'a> {
            $($kind(&'a $kind)),*
        }

        /// An owned AST node of any kind. Visitors hand these back to replace
        /// the node being visited.
        #[derive(Clone, Debug, PartialEq)]
        pub enum AstNode {
            $($kind($kind)),*
        }

        impl<'a> AstNodeRef<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(AstNodeRef::$kind(_) => NodeKind::$kind),*
                }
            }

            pub fn span(&self) -> Option<GraphQLSourceSpan> {
                match self {
                    $(AstNodeRef::$kind(node) => node.span),*
                }
            }

            pub fn to_owned_node(&self) -> AstNode {
                match self {
                    $(AstNodeRef::$kind(node) => AstNode::$kind((*node).clone())),*
                }
            }

            /// The address of the referenced node. Stable for as long as the
            /// tree is borrowed, so it can key per-node memo tables.
            pub fn addr(&self) -> usize {
                match self {
                    $(AstNodeRef::$kind(node) => *node as *const $kind as usize),*
                }
            }
        }

        impl AstNode {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(AstNode::$kind(_) => NodeKind::$kind),*
                }
            }

            pub fn as_node_ref(&self) -> AstNodeRef<'_> {
                match self {
                    $(AstNode::$kind(node) => AstNodeRef::$kind(node)),*
                }
            }
        }

        $(
            impl<'a> From<&'a $kind> for AstNodeRef<'a> {
                fn from(node: &'a $kind) -> Self {
                    AstNodeRef::$kind(node)
                }
            }

            impl From<$kind> for AstNode {
                fn from(node: $kind) -> Self {
                    AstNode::$kind(node)
                }
            }

            impl TryFrom<AstNode> for $kind {
                type Error = AstNode;

                fn try_from(node: AstNode) -> Result<Self, AstNode> {
                    match node {
                        AstNode::$kind(node) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

ast_node_kinds!(
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
);

/// A named child slot of a node. Each slot holds zero or more child nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChildField {
    Alias,
    Arguments,
    DefaultValue,
    Definition,
    Definitions,
    Directives,
    Fields,
    Interfaces,
    Locations,
    Name,
    OperationTypes,
    SelectionSet,
    Selections,
    Type,
    TypeCondition,
    Types,
    Value,
    Values,
    Variable,
    VariableDefinitions,
}

impl NodeKind {
    /// The child slots of this kind, in traversal order.
    pub fn child_fields(&self) -> &'static [ChildField] {
        use ChildField as F;
        match self {
            NodeKind::Name
            | NodeKind::IntValue
            | NodeKind::FloatValue
            | NodeKind::StringValue
            | NodeKind::BooleanValue
            | NodeKind::NullValue
            | NodeKind::EnumValue => &[],
            NodeKind::Document => &[F::Definitions],
            NodeKind::OperationDefinition => {
                &[F::Name, F::VariableDefinitions, F::Directives, F::SelectionSet]
            },
            NodeKind::VariableDefinition => &[F::Variable, F::Type, F::DefaultValue],
            NodeKind::Variable => &[F::Name],
            NodeKind::SelectionSet => &[F::Selections],
            NodeKind::Field => {
                &[F::Alias, F::Name, F::Arguments, F::Directives, F::SelectionSet]
            },
            NodeKind::Argument => &[F::Name, F::Value],
            NodeKind::FragmentSpread => &[F::Name, F::Directives],
            NodeKind::InlineFragment => {
                &[F::TypeCondition, F::Directives, F::SelectionSet]
            },
            NodeKind::FragmentDefinition => {
                &[F::Name, F::TypeCondition, F::Directives, F::SelectionSet]
            },
            NodeKind::ListValue => &[F::Values],
            NodeKind::ObjectValue => &[F::Fields],
            NodeKind::ObjectField => &[F::Name, F::Value],
            NodeKind::Directive => &[F::Name, F::Arguments],
            NodeKind::NamedType => &[F::Name],
            NodeKind::ListType | NodeKind::NonNullType => &[F::Type],
            NodeKind::SchemaDefinition => &[F::Directives, F::OperationTypes],
            NodeKind::OperationTypeDefinition => &[F::Type],
            NodeKind::ScalarTypeDefinition => &[F::Name, F::Directives],
            NodeKind::ObjectTypeDefinition => {
                &[F::Name, F::Interfaces, F::Directives, F::Fields]
            },
            NodeKind::FieldDefinition => {
                &[F::Name, F::Arguments, F::Type, F::Directives]
            },
            NodeKind::InputValueDefinition => {
                &[F::Name, F::Type, F::DefaultValue, F::Directives]
            },
            NodeKind::InterfaceTypeDefinition
            | NodeKind::InputObjectTypeDefinition => &[F::Name, F::Directives, F::Fields],
            NodeKind::UnionTypeDefinition => &[F::Name, F::Directives, F::Types],
            NodeKind::EnumTypeDefinition => &[F::Name, F::Directives, F::Values],
            NodeKind::EnumValueDefinition => &[F::Name, F::Directives],
            NodeKind::TypeExtensionDefinition => &[F::Definition],
            NodeKind::DirectiveDefinition => &[F::Name, F::Arguments, F::Locations],
        }
    }
}

// =============================================================================
// Wrapper enums to node references and back
// =============================================================================

impl<'a> From<&'a Definition> for AstNodeRef<'a> {
    fn from(definition: &'a Definition) -> Self {
        match definition {
            Definition::Operation(def) => def.into(),
            Definition::Fragment(def) => def.into(),
            Definition::Schema(def) => def.into(),
            Definition::ScalarType(def) => def.into(),
            Definition::ObjectType(def) => def.into(),
            Definition::InterfaceType(def) => def.into(),
            Definition::UnionType(def) => def.into(),
            Definition::EnumType(def) => def.into(),
            Definition::InputObjectType(def) => def.into(),
            Definition::TypeExtension(def) => def.into(),
            Definition::Directive(def) => def.into(),
        }
    }
}

impl<'a> From<&'a Selection> for AstNodeRef<'a> {
    fn from(selection: &'a Selection) -> Self {
        match selection {
            Selection::Field(field) => field.into(),
            Selection::FragmentSpread(spread) => spread.into(),
            Selection::InlineFragment(inline) => inline.into(),
        }
    }
}

impl<'a> From<&'a Value> for AstNodeRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Variable(v) => v.into(),
            Value::Int(v) => v.into(),
            Value::Float(v) => v.into(),
            Value::String(v) => v.into(),
            Value::Boolean(v) => v.into(),
            Value::Null(v) => v.into(),
            Value::Enum(v) => v.into(),
            Value::List(v) => v.into(),
            Value::Object(v) => v.into(),
        }
    }
}

impl<'a> From<&'a TypeAnnotation> for AstNodeRef<'a> {
    fn from(annotation: &'a TypeAnnotation) -> Self {
        match annotation {
            TypeAnnotation::Named(t) => t.into(),
            TypeAnnotation::List(t) => t.as_ref().into(),
            TypeAnnotation::NonNull(t) => t.as_ref().into(),
        }
    }
}

impl TryFrom<AstNode> for Definition {
    type Error = AstNode;

    fn try_from(node: AstNode) -> Result<Self, AstNode> {
        Ok(match node {
            AstNode::OperationDefinition(def) => Definition::Operation(def),
            AstNode::FragmentDefinition(def) => Definition::Fragment(def),
            AstNode::SchemaDefinition(def) => Definition::Schema(def),
            AstNode::ScalarTypeDefinition(def) => Definition::ScalarType(def),
            AstNode::ObjectTypeDefinition(def) => Definition::ObjectType(def),
            AstNode::InterfaceTypeDefinition(def) => Definition::InterfaceType(def),
            AstNode::UnionTypeDefinition(def) => Definition::UnionType(def),
            AstNode::EnumTypeDefinition(def) => Definition::EnumType(def),
            AstNode::InputObjectTypeDefinition(def) => Definition::InputObjectType(def),
            AstNode::TypeExtensionDefinition(def) => Definition::TypeExtension(def),
            AstNode::DirectiveDefinition(def) => Definition::Directive(def),
            other => return Err(other),
        })
    }
}

impl TryFrom<AstNode> for Selection {
    type Error = AstNode;

    fn try_from(node: AstNode) -> Result<Self, AstNode> {
        Ok(match node {
            AstNode::Field(field) => Selection::Field(field),
            AstNode::FragmentSpread(spread) => Selection::FragmentSpread(spread),
            AstNode::InlineFragment(inline) => Selection::InlineFragment(inline),
            other => return Err(other),
        })
    }
}

impl TryFrom<AstNode> for Value {
    type Error = AstNode;

    fn try_from(node: AstNode) -> Result<Self, AstNode> {
        Ok(match node {
            AstNode::Variable(v) => Value::Variable(v),
            AstNode::IntValue(v) => Value::Int(v),
            AstNode::FloatValue(v) => Value::Float(v),
            AstNode::StringValue(v) => Value::String(v),
            AstNode::BooleanValue(v) => Value::Boolean(v),
            AstNode::NullValue(v) => Value::Null(v),
            AstNode::EnumValue(v) => Value::Enum(v),
            AstNode::ListValue(v) => Value::List(v),
            AstNode::ObjectValue(v) => Value::Object(v),
            other => return Err(other),
        })
    }
}

impl TryFrom<AstNode> for TypeAnnotation {
    type Error = AstNode;

    fn try_from(node: AstNode) -> Result<Self, AstNode> {
        Ok(match node {
            AstNode::NamedType(t) => TypeAnnotation::Named(t),
            AstNode::ListType(t) => TypeAnnotation::List(Box::new(t)),
            AstNode::NonNullType(t) => TypeAnnotation::NonNull(Box::new(t)),
            other => return Err(other),
        })
    }
}

// =============================================================================
// Child access and replacement
// =============================================================================

type Children<'a> = SmallVec<[AstNodeRef<'a>; 4]>;

fn one<'a>(node: impl Into<AstNodeRef<'a>>) -> Children<'a> {
    let mut children = SmallVec::new();
    children.push(node.into());
    children
}

fn many<'a, T: 'a>(nodes: impl IntoIterator<Item = &'a T>) -> Children<'a>
where
    &'a T: Into<AstNodeRef<'a>>,
{
    nodes.into_iter().map(Into::into).collect()
}

impl<'a> AstNodeRef<'a> {
    /// The nodes held in `field`, in order. Empty when this kind has no such
    /// slot or the slot is unset.
    pub fn children(&self, field: ChildField) -> Children<'a> {
        use ChildField as F;
        match (*self, field) {
            (AstNodeRef::Document(n), F::Definitions) => many(&n.definitions),

            (AstNodeRef::OperationDefinition(n), F::Name) => many(&n.name),
            (AstNodeRef::OperationDefinition(n), F::VariableDefinitions) => {
                many(&n.variable_definitions)
            },
            (AstNodeRef::OperationDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::OperationDefinition(n), F::SelectionSet) => one(&n.selection_set),

            (AstNodeRef::VariableDefinition(n), F::Variable) => one(&n.variable),
            (AstNodeRef::VariableDefinition(n), F::Type) => one(&n.var_type),
            (AstNodeRef::VariableDefinition(n), F::DefaultValue) => many(&n.default_value),

            (AstNodeRef::Variable(n), F::Name) => one(&n.name),
            (AstNodeRef::SelectionSet(n), F::Selections) => many(&n.selections),

            (AstNodeRef::Field(n), F::Alias) => many(&n.alias),
            (AstNodeRef::Field(n), F::Name) => one(&n.name),
            (AstNodeRef::Field(n), F::Arguments) => many(&n.arguments),
            (AstNodeRef::Field(n), F::Directives) => many(&n.directives),
            (AstNodeRef::Field(n), F::SelectionSet) => many(&n.selection_set),

            (AstNodeRef::Argument(n), F::Name) => one(&n.name),
            (AstNodeRef::Argument(n), F::Value) => one(&n.value),

            (AstNodeRef::FragmentSpread(n), F::Name) => one(&n.name),
            (AstNodeRef::FragmentSpread(n), F::Directives) => many(&n.directives),

            (AstNodeRef::InlineFragment(n), F::TypeCondition) => many(&n.type_condition),
            (AstNodeRef::InlineFragment(n), F::Directives) => many(&n.directives),
            (AstNodeRef::InlineFragment(n), F::SelectionSet) => one(&n.selection_set),

            (AstNodeRef::FragmentDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::FragmentDefinition(n), F::TypeCondition) => one(&n.type_condition),
            (AstNodeRef::FragmentDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::FragmentDefinition(n), F::SelectionSet) => one(&n.selection_set),

            (AstNodeRef::ListValue(n), F::Values) => many(&n.values),
            (AstNodeRef::ObjectValue(n), F::Fields) => many(&n.fields),
            (AstNodeRef::ObjectField(n), F::Name) => one(&n.name),
            (AstNodeRef::ObjectField(n), F::Value) => one(&n.value),

            (AstNodeRef::Directive(n), F::Name) => one(&n.name),
            (AstNodeRef::Directive(n), F::Arguments) => many(&n.arguments),

            (AstNodeRef::NamedType(n), F::Name) => one(&n.name),
            (AstNodeRef::ListType(n), F::Type) => one(&n.of_type),
            (AstNodeRef::NonNullType(n), F::Type) => one(&n.of_type),

            (AstNodeRef::SchemaDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::SchemaDefinition(n), F::OperationTypes) => many(&n.operation_types),
            (AstNodeRef::OperationTypeDefinition(n), F::Type) => one(&n.named_type),

            (AstNodeRef::ScalarTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::ScalarTypeDefinition(n), F::Directives) => many(&n.directives),

            (AstNodeRef::ObjectTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::ObjectTypeDefinition(n), F::Interfaces) => many(&n.interfaces),
            (AstNodeRef::ObjectTypeDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::ObjectTypeDefinition(n), F::Fields) => many(&n.fields),

            (AstNodeRef::FieldDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::FieldDefinition(n), F::Arguments) => many(&n.arguments),
            (AstNodeRef::FieldDefinition(n), F::Type) => one(&n.field_type),
            (AstNodeRef::FieldDefinition(n), F::Directives) => many(&n.directives),

            (AstNodeRef::InputValueDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::InputValueDefinition(n), F::Type) => one(&n.value_type),
            (AstNodeRef::InputValueDefinition(n), F::DefaultValue) => many(&n.default_value),
            (AstNodeRef::InputValueDefinition(n), F::Directives) => many(&n.directives),

            (AstNodeRef::InterfaceTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::InterfaceTypeDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::InterfaceTypeDefinition(n), F::Fields) => many(&n.fields),

            (AstNodeRef::UnionTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::UnionTypeDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::UnionTypeDefinition(n), F::Types) => many(&n.types),

            (AstNodeRef::EnumTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::EnumTypeDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::EnumTypeDefinition(n), F::Values) => many(&n.values),

            (AstNodeRef::EnumValueDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::EnumValueDefinition(n), F::Directives) => many(&n.directives),

            (AstNodeRef::InputObjectTypeDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::InputObjectTypeDefinition(n), F::Directives) => many(&n.directives),
            (AstNodeRef::InputObjectTypeDefinition(n), F::Fields) => many(&n.fields),

            (AstNodeRef::TypeExtensionDefinition(n), F::Definition) => one(&n.definition),

            (AstNodeRef::DirectiveDefinition(n), F::Name) => one(&n.name),
            (AstNodeRef::DirectiveDefinition(n), F::Arguments) => many(&n.arguments),
            (AstNodeRef::DirectiveDefinition(n), F::Locations) => many(&n.locations),

            _ => SmallVec::new(),
        }
    }
}

fn put<T: TryFrom<AstNode, Error = AstNode>>(slot: &mut T, node: AstNode) -> Result<(), AstNode> {
    *slot = T::try_from(node)?;
    Ok(())
}

fn put_at<T: TryFrom<AstNode, Error = AstNode>>(
    items: &mut [T],
    index: usize,
    node: AstNode,
) -> Result<(), AstNode> {
    match items.get_mut(index) {
        Some(slot) => put(slot, node),
        None => Err(node),
    }
}

fn put_one<T: TryFrom<AstNode, Error = AstNode>>(
    slot: &mut T,
    index: usize,
    node: AstNode,
) -> Result<(), AstNode> {
    if index == 0 { put(slot, node) } else { Err(node) }
}

fn put_opt<T: TryFrom<AstNode, Error = AstNode>>(
    slot: &mut Option<T>,
    index: usize,
    node: AstNode,
) -> Result<(), AstNode> {
    match slot {
        Some(inner) if index == 0 => put(inner, node),
        _ => Err(node),
    }
}

impl AstNode {
    /// Replaces the `index`th node of `field` with `replacement`.
    ///
    /// Returns the replacement back if this node has no such child or the
    /// replacement's kind cannot occupy that slot.
    pub fn replace_child(
        &mut self,
        field: ChildField,
        index: usize,
        replacement: AstNode,
    ) -> Result<(), AstNode> {
        use ChildField as F;
        let node = replacement;
        match (self, field) {
            (AstNode::Document(n), F::Definitions) => put_at(&mut n.definitions, index, node),

            (AstNode::OperationDefinition(n), F::Name) => put_opt(&mut n.name, index, node),
            (AstNode::OperationDefinition(n), F::VariableDefinitions) => {
                put_at(&mut n.variable_definitions, index, node)
            },
            (AstNode::OperationDefinition(n), F::Directives) => put_at(&mut n.directives, index, node),
            (AstNode::OperationDefinition(n), F::SelectionSet) => {
                put_one(&mut n.selection_set, index, node)
            },

            (AstNode::VariableDefinition(n), F::Variable) => put_one(&mut n.variable, index, node),
            (AstNode::VariableDefinition(n), F::Type) => put_one(&mut n.var_type, index, node),
            (AstNode::VariableDefinition(n), F::DefaultValue) => {
                put_opt(&mut n.default_value, index, node)
            },

            (AstNode::Variable(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::SelectionSet(n), F::Selections) => put_at(&mut n.selections, index, node),

            (AstNode::Field(n), F::Alias) => put_opt(&mut n.alias, index, node),
            (AstNode::Field(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::Field(n), F::Arguments) => put_at(&mut n.arguments, index, node),
            (AstNode::Field(n), F::Directives) => put_at(&mut n.directives, index, node),
            (AstNode::Field(n), F::SelectionSet) => put_opt(&mut n.selection_set, index, node),

            (AstNode::Argument(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::Argument(n), F::Value) => put_one(&mut n.value, index, node),

            (AstNode::FragmentSpread(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::FragmentSpread(n), F::Directives) => put_at(&mut n.directives, index, node),

            (AstNode::InlineFragment(n), F::TypeCondition) => {
                put_opt(&mut n.type_condition, index, node)
            },
            (AstNode::InlineFragment(n), F::Directives) => put_at(&mut n.directives, index, node),
            (AstNode::InlineFragment(n), F::SelectionSet) => {
                put_one(&mut n.selection_set, index, node)
            },

            (AstNode::FragmentDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::FragmentDefinition(n), F::TypeCondition) => {
                put_one(&mut n.type_condition, index, node)
            },
            (AstNode::FragmentDefinition(n), F::Directives) => put_at(&mut n.directives, index, node),
            (AstNode::FragmentDefinition(n), F::SelectionSet) => {
                put_one(&mut n.selection_set, index, node)
            },

            (AstNode::ListValue(n), F::Values) => put_at(&mut n.values, index, node),
            (AstNode::ObjectValue(n), F::Fields) => put_at(&mut n.fields, index, node),
            (AstNode::ObjectField(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::ObjectField(n), F::Value) => put_one(&mut n.value, index, node),

            (AstNode::Directive(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::Directive(n), F::Arguments) => put_at(&mut n.arguments, index, node),

            (AstNode::NamedType(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::ListType(n), F::Type) => put_one(&mut n.of_type, index, node),
            (AstNode::NonNullType(n), F::Type) => put_one(&mut n.of_type, index, node),

            (AstNode::SchemaDefinition(n), F::Directives) => put_at(&mut n.directives, index, node),
            (AstNode::SchemaDefinition(n), F::OperationTypes) => {
                put_at(&mut n.operation_types, index, node)
            },
            (AstNode::OperationTypeDefinition(n), F::Type) => {
                put_one(&mut n.named_type, index, node)
            },

            (AstNode::ScalarTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::ScalarTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },

            (AstNode::ObjectTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::ObjectTypeDefinition(n), F::Interfaces) => {
                put_at(&mut n.interfaces, index, node)
            },
            (AstNode::ObjectTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },
            (AstNode::ObjectTypeDefinition(n), F::Fields) => put_at(&mut n.fields, index, node),

            (AstNode::FieldDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::FieldDefinition(n), F::Arguments) => put_at(&mut n.arguments, index, node),
            (AstNode::FieldDefinition(n), F::Type) => put_one(&mut n.field_type, index, node),
            (AstNode::FieldDefinition(n), F::Directives) => put_at(&mut n.directives, index, node),

            (AstNode::InputValueDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::InputValueDefinition(n), F::Type) => put_one(&mut n.value_type, index, node),
            (AstNode::InputValueDefinition(n), F::DefaultValue) => {
                put_opt(&mut n.default_value, index, node)
            },
            (AstNode::InputValueDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },

            (AstNode::InterfaceTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::InterfaceTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },
            (AstNode::InterfaceTypeDefinition(n), F::Fields) => put_at(&mut n.fields, index, node),

            (AstNode::UnionTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::UnionTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },
            (AstNode::UnionTypeDefinition(n), F::Types) => put_at(&mut n.types, index, node),

            (AstNode::EnumTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::EnumTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },
            (AstNode::EnumTypeDefinition(n), F::Values) => put_at(&mut n.values, index, node),

            (AstNode::EnumValueDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::EnumValueDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },

            (AstNode::InputObjectTypeDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::InputObjectTypeDefinition(n), F::Directives) => {
                put_at(&mut n.directives, index, node)
            },
            (AstNode::InputObjectTypeDefinition(n), F::Fields) => {
                put_at(&mut n.fields, index, node)
            },

            (AstNode::TypeExtensionDefinition(n), F::Definition) => {
                put_one(&mut n.definition, index, node)
            },

            (AstNode::DirectiveDefinition(n), F::Name) => put_one(&mut n.name, index, node),
            (AstNode::DirectiveDefinition(n), F::Arguments) => {
                put_at(&mut n.arguments, index, node)
            },
            (AstNode::DirectiveDefinition(n), F::Locations) => {
                put_at(&mut n.locations, index, node)
            },

            _ => Err(node),
        }
    }
}
