use crate::Value;
use crate::introspection;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use crate::types::type_from_ast;
use graphql_engine_parser::ast::AstNodeRef;

/// The type context of the node a traversal is currently at: the output
/// type it produces, the composite type its fields are selected from, the
/// input type a value must satisfy, and the field, argument and directive
/// definitions in effect.
///
/// Feed it every node in traversal order via [`enter()`](Self::enter) and
/// [`leave()`](Self::leave), typically through a
/// [`TypeInfoVisitor`](crate::type_info::TypeInfoVisitor). One `TypeInfo`
/// serves one traversal.
#[derive(Debug)]
pub struct TypeInfo<'s> {
    schema: &'s Schema,
    type_stack: Vec<Option<TypeAnnotation>>,
    parent_type_stack: Vec<Option<&'s GraphQLType>>,
    input_type_stack: Vec<Option<TypeAnnotation>>,
    field_def_stack: Vec<Option<&'s Field>>,
    default_value_stack: Vec<Option<&'s Value>>,
    directive: Option<&'s Directive>,
    argument: Option<&'s InputValue>,
    enum_value: Option<&'s EnumValue>,
}

impl<'s> TypeInfo<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            default_value_stack: vec![],
            directive: None,
            argument: None,
            enum_value: None,
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// The output type of the current operation, fragment or field.
    pub fn output_type(&self) -> Option<&TypeAnnotation> {
        self.type_stack.last()?.as_ref()
    }

    /// The named type beneath [`output_type()`](Self::output_type).
    pub fn named_output_type(&self) -> Option<&'s GraphQLType> {
        self.output_type()?.named_type(self.schema)
    }

    /// The composite type whose fields the current selection set selects.
    pub fn parent_type(&self) -> Option<&'s GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The input type the current argument, list item or object field
    /// value must satisfy.
    pub fn input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack.last()?.as_ref()
    }

    /// The input type enclosing [`input_type()`](Self::input_type), e.g.
    /// the input object type of the current object field.
    pub fn parent_input_type(&self) -> Option<&TypeAnnotation> {
        let depth = self.input_type_stack.len();
        self.input_type_stack.get(depth.checked_sub(2)?)?.as_ref()
    }

    pub fn field_def(&self) -> Option<&'s Field> {
        self.field_def_stack.last().copied().flatten()
    }

    /// The default value of the current argument or input object field.
    pub fn default_value(&self) -> Option<&'s Value> {
        self.default_value_stack.last().copied().flatten()
    }

    pub fn directive(&self) -> Option<&'s Directive> {
        self.directive
    }

    pub fn argument(&self) -> Option<&'s InputValue> {
        self.argument
    }

    pub fn enum_value(&self) -> Option<&'s EnumValue> {
        self.enum_value
    }

    pub fn enter(&mut self, node: AstNodeRef<'_>) {
        let schema = self.schema;
        match node {
            AstNodeRef::SelectionSet(_) => {
                let parent = self
                    .named_output_type()
                    .filter(|named| named.is_composite_type());
                self.parent_type_stack.push(parent);
            },
            AstNodeRef::Field(field) => {
                let field_def = self
                    .parent_type()
                    .and_then(|parent| field_definition(schema, parent, field.name.as_str()));
                let field_type = field_def
                    .map(|field_def| field_def.field_type.clone())
                    .filter(|field_type| field_type.is_output_type(schema));
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            },
            AstNodeRef::Directive(directive) => {
                self.directive = schema.directive(directive.name.as_str());
            },
            AstNodeRef::OperationDefinition(operation) => {
                let root = schema
                    .root_type(operation.operation)
                    .map(|root| TypeAnnotation::named(root.name()));
                self.type_stack.push(root);
            },
            AstNodeRef::InlineFragment(inline) => {
                let output_type = match &inline.type_condition {
                    Some(condition) => Some(TypeAnnotation::named(condition.name.as_str())),
                    None => self
                        .named_output_type()
                        .map(|named| TypeAnnotation::named(named.name())),
                };
                self.push_output_type(output_type);
            },
            AstNodeRef::FragmentDefinition(fragment) => {
                let condition = TypeAnnotation::named(fragment.type_condition.name.as_str());
                self.push_output_type(Some(condition));
            },
            AstNodeRef::VariableDefinition(definition) => {
                let input_type = type_from_ast(schema, &definition.var_type)
                    .filter(|input_type| input_type.is_input_type(schema));
                self.input_type_stack.push(input_type);
            },
            AstNodeRef::Argument(argument) => {
                let arguments = match self.directive {
                    Some(directive) => Some(&directive.arguments),
                    None => self.field_def().map(|field_def| &field_def.arguments),
                };
                let argument_def =
                    arguments.and_then(|arguments| arguments.get(argument.name.as_str()));
                self.argument = argument_def;
                self.default_value_stack
                    .push(argument_def.and_then(|def| def.default_value.as_ref()));
                self.input_type_stack.push(
                    argument_def
                        .map(|def| def.value_type.clone())
                        .filter(|input_type| input_type.is_input_type(schema)),
                );
            },
            AstNodeRef::ListValue(_) => {
                let item_type = self.input_type().map(|input_type| {
                    let nullable = input_type.nullable_type();
                    match nullable.list_item_type() {
                        Some(item_type) => item_type.clone(),
                        None => nullable,
                    }
                });
                self.default_value_stack.push(None);
                self.input_type_stack.push(item_type);
            },
            AstNodeRef::ObjectField(object_field) => {
                let input_field = self
                    .input_type()
                    .and_then(|input_type| input_type.named_type(schema))
                    .and_then(GraphQLType::as_input_object)
                    .and_then(|input_object| input_object.field(object_field.name.as_str()));
                self.default_value_stack
                    .push(input_field.and_then(|field| field.default_value.as_ref()));
                self.input_type_stack.push(
                    input_field
                        .map(|field| field.value_type.clone())
                        .filter(|input_type| input_type.is_input_type(schema)),
                );
            },
            AstNodeRef::EnumValue(enum_value) => {
                self.enum_value = self
                    .input_type()
                    .and_then(|input_type| input_type.named_type(schema))
                    .and_then(GraphQLType::as_enum)
                    .and_then(|enum_type| enum_type.value(&enum_value.value));
            },
            _ => {},
        }
    }

    pub fn leave(&mut self, node: AstNodeRef<'_>) {
        match node {
            AstNodeRef::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },
            AstNodeRef::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            AstNodeRef::Directive(_) => self.directive = None,
            AstNodeRef::OperationDefinition(_)
            | AstNodeRef::InlineFragment(_)
            | AstNodeRef::FragmentDefinition(_) => {
                self.type_stack.pop();
            },
            AstNodeRef::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },
            AstNodeRef::Argument(_) => {
                self.argument = None;
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNodeRef::ListValue(_) | AstNodeRef::ObjectField(_) => {
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNodeRef::EnumValue(_) => self.enum_value = None,
            _ => {},
        }
    }

    /// Pushes a fragment's type condition, keeping it only if it names an
    /// output type.
    fn push_output_type(&mut self, output_type: Option<TypeAnnotation>) {
        let schema = self.schema;
        self.type_stack
            .push(output_type.filter(|output_type| output_type.is_output_type(schema)));
    }
}

/// Looks up the definition of the field `field_name` selected on
/// `parent_type`, including the introspection meta-fields `__schema` and
/// `__type` (on the query root) and `__typename` (on any composite type).
pub fn field_definition<'s>(
    schema: &'s Schema,
    parent_type: &'s GraphQLType,
    field_name: &str,
) -> Option<&'s Field> {
    let is_query_root = || parent_type.name() == schema.query_type().name();
    match field_name {
        introspection::SCHEMA_FIELD if is_query_root() => Some(introspection::schema_meta_field()),
        introspection::TYPE_FIELD if is_query_root() => Some(introspection::type_meta_field()),
        introspection::TYPENAME_FIELD if parent_type.is_composite_type() => {
            Some(introspection::typename_meta_field())
        },
        _ => parent_type.field(field_name),
    }
}
