//! Schemas and helpers shared by the crate's tests.

use crate::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use graphql_engine_parser::ast;
use serde_json::json;
use std::sync::LazyLock;

static VALIDATION_SCHEMA: LazyLock<Schema> = LazyLock::new(build_validation_schema);

pub(crate) fn parse_ok(query: &str) -> ast::Document {
    match graphql_engine_parser::parse_str(query) {
        Ok(document) => document,
        Err(err) => panic!("failed to parse `{query}`: {err}"),
    }
}

fn named(name: &str) -> TypeAnnotation {
    TypeAnnotation::named(name)
}

fn non_null(name: &str) -> TypeAnnotation {
    TypeAnnotation::non_null_named(name)
}

fn list_of(name: &str) -> TypeAnnotation {
    TypeAnnotation::list(TypeAnnotation::named(name))
}

fn name_field() -> Field {
    Field::new("name", named("String")).argument(InputValue::new("surname", named("Boolean")))
}

/// The pets-and-people schema validation rules are exercised against.
///
/// ```graphql
/// interface Being { name(surname: Boolean): String }
/// interface Pet { name(surname: Boolean): String }
/// interface Canine { name(surname: Boolean): String }
/// interface Intelligent { iq: Int }
///
/// enum DogCommand { SIT HEEL DOWN }
/// enum FurColor { BROWN BLACK TAN SPOTTED NO_FUR UNKNOWN }
///
/// type Dog implements Being & Pet & Canine { ... }
/// type Cat implements Being & Pet { ... }
/// type Human implements Being & Intelligent { ... }
/// type Alien implements Being & Intelligent { ... }
///
/// union CatOrDog = Cat | Dog
/// union DogOrHuman = Dog | Human
/// union HumanOrAlien = Human | Alien
///
/// input ComplexInput { ... }
/// type ComplicatedArgs { ... }
/// type QueryRoot { ... }
/// ```
pub(crate) fn validation_schema() -> &'static Schema {
    &VALIDATION_SCHEMA
}

fn build_validation_schema() -> Schema {
    let being = InterfaceType::builder("Being").field(name_field()).build();
    let pet = InterfaceType::builder("Pet").field(name_field()).build();
    let canine = InterfaceType::builder("Canine").field(name_field()).build();
    let intelligent = InterfaceType::builder("Intelligent")
        .field(Field::new("iq", named("Int")))
        .build();

    let dog_command = EnumType::builder("DogCommand").values(["SIT", "HEEL", "DOWN"]).build();
    let fur_color = EnumType::builder("FurColor")
        .values(["BROWN", "BLACK", "TAN", "SPOTTED", "NO_FUR", "UNKNOWN"])
        .build();

    let dog = ObjectType::builder("Dog")
        .interface("Being")
        .interface("Pet")
        .interface("Canine")
        .field(name_field())
        .field(Field::new("nickname", named("String")))
        .field(Field::new("barkVolume", named("Int")))
        .field(Field::new("barks", named("Boolean")))
        .field(
            Field::new("doesKnowCommand", named("Boolean"))
                .argument(InputValue::new("dogCommand", named("DogCommand"))),
        )
        .field(
            Field::new("isHousetrained", named("Boolean")).argument(
                InputValue::new("atOtherHomes", named("Boolean")).default_value(json!(true)),
            ),
        )
        .field(
            Field::new("isAtLocation", named("Boolean"))
                .argument(InputValue::new("x", named("Int")))
                .argument(InputValue::new("y", named("Int"))),
        )
        .build();

    let cat = ObjectType::builder("Cat")
        .interface("Being")
        .interface("Pet")
        .field(name_field())
        .field(Field::new("nickname", named("String")))
        .field(Field::new("meows", named("Boolean")))
        .field(Field::new("meowVolume", named("Int")))
        .field(Field::new("furColor", named("FurColor")))
        .build();

    let human = ObjectType::builder("Human")
        .interface("Being")
        .interface("Intelligent")
        .field(name_field())
        .field(Field::new("pets", list_of("Pet")))
        .field(Field::new("relatives", list_of("Human")))
        .field(Field::new("iq", named("Int")))
        .build();

    let alien = ObjectType::builder("Alien")
        .interface("Being")
        .interface("Intelligent")
        .field(Field::new("iq", named("Int")))
        .field(name_field())
        .field(Field::new("numEyes", named("Int")))
        .build();

    let cat_or_dog = UnionType::builder("CatOrDog").member("Cat").member("Dog").build();
    let dog_or_human = UnionType::builder("DogOrHuman").member("Dog").member("Human").build();
    let human_or_alien = UnionType::builder("HumanOrAlien").member("Human").member("Alien").build();

    let complex_input = InputObjectType::builder("ComplexInput")
        .field(InputValue::new("requiredField", non_null("Boolean")))
        .field(InputValue::new("intField", named("Int")))
        .field(InputValue::new("stringField", named("String")))
        .field(InputValue::new("booleanField", named("Boolean")))
        .field(InputValue::new("stringListField", list_of("String")))
        .build();

    let optional_int = |name: &str| InputValue::new(name, named("Int")).default_value(json!(0));
    let complicated_args = ObjectType::builder("ComplicatedArgs")
        .field(
            Field::new("intArgField", named("String"))
                .argument(InputValue::new("intArg", named("Int"))),
        )
        .field(
            Field::new("nonNullIntArgField", named("String"))
                .argument(InputValue::new("nonNullIntArg", non_null("Int"))),
        )
        .field(
            Field::new("stringArgField", named("String"))
                .argument(InputValue::new("stringArg", named("String"))),
        )
        .field(
            Field::new("booleanArgField", named("String"))
                .argument(InputValue::new("booleanArg", named("Boolean"))),
        )
        .field(
            Field::new("enumArgField", named("String"))
                .argument(InputValue::new("enumArg", named("FurColor"))),
        )
        .field(
            Field::new("floatArgField", named("String"))
                .argument(InputValue::new("floatArg", named("Float"))),
        )
        .field(
            Field::new("idArgField", named("String"))
                .argument(InputValue::new("idArg", named("ID"))),
        )
        .field(
            Field::new("stringListArgField", named("String"))
                .argument(InputValue::new("stringListArg", list_of("String"))),
        )
        .field(
            Field::new("stringListNonNullArgField", named("String")).argument(InputValue::new(
                "stringListNonNullArg",
                TypeAnnotation::list(non_null("String")),
            )),
        )
        .field(
            Field::new("complexArgField", named("String"))
                .argument(InputValue::new("complexArg", named("ComplexInput"))),
        )
        .field(
            Field::new("multipleReqs", named("String"))
                .argument(InputValue::new("req1", non_null("Int")))
                .argument(InputValue::new("req2", non_null("Int"))),
        )
        .field(
            Field::new("multipleOpts", named("String"))
                .argument(optional_int("opt1"))
                .argument(optional_int("opt2")),
        )
        .field(
            Field::new("multipleOptAndReq", named("String"))
                .argument(InputValue::new("req1", non_null("Int")))
                .argument(InputValue::new("req2", non_null("Int")))
                .argument(optional_int("opt1"))
                .argument(optional_int("opt2")),
        )
        .build();

    let query_root = ObjectType::builder("QueryRoot")
        .field(Field::new("human", named("Human")).argument(InputValue::new("id", named("ID"))))
        .field(Field::new("alien", named("Alien")))
        .field(Field::new("dog", named("Dog")))
        .field(Field::new("cat", named("Cat")))
        .field(Field::new("pet", named("Pet")))
        .field(Field::new("catOrDog", named("CatOrDog")))
        .field(Field::new("dogOrHuman", named("DogOrHuman")))
        .field(Field::new("humanOrAlien", named("HumanOrAlien")))
        .field(Field::new("complicatedArgs", named("ComplicatedArgs")))
        .build();

    let types: Vec<GraphQLType> = vec![
        being,
        pet,
        canine,
        intelligent,
        dog_command,
        fur_color,
        dog,
        cat,
        human,
        alien,
        cat_or_dog,
        dog_or_human,
        human_or_alien,
        complex_input,
        complicated_args,
    ];
    match Schema::builder(query_root).types(types).build() {
        Ok(schema) => schema,
        Err(err) => panic!("validation schema is invalid: {err}"),
    }
}
