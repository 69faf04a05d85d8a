use graphql_parser::schema::{Definition, Document, Type, TypeDefinition};
use rustc_hash::FxHashMap;

/// A GraphQL type reference from the parsed schema.
pub type TypeRef<'a> = Type<'a, String>;

/// The kind of a named GraphQL type, as declared in the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

/// A root operation slot of the schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootRole {
    Query,
    Mutation,
    Subscription,
}

impl RootRole {
    pub const ALL: [RootRole; 3] = [RootRole::Query, RootRole::Mutation, RootRole::Subscription];

    /// The client-library sentinel type aliased by this root.
    pub fn sentinel(self) -> &'static str {
        match self {
            RootRole::Query => "RootQuery",
            RootRole::Mutation => "RootMutation",
            RootRole::Subscription => "RootSubscription",
        }
    }

    /// The default root type name used when the document has no schema
    /// definition.
    fn default_type_name(self) -> &'static str {
        match self {
            RootRole::Query => "Query",
            RootRole::Mutation => "Mutation",
            RootRole::Subscription => "Subscription",
        }
    }
}

/// Everything the emitters need to know about the document's named types:
/// each name's kind, union memberships, interface implementors, and the
/// root operation types.
#[derive(Debug)]
pub struct TypeIndex<'a> {
    kinds: FxHashMap<&'a str, TypeKind>,
    union_members: FxHashMap<&'a str, Vec<&'a str>>,
    implementors: FxHashMap<&'a str, Vec<&'a str>>,
    roots: [Option<&'a str>; 3],
}

impl<'a> TypeIndex<'a> {
    pub fn new(doc: &'a Document<'a, String>) -> Self {
        let mut kinds = FxHashMap::default();
        let mut union_members = FxHashMap::<&str, Vec<&str>>::default();
        let mut implementors = FxHashMap::<&str, Vec<&str>>::default();
        let mut schema_roots: Option<[Option<&str>; 3]> = None;

        for definition in &doc.definitions {
            match definition {
                Definition::SchemaDefinition(schema) => {
                    schema_roots = Some([
                        schema.query.as_deref(),
                        schema.mutation.as_deref(),
                        schema.subscription.as_deref(),
                    ]);
                }
                Definition::TypeDefinition(ty) => match ty {
                    TypeDefinition::Scalar(scalar) => {
                        kinds.insert(scalar.name.as_str(), TypeKind::Scalar);
                    }
                    TypeDefinition::Object(object) => {
                        kinds.insert(object.name.as_str(), TypeKind::Object);
                        for interface in &object.implements_interfaces {
                            implementors
                                .entry(interface.as_str())
                                .or_default()
                                .push(object.name.as_str());
                        }
                    }
                    TypeDefinition::Interface(interface) => {
                        kinds.insert(interface.name.as_str(), TypeKind::Interface);
                    }
                    TypeDefinition::Union(union) => {
                        kinds.insert(union.name.as_str(), TypeKind::Union);
                        union_members.insert(
                            union.name.as_str(),
                            union.types.iter().map(String::as_str).collect(),
                        );
                    }
                    TypeDefinition::Enum(en) => {
                        kinds.insert(en.name.as_str(), TypeKind::Enum);
                    }
                    TypeDefinition::InputObject(input) => {
                        kinds.insert(input.name.as_str(), TypeKind::InputObject);
                    }
                },
                Definition::TypeExtension(_) | Definition::DirectiveDefinition(_) => {}
            }
        }

        // Without a schema definition, the conventional root type names
        // take the root roles.
        let roots = schema_roots.unwrap_or_else(|| {
            RootRole::ALL.map(|role| {
                let name = role.default_type_name();
                kinds
                    .get_key_value(name)
                    .filter(|(_, kind)| **kind == TypeKind::Object)
                    .map(|(name, _)| *name)
            })
        });

        Self {
            kinds,
            union_members,
            implementors,
            roots,
        }
    }

    pub fn kind(&self, name: &str) -> Option<TypeKind> {
        self.kinds.get(name).copied()
    }

    /// Member object types of a union, in source order.
    pub fn union_members(&self, name: &str) -> &[&'a str] {
        self.union_members.get(name).map_or(&[], Vec::as_slice)
    }

    /// Object types implementing an interface, in source order.
    pub fn implementors(&self, name: &str) -> &[&'a str] {
        self.implementors.get(name).map_or(&[], Vec::as_slice)
    }

    /// The root role held by the given type, if any.
    pub fn root_role(&self, name: &str) -> Option<RootRole> {
        RootRole::ALL
            .into_iter()
            .find(|role| self.roots[*role as usize] == Some(name))
    }
}

/// The declared name of a type definition.
pub(crate) fn type_definition_name<'a>(ty: &'a TypeDefinition<'a, String>) -> &'a str {
    match ty {
        TypeDefinition::Scalar(t) => &t.name,
        TypeDefinition::Object(t) => &t.name,
        TypeDefinition::Interface(t) => &t.name,
        TypeDefinition::Union(t) => &t.name,
        TypeDefinition::Enum(t) => &t.name,
        TypeDefinition::InputObject(t) => &t.name,
    }
}

/// Renders the Scala type for a type reference, with `leaf` substituted at
/// the named position.
///
/// A bare named or list type is optional and wraps in `Option[…]`;
/// `NonNull` strips that wrapper; lists wrap in `List[…]`. Nesting is
/// preserved exactly, so `[String]!` becomes `List[Option[String]]` and
/// `[String!]!` becomes `List[String]`.
pub fn scala_type(ty: &TypeRef<'_>, leaf: &str) -> String {
    match ty {
        Type::NonNullType(inner) => scala_type_required(inner, leaf),
        _ => format!("Option[{}]", scala_type_required(ty, leaf)),
    }
}

fn scala_type_required(ty: &TypeRef<'_>, leaf: &str) -> String {
    match ty {
        Type::NamedType(_) => leaf.to_owned(),
        Type::ListType(inner) => format!("List[{}]", scala_type(inner, leaf)),
        Type::NonNullType(inner) => scala_type_required(inner, leaf),
    }
}

/// Renders the `FieldBuilder` expression for a type reference, mirroring
/// [`scala_type`]: `OptionOf`/`ListOf` nesting around the given leaf
/// builder (`Scalar()`, `Obj(…)`, `ChoiceOf(…)`).
pub fn builder_expr(ty: &TypeRef<'_>, leaf: &str) -> String {
    match ty {
        Type::NonNullType(inner) => builder_required(inner, leaf),
        _ => format!("OptionOf({})", builder_required(ty, leaf)),
    }
}

fn builder_required(ty: &TypeRef<'_>, leaf: &str) -> String {
    match ty {
        Type::NamedType(_) => leaf.to_owned(),
        Type::ListType(inner) => format!("ListOf({})", builder_expr(inner, leaf)),
        Type::NonNullType(inner) => builder_required(inner, leaf),
    }
}

/// Renders the GraphQL type literal exactly as it appears on the wire,
/// for `Argument(…)` calls.
pub fn gql_literal(ty: &TypeRef<'_>) -> String {
    match ty {
        Type::NamedType(name) => name.clone(),
        Type::ListType(inner) => format!("[{}]", gql_literal(inner)),
        Type::NonNullType(inner) => format!("{}!", gql_literal(inner)),
    }
}

/// The innermost named type of a type reference.
pub fn inner_name<'a>(ty: &'a TypeRef<'_>) -> &'a str {
    match ty {
        Type::NamedType(name) => name,
        Type::ListType(inner) | Type::NonNullType(inner) => inner_name(inner),
    }
}
