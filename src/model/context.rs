// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::equation::PathEquation;
use super::ids::{ContextId, MorphismId, ObjectId};
use super::span::SourceSpan;
use std::fmt;
use std::str::FromStr;

/// Domain-level primitive type names every context can reference without
/// declaring them. Backends own the mapping to native types.
pub const PRIMITIVES: &[&str] = &[
    "String", "Int", "Float", "Bool", "Decimal", "Date", "DateTime", "Uuid",
];

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Morphism cardinality; drives both containment validation and whether a
/// generated field is scalar, nullable, or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    One,
    Optional,
    Many,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Optional => "optional",
            Self::Many => "many",
        }
    }

    pub fn is_collection(self) -> bool {
        self == Self::Many
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardinalityError;

impl fmt::Display for ParseCardinalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid cardinality")
    }
}

impl std::error::Error for ParseCardinalityError {}

impl FromStr for Cardinality {
    type Err = ParseCardinalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(Self::One),
            "optional" => Ok(Self::Optional),
            "many" => Ok(Self::Many),
            _ => Err(ParseCardinalityError),
        }
    }
}

/// A named, typed field on an entity or value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    type_name: String,
    optional: bool,
    span: SourceSpan,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            span: SourceSpan::default(),
        }
    }

    pub fn new_with(
        name: impl Into<String>,
        type_name: impl Into<String>,
        optional: bool,
        span: SourceSpan,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

/// One case of an enumeration (colimit injection). A payload type turns the
/// enum into a sum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: String,
    payload: Option<String>,
    span: SourceSpan,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
            span: SourceSpan::default(),
        }
    }

    pub fn new_with(name: impl Into<String>, payload: Option<String>, span: SourceSpan) -> Self {
        Self {
            name: name.into(),
            payload,
            span,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

/// Directed edge between two objects of the same context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morphism {
    id: MorphismId,
    source: ObjectId,
    target: ObjectId,
    cardinality: Cardinality,
    span: SourceSpan,
}

impl Morphism {
    pub fn new(
        id: MorphismId,
        source: ObjectId,
        target: ObjectId,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            id,
            source,
            target,
            cardinality,
            span: SourceSpan::default(),
        }
    }

    pub fn new_with(
        id: MorphismId,
        source: ObjectId,
        target: ObjectId,
        cardinality: Cardinality,
        span: SourceSpan,
    ) -> Self {
        Self {
            id,
            source,
            target,
            cardinality,
            span,
        }
    }

    pub fn id(&self) -> &MorphismId {
        &self.id
    }

    pub fn source(&self) -> &ObjectId {
        &self.source
    }

    pub fn target(&self) -> &ObjectId {
        &self.target
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

/// An invariant scoped to an aggregate: either a checked path equation or a
/// free-text rule carried through to generated documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invariant {
    Equation(PathEquation),
    Rule(String),
}

/// Closed variant set over object kinds. Validator passes and the IR builder
/// match exhaustively, so adding a kind is a compile-time-visible change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Entity {
        fields: Vec<Field>,
    },
    ValueObject {
        fields: Vec<Field>,
    },
    Enum {
        variants: Vec<Variant>,
    },
    Aggregate {
        root: ObjectId,
        members: Vec<ObjectId>,
        invariants: Vec<Invariant>,
    },
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entity { .. } => "entity",
            Self::ValueObject { .. } => "value object",
            Self::Enum { .. } => "enum",
            Self::Aggregate { .. } => "aggregate",
        }
    }

    pub fn fields(&self) -> Option<&[Field]> {
        match self {
            Self::Entity { fields } | Self::ValueObject { fields } => Some(fields),
            _ => None,
        }
    }
}

/// A named vertex in the context's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    id: ObjectId,
    kind: ObjectKind,
    span: SourceSpan,
}

impl Object {
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            span: SourceSpan::default(),
        }
    }

    pub fn new_with(id: ObjectId, kind: ObjectKind, span: SourceSpan) -> Self {
        Self { id, kind, span }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.kind, ObjectKind::Entity { .. })
    }
}

/// A bounded context: one sketch, owning its objects, morphisms, and
/// free-standing path equations.
///
/// Declaration order of objects is preserved end to end; the IR builder and
/// the "available objects" notes depend on it for stable output. The context
/// is immutable once validation starts (validation and codegen only borrow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedContext {
    id: ContextId,
    objects: Vec<Object>,
    morphisms: Vec<Morphism>,
    equations: Vec<PathEquation>,
}

impl BoundedContext {
    pub fn new(id: ContextId) -> Self {
        Self {
            id,
            objects: Vec::new(),
            morphisms: Vec::new(),
            equations: Vec::new(),
        }
    }

    pub fn id(&self) -> &ContextId {
        &self.id
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// First object declared under `name`, if any.
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.id().as_str() == name)
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn morphisms(&self) -> &[Morphism] {
        &self.morphisms
    }

    pub fn morphism(&self, name: &str) -> Option<&Morphism> {
        self.morphisms.iter().find(|m| m.id().as_str() == name)
    }

    pub fn morphisms_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Morphism> {
        self.morphisms.iter().filter(move |m| m.source().as_str() == source)
    }

    pub fn add_morphism(&mut self, morphism: Morphism) {
        self.morphisms.push(morphism);
    }

    pub fn equations(&self) -> &[PathEquation] {
        &self.equations
    }

    pub fn add_equation(&mut self, equation: PathEquation) {
        self.equations.push(equation);
    }

    pub fn add_entity(&mut self, id: ObjectId, fields: Vec<Field>) {
        self.add_object(Object::new(id, ObjectKind::Entity { fields }));
    }

    pub fn add_value_object(&mut self, id: ObjectId, fields: Vec<Field>) {
        self.add_object(Object::new(id, ObjectKind::ValueObject { fields }));
    }

    pub fn add_enum(&mut self, id: ObjectId, variants: Vec<Variant>) {
        self.add_object(Object::new(id, ObjectKind::Enum { variants }));
    }

    pub fn add_aggregate(
        &mut self,
        id: ObjectId,
        root: ObjectId,
        members: Vec<ObjectId>,
        invariants: Vec<Invariant>,
    ) {
        self.add_object(Object::new(
            id,
            ObjectKind::Aggregate {
                root,
                members,
                invariants,
            },
        ));
    }
}
