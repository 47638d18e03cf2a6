// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-context validation passes. Reference passes run before structural
//! ones; a structural check is skipped when the name it depends on already
//! failed to resolve, so one typo does not cascade.

use super::codes;
use super::diagnostic::{Diagnostic, Suggestion};
use crate::model::{
    is_primitive, BoundedContext, Expr, Invariant, Object, ObjectKind, PathEquation, PRIMITIVES,
};
use crate::query::{available_options, nearest_of, NameIndex};

/// How many names an "available:" note spells out before truncating.
const AVAILABLE_LIMIT: usize = 5;

/// Member count above which an aggregate draws a size warning.
const AGGREGATE_MEMBER_LIMIT: usize = 5;

fn name_help(diagnostic: Diagnostic, name: &str, index: &NameIndex) -> Diagnostic {
    let diagnostic = match index.nearest(name) {
        Some(hit) => diagnostic
            .with_suggestion(Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit)),
        None => diagnostic.with_note(index.available(AVAILABLE_LIMIT)),
    };
    diagnostic.with_group_key(name)
}

fn type_resolves(name: &str, index: &NameIndex) -> bool {
    is_primitive(name) || index.contains(name)
}

fn type_help(diagnostic: Diagnostic, name: &str, index: &NameIndex) -> Diagnostic {
    let candidates = || {
        PRIMITIVES
            .iter()
            .copied()
            .chain(index.all_names().iter().map(|n| n.as_str()))
    };
    let diagnostic = match nearest_of(name, candidates()) {
        Some(hit) => diagnostic
            .with_suggestion(Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit)),
        None => diagnostic.with_note(available_options(candidates(), AVAILABLE_LIMIT)),
    };
    diagnostic.with_group_key(name)
}

pub(super) fn duplicates(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for name in index.all_names() {
        if index.duplicates_of(name.as_str()) < 2 {
            continue;
        }
        let mut diagnostic = Diagnostic::error(
            codes::DUPLICATE_OBJECT_NAME,
            format!("duplicate object name '{name}'"),
        );
        let mut first = true;
        for object in context.objects().iter().filter(|o| o.id() == name) {
            let label = if first { "first declared here" } else { "redeclared here" };
            diagnostic = diagnostic.with_label(object.span(), label);
            first = false;
        }
        out.push(diagnostic.with_note("the first declaration is the one generation uses"));
    }
}

pub(super) fn morphisms(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for morphism in context.morphisms() {
        if !index.contains(morphism.source().as_str()) {
            let diagnostic = Diagnostic::error(
                codes::MORPHISM_SOURCE_UNRESOLVED,
                format!(
                    "unknown source object '{}' in morphism '{}'",
                    morphism.source(),
                    morphism.id()
                ),
            )
            .with_label(morphism.span(), "not a declared object");
            out.push(name_help(diagnostic, morphism.source().as_str(), index));
        }
        if !index.contains(morphism.target().as_str()) {
            let diagnostic = Diagnostic::error(
                codes::MORPHISM_TARGET_UNRESOLVED,
                format!(
                    "unknown target object '{}' in morphism '{}'",
                    morphism.target(),
                    morphism.id()
                ),
            )
            .with_label(morphism.span(), "not a declared object");
            out.push(name_help(diagnostic, morphism.target().as_str(), index));
        }
    }
}

pub(super) fn field_types(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for object in context.objects() {
        let (fields, code, kind_word) = match object.kind() {
            ObjectKind::Entity { fields } => (fields, codes::ENTITY_FIELD_TYPE_UNKNOWN, "entity"),
            ObjectKind::ValueObject { fields } => {
                (fields, codes::VALUE_OBJECT_FIELD_TYPE_UNKNOWN, "value object")
            }
            _ => continue,
        };
        for field in fields {
            if type_resolves(field.type_name(), index) {
                continue;
            }
            let diagnostic = Diagnostic::error(
                code,
                format!(
                    "unknown type '{}' for field '{}' on {kind_word} '{}'",
                    field.type_name(),
                    field.name(),
                    object.id()
                ),
            )
            .with_label(field.span(), "neither a primitive nor a declared object");
            out.push(type_help(diagnostic, field.type_name(), index));
        }
    }
}

pub(super) fn enums(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for object in context.objects() {
        let ObjectKind::Enum { variants } = object.kind() else {
            continue;
        };

        for (position, variant) in variants.iter().enumerate() {
            let first_at = variants
                .iter()
                .position(|v| v.name() == variant.name())
                .unwrap_or(position);
            if first_at != position {
                out.push(
                    Diagnostic::error(
                        codes::DUPLICATE_ENUM_VARIANT,
                        format!(
                            "duplicate variant '{}' in enum '{}'",
                            variant.name(),
                            object.id()
                        ),
                    )
                    .with_label(variant.span(), "redeclared here")
                    .with_label(variants[first_at].span(), "first declared here"),
                );
            }

            if let Some(payload) = variant.payload() {
                if !type_resolves(payload, index) {
                    let diagnostic = Diagnostic::error(
                        codes::VARIANT_PAYLOAD_UNRESOLVED,
                        format!(
                            "unknown payload type '{payload}' on variant '{}' of enum '{}'",
                            variant.name(),
                            object.id()
                        ),
                    )
                    .with_label(variant.span(), "neither a primitive nor a declared object");
                    out.push(type_help(diagnostic, payload, index));
                }
            }
        }
    }
}

pub(super) fn aggregates(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for object in context.objects() {
        let ObjectKind::Aggregate { root, members, .. } = object.kind() else {
            continue;
        };

        if !index.contains(root.as_str()) {
            let diagnostic = Diagnostic::error(
                codes::AGGREGATE_ROOT_UNRESOLVED,
                format!("unknown root '{root}' in aggregate '{}'", object.id()),
            )
            .with_label(object.span(), "not a declared object");
            out.push(name_help(diagnostic, root.as_str(), index));
        } else {
            // Root checks only make sense once the root resolves.
            let root_object = context.object(root.as_str());
            if let Some(root_object) = root_object {
                if !root_object.is_entity() {
                    out.push(
                        Diagnostic::error(
                            codes::AGGREGATE_ROOT_NOT_ENTITY,
                            format!(
                                "root '{root}' of aggregate '{}' is not an entity",
                                object.id()
                            ),
                        )
                        .with_label(object.span(), "root must be an entity")
                        .with_label(
                            root_object.span(),
                            format!("declared as {} here", root_object.kind().name()),
                        ),
                    );
                }
            }
            if members.contains(root) {
                out.push(
                    Diagnostic::error(
                        codes::AGGREGATE_ROOT_IN_MEMBERS,
                        format!(
                            "root '{root}' of aggregate '{}' is also listed as a member",
                            object.id()
                        ),
                    )
                    .with_label(object.span(), "remove the root from the member list"),
                );
            }
        }

        for member in members {
            if index.contains(member.as_str()) {
                continue;
            }
            let diagnostic = Diagnostic::error(
                codes::AGGREGATE_MEMBER_UNRESOLVED,
                format!("unknown member '{member}' in aggregate '{}'", object.id()),
            )
            .with_label(object.span(), "not a declared object");
            out.push(name_help(diagnostic, member.as_str(), index));
        }
    }
}

pub(super) fn equations(context: &BoundedContext, index: &NameIndex, out: &mut Vec<Diagnostic>) {
    for equation in context.equations() {
        check_equation(equation, None, context, index, out);
    }
    for object in context.objects() {
        let ObjectKind::Aggregate { root, invariants, .. } = object.kind() else {
            continue;
        };
        // Invariant equations default to the aggregate root as their scope.
        // An unresolved root already drew an error, skip the bodies then.
        let root_object = context.object(root.as_str());
        for invariant in invariants {
            if let Invariant::Equation(equation) = invariant {
                if equation.scope().is_none() && root_object.is_none() {
                    continue;
                }
                check_equation(equation, root_object, context, index, out);
            }
        }
    }
}

fn check_equation(
    equation: &PathEquation,
    default_scope: Option<&Object>,
    context: &BoundedContext,
    index: &NameIndex,
    out: &mut Vec<Diagnostic>,
) {
    let scope = match equation.scope() {
        Some(scope_name) => {
            let Some(object) = context.object(scope_name.as_str()) else {
                let diagnostic = Diagnostic::error(
                    codes::EQUATION_SCOPE_UNRESOLVED,
                    format!(
                        "unknown scope object '{scope_name}' in equation '{}'",
                        equation.name()
                    ),
                )
                .with_label(equation.span(), "not a declared object");
                out.push(name_help(diagnostic, scope_name.as_str(), index));
                return;
            };
            Some(object)
        }
        None => default_scope,
    };

    check_expr(equation.lhs(), scope, equation, context, index, out);
    check_expr(equation.rhs(), scope, equation, context, index, out);
}

/// What an expression denotes while walking an access chain.
enum Denotation<'a> {
    /// A declared object whose fields and outgoing morphisms are known.
    Object(&'a Object),
    /// A primitive, a collection, an already-reported failure, or anything
    /// else member access cannot be checked against.
    Opaque,
}

fn check_expr<'a>(
    expr: &Expr,
    scope: Option<&'a Object>,
    equation: &PathEquation,
    context: &'a BoundedContext,
    index: &NameIndex,
    out: &mut Vec<Diagnostic>,
) -> Denotation<'a> {
    match expr {
        Expr::Name { name, span } => {
            if let Some(scope_object) = scope {
                if let Some(denoted) = member_of(scope_object, name, context) {
                    return denoted;
                }
            }
            if let Some(object) = context.object(name) {
                return Denotation::Object(object);
            }
            if let Some(morphism) = context.morphism(name) {
                return morphism_target(morphism.target().as_str(), context);
            }
            let diagnostic = Diagnostic::error(
                codes::EQUATION_NAME_UNRESOLVED,
                format!("unknown name '{name}' in equation '{}'", equation.name()),
            )
            .with_label(*span, "cannot be resolved");
            out.push(scoped_name_help(diagnostic, name, scope, context, index));
            Denotation::Opaque
        }
        Expr::Access { base, name, span } => {
            let base_denotation = check_expr(base, scope, equation, context, index, out);
            match base_denotation {
                Denotation::Object(object) => match member_of(object, name, context) {
                    Some(denoted) => denoted,
                    None => {
                        let diagnostic = Diagnostic::error(
                            codes::EQUATION_NAME_UNRESOLVED,
                            format!(
                                "unknown member '{name}' on '{}' in equation '{}'",
                                object.id(),
                                equation.name()
                            ),
                        )
                        .with_label(*span, "no such field or morphism");
                        out.push(member_help(diagnostic, name, object, context));
                        Denotation::Opaque
                    }
                },
                // The base already failed or is opaque, nothing to check.
                Denotation::Opaque => Denotation::Opaque,
            }
        }
        Expr::Sum { expr, .. } | Expr::Count { expr, .. } => {
            check_expr(expr, scope, equation, context, index, out);
            Denotation::Opaque
        }
        Expr::Literal { .. } => Denotation::Opaque,
    }
}

/// Resolves `name` as a field or outgoing morphism of `object`.
fn member_of<'a>(
    object: &'a Object,
    name: &str,
    context: &'a BoundedContext,
) -> Option<Denotation<'a>> {
    if let Some(fields) = object.kind().fields() {
        if let Some(field) = fields.iter().find(|f| f.name() == name) {
            return Some(morphism_target(field.type_name(), context));
        }
    }
    context
        .morphisms_from(object.id().as_str())
        .find(|m| m.id().as_str() == name)
        .map(|m| morphism_target(m.target().as_str(), context))
}

fn morphism_target<'a>(type_name: &str, context: &'a BoundedContext) -> Denotation<'a> {
    match context.object(type_name) {
        Some(object) => Denotation::Object(object),
        None => Denotation::Opaque,
    }
}

fn scoped_name_help(
    diagnostic: Diagnostic,
    name: &str,
    scope: Option<&Object>,
    context: &BoundedContext,
    index: &NameIndex,
) -> Diagnostic {
    if let Some(scope_object) = scope {
        if let Some(hit) = nearest_of(name, member_names(scope_object, context)) {
            return diagnostic
                .with_suggestion(
                    Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit),
                )
                .with_group_key(name);
        }
    }
    name_help(diagnostic, name, index)
}

fn member_help(
    diagnostic: Diagnostic,
    name: &str,
    object: &Object,
    context: &BoundedContext,
) -> Diagnostic {
    let diagnostic = match nearest_of(name, member_names(object, context)) {
        Some(hit) => diagnostic
            .with_suggestion(Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit)),
        None => {
            diagnostic.with_note(available_options(member_names(object, context), AVAILABLE_LIMIT))
        }
    };
    diagnostic.with_group_key(name)
}

fn member_names<'a>(
    object: &'a Object,
    context: &'a BoundedContext,
) -> impl Iterator<Item = &'a str> {
    object
        .kind()
        .fields()
        .unwrap_or(&[])
        .iter()
        .map(|f| f.name())
        .chain(
            context
                .morphisms_from(object.id().as_str())
                .map(|m| m.id().as_str()),
        )
}

pub(super) fn aggregate_warnings(
    context: &BoundedContext,
    index: &NameIndex,
    out: &mut Vec<Diagnostic>,
) {
    for object in context.objects() {
        let ObjectKind::Aggregate { root, members, invariants } = object.kind() else {
            continue;
        };
        // Broken aggregates already drew errors, no advice on top.
        if !index.contains(root.as_str()) {
            continue;
        }

        if invariants.is_empty() {
            out.push(
                Diagnostic::warning(
                    codes::AGGREGATE_WITHOUT_INVARIANTS,
                    format!("aggregate '{}' declares no invariants", object.id()),
                )
                .with_label(object.span(), "nothing protects this aggregate's consistency"),
            );
        }
        if members.is_empty() {
            out.push(
                Diagnostic::warning(
                    codes::AGGREGATE_WITHOUT_MEMBERS,
                    format!("aggregate '{}' has no members besides its root", object.id()),
                )
                .with_label(object.span(), "a single-object aggregate adds no boundary"),
            );
        }
        if members.len() > AGGREGATE_MEMBER_LIMIT {
            out.push(
                Diagnostic::warning(
                    codes::AGGREGATE_TOO_LARGE,
                    format!(
                        "aggregate '{}' has {} members",
                        object.id(),
                        members.len()
                    ),
                )
                .with_label(object.span(), "large aggregates serialize every change")
                .with_suggestion(Suggestion::new("consider splitting this aggregate")),
            );
        }
    }
}

pub(super) fn value_object_warnings(
    context: &BoundedContext,
    _index: &NameIndex,
    out: &mut Vec<Diagnostic>,
) {
    for object in context.objects() {
        let ObjectKind::ValueObject { fields } = object.kind() else {
            continue;
        };

        if fields.is_empty() {
            out.push(
                Diagnostic::warning(
                    codes::VALUE_OBJECT_WITHOUT_FIELDS,
                    format!("value object '{}' has no fields", object.id()),
                )
                .with_label(object.span(), "carries no data"),
            );
        }
        for field in fields {
            let refers_to_entity = context
                .object(field.type_name())
                .map(Object::is_entity)
                .unwrap_or(false);
            if refers_to_entity {
                out.push(
                    Diagnostic::warning(
                        codes::VALUE_OBJECT_FIELD_IS_ENTITY,
                        format!(
                            "field '{}' of value object '{}' refers to entity '{}'",
                            field.name(),
                            object.id(),
                            field.type_name()
                        ),
                    )
                    .with_label(field.span(), "entities have identity, value objects compare by value")
                    .with_note("reference the entity by id or model the data as a value object"),
                );
            }
        }
    }
}
