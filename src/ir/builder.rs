// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    CodeItem, CodeUnit, EnumItem, FieldItem, FunctionItem, FunctionKind, ModuleItem, StructItem,
    StructTag, VariantItem,
};
use crate::format::ident::to_snake_case;
use crate::model::{BoundedContext, Cardinality, Field, Invariant, Object, ObjectKind};
use crate::validate::ValidationResult;
use std::collections::HashSet;
use std::fmt;

/// Primitives some targets can only reach through an import.
const NON_BASIC_PRIMITIVES: &[&str] = &["Decimal", "Date", "DateTime", "Uuid"];

/// Name of the identity field synthesized onto every entity.
const ID_FIELD: &str = "id";

/// Lowers a context into a code unit. Total and pure: unresolved names pass
/// through verbatim, nothing is reordered, the same context always yields
/// the same unit. Gating on validation is [`build_checked`]'s job.
pub fn build(context: &BoundedContext) -> CodeUnit {
    let mut items = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for object in context.objects() {
        // On duplicate names the first declaration is the one generated.
        if !seen.insert(object.id().as_str()) {
            continue;
        }
        match object.kind() {
            ObjectKind::Entity { fields } => {
                items.push(CodeItem::Struct(StructItem {
                    name: object.id().to_string(),
                    tag: StructTag::Entity {
                        id_field: ID_FIELD.to_owned(),
                    },
                    fields: entity_fields(fields, object, context),
                }));
            }
            ObjectKind::ValueObject { fields } => {
                items.push(CodeItem::Struct(StructItem {
                    name: object.id().to_string(),
                    tag: StructTag::ValueObject,
                    fields: declared_and_morphism_fields(fields, object, context),
                }));
            }
            ObjectKind::Enum { variants } => {
                let variants: Vec<VariantItem> = variants
                    .iter()
                    .map(|v| VariantItem {
                        name: v.name().to_owned(),
                        payload: v.payload().map(str::to_owned),
                    })
                    .collect();
                let tagged = variants.iter().any(|v| v.payload.is_some());
                items.push(CodeItem::Enum(EnumItem {
                    name: object.id().to_string(),
                    variants,
                    tagged,
                }));
            }
            ObjectKind::Aggregate { root, members, invariants } => {
                items.push(CodeItem::Module(aggregate_module(
                    object, root.as_str(), members, invariants, context,
                )));
            }
        }
    }

    CodeUnit {
        name: context.id().to_string(),
        imports: collect_imports(&items),
        items,
    }
}

/// Typed refusal returned by [`build_checked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    ValidationFailed { errors: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed { errors } => {
                write!(f, "refusing to generate: {errors} validation error(s)")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// The generation gate: builds only when validation produced no errors.
/// Warnings do not block.
pub fn build_checked(
    context: &BoundedContext,
    result: &ValidationResult,
) -> Result<CodeUnit, BuildError> {
    if !result.is_ok() {
        return Err(BuildError::ValidationFailed {
            errors: result.error_count(),
        });
    }
    Ok(build(context))
}

fn entity_fields(declared: &[Field], object: &Object, context: &BoundedContext) -> Vec<FieldItem> {
    let mut fields = Vec::with_capacity(declared.len() + 1);
    fields.push(FieldItem::plain(ID_FIELD, "Uuid"));
    fields.extend(declared_and_morphism_fields(declared, object, context));
    fields
}

/// Declared fields in order, then one field per outgoing morphism, shaped by
/// its cardinality.
fn declared_and_morphism_fields(
    declared: &[Field],
    object: &Object,
    context: &BoundedContext,
) -> Vec<FieldItem> {
    let mut fields: Vec<FieldItem> = declared
        .iter()
        .map(|field| FieldItem {
            name: field.name().to_owned(),
            type_name: field.type_name().to_owned(),
            optional: field.optional(),
            collection: false,
        })
        .collect();
    for morphism in context.morphisms_from(object.id().as_str()) {
        let target = morphism.target().to_string();
        fields.push(match morphism.cardinality() {
            Cardinality::One => FieldItem::plain(morphism.id().as_str(), target),
            Cardinality::Optional => FieldItem::optional(morphism.id().as_str(), target),
            Cardinality::Many => FieldItem::collection(morphism.id().as_str(), target),
        });
    }
    fields
}

fn aggregate_module(
    object: &Object,
    root: &str,
    members: &[crate::model::ObjectId],
    invariants: &[Invariant],
    context: &BoundedContext,
) -> ModuleItem {
    let mut root_fields = vec![FieldItem::plain(ID_FIELD, "Uuid")];
    if let Some(fields) = context.object(root).and_then(|o| o.kind().fields()) {
        root_fields.extend(fields.iter().map(|field| FieldItem {
            name: field.name().to_owned(),
            type_name: field.type_name().to_owned(),
            optional: field.optional(),
            collection: false,
        }));
    }
    for member in members {
        root_fields.push(FieldItem::collection(
            member_field_name(member.as_str()),
            member.as_str(),
        ));
    }

    let mut items = vec![CodeItem::Struct(StructItem {
        name: root.to_owned(),
        tag: StructTag::AggregateRoot,
        fields: root_fields,
    })];

    for member in members {
        let field = member_field_name(member.as_str());
        items.push(CodeItem::Function(FunctionItem {
            name: format!("add_{}", to_snake_case(member.as_str())),
            owner: root.to_owned(),
            kind: FunctionKind::AddMember {
                member_type: member.to_string(),
                field: field.clone(),
            },
        }));
        items.push(CodeItem::Function(FunctionItem {
            name: format!("remove_{}", to_snake_case(member.as_str())),
            owner: root.to_owned(),
            kind: FunctionKind::RemoveMember {
                member_type: member.to_string(),
                field,
            },
        }));
    }

    let mut docs = Vec::new();
    for invariant in invariants {
        match invariant {
            Invariant::Equation(equation) => {
                items.push(CodeItem::Function(FunctionItem {
                    name: format!("check_{}", to_snake_case(equation.name())),
                    owner: root.to_owned(),
                    kind: FunctionKind::InvariantCheck {
                        invariant: equation.name().to_owned(),
                        op: equation.op(),
                        lhs: equation.lhs().clone(),
                        rhs: equation.rhs().clone(),
                    },
                }));
            }
            Invariant::Rule(rule) => docs.push(rule.clone()),
        }
    }

    ModuleItem {
        name: object.id().to_string(),
        docs,
        items,
    }
}

fn member_field_name(member: &str) -> String {
    format!("{}s", to_snake_case(member))
}

fn collect_imports(items: &[CodeItem]) -> Vec<String> {
    let mut imports = Vec::new();
    let mut push = |type_name: &str, imports: &mut Vec<String>| {
        if NON_BASIC_PRIMITIVES.contains(&type_name)
            && !imports.iter().any(|existing| existing == type_name)
        {
            imports.push(type_name.to_owned());
        }
    };
    walk_items(items, &mut |item| match item {
        CodeItem::Struct(s) => {
            for field in &s.fields {
                push(&field.type_name, &mut imports);
            }
        }
        CodeItem::Interface(i) => {
            for field in &i.fields {
                push(&field.type_name, &mut imports);
            }
        }
        CodeItem::Enum(e) => {
            for variant in &e.variants {
                if let Some(payload) = &variant.payload {
                    push(payload, &mut imports);
                }
            }
        }
        CodeItem::Function(_) | CodeItem::Module(_) => {}
    });
    imports
}

fn walk_items(items: &[CodeItem], visit: &mut impl FnMut(&CodeItem)) {
    for item in items {
        visit(item);
        if let CodeItem::Module(module) = item {
            walk_items(&module.items, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{build, build_checked, BuildError};
    use crate::ir::{CodeItem, FunctionKind, StructTag};
    use crate::model::{
        BoundedContext, Cardinality, CompareOp, ContextId, Expr, Field, Invariant, Literal,
        Morphism, MorphismId, ObjectId, PathEquation,
    };
    use crate::validate::validate_context;

    fn oid(name: &str) -> ObjectId {
        ObjectId::new(name).expect("object id")
    }

    fn commerce() -> BoundedContext {
        let mut ctx = BoundedContext::new(ContextId::new("Commerce").expect("context id"));
        ctx.add_entity(oid("Customer"), vec![Field::new("name", "String")]);
        ctx.add_entity(
            oid("Order"),
            vec![Field::new("total", "Decimal"), Field::new("placed", "DateTime")],
        );
        ctx.add_entity(oid("LineItem"), vec![Field::new("subtotal", "Decimal")]);
        ctx.add_morphism(Morphism::new(
            MorphismId::new("placedBy").expect("morphism id"),
            oid("Order"),
            oid("Customer"),
            Cardinality::One,
        ));
        ctx.add_morphism(Morphism::new(
            MorphismId::new("items").expect("morphism id"),
            oid("Order"),
            oid("LineItem"),
            Cardinality::Many,
        ));
        ctx.add_aggregate(
            oid("OrderAggregate"),
            oid("Order"),
            vec![oid("LineItem")],
            vec![
                Invariant::Equation(PathEquation::new(
                    "total_non_negative",
                    CompareOp::Ge,
                    Expr::name("total"),
                    Expr::literal(Literal::Float("0.0".into())),
                )),
                Invariant::Rule("orders are immutable once shipped".into()),
            ],
        );
        ctx
    }

    fn struct_named<'a>(items: &'a [CodeItem], name: &str) -> &'a crate::ir::StructItem {
        items
            .iter()
            .find_map(|item| match item {
                CodeItem::Struct(s) if s.name == name => Some(s),
                _ => None,
            })
            .expect("struct present")
    }

    #[test]
    fn entities_get_a_synthesized_id_first() {
        let unit = build(&commerce());
        let order = struct_named(&unit.items, "Order");
        let names: Vec<_> = order.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "total", "placed", "placedBy", "items"]);
        assert_eq!(order.fields[0].type_name, "Uuid");
        assert!(matches!(order.tag, StructTag::Entity { ref id_field } if id_field == "id"));
    }

    #[test]
    fn morphism_cardinality_shapes_the_field() {
        let unit = build(&commerce());
        let order = struct_named(&unit.items, "Order");
        let placed_by = order.fields.iter().find(|f| f.name == "placedBy").expect("field");
        assert!(!placed_by.optional && !placed_by.collection);
        let items = order.fields.iter().find(|f| f.name == "items").expect("field");
        assert!(items.collection);
    }

    #[test]
    fn aggregate_becomes_a_module() {
        let unit = build(&commerce());
        let module = unit
            .items
            .iter()
            .find_map(|item| match item {
                CodeItem::Module(m) => Some(m),
                _ => None,
            })
            .expect("module");

        assert_eq!(module.name, "OrderAggregate");
        assert_eq!(module.docs, vec!["orders are immutable once shipped"]);

        let root = struct_named(&module.items, "Order");
        assert!(matches!(root.tag, StructTag::AggregateRoot));
        let names: Vec<_> = root.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "total", "placed", "line_items"]);
        assert!(root.fields.last().expect("member field").collection);

        let functions: Vec<_> = module
            .items
            .iter()
            .filter_map(|item| match item {
                CodeItem::Function(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(functions.len(), 3);
        assert_eq!(functions[0].name, "add_line_item");
        assert!(matches!(
            functions[0].kind,
            FunctionKind::AddMember { ref field, .. } if field == "line_items"
        ));
        assert_eq!(functions[1].name, "remove_line_item");
        assert_eq!(functions[2].name, "check_total_non_negative");
        assert!(matches!(
            functions[2].kind,
            FunctionKind::InvariantCheck { op: CompareOp::Ge, .. }
        ));
    }

    #[test]
    fn imports_are_distinct_in_first_use_order() {
        let unit = build(&commerce());
        assert_eq!(unit.imports, vec!["Uuid", "Decimal", "DateTime"]);
    }

    #[test]
    fn duplicate_declarations_generate_once() {
        let mut ctx = commerce();
        ctx.add_entity(oid("Order"), vec![Field::new("other", "String")]);
        let unit = build(&ctx);
        let orders = unit
            .items
            .iter()
            .filter(|item| matches!(item, CodeItem::Struct(s) if s.name == "Order"))
            .count();
        assert_eq!(orders, 1);
        // First declaration wins: the duplicate's field is absent.
        assert!(struct_named(&unit.items, "Order")
            .fields
            .iter()
            .all(|f| f.name != "other"));
    }

    #[test]
    fn building_twice_yields_identical_units() {
        let ctx = commerce();
        assert_eq!(build(&ctx), build(&ctx));
    }

    #[test]
    fn build_checked_refuses_on_errors() {
        let mut ctx = commerce();
        ctx.add_morphism(Morphism::new(
            MorphismId::new("ghost").expect("morphism id"),
            oid("Nowhere"),
            oid("Order"),
            Cardinality::One,
        ));
        let result = validate_context(&ctx);
        let err = build_checked(&ctx, &result).expect_err("blocked");
        assert_eq!(err, BuildError::ValidationFailed { errors: 1 });
        assert_eq!(err.to_string(), "refusing to generate: 1 validation error(s)");
    }

    #[test]
    fn build_checked_passes_with_warnings_only() {
        let mut ctx = commerce();
        ctx.add_value_object(oid("Marker"), vec![]);
        let result = validate_context(&ctx);
        assert!(result.is_ok() && result.has_issues());
        assert!(build_checked(&ctx, &result).is_ok());
    }
}
