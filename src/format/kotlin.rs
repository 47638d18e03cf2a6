// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kotlin backend. Declares no tagged-union capability on purpose: tagged
//! enums arrive pre-lowered as a plain enum class plus a payload data class,
//! the degraded form documented for targets without discriminated unions.
//! Aggregate operations render as extension functions over immutable copies.

use super::ident::{to_camel_case, to_pascal_case, to_snake_case};
use super::{Backend, BackendConfig, ItemKind, RenderError, Target};
use crate::ir::{CodeItem, CodeUnit, EnumItem, FieldItem, FunctionItem, FunctionKind, StructItem, StructTag};
use crate::model::{Expr, Literal};
use std::fmt::Write as _;

pub struct Kotlin;

impl Backend for Kotlin {
    fn target(&self) -> Target {
        Target::Kotlin
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn supports(&self, kind: ItemKind) -> bool {
        !matches!(kind, ItemKind::TaggedUnion | ItemKind::Module)
    }

    fn render_unit(&self, unit: &CodeUnit, config: &BackendConfig) -> Result<String, RenderError> {
        let mut out = String::new();
        if config.include_comments {
            let _ = writeln!(out, "// Generated by proteus from context '{}'.", unit.name);
            let _ = writeln!(out, "// Do not edit by hand.");
            out.push('\n');
        }
        let package = config
            .namespace
            .clone()
            .unwrap_or_else(|| to_snake_case(&unit.name));
        let _ = writeln!(out, "package {package}");
        out.push('\n');
        render_imports(&mut out, &unit.imports);

        for item in &unit.items {
            match item {
                CodeItem::Struct(s) => render_struct(&mut out, s, config),
                CodeItem::Enum(e) => render_enum(&mut out, e),
                CodeItem::Function(f) => render_function(&mut out, f),
                CodeItem::Interface(i) => render_interface(&mut out, i),
                CodeItem::Module(_) => {
                    return Err(RenderError::Unsupported {
                        target: Target::Kotlin,
                        kind: ItemKind::Module,
                    })
                }
            }
        }
        Ok(out)
    }
}

fn render_imports(out: &mut String, imports: &[String]) {
    let mut wrote = false;
    for primitive in imports {
        let path = match primitive.as_str() {
            "Decimal" => "java.math.BigDecimal",
            "Date" => "java.time.LocalDate",
            "DateTime" => "java.time.Instant",
            "Uuid" => "java.util.UUID",
            _ => continue,
        };
        let _ = writeln!(out, "import {path}");
        wrote = true;
    }
    if wrote {
        out.push('\n');
    }
}

fn kotlin_type(name: &str) -> String {
    match name {
        "String" => "String".to_owned(),
        "Int" => "Long".to_owned(),
        "Float" => "Double".to_owned(),
        "Bool" => "Boolean".to_owned(),
        "Decimal" => "BigDecimal".to_owned(),
        "Date" => "LocalDate".to_owned(),
        "DateTime" => "Instant".to_owned(),
        "Uuid" => "UUID".to_owned(),
        other => to_pascal_case(other),
    }
}

fn field_declaration(field: &FieldItem) -> String {
    let base = kotlin_type(&field.type_name);
    let name = to_camel_case(&field.name);
    if field.collection {
        format!("val {name}: List<{base}> = emptyList()")
    } else if field.optional {
        format!("val {name}: {base}? = null")
    } else {
        format!("val {name}: {base}")
    }
}

fn render_struct(out: &mut String, item: &StructItem, config: &BackendConfig) {
    if config.include_comments {
        let doc = match &item.tag {
            StructTag::Entity { id_field } => {
                format!("/** Entity; identified by '{}'. */", to_camel_case(id_field))
            }
            StructTag::ValueObject => "/** Value object; compared by value. */".to_owned(),
            StructTag::AggregateRoot => {
                "/** Aggregate root; owns its member collections. */".to_owned()
            }
        };
        let _ = writeln!(out, "{doc}");
    }
    let _ = writeln!(out, "data class {}(", to_pascal_case(&item.name));
    for field in &item.fields {
        let _ = writeln!(out, "    {},", field_declaration(field));
    }
    let _ = writeln!(out, ")");
    out.push('\n');
}

fn render_interface(out: &mut String, item: &crate::ir::InterfaceItem) {
    let _ = writeln!(out, "interface {} {{", to_pascal_case(&item.name));
    for field in &item.fields {
        let base = kotlin_type(&field.type_name);
        let suffix = if field.optional { "?" } else { "" };
        let ty = if field.collection { format!("List<{base}>") } else { base };
        let _ = writeln!(out, "    val {}: {ty}{suffix}", to_camel_case(&field.name));
    }
    let _ = writeln!(out, "}}");
    out.push('\n');
}

fn render_enum(out: &mut String, item: &EnumItem) {
    let _ = writeln!(out, "enum class {} {{", to_pascal_case(&item.name));
    for variant in &item.variants {
        let _ = writeln!(out, "    {},", variant.name);
    }
    let _ = writeln!(out, "}}");
    out.push('\n');
}

fn render_function(out: &mut String, function: &FunctionItem) {
    let name = to_camel_case(&function.name);
    let owner = to_pascal_case(&function.owner);
    match &function.kind {
        FunctionKind::AddMember { member_type, field } => {
            let param = to_camel_case(member_type);
            let ty = kotlin_type(member_type);
            let field = to_camel_case(field);
            let _ = writeln!(out, "fun {owner}.{name}({param}: {ty}): {owner} =");
            let _ = writeln!(out, "    copy({field} = {field} + {param})");
        }
        FunctionKind::RemoveMember { member_type, field } => {
            let param = to_camel_case(member_type);
            let ty = kotlin_type(member_type);
            let field = to_camel_case(field);
            let _ = writeln!(out, "fun {owner}.{name}({param}: {ty}): {owner} =");
            let _ = writeln!(out, "    copy({field} = {field} - {param})");
        }
        FunctionKind::InvariantCheck { invariant, op, lhs, rhs } => {
            let _ = writeln!(out, "fun {owner}.{name}() {{");
            let _ = writeln!(
                out,
                "    require({} {} {}) {{ \"invariant '{invariant}' violated\" }}",
                render_expr(lhs),
                op.as_str(),
                render_expr(rhs)
            );
            let _ = writeln!(out, "}}");
        }
    }
    out.push('\n');
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Name { name, .. } => to_camel_case(name),
        Expr::Access { base, name, .. } => {
            format!("{}.{}", render_expr(base), to_camel_case(name))
        }
        Expr::Sum { expr: inner, .. } => match inner.as_ref() {
            Expr::Access { base, name, .. } => {
                format!("{}.sumOf {{ it.{} }}", render_expr(base), to_camel_case(name))
            }
            other => format!("{}.sum()", render_expr(other)),
        },
        Expr::Count { expr: inner, .. } => format!("{}.size", render_expr(inner)),
        Expr::Literal { value, .. } => render_literal(value),
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::Int(v) => v.to_string(),
        Literal::Float(lexeme) => lexeme.clone(),
        Literal::Bool(v) => v.to_string(),
        Literal::Str(v) => format!("\"{v}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::Kotlin;
    use crate::format::{lower_unsupported, Backend, BackendConfig};
    use crate::ir::build;
    use crate::model::{
        BoundedContext, Cardinality, CompareOp, ContextId, Expr, Field, Invariant, Morphism,
        MorphismId, ObjectId, PathEquation, Variant,
    };

    fn oid(name: &str) -> ObjectId {
        ObjectId::new(name).expect("object id")
    }

    fn commerce() -> BoundedContext {
        let mut ctx = BoundedContext::new(ContextId::new("Commerce").expect("context id"));
        ctx.add_entity(oid("Order"), vec![Field::new("total", "Decimal")]);
        ctx.add_entity(oid("LineItem"), vec![Field::new("subtotal", "Decimal")]);
        ctx.add_morphism(Morphism::new(
            MorphismId::new("items").expect("morphism id"),
            oid("Order"),
            oid("LineItem"),
            Cardinality::Many,
        ));
        ctx.add_value_object(oid("Money"), vec![Field::new("amount", "Decimal")]);
        ctx.add_enum(
            oid("Refund"),
            vec![
                Variant::new_with("Full", Some("Money".into()), Default::default()),
                Variant::new("Denied"),
            ],
        );
        ctx.add_aggregate(
            oid("OrderAggregate"),
            oid("Order"),
            vec![oid("LineItem")],
            vec![Invariant::Equation(PathEquation::new(
                "total_matches_items",
                CompareOp::Eq,
                Expr::name("total"),
                Expr::sum(Expr::access(Expr::name("items"), "subtotal")),
            ))],
        );
        ctx
    }

    fn rendered() -> String {
        let unit = build(&commerce());
        let lowered = lower_unsupported(&unit, &Kotlin);
        Kotlin
            .render_unit(&lowered, &BackendConfig::default())
            .expect("render")
    }

    #[test]
    fn package_and_imports_lead_the_file() {
        let output = rendered();
        assert!(output.contains("package commerce\n"));
        assert!(output.contains("import java.math.BigDecimal\n"));
        assert!(output.contains("import java.util.UUID\n"));
    }

    #[test]
    fn entities_render_as_data_classes() {
        let output = rendered();
        assert!(output.contains(
            "data class Order(\n    val id: UUID,\n    val total: BigDecimal,\n    val items: List<LineItem> = emptyList(),\n)"
        ));
    }

    #[test]
    fn tagged_enums_degrade_to_enum_plus_payload() {
        let output = rendered();
        assert!(output.contains("enum class Refund {\n    Full,\n    Denied,\n}"));
        assert!(output.contains("data class RefundPayload(\n    val full: Money? = null,\n)"));
    }

    #[test]
    fn aggregate_operations_are_extension_functions() {
        let output = rendered();
        assert!(output.contains(
            "fun OrderAggregate.addLineItem(lineItem: LineItem): OrderAggregate =\n    copy(lineItems = lineItems + lineItem)"
        ));
        assert!(output.contains(
            "fun OrderAggregate.removeLineItem(lineItem: LineItem): OrderAggregate =\n    copy(lineItems = lineItems - lineItem)"
        ));
    }

    #[test]
    fn invariant_checks_use_require() {
        let output = rendered();
        assert!(output.contains("fun OrderAggregate.checkTotalMatchesItems() {"));
        assert!(output.contains(
            "require(total == items.sumOf { it.subtotal }) { \"invariant 'total_matches_items' violated\" }"
        ));
    }

    #[test]
    fn namespace_overrides_the_package() {
        let unit = build(&commerce());
        let lowered = lower_unsupported(&unit, &Kotlin);
        let output = Kotlin
            .render_unit(
                &lowered,
                &BackendConfig {
                    namespace: Some("com.example.commerce".into()),
                    ..Default::default()
                },
            )
            .expect("render");
        assert!(output.contains("package com.example.commerce\n"));
    }

    #[test]
    fn output_is_byte_stable() {
        assert_eq!(rendered(), rendered());
    }
}
