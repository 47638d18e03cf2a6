// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rust backend. The only backend with native module support; aggregates
//! render as `pub mod` blocks and invariant checks return `Result`.

use super::ident::{to_pascal_case, to_snake_case};
use super::{Backend, BackendConfig, ItemKind, RenderError, Target};
use crate::ir::{CodeItem, CodeUnit, EnumItem, FunctionItem, FunctionKind, StructItem, StructTag};
use crate::model::{Expr, Literal};
use std::fmt::Write as _;

pub struct Rust;

impl Backend for Rust {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn supports(&self, kind: ItemKind) -> bool {
        kind != ItemKind::Interface
    }

    fn render_unit(&self, unit: &CodeUnit, config: &BackendConfig) -> Result<String, RenderError> {
        let mut out = String::new();
        if config.include_comments {
            let _ = writeln!(out, "// Generated by proteus from context '{}'.", unit.name);
            let _ = writeln!(out, "// Do not edit by hand.");
            out.push('\n');
        }
        if has_invariant_checks(&unit.items) {
            render_violation_type(&mut out, config);
        }
        render_items(&mut out, &unit.items, 0, config)?;
        Ok(out)
    }
}

fn rust_type(name: &str) -> String {
    match name {
        "String" => "String".to_owned(),
        "Int" => "i64".to_owned(),
        "Float" => "f64".to_owned(),
        "Bool" => "bool".to_owned(),
        "Decimal" => "rust_decimal::Decimal".to_owned(),
        "Date" => "chrono::NaiveDate".to_owned(),
        "DateTime" => "chrono::DateTime<chrono::Utc>".to_owned(),
        "Uuid" => "uuid::Uuid".to_owned(),
        other => to_pascal_case(other),
    }
}

fn line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}

fn render_items(
    out: &mut String,
    items: &[CodeItem],
    indent: usize,
    config: &BackendConfig,
) -> Result<(), RenderError> {
    let mut i = 0;
    while i < items.len() {
        match &items[i] {
            CodeItem::Function(first) => {
                // A run of functions with one owner becomes one impl block.
                let owner = first.owner.clone();
                let mut functions: Vec<&FunctionItem> = Vec::new();
                while let Some(CodeItem::Function(f)) = items.get(i) {
                    if f.owner != owner {
                        break;
                    }
                    functions.push(f);
                    i += 1;
                }
                render_impl_block(out, &owner, &functions, indent);
            }
            CodeItem::Struct(s) => {
                render_struct(out, s, indent, config);
                i += 1;
            }
            CodeItem::Enum(e) => {
                render_enum(out, e, indent);
                i += 1;
            }
            CodeItem::Module(module) => {
                line(out, indent, &format!("pub mod {} {{", to_snake_case(&module.name)));
                for doc in &module.docs {
                    line(out, indent + 1, &format!("//! {doc}"));
                }
                if !module.docs.is_empty() {
                    out.push('\n');
                }
                line(out, indent + 1, "use super::*;");
                out.push('\n');
                render_items(out, &module.items, indent + 1, config)?;
                line(out, indent, "}");
                out.push('\n');
                i += 1;
            }
            CodeItem::Interface(_) => {
                return Err(RenderError::Unsupported {
                    target: Target::Rust,
                    kind: ItemKind::Interface,
                })
            }
        }
    }
    Ok(())
}

fn render_struct(out: &mut String, item: &StructItem, indent: usize, config: &BackendConfig) {
    if config.include_comments {
        let doc = match &item.tag {
            StructTag::Entity { id_field } => {
                format!("/// Entity; identified by `{id_field}`.")
            }
            StructTag::ValueObject => "/// Value object; compared by value.".to_owned(),
            StructTag::AggregateRoot => "/// Aggregate root; owns its member collections.".to_owned(),
        };
        line(out, indent, &doc);
    }
    line(out, indent, "#[derive(Debug, Clone, PartialEq)]");
    line(out, indent, &format!("pub struct {} {{", to_pascal_case(&item.name)));
    for field in &item.fields {
        let base = rust_type(&field.type_name);
        let ty = if field.collection {
            format!("Vec<{base}>")
        } else if field.optional {
            format!("Option<{base}>")
        } else {
            base
        };
        line(out, indent + 1, &format!("pub {}: {ty},", to_snake_case(&field.name)));
    }
    line(out, indent, "}");
    out.push('\n');
}

fn render_enum(out: &mut String, item: &EnumItem, indent: usize) {
    if item.tagged {
        line(out, indent, "#[derive(Debug, Clone, PartialEq)]");
    } else {
        line(out, indent, "#[derive(Debug, Clone, Copy, PartialEq, Eq)]");
    }
    line(out, indent, &format!("pub enum {} {{", to_pascal_case(&item.name)));
    for variant in &item.variants {
        match &variant.payload {
            Some(payload) => line(
                out,
                indent + 1,
                &format!("{}({}),", to_pascal_case(&variant.name), rust_type(payload)),
            ),
            None => line(out, indent + 1, &format!("{},", to_pascal_case(&variant.name))),
        }
    }
    line(out, indent, "}");
    out.push('\n');
}

fn render_impl_block(out: &mut String, owner: &str, functions: &[&FunctionItem], indent: usize) {
    line(out, indent, &format!("impl {} {{", to_pascal_case(owner)));
    for (position, function) in functions.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        render_function(out, function, indent + 1);
    }
    line(out, indent, "}");
    out.push('\n');
}

fn render_function(out: &mut String, function: &FunctionItem, indent: usize) {
    let name = to_snake_case(&function.name);
    match &function.kind {
        FunctionKind::AddMember { member_type, field } => {
            let param = to_snake_case(member_type);
            let ty = rust_type(member_type);
            line(out, indent, &format!("pub fn {name}(&mut self, {param}: {ty}) {{"));
            line(out, indent + 1, &format!("self.{field}.push({param});"));
            line(out, indent, "}");
        }
        FunctionKind::RemoveMember { member_type, field } => {
            let param = to_snake_case(member_type);
            let ty = rust_type(member_type);
            line(out, indent, &format!("pub fn {name}(&mut self, {param}: &{ty}) {{"));
            line(
                out,
                indent + 1,
                &format!("self.{field}.retain(|member| member != {param});"),
            );
            line(out, indent, "}");
        }
        FunctionKind::InvariantCheck { invariant, op, lhs, rhs } => {
            line(
                out,
                indent,
                &format!("pub fn {name}(&self) -> Result<(), InvariantViolation> {{"),
            );
            line(
                out,
                indent + 1,
                &format!("if !({} {} {}) {{", render_expr(lhs), op.as_str(), render_expr(rhs)),
            );
            line(
                out,
                indent + 2,
                &format!("return Err(InvariantViolation::new(\"{invariant}\"));"),
            );
            line(out, indent + 1, "}");
            line(out, indent + 1, "Ok(())");
            line(out, indent, "}");
        }
    }
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Name { name, .. } => format!("self.{}", to_snake_case(name)),
        Expr::Access { base, name, .. } => {
            format!("{}.{}", render_expr(base), to_snake_case(name))
        }
        Expr::Sum { expr: inner, .. } => match inner.as_ref() {
            Expr::Access { base, name, .. } => format!(
                "{}.iter().map(|member| member.{}).sum::<f64>()",
                render_expr(base),
                to_snake_case(name)
            ),
            other => format!("{}.iter().sum::<f64>()", render_expr(other)),
        },
        Expr::Count { expr: inner, .. } => format!("{}.len()", render_expr(inner)),
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

fn has_invariant_checks(items: &[CodeItem]) -> bool {
    items.iter().any(|item| match item {
        CodeItem::Function(f) => matches!(f.kind, FunctionKind::InvariantCheck { .. }),
        CodeItem::Module(m) => has_invariant_checks(&m.items),
        _ => false,
    })
}

fn render_violation_type(out: &mut String, config: &BackendConfig) {
    if config.include_comments {
        line(out, 0, "/// Raised when a checked invariant does not hold.");
    }
    line(out, 0, "#[derive(Debug, Clone, PartialEq, Eq)]");
    line(out, 0, "pub struct InvariantViolation {");
    line(out, 1, "pub invariant: String,");
    line(out, 0, "}");
    out.push('\n');
    line(out, 0, "impl InvariantViolation {");
    line(out, 1, "pub fn new(invariant: impl Into<String>) -> Self {");
    line(out, 2, "Self { invariant: invariant.into() }");
    line(out, 1, "}");
    line(out, 0, "}");
    out.push('\n');
    line(out, 0, "impl std::fmt::Display for InvariantViolation {");
    line(out, 1, "fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
    line(out, 2, "write!(f, \"invariant '{}' violated\", self.invariant)");
    line(out, 1, "}");
    line(out, 0, "}");
    out.push('\n');
    line(out, 0, "impl std::error::Error for InvariantViolation {}");
    out.push('\n');
}
