// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! TypeScript backend. Tagged enums render as discriminated unions; modules
//! are flattened before rendering, so aggregate operations become standalone
//! functions taking the aggregate as their first parameter.

use super::ident::{to_camel_case, to_pascal_case};
use super::{Backend, BackendConfig, ItemKind, RenderError, Target};
use crate::ir::{CodeItem, CodeUnit, EnumItem, FunctionItem, FunctionKind, StructItem, StructTag};
use crate::model::{CompareOp, Expr, Literal};
use std::fmt::Write as _;

pub struct TypeScript;

impl Backend for TypeScript {
    fn target(&self) -> Target {
        Target::TypeScript
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn supports(&self, kind: ItemKind) -> bool {
        kind != ItemKind::Module
    }

    fn render_unit(&self, unit: &CodeUnit, config: &BackendConfig) -> Result<String, RenderError> {
        let mut out = String::new();
        if config.include_comments {
            let _ = writeln!(out, "// Generated by proteus from context '{}'.", unit.name);
            let _ = writeln!(out, "// Do not edit by hand.");
            out.push('\n');
        }
        for item in &unit.items {
            match item {
                CodeItem::Struct(s) => render_struct(&mut out, s, config),
                CodeItem::Enum(e) => render_enum(&mut out, e),
                CodeItem::Function(f) => render_function(&mut out, f),
                CodeItem::Interface(i) => {
                    render_fields_block(&mut out, &format!("export interface {}", to_pascal_case(&i.name)), &i.fields)
                }
                CodeItem::Module(_) => {
                    return Err(RenderError::Unsupported {
                        target: Target::TypeScript,
                        kind: ItemKind::Module,
                    })
                }
            }
        }
        Ok(out)
    }
}

fn ts_type(name: &str) -> String {
    match name {
        "String" => "string".to_owned(),
        "Int" | "Float" | "Decimal" => "number".to_owned(),
        "Bool" => "boolean".to_owned(),
        "Date" | "DateTime" => "Date".to_owned(),
        "Uuid" => "string".to_owned(),
        other => to_pascal_case(other),
    }
}

fn ts_op(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "===",
        CompareOp::Ne => "!==",
        other => other.as_str(),
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
    let keyword = if config.emit_interfaces { "export interface" } else { "export class" };
    render_fields_block(out, &format!("{keyword} {}", to_pascal_case(&item.name)), &item.fields);
}

fn render_fields_block(out: &mut String, header: &str, fields: &[crate::ir::FieldItem]) {
    let _ = writeln!(out, "{header} {{");
    for field in fields {
        let base = ts_type(&field.type_name);
        let name = to_camel_case(&field.name);
        if field.collection {
            let _ = writeln!(out, "  {name}: {base}[];");
        } else if field.optional {
            let _ = writeln!(out, "  {name}?: {base};");
        } else {
            let _ = writeln!(out, "  {name}: {base};");
        }
    }
    let _ = writeln!(out, "}}");
    out.push('\n');
}

fn render_enum(out: &mut String, item: &EnumItem) {
    let name = to_pascal_case(&item.name);
    if item.tagged {
        let _ = writeln!(out, "export type {name} =");
        for (position, variant) in item.variants.iter().enumerate() {
            let terminator = if position + 1 == item.variants.len() { ";" } else { "" };
            match &variant.payload {
                Some(payload) => {
                    let _ = writeln!(
                        out,
                        "  | {{ kind: \"{}\"; payload: {} }}{terminator}",
                        variant.name,
                        ts_type(payload)
                    );
                }
                None => {
                    let _ = writeln!(out, "  | {{ kind: \"{}\" }}{terminator}", variant.name);
                }
            }
        }
    } else {
        let _ = writeln!(out, "export enum {name} {{");
        for variant in &item.variants {
            let _ = writeln!(out, "  {} = \"{}\",", variant.name, variant.name);
        }
        let _ = writeln!(out, "}}");
    }
    out.push('\n');
}

fn render_function(out: &mut String, function: &FunctionItem) {
    let name = to_camel_case(&function.name);
    let owner = to_pascal_case(&function.owner);
    match &function.kind {
        FunctionKind::AddMember { member_type, field } => {
            let param = to_camel_case(member_type);
            let ty = ts_type(member_type);
            let field = to_camel_case(field);
            let _ = writeln!(
                out,
                "export function {name}(aggregate: {owner}, {param}: {ty}): void {{"
            );
            let _ = writeln!(out, "  aggregate.{field}.push({param});");
            let _ = writeln!(out, "}}");
        }
        FunctionKind::RemoveMember { member_type, field } => {
            let param = to_camel_case(member_type);
            let ty = ts_type(member_type);
            let field = to_camel_case(field);
            let _ = writeln!(
                out,
                "export function {name}(aggregate: {owner}, {param}: {ty}): void {{"
            );
            let _ = writeln!(
                out,
                "  aggregate.{field} = aggregate.{field}.filter((member) => member !== {param});"
            );
            let _ = writeln!(out, "}}");
        }
        FunctionKind::InvariantCheck { invariant, op, lhs, rhs } => {
            let _ = writeln!(out, "export function {name}(aggregate: {owner}): void {{");
            let _ = writeln!(
                out,
                "  if (!({} {} {})) {{",
                render_expr(lhs),
                ts_op(*op),
                render_expr(rhs)
            );
            let _ = writeln!(out, "    throw new Error(\"invariant '{invariant}' violated\");");
            let _ = writeln!(out, "  }}");
            let _ = writeln!(out, "}}");
        }
    }
    out.push('\n');
}

fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Name { name, .. } => format!("aggregate.{}", to_camel_case(name)),
        Expr::Access { base, name, .. } => {
            format!("{}.{}", render_expr(base), to_camel_case(name))
        }
        Expr::Sum { expr: inner, .. } => match inner.as_ref() {
            Expr::Access { base, name, .. } => format!(
                "{}.reduce((total, member) => total + member.{}, 0)",
                render_expr(base),
                to_camel_case(name)
            ),
            other => format!(
                "{}.reduce((total, value) => total + value, 0)",
                render_expr(other)
            ),
        },
        Expr::Count { expr: inner, .. } => format!("{}.length", render_expr(inner)),
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
