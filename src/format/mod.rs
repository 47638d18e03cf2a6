// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Target-language backends over the IR, with capability negotiation.
//!
//! A backend declares which IR item kinds it renders natively; before
//! rendering, items outside that set are lowered to a documented degraded
//! form. Lowering copies, the IR itself is never mutated.

pub mod ident;
mod kotlin;
pub mod mermaid;
mod rust;
mod typescript;

pub use kotlin::Kotlin;
pub use rust::Rust;
pub use typescript::TypeScript;

use crate::ir::{self, BuildError, CodeItem, CodeUnit, FieldItem, StructItem, StructTag};
use crate::model::BoundedContext;
use crate::validate::ValidationResult;
use ident::to_snake_case;
use std::fmt;
use std::str::FromStr;

/// A supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Rust,
    TypeScript,
    Kotlin,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::TypeScript => "typescript",
            Self::Kotlin => "kotlin",
        }
    }

    pub fn all() -> [Target; 3] {
        [Self::Rust, Self::TypeScript, Self::Kotlin]
    }

    pub fn backend(self) -> Box<dyn Backend> {
        match self {
            Self::Rust => Box::new(Rust),
            Self::TypeScript => Box::new(TypeScript),
            Self::Kotlin => Box::new(Kotlin),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTargetError;

impl fmt::Display for ParseTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown target language")
    }
}

impl std::error::Error for ParseTargetError {}

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rust" | "rs" => Ok(Self::Rust),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            _ => Err(ParseTargetError),
        }
    }
}

/// Per-run backend options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Package or namespace to emit into, for targets that have one.
    pub namespace: Option<String>,
    /// Emit doc comments and the generated-file header.
    pub include_comments: bool,
    /// Render structs as structural interfaces where the target offers them.
    pub emit_interfaces: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            include_comments: true,
            emit_interfaces: false,
        }
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
    pub language: Target,
}

/// Kind of an IR item for capability negotiation. A tagged enum is its own
/// kind; plenty of targets have plain enums but no discriminated unions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Struct,
    Enum,
    TaggedUnion,
    Function,
    Interface,
    Module,
}

impl ItemKind {
    pub fn of(item: &CodeItem) -> Self {
        match item {
            CodeItem::Struct(_) => Self::Struct,
            CodeItem::Enum(e) if e.tagged => Self::TaggedUnion,
            CodeItem::Enum(_) => Self::Enum,
            CodeItem::Function(_) => Self::Function,
            CodeItem::Interface(_) => Self::Interface,
            CodeItem::Module(_) => Self::Module,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::TaggedUnion => "tagged union",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Module => "module",
        };
        f.write_str(word)
    }
}

/// Rendering failure of a single target. Distinct from diagnostics: the
/// model is fine, the backend cannot express it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Unsupported { target: Target, kind: ItemKind },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { target, kind } => {
                write!(f, "target '{target}' cannot render {kind} items")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// A code generation backend for one target language.
pub trait Backend {
    fn target(&self) -> Target;

    fn file_extension(&self) -> &'static str;

    /// Item kinds this backend renders natively. Unsupported kinds are
    /// lowered before `render_unit` sees them.
    fn supports(&self, kind: ItemKind) -> bool;

    fn render_unit(&self, unit: &CodeUnit, config: &BackendConfig) -> Result<String, RenderError>;
}

/// Rewrites items the backend cannot render into forms it can.
///
/// Tagged enums become a plain enum plus a sibling `<Name>Payload` struct
/// with one optional field per payload-carrying variant. Modules flatten
/// into their items with the root struct renamed to the module (aggregate)
/// name, so the flattened root cannot collide with the standalone entity.
pub fn lower_unsupported(unit: &CodeUnit, backend: &dyn Backend) -> CodeUnit {
    let mut items = Vec::new();
    for item in &unit.items {
        lower_item(item.clone(), backend, &mut items);
    }
    CodeUnit {
        name: unit.name.clone(),
        imports: unit.imports.clone(),
        items,
    }
}

fn lower_item(item: CodeItem, backend: &dyn Backend, out: &mut Vec<CodeItem>) {
    match item {
        CodeItem::Enum(e) if e.tagged && !backend.supports(ItemKind::TaggedUnion) => {
            let payload_fields: Vec<FieldItem> = e
                .variants
                .iter()
                .filter_map(|variant| {
                    variant.payload.as_ref().map(|payload| {
                        FieldItem::optional(to_snake_case(&variant.name), payload.clone())
                    })
                })
                .collect();
            let mut plain = e;
            plain.tagged = false;
            for variant in &mut plain.variants {
                variant.payload = None;
            }
            let payload_name = format!("{}Payload", plain.name);
            out.push(CodeItem::Enum(plain));
            out.push(CodeItem::Struct(StructItem {
                name: payload_name,
                tag: StructTag::ValueObject,
                fields: payload_fields,
            }));
        }
        CodeItem::Module(module) if !backend.supports(ItemKind::Module) => {
            for inner in module.items {
                match inner {
                    CodeItem::Struct(mut s) if matches!(s.tag, StructTag::AggregateRoot) => {
                        s.name = module.name.clone();
                        out.push(CodeItem::Struct(s));
                    }
                    CodeItem::Function(mut f) => {
                        f.owner = module.name.clone();
                        out.push(CodeItem::Function(f));
                    }
                    other => lower_item(other, backend, out),
                }
            }
        }
        CodeItem::Module(module) => {
            let mut inner = Vec::new();
            for item in module.items {
                lower_item(item, backend, &mut inner);
            }
            out.push(CodeItem::Module(ir::ModuleItem {
                name: module.name,
                docs: module.docs,
                items: inner,
            }));
        }
        other => out.push(other),
    }
}

/// Renders one context for one target.
pub fn generate(
    context: &BoundedContext,
    target: Target,
    config: &BackendConfig,
) -> Result<GeneratedFile, RenderError> {
    render_unit(&ir::build(context), target, config)
}

/// Renders one context for several targets. A target that cannot express
/// the unit fails alone; the others still produce their files.
pub fn generate_all(
    context: &BoundedContext,
    targets: &[Target],
    config: &BackendConfig,
) -> Vec<Result<GeneratedFile, RenderError>> {
    let unit = ir::build(context);
    targets
        .iter()
        .map(|&target| render_unit(&unit, target, config))
        .collect()
}

/// Failure of gated generation: either validation blocked it or a backend
/// could not render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    Blocked(BuildError),
    Render(RenderError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocked(err) => err.fmt(f),
            Self::Render(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Blocked(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

/// The gated entry point: renders only when validation passed.
pub fn generate_checked(
    context: &BoundedContext,
    result: &ValidationResult,
    target: Target,
    config: &BackendConfig,
) -> Result<GeneratedFile, GenerateError> {
    let unit = ir::build_checked(context, result).map_err(GenerateError::Blocked)?;
    render_unit(&unit, target, config).map_err(GenerateError::Render)
}

fn render_unit(
    unit: &CodeUnit,
    target: Target,
    config: &BackendConfig,
) -> Result<GeneratedFile, RenderError> {
    let backend = target.backend();
    let lowered = lower_unsupported(unit, backend.as_ref());
    let content = backend.render_unit(&lowered, config)?;
    Ok(GeneratedFile {
        filename: format!("{}.{}", to_snake_case(&unit.name), backend.file_extension()),
        content,
        language: target,
    })
}
