// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mermaid `classDiagram` export for a bounded context.
//!
//! Diagrams are a textual output surface beside the code backends: one
//! class per object with a stereotype for its kind, one relation per
//! morphism carrying the morphism name and multiplicity, and containment
//! edges for aggregates. Export reads the model directly and is stable,
//! emitting objects and morphisms in declaration order.

use std::fmt;
use std::fmt::Write as _;

use crate::model::{BoundedContext, Cardinality, ObjectKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MermaidNameError {
    Empty,
    InvalidChar { ch: char },
}

impl fmt::Display for MermaidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("must not be empty"),
            Self::InvalidChar { ch } => write!(f, "contains invalid character: '{ch}'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MermaidExportError {
    InvalidClassName { name: String, reason: MermaidNameError },
    InvalidMemberName { class: String, name: String, reason: MermaidNameError },
    InvalidRelationName { name: String, reason: MermaidNameError },
}

impl fmt::Display for MermaidExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClassName { name, reason } => {
                write!(f, "cannot export class name '{name}': {reason}")
            }
            Self::InvalidMemberName { class, name, reason } => {
                write!(f, "cannot export member '{name}' of class '{class}': {reason}")
            }
            Self::InvalidRelationName { name, reason } => {
                write!(f, "cannot export relation name '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for MermaidExportError {}

// Mermaid identifiers are stricter than model ids, which admit any
// non-whitespace segment.
fn validate_mermaid_name(name: &str) -> Result<(), MermaidNameError> {
    if name.is_empty() {
        return Err(MermaidNameError::Empty);
    }
    if let Some(ch) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(MermaidNameError::InvalidChar { ch });
    }
    Ok(())
}

fn class_name(name: &str) -> Result<&str, MermaidExportError> {
    validate_mermaid_name(name).map_err(|reason| MermaidExportError::InvalidClassName {
        name: name.to_owned(),
        reason,
    })?;
    Ok(name)
}

fn member_name<'a>(class: &str, name: &'a str) -> Result<&'a str, MermaidExportError> {
    validate_mermaid_name(name).map_err(|reason| MermaidExportError::InvalidMemberName {
        class: class.to_owned(),
        name: name.to_owned(),
        reason,
    })?;
    Ok(name)
}

fn stereotype(kind: &ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Entity { .. } => "<<Entity>>",
        ObjectKind::ValueObject { .. } => "<<ValueObject>>",
        ObjectKind::Enum { .. } => "<<Enumeration>>",
        ObjectKind::Aggregate { .. } => "<<Aggregate>>",
    }
}

fn multiplicity(cardinality: Cardinality) -> &'static str {
    match cardinality {
        Cardinality::One => "",
        Cardinality::Optional => "\"0..1\" ",
        Cardinality::Many => "\"*\" ",
    }
}

/// Export one bounded context as a Mermaid `classDiagram` (`.mmd` body,
/// no surrounding code fence).
pub fn export_class_diagram(context: &BoundedContext) -> Result<String, MermaidExportError> {
    let mut out = String::new();
    out.push_str("classDiagram\n");
    let _ = writeln!(out, "    %% {}", context.id());
    out.push('\n');

    for object in context.objects() {
        let class = class_name(object.id().as_str())?;
        let _ = writeln!(out, "    class {class} {{");
        let _ = writeln!(out, "        {}", stereotype(object.kind()));
        match object.kind() {
            ObjectKind::Entity { fields } | ObjectKind::ValueObject { fields } => {
                for field in fields {
                    let type_name = member_name(class, field.type_name())?;
                    let name = member_name(class, field.name())?;
                    let marker = if field.optional() { "?" } else { "" };
                    let _ = writeln!(out, "        +{type_name}{marker} {name}");
                }
            }
            ObjectKind::Enum { variants } => {
                for variant in variants {
                    let name = member_name(class, variant.name())?;
                    match variant.payload() {
                        Some(payload) => {
                            let payload = member_name(class, payload)?;
                            let _ = writeln!(out, "        {name}({payload})");
                        }
                        None => {
                            let _ = writeln!(out, "        {name}");
                        }
                    }
                }
            }
            ObjectKind::Aggregate { .. } => {}
        }
        out.push_str("    }\n");
    }

    out.push('\n');

    for morphism in context.morphisms() {
        let source = class_name(morphism.source().as_str())?;
        let target = class_name(morphism.target().as_str())?;
        let name = morphism.id().as_str();
        validate_mermaid_name(name).map_err(|reason| MermaidExportError::InvalidRelationName {
            name: name.to_owned(),
            reason,
        })?;
        let _ = writeln!(
            out,
            "    {source} --> {}{target} : {name}",
            multiplicity(morphism.cardinality())
        );
    }

    for object in context.objects() {
        let ObjectKind::Aggregate { root, members, .. } = object.kind() else {
            continue;
        };
        let class = object.id().as_str();
        let _ = writeln!(out, "    {class} *-- {}", class_name(root.as_str())?);
        for member in members {
            if member == root {
                continue;
            }
            let _ = writeln!(out, "    {class} o-- {}", class_name(member.as_str())?);
        }
    }

    Ok(out)
}
