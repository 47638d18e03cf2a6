// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Language-neutral intermediate representation between a validated context
//! and the target-language backends.
//!
//! Types and fields keep the model's names and declaration order; backends
//! own casing and the mapping of primitive names to native types. The IR is
//! plain data, built once, never mutated by backends (lowering copies).

mod builder;

pub use builder::{build, build_checked, BuildError};

use crate::model::{CompareOp, Expr};

/// Everything generated from one bounded context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeUnit {
    /// Context name, also the stem of the generated file name.
    pub name: String,
    /// Non-basic primitive names used anywhere in the unit, in first-use
    /// order. Backends that need import lines derive them from this list.
    pub imports: Vec<String>,
    pub items: Vec<CodeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeItem {
    Struct(StructItem),
    Enum(EnumItem),
    Function(FunctionItem),
    Interface(InterfaceItem),
    Module(ModuleItem),
}

/// Role of a struct in the domain, drives identity and equality semantics
/// in the generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructTag {
    Entity { id_field: String },
    ValueObject,
    AggregateRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructItem {
    pub name: String,
    pub tag: StructTag,
    pub fields: Vec<FieldItem>,
}

/// A field carrying the *domain* type name; backends map it to a native
/// type. `collection` and `optional` never hold at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldItem {
    pub name: String,
    pub type_name: String,
    pub optional: bool,
    pub collection: bool,
}

impl FieldItem {
    pub fn plain(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            collection: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::plain(name, type_name)
        }
    }

    pub fn collection(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            collection: true,
            ..Self::plain(name, type_name)
        }
    }
}

/// `tagged` is true when at least one variant carries a payload; a tagged
/// enum is a discriminated union and subject to capability lowering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    pub variants: Vec<VariantItem>,
    pub tagged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantItem {
    pub name: String,
    pub payload: Option<String>,
}

/// A generated operation. The kind is semantic; each backend renders it in
/// its own idiom rather than from a shared template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionItem {
    pub name: String,
    /// Type the function belongs to (method receiver or extension target).
    pub owner: String,
    pub kind: FunctionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    AddMember {
        member_type: String,
        field: String,
    },
    RemoveMember {
        member_type: String,
        field: String,
    },
    InvariantCheck {
        invariant: String,
        op: CompareOp,
        lhs: Expr,
        rhs: Expr,
    },
}

/// Structural contract without behavior; only emitted by backends that
/// prefer interfaces over classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceItem {
    pub name: String,
    pub fields: Vec<FieldItem>,
}

/// An aggregate lowered to a namespace: root struct, member operations,
/// invariant checks. Doc lines carry free-text rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleItem {
    pub name: String,
    pub docs: Vec<String>,
    pub items: Vec<CodeItem>,
}
