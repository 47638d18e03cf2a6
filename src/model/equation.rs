// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Path equations: named comparisons between expression paths over a context.

use super::ids::ObjectId;
use super::span::SourceSpan;
use std::fmt;

/// Literal operand in an equation.
///
/// Float literals keep their source lexeme so regenerated output stays
/// byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    Float(String),
    Bool(bool),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(lexeme) => f.write_str(lexeme),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "\"{v}\""),
        }
    }
}

/// Expression tree of an equation side.
///
/// Names are plain references into the owning context; `Access` chains walk
/// through morphisms or fields. Validation is referential only, arithmetic
/// well-formedness is left to the generated target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name {
        name: String,
        span: SourceSpan,
    },
    Access {
        base: Box<Expr>,
        name: String,
        span: SourceSpan,
    },
    Sum {
        expr: Box<Expr>,
        span: SourceSpan,
    },
    Count {
        expr: Box<Expr>,
        span: SourceSpan,
    },
    Literal {
        value: Literal,
        span: SourceSpan,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            span: SourceSpan::default(),
        }
    }

    pub fn access(base: Expr, name: impl Into<String>) -> Self {
        Self::Access {
            base: Box::new(base),
            name: name.into(),
            span: SourceSpan::default(),
        }
    }

    pub fn sum(expr: Expr) -> Self {
        Self::Sum {
            expr: Box::new(expr),
            span: SourceSpan::default(),
        }
    }

    pub fn count(expr: Expr) -> Self {
        Self::Count {
            expr: Box::new(expr),
            span: SourceSpan::default(),
        }
    }

    pub fn literal(value: Literal) -> Self {
        Self::Literal {
            value,
            span: SourceSpan::default(),
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Name { span, .. }
            | Self::Access { span, .. }
            | Self::Sum { span, .. }
            | Self::Count { span, .. }
            | Self::Literal { span, .. } => *span,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { name, .. } => f.write_str(name),
            Self::Access { base, name, .. } => write!(f, "{base}.{name}"),
            Self::Sum { expr, .. } => write!(f, "sum({expr})"),
            Self::Count { expr, .. } => write!(f, "count({expr})"),
            Self::Literal { value, .. } => value.fmt(f),
        }
    }
}

/// Comparison operator of a path equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named path equation.
///
/// An unscoped equation resolves names against the whole context. A scoped
/// equation resolves against the fields and outgoing morphisms of its scope
/// object first; aggregates attach scoped equations as invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEquation {
    name: String,
    scope: Option<ObjectId>,
    op: CompareOp,
    lhs: Expr,
    rhs: Expr,
    span: SourceSpan,
}

impl PathEquation {
    pub fn new(name: impl Into<String>, op: CompareOp, lhs: Expr, rhs: Expr) -> Self {
        Self {
            name: name.into(),
            scope: None,
            op,
            lhs,
            rhs,
            span: SourceSpan::default(),
        }
    }

    pub fn new_scoped(
        name: impl Into<String>,
        scope: ObjectId,
        op: CompareOp,
        lhs: Expr,
        rhs: Expr,
    ) -> Self {
        Self {
            name: name.into(),
            scope: Some(scope),
            op,
            lhs,
            rhs,
            span: SourceSpan::default(),
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Option<&ObjectId> {
        self.scope.as_ref()
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

impl fmt::Display for PathEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} {}", self.name, self.lhs, self.op, self.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompareOp, Expr, Literal, PathEquation};
    use crate::model::ObjectId;

    #[test]
    fn expressions_display_as_paths() {
        let expr = Expr::sum(Expr::access(Expr::name("items"), "subtotal"));
        assert_eq!(expr.to_string(), "sum(items.subtotal)");

        let expr = Expr::count(Expr::name("items"));
        assert_eq!(expr.to_string(), "count(items)");
    }

    #[test]
    fn equations_display_with_operator() {
        let eq = PathEquation::new(
            "total_matches",
            CompareOp::Eq,
            Expr::name("total"),
            Expr::sum(Expr::access(Expr::name("items"), "subtotal")),
        );
        assert_eq!(eq.to_string(), "total_matches: total == sum(items.subtotal)");
        assert!(eq.scope().is_none());
    }

    #[test]
    fn scoped_equations_carry_their_scope() {
        let scope = ObjectId::new("Order").expect("object id");
        let eq = PathEquation::new_scoped(
            "non_negative",
            scope.clone(),
            CompareOp::Ge,
            Expr::name("total"),
            Expr::literal(Literal::Float("0.0".into())),
        );
        assert_eq!(eq.scope(), Some(&scope));
        assert_eq!(eq.to_string(), "non_negative: total >= 0.0");
    }

    #[test]
    fn float_literals_keep_their_lexeme() {
        assert_eq!(Literal::Float("0.50".into()).to_string(), "0.50");
        assert_eq!(Literal::Int(42).to_string(), "42");
        assert_eq!(Literal::Str("paid".into()).to_string(), "\"paid\"");
    }
}
