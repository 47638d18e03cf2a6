// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory domain model: contexts, objects, morphisms, equations, maps.

pub mod context;
pub mod context_map;
pub mod domain;
pub mod equation;
pub mod ids;
pub mod object_ref;
pub mod span;

pub use context::{
    is_primitive, BoundedContext, Cardinality, Field, Invariant, Morphism, Object, ObjectKind,
    ParseCardinalityError, Variant, PRIMITIVES,
};
pub use context_map::{
    ContextMap, IntegrationPattern, ObjectMapping, ParseIntegrationPatternError,
};
pub use domain::DomainModel;
pub use equation::{CompareOp, Expr, Literal, PathEquation};
pub use ids::{ContextId, Id, IdError, MapId, MorphismId, ObjectId};
pub use object_ref::{ObjectRef, ParseObjectRefError};
pub use span::SourceSpan;
