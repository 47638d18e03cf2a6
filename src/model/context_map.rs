// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Context maps: typed relationships between bounded contexts.

use super::ids::{ContextId, MapId, ObjectId};
use super::span::SourceSpan;
use std::fmt;
use std::str::FromStr;

/// Strategic integration pattern of a context map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationPattern {
    Partnership,
    SharedKernel,
    CustomerSupplier,
    Conformist,
    AntiCorruptionLayer,
    OpenHostService,
    PublishedLanguage,
    SeparateWays,
}

impl IntegrationPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Partnership => "partnership",
            Self::SharedKernel => "shared-kernel",
            Self::CustomerSupplier => "customer-supplier",
            Self::Conformist => "conformist",
            Self::AntiCorruptionLayer => "anti-corruption-layer",
            Self::OpenHostService => "open-host-service",
            Self::PublishedLanguage => "published-language",
            Self::SeparateWays => "separate-ways",
        }
    }

    /// Whether the map's source context is the upstream (providing) side.
    ///
    /// Only these patterns induce a direction; they are the edges of the
    /// dependency graph the cycle check walks.
    pub fn source_is_upstream(self) -> bool {
        matches!(
            self,
            Self::CustomerSupplier | Self::Conformist | Self::AntiCorruptionLayer | Self::OpenHostService
        )
    }

    /// Whether the relationship reads the same from both sides.
    pub fn is_symmetric(self) -> bool {
        matches!(self, Self::Partnership | Self::SharedKernel)
    }

    /// Whether the downstream side translates the upstream model.
    pub fn requires_translation(self) -> bool {
        matches!(self, Self::AntiCorruptionLayer)
    }

    /// Whether the two contexts integrate at all.
    pub fn has_integration(self) -> bool {
        !matches!(self, Self::SeparateWays)
    }

    pub fn directionality(self) -> &'static str {
        match self {
            Self::Partnership => "bidirectional",
            Self::SharedKernel => "bidirectional (shared)",
            Self::CustomerSupplier => "upstream -> downstream",
            Self::Conformist => "upstream -> downstream",
            Self::AntiCorruptionLayer => "upstream -> downstream (translated)",
            Self::OpenHostService => "upstream -> downstream (via services)",
            Self::PublishedLanguage => "upstream -> downstream (via shared language)",
            Self::SeparateWays => "none",
        }
    }
}

impl fmt::Display for IntegrationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegrationPatternError;

impl fmt::Display for ParseIntegrationPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid integration pattern")
    }
}

impl std::error::Error for ParseIntegrationPatternError {}

impl FromStr for IntegrationPattern {
    type Err = ParseIntegrationPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partnership" => Ok(Self::Partnership),
            "shared-kernel" => Ok(Self::SharedKernel),
            "customer-supplier" => Ok(Self::CustomerSupplier),
            "conformist" => Ok(Self::Conformist),
            "anti-corruption-layer" | "acl" => Ok(Self::AntiCorruptionLayer),
            "open-host-service" => Ok(Self::OpenHostService),
            "published-language" => Ok(Self::PublishedLanguage),
            "separate-ways" => Ok(Self::SeparateWays),
            _ => Err(ParseIntegrationPatternError),
        }
    }
}

/// One object-to-object correspondence across a context map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMapping {
    source: ObjectId,
    target: ObjectId,
    description: Option<String>,
    span: SourceSpan,
}

impl ObjectMapping {
    pub fn new(source: ObjectId, target: ObjectId) -> Self {
        Self {
            source,
            target,
            description: None,
            span: SourceSpan::default(),
        }
    }

    pub fn new_with(
        source: ObjectId,
        target: ObjectId,
        description: Option<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            source,
            target,
            description,
            span,
        }
    }

    pub fn source(&self) -> &ObjectId {
        &self.source
    }

    pub fn target(&self) -> &ObjectId {
        &self.target
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

/// A relationship between two bounded contexts, owned by the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMap {
    id: MapId,
    source_context: ContextId,
    target_context: ContextId,
    pattern: IntegrationPattern,
    object_mappings: Vec<ObjectMapping>,
    span: SourceSpan,
}

impl ContextMap {
    pub fn new(
        id: MapId,
        source_context: ContextId,
        target_context: ContextId,
        pattern: IntegrationPattern,
    ) -> Self {
        Self {
            id,
            source_context,
            target_context,
            pattern,
            object_mappings: Vec::new(),
            span: SourceSpan::default(),
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    pub fn id(&self) -> &MapId {
        &self.id
    }

    pub fn source_context(&self) -> &ContextId {
        &self.source_context
    }

    pub fn target_context(&self) -> &ContextId {
        &self.target_context
    }

    pub fn pattern(&self) -> IntegrationPattern {
        self.pattern
    }

    pub fn object_mappings(&self) -> &[ObjectMapping] {
        &self.object_mappings
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }

    pub fn map_object(&mut self, source: ObjectId, target: ObjectId) {
        self.object_mappings.push(ObjectMapping::new(source, target));
    }

    pub fn add_object_mapping(&mut self, mapping: ObjectMapping) {
        self.object_mappings.push(mapping);
    }

    /// Mapped counterpart of a source-context object, if declared.
    pub fn mapped_target(&self, source: &str) -> Option<&ObjectId> {
        self.object_mappings
            .iter()
            .find(|m| m.source().as_str() == source)
            .map(ObjectMapping::target)
    }

    pub fn references(&self, context: &ContextId) -> bool {
        &self.source_context == context || &self.target_context == context
    }
}
