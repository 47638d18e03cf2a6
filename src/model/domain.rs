// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The domain model: all bounded contexts plus the maps between them.

use super::context::BoundedContext;
use super::context_map::ContextMap;
use super::ids::ContextId;
use super::object_ref::ObjectRef;

/// Root of a model. Contexts keep insertion order; context maps are owned
/// here rather than by either endpoint, so removing a context can retire
/// every map that mentions it in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainModel {
    contexts: Vec<BoundedContext>,
    context_maps: Vec<ContextMap>,
}

impl DomainModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contexts(&self) -> &[BoundedContext] {
        &self.contexts
    }

    pub fn context(&self, name: &str) -> Option<&BoundedContext> {
        self.contexts.iter().find(|c| c.id().as_str() == name)
    }

    pub fn add_context(&mut self, context: BoundedContext) {
        self.contexts.push(context);
    }

    /// Removes a context and every context map referencing it. Returns the
    /// removed context, if it existed.
    pub fn remove_context(&mut self, id: &ContextId) -> Option<BoundedContext> {
        let position = self.contexts.iter().position(|c| c.id() == id)?;
        let removed = self.contexts.remove(position);
        self.context_maps.retain(|m| !m.references(id));
        Some(removed)
    }

    pub fn context_maps(&self) -> &[ContextMap] {
        &self.context_maps
    }

    pub fn add_context_map(&mut self, map: ContextMap) {
        self.context_maps.push(map);
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Whether the canonical reference points at a declared object.
    pub fn object_exists(&self, object_ref: &ObjectRef) -> bool {
        self.context(object_ref.context_id().as_str())
            .and_then(|c| c.object(object_ref.object_id().as_str()))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::DomainModel;
    use crate::model::{
        BoundedContext, ContextId, ContextMap, IntegrationPattern, MapId, ObjectId, ObjectRef,
    };

    fn cid(name: &str) -> ContextId {
        ContextId::new(name).expect("context id")
    }

    fn model_with(names: &[&str]) -> DomainModel {
        let mut model = DomainModel::new();
        for name in names {
            model.add_context(BoundedContext::new(cid(name)));
        }
        model
    }

    #[test]
    fn context_lookup_by_name() {
        let model = model_with(&["Commerce", "Billing"]);
        assert!(model.context("Billing").is_some());
        assert!(model.context("Shipping").is_none());
        assert!(!model.is_empty());
    }

    #[test]
    fn remove_context_drops_dependent_maps() {
        let mut model = model_with(&["Commerce", "Billing", "Shipping"]);
        model.add_context_map(ContextMap::new(
            MapId::new("commerce-billing").expect("map id"),
            cid("Commerce"),
            cid("Billing"),
            IntegrationPattern::CustomerSupplier,
        ));
        model.add_context_map(ContextMap::new(
            MapId::new("billing-shipping").expect("map id"),
            cid("Billing"),
            cid("Shipping"),
            IntegrationPattern::Partnership,
        ));

        let removed = model.remove_context(&cid("Billing"));
        assert!(removed.is_some());
        assert!(model.context("Billing").is_none());
        assert!(model.context_maps().is_empty());

        assert!(model.remove_context(&cid("Billing")).is_none());
    }

    #[test]
    fn object_exists_resolves_through_contexts() {
        let mut model = DomainModel::new();
        let mut commerce = BoundedContext::new(cid("Commerce"));
        commerce.add_entity(ObjectId::new("Order").expect("object id"), vec![]);
        model.add_context(commerce);

        let hit: ObjectRef = "c:Commerce/Order".parse().expect("ref");
        let miss: ObjectRef = "c:Commerce/Invoice".parse().expect("ref");
        let wrong_context: ObjectRef = "c:Billing/Order".parse().expect("ref");

        assert!(model.object_exists(&hit));
        assert!(!model.object_exists(&miss));
        assert!(!model.object_exists(&wrong_context));
    }
}
