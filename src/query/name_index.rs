// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{BoundedContext, ContextId, ObjectId, ObjectRef};
use std::collections::HashMap;

/// Maximum edit distance ever accepted for a fuzzy suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Name lookup table for one bounded context, built once per validation or
/// generation run.
///
/// Declaration order is preserved: `all_names` lists each name at its first
/// occurrence, duplicates are only counted. `resolve` therefore always picks
/// the first declaration, which is also what codegen emits for a name that
/// was declared twice.
#[derive(Debug, Clone)]
pub struct NameIndex {
    context_id: ContextId,
    names: Vec<ObjectId>,
    counts: HashMap<ObjectId, usize>,
}

impl NameIndex {
    pub fn for_context(context: &BoundedContext) -> Self {
        let mut names = Vec::with_capacity(context.objects().len());
        let mut counts: HashMap<ObjectId, usize> = HashMap::new();
        for object in context.objects() {
            let seen = counts.entry(object.id().clone()).or_insert(0);
            if *seen == 0 {
                names.push(object.id().clone());
            }
            *seen += 1;
        }
        Self {
            context_id: context.id().clone(),
            names,
            counts,
        }
    }

    pub fn context_id(&self) -> &ContextId {
        &self.context_id
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Canonical reference for a declared name (first declaration wins).
    pub fn resolve(&self, name: &str) -> Option<ObjectRef> {
        let id = self.counts.get_key_value(name)?.0.clone();
        Some(ObjectRef::new(self.context_id.clone(), id))
    }

    /// Declared names in first-occurrence order, duplicates listed once.
    pub fn all_names(&self) -> &[ObjectId] {
        &self.names
    }

    /// How often `name` was declared. Zero for unknown names.
    pub fn duplicates_of(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Closest declared name within the suggestion threshold, if any.
    pub fn nearest(&self, name: &str) -> Option<&str> {
        nearest_of(name, self.names.iter().map(ObjectId::as_str))
    }

    /// Note text listing what could have been referenced instead.
    pub fn available(&self, max_show: usize) -> String {
        available_options(self.names.iter().map(ObjectId::as_str), max_show)
    }
}

/// Closest candidate to `name` by Levenshtein distance, ties broken by
/// candidate order. A candidate is accepted only when its distance is at
/// most `min(3, ceil(0.3 * len(name)))`; an exact match is never returned
/// as a suggestion because a resolvable name needs none.
pub fn nearest_of<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let len = name.chars().count();
    let threshold = MAX_SUGGESTION_DISTANCE.min((3 * len + 9) / 10);

    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let dist = rapidfuzz::distance::levenshtein::distance(name.chars(), candidate.chars());
        if dist == 0 || dist > threshold {
            continue;
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Renders "available: A, B, C, ... (N more)" with at most `max_show` names
/// spelled out.
pub fn available_options<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    max_show: usize,
) -> String {
    let all: Vec<&str> = candidates.into_iter().collect();
    if all.is_empty() {
        return "no options available".to_owned();
    }
    if all.len() <= max_show {
        format!("available: {}", all.join(", "))
    } else {
        format!(
            "available: {}, ... ({} more)",
            all[..max_show].join(", "),
            all.len() - max_show
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{available_options, nearest_of, NameIndex};
    use crate::model::{BoundedContext, ContextId, ObjectId};
    use rstest::rstest;

    fn commerce() -> BoundedContext {
        let mut ctx = BoundedContext::new(ContextId::new("Commerce").expect("context id"));
        for name in ["Customer", "Order", "LineItem", "Order"] {
            ctx.add_entity(ObjectId::new(name).expect("object id"), vec![]);
        }
        ctx
    }

    #[test]
    fn index_preserves_first_occurrence_order() {
        let index = NameIndex::for_context(&commerce());
        let names: Vec<_> = index.all_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Customer", "Order", "LineItem"]);
    }

    #[test]
    fn resolve_yields_canonical_refs() {
        let index = NameIndex::for_context(&commerce());
        let r = index.resolve("Order").expect("resolve");
        assert_eq!(r.to_string(), "c:Commerce/Order");
        assert!(index.resolve("Invoice").is_none());
        assert!(index.contains("LineItem"));
    }

    #[test]
    fn duplicates_are_counted_not_repeated() {
        let index = NameIndex::for_context(&commerce());
        assert_eq!(index.duplicates_of("Order"), 2);
        assert_eq!(index.duplicates_of("Customer"), 1);
        assert_eq!(index.duplicates_of("Invoice"), 0);
    }

    #[rstest]
    #[case("Custommer", Some("Customer"))] // distance 1
    #[case("Ordr", Some("Order"))] // distance 1, short name threshold 1
    #[case("Oder", Some("Order"))] // distance 1
    #[case("Customer", None)] // exact match is not a suggestion
    #[case("Receipt", None)] // nothing close enough
    #[case("Xy", None)] // threshold 1, nothing at distance 1
    fn nearest_applies_distance_threshold(#[case] name: &str, #[case] expected: Option<&str>) {
        let index = NameIndex::for_context(&commerce());
        assert_eq!(index.nearest(name), expected);
    }

    #[test]
    fn nearest_breaks_ties_by_candidate_order() {
        let candidates = ["Cart", "Card"];
        assert_eq!(nearest_of("Carx", candidates), Some("Cart"));

        let candidates = ["Card", "Cart"];
        assert_eq!(nearest_of("Carx", candidates), Some("Card"));
    }

    #[test]
    fn available_truncates_long_lists() {
        assert_eq!(available_options([], 5), "no options available");
        assert_eq!(
            available_options(["Customer", "Order"], 5),
            "available: Customer, Order"
        );
        assert_eq!(
            available_options(["A", "B", "C", "D", "E"], 3),
            "available: A, B, C, ... (2 more)"
        );
    }
}
