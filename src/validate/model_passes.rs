// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model-level validation: context maps and whole-model structure.

use super::codes;
use super::diagnostic::{Diagnostic, Suggestion};
use crate::model::{ContextMap, DomainModel};
use crate::query::{available_options, nearest_of, NameIndex};
use std::collections::HashMap;

const AVAILABLE_LIMIT: usize = 5;

fn context_help(diagnostic: Diagnostic, name: &str, model: &DomainModel) -> Diagnostic {
    let candidates = || model.contexts().iter().map(|c| c.id().as_str());
    let diagnostic = match nearest_of(name, candidates()) {
        Some(hit) => diagnostic
            .with_suggestion(Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit)),
        None => diagnostic.with_note(available_options(candidates(), AVAILABLE_LIMIT)),
    };
    diagnostic.with_group_key(name)
}

fn endpoint_help(diagnostic: Diagnostic, name: &str, index: &NameIndex) -> Diagnostic {
    let diagnostic = match index.nearest(name) {
        Some(hit) => diagnostic
            .with_suggestion(Suggestion::new(format!("did you mean '{hit}'?")).with_replacement(hit)),
        None => diagnostic.with_note(index.available(AVAILABLE_LIMIT)),
    };
    diagnostic.with_group_key(name)
}

pub(super) fn context_maps(model: &DomainModel, out: &mut Vec<Diagnostic>) {
    for map in model.context_maps() {
        let source = model.context(map.source_context().as_str());
        let target = model.context(map.target_context().as_str());

        if source.is_none() {
            let diagnostic = Diagnostic::error(
                codes::MAP_SOURCE_CONTEXT_UNKNOWN,
                format!(
                    "unknown source context '{}' in context map '{}'",
                    map.source_context(),
                    map.id()
                ),
            )
            .with_label(map.span(), "not a declared context");
            out.push(context_help(diagnostic, map.source_context().as_str(), model));
        }
        if target.is_none() {
            let diagnostic = Diagnostic::error(
                codes::MAP_TARGET_CONTEXT_UNKNOWN,
                format!(
                    "unknown target context '{}' in context map '{}'",
                    map.target_context(),
                    map.id()
                ),
            )
            .with_label(map.span(), "not a declared context");
            out.push(context_help(diagnostic, map.target_context().as_str(), model));
        }
        if map.source_context() == map.target_context() {
            out.push(
                Diagnostic::error(
                    codes::MAP_RELATES_CONTEXT_TO_ITSELF,
                    format!(
                        "context map '{}' relates context '{}' to itself",
                        map.id(),
                        map.source_context()
                    ),
                )
                .with_label(map.span(), "source and target must differ"),
            );
        }

        check_mapping_endpoints(map, source.map(NameIndex::for_context), true, out);
        check_mapping_endpoints(map, target.map(NameIndex::for_context), false, out);
    }
}

/// Endpoint checks degrade per side: when a map's context is unknown the
/// endpoints on that side are skipped, the missing context already errored.
fn check_mapping_endpoints(
    map: &ContextMap,
    index: Option<NameIndex>,
    source_side: bool,
    out: &mut Vec<Diagnostic>,
) {
    let Some(index) = index else {
        return;
    };
    let (code, side_word, context_id) = if source_side {
        (codes::MAPPING_UNRESOLVED_IN_SOURCE, "source", map.source_context())
    } else {
        (codes::MAPPING_UNRESOLVED_IN_TARGET, "target", map.target_context())
    };
    for mapping in map.object_mappings() {
        let endpoint = if source_side { mapping.source() } else { mapping.target() };
        if index.contains(endpoint.as_str()) {
            continue;
        }
        let diagnostic = Diagnostic::error(
            code,
            format!(
                "unknown object '{endpoint}' in {side_word} context '{context_id}' of map '{}'",
                map.id()
            ),
        )
        .with_label(mapping.span(), "not declared in that context");
        out.push(endpoint_help(diagnostic, endpoint.as_str(), &index));
    }
}

pub(super) fn model_level(model: &DomainModel, out: &mut Vec<Diagnostic>) {
    if model.is_empty() {
        out.push(Diagnostic::error(
            codes::MODEL_HAS_NO_CONTEXTS,
            "model declares no bounded contexts",
        ));
        return;
    }

    // Only directional patterns induce dependency edges; symmetric patterns
    // and separate-ways cannot participate in a cycle.
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
    for map in model.context_maps() {
        if !map.pattern().source_is_upstream() {
            continue;
        }
        let source = map.source_context().as_str();
        let target = map.target_context().as_str();
        if model.context(source).is_none() || model.context(target).is_none() {
            continue;
        }
        edges.entry(source).or_default().push(target);
    }

    let mut colors: HashMap<&str, Color> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();
    for context in model.contexts() {
        if colors.get(context.id().as_str()).is_none() {
            visit(context.id().as_str(), &edges, &mut colors, &mut stack, out);
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Visiting,
    Done,
}

fn visit<'a>(
    node: &'a str,
    edges: &HashMap<&'a str, Vec<&'a str>>,
    colors: &mut HashMap<&'a str, Color>,
    stack: &mut Vec<&'a str>,
    out: &mut Vec<Diagnostic>,
) {
    colors.insert(node, Color::Visiting);
    stack.push(node);
    for &next in edges.get(node).into_iter().flatten() {
        match colors.get(next) {
            None => visit(next, edges, colors, stack, out),
            Some(Color::Visiting) => {
                let start = stack.iter().position(|&n| n == next).unwrap_or(0);
                let mut path: Vec<&str> = stack[start..].to_vec();
                path.push(next);
                out.push(Diagnostic::error(
                    codes::CONTEXT_MAP_CYCLE,
                    format!(
                        "context maps form a dependency cycle: {}",
                        path.join(" -> ")
                    ),
                ));
            }
            Some(Color::Done) => {}
        }
    }
    stack.pop();
    colors.insert(node, Color::Done);
}
