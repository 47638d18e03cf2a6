// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semantic validation of contexts and models into located diagnostics.

pub mod codes;
mod diagnostic;
mod model_passes;
mod passes;


pub use diagnostic::{Diagnostic, Label, Severity, Suggestion, ValidationResult};

use crate::model::{BoundedContext, DomainModel};
use crate::query::NameIndex;
use std::collections::HashMap;

/// Occurrences of the same unresolved name within one pass needed before
/// they fold into a single grouped diagnostic.
const GROUP_THRESHOLD: usize = 3;

/// Validates one bounded context. Passes run in a fixed order so output is
/// deterministic for a given model.
pub fn validate_context(context: &BoundedContext) -> ValidationResult {
    let index = NameIndex::for_context(context);
    let mut result = ValidationResult::new();

    run_pass(&mut result, |out| passes::duplicates(context, &index, out));
    run_pass(&mut result, |out| passes::morphisms(context, &index, out));
    run_pass(&mut result, |out| passes::field_types(context, &index, out));
    run_pass(&mut result, |out| passes::enums(context, &index, out));
    run_pass(&mut result, |out| passes::aggregates(context, &index, out));
    run_pass(&mut result, |out| passes::equations(context, &index, out));
    run_pass(&mut result, |out| passes::aggregate_warnings(context, &index, out));
    run_pass(&mut result, |out| passes::value_object_warnings(context, &index, out));

    result
}

/// Validates a whole model: every context, then the maps between them, then
/// model-level structure.
pub fn validate_model(model: &DomainModel) -> ValidationResult {
    let mut result = ValidationResult::new();
    for context in model.contexts() {
        result.extend(validate_context(context).into_diagnostics());
    }
    run_pass(&mut result, |out| model_passes::context_maps(model, out));
    run_pass(&mut result, |out| model_passes::model_level(model, out));
    result
}

fn run_pass(result: &mut ValidationResult, pass: impl FnOnce(&mut Vec<Diagnostic>)) {
    let mut out = Vec::new();
    pass(&mut out);
    result.extend(group_repeats(out));
}

/// Folds repeats of the same unresolved name within one pass into a single
/// diagnostic carrying one label per occurrence. Below the threshold the
/// diagnostics stay separate; the grouped diagnostic sits where the first
/// occurrence sat.
fn group_repeats(diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for diagnostic in &diagnostics {
        if let Some(key) = diagnostic.group_key() {
            *counts.entry(key.to_owned()).or_insert(0) += 1;
        }
    }
    if counts.values().all(|&n| n < GROUP_THRESHOLD) {
        return diagnostics;
    }

    let mut merged_at: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<Diagnostic> = Vec::new();
    for diagnostic in diagnostics {
        let key = match diagnostic.group_key() {
            Some(key) if counts[key] >= GROUP_THRESHOLD => key.to_owned(),
            _ => {
                out.push(diagnostic);
                continue;
            }
        };
        if let Some(&at) = merged_at.get(&key) {
            out[at].absorb_labels_of(diagnostic);
        } else {
            let count = counts[&key];
            let mut grouped = diagnostic;
            grouped.set_message(format!("unresolved name '{key}' ({count} occurrences)"));
            merged_at.insert(key, out.len());
            out.push(grouped);
        }
    }
    out
}
