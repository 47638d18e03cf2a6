// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::validate::{Diagnostic, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Machine-readable diagnostic report, stable field order, pretty-printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineReport {
    pub diagnostics: Vec<MachineDiagnostic>,
    pub summary: MachineSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineDiagnostic {
    pub code: String,
    pub severity: String,
    pub message: String,
    pub location: Option<MachineLocation>,
    pub labels: Vec<MachineLabel>,
    pub suggestions: Vec<MachineSuggestion>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineLabel {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineSuggestion {
    pub message: String,
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MachineSummary {
    pub error_count: usize,
    pub warning_count: usize,
}

impl MachineReport {
    pub fn from_diagnostics(diagnostics: &[Diagnostic], source_name: &str) -> Self {
        let converted = diagnostics
            .iter()
            .map(|d| convert(d, source_name))
            .collect();
        Self {
            diagnostics: converted,
            summary: MachineSummary {
                error_count: diagnostics
                    .iter()
                    .filter(|d| d.severity() == Severity::Error)
                    .count(),
                warning_count: diagnostics
                    .iter()
                    .filter(|d| d.severity() == Severity::Warning)
                    .count(),
            },
        }
    }
}

fn convert(diagnostic: &Diagnostic, source_name: &str) -> MachineDiagnostic {
    let location = diagnostic
        .primary_span()
        .filter(|span| span.is_located())
        .map(|span| MachineLocation {
            file: source_name.to_owned(),
            line: span.line(),
            column: span.column(),
            length: span.len(),
        });

    MachineDiagnostic {
        code: diagnostic.code().to_owned(),
        severity: diagnostic.severity().as_str().to_owned(),
        message: diagnostic.message().to_owned(),
        location,
        labels: diagnostic
            .labels()
            .iter()
            .map(|label| MachineLabel {
                start: label.span().start(),
                end: label.span().end(),
                line: label.span().line(),
                column: label.span().column(),
                message: label.message().to_owned(),
            })
            .collect(),
        suggestions: diagnostic
            .suggestions()
            .iter()
            .map(|suggestion| MachineSuggestion {
                message: suggestion.message().to_owned(),
                replacement: suggestion.replacement().map(str::to_owned),
            })
            .collect(),
        notes: diagnostic.notes().to_vec(),
    }
}

pub(super) fn render(diagnostics: &[Diagnostic], source_name: &str) -> String {
    let report = MachineReport::from_diagnostics(diagnostics, source_name);
    // Plain data with string keys, serialization cannot fail.
    serde_json::to_string_pretty(&report).expect("diagnostic report serializes")
}
