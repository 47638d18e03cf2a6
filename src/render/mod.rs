// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostic rendering: plain text for people, JSON for tooling.

mod human;
mod machine;

pub use machine::{
    MachineDiagnostic, MachineLabel, MachineLocation, MachineReport, MachineSuggestion,
    MachineSummary,
};

use crate::validate::Diagnostic;

/// Output form of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Human,
    Machine,
}

/// Renders diagnostics against the source unit they were produced from.
/// Output is deterministic for a given input; no color, no locale.
pub fn render(
    diagnostics: &[Diagnostic],
    source_name: &str,
    source_text: &str,
    mode: RenderMode,
) -> String {
    match mode {
        RenderMode::Human => human::render(diagnostics, source_name, source_text),
        RenderMode::Machine => machine::render(diagnostics, source_name),
    }
}
