// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::validate::{Diagnostic, Label, Severity};
use std::fmt::Write as _;

pub(super) fn render(diagnostics: &[Diagnostic], source_name: &str, source_text: &str) -> String {
    let lines: Vec<&str> = source_text.lines().collect();
    let mut out = String::new();

    for diagnostic in diagnostics {
        let _ = writeln!(
            out,
            "{}[{}]: {}",
            diagnostic.severity(),
            diagnostic.code(),
            diagnostic.message()
        );
        if let Some(span) = diagnostic.primary_span() {
            if span.is_located() {
                let _ = writeln!(out, " --> {source_name}:{}:{}", span.line(), span.column());
            }
        }
        for label in diagnostic.labels() {
            write_source_window(&mut out, label, source_text, &lines);
        }
        for suggestion in diagnostic.suggestions() {
            let _ = writeln!(out, "help: {}", suggestion.message());
        }
        for note in diagnostic.notes() {
            let _ = writeln!(out, "note: {note}");
        }
        out.push('\n');
    }

    write_summary(&mut out, diagnostics);
    out
}

/// Gutter-framed window: the labeled line with one line of surrounding
/// source on each side and a caret underline carrying the label text.
fn write_source_window(out: &mut String, label: &Label, source: &str, lines: &[&str]) {
    let span = label.span();
    if !span.is_located() {
        return;
    }
    let line_number = span.line() as usize;
    let Some(line_text) = lines.get(line_number - 1) else {
        return;
    };

    let last_shown = (line_number + 1).min(lines.len());
    let width = last_shown.to_string().len();

    let _ = writeln!(out, "{:width$} |", "");
    if line_number > 1 {
        let _ = writeln!(out, "{:width$} | {}", line_number - 1, lines[line_number - 2]);
    }
    let _ = writeln!(out, "{line_number:width$} | {line_text}");

    let column = span.column().max(1) as usize;
    // Caret width is in characters; the span range is in bytes.
    let caret_width = source
        .get(span.to_range())
        .map(|text| text.chars().count())
        .unwrap_or_else(|| span.len());
    let carets = "^".repeat(caret_width.max(1));
    let _ = writeln!(out, "{:width$} | {:>pad$}{carets} {}", "", "", label.message(), pad = column - 1);

    if line_number < lines.len() {
        let _ = writeln!(out, "{:width$} | {}", line_number + 1, lines[line_number]);
    }
    let _ = writeln!(out, "{:width$} |", "");
}

fn write_summary(out: &mut String, diagnostics: &[Diagnostic]) {
    let errors = diagnostics.iter().filter(|d| d.severity() == Severity::Error).count();
    let warnings = diagnostics.iter().filter(|d| d.severity() == Severity::Warning).count();

    if errors > 0 {
        let _ = writeln!(out, "error: {errors} error(s) emitted");
    }
    if warnings > 0 {
        let _ = writeln!(out, "warning: {warnings} warning(s) emitted");
    }
    if errors == 0 && warnings == 0 {
        let _ = writeln!(out, "no issues found");
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::model::SourceSpan;
    use crate::validate::{Diagnostic, Suggestion};

    const SOURCE: &str = "context Commerce\nentity Customer\nmorphism placedBy: Order -> Custommer\nentity Order\n";

    fn typo_diagnostic() -> Diagnostic {
        Diagnostic::error("E0002", "unknown target object 'Custommer' in morphism 'placedBy'")
            .with_label(SourceSpan::new(62, 71, 3, 29), "not a declared object")
            .with_suggestion(Suggestion::new("did you mean 'Customer'?").with_replacement("Customer"))
    }

    #[test]
    fn renders_header_location_and_window() {
        let output = render(&[typo_diagnostic()], "shop.sketch", SOURCE);

        assert!(output.starts_with(
            "error[E0002]: unknown target object 'Custommer' in morphism 'placedBy'\n"
        ));
        assert!(output.contains(" --> shop.sketch:3:29\n"));
        assert!(output.contains("3 | morphism placedBy: Order -> Custommer\n"));
        assert!(output.contains("^^^^^^^^^ not a declared object\n"));
        assert!(output.contains("2 | entity Customer\n"));
        assert!(output.contains("4 | entity Order\n"));
        assert!(output.contains("help: did you mean 'Customer'?\n"));
        assert!(output.ends_with("error: 1 error(s) emitted\n"));
    }

    #[test]
    fn caret_width_counts_characters_not_bytes() {
        let source = "entity Käufer\nmorphism placedBy: Order -> Käufler\n";
        let diagnostic =
            Diagnostic::error("E0002", "unknown target object 'Käufler' in morphism 'placedBy'")
                .with_label(SourceSpan::new(43, 51, 2, 29), "not a declared object");

        let output = render(&[diagnostic], "shop.sketch", source);
        assert!(output.contains("2 | morphism placedBy: Order -> Käufler\n"));
        // 'Käufler' is 8 bytes but 7 characters wide.
        assert!(output.contains("^^^^^^^ not a declared object\n"));
        assert!(!output.contains("^^^^^^^^ "));
    }

    #[test]
    fn unlocated_diagnostics_render_without_a_window() {
        let diagnostic = Diagnostic::warning("W0001", "aggregate 'Cart' declares no invariants")
            .with_note("invariants keep the aggregate consistent");
        let output = render(&[diagnostic], "shop.sketch", SOURCE);

        assert!(output.starts_with("warning[W0001]: aggregate 'Cart' declares no invariants\n"));
        assert!(!output.contains(" --> "));
        assert!(!output.contains(" | "));
        assert!(output.contains("note: invariants keep the aggregate consistent\n"));
        assert!(output.ends_with("warning: 1 warning(s) emitted\n"));
    }

    #[test]
    fn empty_report_says_so() {
        let output = render(&[], "shop.sketch", SOURCE);
        assert_eq!(output, "no issues found\n");
    }

    #[test]
    fn output_is_deterministic() {
        let first = render(&[typo_diagnostic()], "shop.sketch", SOURCE);
        let second = render(&[typo_diagnostic()], "shop.sketch", SOURCE);
        assert_eq!(first, second);
    }
}
