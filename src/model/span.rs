// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Half-open byte range in the source unit a model element came from.
///
/// The surface-syntax parser attaches spans when it builds the model; models
/// constructed programmatically use [`SourceSpan::default`], which renders
/// without a source window. Line and column are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SourceSpan {
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the parser attached a real location.
    pub fn is_located(&self) -> bool {
        self.line > 0
    }

    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::SourceSpan;

    #[test]
    fn span_reports_range_and_length() {
        let span = SourceSpan::new(10, 19, 2, 5);
        assert_eq!(span.to_range(), 10..19);
        assert_eq!(span.len(), 9);
        assert!(span.is_located());
        assert!(!span.is_empty());
    }

    #[test]
    fn default_span_is_unlocated() {
        let span = SourceSpan::default();
        assert!(!span.is_located());
        assert!(span.is_empty());
    }
}
