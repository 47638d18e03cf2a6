// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — categorical domain-model core (validation + code generation).
//!
//! The crate models bounded contexts as sketches (objects, morphisms, path
//! equations, limits, colimits), validates them into located diagnostics, and
//! lowers validated contexts through a language-neutral IR into generated
//! source for the supported target languages. Contexts also export as
//! Mermaid class diagrams. Surface-syntax parsing, the
//! visual builder, and process-level concerns are external collaborators.

pub mod format;
pub mod ir;
pub mod model;
pub mod query;
pub mod render;
pub mod validate;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
