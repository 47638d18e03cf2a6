// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagnostic code registry. Codes are append-only: a published code keeps
//! its meaning forever, retired checks leave a gap.

pub const MORPHISM_SOURCE_UNRESOLVED: &str = "E0001";
pub const MORPHISM_TARGET_UNRESOLVED: &str = "E0002";
pub const EQUATION_NAME_UNRESOLVED: &str = "E0010";
pub const EQUATION_SCOPE_UNRESOLVED: &str = "E0011";
pub const DUPLICATE_OBJECT_NAME: &str = "E0020";
pub const AGGREGATE_ROOT_UNRESOLVED: &str = "E0030";
pub const AGGREGATE_ROOT_NOT_ENTITY: &str = "E0031";
pub const AGGREGATE_ROOT_IN_MEMBERS: &str = "E0032";
pub const AGGREGATE_MEMBER_UNRESOLVED: &str = "E0033";
pub const ENTITY_FIELD_TYPE_UNKNOWN: &str = "E0040";
pub const VALUE_OBJECT_FIELD_TYPE_UNKNOWN: &str = "E0041";
pub const DUPLICATE_ENUM_VARIANT: &str = "E0050";
pub const VARIANT_PAYLOAD_UNRESOLVED: &str = "E0051";
pub const MAP_SOURCE_CONTEXT_UNKNOWN: &str = "E0060";
pub const MAP_TARGET_CONTEXT_UNKNOWN: &str = "E0061";
pub const MAPPING_UNRESOLVED_IN_SOURCE: &str = "E0062";
pub const MAPPING_UNRESOLVED_IN_TARGET: &str = "E0063";
pub const MAP_RELATES_CONTEXT_TO_ITSELF: &str = "E0064";
pub const MODEL_HAS_NO_CONTEXTS: &str = "E0070";
pub const CONTEXT_MAP_CYCLE: &str = "E0071";

pub const AGGREGATE_WITHOUT_INVARIANTS: &str = "W0001";
pub const AGGREGATE_WITHOUT_MEMBERS: &str = "W0002";
pub const AGGREGATE_TOO_LARGE: &str = "W0003";
pub const VALUE_OBJECT_WITHOUT_FIELDS: &str = "W0010";
pub const VALUE_OBJECT_FIELD_IS_ENTITY: &str = "W0011";

/// Registry entry describing one diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo {
    pub code: &'static str,
    pub summary: &'static str,
}

pub static REGISTRY: &[CodeInfo] = &[
    CodeInfo { code: MORPHISM_SOURCE_UNRESOLVED, summary: "morphism source does not resolve to a declared object" },
    CodeInfo { code: MORPHISM_TARGET_UNRESOLVED, summary: "morphism target does not resolve to a declared object" },
    CodeInfo { code: EQUATION_NAME_UNRESOLVED, summary: "name referenced in a path equation does not resolve" },
    CodeInfo { code: EQUATION_SCOPE_UNRESOLVED, summary: "equation scope object does not resolve" },
    CodeInfo { code: DUPLICATE_OBJECT_NAME, summary: "object name declared more than once in a context" },
    CodeInfo { code: AGGREGATE_ROOT_UNRESOLVED, summary: "aggregate root does not resolve to a declared object" },
    CodeInfo { code: AGGREGATE_ROOT_NOT_ENTITY, summary: "aggregate root is not an entity" },
    CodeInfo { code: AGGREGATE_ROOT_IN_MEMBERS, summary: "aggregate root is also listed as a member" },
    CodeInfo { code: AGGREGATE_MEMBER_UNRESOLVED, summary: "aggregate member does not resolve to a declared object" },
    CodeInfo { code: ENTITY_FIELD_TYPE_UNKNOWN, summary: "entity field type is neither a primitive nor a declared object" },
    CodeInfo { code: VALUE_OBJECT_FIELD_TYPE_UNKNOWN, summary: "value-object field type is neither a primitive nor a declared object" },
    CodeInfo { code: DUPLICATE_ENUM_VARIANT, summary: "variant name declared more than once in an enum" },
    CodeInfo { code: VARIANT_PAYLOAD_UNRESOLVED, summary: "enum variant payload type does not resolve" },
    CodeInfo { code: MAP_SOURCE_CONTEXT_UNKNOWN, summary: "context map source context is not declared" },
    CodeInfo { code: MAP_TARGET_CONTEXT_UNKNOWN, summary: "context map target context is not declared" },
    CodeInfo { code: MAPPING_UNRESOLVED_IN_SOURCE, summary: "object mapping endpoint does not resolve in the source context" },
    CodeInfo { code: MAPPING_UNRESOLVED_IN_TARGET, summary: "object mapping endpoint does not resolve in the target context" },
    CodeInfo { code: MAP_RELATES_CONTEXT_TO_ITSELF, summary: "context map relates a context to itself" },
    CodeInfo { code: MODEL_HAS_NO_CONTEXTS, summary: "model declares no bounded contexts" },
    CodeInfo { code: CONTEXT_MAP_CYCLE, summary: "directional context maps form a dependency cycle" },
    CodeInfo { code: AGGREGATE_WITHOUT_INVARIANTS, summary: "aggregate declares no invariants" },
    CodeInfo { code: AGGREGATE_WITHOUT_MEMBERS, summary: "aggregate has no members besides its root" },
    CodeInfo { code: AGGREGATE_TOO_LARGE, summary: "aggregate contains more than 5 members" },
    CodeInfo { code: VALUE_OBJECT_WITHOUT_FIELDS, summary: "value object declares no fields" },
    CodeInfo { code: VALUE_OBJECT_FIELD_IS_ENTITY, summary: "value-object field refers to an entity" },
];

/// Registry lookup for a code string such as `"E0001"`.
pub fn explain(code: &str) -> Option<&'static CodeInfo> {
    REGISTRY.iter().find(|info| info.code == code)
}

#[cfg(test)]
mod tests {
    use super::{explain, REGISTRY};

    #[test]
    fn registry_codes_are_unique_and_sorted() {
        let codes: Vec<&str> = REGISTRY.iter().map(|info| info.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }

    #[test]
    fn explain_finds_known_codes() {
        let info = explain("E0020").expect("registered code");
        assert!(info.summary.contains("declared more than once"));
        assert!(explain("E9999").is_none());
    }
}
