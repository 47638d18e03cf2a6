// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{ContextId, IdError, ObjectId};

/// Canonical stable reference to an object inside a bounded context.
///
/// Canonical format: `c:<context_id>/<object_id>`. Context maps and
/// diagnostics use this form when they talk about objects across context
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    context_id: ContextId,
    object_id: ObjectId,
}

impl ObjectRef {
    pub fn new(context_id: ContextId, object_id: ObjectId) -> Self {
        Self { context_id, object_id }
    }

    pub fn context_id(&self) -> &ContextId {
        &self.context_id
    }

    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    pub fn parse(input: &str) -> Result<Self, ParseObjectRefError> {
        const PREFIX: &str = "c:";
        let rest = input.strip_prefix(PREFIX).ok_or(ParseObjectRefError::MissingPrefix)?;

        let (context_id_str, object_id_str) =
            rest.split_once('/').ok_or(ParseObjectRefError::MissingObjectId)?;

        if context_id_str.is_empty() {
            return Err(ParseObjectRefError::MissingContextId);
        }
        if object_id_str.is_empty() {
            return Err(ParseObjectRefError::MissingObjectId);
        }

        let context_id = ContextId::new(context_id_str.to_owned())
            .map_err(ParseObjectRefError::InvalidContextId)?;
        let object_id = ObjectId::new(object_id_str.to_owned())
            .map_err(ParseObjectRefError::InvalidObjectId)?;

        Ok(Self { context_id, object_id })
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c:{}/{}", self.context_id, self.object_id)
    }
}

impl FromStr for ObjectRef {
    type Err = ParseObjectRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseObjectRefError {
    MissingPrefix,
    MissingContextId,
    MissingObjectId,
    InvalidContextId(IdError),
    InvalidObjectId(IdError),
}

impl fmt::Display for ParseObjectRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => f.write_str("object ref must start with 'c:'"),
            Self::MissingContextId => f.write_str("object ref is missing context id"),
            Self::MissingObjectId => f.write_str("object ref is missing object id"),
            Self::InvalidContextId(err) => write!(f, "invalid context id: {err}"),
            Self::InvalidObjectId(err) => write!(f, "invalid object id: {err}"),
        }
    }
}

impl std::error::Error for ParseObjectRefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidContextId(err) => Some(err),
            Self::InvalidObjectId(err) => Some(err),
            _ => None,
        }
    }
}
