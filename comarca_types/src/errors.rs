// Copyright (C) 2021 Bosutech XXI S.L.
//
// nucliadb is offered under the AGPL v3.0 and as commercial software.
// For commercial licensing, contact us at info@nuclia.com.
//
// AGPL:
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//


use serde_json::Value;
use thiserror::Error;

/// Structurally wrong input handed to the directory core. Missing or empty
/// values are never reported here, they read as empty strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a mapping of column names to values, found {0}")]
    NotAMapping(&'static str),
    #[error("column '{column}' holds {kind}, only scalar values are supported")]
    NonScalarValue { column: String, kind: &'static str },
    #[error("invalid synonym table: {0}")]
    InvalidSynonymTable(String),
    #[error("star count must be between 1 and 5, got '{0}'")]
    StarsOutOfRange(String),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Human readable name of a JSON value kind, used in error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
