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


use std::fmt;

use serde_json::Value;

use crate::errors::{InputError, json_kind};

/// Largest magnitude that still renders as an integer. Beyond it f64 loses
/// integer precision and the spreadsheet would show scientific notation anyway.
const MAX_INTEGRAL: f64 = 1e15;

/// A single spreadsheet cell
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(number) => number.is_nan(),
        }
    }

    fn as_integer(number: f64) -> Option<i64> {
        (number.is_finite() && number.fract() == 0.0 && number.abs() < MAX_INTEGRAL).then_some(number as i64)
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Empty => Value::String(String::new()),
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Number(number) => match Self::as_integer(*number) {
                Some(integer) => Value::from(integer),
                None => Value::from(*number),
            },
        }
    }
}

/// Numbers print the way the sheet shows them: `1144445555`, not `1144445555.0`
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(number) if number.is_nan() => Ok(()),
            FieldValue::Number(number) => match Self::as_integer(*number) {
                Some(integer) => write!(f, "{integer}"),
                None => write!(f, "{number}"),
            },
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl FieldValue {
    /// Decodes a cell of column `column`. Only scalars are accepted.
    pub fn from_json(column: &str, value: &Value) -> Result<Self, InputError> {
        match value {
            Value::Null => Ok(FieldValue::Empty),
            Value::String(text) if text.is_empty() => Ok(FieldValue::Empty),
            Value::String(text) => Ok(FieldValue::Text(text.clone())),
            Value::Bool(flag) => Ok(FieldValue::Text(flag.to_string())),
            Value::Number(number) => Ok(number.as_f64().map(FieldValue::Number).unwrap_or_default()),
            other => Err(InputError::NonScalarValue {
                column: column.to_string(),
                kind: json_kind(other),
            }),
        }
    }
}

/// One row of directory data: an ordered mapping from column name to cell.
///
/// Records are read-only snapshots of the sheet. There are no mutating
/// methods: deriving a different record (renaming a column, dropping another)
/// means building a new one from [`Record::iter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    /// First cell under `column`, if the column exists
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(name, _)| name == column).map(|(_, value)| value)
    }

    /// Display text of `column`. Absent columns read as the empty string.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.iter().map(|(name, value)| (name.clone(), value.to_json())).collect())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}

impl TryFrom<&Value> for Record {
    type Error = InputError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(InputError::NotAMapping(json_kind(value)));
        };
        let fields = map
            .iter()
            .map(|(column, cell)| Ok((column.clone(), FieldValue::from_json(column, cell)?)))
            .collect::<Result<_, InputError>>()?;
        Ok(Self { fields })
    }
}
