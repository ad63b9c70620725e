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


use comarca_types::{FieldValue, Record};
use serde::Deserialize;
use tracing::debug;

use crate::normalizer::{normalize, normalize_value};
use crate::phone::PhoneFormat;

/// Which fields make two entries the same one
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum DuplicateKey {
    /// Same phone and same trade, within one category. Two people sharing a
    /// phone with different trades are different entries.
    CategoryScoped,
    /// Same name and same phone, regardless of category. Used by the ledger of
    /// submitted contacts.
    Global,
}

/// Column names holding the fields the guard compares
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EntryColumns {
    pub name: String,
    pub phone: String,
    pub trade: String,
}

impl Default for EntryColumns {
    fn default() -> Self {
        Self {
            name: "Nombre".to_string(),
            phone: "Teléfono".to_string(),
            trade: "Rubro".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct EntryKey {
    name: String,
    phone: String,
    trade: String,
}

/// Decides whether a proposed entry already exists among a set of records.
///
/// Comparisons ignore case, accents and phone formatting. Missing fields read
/// as empty strings. A candidate without a phone number is never reported as a
/// duplicate, and neither is a candidate without a name under
/// [`DuplicateKey::Global`].
#[derive(Clone, Debug)]
pub struct DuplicateGuard {
    key: DuplicateKey,
    columns: EntryColumns,
    phone: PhoneFormat,
}

impl DuplicateGuard {
    pub fn new(key: DuplicateKey, columns: EntryColumns, phone: PhoneFormat) -> Self {
        Self { key, columns, phone }
    }

    pub fn category_scoped(columns: EntryColumns, phone: PhoneFormat) -> Self {
        Self::new(DuplicateKey::CategoryScoped, columns, phone)
    }

    pub fn global(columns: EntryColumns, phone: PhoneFormat) -> Self {
        Self::new(DuplicateKey::Global, columns, phone)
    }

    pub fn key(&self) -> DuplicateKey {
        self.key
    }

    pub fn columns(&self) -> &EntryColumns {
        &self.columns
    }

    pub fn is_duplicate(&self, candidate: &Record, existing: &[Record]) -> bool {
        self.find_duplicate(candidate, existing).is_some()
    }

    /// First existing record equivalent to `candidate`
    pub fn find_duplicate<'a>(&self, candidate: &Record, existing: &'a [Record]) -> Option<&'a Record> {
        let wanted = self.entry_key(candidate);
        let comparable = match self.key {
            DuplicateKey::CategoryScoped => !wanted.phone.is_empty(),
            DuplicateKey::Global => !wanted.phone.is_empty() && !wanted.name.is_empty(),
        };
        if !comparable {
            debug!(key = ?self.key, "Candidate lacks the fields to compare, not a duplicate");
            return None;
        }

        let found = existing.iter().find(|record| self.equivalent(&wanted, &self.entry_key(record)));
        if found.is_some() {
            debug!(key = ?self.key, phone = %wanted.phone, "Duplicate entry found");
        }
        found
    }

    fn equivalent(&self, wanted: &EntryKey, other: &EntryKey) -> bool {
        match self.key {
            DuplicateKey::CategoryScoped => wanted.phone == other.phone && wanted.trade == other.trade,
            DuplicateKey::Global => wanted.name == other.name && wanted.phone == other.phone,
        }
    }

    fn entry_key(&self, record: &Record) -> EntryKey {
        let field = |column: &str| field_value(record, column);
        EntryKey {
            name: field(self.columns.name.as_str()).map(normalize_value).unwrap_or_default(),
            phone: field(self.columns.phone.as_str())
                .map(|value| self.phone.normalize_value(value))
                .unwrap_or_default(),
            trade: field(self.columns.trade.as_str()).map(normalize_value).unwrap_or_default(),
        }
    }
}

/// Cell under `column`, tolerating case and accent differences in the header
/// (`Telefono` for `Teléfono`)
fn field_value<'a>(record: &'a Record, column: &str) -> Option<&'a FieldValue> {
    record.get(column).or_else(|| {
        let wanted = normalize(column);
        record
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, value)| value)
    })
}
