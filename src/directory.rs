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


use comarca_search::{PhoneFormat, SynonymTable, search};
use comarca_types::{FieldValue, Record};
use tracing::{debug, instrument};

use crate::errors::{ComarcaError, ComarcaResult};
use crate::settings::{CategorySheet, DirectorySettings, EnvSettings, NamePolicy};
use crate::store::SheetStore;

/// Prefix given to columns without a header
const UNNAMED_PREFIX: &str = "Unnamed";

/// Entry point to the directory: resolves categories to sheets, loads and
/// cleans their rows and searches them.
pub struct Directory<S> {
    pub(crate) store: S,
    pub(crate) settings: DirectorySettings,
    pub(crate) phone: PhoneFormat,
    synonyms: SynonymTable,
}

impl<S: SheetStore> Directory<S> {
    pub fn new(store: S, settings: DirectorySettings, phone: PhoneFormat, synonyms: SynonymTable) -> Self {
        Self {
            store,
            settings,
            phone,
            synonyms,
        }
    }

    pub fn from_settings(store: S, settings: &EnvSettings) -> ComarcaResult<Self> {
        Ok(Self::new(
            store,
            settings.directory.clone(),
            settings.phone.clone(),
            settings.synonyms()?,
        ))
    }

    pub fn settings(&self) -> &DirectorySettings {
        &self.settings
    }

    pub fn phone_format(&self) -> &PhoneFormat {
        &self.phone
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.settings.categories.iter().map(|category| category.name.as_str())
    }

    pub fn category(&self, name: &str) -> ComarcaResult<&CategorySheet> {
        self.settings
            .category(name)
            .ok_or_else(|| ComarcaError::NotFound(format!("category '{name}'")))
    }

    /// Rows of a category, ready to display and search
    #[instrument(name = "directory::records", skip(self))]
    pub fn records(&self, category: &str) -> ComarcaResult<Vec<Record>> {
        let category = self.category(category)?;
        let records: Vec<_> = self
            .store
            .records(&category.sheet)?
            .iter()
            .map(|record| prepare_record(record, &self.settings))
            .collect();
        debug!(sheet = %category.sheet, records = records.len(), "Category loaded");
        Ok(records)
    }

    /// Rows of a category matching `query` or its synonyms. An empty query
    /// returns the whole category.
    #[instrument(name = "directory::search", skip(self))]
    pub fn search(&self, category: &str, query: &str) -> ComarcaResult<Vec<Record>> {
        let records = self.records(category)?;
        Ok(search(&records, query, &self.synonyms).into_iter().cloned().collect())
    }
}

/// Drops columns without a header and makes sure the name column exists and
/// is filled, following the configured [`NamePolicy`]
pub fn prepare_record(record: &Record, settings: &DirectorySettings) -> Record {
    let name_column = settings.columns.name.as_str();
    let placeholder = || FieldValue::from(settings.placeholder_name.as_str());
    let named = |(column, value): (&str, &FieldValue)| {
        let value = if column == name_column && value.is_empty() {
            placeholder()
        } else {
            value.clone()
        };
        (column.to_string(), value)
    };

    let columns = record.iter().filter(|(column, _)| !column.starts_with(UNNAMED_PREFIX));
    let has_name = record.contains_column(name_column);

    match settings.name_policy {
        _ if has_name => columns.map(named).collect(),
        NamePolicy::FirstColumn if record.columns().any(|column| !column.starts_with(UNNAMED_PREFIX)) => columns
            .enumerate()
            .map(|(index, (column, value))| named((if index == 0 { name_column } else { column }, value)))
            .collect(),
        _ => std::iter::once((name_column.to_string(), placeholder()))
            .chain(columns.map(named))
            .collect(),
    }
}
