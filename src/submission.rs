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


use comarca_search::DuplicateGuard;
use comarca_types::rating::TIMESTAMP_FORMAT;
use comarca_types::{FieldValue, Record};
use time::PrimitiveDateTime;
use tracing::{info, instrument};

use crate::directory::Directory;
use crate::errors::{ComarcaError, ComarcaResult};
use crate::store::SheetStore;

const ZONE_COLUMN: &str = "Zona";
const SUBMITTER_COLUMN: &str = "Usuario";
const CATEGORY_COLUMN: &str = "Categoría";
const DATE_COLUMN: &str = "Fecha";

/// A directory entry proposed by a neighbour
#[derive(Clone, Debug, Default)]
pub struct NewEntry {
    pub name: String,
    pub trade: String,
    pub phone: String,
    pub zone: Option<String>,
    pub submitter: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// The entry was appended to its category
    Added {
        /// Whether the contact was new to the submissions ledger too
        recorded_in_ledger: bool,
    },
    /// An equivalent entry already exists, nothing was written
    Duplicate { existing: Record },
}

impl NewEntry {
    fn validate(&self) -> ComarcaResult<()> {
        let missing: Vec<_> = [("name", &self.name), ("trade", &self.trade), ("phone", &self.phone)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ComarcaError::InvalidRequest(format!("Missing required fields: {}", missing.join(", "))))
        }
    }

    fn optional(value: &Option<String>) -> FieldValue {
        value.as_deref().map(str::trim).filter(|value| !value.is_empty()).into()
    }
}

impl<S: SheetStore> Directory<S> {
    /// Appends `entry` to `category` unless an entry with the same phone and
    /// trade is already listed there. New contacts are also recorded in the
    /// submissions ledger, deduplicated by name and phone.
    #[instrument(name = "directory::submit", skip(self, entry, at), fields(name = %entry.name))]
    pub fn submit(&self, category: &str, entry: &NewEntry, at: PrimitiveDateTime) -> ComarcaResult<SubmissionOutcome> {
        entry.validate()?;
        let category = self.category(category)?;
        let columns = self.settings.columns.clone();

        let candidate: Record = [
            (columns.name.as_str(), FieldValue::from(entry.name.trim())),
            (columns.trade.as_str(), FieldValue::from(entry.trade.trim())),
            (columns.phone.as_str(), FieldValue::from(entry.phone.trim())),
        ]
        .into_iter()
        .collect();

        let existing = self.store.records(&category.sheet)?;
        let guard = DuplicateGuard::category_scoped(columns.clone(), self.phone.clone());
        if let Some(existing) = guard.find_duplicate(&candidate, &existing) {
            info!("Entry already listed in category");
            return Ok(SubmissionOutcome::Duplicate {
                existing: existing.clone(),
            });
        }

        let date = FieldValue::from(at.format(TIMESTAMP_FORMAT).map_err(anyhow::Error::from)?);
        let zone = NewEntry::optional(&entry.zone);
        let submitter = NewEntry::optional(&entry.submitter);

        // Positional, as typed into the sheet: name, trade, phone, zone, submitter, date
        let mut row: Vec<FieldValue> = candidate.values().cloned().collect();
        row.extend([zone.clone(), submitter.clone(), date.clone()]);
        let width = self.store.headers(&category.sheet)?.len();
        if row.len() < width {
            row.resize(width, FieldValue::Empty);
        }
        self.store.append_row(&category.sheet, row)?;
        info!(sheet = %category.sheet, "Entry added");

        let ledger_sheet = &self.settings.submissions_sheet;
        let ledger_headers = [
            columns.name.as_str(),
            columns.trade.as_str(),
            columns.phone.as_str(),
            CATEGORY_COLUMN,
            ZONE_COLUMN,
            SUBMITTER_COLUMN,
            DATE_COLUMN,
        ];
        self.store.ensure_sheet(ledger_sheet, &ledger_headers)?;
        let ledger = self.store.records(ledger_sheet)?;
        let ledger_guard = DuplicateGuard::global(columns, self.phone.clone());
        let recorded_in_ledger = !ledger_guard.is_duplicate(&candidate, &ledger);
        if recorded_in_ledger {
            let mut row: Vec<FieldValue> = candidate.values().cloned().collect();
            row.extend([FieldValue::from(category.name.as_str()), zone, submitter, date]);
            self.store.append_row(ledger_sheet, row)?;
        }

        Ok(SubmissionOutcome::Added { recorded_in_ledger })
    }
}
