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


use std::collections::BTreeSet;

use comarca_types::Record;
use tracing::debug;

use crate::normalizer::normalize_value;
use crate::synonyms::SynonymTable;

/// Normalized terms a record is tested against
pub type TermSet = BTreeSet<String>;

/// Normalized values of every column, joined by single spaces
pub fn searchable_text(record: &Record) -> String {
    record.values().map(normalize_value).collect::<Vec<_>>().join(" ")
}

/// Whether any term is contained in the record's searchable text.
///
/// Containment is plain substring matching, a short term can match inside a
/// longer word. An empty term set filters nothing.
pub fn matches(record: &Record, terms: &TermSet) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = searchable_text(record);
    terms.iter().any(|term| text.contains(term.as_str()))
}

/// Records matching `query` or any of its synonyms, in their original order.
///
/// A query that normalizes to the empty string matches every record.
pub fn search<'a>(records: &'a [Record], query: &str, synonyms: &SynonymTable) -> Vec<&'a Record> {
    let terms = synonyms.expand(query);
    let found: Vec<_> = records.iter().filter(|record| matches(record, &terms)).collect();
    debug!(?terms, total = records.len(), found = found.len(), "Search finished");
    found
}
