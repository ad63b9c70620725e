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


use comarca_types::FieldValue;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, strip accents and surrounding whitespace.
///
/// Interior spacing and punctuation are kept, so the result can still be used
/// for substring matching. Applying it twice gives the same output as applying
/// it once.
pub fn normalize(text: &str) -> String {
    // Lowercasing may produce new combining marks (e.g. `İ`), so marks are
    // stripped on both sides of it
    let folded: String = strip_marks(text).flat_map(char::to_lowercase).collect();
    let stripped: String = strip_marks(&folded).collect();
    stripped.trim().to_string()
}

/// Same as [`normalize`] over a cell. Empty cells give the empty string.
pub fn normalize_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Empty => String::new(),
        value => normalize(&value.to_string()),
    }
}

fn strip_marks(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfkd().filter(|c| !is_combining_mark(*c))
}
