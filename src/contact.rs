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


use comarca_search::PhoneFormat;
use comarca_types::Record;

/// Ways to reach the number stored in one phone column
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub column: String,
    pub number: String,
    pub call: String,
    pub whatsapp: Option<String>,
}

/// Links for every column that looks like a phone column (its name contains
/// "tel") and holds a number
pub fn contact_links(record: &Record, phone: &PhoneFormat) -> Vec<ContactLink> {
    record
        .iter()
        .filter(|(column, value)| column.to_lowercase().contains("tel") && !value.is_empty())
        .map(|(column, value)| {
            let number = value.to_string().trim().to_string();
            let dialable: String = number.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
            ContactLink {
                column: column.to_string(),
                call: format!("tel:{dialable}"),
                whatsapp: phone.international(&number).map(|digits| format!("https://wa.me/{digits}")),
                number,
            }
        })
        .collect()
}
