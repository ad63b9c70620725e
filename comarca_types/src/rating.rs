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


use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::errors::InputError;
use crate::record::{FieldValue, Record};

/// Timestamps are stored the way they are typed into the sheet: `2024-03-01 18:30`
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]");

pub const SUBJECT_COLUMN: &str = "Nombre";
pub const CATEGORY_COLUMN: &str = "Categoría";
pub const STARS_COLUMN: &str = "Estrellas";
pub const COMMENT_COLUMN: &str = "Comentario";
pub const DATE_COLUMN: &str = "Fecha";

/// Header row of the ratings sheet, in column order
pub const RATING_HEADERS: [&str; 5] = [SUBJECT_COLUMN, CATEGORY_COLUMN, STARS_COLUMN, COMMENT_COLUMN, DATE_COLUMN];

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stars(u8);

impl Stars {
    pub fn new(value: i64) -> Result<Self, InputError> {
        match u8::try_from(value) {
            Ok(stars) if (MIN_STARS..=MAX_STARS).contains(&stars) => Ok(Self(stars)),
            _ => Err(InputError::StarsOutOfRange(value.to_string())),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<&FieldValue> for Stars {
    type Error = InputError;

    fn try_from(value: &FieldValue) -> Result<Self, Self::Error> {
        let parsed = match value {
            FieldValue::Number(number) if number.fract() == 0.0 => Some(*number as i64),
            FieldValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        };
        parsed.map(Stars::new).unwrap_or_else(|| Err(InputError::StarsOutOfRange(value.to_string())))
    }
}

/// An append-only opinion about one directory entry. Ratings are never edited
/// or deleted, only aggregated.
#[derive(Clone, Debug, PartialEq)]
pub struct Rating {
    pub subject: String,
    pub category: String,
    pub stars: Stars,
    pub comment: Option<String>,
    pub timestamp: PrimitiveDateTime,
}

impl Rating {
    pub fn from_record(record: &Record) -> Result<Self, InputError> {
        let stars = record
            .get(STARS_COLUMN)
            .ok_or_else(|| InputError::MissingColumn(STARS_COLUMN.to_string()))?;
        let date = record.text(DATE_COLUMN);
        let timestamp =
            PrimitiveDateTime::parse(date.trim(), TIMESTAMP_FORMAT).map_err(|_| InputError::InvalidTimestamp(date))?;
        let comment = record.text(COMMENT_COLUMN);

        Ok(Self {
            subject: record.text(SUBJECT_COLUMN),
            category: record.text(CATEGORY_COLUMN),
            stars: Stars::try_from(stars)?,
            comment: (!comment.trim().is_empty()).then_some(comment),
            timestamp,
        })
    }

    /// Cells in [`RATING_HEADERS`] order
    pub fn to_row(&self) -> Vec<FieldValue> {
        let date = self.timestamp.format(TIMESTAMP_FORMAT).unwrap_or_default();
        vec![
            FieldValue::from(self.subject.as_str()),
            FieldValue::from(self.category.as_str()),
            FieldValue::from(self.stars.get() as i64),
            FieldValue::from(self.comment.clone()),
            FieldValue::from(date),
        ]
    }
}
