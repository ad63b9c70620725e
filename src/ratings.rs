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

use comarca_types::rating::{MAX_STARS, RATING_HEADERS};
use comarca_types::{Rating, Record, Stars};
use time::PrimitiveDateTime;
use tracing::{info, instrument, warn};

use crate::directory::Directory;
use crate::errors::{ComarcaError, ComarcaResult};
use crate::store::SheetStore;

const FULL_STAR: &str = "⭐";
const HALF_STAR: &str = "✴️";
const EMPTY_STAR: &str = "☆";

/// One symbol per star: whole stars, a half star when the fraction reaches
/// one half, and empty stars up to the maximum
pub fn display_stars(mean: f64) -> String {
    let mean = mean.clamp(0.0, MAX_STARS as f64);
    let full = mean.trunc() as usize;
    let half = usize::from(mean - mean.trunc() >= 0.5);
    let empty = MAX_STARS as usize - full - half;
    format!("{}{}{}", FULL_STAR.repeat(full), HALF_STAR.repeat(half), EMPTY_STAR.repeat(empty))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingSummary {
    pub mean: f64,
    pub count: usize,
}

impl RatingSummary {
    /// Mean and count of the ratings given to `subject` within `category`.
    /// `None` when it has no ratings yet.
    pub fn for_subject<'a>(
        ratings: impl IntoIterator<Item = &'a Rating>,
        subject: &str,
        category: &str,
    ) -> Option<Self> {
        let (total, count) = ratings
            .into_iter()
            .filter(|rating| rating.subject == subject && rating.category == category)
            .fold((0u64, 0usize), |(total, count), rating| (total + rating.stars.get() as u64, count + 1));
        (count > 0).then(|| Self {
            mean: total as f64 / count as f64,
            count,
        })
    }

    pub fn stars(&self) -> String {
        display_stars(self.mean)
    }
}

impl fmt::Display for RatingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "opinión" } else { "opiniones" };
        write!(f, "{} ({:.1} / 5) basada en {} {noun}", self.stars(), self.mean, self.count)
    }
}

impl<S: SheetStore> Directory<S> {
    /// Every stored rating. Rows that cannot be read are skipped.
    pub fn ratings(&self) -> ComarcaResult<Vec<Rating>> {
        let sheet = &self.settings.ratings_sheet;
        self.store.ensure_sheet(sheet, &RATING_HEADERS)?;
        let records = self.store.records(sheet)?;
        Ok(records.iter().filter_map(parse_rating).collect())
    }

    pub fn rating_summary(&self, category: &str, subject: &str) -> ComarcaResult<Option<RatingSummary>> {
        let category = self.category(category)?;
        let ratings = self.ratings()?;
        Ok(RatingSummary::for_subject(&ratings, subject, &category.name))
    }

    #[instrument(name = "directory::rate", skip(self, comment, at))]
    pub fn rate(
        &self,
        category: &str,
        subject: &str,
        stars: Stars,
        comment: Option<String>,
        at: PrimitiveDateTime,
    ) -> ComarcaResult<Rating> {
        let category = self.category(category)?;
        if subject.trim().is_empty() {
            return Err(ComarcaError::invalid("A rating needs the name of what is being rated"));
        }

        let rating = Rating {
            subject: subject.trim().to_string(),
            category: category.name.clone(),
            stars,
            comment: comment.filter(|comment| !comment.trim().is_empty()),
            timestamp: at,
        };
        let sheet = &self.settings.ratings_sheet;
        self.store.ensure_sheet(sheet, &RATING_HEADERS)?;
        self.store.append_row(sheet, rating.to_row())?;
        info!(stars = stars.get(), "Rating stored");
        Ok(rating)
    }
}

fn parse_rating(record: &Record) -> Option<Rating> {
    match Rating::from_record(record) {
        Ok(rating) => Some(rating),
        Err(e) => {
            warn!(error = %e, "Skipping unreadable rating");
            None
        }
    }
}
