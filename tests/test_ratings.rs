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


mod common;

use comarca::ComarcaError;
use comarca::SheetStore;
use comarca_types::Stars;
use comarca_types::rating::RATING_HEADERS;
use common::{ACTIVITIES, SERVICES};

#[test]
fn test_ratings_sheet_is_created_on_first_read() {
    let test = common::test_directory();
    let directory = &test.directory;
    assert!(directory.ratings().unwrap().is_empty());

    let headers = directory.store().headers(&directory.settings().ratings_sheet).unwrap();
    assert_eq!(headers, RATING_HEADERS);
}

#[test]
fn test_rate_and_summarize() {
    let test = common::test_directory();
    let directory = &test.directory;

    for stars in [5, 4, 4] {
        directory
            .rate(SERVICES, "Juan Pérez", Stars::new(stars).unwrap(), None, common::at())
            .unwrap();
    }
    directory
        .rate(ACTIVITIES, "Juan Pérez", Stars::new(1).unwrap(), Some("No vino".to_string()), common::at())
        .unwrap();

    let summary = directory.rating_summary("prov. de servicios", "Juan Pérez").unwrap().unwrap();
    assert_eq!(summary.count, 3);
    assert!((summary.mean - 13.0 / 3.0).abs() < 1e-9);
    assert_eq!(summary.stars(), "⭐⭐⭐⭐☆");

    assert!(directory.rating_summary(SERVICES, "Ana Ruiz").unwrap().is_none());
}

#[test]
fn test_unreadable_ratings_are_skipped() {
    let test = common::test_directory();
    let directory = &test.directory;
    let sheet = directory.settings().ratings_sheet.clone();

    directory.store().ensure_sheet(&sheet, &RATING_HEADERS).unwrap();
    directory
        .store()
        .append_row(&sheet, vec!["Juan Pérez".into(), SERVICES.into(), "muchas".into(), "".into(), "ayer".into()])
        .unwrap();
    directory
        .rate(SERVICES, "Juan Pérez", Stars::new(3).unwrap(), None, common::at())
        .unwrap();

    assert_eq!(directory.ratings().unwrap().len(), 1);
}

#[test]
fn test_rating_needs_a_subject() {
    let test = common::test_directory();
    let result = test
        .directory
        .rate(SERVICES, "  ", Stars::new(5).unwrap(), None, common::at());
    assert!(matches!(result, Err(ComarcaError::InvalidRequest(_))));
}
