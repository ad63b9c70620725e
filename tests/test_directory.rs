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
use comarca_types::Record;
use common::{ACTIVITIES, GROCERIES, SERVICES};

fn names(records: &[Record]) -> Vec<String> {
    records.iter().map(|record| record.text("Nombre")).collect()
}

#[test]
fn test_categories() {
    let test = common::test_directory();
    let categories: Vec<_> = test.directory.categories().collect();
    assert_eq!(categories, vec![SERVICES, ACTIVITIES, GROCERIES]);
}

#[test]
fn test_search_without_accent() {
    let test = common::test_directory();
    let found = test.directory.search(SERVICES, "herreria").unwrap();
    assert_eq!(names(&found), vec!["Hierros Don Luis"]);
}

#[test]
fn test_search_with_synonyms() {
    let test = common::test_directory();
    let found = test.directory.search("prov. de servicios", "caños").unwrap();
    assert_eq!(names(&found), vec!["Juan Pérez"]);

    let found = test.directory.search(ACTIVITIES, "pilates").unwrap();
    assert_eq!(names(&found), vec!["Yoga en el club"]);
}

#[test]
fn test_empty_query_lists_the_category() {
    let test = common::test_directory();
    let found = test.directory.search(SERVICES, "  ").unwrap();
    assert_eq!(
        names(&found),
        vec!["Juan Pérez", "Marta Gómez", "Hierros Don Luis", "Ana Ruiz", "Carlos Díaz"]
    );
}

#[test]
fn test_first_column_is_used_as_name() {
    let test = common::test_directory();
    let found = test.directory.search(GROCERIES, "facturas").unwrap();
    assert_eq!(names(&found), vec!["La Espiga"]);
    assert!(!found[0].contains_column("Comercio"));
}

#[test]
fn test_unknown_category() {
    let test = common::test_directory();
    let result = test.directory.search("Emergencias", "bomberos");
    assert!(matches!(result, Err(ComarcaError::NotFound(_))));
}
