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

use comarca_search::{DEFAULT_SYNONYMS, SynonymTable, TermSet, expand, matches, normalize, search};
use comarca_types::Record;

fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records.into_iter().map(|record| record.text("Nombre")).collect()
}

#[test]
fn test_case_and_accent_invariance() {
    assert_eq!(normalize("Plomería"), normalize("PLOMERIA"));
    assert_eq!(normalize("PLOMERIA"), normalize("plomeria"));
}

#[test]
fn test_synonym_reflexivity() {
    let plumbing = SynonymTable::new([("plomero", ["plomería", "caños"])]);
    for table in [&SynonymTable::default(), &plumbing, &*DEFAULT_SYNONYMS] {
        assert!(expand("plomero", table).contains("plomero"));
    }
}

#[test]
fn test_synonym_symmetry() {
    let table = SynonymTable::new([("plomero", ["plomería", "caños"])]);
    assert!(expand("caños", &table).contains("plomero"));
    for term in expand("plomero", &table) {
        assert!(expand(&term, &table).contains("plomero"));
    }
}

#[test]
fn test_search_is_a_stable_filter() {
    let records = vec![
        common::activity("A", "Yoga para adultos"),
        common::activity("B", "Fútbol infantil"),
        common::activity("C", "YOGA en el club"),
    ];
    let found = search(&records, "yoga", &SynonymTable::default());
    assert_eq!(names(found), vec!["A", "C"]);
}

#[test]
fn test_empty_query_returns_every_record() {
    let records = common::services();
    for query in ["", "   ", "\u{0301}"] {
        let found = search(&records, query, &DEFAULT_SYNONYMS);
        assert_eq!(found.len(), records.len(), "query {query:?}");
    }
}

#[test]
fn test_empty_term_set_returns_every_record() {
    let records = common::services();
    assert!(records.iter().all(|record| matches(record, &TermSet::new())));
}

#[test]
fn test_search_without_records() {
    assert!(search(&[], "plomero", &DEFAULT_SYNONYMS).is_empty());
}

#[test]
fn test_search_without_accent_finds_accented_trade() {
    let records = common::services();
    let found = search(&records, "herreria", &SynonymTable::default());
    assert_eq!(names(found), vec!["Hierros Don Luis"]);
}

#[test]
fn test_search_expands_synonyms() {
    let records = common::services();

    // "caños" only appears in the synonym table, the row says "Plomería"
    let found = search(&records, "Caños", &DEFAULT_SYNONYMS);
    assert_eq!(names(found), vec!["Juan Pérez"]);

    let found = search(&records, "calefacción", &DEFAULT_SYNONYMS);
    assert_eq!(names(found), vec!["Carlos Díaz"]);
}

#[test]
fn test_search_matches_any_column() {
    let records = common::services();
    let found = search(&records, "los pinos", &SynonymTable::default());
    assert_eq!(names(found), vec!["Marta Gómez", "Ana Ruiz"]);

    let found = search(&records, "1155556666", &SynonymTable::default());
    assert_eq!(names(found), vec!["Marta Gómez"]);
}

#[test]
fn test_search_with_no_match() {
    let records = common::services();
    assert!(search(&records, "veterinaria", &DEFAULT_SYNONYMS).is_empty());
}
