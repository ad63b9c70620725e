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


use std::collections::{BTreeSet, HashMap};

use comarca_types::InputError;
use comarca_types::errors::json_kind;
use lazy_static::lazy_static;
use serde_json::Value;

use crate::normalizer::normalize;

/// Synonym groups shipped with the directory, keyed by canonical term
const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    ("plomero", &["plomería", "caños", "cañerías", "sanitarios", "destapaciones"]),
    ("gasista", &["gas", "calefacción", "calefactor", "termotanque"]),
    ("electricista", &["electricidad", "instalación eléctrica", "luz"]),
    ("herrero", &["herrería", "rejas", "soldador", "portones"]),
    ("jardinero", &["jardinería", "parquero", "pasto", "poda", "parque"]),
    ("albañil", &["albañilería", "construcción", "obra", "revoque"]),
    ("pintor", &["pintura", "pinturería"]),
    ("carpintero", &["carpintería", "muebles", "madera"]),
    ("cerrajero", &["cerrajería", "llaves", "cerraduras"]),
    ("piletero", &["pileta", "piscina", "mantenimiento de piletas"]),
    ("fumigador", &["fumigación", "plagas", "control de plagas"]),
    ("fletes", &["flete", "mudanza", "mudanzas"]),
    ("limpieza", &["empleada doméstica", "mucama", "limpiador"]),
    ("mecánico", &["taller", "auxilio", "gomería"]),
    ("veterinario", &["veterinaria", "mascotas", "perros", "gatos"]),
    ("profesor", &["clases", "profesora", "maestra", "particular"]),
    ("yoga", &["pilates", "meditación", "estiramiento"]),
    ("panadería", &["pan", "facturas", "panadero"]),
    ("viandas", &["comida casera", "delivery", "comidas"]),
];

lazy_static! {
    pub static ref DEFAULT_SYNONYMS: SynonymTable = SynonymTable::new(DEFAULT_GROUPS.iter().copied());
}

/// Canonical terms and their alternates, already normalized.
///
/// Each canonical term forms a group together with its alternates. Expanding
/// a term yields every group it belongs to, which keeps expansion symmetric
/// even when a term is a key in one group and an alternate in another.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    groups: Vec<BTreeSet<String>>,
    membership: HashMap<String, Vec<usize>>,
}

impl SynonymTable {
    pub fn new<K, I, V>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let mut table = SynonymTable::default();
        for (canonical, alternates) in entries {
            let group: BTreeSet<String> = std::iter::once(normalize(canonical.as_ref()))
                .chain(alternates.into_iter().map(|term| normalize(term.as_ref())))
                .filter(|term| !term.is_empty())
                .collect();
            if group.is_empty() {
                continue;
            }

            let group_id = table.groups.len();
            for term in &group {
                table.membership.entry(term.clone()).or_default().push(group_id);
            }
            table.groups.push(group);
        }
        table
    }

    /// Reads a JSON object of `{"canonical": ["alternate", ...]}`
    pub fn from_json(value: &Value) -> Result<Self, InputError> {
        let Value::Object(map) = value else {
            return Err(InputError::InvalidSynonymTable(format!(
                "expected an object, found {}",
                json_kind(value)
            )));
        };

        let mut entries = Vec::with_capacity(map.len());
        for (canonical, alternates) in map {
            let Value::Array(alternates) = alternates else {
                return Err(InputError::InvalidSynonymTable(format!(
                    "alternates of '{canonical}' must be a list, found {}",
                    json_kind(alternates)
                )));
            };
            let terms = alternates
                .iter()
                .map(|term| match term {
                    Value::String(term) => Ok(term.as_str()),
                    other => Err(InputError::InvalidSynonymTable(format!(
                        "alternates of '{canonical}' must be strings, found {}",
                        json_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            entries.push((canonical.as_str(), terms));
        }
        Ok(Self::new(entries))
    }

    /// Normalizes `term` and returns it together with every synonym it has.
    /// The term itself is always part of the result.
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        let term = normalize(term);
        let mut expanded: BTreeSet<String> = self
            .membership
            .get(&term)
            .into_iter()
            .flatten()
            .flat_map(|group_id| self.groups[*group_id].iter().cloned())
            .collect();
        expanded.insert(term);
        expanded
    }

    /// Number of synonym groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn expand(term: &str, synonyms: &SynonymTable) -> BTreeSet<String> {
    synonyms.expand(term)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plumbing() -> SynonymTable {
        SynonymTable::new([("plomero", ["plomería", "caños"])])
    }

    #[test]
    fn test_expand_canonical_term() {
        let expanded = plumbing().expand("Plomero");
        assert_eq!(expanded, BTreeSet::from(["plomero".to_string(), "plomeria".to_string(), "canos".to_string()]));
    }

    #[test]
    fn test_expand_alternate_includes_canonical() {
        let expanded = plumbing().expand("caños");
        assert!(expanded.contains("plomero"));
        assert!(expanded.contains("plomeria"));
        assert!(expanded.contains("canos"));
    }

    #[test]
    fn test_expand_unknown_term() {
        assert_eq!(plumbing().expand("Yoga"), BTreeSet::from(["yoga".to_string()]));
        assert_eq!(SynonymTable::default().expand(""), BTreeSet::from([String::new()]));
    }

    #[test]
    fn test_expand_with_cycles_is_finite_and_symmetric() {
        let table = SynonymTable::new([("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);
        for term in ["a", "b", "c"] {
            let expanded = table.expand(term);
            assert_eq!(expanded.len(), 3, "expanding {term}");
            for other in &expanded {
                assert!(table.expand(other).contains(term));
            }
        }
    }

    #[test]
    fn test_default_table_is_symmetric() {
        for group in &DEFAULT_SYNONYMS.groups {
            for term in group {
                for other in DEFAULT_SYNONYMS.expand(term) {
                    assert!(DEFAULT_SYNONYMS.expand(&other).contains(term), "{other} does not lead back to {term}");
                }
            }
        }
    }

    #[test]
    fn test_from_json() {
        let table = SynonymTable::from_json(&json!({"plomero": ["plomería", "caños"]})).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.expand("plomeria").contains("plomero"));
    }

    #[test]
    fn test_from_json_rejects_malformed_tables() {
        assert!(matches!(
            SynonymTable::from_json(&json!(null)),
            Err(InputError::InvalidSynonymTable(_))
        ));
        assert!(matches!(
            SynonymTable::from_json(&json!({"plomero": "caños"})),
            Err(InputError::InvalidSynonymTable(_))
        ));
        assert!(matches!(
            SynonymTable::from_json(&json!({"plomero": [1, 2]})),
            Err(InputError::InvalidSynonymTable(_))
        ));
    }
}
