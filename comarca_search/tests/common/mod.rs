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


#![allow(dead_code)] // clippy doesn't check for usage in other tests modules

use comarca_types::{FieldValue, Record};

pub fn provider(name: &str, trade: &str, phone: impl Into<FieldValue>, zone: &str) -> Record {
    [
        ("Nombre", FieldValue::from(name)),
        ("Rubro", FieldValue::from(trade)),
        ("Teléfono", phone.into()),
        ("Zona", FieldValue::from(zone)),
    ]
    .into_iter()
    .collect()
}

/// Five rows of the services category, only one of them a blacksmith
pub fn services() -> Vec<Record> {
    vec![
        provider("Juan Pérez", "Plomería", "011 4444-5555", "Barrio Norte"),
        provider("Marta Gómez", "Electricista", 1155556666_i64, "Los Pinos"),
        provider("Hierros Don Luis", "Herrería", "+54 9 11 3333-2222", "Centro"),
        provider("Ana Ruiz", "Jardinería", FieldValue::Empty, "Los Pinos"),
        provider("Carlos Díaz", "Gasista matriculado", "11 2222 1111", ""),
    ]
}

pub fn activity(name: &str, description: &str) -> Record {
    [("Nombre", name), ("Descripción", description)].into_iter().collect()
}
