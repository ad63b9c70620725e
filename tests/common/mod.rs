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

use comarca::settings::DirectorySettings;
use comarca::{Directory, JsonSheetStore, SheetStore};
use comarca_search::{DEFAULT_SYNONYMS, PhoneFormat};
use comarca_types::FieldValue;
use tempfile::TempDir;
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const SERVICES: &str = "Prov. de Servicios";
pub const ACTIVITIES: &str = "Actividades";
pub const GROCERIES: &str = "Comestibles";

pub const SERVICE_HEADERS: [&str; 6] = ["Nombre", "Rubro", "Teléfono", "Zona", "Usuario", "Fecha"];

/// Keeps the temporary data directory alive as long as the directory is used
pub struct TestDirectory {
    pub directory: Directory<JsonSheetStore>,
    pub data_dir: TempDir,
}

pub fn at() -> PrimitiveDateTime {
    datetime!(2024-03-01 18:30)
}

fn text(values: &[&str]) -> Vec<FieldValue> {
    values.iter().map(|value| FieldValue::from(*value)).collect()
}

/// A directory with five services, two activities and a groceries sheet
/// without a name column
pub fn test_directory() -> TestDirectory {
    let data_dir = tempfile::tempdir().unwrap();
    let store = JsonSheetStore::new(data_dir.path());

    store.ensure_sheet(SERVICES, &SERVICE_HEADERS).unwrap();
    for row in [
        ["Juan Pérez", "Plomería", "011 4444-5555", "Barrio Norte", "", ""],
        ["Marta Gómez", "Electricista", "11 5555 6666", "Los Pinos", "", ""],
        ["Hierros Don Luis", "Herrería", "+54 9 11 3333-2222", "Centro", "", ""],
        ["Ana Ruiz", "Jardinería", "", "Los Pinos", "", ""],
        ["Carlos Díaz", "Gasista matriculado", "11 2222 1111", "", "", ""],
    ] {
        store.append_row(SERVICES, text(&row)).unwrap();
    }

    store.ensure_sheet(ACTIVITIES, &["Nombre", "Descripción", "Horario"]).unwrap();
    store
        .append_row(ACTIVITIES, text(&["Yoga en el club", "Clases para adultos", "Martes 18hs"]))
        .unwrap();
    store
        .append_row(ACTIVITIES, text(&["Coro vecinal", "Ensayos abiertos", "Sábados 10hs"]))
        .unwrap();

    store.ensure_sheet(GROCERIES, &["Comercio", "Producto", "Teléfono"]).unwrap();
    store
        .append_row(GROCERIES, vec!["La Espiga".into(), "Pan y facturas".into(), FieldValue::from(2234951234_i64)])
        .unwrap();

    let directory = Directory::new(
        store,
        DirectorySettings::default(),
        PhoneFormat::default(),
        DEFAULT_SYNONYMS.clone(),
    );
    TestDirectory { directory, data_dir }
}
