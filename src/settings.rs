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


use std::collections::HashMap;
use std::path::PathBuf;

use comarca_search::{DEFAULT_SYNONYMS, EntryColumns, PhoneFormat, SynonymTable, normalize};
use config::{Config, Environment};
use serde::Deserialize;

use crate::errors::{ComarcaError, ComarcaResult};

/// What to do with sheets that have no name column
#[derive(Clone, Copy, Deserialize, Debug, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Rename the first column to the name column
    #[default]
    FirstColumn,
    /// Add a name column holding the placeholder name
    Placeholder,
}

/// A category users browse and the sheet holding its entries
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct CategorySheet {
    pub name: String,
    pub sheet: String,
}

impl CategorySheet {
    fn same_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sheet: name.to_string(),
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
#[serde(default)]
pub struct DirectorySettings {
    pub categories: Vec<CategorySheet>,
    #[serde(flatten)]
    pub columns: EntryColumns,
    pub placeholder_name: String,
    pub name_policy: NamePolicy,
    pub ratings_sheet: String,
    pub submissions_sheet: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            categories: ["Prov. de Servicios", "Actividades", "Comestibles"]
                .into_iter()
                .map(CategorySheet::same_name)
                .collect(),
            columns: EntryColumns::default(),
            placeholder_name: "N/N".to_string(),
            name_policy: NamePolicy::default(),
            ratings_sheet: "Valoraciones".to_string(),
            submissions_sheet: "Contactos enviados".to_string(),
        }
    }
}

impl DirectorySettings {
    /// Category matching `name`, ignoring case and accents
    pub fn category(&self, name: &str) -> Option<&CategorySheet> {
        let wanted = normalize(name);
        self.categories.iter().find(|category| normalize(&category.name) == wanted)
    }
}

#[derive(Clone, Deserialize, Debug, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Structured,
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default)]
pub struct TelemetrySettings {
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnvSettings {
    /// Directory holding the exported sheets, one JSON file per sheet
    pub data_dir: PathBuf,

    /// Synonym table replacing the built-in one
    pub synonyms_file: Option<PathBuf>,

    /// Categories, column names and auxiliary sheets
    #[serde(default)]
    pub directory: DirectorySettings,

    /// Numbering plan for phone comparison and links
    #[serde(default)]
    pub phone: PhoneFormat,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl EnvSettings {
    pub fn from_env() -> ComarcaResult<Self> {
        Self::from_config_environment(Environment::default())
    }

    fn from_config_environment(env: Environment) -> ComarcaResult<Self> {
        let config = Config::builder()
            .add_source(env.separator("__"))
            .build()
            .map_err(|e| ComarcaError::InvalidRequest(format!("Invalid settings: {e}")))?;
        config
            .try_deserialize::<Self>()
            .map_err(|e| ComarcaError::InvalidRequest(format!("Invalid settings: {e}")))
    }

    pub fn from_map(vars: HashMap<String, String>) -> ComarcaResult<Self> {
        let env = Environment::default().source(Some(vars));
        Self::from_config_environment(env)
    }

    /// The configured synonym table, or the built-in one
    pub fn synonyms(&self) -> ComarcaResult<SynonymTable> {
        let Some(path) = &self.synonyms_file else {
            return Ok(DEFAULT_SYNONYMS.clone());
        };
        let file = std::fs::File::open(path)?;
        let value: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(SynonymTable::from_json(&value)?)
    }
}
