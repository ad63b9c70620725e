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


use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use comarca_types::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::errors::{ComarcaError, ComarcaResult};

/// Tabular storage holding the directory sheets.
///
/// Sheets are addressed by name and behave like spreadsheet tabs: a header row
/// followed by positional rows that can only be appended.
pub trait SheetStore {
    fn headers(&self, sheet: &str) -> ComarcaResult<Vec<String>>;

    /// All rows of `sheet` keyed by header. Cells past the end of a row read as
    /// empty, cells without a header are named `Unnamed: <index>`.
    fn records(&self, sheet: &str) -> ComarcaResult<Vec<Record>>;

    fn append_row(&self, sheet: &str, row: Vec<FieldValue>) -> ComarcaResult<()>;

    /// Creates `sheet` with the given header row unless it already exists
    fn ensure_sheet(&self, sheet: &str, headers: &[&str]) -> ComarcaResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SheetFile {
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl SheetFile {
    fn record(&self, row: &[Value]) -> ComarcaResult<Record> {
        let width = self.headers.len().max(row.len());
        let mut fields = Vec::with_capacity(width);
        for index in 0..width {
            let column = match self.headers.get(index) {
                Some(header) if !header.trim().is_empty() => header.clone(),
                _ => format!("Unnamed: {index}"),
            };
            let value = match row.get(index) {
                Some(cell) => FieldValue::from_json(&column, cell)?,
                None => FieldValue::Empty,
            };
            fields.push((column, value));
        }
        Ok(Record::new(fields))
    }
}

/// A [`SheetStore`] keeping every sheet as `<root>/<sheet>.json`
#[derive(Clone, Debug)]
pub struct JsonSheetStore {
    root: PathBuf,
}

impl JsonSheetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, sheet: &str) -> ComarcaResult<PathBuf> {
        if sheet.trim().is_empty() || sheet.contains(['/', '\\']) || sheet.starts_with('.') {
            return Err(ComarcaError::InvalidRequest(format!("Invalid sheet name '{sheet}'")));
        }
        Ok(self.root.join(format!("{sheet}.json")))
    }

    fn read(&self, sheet: &str) -> ComarcaResult<SheetFile> {
        let file = match File::open(self.path(sheet)?) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(ComarcaError::NotFound(format!("sheet '{sheet}'"))),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn write(&self, sheet: &str, contents: &SheetFile) -> ComarcaResult<()> {
        let path = self.path(sheet)?;
        let staging = path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&staging)?);
        serde_json::to_writer_pretty(&mut writer, contents)?;
        writer.flush()?;
        std::fs::rename(staging, path)?;
        Ok(())
    }
}

impl SheetStore for JsonSheetStore {
    fn headers(&self, sheet: &str) -> ComarcaResult<Vec<String>> {
        Ok(self.read(sheet)?.headers)
    }

    fn records(&self, sheet: &str) -> ComarcaResult<Vec<Record>> {
        let contents = self.read(sheet)?;
        contents.rows.iter().map(|row| contents.record(row)).collect()
    }

    #[instrument(name = "store::append_row", skip(self, row))]
    fn append_row(&self, sheet: &str, row: Vec<FieldValue>) -> ComarcaResult<()> {
        let mut contents = self.read(sheet)?;
        contents.rows.push(row.iter().map(FieldValue::to_json).collect());
        self.write(sheet, &contents)?;
        info!(rows = contents.rows.len(), "Row appended");
        Ok(())
    }

    fn ensure_sheet(&self, sheet: &str, headers: &[&str]) -> ComarcaResult<()> {
        match self.read(sheet) {
            Ok(_) => Ok(()),
            Err(ComarcaError::NotFound(_)) => {
                std::fs::create_dir_all(&self.root)?;
                let contents = SheetFile {
                    headers: headers.iter().map(|header| header.to_string()).collect(),
                    rows: vec![],
                };
                self.write(sheet, &contents)?;
                info!(sheet, "Sheet created");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
