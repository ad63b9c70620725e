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


use comarca_types::InputError;
use thiserror::Error;

pub type ComarcaResult<T> = Result<T, ComarcaError>;

/// Error type for comarca. The idea is not to be exhaustive, but just include
/// enough variants to tell user mistakes apart from broken data or I/O
#[derive(Error, Debug)]
pub enum ComarcaError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl ComarcaError {
    pub fn invalid(message: &str) -> Self {
        Self::InvalidRequest(message.to_string())
    }

    pub fn not_found(what: &str) -> Self {
        Self::NotFound(what.to_string())
    }
}
