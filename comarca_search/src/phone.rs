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


use comarca_types::FieldValue;
use serde::Deserialize;

/// Numbering plan used to reduce phone numbers to their national form.
///
/// Defaults to Argentina: `+54 9 11 4444-5555`, `011 4444-5555` and
/// `11 4444 5555` all reduce to `1144445555`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhoneFormat {
    pub country_code: String,
    /// Digit inserted between the country code and the area code for mobiles
    pub mobile_prefix: String,
    /// Length of a national number, without trunk prefix
    pub national_digits: usize,
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            country_code: "54".to_string(),
            mobile_prefix: "9".to_string(),
            national_digits: 10,
        }
    }
}

impl PhoneFormat {
    /// Digits of the national number. Spacing, punctuation, the international
    /// prefix, the country code, the mobile prefix and trunk zeros are dropped.
    /// Values without digits give the empty string.
    pub fn normalize(&self, raw: &str) -> String {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let mut national = digits.strip_prefix("00").unwrap_or(&digits);

        for prefix in [&self.country_code, &self.mobile_prefix] {
            if prefix.is_empty() || national.len() <= self.national_digits {
                continue;
            }
            national = national.strip_prefix(prefix.as_str()).unwrap_or(national);
        }

        national.trim_start_matches('0').to_string()
    }

    pub fn normalize_value(&self, value: &FieldValue) -> String {
        self.normalize(&value.to_string())
    }

    /// Full international number, digits only, as used by messaging links.
    /// `None` when the value holds no number.
    pub fn international(&self, raw: &str) -> Option<String> {
        let national = self.normalize(raw);
        if national.is_empty() {
            return None;
        }
        Some(format!("{}{}{}", self.country_code, self.mobile_prefix, national))
    }
}
