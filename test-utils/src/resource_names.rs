// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helper functions and types to generate random resource names.

use rand::{
    Rng,
    distr::{Alphanumeric, Distribution},
};

/// A common prefix for resource ids.
///
/// Where possible, we use this prefix for randomly generated resource ids,
/// so the stale-resource sweeps can recognize leftovers from earlier runs.
pub const PREFIX: &str = "rust-samples-";

const DATASET_ID_LENGTH: usize = 48;

const KEY_ID_LENGTH: usize = 48;

/// Resource ids that accept mixed-case alphanumeric characters.
const CHANNEL_ID_LENGTH: usize = 32;

/// Generate a random BigQuery dataset id. Dataset ids accept underscores but
/// not dashes; the prefix is adjusted accordingly.
pub fn random_dataset_id() -> String {
    let prefix = PREFIX.replace('-', "_");
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DATASET_ID_LENGTH - prefix.len())
        .map(char::from)
        .collect();
    format!("{prefix}{id}")
}

/// Generate a random KMS key ring or crypto key id.
pub fn random_key_id() -> String {
    let id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_ID_LENGTH - PREFIX.len())
        .map(char::from)
        .collect();
    format!("{PREFIX}{id}")
}

/// Generate a random id for services that reject uppercase characters, such
/// as Live Stream channels and inputs or Transcoder job templates.
pub fn random_lowercase_id() -> String {
    let id = LowercaseAlphanumeric.random_string(CHANNEL_ID_LENGTH - PREFIX.len());
    format!("{PREFIX}{id}")
}

const LOWERCASE_ALPHANUMERIC_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sample a `u8`, uniformly distributed over ASCII lowercase letters and numbers: a-z and 0-9.
///
/// # Example
/// ```
/// use samples_test_utils::resource_names::LowercaseAlphanumeric;
/// let got: String = LowercaseAlphanumeric.random_string(32);
/// assert_eq!(got.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseAlphanumeric;

impl LowercaseAlphanumeric {
    /// Create a string with `n` characters from the character set.
    pub fn random_string(&self, n: usize) -> String {
        rand::rng()
            .sample_iter(self)
            .take(n)
            .map(char::from)
            .collect()
    }
}

impl Distribution<u8> for LowercaseAlphanumeric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let index = rng.random_range(0..LOWERCASE_ALPHANUMERIC_CHARSET.len());
        LOWERCASE_ALPHANUMERIC_CHARSET[index]
    }
}
