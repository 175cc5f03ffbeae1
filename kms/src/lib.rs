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

//! Getting-started samples for Cloud KMS: key ring and crypto key
//! administration plus symmetric encrypt/decrypt.

pub mod crypto_key;
pub mod decrypt_symmetric;
pub mod encrypt_symmetric;
pub mod key_ring;
