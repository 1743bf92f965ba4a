// Copyright (C) 2025 The holyland-phone Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Raised when a predicate is requested by a name that doesn't resolve to
/// any [`crate::NumberCategory`], e.g. `isNotValidd`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Call to undefined method PhoneNumber::{0}()")]
pub struct UndefinedPredicateError(pub String);
