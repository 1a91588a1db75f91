//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::class::FloatClass;

/// A value that was expected to be finite was NaN or an infinity.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{}Expected a finite value but got {value:?} ({class})!", .position.map(|v| format!("At position {v}: ")).unwrap_or_default())]
pub struct NonFiniteError<T> {
    /// The rejected value.
    pub value: T,
    /// The class of the rejected value, never [`FloatClass::Finite`].
    pub class: FloatClass,
    /// The index of the value if it was part of a sequence.
    pub position: Option<usize>,
}

impl<T> NonFiniteError<T> {
    pub fn new(value: T, class: FloatClass, position: Option<usize>) -> Self {
        Self { value, class, position }
    }

    pub fn single(value: T, class: FloatClass) -> Self {
        Self::new(value, class, None)
    }

    pub fn at(position: usize, value: T, class: FloatClass) -> Self {
        Self::new(value, class, Some(position))
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// The result of a guard.
pub type GuardResult<T, R = T> = Result<R, NonFiniteError<T>>;
