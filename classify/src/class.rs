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
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use crate::inf::{is_neginf, is_posinf};
use crate::limits::FloatLimits;
use crate::nan::is_nan;

/// The four classes every floating-point value falls into.
///
/// Exactly one class holds for any value.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum FloatClass {
    Nan,
    PositiveInfinity,
    NegativeInfinity,
    Finite,
}

impl FloatClass {
    /// Classifies `x`.
    #[inline]
    pub fn of<T: FloatLimits>(x: T) -> Self {
        classify(x)
    }

    /// NaN or an infinity.
    pub const fn is_special(self) -> bool {
        !self.is_finite()
    }

    /// Neither NaN nor an infinity.
    pub const fn is_finite(self) -> bool {
        matches!(self, FloatClass::Finite)
    }

    /// An infinity of either sign.
    pub const fn is_infinite(self) -> bool {
        matches!(self, FloatClass::PositiveInfinity | FloatClass::NegativeInfinity)
    }
}

/// Returns the class of `x`.
pub fn classify<T: FloatLimits>(x: T) -> FloatClass {
    if is_nan(x) {
        FloatClass::Nan
    } else if is_posinf(x) {
        FloatClass::PositiveInfinity
    } else if is_neginf(x) {
        FloatClass::NegativeInfinity
    } else {
        FloatClass::Finite
    }
}
