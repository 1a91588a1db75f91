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

use crate::limits::FloatLimits;

/// Checks if `x` is NaN-valued.
///
/// NaN is the only value that compares unequal to itself, so no bit inspection is needed.
/// Signaling and quiet NaNs are both detected.
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan<T: FloatLimits>(x: T) -> bool {
    x != x
}

/// Checks if any value in `values` is NaN-valued.
///
/// Stops at the first NaN. An empty sequence contains no NaN.
pub fn any_nan<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().any(is_nan)
}

/// Checks if all values in `values` are NaN-valued.
///
/// Stops at the first value that is not NaN. An empty sequence is vacuously all NaN.
pub fn all_nan<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().all(is_nan)
}
