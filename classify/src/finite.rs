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

use crate::inf::is_inf;
use crate::limits::FloatLimits;
use crate::nan::is_nan;

/// Checks if `x` is neither NaN nor an infinity.
///
/// True for every ordinary number, including both zeros and subnormals.
#[inline]
pub fn is_finite<T: FloatLimits>(x: T) -> bool {
    !is_nan(x) && !is_inf(x)
}

/// Checks if any value in `values` is finite.
pub fn any_finite<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().any(is_finite)
}

/// Checks if all values in `values` are finite.
pub fn all_finite<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().all(is_finite)
}
