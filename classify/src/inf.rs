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

/// Checks if `x` is negative infinity.
///
/// Compares against the negated sentinel of `T`, so NaN is never negative infinity.
#[inline]
pub fn is_neginf<T: FloatLimits>(x: T) -> bool {
    x == -T::infinity()
}

/// Checks if `x` is positive infinity.
#[inline]
pub fn is_posinf<T: FloatLimits>(x: T) -> bool {
    x == T::infinity()
}

/// Checks if `x` is either positive or negative infinity.
#[inline]
pub fn is_inf<T: FloatLimits>(x: T) -> bool {
    is_neginf(x) || is_posinf(x)
}

/// Checks if any value in `values` is negative infinity.
pub fn any_neginf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().any(is_neginf)
}

/// Checks if all values in `values` are negative infinity.
pub fn all_neginf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().all(is_neginf)
}

/// Checks if any value in `values` is positive infinity.
pub fn any_posinf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().any(is_posinf)
}

/// Checks if all values in `values` are positive infinity.
pub fn all_posinf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().all(is_posinf)
}

/// Checks if any value in `values` is an infinity of either sign.
///
/// Stops at the first infinity. An empty sequence contains no infinity.
pub fn any_inf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().any(is_inf)
}

/// Checks if all values in `values` are infinities, signs may differ.
///
/// Stops at the first value that is not infinite. An empty sequence is vacuously all infinite.
pub fn all_inf<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    values.into_iter().all(is_inf)
}
