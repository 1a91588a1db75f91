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

use crate::class::{classify, FloatClass};
use crate::errors::{GuardResult, NonFiniteError};
use crate::ext::ClassifyIterator;
use crate::limits::FloatLimits;

/// Returns `x` if it is finite, fails with the class of `x` otherwise.
pub fn ensure_finite<T: FloatLimits>(x: T) -> GuardResult<T> {
    match classify(x) {
        FloatClass::Finite => Ok(x),
        class => {
            log::debug!("Rejected a {class} value.");
            Err(NonFiniteError::single(x, class))
        }
    }
}

/// Returns `x` if it is not NaN. Infinities pass.
pub fn ensure_not_nan<T: FloatLimits>(x: T) -> GuardResult<T> {
    if crate::nan::is_nan(x) {
        log::debug!("Rejected a NaN value.");
        Err(NonFiniteError::single(x, FloatClass::Nan))
    } else {
        Ok(x)
    }
}

/// Checks that every value in `values` is finite.
///
/// Fails with the first offending value and its position.
pub fn ensure_all_finite<I>(values: I) -> GuardResult<I::Item, ()>
where
    I: IntoIterator,
    I::Item: FloatLimits,
{
    match values.into_iter().first_non_finite() {
        None => Ok(()),
        Some((position, value)) => {
            let class = classify(value);
            log::debug!("Rejected a {class} value in a sequence.");
            log::trace!("The {class} value is at position {position}.");
            Err(NonFiniteError::at(position, value, class))
        }
    }
}
