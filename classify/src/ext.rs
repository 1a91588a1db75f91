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

use sealed::sealed;
use crate::class::{classify, FloatClass};
use crate::finite::is_finite;
use crate::limits::FloatLimits;

/// Classification methods on single values.
///
/// `is_nan` and `is_finite` are inherent on the primitives and would shadow trait methods.
#[sealed]
pub trait FloatClassify: FloatLimits {
    /// Checks if `self` is positive infinity.
    fn is_posinf(self) -> bool;
    /// Checks if `self` is negative infinity.
    fn is_neginf(self) -> bool;
    /// Returns the class of `self`.
    fn float_class(self) -> FloatClass;
    /// Checks if `self` is NaN or an infinity.
    fn is_special_value(self) -> bool;
}

#[sealed]
impl<T: FloatLimits> FloatClassify for T {
    #[inline]
    fn is_posinf(self) -> bool {
        crate::inf::is_posinf(self)
    }

    #[inline]
    fn is_neginf(self) -> bool {
        crate::inf::is_neginf(self)
    }

    #[inline]
    fn float_class(self) -> FloatClass {
        classify(self)
    }

    #[inline]
    fn is_special_value(self) -> bool {
        !is_finite(self)
    }
}

/// Allows to classify the items of an iterator.
///
/// All methods consume the iterator from the left and stop at the first decisive item.
pub trait ClassifyIterator: Iterator {
    fn any_nan(self) -> bool;
    fn all_nan(self) -> bool;
    fn any_neginf(self) -> bool;
    fn all_neginf(self) -> bool;
    fn any_posinf(self) -> bool;
    fn all_posinf(self) -> bool;
    fn any_inf(self) -> bool;
    fn all_inf(self) -> bool;
    fn any_finite(self) -> bool;
    fn all_finite(self) -> bool;

    /// Returns the index and value of the first item that is NaN or an infinity.
    fn first_non_finite(self) -> Option<(usize, Self::Item)>;
}

macro_rules! delegate_classify {
    ($($name: ident),+) => {
        $(
            #[inline]
            fn $name(self) -> bool {
                crate::$name(self)
            }
        )+
    };
}

impl<I> ClassifyIterator for I
where
    Self: Sized,
    I: Iterator,
    I::Item: FloatLimits,
{
    delegate_classify!(
        any_nan, all_nan,
        any_neginf, all_neginf,
        any_posinf, all_posinf,
        any_inf, all_inf,
        any_finite, all_finite
    );

    fn first_non_finite(self) -> Option<(usize, Self::Item)> {
        self.enumerate().find(|(_, value)| !is_finite(*value))
    }
}
