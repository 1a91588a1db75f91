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

use std::ops::Neg;

/// Supplies the infinity sentinel of a floating-point type.
///
/// The predicates of this crate only ever compare against this sentinel and its negation,
/// so any type with a conformant `infinity()` can be classified.
pub trait FloatLimits: Copy + PartialEq + Neg<Output = Self> {
    /// The positive infinity of this type.
    fn infinity() -> Self;
}

macro_rules! impl_float_limits {
    (for float: $($t:ident),*) => {
        $(
            impl FloatLimits for $t {
                #[inline(always)]
                fn infinity() -> Self {
                    $t::INFINITY
                }
            }
        )*
    };
}

impl_float_limits!(for float: f32, f64);

/// Returns the positive infinity of `T`.
#[inline(always)]
pub fn infinity_of<T: FloatLimits>() -> T {
    T::infinity()
}

/// Returns the negative infinity of `T`, always the negated [`FloatLimits::infinity`].
#[inline(always)]
pub fn neg_infinity_of<T: FloatLimits>() -> T {
    -T::infinity()
}

#[cfg(feature = "num")]
pub use num_float::NumFloat;

#[cfg(feature = "num")]
mod num_float {
    use std::ops::Neg;
    use super::FloatLimits;

    /// Lends the infinity of any [`num::Float`] to the predicates.
    #[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
    #[repr(transparent)]
    pub struct NumFloat<T>(pub T);

    impl<T> NumFloat<T> {
        pub fn into_inner(self) -> T {
            self.0
        }
    }

    impl<T: num::Float> Neg for NumFloat<T> {
        type Output = Self;

        #[inline(always)]
        fn neg(self) -> Self::Output {
            Self(self.0.neg())
        }
    }

    impl<T: num::Float> FloatLimits for NumFloat<T> {
        #[inline(always)]
        fn infinity() -> Self {
            Self(T::infinity())
        }
    }

    impl<T> From<T> for NumFloat<T> {
        fn from(value: T) -> Self {
            Self(value)
        }
    }
}
