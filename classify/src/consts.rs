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

//! Per-type `const fn` versions of the predicates.
//!
//! Generic trait calls are not allowed in constant evaluation, so every supported float type
//! gets its own module. The algorithms are the same as the generic ones.

macro_rules! slice_reduce {
    (any $values: ident, $pred: ident) => {{
        let mut i = 0;
        while i < $values.len() {
            if $pred($values[i]) {
                return true;
            }
            i += 1;
        }
        false
    }};
    (all $values: ident, $pred: ident) => {{
        let mut i = 0;
        while i < $values.len() {
            if !$pred($values[i]) {
                return false;
            }
            i += 1;
        }
        true
    }};
}

macro_rules! impl_const_predicates {
    (@slices $t: ident: $($name: ident),+) => {
        $(
            paste::paste! {
                #[doc = "Checks if any value in `values` satisfies [`is_" $name "`]."]
                pub const fn [<any_ $name>](values: &[$t]) -> bool {
                    slice_reduce!(any values, [<is_ $name>])
                }

                #[doc = "Checks if all values in `values` satisfy [`is_" $name "`]."]
                pub const fn [<all_ $name>](values: &[$t]) -> bool {
                    slice_reduce!(all values, [<is_ $name>])
                }
            }
        )+
    };
    ($($t: ident),+) => {
        $(
            paste::paste! {
                #[doc = "Const-evaluable predicates for `" $t "`."]
                pub mod [<const_ $t>] {
                    use crate::class::FloatClass;

                    /// Checks if `x` is NaN-valued.
                    #[allow(clippy::eq_op)]
                    pub const fn is_nan(x: $t) -> bool {
                        x != x
                    }

                    /// Checks if `x` is negative infinity.
                    pub const fn is_neginf(x: $t) -> bool {
                        x == -$t::INFINITY
                    }

                    /// Checks if `x` is positive infinity.
                    pub const fn is_posinf(x: $t) -> bool {
                        x == $t::INFINITY
                    }

                    /// Checks if `x` is an infinity of either sign.
                    pub const fn is_inf(x: $t) -> bool {
                        is_neginf(x) || is_posinf(x)
                    }

                    /// Checks if `x` is neither NaN nor an infinity.
                    pub const fn is_finite(x: $t) -> bool {
                        !is_nan(x) && !is_inf(x)
                    }

                    /// Returns the class of `x`.
                    pub const fn classify(x: $t) -> FloatClass {
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

                    impl_const_predicates!(@slices $t: nan, neginf, posinf, inf, finite);
                }
            }
        )+
    };
}

impl_const_predicates!(f32, f64);
