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

//! Variadic `any_*!`/`all_*!` forms taking one or more values.
//!
//! Every argument is checked with its own type, so `f32` and `f64` values may be mixed.
//! Evaluation runs left to right and stops at the first decisive result.

#[doc(hidden)]
#[macro_export]
macro_rules! __classify_reduce {
    (|| $pred: path; $x: expr $(,)?) => {
        $pred($x)
    };
    (|| $pred: path; $x: expr, $($rest: expr),+ $(,)?) => {
        ($pred($x) || $crate::__classify_reduce!(|| $pred; $($rest),+))
    };
    (&& $pred: path; $x: expr $(,)?) => {
        $pred($x)
    };
    (&& $pred: path; $x: expr, $($rest: expr),+ $(,)?) => {
        ($pred($x) && $crate::__classify_reduce!(&& $pred; $($rest),+))
    };
}

/// `true` if at least one argument is NaN.
///
/// ```
/// use constmath_classify::any_nan;
/// assert!(any_nan!(1.0, 2.0, f64::NAN));
/// ```
#[macro_export]
macro_rules! any_nan {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(|| $crate::is_nan; $($x),+) };
}

/// `true` if every argument is NaN.
#[macro_export]
macro_rules! all_nan {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(&& $crate::is_nan; $($x),+) };
}

/// `true` if at least one argument is negative infinity.
#[macro_export]
macro_rules! any_neginf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(|| $crate::is_neginf; $($x),+) };
}

/// `true` if every argument is negative infinity.
#[macro_export]
macro_rules! all_neginf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(&& $crate::is_neginf; $($x),+) };
}

/// `true` if at least one argument is positive infinity.
#[macro_export]
macro_rules! any_posinf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(|| $crate::is_posinf; $($x),+) };
}

/// `true` if every argument is positive infinity.
#[macro_export]
macro_rules! all_posinf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(&& $crate::is_posinf; $($x),+) };
}

/// `true` if at least one argument is an infinity of either sign.
#[macro_export]
macro_rules! any_inf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(|| $crate::is_inf; $($x),+) };
}

/// `true` if every argument is an infinity, signs may differ.
#[macro_export]
macro_rules! all_inf {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(&& $crate::is_inf; $($x),+) };
}

/// `true` if at least one argument is finite.
///
/// ```
/// use constmath_classify::{all_finite, any_finite};
/// assert!(any_finite!(f64::INFINITY, f64::NAN, 3.0));
/// assert!(!all_finite!(f64::INFINITY, f64::NAN, 3.0));
/// ```
#[macro_export]
macro_rules! any_finite {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(|| $crate::is_finite; $($x),+) };
}

/// `true` if every argument is finite.
#[macro_export]
macro_rules! all_finite {
    ($($x: expr),+ $(,)?) => { $crate::__classify_reduce!(&& $crate::is_finite; $($x),+) };
}
