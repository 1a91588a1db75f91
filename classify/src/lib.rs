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

//! Classification of floating-point values into NaN, positive or negative infinity and finite.
//!
//! The generic predicates work for every [`FloatLimits`] type at run time. The same algorithms
//! are available as `const fn` in [`const_f32`] and [`const_f64`] for constant evaluation.
//! Variadic forms are provided as macros (`any_nan!(a, b, c)`) and over iterators
//! ([`any_nan`], [`ClassifyIterator`]).

pub mod limits;
pub mod nan;
pub mod inf;
pub mod finite;
pub mod class;
pub mod consts;
pub mod ext;
pub mod guard;
pub mod errors;
mod variadic;

pub use limits::{infinity_of, neg_infinity_of, FloatLimits};
#[cfg(feature = "num")]
pub use limits::NumFloat;
pub use nan::{all_nan, any_nan, is_nan};
pub use inf::{all_inf, all_neginf, all_posinf, any_inf, any_neginf, any_posinf, is_inf, is_neginf, is_posinf};
pub use finite::{all_finite, any_finite, is_finite};
pub use class::{classify, FloatClass};
pub use consts::{const_f32, const_f64};
pub use ext::{ClassifyIterator, FloatClassify};
pub use guard::{ensure_all_finite, ensure_finite, ensure_not_nan};
pub use errors::{GuardResult, NonFiniteError};
