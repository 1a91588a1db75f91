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

use constmath_classify::*;

fn samples_f64() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.5,
        1.0e300,
        -1.0e-300,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::MIN_POSITIVE / 4.0,
        f64::EPSILON,
        f64::NAN,
        -f64::NAN,
        f64::INFINITY - f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ]
}

fn exactly_one_holds<T: FloatLimits + std::fmt::Debug>(x: T) {
    let hits = [is_nan(x), is_posinf(x), is_neginf(x), is_finite(x)]
        .into_iter()
        .filter(|hit| *hit)
        .count();
    assert_eq!(1, hits, "{x:?} fell into {hits} classes");
}

#[test]
fn the_four_classes_are_exclusive_and_exhaustive() {
    for value in samples_f64() {
        exactly_one_holds(value);
        exactly_one_holds(value as f32);
        #[cfg(feature = "num")]
        exactly_one_holds(NumFloat(value));
    }
}

#[test]
fn finite_values_are_neither_nan_nor_infinite() {
    for value in samples_f64().into_iter().filter(|v| v.is_finite()) {
        assert!(is_finite(value));
        assert!(!is_nan(value));
        assert!(!is_inf(value));
    }
}

#[test]
fn predicates_match_the_class() {
    for value in samples_f64() {
        let class = classify(value);
        assert_eq!(class == FloatClass::Nan, is_nan(value));
        assert_eq!(class == FloatClass::PositiveInfinity, is_posinf(value));
        assert_eq!(class == FloatClass::NegativeInfinity, is_neginf(value));
        assert_eq!(class.is_infinite(), is_inf(value));
        assert_eq!(class.is_finite(), is_finite(value));
    }
}

#[test]
fn agrees_with_std_classification() {
    for value in samples_f64() {
        assert_eq!(value.is_nan(), is_nan(value));
        assert_eq!(value.is_infinite(), is_inf(value));
        assert_eq!(value.is_finite(), is_finite(value));
        assert_eq!(value.is_infinite() && value.is_sign_positive(), is_posinf(value));
        assert_eq!(value.is_infinite() && value.is_sign_negative(), is_neginf(value));
    }
}

#[test]
fn repeated_calls_give_the_same_answer() {
    for value in samples_f64() {
        assert_eq!(classify(value), classify(value));
        assert_eq!(is_nan(value), is_nan(value));
        assert_eq!(any_finite([value, value]), any_finite([value, value]));
    }
}

#[test]
fn aggregates_do_not_depend_on_order() {
    let values = [1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -2.0];
    let mut reversed = values;
    reversed.reverse();
    let mut rotated = values;
    rotated.rotate_left(2);

    type Aggregate = fn([f64; 5]) -> bool;
    let aggregates: [Aggregate; 10] = [
        any_nan, all_nan,
        any_neginf, all_neginf,
        any_posinf, all_posinf,
        any_inf, all_inf,
        any_finite, all_finite,
    ];
    for aggregate in aggregates {
        assert_eq!(aggregate(values), aggregate(reversed));
        assert_eq!(aggregate(values), aggregate(rotated));
    }
}

#[test]
fn macros_iterators_and_const_forms_agree() {
    let (a, b, c) = (f64::INFINITY, f64::NAN, 3.0);
    let values = [a, b, c];
    const CONST_VALUES: [f64; 3] = [f64::INFINITY, f64::NAN, 3.0];
    const ANY_FINITE: bool = const_f64::any_finite(&CONST_VALUES);
    const ALL_FINITE: bool = const_f64::all_finite(&CONST_VALUES);

    assert!(any_finite!(a, b, c));
    assert!(any_finite(values));
    assert!(values.into_iter().any_finite());
    assert!(ANY_FINITE);

    assert!(!all_finite!(a, b, c));
    assert!(!all_finite(values));
    assert!(!values.into_iter().all_finite());
    assert!(!ALL_FINITE);

    assert_eq!(any_nan!(a, b, c), const_f64::any_nan(&values));
    assert_eq!(all_inf!(a, b, c), const_f64::all_inf(&values));
}

#[cfg(feature = "num")]
#[test]
fn third_party_floats_through_num() {
    let values = [NumFloat(1.0f32), NumFloat(f32::NAN), NumFloat(f32::NEG_INFINITY)];
    assert!(any_nan(values));
    assert!(any_neginf(values));
    assert!(!all_finite(values));
    assert_eq!(FloatClass::NegativeInfinity, NumFloat(f64::NEG_INFINITY).float_class());
    assert_eq!(Some(1), ensure_all_finite(values).err().and_then(|err| err.position));
}
