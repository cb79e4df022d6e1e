//! Integer, big-integer, bitwise and floating point workloads.

use std::hint::black_box;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    error::{RegistrationError, WorkloadError},
    registry::RegistryBuilder,
    workload::discard,
};

/// Exclusive upper bound of the factorial product, i.e. `factorial()` is `999!`.
pub const FACTORIAL_LIMIT: u32 = 1000;

pub const BIG_FIRST: u128 = 1_003_423_219_473_912_740_938;
pub const BIG_SECOND: u128 = 31_439_740_931_748_932_714_789_571_894;
pub const GCD_SECOND: u128 = 31_439_740_931_748_932_714_789_571_893;

pub const BIT_FIRST: u32 = 0x1234_abcd;
pub const BIT_SECOND: u32 = 0xabcd_1234;

pub const FLOAT_FIRST: f64 = 1.12345678;
pub const FLOAT_SECOND: f64 = 3.1415926;

/// Sum of `0..iterations`.
pub fn int_for_loop_sum(iterations: usize) -> u128 {
    let mut sum: u128 = 0;
    for i in 0..black_box(iterations) {
        sum += i as u128;
    }
    sum
}

/// Two big accumulators are bumped by one each step and their sum is added to a running total.
pub fn big_decimal_add(iterations: usize) -> BigUint {
    let mut sum = BigUint::zero();
    let mut first = BigUint::from(black_box(BIG_FIRST));
    let mut second = BigUint::from(black_box(BIG_SECOND));
    for _ in 0..iterations {
        first += 1u32;
        second += 1u32;
        sum += &first + &second;
    }
    sum
}

pub fn factorial() -> BigUint {
    let mut product = BigUint::one();
    for i in 1..black_box(FACTORIAL_LIMIT) {
        product *= i;
    }
    product
}

/// Recursive Euclidean reduction.
pub fn gcd(first: &BigUint, second: &BigUint) -> Result<BigUint, WorkloadError> {
    if second.is_zero() {
        return Err(WorkloadError::DivisionByZero);
    }
    let rem = first % second;
    if rem.is_zero() {
        Ok(second.clone())
    } else {
        gcd(second, &rem)
    }
}

pub fn fixed_gcd() -> Result<BigUint, WorkloadError> {
    gcd(
        &BigUint::from(black_box(BIG_FIRST)),
        &BigUint::from(black_box(GCD_SECOND)),
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitResults {
    pub and: u32,
    pub or: u32,
    pub xor: u32,
    pub not_first: u32,
    pub not_second: u32,
}

/// Results of the last step. All zero when `iterations` is zero.
pub fn bit_operation(iterations: usize) -> BitResults {
    let first = black_box(BIT_FIRST);
    let second = black_box(BIT_SECOND);
    let mut result = BitResults::default();
    for _ in 0..iterations {
        result = black_box(BitResults {
            and: first & second,
            or: first | second,
            xor: first ^ second,
            not_first: !first,
            not_second: !second,
        });
    }
    result
}

pub fn float_for_loop_sum(iterations: usize) -> f64 {
    let mut sum = 0.0;
    let mut base = black_box(1.0);
    for _ in 0..iterations {
        sum += base;
        base += 1.0;
    }
    sum
}

pub fn float_multiply(iterations: usize) -> f64 {
    let first = black_box(FLOAT_FIRST);
    let second = black_box(FLOAT_SECOND);
    let mut sum = 0.0;
    for _ in 0..iterations {
        sum += first * second;
    }
    sum
}

pub fn float_divide(iterations: usize) -> f64 {
    let first = black_box(FLOAT_FIRST);
    let second = black_box(FLOAT_SECOND);
    let mut sum = 0.0;
    for _ in 0..iterations {
        sum += first / second;
    }
    sum
}

pub fn register(builder: &mut RegistryBuilder, loop_count: usize) -> Result<(), RegistrationError> {
    builder
        .register("int_for_loop_sum", move || {
            discard(int_for_loop_sum(loop_count))
        })?
        .register("big_decimal_add", move || discard(big_decimal_add(loop_count)))?
        .register("factorial", || discard(factorial()))?
        .register("gcd", || discard(fixed_gcd()?))?
        .register("bit_operation", move || discard(bit_operation(loop_count)))?
        .register("float_for_loop_sum", move || {
            discard(float_for_loop_sum(loop_count))
        })?
        .register("float_multiply", move || discard(float_multiply(loop_count)))?
        .register("float_divide", move || discard(float_divide(loop_count)))?;
    Ok(())
}
