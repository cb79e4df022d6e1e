use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use primbench::{
    suites::arithmetic::{self, BitResults, BIG_FIRST, BIG_SECOND, GCD_SECOND},
    WorkloadError,
};

const LOOP_COUNT: usize = 100_000;

#[test]
fn test_int_for_loop_sum() {
    assert_eq!(arithmetic::int_for_loop_sum(LOOP_COUNT), 4_999_950_000);
    // No state carried over between calls
    assert_eq!(arithmetic::int_for_loop_sum(LOOP_COUNT), 4_999_950_000);
    assert_eq!(arithmetic::int_for_loop_sum(0), 0);
}

#[test]
fn test_big_decimal_add() -> anyhow::Result<()> {
    let sum = arithmetic::big_decimal_add(LOOP_COUNT);
    assert_eq!(
        sum,
        "3143974193517215218870241283300000".parse::<BigUint>()?
    );
    // n * (a + b) + n * (n + 1)
    let n = BigUint::from(LOOP_COUNT);
    let expected = &n * (BigUint::from(BIG_FIRST) + BigUint::from(BIG_SECOND)) + &n * (&n + 1u32);
    assert_eq!(sum, expected);
    assert!(sum > BigUint::from(u64::MAX));
    Ok(())
}

#[test]
fn test_factorial() {
    let product = arithmetic::factorial();
    let digits = product.to_string();
    assert_eq!(digits.len(), 2565);
    assert!(digits.starts_with("402387260077093773543702433923"));
    assert_eq!(digits.len() - digits.trim_end_matches('0').len(), 246);
    let expected = (1..=999u32).rev().fold(BigUint::one(), |acc, i| acc * i);
    assert_eq!(product, expected);
    assert_eq!(arithmetic::factorial(), product);
}

#[test]
fn test_fixed_gcd() -> anyhow::Result<()> {
    let first = BigUint::from(BIG_FIRST);
    let second = BigUint::from(GCD_SECOND);
    let result = arithmetic::fixed_gcd()?;
    assert_eq!(result, first.gcd(&second));
    assert_eq!(result, BigUint::one());
    Ok(())
}

#[test]
fn test_gcd() -> anyhow::Result<()> {
    let gcd = |a: u128, b: u128| arithmetic::gcd(&BigUint::from(a), &BigUint::from(b));
    assert_eq!(gcd(48, 18)?, BigUint::from(6u32));
    assert_eq!(gcd(18, 48)?, BigUint::from(6u32));
    assert_eq!(gcd(0, 7)?, BigUint::from(7u32));
    let a = BigUint::from(BIG_FIRST) * 6u32;
    let b = BigUint::from(BIG_FIRST) * 10u32;
    assert_eq!(arithmetic::gcd(&a, &b)?, a.gcd(&b));
    assert_eq!(arithmetic::gcd(&a, &b)?, BigUint::from(BIG_FIRST) * 2u32);
    Ok(())
}

#[test]
fn test_gcd_division_by_zero() {
    let zero = BigUint::from(0u32);
    let result = arithmetic::gcd(&BigUint::from(5u32), &zero);
    assert_eq!(result, Err(WorkloadError::DivisionByZero));
}

#[test]
fn test_bit_operation() {
    assert_eq!(
        arithmetic::bit_operation(LOOP_COUNT),
        BitResults {
            and: 0x0204_0204,
            or: 0xbbfd_bbfd,
            xor: 0xb9f9_b9f9,
            not_first: 0xedcb_5432,
            not_second: 0x5432_edcb,
        }
    );
    assert_eq!(arithmetic::bit_operation(0), BitResults::default());
}

#[test]
fn test_float_for_loop_sum() {
    assert_eq!(arithmetic::float_for_loop_sum(LOOP_COUNT), 5_000_050_000.0);
    assert_eq!(arithmetic::float_for_loop_sum(0), 0.0);
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        ((actual - expected) / expected).abs() < 1e-9,
        "{actual} is not close to {expected}"
    );
}

#[test]
fn test_float_multiply() {
    assert_close(arithmetic::float_multiply(LOOP_COUNT), 352944.3506463078);
}

#[test]
fn test_float_divide() {
    assert_close(arithmetic::float_divide(LOOP_COUNT), 35760.7405873632);
}
