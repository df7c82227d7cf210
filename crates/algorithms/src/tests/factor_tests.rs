use super::*;

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn sixty_factors_into_two_two_three_five() {
    let result = factorize(60).expect("factorize");
    assert_eq!(result.factors, vec![2, 2, 3, 5]);
    assert_eq!(
        result.steps,
        vec![
            FactorStep::Divided {
                remaining: 60,
                factor: 2,
                quotient: 30
            },
            FactorStep::Divided {
                remaining: 30,
                factor: 2,
                quotient: 15
            },
            FactorStep::Divided {
                remaining: 15,
                factor: 3,
                quotient: 5
            },
            FactorStep::RemainingPrime { value: 5 },
        ]
    );
}

#[test]
fn repeated_odd_factors_are_divided_out_fully() {
    assert_eq!(factorize(45).expect("45").factors, vec![3, 3, 5]);
    assert_eq!(factorize(343).expect("343").factors, vec![7, 7, 7]);
}

#[test]
fn primes_come_back_as_a_single_remaining_step() {
    let result = factorize(13).expect("13");
    assert_eq!(result.factors, vec![13]);
    assert_eq!(result.steps, vec![FactorStep::RemainingPrime { value: 13 }]);

    let result = factorize(2).expect("2");
    assert_eq!(result.factors, vec![2]);
    assert!(matches!(result.steps[..], [FactorStep::Divided { factor: 2, .. }]));
}

#[test]
fn factors_multiply_back_are_prime_and_ascending() {
    for n in 2..5000u64 {
        let result = factorize(n).expect("factorize");
        assert_eq!(result.factors.iter().product::<u64>(), n, "n = {n}");
        assert!(result.factors.iter().all(|f| is_prime(*f)), "n = {n}");
        assert!(result.factors.windows(2).all(|w| w[0] <= w[1]), "n = {n}");
        let traced: Vec<u64> = result.steps.iter().map(FactorStep::factor).collect();
        assert_eq!(traced, result.factors);
    }
}

#[test]
fn product_of_two_six_digit_primes() {
    let n = 999_983u64 * 1_000_003;
    let result = factorize(n).expect("factorize");
    assert_eq!(result.factors, vec![999_983, 1_000_003]);
}

#[test]
fn one_zero_and_text_are_rejected() {
    for raw in ["1", "0", "-12"] {
        let err = factorize_input(raw).expect_err("out of domain");
        assert_eq!(err.code, ErrorCode::OutOfDomain, "input {raw}");
        assert_eq!(err.message, "Error: enter an integer greater than 1.");
    }
    let err = factorize_input("sixty").expect_err("text");
    assert_eq!(err.code, ErrorCode::NotNumeric);
}

#[test]
fn values_above_i64_are_factorized() {
    let result = factorize_input("9223372036854775808").expect("2^63");
    assert_eq!(result.factors, vec![2; 63]);

    let result = factorize_input("18446744073709551615").expect("u64::MAX");
    assert_eq!(
        result.factors,
        vec![3, 5, 17, 257, 641, 65_537, 6_700_417]
    );
}

#[test]
fn numbers_past_u64_report_too_large() {
    let err = factorize_input("18446744073709551616").expect_err("overflow");
    assert_eq!(err.code, ErrorCode::TooLarge);
    assert_eq!(err.message, "Error: the number is too large.");
}
