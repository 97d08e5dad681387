// tests/integer_math_tests.rs

use num::BigInt;
use numcore::{
    BigIntBackend, BinaryInteger, FactorialEngine, Factorizer, GCD, MathError, ModArith,
    Native128, Native64, PrimeSieve, RootExtractor,
};

#[cfg(test)]
mod integer_math_tests {
    use super::*;

    fn n64(v: u64) -> Native64 {
        Native64::new(v)
    }

    #[test]
    fn test_factorial_concrete_values() {
        let f20: Native64 = FactorialEngine::factorial(20).unwrap();
        assert_eq!(
            f20,
            n64(2_432_902_008_176_640_000),
            "20! must match the known constant"
        );

        let f0: Native64 = FactorialEngine::factorial(0).unwrap();
        assert_eq!(f0, n64(1), "0! is 1");
    }

    #[test]
    fn test_factorial_tiers_agree_across_backends() {
        // 25! fits a u128 but not a u64; both wide backends must agree
        let via_128: Native128 = FactorialEngine::factorial(25).unwrap();
        let via_big: BigIntBackend = FactorialEngine::factorial(25).unwrap();
        assert_eq!(via_128.to_bigint(), via_big.to_bigint());

        let overflowed: Result<Native64, MathError> = FactorialEngine::factorial(25);
        assert_eq!(overflowed, Err(MathError::Overflow));
    }

    #[test]
    fn test_gcd_and_bezout() {
        assert_eq!(GCD::find_gcd_pair(&n64(48), &n64(18)), n64(6));

        let (g, x, y) = GCD::extended_gcd(&n64(240), &n64(46)).unwrap();
        assert_eq!(g, n64(2));
        assert_eq!(
            BigInt::from(240) * &x + BigInt::from(46) * &y,
            BigInt::from(2),
            "Bezout identity must hold"
        );
    }

    #[test]
    fn test_prime_factors_360() {
        let factors: Vec<u64> = Factorizer::prime_factors(&n64(360))
            .unwrap()
            .into_iter()
            .map(|f| f.value())
            .collect();
        assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
    }

    #[test]
    fn test_divisor_summary_aliquot_invariant() {
        for n in 1..=500u64 {
            let s = Factorizer::divisor_summary(&n64(n)).unwrap();
            assert_eq!(
                s.aliquot_sum.value(),
                s.sum.value() - n,
                "aliquot sum must equal sigma_1 - n for n = {}",
                n
            );
        }
    }

    #[test]
    fn test_integer_root_concrete_and_bracket() {
        assert_eq!(
            RootExtractor::integer_root_n(&n64(1000), 3).unwrap(),
            n64(10)
        );

        for value in [0u64, 1, 5, 100, 12345, 999_999_937] {
            for n in 1..=5u32 {
                let root = RootExtractor::integer_root_n(&n64(value), n).unwrap().value();
                let lower = root.checked_pow(n).unwrap();
                assert!(lower <= value, "root^n must not exceed value");
                if let Some(upper) = (root + 1).checked_pow(n) {
                    assert!(upper > value, "(root+1)^n must exceed value");
                }
            }
        }
    }

    #[test]
    fn test_modular_identities() {
        assert_eq!(ModArith::mod_inv(&n64(4), &n64(7)).unwrap(), n64(2));
        assert_eq!(ModArith::mod_inv(&n64(8), &n64(11)).unwrap(), n64(7));

        // a^e mod 1 = 0 for any a, e
        for (a, e) in [(0u64, 0u64), (5, 3), (1000, 1000)] {
            assert_eq!(
                ModArith::mod_pow(&n64(a), &n64(e), &n64(1)).unwrap(),
                n64(0)
            );
        }

        // Fermat: a^(p-1) = 1 mod p for prime p and a not divisible by p
        let p = n64(101);
        for a in [2u64, 3, 50, 100] {
            assert_eq!(
                ModArith::mod_pow(&n64(a), &n64(100), &p).unwrap(),
                n64(1),
                "Fermat's little theorem must hold for a = {}",
                a
            );
        }
    }

    #[test]
    fn test_sieve_agrees_with_factorizer() {
        let sieve = PrimeSieve::build(2000).unwrap();
        for i in 2..=2000usize {
            let factors = Factorizer::prime_factors(&n64(i as u64)).unwrap();
            assert_eq!(
                sieve[i],
                factors.len() == 1,
                "sieve and factorizer disagree at {}",
                i
            );
        }
    }

    #[test]
    fn test_generic_consistency_across_backends() {
        // the same computation through every backend must agree
        let a64 = GCD::find_gcd_pair(&n64(987_654_321), &n64(123_456_789));
        let a128 = GCD::find_gcd_pair(
            &Native128::new(987_654_321),
            &Native128::new(123_456_789),
        );
        let abig = GCD::find_gcd_pair(
            &BigIntBackend::from_u64(987_654_321).unwrap(),
            &BigIntBackend::from_u64(123_456_789).unwrap(),
        );
        assert_eq!(a64.to_bigint(), a128.to_bigint());
        assert_eq!(a64.to_bigint(), abig.to_bigint());
    }

    #[test]
    fn test_domain_errors_are_immediate() {
        assert!(matches!(
            FactorialEngine::factorial::<Native64>(-5),
            Err(MathError::Domain(_))
        ));
        assert!(matches!(
            Factorizer::prime_factors(&n64(0)),
            Err(MathError::Domain(_))
        ));
        assert!(matches!(
            RootExtractor::integer_root_n(&n64(10), 0),
            Err(MathError::Domain(_))
        ));
        assert!(matches!(
            ModArith::mod_mul(&n64(1), &n64(1), &n64(0)),
            Err(MathError::Domain(_))
        ));
    }
}
