// tests/primality_tests.rs

use num::BigInt;
use numcore::{BigIntBackend, Native64, PrimalityOracle, PrimeSieve};

#[cfg(test)]
mod primality_tests {
    use super::*;

    #[test]
    fn test_matches_sieve_below_one_million() {
        let sieve = PrimeSieve::build(1_000_000).unwrap();
        for n in 0..=1_000_000usize {
            assert_eq!(
                PrimalityOracle::is_prime(&Native64::new(n as u64)),
                sieve[n],
                "is_prime and the sieve disagree at {}",
                n
            );
        }
    }

    #[test]
    fn test_known_large_values() {
        // 2^31 - 1 is prime, 2^31 is not
        assert!(PrimalityOracle::is_prime(&Native64::new((1 << 31) - 1)));
        assert!(!PrimalityOracle::is_prime(&Native64::new(1 << 31)));
    }

    #[test]
    fn test_carmichael_numbers_rejected() {
        // Fermat liars for many bases; Miller-Rabin must still reject
        for c in [561u64, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825_265] {
            assert!(
                !PrimalityOracle::is_prime(&Native64::new(c)),
                "Carmichael number {} must be composite",
                c
            );
        }
    }

    #[test]
    fn test_probabilistic_branch_beyond_u64() {
        // Mersenne exponent tour: 2^p - 1 prime for p in {89, 107, 127}
        for p in [89u32, 107, 127] {
            let m = BigIntBackend::new((BigInt::from(1) << p) - 1);
            assert!(
                PrimalityOracle::is_prime(&m),
                "2^{} - 1 is a Mersenne prime",
                p
            );
        }
        // and composite for p in {97, 101} despite prime exponents
        for p in [97u32, 101] {
            let m = BigIntBackend::new((BigInt::from(1) << p) - 1);
            assert!(
                !PrimalityOracle::is_prime(&m),
                "2^{} - 1 is composite",
                p
            );
        }
    }

    #[test]
    fn test_even_big_values_short_circuit() {
        let even = BigIntBackend::new(BigInt::from(1) << 80);
        assert!(!PrimalityOracle::is_prime(&even));
    }

    #[test]
    fn test_confidence_base_still_correct() {
        // a looser base means fewer rounds but identical answers on easy cases
        let m89 = BigIntBackend::new((BigInt::from(1) << 89) - 1);
        assert!(PrimalityOracle::is_prime_with_base(&m89, 2.0));
        let c = BigIntBackend::new((BigInt::from(1) << 89) + 1);
        assert!(!PrimalityOracle::is_prime_with_base(&c, 2.0));
    }

    #[test]
    fn test_next_prime_walk() {
        let mut p = Native64::new(1);
        let expected = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for e in expected {
            p = PrimalityOracle::next_prime(&p).unwrap();
            assert_eq!(p, Native64::new(e));
        }
    }
}
