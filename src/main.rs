// src/main.rs

use log::{info, warn};
use env_logger::Env;
use num::BigInt;

use numcore::config::CoreConfig;
use numcore::{
    BigIntBackend, BinaryInteger, FactorialEngine, Factorizer, GCD, ModArith, Native64,
    PrimalityOracle, PrimeSieve, RootExtractor,
};

fn main() {
    let config = match CoreConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config load failed ({}), using defaults", e);
            CoreConfig::default()
        }
    };

    let env = Env::default()
        .filter_or("NUMCORE_LOG_LEVEL", config.log_level.clone())
        .write_style_or("NUMCORE_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    info!("numcore demo ({} worker threads)", config.effective_threads());

    match demo(&config) {
        Ok(()) => info!("demo finished"),
        Err(e) => warn!("demo aborted: {}", e),
    }
}

fn demo(config: &CoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let primes = PrimeSieve::primes_up_to(100.min(config.max_sieve_limit))?;
    info!("primes up to 100: {:?}", primes);

    let n = Native64::new(360);
    let factors = Factorizer::prime_factors(&n)?;
    info!("prime factors of 360: {:?}", factors);

    let summary = Factorizer::divisor_summary(&n)?;
    info!(
        "360 has {} divisors summing to {} (aliquot {})",
        summary.count, summary.sum, summary.aliquot_sum
    );

    let f20: Native64 = FactorialEngine::factorial(20)?;
    info!("20! = {}", f20);
    let f100: BigIntBackend = FactorialEngine::factorial(100)?;
    info!("100! has {} bits", f100.bits());

    let root = RootExtractor::integer_root_n(&Native64::new(1000), 3)?;
    info!("cube root of 1000 = {}", root);

    let g = GCD::find_gcd_pair(&Native64::new(48), &Native64::new(18));
    info!("gcd(48, 18) = {}", g);

    let inv = ModArith::mod_inv(&Native64::new(8), &Native64::new(11))?;
    info!("8^-1 mod 11 = {}", inv);

    let m89 = BigIntBackend::new((BigInt::from(1) << 89) - 1);
    let is_prime =
        PrimalityOracle::is_prime_with_base(&m89, config.primality.confidence_base);
    info!("2^89 - 1 prime? {}", is_prime);

    Ok(())
}
