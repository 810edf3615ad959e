//! Prints the scaled gamma of a fixed pair of rankings for every weighting scheme,
//! t-norm and aggregator.
//!
//! RUST_LOG=debug cargo run --example compare_presets

use fuzzy_gamma::{gamma_corr, Aggregator, GammaConfig, TNorm, WeightScheme};

fn main() -> Result<(), fuzzy_gamma::GammaError> {
    env_logger::init();

    let ranking_a = [1, 2, 3, 4, 5, 6, 7, 8];
    let ranking_b = [2, 1, 3, 4, 5, 8, 6, 7];

    println!("ranking_a: {:?}", ranking_a);
    println!("ranking_b: {:?}", ranking_b);
    println!();
    println!("{:<16} {:<12} {:<12} {:>10}", "weights", "t-norm", "aggregator", "gamma");

    for scheme in WeightScheme::ALL {
        for tnorm in TNorm::ALL {
            for aggregator in Aggregator::ALL {
                let cfg = GammaConfig::new()
                    .with_weights(scheme)
                    .with_tnorm(tnorm)
                    .with_aggregator(aggregator);
                let value = match gamma_corr(&ranking_a, &ranking_b, &cfg)? {
                    Some(g) => format!("{:.6}", g),
                    None => "undefined".to_string(),
                };
                println!(
                    "{:<16} {:<12} {:<12} {:>10}",
                    scheme.name(),
                    tnorm.name(),
                    aggregator.name(),
                    value
                );
            }
        }
    }

    Ok(())
}
