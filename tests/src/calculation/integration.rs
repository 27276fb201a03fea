#![cfg(test)]
use std::sync::Arc;
use std::thread;

use calcul_common::config::Config;
use calcul_common::error::WiringError;
use calcul_common::models::reading::Reading;
use calcul_common::models::source_kind::SourceKind;
use calcul_core::calculator::{Calculator, MULTIPLIER};
use calcul_core::sources::{PrimarySource, SecondarySource};
use calcul_core::wiring;

/// Bind Primary, compute once.
#[test]
fn compute_with_primary() {
    let cfg: Config = Config::new(SourceKind::Primary);
    let calculator: Calculator = wiring::wire(&cfg);

    assert_eq!(calculator.compute(), Reading::new(713.0));
    assert_eq!(calculator.compute().to_string(), "713.0");
}

/// Bind Secondary, compute once.
#[test]
fn compute_with_secondary() {
    let cfg: Config = Config::new(SourceKind::Secondary);
    let calculator: Calculator = wiring::wire(&cfg);

    assert_eq!(calculator.compute(), Reading::new(736.0));
    assert_eq!(calculator.compute().to_string(), "736.0");
}

/// Bind Primary, compute, rebind to Secondary, compute again.
#[test]
fn rebind_between_computations() {
    let mut calculator: Calculator = Calculator::new(Arc::new(PrimarySource));

    let first: Reading = calculator.compute();
    calculator.set_source(Arc::new(SecondarySource));
    let second: Reading = calculator.compute();

    assert_eq!(first.value(), 713.0);
    assert_eq!(second.value(), 736.0);
}

#[test]
fn every_source_scales_by_multiplier() {
    for kind in SourceKind::ALL {
        let source = wiring::data_source(kind);
        let expected: Reading = source.produce_reading().scale(MULTIPLIER);
        let calculator: Calculator = Calculator::new(source);
        assert_eq!(calculator.compute(), expected, "mismatch for {kind}");
    }
}

#[test]
fn unbound_calculator_cannot_be_built() -> anyhow::Result<()> {
    let result = Calculator::builder().build();
    assert!(matches!(result, Err(WiringError::InvalidState)));

    let calculator: Calculator = Calculator::builder()
        .with_source(wiring::data_source("dao2".parse::<SourceKind>()?))
        .build()?;
    assert_eq!(calculator.compute().value(), 736.0);
    Ok(())
}

#[test]
fn shared_calculator_across_threads() {
    let calculator: Arc<Calculator> = Arc::new(wiring::wire(&Config::default()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calculator = calculator.clone();
            thread::spawn(move || calculator.compute())
        })
        .collect();

    for handle in handles {
        let result: Reading = handle.join().expect("worker panicked");
        assert_eq!(result.value(), 713.0);
    }
}
