use calcul_common::config::Config;
use calcul_core::wiring;
use tracing::debug;

use crate::terminal::print;

pub fn compute(cfg: &Config) -> anyhow::Result<()> {
    debug!(source = %cfg.source, "wiring calculator");
    let calculator = wiring::wire(cfg);
    let result = calculator.compute();
    print::result(result);
    Ok(())
}
