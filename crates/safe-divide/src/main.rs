//! safe-divide: divides two numbers, reporting division by zero as an empty result.

mod config;
mod logging;

use std::cell::RefCell;

use anyhow::Result;
use optional::Optional;

use crate::config::SafeDivideConfig;

fn safe_divide(a: f64, b: f64) -> Optional<f64> {
    if b == 0.0 {
        return Optional::empty();
    }
    Optional::of(a / b)
}

fn describe(result: Optional<f64>) -> String {
    let line = RefCell::new(String::new());
    result.if_present_or_else(
        |v| *line.borrow_mut() = format!("Result: {v}"),
        || line.borrow_mut().push_str("Cannot divide by zero"),
    );
    line.into_inner()
}

fn main() -> Result<()> {
    let config = SafeDivideConfig::from_env()?;
    logging::init(config.log_filter());

    let result = safe_divide(config.dividend, config.divisor);
    tracing::debug!(dividend = config.dividend, divisor = config.divisor, %result, "divided");
    println!("{}", describe(result));
    Ok(())
}
