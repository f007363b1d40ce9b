//! Token Cost Accounting
//!
//! Converts token counts into a monetary estimate. Pure function of the
//! counts and two configured per-million-token rates; no hidden state.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRICE_PER_MTOK_INPUT, DEFAULT_PRICE_PER_MTOK_OUTPUT};
use crate::types::TokenUsage;

const TOKENS_PER_UNIT: f64 = 1_000_000.0;

/// Per-million-token rates in USD. Configuration, not business logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            input_per_mtok: DEFAULT_PRICE_PER_MTOK_INPUT,
            output_per_mtok: DEFAULT_PRICE_PER_MTOK_OUTPUT,
        }
    }
}

impl PricingConfig {
    /// Rates must be finite and non-negative so cost can never be negative.
    pub fn validate(&self) -> crate::types::Result<()> {
        for (name, rate) in [
            ("pricing.input_per_mtok", self.input_per_mtok),
            ("pricing.output_per_mtok", self.output_per_mtok),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(crate::types::CodeloreError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}

/// Cost summary for a run (or one unit of a run)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostReport {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_cost: f64,
}

impl CostReport {
    /// `total = input/1e6 * rate_in + output/1e6 * rate_out`
    pub fn calculate(usage: TokenUsage, pricing: &PricingConfig) -> Self {
        let input_cost = usage.input_tokens as f64 / TOKENS_PER_UNIT * pricing.input_per_mtok;
        let output_cost = usage.output_tokens as f64 / TOKENS_PER_UNIT * pricing.output_per_mtok;
        Self {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
            total_cost: input_cost + output_cost,
        }
    }

    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn usage(input: u64, output: u64) -> TokenUsage {
        TokenUsage {
            input_tokens: input,
            output_tokens: output,
        }
    }

    #[test]
    fn test_zero_tokens_zero_cost() {
        let report = CostReport::calculate(usage(0, 0), &PricingConfig::default());
        assert_eq!(report.total_cost, 0.0);
        assert_eq!(report.total_tokens(), 0);
    }

    #[test]
    fn test_known_rates_example() {
        // 12000/1e6*0.25 + 3000/1e6*1.25 = 0.003 + 0.00375
        let report = CostReport::calculate(usage(12_000, 3_000), &PricingConfig::default());
        assert!((report.total_cost - 0.00675).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let pricing = PricingConfig {
            input_per_mtok: -0.1,
            output_per_mtok: 1.0,
        };
        assert!(pricing.validate().is_err());
        assert!(PricingConfig::default().validate().is_ok());
    }

    proptest! {
        #[test]
        fn cost_is_monotone_in_both_counts(
            a in 0u64..10_000_000,
            b in 0u64..10_000_000,
            da in 0u64..1_000_000,
            db in 0u64..1_000_000,
        ) {
            let pricing = PricingConfig::default();
            let base = CostReport::calculate(usage(a, b), &pricing);
            let more = CostReport::calculate(usage(a + da, b + db), &pricing);
            prop_assert!(more.total_cost >= base.total_cost);
            prop_assert!(base.total_cost >= 0.0);
        }
    }
}
