use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Risk profile supplied whole by the caller; never mutated by the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserConstraints {
    pub time_horizon_years: u32,
    pub target_return_pct: f64,
    pub max_drawdown_pct: f64,
    pub min_age_years: u32,
}

impl UserConstraints {
    pub fn new(
        time_horizon_years: u32,
        target_return_pct: f64,
        max_drawdown_pct: f64,
        min_age_years: u32,
    ) -> Result<Self, ValidationError> {
        if time_horizon_years == 0 {
            return Err(ValidationError::NonPositiveHorizon);
        }
        if !target_return_pct.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "target_return_pct",
            });
        }
        if !max_drawdown_pct.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                field: "max_drawdown_pct",
            });
        }
        if max_drawdown_pct < 0.0 {
            return Err(ValidationError::NegativeDrawdownLimit {
                value: max_drawdown_pct,
            });
        }
        Ok(Self {
            time_horizon_years,
            target_return_pct,
            max_drawdown_pct,
            min_age_years,
        })
    }
}
