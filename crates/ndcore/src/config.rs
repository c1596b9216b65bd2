use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison thresholds used across the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Two elements are equal when their absolute difference is below this.
    pub equality: f64,
    /// `nonzero` reports elements whose magnitude exceeds this.
    pub nonzero: f64,
    /// `count_nonzero` counts elements farther than this from this same value.
    pub count_nonzero_offset: f64,
}

impl Tolerances {
    pub const EQUALITY: f64 = 1e-5;
    pub const NONZERO: f64 = 1e-5;
    pub const COUNT_NONZERO_OFFSET: f64 = 1e-10;
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            equality: Tolerances::EQUALITY,
            nonzero: Tolerances::NONZERO,
            count_nonzero_offset: Tolerances::COUNT_NONZERO_OFFSET,
        }
    }
}

/// Determinant algorithms.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetMethod {
    /// Wrapped diagonal minus wrapped anti-diagonal products.
    /// Exact up to 3x3 only.
    #[default]
    Sarrus,
    /// LU decomposition with partial pivoting.
    Lu,
}

impl FromStr for DetMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sarrus" => Ok(DetMethod::Sarrus),
            "lu" => Ok(DetMethod::Lu),
            _ => Err(format!(
                "Unknown determinant method: {}. Expected one of `sarrus`, `lu`",
                s
            )),
        }
    }
}

/// Matrix inverse algorithms.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvMethod {
    /// Gauss-Jordan elimination pivoting on the diagonal, no row swaps.
    #[default]
    GaussJordan,
    /// Gauss-Jordan elimination with partial (row) pivoting.
    PartialPivot,
}

impl FromStr for InvMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "gauss-jordan" => Ok(InvMethod::GaussJordan),
            "partial-pivot" => Ok(InvMethod::PartialPivot),
            _ => Err(format!(
                "Unknown inverse method: {}. Expected one of `gauss-jordan`, `partial-pivot`",
                s
            )),
        }
    }
}

/// Algorithm selection for `det_with` and `inv_with`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinalgConfig {
    #[serde(default)]
    pub det: DetMethod,
    #[serde(default)]
    pub inv: InvMethod,
}

impl LinalgConfig {
    pub fn new(det: DetMethod, inv: InvMethod) -> Self {
        Self { det, inv }
    }

    /// LU determinant and pivoted inverse.
    pub fn robust() -> Self {
        Self {
            det: DetMethod::Lu,
            inv: InvMethod::PartialPivot,
        }
    }
}
