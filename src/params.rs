use log::warn;

// Defaults for parameters
const FOREST_ALGORITHM_DEFAULT: ForestAlgorithm = ForestAlgorithm::LinearScan;
const CHECK_COST_DEFAULT: bool = true;
const COST_TOLERANCE_DEFAULT: f64 = 1e-9;

// Valid minimums/left bounds of parameters
const COST_TOLERANCE_MINIMUM: f64 = 0.0;

/// How the engine tracks which component each vertex belongs to while merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestAlgorithm {
    /// A flat list of subtrees searched linearly for every candidate arc.
    LinearScan,
    /// A disjoint-set forest with path compression and union by rank. Produces exactly the
    /// same tree as `LinearScan`, but looks components up in near constant time.
    UnionFind,
}

/// A wrapper around the parameters of an EMST computation. Only use if you want to tune
/// them. Otherwise use `Emst::default_params()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmstParams {
    pub(crate) forest_algorithm: ForestAlgorithm,
    pub(crate) check_cost: bool,
    pub(crate) cost_tolerance: f64,
}

/// Builder object to set custom parameters.
pub struct EmstParamsBuilder {
    forest_algorithm: Option<ForestAlgorithm>,
    check_cost: Option<bool>,
    cost_tolerance: Option<f64>,
}

impl EmstParams {
    /// Enters the builder pattern, allowing custom parameters to be set using various setter
    /// methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> EmstParamsBuilder {
        EmstParamsBuilder {
            forest_algorithm: None,
            check_cost: None,
            cost_tolerance: None,
        }
    }

    pub fn forest_algorithm(&self) -> ForestAlgorithm {
        self.forest_algorithm
    }
}

impl Default for EmstParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EmstParamsBuilder {
    /// Sets the component tracking algorithm. Defaults to `LinearScan`.
    ///
    /// # Parameters
    /// * forest_algorithm - the component tracking algorithm
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn forest_algorithm(mut self, forest_algorithm: ForestAlgorithm) -> EmstParamsBuilder {
        self.forest_algorithm = Some(forest_algorithm);
        self
    }

    /// Sets whether the cost accumulated while merging subtrees is compared against the cost
    /// recomputed from the final arcs. A mismatch is logged as a warning; the recomputed cost
    /// is always the one reported. Defaults to true.
    ///
    /// # Parameters
    /// * check_cost - whether to compare both costs
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn check_cost(mut self, check_cost: bool) -> EmstParamsBuilder {
        self.check_cost = Some(check_cost);
        self
    }

    /// Sets the absolute tolerance of the cost comparison. Defaults to 1e-9.
    ///
    /// # Parameters
    /// * cost_tolerance - the largest accepted difference between both costs
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn cost_tolerance(mut self, cost_tolerance: f64) -> EmstParamsBuilder {
        let valid_cost_tolerance = EmstParamsBuilder::validate_input_left_bound(
            cost_tolerance, COST_TOLERANCE_MINIMUM, "cost_tolerance");
        self.cost_tolerance = Some(valid_cost_tolerance);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed EMST parameter configuration.
    pub fn build(self) -> EmstParams {
        EmstParams {
            forest_algorithm: self.forest_algorithm.unwrap_or(FOREST_ALGORITHM_DEFAULT),
            check_cost: self.check_cost.unwrap_or(CHECK_COST_DEFAULT),
            cost_tolerance: self.cost_tolerance.unwrap_or(COST_TOLERANCE_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: f64, left_bound: f64, param: &str) -> f64 {
        if input_param.is_nan() || input_param < left_bound {
            warn!("{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}.");
            left_bound
        } else {
            input_param
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = EmstParams::default();
        assert_eq!(ForestAlgorithm::LinearScan, params.forest_algorithm());
        assert!(params.check_cost);
        assert_eq!(1e-9, params.cost_tolerance);
    }

    #[test]
    fn negative_tolerance_is_clamped() {
        let params = EmstParams::builder()
            .forest_algorithm(ForestAlgorithm::UnionFind)
            .cost_tolerance(-1.0)
            .build();
        assert_eq!(ForestAlgorithm::UnionFind, params.forest_algorithm());
        assert_eq!(0.0, params.cost_tolerance);
    }
}
