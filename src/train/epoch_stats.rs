use serde::Serialize;

/// Per-epoch statistics collected by `Perceptron::train_with_stats`.
///
/// Both figures are measured on the fly: each sample's prediction is taken
/// just before that sample's update is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpochStats {
    /// 1-based epoch number within the `train` call.
    pub epoch: usize,
    /// Total epochs requested for this call.
    pub total_epochs: usize,
    /// Sum over samples of `(label - prediction)²`. Diverging runs reach
    /// `inf`, which JSON output renders as `null`.
    pub squared_error: f64,
    /// Samples whose thresholded prediction disagreed with the label.
    pub misclassified: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diverged_error_serializes_as_null() {
        let stats = EpochStats { epoch: 3, total_epochs: 3, squared_error: f64::INFINITY, misclassified: 2 };
        let value = serde_json::to_value(&stats).unwrap();
        assert!(value["squared_error"].is_null());
        assert_eq!(value["misclassified"], 2);
    }
}
