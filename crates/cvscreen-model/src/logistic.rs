//! One-vs-rest logistic regression.

use cvscreen_core::{Classifier, ClassProbability, ModelError, Prediction};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Training hyperparameters for the logistic optimizer.
///
/// Full-batch gradient descent with zero initialization, so a given
/// (features, labels) input always produces the same fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticParams {
    pub learning_rate: f64,
    /// L2 penalty applied to the weights (not the intercept).
    pub l2: f64,
    pub max_iterations: usize,
    /// Stop early once every gradient component falls below this.
    pub tolerance: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            l2: 1e-4,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// One-vs-rest logistic regression over dense feature vectors.
///
/// One binary classifier is fit per class against all others. At prediction
/// time the per-class sigmoid scores are normalized so the reported
/// probabilities sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneVsRestLogistic {
    /// Sorted distinct labels seen at fit time.
    classes: Vec<String>,
    /// Per-class weight vectors, one row per class.
    weights: Array2<f64>,
    /// Per-class intercepts.
    intercepts: Array1<f64>,
}

impl OneVsRestLogistic {
    /// Fit one binary model per distinct label.
    ///
    /// `features` rows and `labels` are parallel. Requires at least two
    /// distinct labels; one-vs-rest is meaningless otherwise.
    pub fn fit(
        features: &Array2<f64>,
        labels: &[&str],
        params: &LogisticParams,
    ) -> Result<Self, ModelError> {
        if features.nrows() == 0 || labels.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if features.nrows() != labels.len() {
            return Err(ModelError::Training(format!(
                "{} feature rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }

        let classes: Vec<String> = labels
            .iter()
            .map(|l| (*l).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if classes.len() < 2 {
            return Err(ModelError::Training(format!(
                "need at least two distinct labels, got {}",
                classes.len()
            )));
        }

        let mut weights = Array2::zeros((classes.len(), features.ncols()));
        let mut intercepts = Array1::zeros(classes.len());

        for (index, class) in classes.iter().enumerate() {
            let targets: Array1<f64> = labels
                .iter()
                .map(|l| if *l == class.as_str() { 1.0 } else { 0.0 })
                .collect();
            let (w, b) = fit_binary(features, &targets, params);
            weights.row_mut(index).assign(&w);
            intercepts[index] = b;
        }

        debug!(
            "Fitted one-vs-rest logistic model: {} classes, {} features",
            classes.len(),
            features.ncols()
        );

        Ok(Self {
            classes,
            weights,
            intercepts,
        })
    }
}

impl Classifier for OneVsRestLogistic {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn classify(&self, features: ArrayView1<'_, f64>) -> Result<Prediction, ModelError> {
        if features.len() != self.weights.ncols() {
            return Err(ModelError::Inference(format!(
                "expected {} features, got {}",
                self.weights.ncols(),
                features.len()
            )));
        }

        let scores: Vec<f64> = (0..self.classes.len())
            .map(|i| sigmoid(self.weights.row(i).dot(&features) + self.intercepts[i]))
            .collect();

        // Normalize so the per-class scores read as probabilities. The sum
        // can only reach zero through sigmoid underflow; fall back to a
        // uniform distribution in that case.
        let total: f64 = scores.iter().sum();
        let probabilities = if total > 0.0 {
            scores
                .iter()
                .zip(&self.classes)
                .map(|(score, label)| ClassProbability {
                    label: label.clone(),
                    probability: score / total,
                })
                .collect()
        } else {
            let uniform = 1.0 / self.classes.len() as f64;
            self.classes
                .iter()
                .map(|label| ClassProbability {
                    label: label.clone(),
                    probability: uniform,
                })
                .collect()
        };

        Ok(Prediction { probabilities })
    }
}

/// Fit a single binary logistic regression with gradient descent.
fn fit_binary(x: &Array2<f64>, y: &Array1<f64>, params: &LogisticParams) -> (Array1<f64>, f64) {
    let n = x.nrows() as f64;
    let mut w: Array1<f64> = Array1::zeros(x.ncols());
    let mut b = 0.0;

    for _ in 0..params.max_iterations {
        let z = x.dot(&w) + b;
        let residual = z.mapv(sigmoid) - y;

        let mut grad_w = x.t().dot(&residual) / n;
        grad_w.scaled_add(params.l2, &w);
        let grad_b = residual.sum() / n;

        w.scaled_add(-params.learning_rate, &grad_w);
        b -= params.learning_rate * grad_b;

        let grad_max = grad_w.iter().fold(grad_b.abs(), |m, g| m.max(g.abs()));
        if grad_max < params.tolerance {
            break;
        }
    }

    (w, b)
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
