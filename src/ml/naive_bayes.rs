//! Multinomial-style Naive Bayes over TF-IDF features.
//!
//! TF-IDF weights are treated as pseudo-counts in the usual multinomial
//! log-likelihood formula with add-one smoothing. That is an approximation,
//! not a strict probability model, but it is the behavior the suggestion
//! feature was built and validated against.

/// Trained Naive Bayes model parameters. Immutable after training.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    /// `ln P(class)`, one entry per class.
    log_prior: Vec<f64>,
    /// `ln P(feature | class)`, class-count × feature-count.
    log_likelihood: Vec<Vec<f64>>,
}

impl NaiveBayesModel {
    /// Train a model from feature vectors `x` and class indices `y`.
    ///
    /// Priors use add-one smoothing over classes,
    /// `ln((count(c) + 1) / (n + class_count))`; likelihoods use add-one
    /// smoothing over features, `ln((sum + 1) / (total + feature_count))`,
    /// with the per-class feature sums taken over the TF-IDF weights.
    ///
    /// Callers are responsible for rejecting degenerate sample sets (the
    /// trainer skips variable groups with fewer than 2 samples); given
    /// consistent shapes this function itself cannot fail.
    pub fn train(x: &[Vec<f64>], y: &[usize], class_count: usize) -> Self {
        let n = x.len();
        let feature_count = x.first().map(|row| row.len()).unwrap_or(0);

        let mut class_counts = vec![0.0_f64; class_count];
        for &class in y {
            class_counts[class] += 1.0;
        }
        let log_prior = class_counts
            .iter()
            .map(|&count| ((count + 1.0) / (n as f64 + class_count as f64)).ln())
            .collect();

        let mut feature_sums = vec![vec![0.0_f64; feature_count]; class_count];
        let mut total_sums = vec![0.0_f64; class_count];
        for (row, &class) in x.iter().zip(y) {
            for (j, &value) in row.iter().enumerate() {
                feature_sums[class][j] += value;
                total_sums[class] += value;
            }
        }

        let log_likelihood = feature_sums
            .iter()
            .zip(&total_sums)
            .map(|(sums, &total)| {
                sums.iter()
                    .map(|&sum| ((sum + 1.0) / (total + feature_count as f64)).ln())
                    .collect()
            })
            .collect();

        NaiveBayesModel {
            log_prior,
            log_likelihood,
        }
    }

    /// Number of classes this model distinguishes.
    pub fn class_count(&self) -> usize {
        self.log_prior.len()
    }

    /// Per-class unnormalized log-scores for a feature vector.
    fn scores(&self, x: &[f64]) -> Vec<f64> {
        self.log_prior
            .iter()
            .zip(&self.log_likelihood)
            .map(|(&prior, likelihood)| {
                prior
                    + x.iter()
                        .zip(likelihood)
                        .map(|(&value, &ll)| value * ll)
                        .sum::<f64>()
            })
            .collect()
    }

    /// Predict the class index for a feature vector.
    ///
    /// Ties resolve to the first class in index order; the tie-break is
    /// stable across calls. An all-zero vector degenerates to the class with
    /// the highest prior.
    pub fn predict(&self, x: &[f64]) -> usize {
        let mut best = f64::NEG_INFINITY;
        let mut best_class = 0;
        for (class, score) in self.scores(x).into_iter().enumerate() {
            if score > best {
                best = score;
                best_class = class;
            }
        }
        best_class
    }

    /// Probability distribution over classes: softmax of the log-scores with
    /// max-subtraction for numerical stability.
    ///
    /// This is the model's internal confidence surrogate, not a calibrated
    /// posterior.
    pub fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        let scores = self.scores(x);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = scores.iter().map(|&score| (score - max).exp()).collect();
        let sum: f64 = exp.iter().sum();
        exp.into_iter().map(|value| value / sum).collect()
    }
}
