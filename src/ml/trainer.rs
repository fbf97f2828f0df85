//! Training orchestration: one classifier per annotation variable.
//!
//! [`SuggestionTrainer`] pulls coded spans from the annotation store, groups
//! them by variable, synthesizes negative samples for the designated
//! statement variable, and trains one [`TrainedClassifier`] per group. The
//! returned map is an explicit value the caller owns and later passes back
//! into [`SuggestionTrainer::predict_all`]; there is no shared classifier
//! cache. Classifiers are immutable after construction, so the map can be
//! built on a worker thread and handed to the UI thread without locking.
//!
//! Store failures never escape: they are logged and degrade to fewer (or
//! zero) samples, because loss of auto-suggestion must not block manual
//! annotation.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, sentence_spans};
use crate::ml::naive_bayes::NaiveBayesModel;
use crate::ml::tfidf::TfIdfVectorizer;
use crate::ml::{Sample, TrainerConfig};
use crate::store::{AnnotationStore, CodedSpan, DocumentStore, VariableSchema, VariableType};

/// Variable groups with fewer samples than this are skipped entirely; a
/// single sample cannot be meaningfully split into class statistics.
pub const MIN_GROUP_SAMPLES: usize = 2;

/// Bijection between label strings and dense class indices, in
/// first-encountered order. Stable for the lifetime of the classifier that
/// owns it.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    labels: Vec<String>,
    index: AHashMap<String, usize>,
}

impl LabelMap {
    /// Build a label map from the samples of one variable group.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut map = LabelMap::default();
        for sample in samples {
            if !map.index.contains_key(&sample.label) {
                map.index.insert(sample.label.clone(), map.labels.len());
                map.labels.push(sample.label.clone());
            }
        }
        map
    }

    /// Class index for a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label for a class index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the map holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Prediction for one variable: the predicted label, with a probability for
/// the designated variable only. Produced fresh for each input; never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted value label.
    pub label: String,
    /// Confidence surrogate, present for the designated variable only.
    pub probability: Option<f64>,
}

/// A classifier trained for one variable group.
///
/// Owns the model together with the exact vocabulary, document-frequency
/// table, label map and sample count it was trained with. All of them are
/// immutable after construction; prediction-time features are computed
/// against these training artifacts, never recomputed from new text.
#[derive(Debug, Clone)]
pub struct TrainedClassifier {
    model: NaiveBayesModel,
    vocabulary: Vec<String>,
    document_frequency: AHashMap<String, usize>,
    label_map: LabelMap,
    n_samples: usize,
    vectorizer: TfIdfVectorizer,
}

impl TrainedClassifier {
    /// The trained Naive Bayes model.
    pub fn model(&self) -> &NaiveBayesModel {
        &self.model
    }

    /// The training-time vocabulary, in feature-index order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// The label map built at training time.
    pub fn label_map(&self) -> &LabelMap {
        &self.label_map
    }

    /// Number of samples this classifier was trained on. This is the `N`
    /// used for IDF at prediction time.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// TF-IDF features for a text, under this classifier's fixed vocabulary,
    /// document-frequency table and training sample count.
    pub fn vectorize(&self, text: &str) -> Vec<f64> {
        self.vectorizer
            .vectorize_one(text, &self.vocabulary, &self.document_frequency, self.n_samples)
    }

    /// Predict the value label for a text.
    pub fn predict(&self, text: &str) -> &str {
        let x = self.vectorize(text);
        self.label_map
            .label(self.model.predict(&x))
            .unwrap_or_default()
    }

    /// Probability distribution over this classifier's labels for a text.
    pub fn predict_proba(&self, text: &str) -> Vec<f64> {
        self.model.predict_proba(&self.vectorize(text))
    }
}

/// Assembles one classifier per annotation variable and offers a prediction
/// entry point across all of them.
#[derive(Debug, Clone)]
pub struct SuggestionTrainer {
    config: TrainerConfig,
    vectorizer: TfIdfVectorizer,
}

impl SuggestionTrainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: TrainerConfig) -> Self {
        let analyzer = Arc::new(Analyzer::standard(config.stemming));
        SuggestionTrainer {
            config,
            vectorizer: TfIdfVectorizer::new(analyzer),
        }
    }

    /// The trainer configuration.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Train one classifier per variable group from the current store
    /// contents.
    ///
    /// Groups with fewer than [`MIN_GROUP_SAMPLES`] samples are skipped; a
    /// missing key in the result means "no suggestion available for this
    /// variable", not an error. Store failures are logged and absorbed, so
    /// the result may be empty but the call itself cannot fail.
    pub fn train_by_variable_groups(
        &self,
        annotations: &dyn AnnotationStore,
        documents: &dyn DocumentStore,
        schema: &dyn VariableSchema,
    ) -> HashMap<String, TrainedClassifier> {
        let spans = match annotations.coded_spans() {
            Ok(spans) => spans,
            Err(e) => {
                warn!("annotation store read failed, training with no samples: {e}");
                Vec::new()
            }
        };

        // Classifiers are only trained on short-text variables. If the
        // schema cannot be read, fall back to every variable present in the
        // span rows.
        let short_text: Option<HashSet<String>> = match schema.variables() {
            Ok(variables) => Some(
                variables
                    .into_iter()
                    .filter(|v| v.data_type == VariableType::ShortText)
                    .map(|v| v.name)
                    .collect(),
            ),
            Err(e) => {
                warn!("variable schema read failed, keeping all variables: {e}");
                None
            }
        };

        let mut groups: HashMap<String, Vec<Sample>> = HashMap::new();
        for span in &spans {
            if span.text.trim().is_empty() {
                continue;
            }
            if let Some(short_text) = &short_text {
                if !short_text.contains(&span.variable) {
                    continue;
                }
            }
            groups
                .entry(span.variable.clone())
                .or_default()
                .push(Sample::new(span.text.clone(), span.value.clone()));
        }

        let negatives = self.synthesize_negatives(documents, &spans);
        if !negatives.is_empty() {
            groups
                .entry(self.config.designated_variable.clone())
                .or_default()
                .extend(negatives);
        }

        let mut classifiers = HashMap::new();
        for (variable, samples) in groups {
            match self.train_group(&samples) {
                Some(classifier) => {
                    classifiers.insert(variable, classifier);
                }
                None => {
                    debug!(
                        "skipping variable {variable:?}: {} sample(s) is below the minimum of {MIN_GROUP_SAMPLES}",
                        samples.len()
                    );
                }
            }
        }
        info!("trained classifiers for {} variable group(s)", classifiers.len());
        classifiers
    }

    /// Synthesize "non-statement" samples for the designated variable.
    ///
    /// Per document: every sentence span not overlapping a coded span is a
    /// candidate; candidates are shuffled and capped at `negative_ratio ×
    /// coded statements in that document`, so one document's unannotated
    /// bulk text cannot swamp the class balance. Documents without coded
    /// statements contribute nothing.
    fn synthesize_negatives(
        &self,
        documents: &dyn DocumentStore,
        spans: &[CodedSpan],
    ) -> Vec<Sample> {
        let mut by_document: HashMap<i64, (Vec<(usize, usize)>, HashSet<i64>)> = HashMap::new();
        for span in spans {
            let entry = by_document.entry(span.document_id).or_default();
            entry.0.push((span.start, span.end));
            entry.1.insert(span.statement_id);
        }

        let ids = match documents.document_ids() {
            Ok(ids) => ids,
            Err(e) => {
                warn!("document store read failed, skipping negative sampling: {e}");
                return Vec::new();
            }
        };

        let mut rng = rand::rng();
        let mut negatives = Vec::new();
        for id in ids {
            let Some((coded, statements)) = by_document.get(&id) else {
                continue;
            };
            let cap = self.config.negative_ratio * statements.len();
            if cap == 0 {
                continue;
            }
            let text = match documents.document_text(id) {
                Ok(text) => text,
                Err(e) => {
                    warn!("document {id} unreadable, skipping: {e}");
                    continue;
                }
            };

            let mut candidates: Vec<String> = sentence_spans(&text)
                .into_iter()
                .filter(|&(start, end)| {
                    !coded
                        .iter()
                        .any(|&(c_start, c_end)| start < c_end && c_start < end)
                })
                .map(|(start, end)| text[start..end].to_string())
                .filter(|sentence| !sentence.trim().is_empty())
                .collect();
            candidates.shuffle(&mut rng);
            candidates.truncate(cap);

            negatives.extend(
                candidates
                    .into_iter()
                    .map(|sentence| Sample::new(sentence, self.config.non_statement_label.clone())),
            );
        }
        negatives
    }

    /// Train a classifier for one variable group.
    ///
    /// Returns `None` when the group has fewer than [`MIN_GROUP_SAMPLES`]
    /// samples.
    pub fn train_group(&self, samples: &[Sample]) -> Option<TrainedClassifier> {
        if samples.len() < MIN_GROUP_SAMPLES {
            return None;
        }

        let vocabulary = self.vectorizer.build_vocabulary(samples);
        let df = self.vectorizer.document_frequency(samples, &vocabulary);
        let x = self.vectorizer.vectorize_batch(samples, &vocabulary, &df);
        let label_map = LabelMap::from_samples(samples);
        let y: Vec<usize> = samples
            .iter()
            .map(|sample| label_map.index_of(&sample.label).unwrap_or(0))
            .collect();
        let model = NaiveBayesModel::train(&x, &y, label_map.len());

        Some(TrainedClassifier {
            model,
            vocabulary,
            document_frequency: df,
            label_map,
            n_samples: samples.len(),
            vectorizer: self.vectorizer.clone(),
        })
    }

    /// Run every trained classifier on a text, independently.
    ///
    /// Returns one prediction per trained variable; the probability is
    /// computed for the designated variable only. Variables with no
    /// classifier are simply absent from the result.
    pub fn predict_all(
        &self,
        classifiers: &HashMap<String, TrainedClassifier>,
        text: &str,
    ) -> HashMap<String, Prediction> {
        classifiers
            .iter()
            .map(|(variable, classifier)| {
                let x = classifier.vectorize(text);
                let index = classifier.model.predict(&x);
                let label = classifier
                    .label_map
                    .label(index)
                    .unwrap_or_default()
                    .to_string();
                let probability = (*variable == self.config.designated_variable)
                    .then(|| classifier.model.predict_proba(&x)[index]);
                (variable.clone(), Prediction { label, probability })
            })
            .collect()
    }
}

impl Default for SuggestionTrainer {
    fn default() -> Self {
        SuggestionTrainer::new(TrainerConfig::default())
    }
}
