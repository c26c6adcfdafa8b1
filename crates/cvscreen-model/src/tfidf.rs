//! TF-IDF vectorizer over unigrams and bigrams.

use cvscreen_core::{ModelError, Vectorizer};
use ndarray::Array1;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Words of two or more word characters, unicode-aware.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"));

/// TF-IDF vectorizer with a capped vocabulary of unigrams and bigrams.
///
/// Feature selection keeps the `max_features` terms with the highest total
/// corpus frequency; ties break lexicographically. Vocabulary indices are
/// assigned in sorted term order, so fitting the same corpus always yields
/// the same vectorizer.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Smoothed inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen at fit time.
    n_documents: usize,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl TfidfVectorizer {
    /// Fit a vectorizer on a corpus, retaining at most `max_features` terms.
    pub fn fit(documents: &[&str], max_features: usize) -> Result<Self, ModelError> {
        if documents.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let mut corpus_counts: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let terms = terms_of(doc);
            for term in &terms {
                *corpus_counts.entry(term.clone()).or_insert(0) += 1;
            }
            let unique: HashSet<&String> = terms.iter().collect();
            for term in unique {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        // Keep the most frequent terms; break ties by term order so the
        // selection is deterministic.
        let mut ranked: Vec<(&String, usize)> =
            corpus_counts.iter().map(|(t, c)| (t, *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);

        let mut selected: Vec<String> = ranked.into_iter().map(|(t, _)| t.clone()).collect();
        selected.sort();

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (index, term) in selected.into_iter().enumerate() {
            let df = document_frequency.get(&term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        debug!(
            "Fitted TF-IDF vectorizer: {} features over {} documents",
            vocabulary.len(),
            documents.len()
        );

        Ok(Self {
            vocabulary,
            idf,
            n_documents: documents.len(),
        })
    }

    /// Transform one document into an L2-normalized TF-IDF vector.
    ///
    /// Terms outside the fitted vocabulary are ignored, so a document with
    /// no known terms maps to the zero vector.
    #[must_use]
    pub fn transform(&self, document: &str) -> Array1<f64> {
        let mut features: Array1<f64> = Array1::zeros(self.vocabulary.len());
        for term in terms_of(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                features[index] += 1.0;
            }
        }

        for (index, idf) in self.idf.iter().enumerate() {
            features[index] *= idf;
        }

        let norm = features.dot(&features).sqrt();
        if norm > 0.0 {
            features /= norm;
        }
        features
    }

    /// Number of retained features.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Vectorizer for TfidfVectorizer {
    fn dimension(&self) -> usize {
        self.vocabulary_size()
    }

    fn vectorize(&self, text: &str) -> Array1<f64> {
        self.transform(text)
    }
}

/// Lowercased unigrams and adjacent bigrams of a document.
fn terms_of(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_include_unigrams_and_bigrams() {
        let terms = terms_of("Ingeniero de Software");
        assert!(terms.contains(&"ingeniero".to_string()));
        assert!(terms.contains(&"software".to_string()));
        assert!(terms.contains(&"ingeniero de".to_string()));
        assert!(terms.contains(&"de software".to_string()));
    }

    #[test]
    fn test_single_character_tokens_dropped() {
        let terms = terms_of("a bb c dd");
        assert_eq!(terms, vec!["bb", "dd", "bb dd"]);
    }

    #[test]
    fn test_fit_empty_corpus_is_error() {
        assert!(matches!(
            TfidfVectorizer::fit(&[], 100),
            Err(ModelError::EmptyDataset)
        ));
    }

    #[test]
    fn test_max_features_cap_with_deterministic_ties() {
        // "aa" appears twice; everything else once. The tie among the
        // remaining terms breaks lexicographically: "aa bb" and "aa cc"
        // sort before "bb" and "cc".
        let vectorizer = TfidfVectorizer::fit(&["aa bb", "aa cc"], 3).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 3);
        let mut terms: Vec<&String> = vectorizer.vocabulary.keys().collect();
        terms.sort();
        assert_eq!(terms, vec!["aa", "aa bb", "aa cc"]);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer =
            TfidfVectorizer::fit(&["gestion de equipos", "desarrollo de software"], 5000).unwrap();

        let v = vectorizer.transform("gestion de equipos");
        let norm = v.dot(&v).sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_unknown_terms_is_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(&["experiencia laboral"], 5000).unwrap();

        let v = vectorizer.transform("zz yy xx");
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = ["perfil alto en ventas", "perfil bajo sin experiencia"];
        let a = TfidfVectorizer::fit(&docs, 5000).unwrap();
        let b = TfidfVectorizer::fit(&docs, 5000).unwrap();

        assert_eq!(a.vocabulary, b.vocabulary);
        assert_eq!(a.idf, b.idf);
    }
}
