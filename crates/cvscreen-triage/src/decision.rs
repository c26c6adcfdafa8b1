//! Threshold decision rule over predicted class probabilities.

use cvscreen_core::Prediction;
use std::fmt;

/// Label that approves a candidate when it crosses its threshold.
pub const ALTO_LABEL: &str = "Alto";
/// Label that auto-rejects a candidate when it crosses its threshold.
pub const BAJO_LABEL: &str = "Bajo";

/// Automated screening decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// "Alto" crossed its threshold: approved, continue to the next filter.
    Approved,
    /// "Bajo" crossed its threshold: rejected automatically.
    AutoRejected,
    /// Neither threshold crossed: route to a human reviewer.
    ManualReview,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Decision::Approved => "Aprobado y pasa al siguiente filtro",
            Decision::AutoRejected => "Rechazado automáticamente",
            Decision::ManualReview => "Revisión manual",
        };
        f.write_str(text)
    }
}

/// Probability thresholds for the decision rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionThresholds {
    pub alto: f64,
    pub bajo: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            alto: 0.30,
            bajo: 0.30,
        }
    }
}

/// Apply the flat threshold rule to a prediction.
///
/// "Alto" is checked before "Bajo" even when "Bajo" carries the higher
/// probability, so the decision can contradict the displayed top class.
/// This matches the behavior this tool has always had; callers relying on
/// the rule should not reorder the checks. A label set without "Alto" or
/// "Bajo" falls through to manual review.
#[must_use]
pub fn decide(prediction: &Prediction, thresholds: &DecisionThresholds) -> Decision {
    if let Some(p) = prediction.probability_of(ALTO_LABEL) {
        if p >= thresholds.alto {
            return Decision::Approved;
        }
    }
    if let Some(p) = prediction.probability_of(BAJO_LABEL) {
        if p >= thresholds.bajo {
            return Decision::AutoRejected;
        }
    }
    Decision::ManualReview
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvscreen_core::ClassProbability;

    fn prediction(pairs: &[(&str, f64)]) -> Prediction {
        Prediction {
            probabilities: pairs
                .iter()
                .map(|(label, probability)| ClassProbability {
                    label: (*label).to_string(),
                    probability: *probability,
                })
                .collect(),
        }
    }

    #[test]
    fn test_alto_wins_even_when_not_argmax() {
        let p = prediction(&[("Alto", 0.35), ("Bajo", 0.65)]);
        assert_eq!(
            decide(&p, &DecisionThresholds::default()),
            Decision::Approved
        );
    }

    #[test]
    fn test_bajo_rejects_when_alto_below_threshold() {
        let p = prediction(&[("Alto", 0.20), ("Bajo", 0.80)]);
        assert_eq!(
            decide(&p, &DecisionThresholds::default()),
            Decision::AutoRejected
        );
    }

    #[test]
    fn test_manual_review_when_neither_crosses() {
        let p = prediction(&[("Alto", 0.25), ("Bajo", 0.25), ("Otro", 0.50)]);
        assert_eq!(
            decide(&p, &DecisionThresholds::default()),
            Decision::ManualReview
        );
    }

    #[test]
    fn test_manual_review_when_labels_absent() {
        let p = prediction(&[("Medio", 0.9), ("Otro", 0.1)]);
        assert_eq!(
            decide(&p, &DecisionThresholds::default()),
            Decision::ManualReview
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let p = prediction(&[("Alto", 0.30), ("Bajo", 0.70)]);
        assert_eq!(
            decide(&p, &DecisionThresholds::default()),
            Decision::Approved
        );
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(
            Decision::Approved.to_string(),
            "Aprobado y pasa al siguiente filtro"
        );
        assert_eq!(
            Decision::AutoRejected.to_string(),
            "Rechazado automáticamente"
        );
        assert_eq!(Decision::ManualReview.to_string(), "Revisión manual");
    }
}
