//! Archetype Classifier - maps a composite score onto a maturity band.

use crate::domain::assessment::{Archetype, ArchetypeBands};

pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// First band whose inclusive range contains the score.
    ///
    /// Shared boundaries therefore resolve to the lower band. A miss means
    /// the bands are misconfigured; it is logged and the first band returned.
    pub fn classify(score: f64, archetypes: &ArchetypeBands) -> &Archetype {
        match archetypes.as_slice().iter().find(|a| a.contains(score)) {
            Some(archetype) => archetype,
            None => {
                tracing::warn!(score, "No archetype band matches score, using lowest band");
                archetypes.lowest()
            }
        }
    }
}
