pub use crate::config::*;

/// A builder for assembling the record collections of one project.
///
/// The builder is the boundary where the input contract is enforced:
/// inactive risks are dropped on insertion and negative numeric values are
/// treated as zero, so the engine itself never has to reject anything.
///
/// ```
/// use soft_vote::{Builder, EmotionCategory, NarrativeCategory};
///
/// let mut builder = Builder::new();
/// builder.add_narrative("Todavía no sé por quién votar", NarrativeCategory::Dominant, 9.0);
/// builder.add_emotion(EmotionCategory::Distrust, 7.5, Some("radio call-ins"));
/// let records = builder.build();
/// assert_eq!(records.narratives.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    pub(crate) _records: ProjectRecords,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _records: ProjectRecords::default(),
        }
    }

    pub fn add_narrative(&mut self, text: &str, category: NarrativeCategory, weight: f64) {
        self._records.narratives.push(Narrative {
            text: text.to_string(),
            category,
            weight: weight.max(0.0),
        });
    }

    pub fn add_emotion(&mut self, category: EmotionCategory, intensity: f64, source: Option<&str>) {
        self._records.emotions.push(Emotion {
            category,
            intensity: intensity.max(0.0),
            source: source.map(|s| s.to_string()),
        });
    }

    pub fn add_term(&mut self, text: &str, context: &str, frequency: i64) {
        self._records.terms.push(LexicalTerm {
            text: text.to_string(),
            context: context.to_string(),
            frequency: frequency.max(0) as u32,
        });
    }

    pub fn add_community(
        &mut self,
        platform: Option<&str>,
        community_type: CommunityType,
        size: i64,
        influence: i64,
    ) {
        self._records.communities.push(Community {
            platform: platform.map(|s| s.to_string()),
            community_type,
            size: size.max(0) as u32,
            influence: influence.clamp(0, 10) as u32,
        });
    }

    /// Adds a risk entry. Inactive risks are discarded: only active risks
    /// may contribute to narrative volatility.
    pub fn add_risk(&mut self, topic: &str, growth_velocity: i64, active: bool) {
        if !active {
            return;
        }
        self._records.risks.push(Risk {
            topic: topic.to_string(),
            growth_velocity: growth_velocity.clamp(1, 5) as u32,
        });
    }

    pub fn add_archetype(&mut self, name: &str, weight_percent: f64, dominant_emotion: &str) {
        self._records.archetypes.push(Archetype {
            name: name.to_string(),
            weight_percent: weight_percent.max(0.0),
            dominant_emotion: dominant_emotion.to_string(),
        });
    }

    pub fn build(self) -> ProjectRecords {
        self._records
    }
}
