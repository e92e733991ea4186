// ********* Input data structures ***********

/// The discourse position of a tracked narrative.
///
/// Emergent narratives and counter-narratives are the "moving" part of the
/// landscape; dominant narratives are the settled part.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum NarrativeCategory {
    Dominant,
    Emergent,
    CounterNarrative,
}

impl NarrativeCategory {
    /// Parses a category label. Accepts the English labels and the Spanish
    /// labels used by the upstream listening exports.
    pub fn from_label(label: &str) -> Option<NarrativeCategory> {
        match label.trim().to_lowercase().as_str() {
            "dominant" | "dominante" => Some(NarrativeCategory::Dominant),
            "emergent" | "emergente" => Some(NarrativeCategory::Emergent),
            "counter-narrative" | "counter_narrative" | "contrarrelato" => {
                Some(NarrativeCategory::CounterNarrative)
            }
            _ => None,
        }
    }
}

/// A tracked public discourse statement with an assigned salience weight (1-10).
#[derive(PartialEq, Debug, Clone)]
pub struct Narrative {
    pub text: String,
    pub category: NarrativeCategory,
    pub weight: f64,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum EmotionCategory {
    Anger,
    Fear,
    Frustration,
    Hope,
    Distrust,
    Pride,
}

impl EmotionCategory {
    /// Parses an emotion label. Accepts the English labels and the Spanish
    /// labels used by the upstream listening exports.
    pub fn from_label(label: &str) -> Option<EmotionCategory> {
        match label.trim().to_lowercase().as_str() {
            "anger" | "ira" => Some(EmotionCategory::Anger),
            "fear" | "miedo" => Some(EmotionCategory::Fear),
            "frustration" | "frustracion" | "frustración" => Some(EmotionCategory::Frustration),
            "hope" | "esperanza" => Some(EmotionCategory::Hope),
            "distrust" | "desconfianza" => Some(EmotionCategory::Distrust),
            "pride" | "orgullo" => Some(EmotionCategory::Pride),
            _ => None,
        }
    }

    /// "Soft" emotions erode commitment without hardening it the way anger
    /// or pride do.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            EmotionCategory::Distrust | EmotionCategory::Frustration | EmotionCategory::Fear
        )
    }

    pub fn is_hard(&self) -> bool {
        matches!(self, EmotionCategory::Anger | EmotionCategory::Pride)
    }
}

/// An emotion observation on a 0-10 intensity scale.
#[derive(PartialEq, Debug, Clone)]
pub struct Emotion {
    pub category: EmotionCategory,
    pub intensity: f64,
    pub source: Option<String>,
}

/// A lexical term detected in the listening stream, with the textual context
/// it appeared in and how often it was observed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LexicalTerm {
    pub text: String,
    pub context: String,
    pub frequency: u32,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum CommunityType {
    Active,
    Polarized,
    Amplifier,
    Silent,
}

impl CommunityType {
    pub fn from_label(label: &str) -> Option<CommunityType> {
        match label.trim().to_lowercase().as_str() {
            "active" | "activo" => Some(CommunityType::Active),
            "polarized" | "polarizado" => Some(CommunityType::Polarized),
            "amplifier" | "amplificador" => Some(CommunityType::Amplifier),
            "silent" | "silencioso" => Some(CommunityType::Silent),
            _ => None,
        }
    }
}

/// An observed online or offline community, sized and rated for influence (1-10).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Community {
    pub platform: Option<String>,
    pub community_type: CommunityType,
    pub size: u32,
    pub influence: u32,
}

/// An active narrative risk with its growth velocity (1-5).
///
/// The engine only ever sees active risks: the boundary (builder or file
/// reader) drops inactive ones before they reach the calculators.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Risk {
    pub topic: String,
    pub growth_velocity: u32,
}

/// A named audience persona with an estimated population-share weight (in
/// percent) and a dominant emotional profile.
#[derive(PartialEq, Debug, Clone)]
pub struct Archetype {
    pub name: String,
    pub weight_percent: f64,
    pub dominant_emotion: String,
}

/// The six record collections of one project, as handed over by the record
/// store. The engine reads them and never mutates them.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ProjectRecords {
    pub narratives: Vec<Narrative>,
    pub emotions: Vec<Emotion>,
    pub terms: Vec<LexicalTerm>,
    pub communities: Vec<Community>,
    pub risks: Vec<Risk>,
    pub archetypes: Vec<Archetype>,
}

// ******** Output data structures *********

/// The five sub-indices combined into the SVI.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SubIndex {
    /// Narrative Indefinition Index
    Iin,
    /// Soft Emotion Index
    Ieb,
    /// Non-Militancy Index
    Inm,
    /// Narrative Volatility Index
    Ivn,
    /// Conditional Confidence Index
    Icc,
}

impl SubIndex {
    pub fn code(&self) -> &'static str {
        match self {
            SubIndex::Iin => "IIN",
            SubIndex::Ieb => "IEB",
            SubIndex::Inm => "INM",
            SubIndex::Ivn => "IVN",
            SubIndex::Icc => "ICC",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubIndex::Iin => "Narrative Indefinition",
            SubIndex::Ieb => "Soft Emotion",
            SubIndex::Inm => "Non-Militancy",
            SubIndex::Ivn => "Narrative Volatility",
            SubIndex::Icc => "Conditional Confidence",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SubIndex::Iin => "Non-decision discourse and indecision language detected",
            SubIndex::Ieb => "Distrust and frustration prevailing over anger and pride",
            SubIndex::Inm => "Communities and archetypes that watch without actively defending",
            SubIndex::Ivn => "Narrative diversity and speed of change under micro-events",
            SubIndex::Icc => "Reversible support, guarded expectation and conditional language",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SubIndex::Iin => "🔍",
            SubIndex::Ieb => "🎭",
            SubIndex::Inm => "👁️",
            SubIndex::Ivn => "⚡",
            SubIndex::Icc => "🤝",
        }
    }
}

/// One line of the per-sub-index breakdown: the rounded value and the weight
/// (in percent) this sub-index carries in the composite.
#[derive(PartialEq, Debug, Clone)]
pub struct SubIndexStats {
    pub index: SubIndex,
    pub value: f64,
    pub weight_percent: u32,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
    Critical,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
            Tier::Critical => "critical",
        }
    }
}

/// The state label attached to a score tier.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScoreState {
    pub label: &'static str,
    pub color: &'static str,
    pub tier: Tier,
    pub range: &'static str,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Opportunity,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Opportunity => "opportunity",
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub icon: &'static str,
    pub message: &'static str,
}

/// One row of the static interpretation legend shipped with every report.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LegendRow {
    pub range: &'static str,
    pub state: &'static str,
    pub reading: &'static str,
    pub color: &'static str,
}

/// The raw input counts the report was computed from.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct RecordCounts {
    pub narratives: usize,
    pub emotions: usize,
    pub terms: usize,
    pub communities: usize,
    pub risks: usize,
    pub archetypes: usize,
}

/// The full report: the composite score, its interpretation and the material
/// a caller needs to present or archive it.
#[derive(PartialEq, Debug, Clone)]
pub struct SviReport {
    pub svi: f64,
    pub state: ScoreState,
    pub breakdown: Vec<SubIndexStats>,
    pub alerts: Vec<Alert>,
    pub recommendation: &'static str,
    pub legend: &'static [LegendRow],
    pub counts: RecordCounts,
}

// ********* Configuration **********

// The scoring constants. They mirror the calibration of the reference
// methodology and are deliberately immutable: a project with zero data in
// one category contributes the documented neutral default, the weights are
// never renormalized.

/// The relative weight of each sub-index in the composite. Must sum to 1.0.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct SubIndexWeights {
    pub iin: f64,
    pub ieb: f64,
    pub inm: f64,
    pub ivn: f64,
    pub icc: f64,
}

/// How much each community type counts as "passively observing".
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct PassivityWeights {
    pub silent: f64,
    pub amplifier: f64,
    pub active: f64,
    pub polarized: f64,
}

impl PassivityWeights {
    pub fn weight_for(&self, community_type: CommunityType) -> f64 {
        match community_type {
            CommunityType::Silent => self.silent,
            CommunityType::Amplifier => self.amplifier,
            CommunityType::Active => self.active,
            CommunityType::Polarized => self.polarized,
        }
    }
}

/// The fixed configuration of the engine: keyword lexicons, sub-index
/// weights and the calibration constants of the individual calculators.
///
/// `amplification` and `confidence_baseline` are empirical tuning constants
/// inherited from the reference methodology. Their derivation is not
/// documented, which is why they live here as configuration rather than as
/// literals inside the calculators.
#[derive(PartialEq, Debug, Clone)]
pub struct ScoringConfig {
    /// Phrases signaling unresolved voting intent.
    pub indecision_lexicon: &'static [&'static str],
    /// Phrases signaling reversible, conditional backing.
    pub conditional_lexicon: &'static [&'static str],
    pub weights: SubIndexWeights,
    pub passivity: PassivityWeights,
    /// IIN amplification: a 20% raw hit rate maps to ~50 in the index.
    pub amplification: f64,
    /// ICC baseline offset: some conditional confidence is always present.
    pub confidence_baseline: f64,
    /// Hope at or below this intensity reinforces softness in IEB.
    pub tepid_hope_ceiling: f64,
    /// Stand-in intensity when an emotion subset is empty (scale midpoint).
    pub neutral_intensity: f64,
    /// Inclusive weight/intensity band marking not-yet-consolidated support.
    pub conditional_band: (f64, f64),
}

const INDECISION_LEXICON: &[&str] = &[
    "todavía",
    "estoy viendo",
    "no me convence",
    "último momento",
    "capaz",
    "depende",
    "aún no",
    "sin decidir",
    "ninguno",
    "todos tienen",
    "no hay por quién",
    "puede definirlo",
    "indeciso",
    "blando",
    "a último",
    "viendo opciones",
    "evaluando",
];

const CONDITIONAL_LEXICON: &[&str] = &[
    "si cumple",
    "por ahora",
    "me gusta pero",
    "a ver si",
    "voto si",
    "si hace",
    "todavía viendo",
    "con reservas",
];

impl ScoringConfig {
    pub const DEFAULT: ScoringConfig = ScoringConfig {
        indecision_lexicon: INDECISION_LEXICON,
        conditional_lexicon: CONDITIONAL_LEXICON,
        weights: SubIndexWeights {
            iin: 0.25,
            ieb: 0.20,
            inm: 0.20,
            ivn: 0.20,
            icc: 0.15,
        },
        passivity: PassivityWeights {
            silent: 100.0,
            amplifier: 65.0,
            active: 35.0,
            polarized: 5.0,
        },
        amplification: 2.5,
        confidence_baseline: 15.0,
        tepid_hope_ceiling: 6.0,
        neutral_intensity: 5.0,
        conditional_band: (3.0, 7.0),
    };
}
