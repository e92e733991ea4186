//! JSON records reader.
//!
//! The field names follow the English record shapes; the Spanish column
//! names of the original listening exports are accepted as aliases. Missing
//! numeric fields fall back to the ingestion defaults (weight 5.0,
//! intensity 5.0, frequency 1, size 100, influence 5, velocity 3) and
//! out-of-range values are clamped by the builder.

use log::{debug, warn};
use serde::Deserialize;
use snafu::ResultExt;
use soft_vote::{Builder, CommunityType, EmotionCategory, NarrativeCategory, ProjectRecords};
use std::fs;

use super::{OpeningInputSnafu, ParsingJsonSnafu, SviResult};

#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeRow {
    #[serde(alias = "texto")]
    pub text: String,
    #[serde(default, alias = "tipo")]
    pub category: Option<String>,
    #[serde(default, alias = "peso")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmotionRow {
    #[serde(alias = "tipo")]
    pub category: String,
    #[serde(default, alias = "intensidad")]
    pub intensity: Option<f64>,
    #[serde(default, alias = "fuente")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TermRow {
    #[serde(alias = "termino")]
    pub term: String,
    #[serde(default, alias = "contexto")]
    pub context: Option<String>,
    #[serde(default, alias = "frecuencia")]
    pub frequency: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunityRow {
    #[serde(default, alias = "plataforma")]
    pub platform: Option<String>,
    #[serde(default, alias = "tipo")]
    pub category: Option<String>,
    #[serde(default, alias = "tamanio")]
    pub size: Option<i64>,
    #[serde(default, alias = "influencia")]
    pub influence: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskRow {
    #[serde(alias = "tema")]
    pub topic: String,
    #[serde(default, alias = "velocidad", alias = "velocidad_crecimiento")]
    pub growth_velocity: Option<i64>,
    #[serde(default = "default_true", alias = "activo")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeRow {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "peso_relativo")]
    pub weight_percent: Option<f64>,
    #[serde(default, alias = "emocion", alias = "emocion_dominante")]
    pub dominant_emotion: Option<String>,
}

/// The project records file: six optional collections, any of which may be
/// absent or empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default, alias = "narrativas")]
    pub narratives: Vec<NarrativeRow>,
    #[serde(default, alias = "emociones")]
    pub emotions: Vec<EmotionRow>,
    #[serde(default, alias = "lenguaje")]
    pub language: Vec<TermRow>,
    #[serde(default, alias = "comunidades")]
    pub communities: Vec<CommunityRow>,
    #[serde(default, alias = "riesgos")]
    pub risks: Vec<RiskRow>,
    #[serde(default, alias = "arquetipos")]
    pub archetypes: Vec<ArchetypeRow>,
}

fn default_true() -> bool {
    true
}

pub fn read_records(path: &str) -> SviResult<ProjectRecords> {
    let contents = fs::read_to_string(path).context(OpeningInputSnafu { path })?;
    let file: ProjectFile = serde_json::from_str(&contents).context(ParsingJsonSnafu)?;
    if let Some(name) = &file.project {
        debug!("Reading records for project {:?}", name);
    }
    Ok(records_from_file(&file))
}

pub fn records_from_file(file: &ProjectFile) -> ProjectRecords {
    let mut builder = Builder::new();

    for row in file.narratives.iter() {
        let category = row
            .category
            .as_deref()
            .and_then(NarrativeCategory::from_label)
            .unwrap_or(NarrativeCategory::Dominant);
        builder.add_narrative(&row.text, category, row.weight.unwrap_or(5.0));
    }

    for row in file.emotions.iter() {
        match EmotionCategory::from_label(&row.category) {
            Some(category) => {
                builder.add_emotion(category, row.intensity.unwrap_or(5.0), row.source.as_deref())
            }
            None => warn!("Skipping emotion with unknown category {:?}", row.category),
        }
    }

    for row in file.language.iter() {
        builder.add_term(
            &row.term,
            row.context.as_deref().unwrap_or(""),
            row.frequency.unwrap_or(1),
        );
    }

    for row in file.communities.iter() {
        let community_type = row
            .category
            .as_deref()
            .and_then(CommunityType::from_label)
            .unwrap_or(CommunityType::Active);
        builder.add_community(
            row.platform.as_deref(),
            community_type,
            row.size.unwrap_or(100),
            row.influence.unwrap_or(5),
        );
    }

    for row in file.risks.iter() {
        builder.add_risk(&row.topic, row.growth_velocity.unwrap_or(3), row.active);
    }

    for row in file.archetypes.iter() {
        builder.add_archetype(
            &row.name,
            row.weight_percent.unwrap_or(0.0),
            row.dominant_emotion.as_deref().unwrap_or(""),
        );
    }

    builder.build()
}
