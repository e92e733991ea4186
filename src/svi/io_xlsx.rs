//! Excel records reader for the listening-template workbook layout: one
//! worksheet per record kind, first row is the header, one record per row.
//! Worksheet and column names are accepted in English or in the original
//! Spanish template spelling. Rows with an empty key cell are skipped, and
//! risks imported from a workbook are active by definition.

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use snafu::{OptionExt, ResultExt};
use soft_vote::{Builder, CommunityType, EmotionCategory, NarrativeCategory, ProjectRecords};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use super::{EmptyWorksheetSnafu, OpeningExcelSnafu, SviResult};

type Workbook = Xlsx<BufReader<File>>;

pub fn read_records(path: &str) -> SviResult<ProjectRecords> {
    let mut workbook: Workbook = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let mut builder = Builder::new();

    if let Some(range) = find_sheet(&mut workbook, &["narratives", "narrativas"], path)? {
        parse_narratives(&range, &mut builder)?;
    }
    if let Some(range) = find_sheet(&mut workbook, &["emotions", "emociones"], path)? {
        parse_emotions(&range, &mut builder)?;
    }
    if let Some(range) = find_sheet(&mut workbook, &["language", "lenguaje"], path)? {
        parse_terms(&range, &mut builder)?;
    }
    if let Some(range) = find_sheet(&mut workbook, &["communities", "comunidades"], path)? {
        parse_communities(&range, &mut builder)?;
    }
    if let Some(range) = find_sheet(&mut workbook, &["risks", "riesgos"], path)? {
        parse_risks(&range, &mut builder)?;
    }
    if let Some(range) = find_sheet(&mut workbook, &["archetypes", "arquetipos"], path)? {
        parse_archetypes(&range, &mut builder)?;
    }

    Ok(builder.build())
}

fn find_sheet(
    workbook: &mut Workbook,
    names: &[&str],
    path: &str,
) -> SviResult<Option<Range<DataType>>> {
    let available: Vec<String> = workbook.sheet_names().to_vec();
    for sheet_name in available {
        if names.contains(&sheet_name.trim().to_lowercase().as_str()) {
            match workbook.worksheet_range(&sheet_name) {
                Some(range) => {
                    let range = range.context(OpeningExcelSnafu { path })?;
                    return Ok(Some(range));
                }
                None => return Ok(None),
            }
        }
    }
    debug!("No worksheet named {:?} in the workbook", names);
    Ok(None)
}

/// Maps lowercased header names to column indices from the first row.
fn headers(range: &Range<DataType>, sheet: &str) -> SviResult<HashMap<String, usize>> {
    let first = range
        .rows()
        .next()
        .context(EmptyWorksheetSnafu { name: sheet })?;
    let mut map: HashMap<String, usize> = HashMap::new();
    for (idx, cell) in first.iter().enumerate() {
        if let DataType::String(s) = cell {
            map.insert(s.trim().to_lowercase(), idx);
        }
    }
    Ok(map)
}

fn col(headers: &HashMap<String, usize>, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|n| headers.get(*n).copied())
}

fn cell_str(row: &[DataType], idx: Option<usize>) -> Option<String> {
    match idx.and_then(|i| row.get(i)) {
        Some(DataType::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(DataType::Int(i)) => Some(i.to_string()),
        Some(DataType::Float(f)) => Some(f.to_string()),
        _ => None,
    }
}

fn cell_f64(row: &[DataType], idx: Option<usize>) -> Option<f64> {
    match idx.and_then(|i| row.get(i)) {
        Some(DataType::Float(f)) => Some(*f),
        Some(DataType::Int(i)) => Some(*i as f64),
        Some(DataType::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn cell_i64(row: &[DataType], idx: Option<usize>) -> Option<i64> {
    match idx.and_then(|i| row.get(i)) {
        Some(DataType::Int(i)) => Some(*i),
        Some(DataType::Float(f)) => Some(*f as i64),
        Some(DataType::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn parse_narratives(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "narratives")?;
    let text_col = col(&h, &["text", "texto"]);
    let category_col = col(&h, &["category", "tipo"]);
    let weight_col = col(&h, &["weight", "peso"]);
    for row in range.rows().skip(1) {
        let text = match cell_str(row, text_col) {
            Some(t) => t,
            None => continue,
        };
        let category = cell_str(row, category_col)
            .as_deref()
            .and_then(NarrativeCategory::from_label)
            .unwrap_or(NarrativeCategory::Dominant);
        builder.add_narrative(&text, category, cell_f64(row, weight_col).unwrap_or(5.0));
    }
    Ok(())
}

fn parse_emotions(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "emotions")?;
    let category_col = col(&h, &["category", "tipo"]);
    let intensity_col = col(&h, &["intensity", "intensidad"]);
    let source_col = col(&h, &["source", "fuente"]);
    for row in range.rows().skip(1) {
        let label = match cell_str(row, category_col) {
            Some(l) => l,
            None => continue,
        };
        if let Some(category) = EmotionCategory::from_label(&label) {
            builder.add_emotion(
                category,
                cell_f64(row, intensity_col).unwrap_or(5.0),
                cell_str(row, source_col).as_deref(),
            );
        } else {
            debug!("Skipping emotion with unknown category {:?}", label);
        }
    }
    Ok(())
}

fn parse_terms(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "language")?;
    let term_col = col(&h, &["term", "termino"]);
    let context_col = col(&h, &["context", "contexto"]);
    let frequency_col = col(&h, &["frequency", "frecuencia"]);
    for row in range.rows().skip(1) {
        let term = match cell_str(row, term_col) {
            Some(t) => t,
            None => continue,
        };
        builder.add_term(
            &term,
            cell_str(row, context_col).as_deref().unwrap_or(""),
            cell_i64(row, frequency_col).unwrap_or(1),
        );
    }
    Ok(())
}

fn parse_communities(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "communities")?;
    let name_col = col(&h, &["name", "nombre"]);
    let platform_col = col(&h, &["platform", "plataforma"]);
    let type_col = col(&h, &["type", "category", "tipo"]);
    let size_col = col(&h, &["size", "tamanio"]);
    let influence_col = col(&h, &["influence", "influencia"]);
    for row in range.rows().skip(1) {
        if cell_str(row, name_col).is_none() {
            continue;
        }
        let community_type = cell_str(row, type_col)
            .as_deref()
            .and_then(CommunityType::from_label)
            .unwrap_or(CommunityType::Active);
        builder.add_community(
            cell_str(row, platform_col).as_deref(),
            community_type,
            cell_i64(row, size_col).unwrap_or(100),
            cell_i64(row, influence_col).unwrap_or(5),
        );
    }
    Ok(())
}

fn parse_risks(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "risks")?;
    let topic_col = col(&h, &["topic", "tema"]);
    let velocity_col = col(&h, &["velocity", "velocidad", "velocidad_crecimiento"]);
    for row in range.rows().skip(1) {
        let topic = match cell_str(row, topic_col) {
            Some(t) => t,
            None => continue,
        };
        // Workbook rows describe current risks: imported as active.
        builder.add_risk(&topic, cell_i64(row, velocity_col).unwrap_or(3), true);
    }
    Ok(())
}

fn parse_archetypes(range: &Range<DataType>, builder: &mut Builder) -> SviResult<()> {
    let h = headers(range, "archetypes")?;
    let name_col = col(&h, &["name", "nombre"]);
    let weight_col = col(&h, &["weight_percent", "peso_relativo"]);
    let emotion_col = col(&h, &["dominant_emotion", "emocion", "emocion_dominante"]);
    for row in range.rows().skip(1) {
        let name = match cell_str(row, name_col) {
            Some(n) => n,
            None => continue,
        };
        builder.add_archetype(
            &name,
            cell_f64(row, weight_col).unwrap_or(0.0),
            cell_str(row, emotion_col).as_deref().unwrap_or(""),
        );
    }
    Ok(())
}
