use log::{info, warn};
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use soft_vote::*;
use text_diff::print_diff;

pub mod io_json;
pub mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum SviError {
    #[snafu(display("Error opening workbook {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {name} has no header row"))]
    EmptyWorksheet { name: String },
    #[snafu(display("Error reading input file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing output file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Unknown input type {input_type} (expected 'json' or 'xlsx')"))]
    UnknownInputType { input_type: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SviResult<T> = Result<T, SviError>;

/// Assembles the JSON contract consumed by downstream presentation layers.
pub fn report_to_json(report: &SviReport) -> JSValue {
    let mut components: JSMap<String, JSValue> = JSMap::new();
    for stats in report.breakdown.iter() {
        components.insert(
            stats.index.code().to_string(),
            json!({
                "value": stats.value,
                "weight": stats.weight_percent,
                "name": stats.index.name(),
                "description": stats.index.description(),
                "icon": stats.index.icon(),
            }),
        );
    }

    let alerts: Vec<JSValue> = report
        .alerts
        .iter()
        .map(|a| {
            json!({
                "severity": a.severity.as_str(),
                "icon": a.icon,
                "message": a.message,
            })
        })
        .collect();

    let legend: Vec<JSValue> = report
        .legend
        .iter()
        .map(|row| {
            json!({
                "range": row.range,
                "state": row.state,
                "reading": row.reading,
                "color": row.color,
            })
        })
        .collect();

    json!({
        "svi": report.svi,
        "state": {
            "label": report.state.label,
            "color": report.state.color,
            "tier": report.state.tier.as_str(),
            "range": report.state.range,
        },
        "components": components,
        "alerts": alerts,
        "recommendation": report.recommendation,
        "interpretation": legend,
        "meta": {
            "narratives": report.counts.narratives,
            "emotions": report.counts.emotions,
            "language": report.counts.terms,
            "communities": report.counts.communities,
            "risks": report.counts.risks,
            "archetypes": report.counts.archetypes,
        },
    })
}

fn input_type_for(args: &crate::args::Args) -> String {
    if let Some(it) = &args.input_type {
        return it.to_lowercase();
    }
    match Path::new(&args.input).extension().and_then(|e| e.to_str()) {
        Some("xlsx") => "xlsx".to_string(),
        _ => "json".to_string(),
    }
}

pub fn run_scoring(args: &crate::args::Args) -> SviResult<()> {
    let input_type = input_type_for(args);
    let records = match input_type.as_str() {
        "json" => io_json::read_records(&args.input)?,
        "xlsx" => io_xlsx::read_records(&args.input)?,
        x => {
            return UnknownInputTypeSnafu { input_type: x }.fail();
        }
    };
    info!(
        "Loaded {} narratives, {} emotions, {} terms, {} communities, {} risks, {} archetypes from {}",
        records.narratives.len(),
        records.emotions.len(),
        records.terms.len(),
        records.communities.len(),
        records.risks.len(),
        records.archetypes.len(),
        args.input
    );

    let report = compute_report(&records, &ScoringConfig::DEFAULT);
    let report_js = report_to_json(&report);
    let pretty = serde_json::to_string_pretty(&report_js).context(ParsingJsonSnafu)?;

    match args.out.as_deref() {
        None | Some("stdout") => println!("{}", pretty),
        Some(path) => {
            fs::write(path, &pretty).context(WritingOutputSnafu { path })?;
            info!("Report written to {}", path);
        }
    }

    // The reference report, if provided for comparison.
    if let Some(ref_path) = &args.reference {
        let ref_str =
            fs::read_to_string(ref_path).context(OpeningInputSnafu { path: ref_path.as_str() })?;
        let ref_js: JSValue = serde_json::from_str(&ref_str).context(ParsingJsonSnafu)?;
        let pretty_ref = serde_json::to_string_pretty(&ref_js).context(ParsingJsonSnafu)?;
        if pretty_ref != pretty {
            warn!("Found differences with the reference report");
            print_diff(pretty_ref.as_str(), pretty.as_str(), "\n");
        } else {
            info!("Report matches the reference");
        }
    }
    Ok(())
}
