mod builder;
mod classifier;
mod config;
pub mod manual;

use log::{debug, info};

pub use crate::builder::Builder;
pub use crate::classifier::{LexiconMatcher, SubstringMatcher};
pub use crate::config::*;

use crate::classifier::term_hits;

// **** Scoring helpers ****

/// Neutral score a sub-index degrades to when it has no data to work with.
const NEUTRAL_SCORE: f64 = 50.0;

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn in_band(value: f64, band: (f64, f64)) -> bool {
    value >= band.0 && value <= band.1
}

// **** Sub-index calculators ****

/// IIN: how much of the discourse expresses non-decision.
///
/// Half the raw score comes from the share of narratives hitting the
/// indecision lexicon, half from the frequency-weighted share of lexical
/// terms hitting it. The raw score is amplified so that the index stays
/// discriminative in the typical low-hit-rate regime.
fn narrative_indefinition(
    narratives: &[Narrative],
    terms: &[LexicalTerm],
    scoring: &ScoringConfig,
    matcher: &dyn LexiconMatcher,
) -> f64 {
    let mut narrative_score = 0.0;
    if !narratives.is_empty() {
        let hits = narratives
            .iter()
            .filter(|n| matcher.matches(&n.text, scoring.indecision_lexicon))
            .count();
        narrative_score = hits as f64 / narratives.len() as f64 * 100.0;
    }

    let mut lexical_score = 0.0;
    let total_freq: u64 = terms.iter().map(|t| t.frequency as u64).sum();
    if total_freq > 0 {
        let hit_freq: u64 = terms
            .iter()
            .filter(|t| term_hits(t, scoring.indecision_lexicon, matcher))
            .map(|t| t.frequency as u64)
            .sum();
        lexical_score = hit_freq as f64 / total_freq as f64 * 100.0;
    }

    let raw = 0.5 * narrative_score + 0.5 * lexical_score;
    (raw * scoring.amplification).min(100.0)
}

/// IEB: dominance of soft emotions (distrust, frustration, fear) over hard
/// ones (anger, pride). Tepid hope reinforces softness.
fn soft_emotion(emotions: &[Emotion], scoring: &ScoringConfig) -> f64 {
    if emotions.is_empty() {
        return NEUTRAL_SCORE;
    }

    let soft_vals: Vec<f64> = emotions
        .iter()
        .filter(|e| e.category.is_soft())
        .map(|e| e.intensity)
        .collect();
    let hard_vals: Vec<f64> = emotions
        .iter()
        .filter(|e| e.category.is_hard())
        .map(|e| e.intensity)
        .collect();
    let tepid_hope: Vec<f64> = emotions
        .iter()
        .filter(|e| e.category == EmotionCategory::Hope && e.intensity <= scoring.tepid_hope_ceiling)
        .map(|e| e.intensity)
        .collect();

    let soft_avg = mean(&soft_vals).unwrap_or(scoring.neutral_intensity);
    let hard_avg = mean(&hard_vals).unwrap_or(scoring.neutral_intensity);
    let hope_bonus = mean(&tepid_hope).map_or(0.0, |m| m / 10.0 * 15.0);

    // Maps the [-10, 10] difference range onto [0, 80].
    let base = (soft_avg - hard_avg + 10.0) / 20.0 * 80.0;
    (base + hope_bonus).clamp(0.0, 100.0)
}

/// INM: share of the observed audience that is passively watching rather
/// than actively defending a position.
fn non_militancy(
    communities: &[Community],
    archetypes: &[Archetype],
    scoring: &ScoringConfig,
) -> f64 {
    let community_score = if communities.is_empty() {
        NEUTRAL_SCORE
    } else {
        // Each community counts proportionally to its reach (size x influence).
        let mut total_reach = 0.0;
        let mut weighted = 0.0;
        for c in communities.iter() {
            let reach = c.size as f64 * c.influence as f64;
            total_reach += reach;
            weighted += reach * scoring.passivity.weight_for(c.community_type);
        }
        if total_reach > 0.0 {
            weighted / total_reach
        } else {
            NEUTRAL_SCORE
        }
    };

    let archetype_score = if archetypes.is_empty() {
        NEUTRAL_SCORE
    } else {
        let total_weight: f64 = archetypes.iter().map(|a| a.weight_percent).sum();
        let soft_weight: f64 = archetypes
            .iter()
            .filter(|a| {
                EmotionCategory::from_label(&a.dominant_emotion)
                    .map_or(false, |c| c.is_soft())
            })
            .map(|a| a.weight_percent)
            .sum();
        if total_weight > 0.0 {
            soft_weight / total_weight * 100.0
        } else {
            soft_weight
        }
    };

    0.6 * community_score + 0.4 * archetype_score
}

/// IVN: how fluid the narrative landscape is, blending narrative diversity
/// with the growth velocity of the active risks.
fn narrative_volatility(narratives: &[Narrative], risks: &[Risk], _scoring: &ScoringConfig) -> f64 {
    let diversity_score = if narratives.is_empty() {
        NEUTRAL_SCORE
    } else {
        let moving = narratives
            .iter()
            .filter(|n| {
                matches!(
                    n.category,
                    NarrativeCategory::Emergent | NarrativeCategory::CounterNarrative
                )
            })
            .count();
        moving as f64 / narratives.len() as f64 * 100.0
    };

    let velocity_score = if risks.is_empty() {
        NEUTRAL_SCORE
    } else {
        let avg = risks.iter().map(|r| r.growth_velocity as f64).sum::<f64>() / risks.len() as f64;
        avg / 5.0 * 100.0
    };

    0.5 * diversity_score + 0.5 * velocity_score
}

/// ICC: reversible, not-yet-consolidated support. Always carries a baseline
/// offset: some conditional confidence is structurally present.
fn conditional_confidence(
    narratives: &[Narrative],
    emotions: &[Emotion],
    terms: &[LexicalTerm],
    scoring: &ScoringConfig,
    matcher: &dyn LexiconMatcher,
) -> f64 {
    // Emergent narratives of moderate weight: support that has not settled.
    let narrative_score = if narratives.is_empty() {
        0.0
    } else {
        let conditional = narratives
            .iter()
            .filter(|n| {
                n.category == NarrativeCategory::Emergent && in_band(n.weight, scoring.conditional_band)
            })
            .count();
        conditional as f64 / narratives.len() as f64 * 100.0
    };

    // Low-to-moderate hope: expectation held with reservations.
    let hope: Vec<&Emotion> = emotions
        .iter()
        .filter(|e| e.category == EmotionCategory::Hope)
        .collect();
    let hope_score = if hope.is_empty() {
        0.0
    } else {
        let guarded = hope
            .iter()
            .filter(|e| in_band(e.intensity, scoring.conditional_band))
            .count();
        guarded as f64 / hope.len() as f64 * 100.0
    };

    let total_freq: u64 = terms.iter().map(|t| t.frequency as u64).sum::<u64>().max(1);
    let conditional_freq: u64 = terms
        .iter()
        .filter(|t| term_hits(t, scoring.conditional_lexicon, matcher))
        .map(|t| t.frequency as u64)
        .sum();
    let lexical_score = conditional_freq as f64 / total_freq as f64 * 100.0;

    let raw = 0.5 * narrative_score + 0.3 * hope_score + 0.2 * lexical_score;
    (raw + scoring.confidence_baseline).min(100.0)
}

// **** Aggregation and interpretation ****

fn aggregate(iin: f64, ieb: f64, inm: f64, ivn: f64, icc: f64, weights: &SubIndexWeights) -> f64 {
    round1(
        weights.iin * iin
            + weights.ieb * ieb
            + weights.inm * inm
            + weights.ivn * ivn
            + weights.icc * icc,
    )
}

fn classify(svi: f64) -> ScoreState {
    if svi <= 30.0 {
        ScoreState {
            label: "Hard-vote predominant",
            color: "#56c596",
            tier: Tier::Low,
            range: "0–30",
        }
    } else if svi <= 55.0 {
        ScoreState {
            label: "Semi-soft vote — activatable",
            color: "#f7c948",
            tier: Tier::Medium,
            range: "31–55",
        }
    } else if svi <= 75.0 {
        ScoreState {
            label: "High soft vote — critical zone",
            color: "#f7964a",
            tier: Tier::High,
            range: "56–75",
        }
    } else {
        ScoreState {
            label: "Extreme soft vote — flight risk",
            color: "#f76c6c",
            tier: Tier::Critical,
            range: "76–100",
        }
    }
}

// Each rule fires independently; the output order is fixed as listed.
fn evaluate_alerts(svi: f64, iin: f64, ieb: f64, ivn: f64, icc: f64) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = Vec::new();
    if svi > 75.0 {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            icon: "🚨",
            message: "Critical SVI — high risk of abstention or a punishment vote",
        });
    }
    if svi > 70.0 && ieb < 40.0 {
        alerts.push(Alert {
            severity: AlertSeverity::Critical,
            icon: "🚨",
            message: "High SVI with anger on the rise — possible flight toward an aggressive opposing candidate",
        });
    }
    if ivn > 70.0 {
        alerts.push(Alert {
            severity: AlertSeverity::Warning,
            icon: "⚡",
            message: "High volatility — any messaging error can move the vote in under 72 hours",
        });
    }
    if svi > 55.0 && icc > 60.0 {
        alerts.push(Alert {
            severity: AlertSeverity::Opportunity,
            icon: "✅",
            message: "Conditional-trust signals — activation window open",
        });
    }
    if svi > 50.0 && iin > 60.0 {
        alerts.push(Alert {
            severity: AlertSeverity::Warning,
            icon: "👁️",
            message: "High narrative indefinition — the soft vote has no home candidate yet",
        });
    }
    alerts
}

fn recommendation(svi: f64) -> &'static str {
    if svi >= 56.0 {
        "The main battleground is not between hardened blocs but over a broad, \
         volatile soft vote that is highly sensitive to messaging errors. \
         Prioritize messages of certainty, order and credibility. Avoid \
         polarization, sweeping promises and an aggressive tone."
    } else if svi >= 31.0 {
        "A semi-soft segment exists that can be activated with concrete, \
         credible proposals. Messages that combine empathy with measurable \
         solutions can consolidate support. Avoid unnecessary polarization."
    } else {
        "The electorate leans toward consolidated positions. The main contest \
         is between blocs. Focus energy on mobilizing your own base and do not \
         push the semi-soft voter away with extreme messaging."
    }
}

/// The static interpretation legend shipped with every report.
pub const INTERPRETATION_LEGEND: &[LegendRow] = &[
    LegendRow {
        range: "0 – 30",
        state: "Hard vote",
        reading: "Hard to influence",
        color: "#56c596",
    },
    LegendRow {
        range: "31 – 55",
        state: "Semi-soft vote",
        reading: "Can be activated or lost",
        color: "#f7c948",
    },
    LegendRow {
        range: "56 – 75",
        state: "High soft vote",
        reading: "Critical zone of contention",
        color: "#f7964a",
    },
    LegendRow {
        range: "76 – 100",
        state: "Extreme soft vote",
        reading: "High risk of abstention or punishment vote",
        color: "#f76c6c",
    },
];

// **** Entry points ****

/// Computes the Soft-Vote Index report for one project's record collections
/// with the production substring matcher.
///
/// The computation is a pure function of its inputs: it never fails, never
/// mutates the records, and invoking it twice on identical collections
/// yields identical output.
pub fn compute_report(records: &ProjectRecords, scoring: &ScoringConfig) -> SviReport {
    compute_report_with(records, scoring, &SubstringMatcher)
}

/// Same as [`compute_report`], with a caller-supplied lexicon matcher.
pub fn compute_report_with(
    records: &ProjectRecords,
    scoring: &ScoringConfig,
    matcher: &dyn LexiconMatcher,
) -> SviReport {
    info!(
        "Scoring {} narratives, {} emotions, {} terms, {} communities, {} risks, {} archetypes",
        records.narratives.len(),
        records.emotions.len(),
        records.terms.len(),
        records.communities.len(),
        records.risks.len(),
        records.archetypes.len()
    );

    let iin = narrative_indefinition(&records.narratives, &records.terms, scoring, matcher);
    let ieb = soft_emotion(&records.emotions, scoring);
    let inm = non_militancy(&records.communities, &records.archetypes, scoring);
    let ivn = narrative_volatility(&records.narratives, &records.risks, scoring);
    let icc = conditional_confidence(
        &records.narratives,
        &records.emotions,
        &records.terms,
        scoring,
        matcher,
    );
    debug!(
        "sub-indices: IIN={:.2} IEB={:.2} INM={:.2} IVN={:.2} ICC={:.2}",
        iin, ieb, inm, ivn, icc
    );

    let svi = aggregate(iin, ieb, inm, ivn, icc, &scoring.weights);
    info!("SVI: {}", svi);

    let weights = &scoring.weights;
    let breakdown = vec![
        sub_stats(SubIndex::Iin, iin, weights.iin),
        sub_stats(SubIndex::Ieb, ieb, weights.ieb),
        sub_stats(SubIndex::Inm, inm, weights.inm),
        sub_stats(SubIndex::Ivn, ivn, weights.ivn),
        sub_stats(SubIndex::Icc, icc, weights.icc),
    ];

    SviReport {
        svi,
        state: classify(svi),
        breakdown,
        alerts: evaluate_alerts(svi, iin, ieb, ivn, icc),
        recommendation: recommendation(svi),
        legend: INTERPRETATION_LEGEND,
        counts: RecordCounts {
            narratives: records.narratives.len(),
            emotions: records.emotions.len(),
            terms: records.terms.len(),
            communities: records.communities.len(),
            risks: records.risks.len(),
            archetypes: records.archetypes.len(),
        },
    }
}

fn sub_stats(index: SubIndex, value: f64, weight: f64) -> SubIndexStats {
    SubIndexStats {
        index,
        value: round1(value),
        weight_percent: (weight * 100.0).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORING: &ScoringConfig = &ScoringConfig::DEFAULT;
    const MATCHER: &SubstringMatcher = &SubstringMatcher;

    fn narrative(text: &str, category: NarrativeCategory, weight: f64) -> Narrative {
        Narrative {
            text: text.to_string(),
            category,
            weight,
        }
    }

    fn emotion(category: EmotionCategory, intensity: f64) -> Emotion {
        Emotion {
            category,
            intensity,
            source: None,
        }
    }

    fn term(text: &str, context: &str, frequency: u32) -> LexicalTerm {
        LexicalTerm {
            text: text.to_string(),
            context: context.to_string(),
            frequency,
        }
    }

    fn community(community_type: CommunityType, size: u32, influence: u32) -> Community {
        Community {
            platform: None,
            community_type,
            size,
            influence,
        }
    }

    fn archetype(name: &str, weight_percent: f64, dominant_emotion: &str) -> Archetype {
        Archetype {
            name: name.to_string(),
            weight_percent,
            dominant_emotion: dominant_emotion.to_string(),
        }
    }

    fn dense_records() -> ProjectRecords {
        ProjectRecords {
            narratives: vec![
                narrative("Todavía estoy viendo opciones", NarrativeCategory::Emergent, 5.0),
                narrative("Con este gobierno no llegamos", NarrativeCategory::CounterNarrative, 8.0),
                narrative("La obra pública avanza", NarrativeCategory::Dominant, 6.0),
            ],
            emotions: vec![
                emotion(EmotionCategory::Distrust, 8.0),
                emotion(EmotionCategory::Frustration, 7.0),
                emotion(EmotionCategory::Hope, 5.0),
                emotion(EmotionCategory::Anger, 4.0),
            ],
            terms: vec![
                term("indeciso", "se declara indeciso en los grupos", 12),
                term("voto si cumple", "lo voto si cumple con la obra", 5),
                term("tarifas", "quejas por tarifas", 20),
            ],
            communities: vec![
                community(CommunityType::Silent, 5000, 4),
                community(CommunityType::Polarized, 800, 9),
            ],
            risks: vec![
                Risk {
                    topic: "tarifazo".to_string(),
                    growth_velocity: 4,
                },
            ],
            archetypes: vec![
                archetype("Desencantado urbano", 45.0, "distrust"),
                archetype("Militante leal", 30.0, "pride"),
                archetype("Esperanzado cauto", 25.0, "hope"),
            ],
        }
    }

    #[test]
    fn empty_project_degrades_to_documented_defaults() {
        let records = ProjectRecords::default();
        assert_eq!(
            narrative_indefinition(&records.narratives, &records.terms, SCORING, MATCHER),
            0.0
        );
        assert_eq!(soft_emotion(&records.emotions, SCORING), 50.0);
        assert_eq!(
            non_militancy(&records.communities, &records.archetypes, SCORING),
            50.0
        );
        assert_eq!(
            narrative_volatility(&records.narratives, &records.risks, SCORING),
            50.0
        );
        assert_eq!(
            conditional_confidence(
                &records.narratives,
                &records.emotions,
                &records.terms,
                SCORING,
                MATCHER
            ),
            15.0
        );

        // 0.25*0 + 0.20*50 + 0.20*50 + 0.20*50 + 0.15*15 = 32.25 -> 32.3
        let report = compute_report(&records, SCORING);
        assert_eq!(report.svi, 32.3);
        assert_eq!(report.state.tier, Tier::Medium);
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn all_scores_stay_in_bounds() {
        for records in [
            ProjectRecords::default(),
            dense_records(),
            ProjectRecords {
                // Everything pushed to the extremes.
                narratives: vec![
                    narrative("todavía indeciso, depende", NarrativeCategory::Emergent, 5.0);
                    8
                ],
                emotions: vec![emotion(EmotionCategory::Distrust, 10.0); 6],
                terms: vec![term("indeciso", "depende", 100)],
                communities: vec![community(CommunityType::Silent, 100_000, 10)],
                risks: vec![
                    Risk {
                        topic: "fuga".to_string(),
                        growth_velocity: 5
                    };
                    3
                ],
                archetypes: vec![archetype("Desencantado", 100.0, "distrust")],
            },
        ] {
            let report = compute_report(&records, SCORING);
            assert!((0.0..=100.0).contains(&report.svi), "svi: {}", report.svi);
            for stats in &report.breakdown {
                assert!(
                    (0.0..=100.0).contains(&stats.value),
                    "{}: {}",
                    stats.index.code(),
                    stats.value
                );
            }
        }
    }

    #[test]
    fn single_indecisive_narrative_scenario() {
        // One narrative hitting the indecision lexicon, no lexical terms:
        // narrative rate 100, lexical rate 0, raw 50, amplified past the cap.
        let narratives = vec![narrative(
            "Todavía no sé por quién votar",
            NarrativeCategory::Dominant,
            9.0,
        )];
        let iin = narrative_indefinition(&narratives, &[], SCORING, MATCHER);
        assert_eq!(iin, 100.0);
    }

    #[test]
    fn iin_amplifies_partial_hit_rates() {
        // 1 hit out of 5 narratives: raw 10, amplified to 25.
        let mut narratives = vec![narrative(
            "no me convence ninguno",
            NarrativeCategory::Dominant,
            5.0,
        )];
        for _ in 0..4 {
            narratives.push(narrative("vamos a ganar", NarrativeCategory::Dominant, 5.0));
        }
        let iin = narrative_indefinition(&narratives, &[], SCORING, MATCHER);
        assert_eq!(iin, 25.0);
    }

    #[test]
    fn iin_is_monotone_in_indecision_term_frequency() {
        let mut previous = -1.0;
        for freq in [0u32, 1, 3, 8, 20, 100] {
            let terms = vec![
                term("indeciso", "", freq),
                term("economía", "precios en los medios", 10),
            ];
            let iin = narrative_indefinition(&[], &terms, SCORING, MATCHER);
            assert!(
                iin >= previous,
                "IIN decreased from {} to {} at freq {}",
                previous,
                iin,
                freq
            );
            previous = iin;
        }
    }

    #[test]
    fn ieb_blends_soft_hard_and_tepid_hope() {
        let emotions = vec![
            emotion(EmotionCategory::Distrust, 8.0),
            emotion(EmotionCategory::Fear, 6.0),
            emotion(EmotionCategory::Anger, 4.0),
            emotion(EmotionCategory::Hope, 5.0),
        ];
        // soft avg 7, hard avg 4 -> base (7-4+10)/20*80 = 52; hope bonus 7.5.
        assert_eq!(soft_emotion(&emotions, SCORING), 59.5);
    }

    #[test]
    fn ieb_is_monotone_in_soft_intensity() {
        let mut previous = -1.0;
        for soft_intensity in [0.0, 2.0, 5.0, 7.5, 10.0] {
            let emotions = vec![
                emotion(EmotionCategory::Distrust, soft_intensity),
                emotion(EmotionCategory::Anger, 6.0),
                emotion(EmotionCategory::Pride, 4.0),
            ];
            let ieb = soft_emotion(&emotions, SCORING);
            assert!(ieb >= previous);
            previous = ieb;
        }
    }

    #[test]
    fn confident_hope_earns_no_bonus() {
        // No soft or hard values: both default to the 5.0 midpoint, base 40.
        let emotions = vec![emotion(EmotionCategory::Hope, 9.0)];
        assert_eq!(soft_emotion(&emotions, SCORING), 40.0);
    }

    #[test]
    fn inm_weights_communities_by_reach() {
        let communities = vec![
            community(CommunityType::Silent, 1000, 10),
            community(CommunityType::Polarized, 100, 5),
        ];
        let archetypes = vec![
            archetype("Desencantado", 40.0, "desconfianza"),
            archetype("Militante", 60.0, "orgullo"),
        ];
        // reach: silent 1000*10, polarized 100*5; passivity 100 and 5.
        let expected_comm = (10_000.0 * 100.0 + 500.0 * 5.0) / 10_500.0;
        let expected = 0.6 * expected_comm + 0.4 * 40.0;
        let inm = non_militancy(&communities, &archetypes, SCORING);
        assert!((inm - expected).abs() < 1e-9, "inm: {}", inm);
    }

    #[test]
    fn ivn_blends_diversity_and_risk_velocity() {
        let narratives = vec![
            narrative("a", NarrativeCategory::Dominant, 5.0),
            narrative("b", NarrativeCategory::Dominant, 5.0),
            narrative("c", NarrativeCategory::Emergent, 5.0),
            narrative("d", NarrativeCategory::CounterNarrative, 5.0),
        ];
        let risks = vec![
            Risk {
                topic: "r1".to_string(),
                growth_velocity: 4,
            },
            Risk {
                topic: "r2".to_string(),
                growth_velocity: 5,
            },
        ];
        // diversity 50, velocity 4.5/5*100 = 90 -> 70.
        assert_eq!(narrative_volatility(&narratives, &risks, SCORING), 70.0);
    }

    #[test]
    fn icc_sums_components_and_baseline() {
        let narratives = vec![
            narrative("propuesta nueva", NarrativeCategory::Emergent, 5.0),
            narrative("clásico discurso", NarrativeCategory::Dominant, 9.0),
        ];
        let emotions = vec![
            emotion(EmotionCategory::Hope, 4.0),
            emotion(EmotionCategory::Hope, 9.0),
        ];
        let terms = vec![
            term("si cumple", "lo voto si cumple", 5),
            term("gestión", "", 5),
        ];
        // narratives 50*0.5 + hope 50*0.3 + lexical 50*0.2 = 50; +15 = 65.
        assert_eq!(
            conditional_confidence(&narratives, &emotions, &terms, SCORING, MATCHER),
            65.0
        );
    }

    #[test]
    fn aggregation_rounds_to_one_decimal() {
        let weights = &SCORING.weights;
        assert_eq!(aggregate(100.0, 50.0, 50.0, 50.0, 15.0, weights), 57.3);
        assert_eq!(aggregate(0.0, 0.0, 0.0, 0.0, 0.0, weights), 0.0);
        assert_eq!(aggregate(100.0, 100.0, 100.0, 100.0, 100.0, weights), 100.0);
    }

    #[test]
    fn engine_is_deterministic() {
        let records = dense_records();
        let first = compute_report(&records, SCORING);
        let second = compute_report(&records, SCORING);
        assert_eq!(first, second);
    }

    #[test]
    fn tier_boundaries_are_inclusive_at_the_top() {
        assert_eq!(classify(0.0).tier, Tier::Low);
        assert_eq!(classify(30.0).tier, Tier::Low);
        assert_eq!(classify(30.1).tier, Tier::Medium);
        assert_eq!(classify(55.0).tier, Tier::Medium);
        assert_eq!(classify(55.1).tier, Tier::High);
        assert_eq!(classify(75.0).tier, Tier::High);
        assert_eq!(classify(75.1).tier, Tier::Critical);
        assert_eq!(classify(100.0).tier, Tier::Critical);
    }

    #[test]
    fn abstention_alert_fires_strictly_above_75() {
        let at_boundary = evaluate_alerts(75.0, 0.0, 100.0, 0.0, 0.0);
        assert!(at_boundary
            .iter()
            .all(|a| a.severity != AlertSeverity::Critical));
        let above = evaluate_alerts(75.1, 0.0, 100.0, 0.0, 0.0);
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].severity, AlertSeverity::Critical);
    }

    #[test]
    fn alert_rules_fire_independently_in_fixed_order() {
        let alerts = evaluate_alerts(76.0, 70.0, 30.0, 80.0, 70.0);
        let severities: Vec<AlertSeverity> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(
            severities,
            vec![
                AlertSeverity::Critical,
                AlertSeverity::Critical,
                AlertSeverity::Warning,
                AlertSeverity::Opportunity,
                AlertSeverity::Warning,
            ]
        );
    }

    #[test]
    fn one_recommendation_per_band() {
        let high = recommendation(56.0);
        let medium = recommendation(55.9);
        let low = recommendation(30.9);
        assert!(high.contains("certainty"));
        assert!(medium.contains("semi-soft segment"));
        assert_eq!(medium, recommendation(31.0));
        assert!(low.contains("mobilizing"));
        assert_eq!(low, recommendation(0.0));
    }

    #[test]
    fn report_packs_breakdown_alerts_and_counts() {
        let records = dense_records();
        let report = compute_report(&records, SCORING);
        assert_eq!(report.breakdown.len(), 5);
        assert_eq!(report.breakdown[0].index, SubIndex::Iin);
        assert_eq!(report.breakdown[0].weight_percent, 25);
        assert_eq!(
            report.breakdown.iter().map(|s| s.weight_percent).sum::<u32>(),
            100
        );
        assert_eq!(report.legend.len(), 4);
        assert_eq!(report.counts.narratives, 3);
        assert_eq!(report.counts.risks, 1);
        assert_eq!(report.counts.archetypes, 3);
    }
}
