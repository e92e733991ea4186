/*!

# Scoring manual

The Soft-Vote Index (SVI) is a 0-100 composite score quantifying how
undecided and persuadable an electorate is, computed from six project-scoped
record collections gathered by social listening: narratives, emotions,
lexical terms, communities, risks and audience archetypes.

## Composition

The SVI is a fixed convex combination of five sub-indices, each itself
bounded to [0, 100]:

| Code | Sub-index | Weight |
|------|-----------------------|--------|
| IIN  | Narrative Indefinition | 25% |
| IEB  | Soft Emotion           | 20% |
| INM  | Non-Militancy          | 20% |
| IVN  | Narrative Volatility   | 20% |
| ICC  | Conditional Confidence | 15% |

The weights are design constants and are never renormalized: a project with
no data in one category contributes that sub-index's documented neutral
default (typically 50.0) instead of dropping the term. As a consequence the
engine has no failure modes — sparse input degrades the score, it never
raises an error.

## Keyword heuristics

IIN and ICC rely on two fixed Spanish lexicons (indecision and conditional
support) applied with case-insensitive substring matching against narrative
text and lexical terms (text or context). There is no stemming and no
tokenization; false positives from substring overlap are accepted. The
matcher sits behind the [`crate::LexiconMatcher`] trait so a stronger
implementation can replace it without touching the calculators.

## Interpretation

The rounded score is classified into four tiers (hard vote ≤ 30, semi-soft
≤ 55, high soft ≤ 75, extreme above), zero or more alerts are raised from
five independent threshold rules, and exactly one strategic recommendation
text is selected from three score bands. The report also carries the static
four-row interpretation legend and the input counts it was computed from.

## Entry point

```
use soft_vote::{compute_report, Builder, NarrativeCategory, ScoringConfig};

let mut builder = Builder::new();
builder.add_narrative("Todavía no sé por quién votar", NarrativeCategory::Dominant, 9.0);
let report = compute_report(&builder.build(), &ScoringConfig::DEFAULT);
assert!(report.svi >= 0.0 && report.svi <= 100.0);
```

*/
