use crate::config::LexicalTerm;

/// Matches free text against a fixed keyword list.
///
/// The production implementation is a case-insensitive substring search.
/// The trait exists so that a tokenizing or similarity-based matcher can be
/// swapped in without touching any sub-index calculator.
pub trait LexiconMatcher {
    fn matches(&self, text: &str, lexicon: &[&str]) -> bool;
}

/// Case-insensitive substring containment, no stemming, no tokenization.
///
/// False positives from substring overlap ("indeciso" inside a longer word)
/// are an accepted limitation of the heuristic.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl LexiconMatcher for SubstringMatcher {
    fn matches(&self, text: &str, lexicon: &[&str]) -> bool {
        let lowered = text.to_lowercase();
        lexicon.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// A lexical term hits a lexicon if either its text or its context matches.
pub(crate) fn term_hits(
    term: &LexicalTerm,
    lexicon: &[&str],
    matcher: &dyn LexiconMatcher,
) -> bool {
    matcher.matches(&term.text, lexicon) || matcher.matches(&term.context, lexicon)
}
