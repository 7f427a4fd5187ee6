use crate::symbols::CandidateSet;

/// A candidate that matched the current query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    value: String,
    /// Byte length of the matched prefix within `value`
    prefix_len: usize,
}

impl SuggestionItem {
    /// Full candidate value, written to the field on selection
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The part of the candidate that matched, in the candidate's casing
    pub fn matched_prefix(&self) -> &str {
        &self.value[..self.prefix_len]
    }

    pub fn remainder(&self) -> &str {
        &self.value[self.prefix_len..]
    }
}

/// Match `query` against the first `len(query)` characters of `candidate`,
/// ignoring case. A candidate shorter than the query never matches.
pub fn match_prefix(candidate: &str, query: &str) -> Option<SuggestionItem> {
    let mut candidate_chars = candidate.char_indices();

    for q in query.chars() {
        let (_, c) = candidate_chars.next()?;
        if !c.to_uppercase().eq(q.to_uppercase()) {
            return None;
        }
    }

    let prefix_len = candidate_chars
        .next()
        .map_or(candidate.len(), |(index, _)| index);

    Some(SuggestionItem {
        value: candidate.to_string(),
        prefix_len,
    })
}

/// All matches for `query`, in candidate order
pub fn filter_candidates(candidates: &CandidateSet, query: &str) -> Vec<SuggestionItem> {
    candidates
        .iter()
        .filter_map(|candidate| match_prefix(candidate, query))
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
