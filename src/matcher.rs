//! Title matching: picks the best search hit for a folder name.
//!
//! Selection is deterministic and order-sensitive. An exact title match
//! (primary or English) wins outright; otherwise candidates are scored by
//! bidirectional substring overlap and the single highest score across both
//! title fields and all candidates wins, first-seen winning ties. When
//! nothing qualifies, the provider's top-ranked (most popular) hit is used
//! and flagged as a fallback so callers can log it distinctly.

use crate::provider::Manga;

/// How a candidate was selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Normalized query equals the primary or English title.
    Exact,
    /// Bidirectional substring overlap; carries the length-ratio score.
    Fuzzy(f64),
    /// No candidate qualified; the provider's top-ranked result was used.
    Fallback,
}

/// A selected candidate together with how it was chosen.
#[derive(Debug)]
pub struct TitleMatch<'a> {
    /// The winning search hit.
    pub manga: &'a Manga,
    /// Selection route, for logging.
    pub kind: MatchKind,
}

impl TitleMatch<'_> {
    /// Whether the popularity fallback was used instead of a real match.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, MatchKind::Fallback)
    }
}

/// Selects the best candidate for `query`, or `None` when the list is empty.
#[must_use]
pub fn select_best<'a>(query: &str, candidates: &'a [Manga]) -> Option<TitleMatch<'a>> {
    let query = normalize(query);

    // Exact pass: first exact hit on either title field wins outright.
    for manga in candidates {
        if title_equals(manga.title.as_deref(), &query)
            || title_equals(manga.title_english.as_deref(), &query)
        {
            return Some(TitleMatch {
                manga,
                kind: MatchKind::Exact,
            });
        }
    }

    // Fuzzy pass: fold to the single best score across both title fields
    // and all candidates. Updates only on strictly greater score, so the
    // first candidate seen wins ties.
    let best = candidates.iter().fold(None::<(&Manga, f64)>, |best, manga| {
        let score = candidate_score(&query, manga);
        match (best, score) {
            (Some((_, top)), Some(s)) if s > top => Some((manga, s)),
            (None, Some(s)) => Some((manga, s)),
            _ => best,
        }
    });
    if let Some((manga, score)) = best {
        return Some(TitleMatch {
            manga,
            kind: MatchKind::Fuzzy(score),
        });
    }

    // The provider orders by popularity, so the first hit is the safest
    // guess when nothing matched.
    candidates.first().map(|manga| TitleMatch {
        manga,
        kind: MatchKind::Fallback,
    })
}

/// Best fuzzy score across a candidate's primary and English titles.
fn candidate_score(query: &str, manga: &Manga) -> Option<f64> {
    [manga.title.as_deref(), manga.title_english.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(|title| fuzzy_score(query, &normalize(title)))
        .fold(None, |acc: Option<f64>, s| {
            Some(acc.map_or(s, |top| top.max(s)))
        })
}

/// Overlap score for one title field, or `None` when neither string
/// contains the other. Empty titles never match; an empty query matches
/// nothing in the fuzzy pass (it can still match an empty title exactly).
#[allow(clippy::cast_precision_loss)]
fn fuzzy_score(query: &str, title: &str) -> Option<f64> {
    if query.is_empty() || title.is_empty() {
        return None;
    }
    if query.contains(title) || title.contains(query) {
        let query_len = query.chars().count();
        let title_len = title.chars().count();
        Some(query_len as f64 / title_len.max(1) as f64)
    } else {
        None
    }
}

fn title_equals(title: Option<&str>, query: &str) -> bool {
    title.is_some_and(|t| normalize(t) == query)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
