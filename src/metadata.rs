//! The fixed-shape `details.json` record and the status-code mapping.
//!
//! [`MangaDetails::from_manga`] is total: a hit missing every optional field
//! still maps to a valid record with empty strings and lists. Status labels
//! map through the closed [`SeriesStatus`] enumeration so the
//! unknown-label-to-default path is an explicit branch.

use serde::ser::Serializer;
use serde::Serialize;

use crate::provider::{Manga, MangaAuthor};

/// Static documentation block embedded in every `details.json`, enumerating
/// the status-code legend for human readers.
const STATUS_LEGEND: [&str; 7] = [
    "0 = Unknown",
    "1 = Ongoing",
    "2 = Completed",
    "3 = Licensed",
    "4 = Publishing paused",
    "5 = Cancelled",
    "6 = On hiatus",
];

/// Publication status codes understood by local-source readers.
///
/// Serialized as the bare integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStatus {
    /// Code 0.
    Unknown,
    /// Code 1.
    Ongoing,
    /// Code 2.
    Completed,
    /// Code 3.
    Licensed,
    /// Code 4.
    PublishingPaused,
    /// Code 5.
    Cancelled,
    /// Code 6.
    OnHiatus,
}

impl SeriesStatus {
    /// Maps a provider status label to a status. Total: unrecognized or
    /// absent labels map to [`SeriesStatus::Unknown`], as does the
    /// provider's own "Not yet published".
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Finished") => Self::Completed,
            Some("Publishing") => Self::Ongoing,
            Some("On Hiatus") => Self::OnHiatus,
            Some("Discontinued") => Self::Cancelled,
            // "Not yet published", anything unrecognized, and no label at
            // all share the default.
            Some(_) | None => Self::Unknown,
        }
    }

    /// The integer code written into `details.json`.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Ongoing => 1,
            Self::Completed => 2,
            Self::Licensed => 3,
            Self::PublishingPaused => 4,
            Self::Cancelled => 5,
            Self::OnHiatus => 6,
        }
    }
}

impl Serialize for SeriesStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// The metadata record written as `details.json` into each title folder.
#[derive(Debug, Serialize)]
pub struct MangaDetails {
    /// Primary title, empty when the provider omitted it.
    pub title: String,
    /// Contributor names joined with ", ".
    pub author: String,
    /// Identical to `author`; the provider does not distinguish roles.
    pub artist: String,
    /// Synopsis text, may be empty.
    pub description: String,
    /// Genre names in provider order.
    pub genre: Vec<String>,
    /// Publication status code.
    pub status: SeriesStatus,
    #[serde(rename = "_status values")]
    status_values: [&'static str; 7],
}

impl MangaDetails {
    /// Builds the output record from a search hit. Never fails: missing
    /// provider fields become empty strings or lists.
    #[must_use]
    pub fn from_manga(manga: &Manga) -> Self {
        let contributors = manga.authors.as_deref().map(join_names).unwrap_or_default();
        Self {
            title: manga.title.clone().unwrap_or_default(),
            author: contributors.clone(),
            artist: contributors,
            description: manga.synopsis.clone().unwrap_or_default(),
            genre: manga
                .genres
                .as_deref()
                .map(|genres| genres.iter().map(|g| g.name.clone()).collect())
                .unwrap_or_default(),
            status: SeriesStatus::from_label(manga.status.as_deref()),
            status_values: STATUS_LEGEND,
        }
    }
}

fn join_names(authors: &[MangaAuthor]) -> String {
    authors
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::provider::MangaGenre;

    fn full_manga() -> Manga {
        Manga {
            mal_id: Some(11),
            title: Some("Naruto".to_string()),
            title_english: Some("Naruto".to_string()),
            authors: Some(vec![
                MangaAuthor {
                    name: "Kishimoto, Masashi".to_string(),
                },
                MangaAuthor {
                    name: "Ikemoto, Mikio".to_string(),
                },
            ]),
            synopsis: Some("A ninja story.".to_string()),
            genres: Some(vec![
                MangaGenre {
                    name: "Action".to_string(),
                },
                MangaGenre {
                    name: "Adventure".to_string(),
                },
            ]),
            status: Some("Finished".to_string()),
            images: None,
        }
    }

    fn empty_manga() -> Manga {
        Manga {
            mal_id: None,
            title: None,
            title_english: None,
            authors: None,
            synopsis: None,
            genres: None,
            status: None,
            images: None,
        }
    }

    // ==================== SeriesStatus ====================

    #[test]
    fn test_status_known_labels_map_to_fixed_codes() {
        let table = [
            ("Finished", 2),
            ("Publishing", 1),
            ("On Hiatus", 6),
            ("Discontinued", 5),
            ("Not yet published", 0),
        ];
        for (label, code) in table {
            assert_eq!(
                SeriesStatus::from_label(Some(label)).code(),
                code,
                "label {label:?} must map to code {code}"
            );
        }
    }

    #[test]
    fn test_status_unknown_label_maps_to_zero() {
        assert_eq!(SeriesStatus::from_label(Some("Unreleased")).code(), 0);
    }

    #[test]
    fn test_status_absent_label_maps_to_zero() {
        assert_eq!(SeriesStatus::from_label(None).code(), 0);
    }

    #[test]
    fn test_status_serializes_as_bare_integer() {
        let json = serde_json::to_value(SeriesStatus::OnHiatus).unwrap();
        assert_eq!(json, serde_json::json!(6));
    }

    #[test]
    fn test_status_codes_cover_closed_set() {
        let all = [
            SeriesStatus::Unknown,
            SeriesStatus::Ongoing,
            SeriesStatus::Completed,
            SeriesStatus::Licensed,
            SeriesStatus::PublishingPaused,
            SeriesStatus::Cancelled,
            SeriesStatus::OnHiatus,
        ];
        let codes: Vec<u8> = all.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    // ==================== MangaDetails ====================

    #[test]
    fn test_details_full_mapping() {
        let details = MangaDetails::from_manga(&full_manga());
        assert_eq!(details.title, "Naruto");
        assert_eq!(details.author, "Kishimoto, Masashi, Ikemoto, Mikio");
        assert_eq!(details.artist, details.author);
        assert_eq!(details.description, "A ninja story.");
        assert_eq!(details.genre, vec!["Action", "Adventure"]);
        assert_eq!(details.status, SeriesStatus::Completed);
    }

    #[test]
    fn test_details_mapping_is_total_on_empty_hit() {
        let details = MangaDetails::from_manga(&empty_manga());
        assert_eq!(details.title, "");
        assert_eq!(details.author, "");
        assert_eq!(details.artist, "");
        assert_eq!(details.description, "");
        assert!(details.genre.is_empty());
        assert_eq!(details.status, SeriesStatus::Unknown);
    }

    #[test]
    fn test_details_serializes_with_legend_field() {
        let json = serde_json::to_value(MangaDetails::from_manga(&full_manga())).unwrap();
        assert_eq!(json["title"], "Naruto");
        assert_eq!(json["status"], 2);
        let legend = json["_status values"].as_array().unwrap();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0], "0 = Unknown");
        assert_eq!(legend[4], "4 = Publishing paused");
        assert_eq!(legend[6], "6 = On hiatus");
    }

    #[test]
    fn test_details_single_author_no_separator() {
        let mut manga = empty_manga();
        manga.authors = Some(vec![MangaAuthor {
            name: "Urasawa, Naoki".to_string(),
        }]);
        let details = MangaDetails::from_manga(&manga);
        assert_eq!(details.author, "Urasawa, Naoki");
    }

    #[test]
    fn test_details_genre_preserves_provider_order() {
        let mut manga = empty_manga();
        manga.genres = Some(vec![
            MangaGenre {
                name: "Mystery".to_string(),
            },
            MangaGenre {
                name: "Drama".to_string(),
            },
            MangaGenre {
                name: "Seinen".to_string(),
            },
        ]);
        let details = MangaDetails::from_manga(&manga);
        assert_eq!(details.genre, vec!["Mystery", "Drama", "Seinen"]);
    }
}
