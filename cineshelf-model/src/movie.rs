use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie record as returned by the catalog's filter endpoint.
///
/// The shape belongs to the remote API; the client passes records through
/// to the results list unmodified and only relies on the fields it
/// displays. Unknown fields are ignored, absent ones default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub in_theaters: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_unknown_and_missing_fields() {
        let movie: MovieSummary = serde_json::from_str(
            r#"{"id":7,"title":"The Matrix","trailer":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(movie.id, 7);
        assert_eq!(movie.title, "The Matrix");
        assert!(movie.poster.is_none());
        assert!(movie.release_date.is_none());
        assert!(!movie.in_theaters);
    }

    #[test]
    fn parses_release_dates() {
        let movie: MovieSummary = serde_json::from_str(
            r#"{"id":1,"title":"Dune","releaseDate":"2021-10-22"}"#,
        )
        .unwrap();
        assert_eq!(
            movie.release_date,
            NaiveDate::from_ymd_opt(2021, 10, 22)
        );
    }
}
