//! Bidirectional mapping between filter criteria and a location query
//! string, so a shared or bookmarked location reproduces a filter.
//!
//! The same sparse encoding serves the synchronized location and the
//! filter endpoint's request parameters: only non-default fields go on
//! the wire, and the endpoint's documented defaults cover the rest.

use url::form_urlencoded;

use crate::error::QueryParseError;
use crate::filter::FilterCriteria;

/// Query parameter names recognized by the synchronizer.
pub mod param {
    pub const TITLE: &str = "title";
    pub const SORT_BY_ASC: &str = "sortByAsc";
    pub const GENRE_ID: &str = "genreId";
    pub const UPCOMING_RELEASES: &str = "upcomingReleases";
    pub const IN_THEATERS: &str = "inTheaters";
    pub const PAGE: &str = "page";
}

/// Encode criteria as a query string (no leading `?`).
///
/// Emits `title` if non-empty, `sortByAsc` if true, `genreId` if not 0,
/// each release flag if set, and `page` always.
pub fn encode(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if !criteria.title.is_empty() {
        query.append_pair(param::TITLE, &criteria.title);
    }
    if criteria.sort_by_ascending {
        query.append_pair(param::SORT_BY_ASC, "true");
    }
    if criteria.has_genre() {
        query.append_pair(param::GENRE_ID, &criteria.genre_id.to_string());
    }
    if criteria.upcoming_releases {
        query.append_pair(param::UPCOMING_RELEASES, "true");
    }
    if criteria.in_theaters {
        query.append_pair(param::IN_THEATERS, "true");
    }
    query.append_pair(param::PAGE, &criteria.page.to_string());

    query.finish()
}

/// Decode a location query string (with or without a leading `?`).
///
/// Recognized parameters override the corresponding default; absent,
/// unrecognized or malformed values keep the default. An invalid value is
/// never propagated into the criteria.
pub fn parse(query: &str) -> FilterCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut criteria = FilterCriteria::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            param::TITLE => criteria.title = value.into_owned(),
            param::SORT_BY_ASC => {
                if let Ok(ascending) = parse_bool(param::SORT_BY_ASC, &value) {
                    criteria.sort_by_ascending = ascending;
                }
            }
            param::GENRE_ID => {
                if let Ok(id) = parse_integer(param::GENRE_ID, &value) {
                    criteria.genre_id = id;
                }
            }
            // Presence alone sets the release flags; the value is ignored.
            param::UPCOMING_RELEASES => criteria.upcoming_releases = true,
            param::IN_THEATERS => criteria.in_theaters = true,
            param::PAGE => {
                if let Ok(page) = parse_page(&value) {
                    criteria.page = page;
                }
            }
            _ => {}
        }
    }

    criteria
}

fn parse_integer(
    key: &'static str,
    value: &str,
) -> Result<u32, QueryParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| QueryParseError::InvalidInteger {
            key,
            value: value.to_owned(),
        })
}

fn parse_bool(
    key: &'static str,
    value: &str,
) -> Result<bool, QueryParseError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(QueryParseError::InvalidBoolean {
            key,
            value: other.to_owned(),
        }),
    }
}

fn parse_page(value: &str) -> Result<u32, QueryParseError> {
    let page = parse_integer(param::PAGE, value)?;
    if page == 0 {
        return Err(QueryParseError::OutOfRange { key: param::PAGE });
    }
    Ok(page)
}
