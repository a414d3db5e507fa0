//! API route constants for the Cineshelf client.
//!
//! All catalog endpoints are prefixed with /api.

/// Base API path.
pub const API_BASE: &str = "/api";

/// Genre reference data endpoints.
pub mod genres {
    /// Full genre list.
    pub const ALL: &str = "/genres/all";
}

/// Movie catalog endpoints.
pub mod movies {
    /// Filtered, paginated movie listing.
    pub const FILTER: &str = "/movies/filter";
}

/// Response header on filter responses carrying the page-independent
/// record total, as a string-encoded integer.
pub const TOTAL_RECORDS_HEADER: &str = "totalamountofrecords";
