use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of the synthetic "no genre selected" entry.
pub const UNSELECTED_GENRE_ID: u32 = 0;

/// Read-only genre reference data, fetched once per screen lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    /// The sentinel option prepended to the selector: choosing it clears
    /// the genre filter.
    pub fn sentinel() -> Self {
        Self {
            id: UNSELECTED_GENRE_ID,
            name: "--Choose a genre".to_owned(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id == UNSELECTED_GENRE_ID
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
