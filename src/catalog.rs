//! The static image collections.
//!
//! Both collections are built once at process start and shared by reference
//! through [`crate::state::State`]. Handlers never touch the source order;
//! they clone the items and shuffle the clone.
use serde::{Deserialize, Serialize};

/// A single displayable image. Identity is positional, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub src: String,
}

/// A named ordered sequence of image records.
#[derive(Debug, Clone)]
pub struct Collection {
    pub items: Vec<ImageRecord>,
}

/// The wire shape of every data endpoint, public and backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub items: Vec<ImageRecord>,
}

pub struct Catalog {
    rocks: Collection,
    lake: Collection,
}

const ROCKS: &[&str] = &[
    "https://picsum.photos/seed/rocks-01/400/300",
    "https://picsum.photos/seed/rocks-02/400/300",
    "https://picsum.photos/seed/rocks-03/400/300",
    "https://picsum.photos/seed/rocks-04/400/300",
    "https://picsum.photos/seed/rocks-05/400/300",
    "https://picsum.photos/seed/rocks-06/400/300",
];

const LAKE: &[&str] = &[
    "https://picsum.photos/seed/lake-01/400/300",
    "https://picsum.photos/seed/lake-02/400/300",
    "https://picsum.photos/seed/lake-03/400/300",
    "https://picsum.photos/seed/lake-04/400/300",
    "https://picsum.photos/seed/lake-05/400/300",
];

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            rocks: collection(ROCKS),
            lake: collection(LAKE),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        match name {
            "rocks" => Some(&self.rocks),
            "lake" => Some(&self.lake),
            _ => None,
        }
    }
}

fn collection(srcs: &[&str]) -> Collection {
    Collection {
        items: srcs
            .iter()
            .map(|src| ImageRecord {
                src: (*src).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_both_collections() {
        let catalog = Catalog::builtin();

        assert!(!catalog.get("rocks").unwrap().items.is_empty());
        assert!(!catalog.get("lake").unwrap().items.is_empty());
    }

    #[test]
    fn unknown_name_is_none() {
        let catalog = Catalog::builtin();

        assert!(catalog.get("river").is_none());
        assert!(catalog.get("").is_none());
    }
}
