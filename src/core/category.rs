//! Asset category definitions.

use serde::Serialize;
use std::fmt;

/// Kind of dashboard asset, one directory below the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dashboard,
    Search,
    Visualization,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Search, Self::Visualization];

    /// Detect category from its directory name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        match name {
            "dashboard" => Some(Self::Dashboard),
            "search" => Some(Self::Search),
            "visualization" => Some(Self::Visualization),
            _ => None,
        }
    }

    /// Directory name for this category.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Search => "search",
            Self::Visualization => "visualization",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_name() {
        assert_eq!(Category::from_dir_name("dashboard"), Some(Category::Dashboard));
        assert_eq!(Category::from_dir_name("search"), Some(Category::Search));
        assert_eq!(
            Category::from_dir_name("visualization"),
            Some(Category::Visualization)
        );
        assert_eq!(Category::from_dir_name("Dashboard"), None);
        assert_eq!(Category::from_dir_name("lens"), None);
    }

    #[test]
    fn test_dir_name_matches_serialized_key() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.dir_name()));
            assert_eq!(Category::from_dir_name(category.dir_name()), Some(category));
        }
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }
}
