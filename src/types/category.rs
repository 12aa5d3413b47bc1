use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of shelves an entry can live on.
///
/// `Category::ALL` is the display order. Both the add form (for its select
/// options) and the grouping engine (for its buckets) read from it, so there
/// is exactly one list to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Metas,
    Analisador,
    Dashboards,
    Prompts,
    Marketing,
    Operacional,
    Cs,
    Criativos,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::Metas,
        Category::Analisador,
        Category::Dashboards,
        Category::Prompts,
        Category::Marketing,
        Category::Operacional,
        Category::Cs,
        Category::Criativos,
    ];

    /// Lowercase wire/storage name, e.g. `"metas"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Metas => "metas",
            Category::Analisador => "analisador",
            Category::Dashboards => "dashboards",
            Category::Prompts => "prompts",
            Category::Marketing => "marketing",
            Category::Operacional => "operacional",
            Category::Cs => "cs",
            Category::Criativos => "criativos",
        }
    }

    /// Display label: the name with its first letter upper-cased.
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Position of this category in `ALL`.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}
