use crate::errors::Error;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories an expense can be filed under.
/// The textual form is the one written in the store files, and is what the
/// user types on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    College,
    Fun,
    Clothes,
    Living,
    Misc,
}

impl Category {
    /// All categories, in the order they are offered to the user
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::College,
        Category::Fun,
        Category::Clothes,
        Category::Living,
        Category::Misc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::College => "College",
            Category::Fun => "Fun",
            Category::Clothes => "Clothes",
            Category::Living => "Living",
            Category::Misc => "Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Exact match only: the files are compared literally when deleting, so
    /// "food" and "Food" must not both be accepted as the same category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| {
                Error::Validation(format!(
                    "Unknown category {s:?}, expected one of {}",
                    Category::ALL.iter().map(Category::name).join(", ")
                ))
            })
    }
}
