//! Variable categorization rules.
//!
//! Each variable in a parameter file is assigned to exactly one dimensional
//! category based on its dimension names. The rules form an ordered decision
//! table; the first matching rule wins.

/// Dimensional category of a parameter variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// True scalars plus `param`- and `allpfts`-dimensioned values
    Scalar,
    /// One value per plant functional type
    Pft,
    /// One value per litter class
    LitterClass,
    /// Character arrays holding one string per entry
    Name,
    /// No rule matched; excluded from output
    Unrecognized,
}

impl Category {
    /// Section name used for this category's `definitions` and `data`
    /// elements, or `None` for unrecognized variables.
    pub fn section_name(&self) -> Option<&'static str> {
        match self {
            Category::Scalar => Some("scalars"),
            Category::Pft => Some("pft"),
            Category::LitterClass => Some("litterclass"),
            Category::Name => Some("name"),
            Category::Unrecognized => None,
        }
    }
}

/// Maps a variable's dimension names to its category.
///
/// The match arms are an ordered rule table: a variable matching more than
/// one candidate rule takes the first. No data inspection is involved.
pub fn classify(dims: &[String]) -> Category {
    match dims {
        [] => Category::Scalar,
        [only] if only == "param" || only == "allpfts" => Category::Scalar,
        [only] if only == "pft" => Category::Pft,
        [only] if only == "litterclass" => Category::LitterClass,
        [_, second] if second == "string_length" => Category::Name,
        _ => Category::Unrecognized,
    }
}
