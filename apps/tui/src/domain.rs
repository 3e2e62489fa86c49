/// Canonical restaurant categories derived from the free-text `categories`
/// column. Declaration order matters: `normalize` scans the keyword table
/// top to bottom and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Asian,
    AmericanBurger,
    MexicanTaco,
    ItalianPizza,
    IceCream,
    Uncategorized,
}

/// Keyword table in tie-break order. A lower-cased category string that
/// contains any of the keywords resolves to the paired category.
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Asian, &["chinese", "asian", "japanese"]),
    (Category::AmericanBurger, &["american", "burger"]),
    (Category::MexicanTaco, &["mexican", "taco"]),
    (Category::ItalianPizza, &["italian", "pizza"]),
    (Category::IceCream, &["ice cream"]),
];

impl Category {
    /// Every category, in the table's column order. `Uncategorized` is last.
    pub const ALL: [Self; 6] = [
        Self::Asian,
        Self::AmericanBurger,
        Self::MexicanTaco,
        Self::ItalianPizza,
        Self::IceCream,
        Self::Uncategorized,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Map a free-text category string to its canonical label. Total over
    /// any input; unmatched strings (including empty) fall back to
    /// `Uncategorized`.
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        for (category, keywords) in KEYWORDS {
            if keywords.iter().any(|word| lowered.contains(word)) {
                return *category;
            }
        }
        Self::Uncategorized
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asian => "asian",
            Self::AmericanBurger => "american-burger",
            Self::MexicanTaco => "mexican-taco",
            Self::ItalianPizza => "italian-pizza",
            Self::IceCream => "ice-cream",
            Self::Uncategorized => "uncategorized",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asian => "Asian",
            Self::AmericanBurger => "American/Burger",
            Self::MexicanTaco => "Mexican/Taco",
            Self::ItalianPizza => "Italian/Pizza",
            Self::IceCream => "Ice Cream",
            Self::Uncategorized => "Uncategorized",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Asian),
            1 => Some(Self::AmericanBurger),
            2 => Some(Self::MexicanTaco),
            3 => Some(Self::ItalianPizza),
            4 => Some(Self::IceCream),
            5 => Some(Self::Uncategorized),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Asian => 0,
            Self::AmericanBurger => 1,
            Self::MexicanTaco => 2,
            Self::ItalianPizza => 3,
            Self::IceCream => 4,
            Self::Uncategorized => 5,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed || category.label().to_lowercase() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn single_keyword_resolves_case_insensitively() {
        assert_eq!(Category::normalize("Burger Joint"), Category::AmericanBurger);
        assert_eq!(Category::normalize("JAPANESE Restaurant"), Category::Asian);
        assert_eq!(Category::normalize("Soft Serve Ice Cream"), Category::IceCream);
    }

    #[test]
    fn first_declared_category_wins_on_multiple_matches() {
        // "mexican"/"taco" precede "italian"/"pizza" in the keyword table.
        assert_eq!(
            Category::normalize("Pizza and Taco Counter"),
            Category::MexicanTaco
        );
        // "american" precedes "pizza".
        assert_eq!(
            Category::normalize("American Pizza Kitchen"),
            Category::AmericanBurger
        );
    }

    #[test]
    fn unmatched_strings_are_uncategorized() {
        assert_eq!(Category::normalize("Sandwiches"), Category::Uncategorized);
        assert_eq!(Category::normalize(""), Category::Uncategorized);
    }

    #[test]
    fn index_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_index(category.index()), Some(category));
        }
        assert_eq!(Category::from_index(Category::COUNT), None);
    }

    #[test]
    fn parse_accepts_labels_and_slugs() {
        assert_eq!(Category::parse("Mexican/Taco"), Some(Category::MexicanTaco));
        assert_eq!(Category::parse(" ice-cream "), Some(Category::IceCream));
        assert_eq!(Category::parse("sushi"), None);
    }
}
