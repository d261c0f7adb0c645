/// Query fields a filter expression may address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Price,
    Rating,
    Sort,
    Text,
}

impl Field {
    pub fn lookup(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "category" | "cat" => Some(Field::Category),
            "price" => Some(Field::Price),
            "rating" => Some(Field::Rating),
            "sort" => Some(Field::Sort),
            "q" | "text" => Some(Field::Text),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Price => "price",
            Field::Rating => "rating",
            Field::Sort => "sort",
            Field::Text => "q",
        }
    }
}

/// Right hand side of `field:...`. Values keep their raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Eq(String),            // field:value
    Gte(String),           // field:>=value
    Lte(String),           // field:<=value
    Range(String, String), // field:[min TO max]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: Field,
    pub condition: Condition,
}

/// One element of a parsed expression
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Filter(Filter),
    /// Bare word or quoted phrase, searched as free text
    Text(String),
}
