/// The kind of resource a favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Person,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    /// Parses the `type` field of `PUT /user`.
    ///
    /// `character` is accepted as an alias of `person`. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "person" | "character" => Some(Self::Person),
            "planet" => Some(Self::Planet),
            "vehicle" => Some(Self::Vehicle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        }
    }
}
