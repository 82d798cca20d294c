use crate::category::CategoryKind;

/// A single played or watched game.
///
/// Two games are the same game when both name and kind match; the
/// platform they belong to completes the identity across a parse result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    name: String,
    kind: CategoryKind,
}

impl Game {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game \"{}\" ({})", self.name, self.kind)
    }
}
