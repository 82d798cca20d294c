use thiserror::Error;

use crate::category::CategoryKind;

/// Error returned when a string cannot be parsed into a `CategoryKind`.
#[derive(Debug, Clone, Error)]
#[error("unknown category: '{0}' (expected one of: {expected})", expected = expected_names())]
pub struct CategoryParseError(pub String);

fn expected_names() -> String {
    CategoryKind::all()
        .iter()
        .map(|kind| kind.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}
