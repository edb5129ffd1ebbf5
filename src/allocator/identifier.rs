use crate::allocator::Category;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn format(category: Category, number: u64) -> Self {
        Identifier(format!(
            "{}{:0width$}",
            category.prefix(),
            number,
            width = category.pad_width()
        ))
    }

    // Strict parse: prefix plus an all-digit remainder, nothing else.
    // Anything weaker would let "+12" or "CS 12" slip through and
    // corrupt the derived counter.
    pub fn parse(category: Category, raw: &str) -> Option<u64> {
        let remainder = raw.strip_prefix(category.prefix())?;

        if remainder.is_empty() || !remainder.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        remainder.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}
