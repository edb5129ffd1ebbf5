use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Customer,
    Manager,
    Staff,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Customer, Category::Manager, Category::Staff];

    pub const fn prefix(self) -> &'static str {
        match self {
            Category::Customer => "CS",
            Category::Manager => "MGR",
            Category::Staff => "STF",
        }
    }

    pub const fn pad_width(self) -> usize {
        3
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Customer => "customer",
            Category::Manager => "manager",
            Category::Staff => "staff",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "customer" => Ok(Category::Customer),
            "manager" => Ok(Category::Manager),
            "staff" => Ok(Category::Staff),
            _ => Err(UnknownCategoryError(value.to_owned())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("unknown category '{0}'")]
pub struct UnknownCategoryError(String);
