use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::RegistryError;

/// Validated two-part personal name. Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Name {
    first_name: String,
    last_name: String,
}

impl Name {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.is_empty() {
            return Err(RegistryError::EmptyNamePart("first name"));
        }
        if last_name.is_empty() {
            return Err(RegistryError::EmptyNamePart("last name"));
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// Parse a `"First Last"` string split on single spaces. Trailing empty
    /// segments are dropped, so `"Thomas Hague "` parses but `"Thomas "` does not.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let mut parts: Vec<&str> = raw.split(' ').collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        match parts.as_slice() {
            [first, last] => Self::new(*first, *last),
            _ => Err(RegistryError::MalformedName(raw.to_string())),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First character of each name part, taken verbatim.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl FromStr for Name {
    type Err = RegistryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}
