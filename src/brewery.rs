//! Brewery records as returned by the Open Brewery DB API
//!
//! Records are deserialized from the API's snake_case JSON and never mutated
//! afterwards. Extra fields in the payload are ignored.

use heck::ToTitleCase;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a brewery
///
/// Older API versions return integer ids, current ones return UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreweryId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for BreweryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Brewery type as classified by Open Brewery DB
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreweryType {
    Micro,
    Regional,
    Brewpub,
    Nano,
    Large,
    Planning,
    Bar,
    Contract,
    Proprietor,
    Closed,
    /// Any type this client does not know about
    Other(String),
}

impl BreweryType {
    /// Types offered by the type selector, in display order
    pub const SELECTABLE: [Self; 3] = [Self::Micro, Self::Regional, Self::Brewpub];

    /// Wire name used by the API
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Micro => "micro",
            Self::Regional => "regional",
            Self::Brewpub => "brewpub",
            Self::Nano => "nano",
            Self::Large => "large",
            Self::Planning => "planning",
            Self::Bar => "bar",
            Self::Contract => "contract",
            Self::Proprietor => "proprietor",
            Self::Closed => "closed",
            Self::Other(s) => s,
        }
    }

    /// Human readable label ("Micro", "Brewpub", ...)
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().to_title_case()
    }
}

impl FromStr for BreweryType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "micro" => Self::Micro,
            "regional" => Self::Regional,
            "brewpub" => Self::Brewpub,
            "nano" => Self::Nano,
            "large" => Self::Large,
            "planning" => Self::Planning,
            "bar" => Self::Bar,
            "contract" => Self::Contract,
            "proprietor" => Self::Proprietor,
            "closed" => Self::Closed,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for BreweryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BreweryType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BreweryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(kind) = raw.parse::<Self>();
        Ok(kind)
    }
}

/// A single brewery record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brewery {
    pub id: BreweryId,
    pub name: String,
    pub brewery_type: BreweryType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl Brewery {
    /// Create a brewery with only the fields the filters look at
    #[must_use]
    pub fn new(
        id: impl Into<BreweryId>,
        name: impl Into<String>,
        brewery_type: BreweryType,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brewery_type,
            city: city.into(),
            street: None,
            postal_code: None,
            phone: None,
            website_url: None,
        }
    }

    /// Single-line address, e.g. "12 Main St, Austin, 78701"
    #[must_use]
    pub fn address_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(street) = self.street.as_deref().filter(|s| !s.is_empty()) {
            parts.push(street);
        }
        if !self.city.is_empty() {
            parts.push(&self.city);
        }
        if let Some(postal) = self.postal_code.as_deref().filter(|s| !s.is_empty()) {
            parts.push(postal);
        }
        parts.join(", ")
    }
}

impl From<u64> for BreweryId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for BreweryId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for BreweryId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_id() {
        let json = r#"{
            "id": 9094,
            "name": "Ale House",
            "brewery_type": "micro",
            "city": "Austin",
            "street": "1 Main St",
            "postal_code": "78701",
            "phone": "5125550100",
            "website_url": "http://alehouse.example",
            "state": "Texas",
            "longitude": null
        }"#;
        let brewery: Brewery = serde_json::from_str(json).unwrap();
        assert_eq!(brewery.id, BreweryId::Numeric(9094));
        assert_eq!(brewery.brewery_type, BreweryType::Micro);
        assert_eq!(brewery.city, "Austin");
        assert_eq!(brewery.phone.as_deref(), Some("5125550100"));
    }

    #[test]
    fn test_deserialize_uuid_id_and_nulls() {
        let json = r#"{
            "id": "5128df48-79fc-4f0f-8b52-d06be54d0cec",
            "name": "Hop Yard",
            "brewery_type": "regional",
            "city": null,
            "street": null,
            "website_url": null
        }"#;
        let brewery: Brewery = serde_json::from_str(json).unwrap();
        assert_eq!(
            brewery.id,
            BreweryId::Text("5128df48-79fc-4f0f-8b52-d06be54d0cec".to_string())
        );
        assert_eq!(brewery.city, "");
        assert!(brewery.street.is_none());
        assert!(brewery.postal_code.is_none());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let parsed: BreweryType = "taproom".parse().unwrap();
        assert_eq!(parsed, BreweryType::Other("taproom".to_string()));
        assert_eq!(parsed.as_str(), "taproom");
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(BreweryType::Micro.label(), "Micro");
        assert_eq!(BreweryType::Brewpub.label(), "Brewpub");
        assert_eq!("Large".parse::<BreweryType>().unwrap(), BreweryType::Large);
    }

    #[test]
    fn test_address_line_skips_missing_parts() {
        let mut brewery = Brewery::new(1, "Ale House", BreweryType::Micro, "Austin");
        assert_eq!(brewery.address_line(), "Austin");

        brewery.street = Some("1 Main St".into());
        brewery.postal_code = Some("78701".into());
        assert_eq!(brewery.address_line(), "1 Main St, Austin, 78701");
    }
}
