//! Listing record and its per-field outcome types
//!
//! Every field is always present. Absent or malformed source data is carried
//! by a dedicated variant instead of being omitted, and serializes to the
//! sentinel text a consumer of the JSON output expects.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

pub const INVALID_NUMBER: &str = "Invalid Number";
pub const LINK_NOT_PROVIDED: &str = "link not provided";
pub const MENU_MAYBE_ON_WEBSITE: &str = "Maybe available on website";
pub const HOURS_NOT_UPDATED: &str = "Hours not updated";

/// One business listing, fully populated from a single document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub name: String,
    pub address: Address,
    pub telephone: Telephone,
    pub website: Website,
    pub price_range: String,
    pub menu_link: MenuLink,
    pub hours: Hours,
    pub other_features: IndexMap<String, String>,
}

/// Postal address, structured only when the text splits unambiguously
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    Raw(String),
    Structured {
        street: String,
        city: String,
        state: String,
        zip: String,
    },
}

impl Address {
    pub fn is_structured(&self) -> bool {
        matches!(self, Address::Structured { .. })
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Address::Raw(text) => serializer.serialize_str(text),
            Address::Structured {
                street,
                city,
                state,
                zip,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("street", street)?;
                map.serialize_entry("city", city)?;
                map.serialize_entry("state", state)?;
                map.serialize_entry("zip", zip)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Raw(text) => f.write_str(text),
            Address::Structured {
                street,
                city,
                state,
                zip,
            } => write!(
                f,
                "{{'street': '{street}', 'city': '{city}', 'state': '{state}', 'zip': '{zip}'}}"
            ),
        }
    }
}

/// Ten-digit phone number, or the invalid marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Telephone {
    Valid(u64),
    Invalid,
}

impl Telephone {
    pub fn is_valid(&self) -> bool {
        matches!(self, Telephone::Valid(_))
    }
}

impl Serialize for Telephone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Telephone::Valid(number) => serializer.serialize_u64(*number),
            Telephone::Invalid => serializer.serialize_str(INVALID_NUMBER),
        }
    }
}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Telephone::Valid(number) => write!(f, "{number}"),
            Telephone::Invalid => f.write_str(INVALID_NUMBER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Website {
    Link(String),
    NotProvided,
}

impl Website {
    pub fn is_available(&self) -> bool {
        matches!(self, Website::Link(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Website::Link(url) => url,
            Website::NotProvided => LINK_NOT_PROVIDED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLink {
    Link(String),
    MaybeOnWebsite,
}

impl MenuLink {
    pub fn is_available(&self) -> bool {
        matches!(self, MenuLink::Link(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            MenuLink::Link(url) => url,
            MenuLink::MaybeOnWebsite => MENU_MAYBE_ON_WEBSITE,
        }
    }
}

/// Weekly opening hours keyed by day label, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hours {
    Weekly(IndexMap<String, String>),
    NotUpdated,
}

impl Hours {
    pub fn is_available(&self) -> bool {
        matches!(self, Hours::Weekly(_))
    }

    pub fn get(&self, day: &str) -> Option<&str> {
        match self {
            Hours::Weekly(days) => days.get(day).map(String::as_str),
            Hours::NotUpdated => None,
        }
    }
}

impl Serialize for Hours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Hours::Weekly(days) => days.serialize(serializer),
            Hours::NotUpdated => serializer.serialize_str(HOURS_NOT_UPDATED),
        }
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hours::Weekly(days) => write_pairs(f, days),
            Hours::NotUpdated => f.write_str(HOURS_NOT_UPDATED),
        }
    }
}

// Website and MenuLink share the same wire shape: the link or the sentinel text
macro_rules! link_or_sentinel {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

link_or_sentinel!(Website, MenuLink);

/// Render a label/value map as `{'k': 'v', ...}`
pub fn write_pairs(f: &mut fmt::Formatter<'_>, pairs: &IndexMap<String, String>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "'{key}': '{value}'")?;
    }
    f.write_str("}")
}
