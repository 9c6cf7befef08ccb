use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Canonical property identifier.
///
/// Listings arrive with numeric ids from some sources and opaque strings
/// from others, and route parameters are always strings. Everything is
/// normalized to one trimmed string form here so that `3` and `"3"`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for PropertyId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PropertyId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for PropertyId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<'de> Deserialize<'de> for PropertyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Signed(i64),
            Unsigned(u64),
            Float(f64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Signed(n) => PropertyId::from(n),
            RawId::Unsigned(n) => PropertyId(n.to_string()),
            // 3.0 is the same listing as 3
            RawId::Float(n) if n.is_finite() && n.fract() == 0.0 => PropertyId(format!("{:.0}", n)),
            RawId::Float(n) => PropertyId(n.to_string()),
            RawId::Text(s) => PropertyId::new(s),
        })
    }
}

/// Listing category, the only filter dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Sale,
    Rent,
    Shortlet,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::Sale, PropertyType::Rent, PropertyType::Shortlet];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Sale => "Sale",
            PropertyType::Rent => "Rent",
            PropertyType::Shortlet => "Shortlet",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown property type: {}", s))
    }
}

/// Asking price, either preformatted by the source or a plain amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Amount(u64),
    Decimal(f64),
    Label(String),
}

impl Price {
    /// Render for display. Labels are shown verbatim, amounts get the
    /// currency symbol and comma thousands grouping.
    pub fn display(&self, currency: &str) -> String {
        match self {
            Price::Amount(amount) => format!("{}{}", currency, group_thousands(*amount)),
            Price::Decimal(amount) if amount.is_finite() && *amount >= 0.0 => {
                let cents = (amount * 100.0).round() as u64;
                let whole = group_thousands(cents / 100);
                match cents % 100 {
                    0 => format!("{}{}", currency, whole),
                    rest => format!("{}{}.{:02}", currency, whole, rest),
                }
            }
            Price::Decimal(amount) => format!("{}{}", currency, amount),
            Price::Label(label) => label.clone(),
        }
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub price: Price,
    #[serde(default)]
    pub status: Option<String>,
    pub location: String,
    #[serde(default, alias = "image", deserialize_with = "one_or_many")]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approved: bool,
}

impl Property {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Records with a blank id or title are treated as malformed payloads
    pub fn is_well_formed(&self) -> bool {
        !self.id.as_str().is_empty() && !self.title.trim().is_empty()
    }
}

/// An explicit `null` means the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts the legacy single `image` string as well as an `images` array
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(image)) => vec![image],
        Some(OneOrMany::Many(images)) => images,
        None => Vec::new(),
    })
}

/// Read-only collection backing one listing view
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    pub properties: Vec<Property>,
    pub loaded_at: DateTime<Utc>,
}

impl ListingSnapshot {
    pub fn new(properties: Vec<Property>) -> Self {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(&property.id) {
                warn!("Duplicate property id {} in snapshot", property.id);
            }
        }

        Self {
            properties,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
