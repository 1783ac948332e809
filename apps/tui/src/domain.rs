use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ocean,
    Rapid,
    Wake,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Ocean, Self::Rapid, Self::Wake];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Rapid => "rapid",
            Self::Wake => "wake",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Ocean),
            1 => Some(Self::Rapid),
            2 => Some(Self::Wake),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ocean" => Some(Self::Ocean),
            "rapid" | "river-rapid" => Some(Self::Rapid),
            "wake" | "wake-cable" => Some(Self::Wake),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ocean => "Ocean",
            Self::Rapid => "River Rapid",
            Self::Wake => "Wakesurf",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a spot. Selection accepts any value, resolution happens downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Latitude/longitude pair in degrees, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the WGS84 latitude/longitude ranges.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

/// Anything other than a `[number, number]` pair reads as missing coordinates,
/// so one bad entry costs its marker and not the whole data file.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| serde_json::from_value::<[f64; 2]>(value).ok())
        .map(GeoPoint::from))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spot {
    pub id: SpotId,
    pub name: String,
    pub location: String,
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<GeoPoint>,
    #[serde(alias = "surfType")]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub best_season: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub map_link: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Spot {
    /// Minimal spot with only the fields the synchronization logic reads.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Option<GeoPoint>,
        category: Category,
    ) -> Self {
        Self {
            id: SpotId::new(id),
            name: name.into(),
            location: String::new(),
            coordinates,
            category,
            description: String::new(),
            notes: None,
            address: None,
            best_season: None,
            instructor: None,
            contact: None,
            map_link: None,
            image_urls: Vec::new(),
        }
    }

    /// Coordinate usable for camera placement, `None` for missing or malformed data.
    pub fn valid_coordinates(&self) -> Option<GeoPoint> {
        self.coordinates.filter(|point| point.is_valid())
    }

    /// Short label for the contact line: links collapse to their service name.
    pub fn contact_label(&self) -> Option<&str> {
        let contact = self.contact.as_deref()?;
        if !contact.starts_with("http") {
            return Some(contact);
        }
        if contact.contains("instagram") {
            Some("Instagram")
        } else {
            Some("Contact")
        }
    }
}
