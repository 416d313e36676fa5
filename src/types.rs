//! Dataset records and series artifacts with JSON serialization support

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Year as stored in the database: some records carry a string, some a number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearField::Number(n) => write!(f, "{}", n),
            YearField::Text(s) => f.write_str(s),
        }
    }
}

/// One vehicle from hotwheels_database.json
///
/// Every field is optional; absent and `null` values both read as "".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleRecord {
    #[serde(default, rename = "carModel")]
    pub car_model: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub segment: Option<String>,
    #[serde(default)]
    pub year: Option<YearField>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub photo_url_carded: Option<String>,
}

impl VehicleRecord {
    pub fn car_model(&self) -> &str {
        self.car_model.as_deref().unwrap_or("")
    }

    pub fn series(&self) -> &str {
        self.series.as_deref().unwrap_or("")
    }

    pub fn segment(&self) -> &str {
        self.segment.as_deref().unwrap_or("")
    }

    pub fn year(&self) -> String {
        self.year.as_ref().map(|y| y.to_string()).unwrap_or_default()
    }

    pub fn photo_url(&self) -> &str {
        self.photo_url.as_deref().unwrap_or("")
    }

    pub fn photo_url_carded(&self) -> &str {
        self.photo_url_carded.as_deref().unwrap_or("")
    }

    /// True when `photo_url` has something other than whitespace
    pub fn has_photo(&self) -> bool {
        !self.photo_url().trim().is_empty()
    }

    pub fn has_carded_photo(&self) -> bool {
        !self.photo_url_carded().trim().is_empty()
    }
}

/// Raw page names found by the wiki crawler (discovered-series.json)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveredSeries {
    #[serde(rename = "allSeries")]
    pub all_series: Vec<String>,
}

/// Output of `series filter`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredSeries {
    pub total_filtered: usize,
    pub series_pages: Vec<String>,
    pub mainline_lists: Vec<String>,
    pub individual_cars: usize,
    pub ambiguous: usize,
}

/// A filtered-series file as read back by `series merge`
///
/// Accepts both classifier output and a previous merge result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorSeries {
    #[serde(default)]
    pub series_pages: Vec<String>,
    #[serde(default)]
    pub mainline_lists: Vec<String>,
    #[serde(default)]
    pub individual_cars: Option<usize>,
    #[serde(default)]
    pub ambiguous: Option<usize>,
}

/// Named groups of curated series, serialized as an object in group order
#[derive(Debug, Clone, Copy)]
pub struct CategoryGroups(pub &'static [(&'static str, &'static [&'static str])]);

impl Serialize for CategoryGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, items) in self.0 {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

/// Output of `series merge`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedSeries {
    pub total_filtered: usize,
    pub series_pages: Vec<String>,
    pub mainline_lists: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_cars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiguous: Option<usize>,
    pub user_categories: CategoryGroups,
    pub merged_at: String,
}
