//! Sort discovered wiki page names into series pages, single-car pages and the rest

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

use crate::types::{DiscoveredSeries, FilteredSeries};
use crate::utils::{osc8_file_link, read_json_file, write_json_file, JsonText};

/// Parenthetical suffixes that mark a page about one casting (matched lowercase)
pub const INDIVIDUAL_CAR_MARKERS: &[&str] = &[
    "(monster truck)",
    "(monster jam",
    "(themed monster",
    "(big rigs)",
    "(oversized)",
    "(100%)",
    "(mcdonald",
    "(attack pack)",
    "(smack pack)",
    "(disambiguation)",
    "(elite 64)",
    "(rlc)",
    "(id)",
    "(track stars haulers)",
];

/// Real series whose page title does not say "series"
pub const KNOWN_SERIES_PATTERNS: &[&str] = &[
    "Car Culture",
    "Pop Culture",
    "Team Transport",
    "Hot Wheels Boulevard",
    "Hot Wheels Classics",
    "Hot Wheels Premium",
    "Hot Wheels id",
    "Hot Wheels Heritage",
    "Hot Wheels Garage",
    "AcceleRacers",
    "Highway 35",
    "Speed Machines",
    "Experimotors",
    "Nightburnerz",
    "Muscle Mania",
    "Then and Now",
    "Tooned",
    "Factory Fresh",
    "Rod Squad",
    "Super Chromes",
    "All Stars",
    "Code Cars",
    "Compact Kings",
    "Dino Riders",
    "Track Stars",
    "Sky Busters",
    "Red Line Club",
    "Elite 64",
    "Treasure Hunts",
    "Super Treasure Hunt",
    "Real Riders",
    "Track Aces",
    "New Models",
    "Baja Blazers",
    "Night Burnerz",
    "Chrome Burnerz",
    "Classy Customs",
    "Wastelanders",
    "Marvel Character Cars",
    "Star Wars Character Cars",
    "Star Wars Carships",
    "Star Wars Starships",
    "Pride Rides",
    "X-Raycers",
    "Pure Muscle",
    "Pro Circuit",
    "Mattel Creations",
];

/// Kind of wiki page a name most likely refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    IndividualCar,
    SeriesPage,
    Ambiguous,
}

/// Classify one page name. First matching rule wins.
pub fn classify_name(name: &str) -> PageKind {
    let lower = name.to_lowercase();
    if INDIVIDUAL_CAR_MARKERS.iter().any(|m| lower.contains(m)) {
        PageKind::IndividualCar
    } else if lower.contains("series") || lower.contains("mini collection") || lower.starts_with("list of") {
        PageKind::SeriesPage
    } else {
        PageKind::Ambiguous
    }
}

/// Yearly lineup pages, e.g. "List of 1998 Hot Wheels"
pub fn is_mainline_list(name: &str) -> bool {
    name.starts_with("List of") && name.contains("Hot Wheels")
}

/// Case-insensitive substring hit against KNOWN_SERIES_PATTERNS
///
/// No word boundaries: "Hot Wheels identity" still hits "Hot Wheels id".
pub fn matches_known_series(name: &str) -> bool {
    let lower = name.to_lowercase();
    KNOWN_SERIES_PATTERNS
        .iter()
        .any(|p| lower.contains(&p.to_lowercase()))
}

/// Result of one classification pass, before output shaping
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub series_pages: Vec<String>,
    pub individual_cars: Vec<String>,
    pub ambiguous: Vec<String>,
    pub mainline_lists: BTreeSet<String>,
    /// Ambiguous names rescued by a known-series pattern
    pub promoted: Vec<String>,
}

impl Classification {
    pub fn classify(names: &[String]) -> Self {
        let mut result = Classification::default();
        for name in names {
            match classify_name(name) {
                PageKind::IndividualCar => result.individual_cars.push(name.clone()),
                PageKind::SeriesPage => result.series_pages.push(name.clone()),
                PageKind::Ambiguous => {
                    if matches_known_series(name) {
                        result.promoted.push(name.clone());
                    }
                    result.ambiguous.push(name.clone());
                }
            }
            if is_mainline_list(name) {
                result.mainline_lists.insert(name.clone());
            }
        }
        result
    }

    /// Series pages plus promoted names, deduplicated and sorted
    pub fn all_series(&self) -> BTreeSet<String> {
        self.series_pages
            .iter()
            .chain(self.promoted.iter())
            .cloned()
            .collect()
    }

    pub fn to_filtered(&self) -> FilteredSeries {
        let series: Vec<String> = self.all_series().into_iter().collect();
        FilteredSeries {
            total_filtered: series.len(),
            series_pages: series,
            mainline_lists: self.mainline_lists.iter().cloned().collect(),
            individual_cars: self.individual_cars.len(),
            ambiguous: self.ambiguous.len(),
        }
    }
}

pub fn run_filter(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let discovered: DiscoveredSeries = read_json_file(input)?;
    if discovered.all_series.is_empty() {
        eprintln!("Warning: {} has no names in allSeries", input.display());
    }

    let classification = Classification::classify(&discovered.all_series);

    println!("Total discovered: {}", discovered.all_series.len());
    println!("Clear series pages: {}", classification.series_pages.len());
    println!("Individual car pages: {}", classification.individual_cars.len());
    println!("Ambiguous: {}", classification.ambiguous.len());
    println!();

    let filtered = classification.to_filtered();
    println!("Series pages (with known patterns): {}", filtered.total_filtered);
    if !quiet {
        println!();
        for name in &filtered.series_pages {
            println!("  {}", name);
        }
    }

    write_json_file(output, &filtered, JsonText::AsciiOnly)?;
    let output_str = output.to_string_lossy();
    println!("\nSaved to {}", osc8_file_link(&output_str, &output_str));
    Ok(())
}
