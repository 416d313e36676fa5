//! Merge classifier output with the curated catalog

use anyhow::{Context, Result};
use chrono::Local;
use regex::RegexSet;
use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::{curated_series_with_variants, mainline_year_lists, CURATED_SERIES};
use crate::types::{CategoryGroups, MergedSeries, PriorSeries};
use crate::utils::{osc8_file_link, read_json_file, write_json_file, JsonText};

/// Pages that look like series pages but hold no vehicle tables
pub const EXCLUDED_SERIES_PATTERNS: &[&str] = &[
    r"^Timeline of",
    r"^List of Sets",
    r"^Wheel types",
    r"^Sinnin",
];

/// Merged name sets plus what the catalog contributed
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub series_pages: Vec<String>,
    pub mainline_lists: Vec<String>,
    pub new_series: BTreeSet<String>,
    pub new_mainline: BTreeSet<String>,
    pub catalog_series_count: usize,
    pub catalog_mainline_count: usize,
}

pub fn merge(prior: &PriorSeries) -> Result<MergeOutcome> {
    let excluded = RegexSet::new(EXCLUDED_SERIES_PATTERNS).context("Invalid exclusion pattern")?;

    let existing_series: BTreeSet<String> = prior.series_pages.iter().cloned().collect();
    let existing_mainline: BTreeSet<String> = prior.mainline_lists.iter().cloned().collect();

    let catalog_mainline = mainline_year_lists();
    let catalog_series = curated_series_with_variants();

    let mainline_lists = existing_mainline.union(&catalog_mainline).cloned().collect();
    let series_pages = existing_series
        .union(&catalog_series)
        .filter(|name| !excluded.is_match(name))
        .cloned()
        .collect();

    Ok(MergeOutcome {
        series_pages,
        mainline_lists,
        new_series: catalog_series.difference(&existing_series).cloned().collect(),
        new_mainline: catalog_mainline.difference(&existing_mainline).cloned().collect(),
        catalog_series_count: catalog_series.len(),
        catalog_mainline_count: catalog_mainline.len(),
    })
}

impl MergeOutcome {
    pub fn into_merged(self, prior: &PriorSeries, merged_at: String) -> MergedSeries {
        MergedSeries {
            total_filtered: self.series_pages.len(),
            series_pages: self.series_pages,
            mainline_lists: self.mainline_lists,
            individual_cars: prior.individual_cars,
            ambiguous: prior.ambiguous,
            user_categories: CategoryGroups(CURATED_SERIES),
            merged_at,
        }
    }
}

pub fn run_merge(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let prior: PriorSeries = read_json_file(input)?;
    let outcome = merge(&prior)?;

    println!("Existing mainline: {}", prior.mainline_lists.len());
    println!("Catalog mainline: {}", outcome.catalog_mainline_count);
    println!("NEW mainline pages: {}", outcome.new_mainline.len());
    if !quiet {
        for name in &outcome.new_mainline {
            println!("  + {}", name);
        }
    }

    println!("\nExisting series: {}", prior.series_pages.len());
    println!("Catalog series (with variants): {}", outcome.catalog_series_count);
    println!("NEW series pages: {}", outcome.new_series.len());
    if !quiet {
        for name in &outcome.new_series {
            println!("  + {}", name);
        }
    }

    let merged_at = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let merged = outcome.into_merged(&prior, merged_at);

    println!("\n{}", "=".repeat(50));
    println!("MERGED TOTALS:");
    println!("  Mainline lists: {}", merged.mainline_lists.len());
    println!("  Series pages: {}", merged.series_pages.len());
    println!(
        "  TOTAL: {}",
        merged.mainline_lists.len() + merged.series_pages.len()
    );

    write_json_file(output, &merged, JsonText::Unicode)?;
    let output_str = output.to_string_lossy();
    println!("\nSaved to {}", osc8_file_link(&output_str, &output_str));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior(series: &[&str], mainline: &[&str]) -> PriorSeries {
        PriorSeries {
            series_pages: series.iter().map(|s| s.to_string()).collect(),
            mainline_lists: mainline.iter().map(|s| s.to_string()).collect(),
            individual_cars: Some(12),
            ambiguous: Some(40),
        }
    }

    #[test]
    fn test_output_is_superset_of_input_minus_exclusions() {
        let p = prior(
            &[
                "Zamac Series",
                "Timeline of Hot Wheels",
                "List of Sets",
                "Wheel types",
                "Sinnin' Series",
                "Mini Timeline of Stuff",
            ],
            &[],
        );
        let outcome = merge(&p).unwrap();
        assert!(outcome.series_pages.contains(&"Zamac Series".to_string()));
        assert!(outcome.series_pages.contains(&"Mini Timeline of Stuff".to_string()));
        for gone in ["Timeline of Hot Wheels", "List of Sets", "Wheel types", "Sinnin' Series"] {
            assert!(!outcome.series_pages.contains(&gone.to_string()), "{}", gone);
        }
    }

    #[test]
    fn test_every_year_list_in_mainline() {
        let outcome = merge(&prior(&[], &["List of Hot Wheels Rarities"])).unwrap();
        for name in mainline_year_lists() {
            assert!(outcome.mainline_lists.contains(&name), "{}", name);
        }
        assert!(outcome
            .mainline_lists
            .contains(&"List of Hot Wheels Rarities".to_string()));
    }

    #[test]
    fn test_new_counts_relative_to_prior() {
        let p = prior(&["Car Culture", "Car Culture Series"], &["List of 1968 Hot Wheels"]);
        let outcome = merge(&p).unwrap();
        assert_eq!(outcome.new_series.len(), outcome.catalog_series_count - 2);
        assert_eq!(outcome.new_mainline.len(), outcome.catalog_mainline_count - 1);
        assert!(!outcome.new_series.contains("Car Culture"));
    }

    #[test]
    fn test_output_sorted() {
        let outcome = merge(&prior(&["Zzz Series", "Aaa Series"], &[])).unwrap();
        let mut sorted = outcome.series_pages.clone();
        sorted.sort();
        assert_eq!(outcome.series_pages, sorted);
    }

    #[test]
    fn test_merging_own_output_adds_nothing() {
        let first = merge(&prior(&["Car Culture"], &[])).unwrap();
        let again = PriorSeries {
            series_pages: first.series_pages.clone(),
            mainline_lists: first.mainline_lists.clone(),
            ..Default::default()
        };
        let second = merge(&again).unwrap();
        assert!(second.new_series.is_empty());
        assert!(second.new_mainline.is_empty());
        assert_eq!(second.series_pages, first.series_pages);
        assert_eq!(second.mainline_lists, first.mainline_lists);
    }

    #[test]
    fn test_merged_carries_counts_and_categories() {
        let p = prior(&["Car Culture"], &[]);
        let merged = merge(&p).unwrap().into_merged(&p, "2025-06-01T10:00:00.000000".to_string());
        assert_eq!(merged.total_filtered, merged.series_pages.len());
        assert_eq!(merged.individual_cars, Some(12));

        let value = serde_json::to_value(&merged).unwrap();
        assert_eq!(value["userCategories"]["Exclusives"][0], "Elite 64");
        assert_eq!(value["mergedAt"], "2025-06-01T10:00:00.000000");
        assert_eq!(value["ambiguous"], 40);
    }

    #[test]
    fn test_run_merge_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered-series.json");
        std::fs::write(
            &path,
            r#"{"totalFiltered": 1, "seriesPages": ["Café Racers Series", "Timeline of Hot Wheels"],
                "mainlineLists": [], "individualCars": 3, "ambiguous": 5}"#,
        )
        .unwrap();

        run_merge(&path, &path, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Café Racers Series"));
        assert!(!content.contains("Timeline of Hot Wheels"));

        let first: PriorSeries = serde_json::from_str(&content).unwrap();
        assert_eq!(first.individual_cars, Some(3));
        let second = merge(&first).unwrap();
        assert!(second.new_series.is_empty());
        assert!(second.new_mainline.is_empty());
    }
}
