//! Segment and series frequency report over the vehicle database

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use crate::types::VehicleRecord;
use crate::utils::{osc8_file_link, read_json_file};

const TOP_SEGMENTS: usize = 20;
const TOP_SERIES: usize = 80;

/// Occurrence counts that remember first-seen order for ties
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Most frequent first; equal counts stay in first-seen order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }

    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut rows = self.sorted();
        rows.truncate(n);
        rows
    }
}

pub struct FieldReport {
    pub segments: FrequencyTable,
    pub series: FrequencyTable,
}

impl FieldReport {
    pub fn compute(cars: &[VehicleRecord]) -> Self {
        let mut segments = FrequencyTable::default();
        let mut series = FrequencyTable::default();
        for car in cars {
            segments.add(car.segment());
            series.add(car.series());
        }
        Self { segments, series }
    }

    pub fn print(&self) {
        println!("=== SEGMENT FIELD VALUES ===");
        for (segment, count) in self.segments.top(TOP_SEGMENTS) {
            println!("  [{:?}]: {}", segment, count);
        }

        println!();
        println!("=== UNIQUE SERIES: {} ===", self.series.len());
        for (series, count) in self.series.top(TOP_SERIES) {
            println!("  {:5}  {}", count, series);
        }
    }

    /// Write the full series table, most frequent first
    pub fn write_series_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        wtr.write_record(["series", "count"])?;
        for (series, count) in self.series.sorted() {
            let count = count.to_string();
            wtr.write_record([series, count.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub fn run_fields(input: &Path, csv_path: Option<&Path>) -> Result<()> {
    let cars: Vec<VehicleRecord> = read_json_file(input)?;
    if cars.is_empty() {
        eprintln!("Warning: {} has no records", input.display());
    }

    let report = FieldReport::compute(&cars);
    report.print();

    if let Some(path) = csv_path {
        report.write_series_csv(path)?;
        let path_str = path.to_string_lossy();
        println!("\nSaved to {}", osc8_file_link(&path_str, &path_str));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(table: &FrequencyTable, value: &str) -> usize {
        table.index.get(value).map_or(0, |&i| table.entries[i].1)
    }

    fn car(segment: Option<&str>, series: &str) -> VehicleRecord {
        VehicleRecord {
            segment: segment.map(str::to_string),
            series: Some(series.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_frequency_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::default();
        for v in ["b", "a", "c", "a", "b", "d"] {
            table.add(v);
        }
        assert_eq!(table.sorted(), vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
        assert_eq!(table.top(3).len(), 3);
        assert_eq!(count(&table, "a"), 2);
        assert_eq!(count(&table, "zzz"), 0);
    }

    #[test]
    fn test_missing_segment_counts_as_empty() {
        let cars = vec![
            car(Some("mainline"), "HW Dream Garage"),
            car(None, "HW Dream Garage"),
            car(None, "Car Culture"),
        ];
        let report = FieldReport::compute(&cars);
        assert_eq!(count(&report.segments, ""), 2);
        assert_eq!(report.segments.sorted()[0], ("", 2));
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series.sorted()[0], ("HW Dream Garage", 2));
    }

    #[test]
    fn test_top_truncates() {
        let cars: Vec<VehicleRecord> = (0..100).map(|i| car(None, &format!("S{}", i))).collect();
        let report = FieldReport::compute(&cars);
        assert_eq!(report.series.top(TOP_SERIES).len(), 80);
        assert_eq!(report.series.top(TOP_SERIES)[0].0, "S0");
    }

    #[test]
    fn test_series_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("db.json");
        let out = dir.path().join("series.csv");
        std::fs::write(
            &db,
            r#"[{"series": "Fast & Furious"}, {"series": "Car Culture"}, {"series": "Car Culture"}]"#,
        )
        .unwrap();

        run_fields(&db, Some(&out)).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "series,count\nCar Culture,2\nFast & Furious,1\n");
    }
}
