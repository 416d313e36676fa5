//! Photo coverage report over the vehicle database

use anyhow::Result;
use std::path::Path;

use crate::types::VehicleRecord;
use crate::utils::{percent, read_json_file, truncate_chars};

const URL_SAMPLE_LIMIT: usize = 5;
const NO_PHOTO_SAMPLE_LIMIT: usize = 10;
const OTHER_SAMPLE_LIMIT: usize = 10;

/// How a `photo_url` value refers to its image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoRef {
    /// "wiki-file:<name>" reference still waiting to be resolved
    WikiFile,
    Http,
    /// Hosted on the fandom CDN (always also Http)
    StaticWikia,
}

impl PhotoRef {
    pub const ALL: [PhotoRef; 3] = [PhotoRef::WikiFile, PhotoRef::Http, PhotoRef::StaticWikia];

    pub fn matches(self, url: &str) -> bool {
        match self {
            PhotoRef::WikiFile => url.starts_with("wiki-file:"),
            PhotoRef::Http => url.starts_with("http"),
            PhotoRef::StaticWikia => url.contains("static.wikia"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PhotoRef::WikiFile => "wiki-file:",
            PhotoRef::Http => "http",
            PhotoRef::StaticWikia => "static.wikia",
        }
    }
}

/// A photo_url that is present but neither a wiki-file ref nor a URL
fn is_other_photo(car: &VehicleRecord) -> bool {
    car.has_photo()
        && !PhotoRef::WikiFile.matches(car.photo_url())
        && !PhotoRef::Http.matches(car.photo_url())
}

#[derive(Debug, Clone, Default)]
pub struct PhotoCoverage<'a> {
    pub total: usize,
    pub with_photo: usize,
    pub wiki_file: usize,
    pub http: usize,
    pub static_wikia: usize,
    pub with_carded: usize,
    pub other: usize,
    pub wiki_file_samples: Vec<&'a VehicleRecord>,
    pub http_samples: Vec<&'a VehicleRecord>,
    pub static_wikia_samples: Vec<&'a VehicleRecord>,
    pub no_photo_samples: Vec<&'a VehicleRecord>,
    pub other_samples: Vec<&'a VehicleRecord>,
}

fn push_sample<'a>(samples: &mut Vec<&'a VehicleRecord>, car: &'a VehicleRecord, limit: usize) {
    if samples.len() < limit {
        samples.push(car);
    }
}

impl<'a> PhotoCoverage<'a> {
    pub fn compute(cars: &'a [VehicleRecord]) -> Self {
        let mut cov = PhotoCoverage {
            total: cars.len(),
            ..Default::default()
        };

        for car in cars {
            let url = car.photo_url();
            if car.has_photo() {
                cov.with_photo += 1;
            } else {
                push_sample(&mut cov.no_photo_samples, car, NO_PHOTO_SAMPLE_LIMIT);
            }
            if car.has_carded_photo() {
                cov.with_carded += 1;
            }
            for kind in PhotoRef::ALL {
                if !kind.matches(url) {
                    continue;
                }
                let (count, samples) = match kind {
                    PhotoRef::WikiFile => (&mut cov.wiki_file, &mut cov.wiki_file_samples),
                    PhotoRef::Http => (&mut cov.http, &mut cov.http_samples),
                    PhotoRef::StaticWikia => (&mut cov.static_wikia, &mut cov.static_wikia_samples),
                };
                *count += 1;
                push_sample(samples, car, URL_SAMPLE_LIMIT);
            }
            if is_other_photo(car) {
                cov.other += 1;
                push_sample(&mut cov.other_samples, car, OTHER_SAMPLE_LIMIT);
            }
        }
        cov
    }

    pub fn without_photo(&self) -> usize {
        self.total - self.with_photo
    }

    pub fn samples(&self, kind: PhotoRef) -> &[&'a VehicleRecord] {
        match kind {
            PhotoRef::WikiFile => &self.wiki_file_samples,
            PhotoRef::Http => &self.http_samples,
            PhotoRef::StaticWikia => &self.static_wikia_samples,
        }
    }

    pub fn print(&self) {
        println!("Total items: {}", self.total);
        println!(
            "With photo_url: {} ({:.1}%)",
            self.with_photo,
            percent(self.with_photo, self.total)
        );
        println!("  - wiki-file: refs: {}", self.wiki_file);
        println!("  - http URLs: {}", self.http);
        println!("  - static.wikia: {}", self.static_wikia);
        println!(
            "Without photo_url: {} ({:.1}%)",
            self.without_photo(),
            percent(self.without_photo(), self.total)
        );
        println!("With photo_url_carded: {}", self.with_carded);

        for kind in PhotoRef::ALL {
            println!();
            for car in self.samples(kind) {
                println!(
                    "  {}: {} -> {}",
                    kind.label(),
                    car.car_model(),
                    truncate_chars(car.photo_url(), 80)
                );
            }
        }

        println!();
        for car in &self.no_photo_samples {
            println!(
                "  NO PHOTO: {} | series={} | year={}",
                car.car_model(),
                car.series(),
                car.year()
            );
        }

        println!();
        println!("Other photo_url patterns: {}", self.other);
        for car in &self.other_samples {
            println!("  OTHER: {}", truncate_chars(car.photo_url(), 100));
        }
    }
}

pub fn run_photos(input: &Path) -> Result<()> {
    let cars: Vec<VehicleRecord> = read_json_file(input)?;
    if cars.is_empty() {
        eprintln!("Warning: {} has no records", input.display());
    }
    PhotoCoverage::compute(&cars).print();
    Ok(())
}
