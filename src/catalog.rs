//! Hand-maintained catalog of mainline year pages and known series names

use std::collections::BTreeSet;

pub const MAINLINE_FIRST_YEAR: u32 = 1968;
pub const MAINLINE_LAST_YEAR: u32 = 2026;
/// First year the wiki also splits the mainline list "(by Series)"
pub const BY_SERIES_FIRST_YEAR: u32 = 2017;
/// The one year with a separate international lineup page
pub const INTERNATIONAL_YEAR: u32 = 2010;

/// Names the wiki spells two ways; each alias also gets a "Series" variant
const SPELLING_ALIASES: &[(&str, &str)] = &[("HiRakers", "Hi-Rakers")];

const EARLY_COLLECTIONS: &[&str] = &[
    "Action Command",
    "Classics",
    "Classy Customs",
    "Drag Strippers",
    "Extras",
    "Flying Colors",
    "Grand Prix",
    "HiRakers",
    "Megaforce",
    "Oldies But Goodies",
    "Real Riders",
    "Rescue Team",
    "Speed Demons",
    "Speed Fleet",
    "Speed Machines",
    "Speedway Specials",
    "Super Chromes",
    "Super Streeters",
    "The Heavies",
    "The Heavys",
    "The Hot Ones",
    "The Spoilers",
    "Trailbusters",
    "Ultra Hots",
    "Workhorses",
];

const EARLY_SPECIAL_SERIES: &[&str] = &[
    "Action Packs",
    "Auto-City",
    "Automagic",
    "California Custom",
    "Chopcycles",
    "Color Changers",
    "Color FX",
    "Convertables",
    "Crack-Ups",
    "Crashers",
    "Farbs",
    "Fat Daddy Sizzlers",
    "Flip Outs",
    "Flippers",
    "Gran Toros",
    "Hot Birds",
    "Hot Line",
    "Hot Shots",
    "Hot Wheels U.S.A.",
    "Hot Wheels World",
    "Motorized X-V Racers",
    "Night Ridin' Sizzlers",
    "Planet Micro",
    "Revvers",
    "RRRumblers",
    "Scorchers",
    "Shift Kickers",
    "Sizzlers",
    "Sizzlers II",
    "Small Shots",
    "Steering Rigs",
    "Super California Custom",
    "X-V Racers",
    "Zowees",
];

const OTHER_EARLY_SERIES: &[&str] = &[
    "Action Cycles",
    "Action Racers",
    "Attack Pack",
    "Hot Wheels Railroad",
    "Key Force",
];

const MODERN_SPECIAL_SERIES: &[&str] = &[
    "100%",
    "AcceleRacers",
    "Auto Affinity",
    "Battle Force 5",
    "Boulevard",
    "Car Culture",
    "Car Culture 2-Packs",
    "Team Transport",
    "Character Cars",
    "Color Shifters",
    "Color Reveal",
    "Cool Classics",
    "Classics",
    "Delivery",
    "Dragstrip Demons",
    "Fast & Furious Premium",
    "Flying Customs",
    "Flying Customs (2006)",
    "Flying Customs (2013)",
    "Flying Customs (2020)",
    "Formula One Collection",
    "Hot Wheels Garage",
    "Hall of Fame",
    "High-Speed Wheels Track Stars",
    "Highway 35 World Race",
    "Heritage",
    "Hot Wheels id",
    "Hot Wheels Racing",
    "Mario Kart",
    "Nostalgic Brands",
    "Pop Culture",
    "Premium Collector Sets",
    "Pro Racing",
    "Team Transporters",
    "Replica Entertainment",
    "Retro Style",
    "Since '68",
    "Speed Machines",
    "Super Chromes",
    "Team Hot Wheels High-Speed Wheel",
    "The Hot Ones (2011)",
    "The Hot Ones (2025)",
    "Ultra Hots",
    "Vintage Racing",
];

const NOTABLE_MODERN_THEMED_ASSORTMENTS: &[&str] = &[
    "50th Anniversary Favorites",
    "50th Anniversary Originals",
    "50th Anniversary Throwback",
    "Pearl and Chrome Anniversary Series",
    "Pearl and Chrome Anniversary Series (2018)",
    "Pearl and Chrome Anniversary Series (2019)",
    "Pearl and Chrome Anniversary Series (2020)",
    "Pearl and Chrome Anniversary Series (2021)",
    "Pearl and Chrome Anniversary Series (2022)",
    "Pearl and Chrome Anniversary Series (2023)",
    "Pearl and Chrome Anniversary Series (2024)",
    "Pearl and Chrome Anniversary Series (2025)",
    "Pearl and Chrome Anniversary Series (2026)",
    "Batman (2012)",
    "Batman (2015)",
    "Batman (2018)",
    "Batman (2019)",
    "Batman (2021)",
    "Batman (2022)",
    "Batman (2023)",
    "Batman (2024)",
    "Batman (2025)",
    "Cars of the Decades",
    "Cop Rods",
    "Easter Eggsclusives",
    "Easter (2013)",
    "Easter (2014)",
    "Easter (2015)",
    "Easter (2017)",
    "Fast & Furious",
    "Fast & Furious Spy Racers",
    "Fire Rods (2000)",
    "Fire Rods (2009)",
    "Fright Cars",
    "Halloween Cars",
    "Holiday Hot Rods",
    "HW Road Trippin'",
    "HW Winter (2020)",
    "HW Winter (2021)",
    "HW Winter (2022)",
    "HW Winter (2023)",
    "HW Winter (2024)",
    "Neon Speeders",
    "Retro Style",
    "Spring (2018)",
    "Spring (2019)",
    "Spring (2020)",
    "Spring (2021)",
    "Spring (2022)",
    "Spring (2023)",
    "Spring (2024)",
    "Spring (2025)",
    "Stars & Stripes",
    "The Beatles Yellow Submarine",
    "Throwback",
    "Ultra Hots",
    "Vintage Racing Club",
];

const OTHER_MODERN_SERIES: &[&str] = &[
    "Atomix",
    "Battle X",
    "Custom Classics",
    "Custom Motors",
    "Dropstars",
    "Extreme Shoxx",
    "Ferrari X-V",
    "G-Machines",
    "Hot Import Nights",
    "Hot Tunerz",
    "Hot Wheels Haulers",
    "Hot Wheels Skate",
    "Lightyear",
    "Long Haulers",
    "Modifighters",
    "Monster Jam",
    "Monster Jam Rev Tredz",
    "Monster Trucks",
    "Monster Trucks Bash-Ups",
    "Monster Trucks Big Rigs",
    "Monster Trucks Color Reveal",
    "Monster Trucks Double Troubles",
    "Monster Trucks Mini",
    "Monster Trucks Mystery Trucks",
    "Monster Trucks Oversized",
    "Monster Trucks Roarin' Wreckers",
    "Monster Trucks Twisted Tredz",
    "Moto Track Stars",
    "Motor Cycles",
    "Pavement Pounders",
    "RacerVerse",
    "Racing Rigs",
    "Rapid Transit",
    "RC",
    "Road Beasts",
    "Robo Wheels",
    "Shogun Racers",
    "Skate Freaks",
    "Sky Busters",
    "Snap Rides",
    "Speed Cycles",
    "Speed Demons",
    "Starships",
    "Starships Select",
    "Super Rigs",
    "Thunder Cycles",
    "Track Fleet",
    "Track Stars Haulers",
    "Trackin' Trucks",
    "Truckin' Transporters",
    "Volkswagen",
    "Wrecking Wheels",
];

const EXCLUSIVES: &[&str] = &[
    "Elite 64",
    "HWC.com",
    "Red Line Club",
    "NFT Garage",
];

const LARGER_SCALE: &[&str] = &[
    "1:43 Pull-Backs",
    "Batman 1:50 Scale Series",
    "Formula Fuelers",
    "Hot Wheels Elite",
    "Hot Wheels XL",
    "Premium 1:43",
    "Pull-Back Speeders",
    "Street Power",
    "Tunerz",
    "Corgi Collection",
    "Turbos Collection",
    "Eastwood Automobilia",
    "1:43 Pullbax",
    "1:43 Battle Vehicles",
    "LionChief",
    "Let's Race: Activate!",
];

const MISCELLANEOUS: &[&str] = &[
    "Collector Numbers 1 - 1121",
    "Hot Wheels 1:87 Scale Series",
    "Multipacks",
];

/// Hand-curated series names, grouped the way the wiki index groups them
pub const CURATED_SERIES: &[(&str, &[&str])] = &[
    ("Early Collections", EARLY_COLLECTIONS),
    ("Early Special Series", EARLY_SPECIAL_SERIES),
    ("Other Early Series", OTHER_EARLY_SERIES),
    ("Modern Special Series", MODERN_SPECIAL_SERIES),
    ("Notable Modern Themed Assortments", NOTABLE_MODERN_THEMED_ASSORTMENTS),
    ("Other Modern Series", OTHER_MODERN_SERIES),
    ("Exclusives", EXCLUSIVES),
    ("Larger Scale", LARGER_SCALE),
    ("Miscellaneous", MISCELLANEOUS),
];

/// Every yearly mainline page name the wiki is known to use
pub fn mainline_year_lists() -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for year in MAINLINE_FIRST_YEAR..=MAINLINE_LAST_YEAR {
        names.insert(format!("List of {} Hot Wheels", year));
        names.insert(format!("List of {} Hot Wheels new castings", year));
    }
    names.insert(format!("List of {} Hot Wheels (International)", INTERNATIONAL_YEAR));
    for year in BY_SERIES_FIRST_YEAR..=MAINLINE_LAST_YEAR {
        names.insert(format!("List of {} Hot Wheels (by Series)", year));
    }
    names
}

/// All curated names, flattened across groups
pub fn curated_series() -> BTreeSet<String> {
    CURATED_SERIES
        .iter()
        .flat_map(|(_, items)| items.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Curated names plus their "<name> Series" spelling and known aliases
pub fn curated_series_with_variants() -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for name in curated_series() {
        names.insert(format!("{} Series", name));
        for (canonical, alias) in SPELLING_ALIASES {
            if name == *canonical {
                names.insert(alias.to_string());
                names.insert(format!("{} Series", alias));
            }
        }
        names.insert(name);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainline_year_lists() {
        let names = mainline_year_lists();
        let years = (MAINLINE_LAST_YEAR - MAINLINE_FIRST_YEAR + 1) as usize;
        let by_series = (MAINLINE_LAST_YEAR - BY_SERIES_FIRST_YEAR + 1) as usize;
        assert_eq!(names.len(), years * 2 + 1 + by_series);
        assert!(names.contains("List of 1968 Hot Wheels"));
        assert!(names.contains("List of 2026 Hot Wheels new castings"));
        assert!(names.contains("List of 2010 Hot Wheels (International)"));
        assert!(names.contains("List of 2017 Hot Wheels (by Series)"));
        assert!(!names.contains("List of 2016 Hot Wheels (by Series)"));
        assert!(!names.contains("List of 2011 Hot Wheels (International)"));
    }

    #[test]
    fn test_curated_series_deduplicates_across_groups() {
        let total: usize = CURATED_SERIES.iter().map(|(_, items)| items.len()).sum();
        let names = curated_series();
        assert!(names.len() < total);
        assert!(names.contains("Classics"));
        assert!(names.contains("Collector Numbers 1 - 1121"));
    }

    #[test]
    fn test_variants_add_series_suffix() {
        let base = curated_series();
        let names = curated_series_with_variants();
        assert_eq!(names.len(), base.len() * 2 + 2);
        assert!(names.contains("Car Culture"));
        assert!(names.contains("Car Culture Series"));
        assert!(names.contains("Batman 1:50 Scale Series Series"));
    }

    #[test]
    fn test_hirakers_alias() {
        let names = curated_series_with_variants();
        assert!(names.contains("HiRakers"));
        assert!(names.contains("HiRakers Series"));
        assert!(names.contains("Hi-Rakers"));
        assert!(names.contains("Hi-Rakers Series"));
    }

    #[test]
    fn test_group_names_are_unique() {
        let groups: BTreeSet<&str> = CURATED_SERIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(groups.len(), CURATED_SERIES.len());
        assert_eq!(groups.len(), 9);
    }
}
