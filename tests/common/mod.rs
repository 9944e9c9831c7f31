//! Test data utilities.
//!
//! Writes small airport CSV files with the full source header so the loader
//! sees the same columns as the real data set.

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,continent,\
iso_country,iso_region,municipality,scheduled_service,gps_code,iata_code,local_code,home_link,\
wikipedia_link,keywords";

/// One CSV row. An empty `elevation` leaves the cell blank.
pub fn row(
    id: u32,
    airport_type: &str,
    name: &str,
    lat: f64,
    lon: f64,
    elevation: &str,
    region: &str,
) -> String {
    format!(
        "{id},K{id:03},{airport_type},{name},{lat},{lon},{elevation},NA,US,{region},Town,no,,,,,,"
    )
}

/// Write the header plus `rows` to a temporary CSV file.
pub fn write_csv(rows: &[String]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    writeln!(file, "{HEADER}").expect("write header");
    for r in rows {
        writeln!(file, "{r}").expect("write row");
    }
    file.flush().expect("flush csv");
    file
}

/// The four-airport scenario: two in Massachusetts, two in Connecticut.
pub fn four_airports() -> NamedTempFile {
    write_csv(&[
        row(1, "small_airport", "Harbor Field", 42.0, -71.0, "10", "US-MA"),
        row(2, "heliport", "Summit Pad", 42.4, -71.4, "50", "US-MA"),
        row(3, "small_airport", "River Strip", 41.6, -72.6, "5", "US-CT"),
        row(4, "small_airport", "Valley Strip", 41.8, -72.8, "5", "US-CT"),
    ])
}

/// A larger, unsorted New England sample with a missing elevation.
pub fn new_england_sample() -> NamedTempFile {
    write_csv(&[
        row(10, "small_airport", "Coastal Field", 43.6, -70.3, "74", "US-ME"),
        row(11, "heliport", "Ridge Heliport", 44.3, -71.8, "", "US-NH"),
        row(12, "medium_airport", "Mountain Regional", 44.4, -72.0, "1188", "US-VT"),
        row(13, "seaplane_base", "Lake Base", 43.9, -69.9, "0", "US-ME"),
        row(14, "small_airport", "Notch Airfield", 44.2, -71.2, "1497", "US-NH"),
        row(15, "heliport", "Harbor Heliport", 41.8, -71.4, "20", "US-RI"),
        row(16, "large_airport", "Metro International", 42.36, -71.0, "20", "US-MA"),
        row(17, "closed", "Old Strip", 42.1, -72.5, "250", "US-MA"),
        row(18, "small_airport", "Hills Airport", 41.9, -73.2, "1497", "US-CT"),
    ])
}
