#![allow(missing_docs, clippy::unwrap_used)]
use chrono::NaiveDate;
use solar_event_calculator::{
    EventKind, SolarEventCalculator, ASTRONOMICAL_ZENITH, CIVIL_ZENITH, NAUTICAL_ZENITH,
    OFFICIAL_ZENITH,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Coatesville, PA
    let latitude = 39.9537;
    let longitude = -75.7850;
    let timezone = "America/New_York";

    let date = NaiveDate::from_ymd_opt(2008, 11, 1).ok_or("invalid date")?;
    let calculator = SolarEventCalculator::new(date, latitude, longitude);

    println!("Solar events for {latitude:.4}°N {:.4}°W on {date}", -longitude);
    println!("{:=<48}", "");

    let zeniths = [
        ("official", OFFICIAL_ZENITH),
        ("civil", CIVIL_ZENITH),
        ("nautical", NAUTICAL_ZENITH),
        ("astronomical", ASTRONOMICAL_ZENITH),
    ];
    for (name, zenith) in zeniths {
        for (label, kind) in [("sunrise", EventKind::Sunrise), ("sunset", EventKind::Sunset)] {
            match calculator.local_event(zenith, kind, timezone)? {
                Some(event) => println!("{name:>13} {label:<7} {}", event.format("%H:%M %:z")),
                None => println!("{name:>13} {label:<7} does not occur"),
            }
        }
    }
    Ok(())
}
