#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Zurich;
use solar_orientation::{GeoCoordinate, LocalInstant, ReferenceFrame, SunLight};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=solar_orientation=trace shows every intermediate
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Bern/Zollikofen
    let bern = GeoCoordinate::new(46.941836, 7.440082);

    // Date from the first argument (YYYY-MM-DD), today in Bern otherwise
    let date = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?,
        None => Utc::now().with_timezone(&Zurich).date_naive(),
    };

    println!("Sun path - Bern, Switzerland");
    println!("Location: {:.5}°N, {:.5}°E", bern.latitude, bern.longitude);
    println!("Date: {}", date.format("%B %d, %Y"));
    println!("{:=<60}", "");
    println!("{:>8} {:>8} {:>11} {:>11} {:>10}", "time", "offset", "azimuth", "elevation", "intensity");

    let mut light = SunLight::new(bern, ReferenceFrame::Y_UP);
    for hour in 0..24 {
        let naive = date.and_hms_opt(hour, 0, 0).ok_or("Invalid time")?;
        // skipped by a daylight-saving transition
        let Some(local) = Zurich.from_local_datetime(&naive).earliest() else {
            continue;
        };

        let instant = LocalInstant::from_datetime(&local);
        light.update_orientation(&instant);
        let directional = light.directional_light();

        println!(
            "{:>8} {:>+8.1} {:>10.2}° {:>10.2}° {:>10.2}",
            local.format("%H:%M"),
            instant.utc_offset_hours(),
            light.azimuth().to_degrees(),
            light.elevation().to_degrees(),
            directional.intensity
        );
    }

    Ok(())
}
