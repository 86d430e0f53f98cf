use std::fmt::Write;

use skycast_core::WeatherRecord;

/// Render the multi-line weather report shown after every lookup.
pub fn weather_report(record: &WeatherRecord) -> String {
    let location = if record.country.is_empty() {
        record.city.clone()
    } else {
        format!("{}, {}", record.city, record.country)
    };

    let mut out = String::new();
    let _ = writeln!(out, "\nWeather for {location}:");
    let _ = writeln!(out, "{}", "-".repeat(location.len() + 12));
    let _ = writeln!(out, "  Description : {}", title_case(&record.description));
    let _ = writeln!(out, "  Temperature : {} °C", record.temperature_c);
    let _ = writeln!(out, "  Feels like  : {} °C", record.feels_like_c);
    let _ = writeln!(out, "  Humidity    : {}%", record.humidity_pct);
    let _ = writeln!(out, "  Wind speed  : {} m/s", record.wind_speed_mps);
    out.push('\n');
    out
}

/// Uppercase the first letter of every whitespace-separated word, e.g.
/// "scattered clouds" -> "Scattered Clouds".
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WeatherRecord {
        WeatherRecord {
            city: "Paris".to_string(),
            country: "FR".to_string(),
            temperature_c: 18.2,
            feels_like_c: 17.5,
            description: "scattered clouds".to_string(),
            humidity_pct: 64,
            wind_speed_mps: 4.1,
        }
    }

    #[test]
    fn report_includes_every_field() {
        let report = weather_report(&record());
        assert!(report.contains("Weather for Paris, FR:"));
        assert!(report.contains("Description : Scattered Clouds"));
        assert!(report.contains("Temperature : 18.2 °C"));
        assert!(report.contains("Feels like  : 17.5 °C"));
        assert!(report.contains("Humidity    : 64%"));
        assert!(report.contains("Wind speed  : 4.1 m/s"));
    }

    #[test]
    fn header_omits_missing_country() {
        let mut rec = record();
        rec.country = String::new();
        let report = weather_report(&rec);
        assert!(report.contains("Weather for Paris:"));
    }

    #[test]
    fn title_case_handles_multiple_words() {
        assert_eq!(title_case("light intensity drizzle"), "Light Intensity Drizzle");
        assert_eq!(title_case("N/A"), "N/A");
        assert_eq!(title_case(""), "");
    }
}
