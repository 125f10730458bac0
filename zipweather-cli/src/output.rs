//! Human-friendly report rendering.

use zipweather_core::WeatherPage;

/// Render the page state as a short multi-line report: location, condition
/// (when the provider sent one), temperature in the toggled unit, wind.
pub fn render(page: &WeatherPage) -> String {
    let Some(report) = page.weather() else {
        return "No weather to show.".to_string();
    };

    let mut lines = Vec::new();

    lines.push(format!("{}, {}", report.location.name, report.location.region));

    if let Some(condition) = &report.current.condition {
        lines.push(condition.text.clone());
    }

    if let Some(temperature) = page.temperature_display() {
        lines.push(temperature);
    }

    lines.push(format!("Wind: {} kph", report.current.wind_kph));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zipweather_core::{ProxyClient, Unit, WeatherReport};

    fn loaded_page(temp_c: Option<f64>, with_condition: bool) -> WeatherPage {
        let condition = with_condition
            .then(|| json!({ "text": "Partly cloudy", "icon": "//icons/cloud.png", "code": 1003 }));

        let report: WeatherReport = serde_json::from_value(json!({
            "location": {
                "name": "Beverly Hills",
                "region": "California",
                "country": "USA",
                "lat": 34.09,
                "lon": -118.41,
                "tz_id": "America/Los_Angeles",
                "localtime_epoch": 1754000000i64,
                "localtime": "2025-07-31 15:13"
            },
            "current": {
                "last_updated_epoch": 1753999200i64,
                "last_updated": "2025-07-31 15:00",
                "temp_c": temp_c,
                "temp_f": temp_c.map(|c| c * 9.0 / 5.0 + 32.0),
                "is_day": 1,
                "condition": condition,
                "wind_mph": 5.6,
                "wind_kph": 9.0,
                "wind_degree": 230,
                "wind_dir": "SW",
                "pressure_mb": 1015.0,
                "pressure_in": 29.97,
                "precip_mm": 0.0,
                "precip_in": 0.0,
                "humidity": 43,
                "cloud": 25,
                "feelslike_c": 20.0,
                "feelslike_f": 68.0,
                "vis_km": 16.0,
                "vis_miles": 9.0,
                "uv": 6.0,
                "gust_mph": 7.8,
                "gust_kph": 12.6
            }
        }))
        .expect("test report must parse");

        // Drive the view-model the way the front does instead of poking state.
        let mut page = WeatherPage::new(ProxyClient::new("http://127.0.0.1:9"));
        page.set_zip_code("90210");
        let (ticket, _) = page.begin_fetch().expect("valid zip must begin a fetch");
        page.complete_fetch(ticket, Ok(report));
        page
    }

    #[test]
    fn renders_location_condition_temperature_and_wind() {
        let page = loaded_page(Some(20.0), true);

        assert_eq!(
            render(&page),
            "Beverly Hills, California\nPartly cloudy\n20 °C\nWind: 9 kph"
        );
    }

    #[test]
    fn renders_fahrenheit_after_toggle() {
        let mut page = loaded_page(Some(20.0), true);
        page.toggle_unit();

        assert!(render(&page).contains("68 °F"));
    }

    #[test]
    fn omits_the_condition_line_when_absent() {
        let page = loaded_page(Some(20.0), false);

        assert!(!render(&page).contains("Partly cloudy"));
        assert!(render(&page).contains("Beverly Hills, California"));
    }

    #[test]
    fn renders_zero_fahrenheit_for_missing_reading() {
        let mut page = loaded_page(None, true);
        page.set_unit(Unit::Fahrenheit);

        assert!(render(&page).contains("0 °F"));
    }

    #[test]
    fn renders_placeholder_without_weather() {
        let page = WeatherPage::new(ProxyClient::new("http://127.0.0.1:9"));
        assert_eq!(render(&page), "No weather to show.");
    }
}
