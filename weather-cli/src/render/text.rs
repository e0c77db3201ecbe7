use std::fmt::Write;

use weather_core::Dashboard;

use super::{clock, day_label, title_case, visibility_km};

/// Plain-text rendering for the terminal.
pub fn render(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;
    let temp_unit = dashboard.units.temperature_symbol();
    let wind_unit = dashboard.units.wind_speed_unit();

    let mut out = String::new();

    let _ = writeln!(out, "{}", current.display_location());
    let _ = writeln!(
        out,
        "  {} ({})",
        title_case(&current.description),
        dashboard.theme
    );
    let _ = writeln!(
        out,
        "  {}°{temp_unit}, feels like {}°",
        current.temperature.round() as i64,
        current.feels_like.round() as i64
    );
    let _ = writeln!(
        out,
        "  Humidity {}% · Wind {} {wind_unit}",
        current.humidity_pct, current.wind_speed
    );
    let _ = writeln!(
        out,
        "  Sunrise {} / Sunset {}",
        clock(dashboard.sunrise_local),
        clock(dashboard.sunset_local)
    );
    let _ = writeln!(
        out,
        "  Coordinates {:.2}, {:.2} · Pressure {} hPa · Visibility {:.1} km",
        current.latitude,
        current.longitude,
        current.pressure_hpa,
        visibility_km(current.visibility_m)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "5-Day Forecast");
    if dashboard.daily.is_empty() {
        let _ = writeln!(out, "  (no forecast data)");
    }
    for day in &dashboard.daily {
        let _ = writeln!(
            out,
            "  {:<11} {:>4}°{temp_unit}  {:<14} {:.1} {wind_unit}",
            day_label(day.date),
            day.average_temperature.round() as i64,
            day.representative_condition_main,
            day.average_wind_speed
        );
    }

    out
}
