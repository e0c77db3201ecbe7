use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use weather_core::{Dashboard, DaySummary, Units};

use super::{clock, day_label, title_case, visibility_km};
use crate::theme::{Animation, style_for};

const BASE_CSS: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    color: #fff;
    background: THE_GRADIENT;
    background-attachment: fixed;
}
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.cards { display: grid; grid-template-columns: 1.4fr 1fr 1fr; gap: 16px; }
.glass {
    background: rgba(255,255,255,0.15);
    border-radius: 18px;
    padding: 18px;
    border: 1px solid rgba(255,255,255,0.25);
    box-shadow: 0 10px 25px rgba(0,0,0,0.15);
    backdrop-filter: blur(8px);
    -webkit-backdrop-filter: blur(8px);
}
.inline { display: flex; align-items: center; gap: .75rem; }
.muted { opacity: .9; }
.big-temp { font-size: 56px; font-weight: 700; line-height: 1; }
.strip { display: flex; gap: 12px; flex-wrap: wrap; }
.day-card {
    display: flex; flex-direction: column; align-items: center; gap: .35rem;
    background: rgba(255,255,255,0.12);
    border: 1px solid rgba(255,255,255,0.2);
    border-radius: 16px; padding: 14px; min-width: 110px;
}
.wicon { width: 64px; height: 64px; }
"#;

const RAIN_CSS: &str = r#"
.rain:before, .rain:after {
    content: "";
    position: fixed;
    top: 0; left: 0; right: 0; bottom: 0;
    pointer-events: none;
    background-image: radial-gradient(2px 12px at 20px 20px, rgba(255,255,255,.25) 50%, rgba(255,255,255,0) 51%);
    background-size: 10px 40px;
    animation: rain-fall 0.75s linear infinite;
    opacity: .35;
}
@keyframes rain-fall { 0% { transform: translateY(-40px); } 100% { transform: translateY(40px); } }
"#;

const SNOW_CSS: &str = r#"
.snow:before, .snow:after {
    content: "";
    position: fixed;
    top: 0; left: 0; right: 0; bottom: 0;
    pointer-events: none;
    background-image:
      radial-gradient(3px 3px at 20px 20px, rgba(255,255,255,.9) 50%, rgba(255,255,255,0) 52%),
      radial-gradient(2px 2px at 60px 40px, rgba(255,255,255,.8) 50%, rgba(255,255,255,0) 52%),
      radial-gradient(2px 2px at 100px 80px, rgba(255,255,255,.85) 50%, rgba(255,255,255,0) 52%);
    background-size: 120px 120px;
    animation: snow-fall 6s linear infinite;
    opacity: .6;
}
@keyframes snow-fall { 0% { transform: translateY(-60px); } 100% { transform: translateY(60px); } }
"#;

pub fn icon_url(icon: &str) -> String {
    format!(
        "https://openweathermap.org/img/wn/{}@2x.png",
        encode_double_quoted_attribute(icon)
    )
}

/// Stylesheet for a theme: gradient background plus its overlay, if any.
pub fn stylesheet(dashboard: &Dashboard) -> String {
    let style = style_for(dashboard.theme);
    let mut css = BASE_CSS.replace("THE_GRADIENT", style.gradient);

    match style.animation {
        Some(Animation::Rain) => css.push_str(RAIN_CSS),
        Some(Animation::Snow) => css.push_str(SNOW_CSS),
        None => {}
    }

    css
}

/// Standalone HTML document for the dashboard.
pub fn render_page(dashboard: &Dashboard) -> String {
    let style = style_for(dashboard.theme);
    let body_class = style
        .animation
        .map(|a| format!(r#" class="{}""#, a.css_class()))
        .unwrap_or_default();
    let location = encode_text(&dashboard.current.display_location()).into_owned();

    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Weather · {location}</title>
<style>{css}</style>
</head>
<body{body_class} data-theme="{theme}">
<main>
<h1 style="margin-bottom:0">Weather Forecast</h1>
<p class="muted">Current conditions and a 5-day outlook.</p>
<section class="cards">
"#,
        css = stylesheet(dashboard),
        theme = dashboard.theme,
    );

    page.push_str(&current_card(dashboard));
    page.push_str(&sun_card(dashboard));
    page.push_str(&coordinates_card(dashboard));
    page.push_str("</section>\n<h3>5-Day Forecast</h3>\n<section class=\"strip\">\n");

    for day in &dashboard.daily {
        page.push_str(&day_card(day, dashboard.units));
    }

    page.push_str("</section>\n</main>\n</body>\n</html>\n");
    page
}

fn current_card(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;
    format!(
        r#"<div class="glass">
  <div class="inline">
    <img class="wicon" src="{icon}" alt="{alt}"/>
    <div>
      <div style="font-size:22px;font-weight:600">{location}</div>
      <div class="muted">{desc}</div>
    </div>
  </div>
  <div style="margin-top:8px" class="inline">
    <div class="big-temp">{temp}°{unit}</div>
    <div class="muted">feels like {feels}°</div>
  </div>
  <div class="inline muted" style="margin-top:6px">
    💧 {humidity}% &nbsp; · &nbsp; 🌬️ {wind} {wind_unit}
  </div>
</div>
"#,
        icon = icon_url(&current.icon),
        alt = encode_double_quoted_attribute(&current.condition_main),
        location = encode_text(&current.display_location()),
        desc = encode_text(&title_case(&current.description)),
        temp = current.temperature.round() as i64,
        unit = dashboard.units.temperature_symbol(),
        feels = current.feels_like.round() as i64,
        humidity = current.humidity_pct,
        wind = current.wind_speed,
        wind_unit = dashboard.units.wind_speed_unit(),
    )
}

fn sun_card(dashboard: &Dashboard) -> String {
    format!(
        r#"<div class="glass">
  <div style="font-weight:600">Sunrise / Sunset</div>
  <div class="inline" style="margin-top:8px">🌅 {sunrise} &nbsp; / &nbsp; 🌇 {sunset}</div>
</div>
"#,
        sunrise = clock(dashboard.sunrise_local),
        sunset = clock(dashboard.sunset_local),
    )
}

fn coordinates_card(dashboard: &Dashboard) -> String {
    let current = &dashboard.current;
    format!(
        r#"<div class="glass">
  <div style="font-weight:600">Coordinates</div>
  <div class="inline" style="margin-top:8px">📍 {lat:.2}, {lon:.2}</div>
  <div class="muted" style="margin-top:6px">Pressure: {pressure} hPa</div>
  <div class="muted">Visibility: {vis:.1} km</div>
</div>
"#,
        lat = current.latitude,
        lon = current.longitude,
        pressure = current.pressure_hpa,
        vis = visibility_km(current.visibility_m),
    )
}

fn day_card(day: &DaySummary, units: Units) -> String {
    format!(
        r#"<div class="day-card">
  <div style="font-weight:600">{label}</div>
  <img class="wicon" src="{icon}" alt="{alt}"/>
  <div>{temp}°{unit}</div>
  <div class="muted">{main}</div>
  <div class="muted">💨 {wind:.1} {wind_unit}</div>
</div>
"#,
        label = day_label(day.date),
        icon = icon_url(&day.representative_icon),
        alt = encode_double_quoted_attribute(&day.representative_condition_main),
        temp = day.average_temperature.round() as i64,
        unit = units.temperature_symbol(),
        main = encode_text(&day.representative_condition_main),
        wind = day.average_wind_speed,
        wind_unit = units.wind_speed_unit(),
    )
}
