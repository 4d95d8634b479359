#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Epoch seconds -> local `HH:MM:SS`.
#[cfg(feature = "web")]
pub fn format_clock(epoch_secs: i64) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_f64(epoch_secs as f64 * 1000.0));
    if d.get_time().is_nan() {
        return epoch_secs.to_string();
    }
    format!(
        "{}:{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32),
        pad2(d.get_seconds() as i32)
    )
}

/// Epoch seconds -> local `HH:MM:SS`.
#[cfg(not(feature = "web"))]
pub fn format_clock(epoch_secs: i64) -> String {
    use chrono::{DateTime, Local};
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => epoch_secs.to_string(),
    }
}

pub fn format_celsius(value: f64) -> String {
    format!("{:.1}°C", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
