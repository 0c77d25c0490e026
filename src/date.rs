const MINUTE_MS: f64 = 60_000.0;
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Milliseconds since the epoch.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as f64)
        .unwrap_or(0.0)
}

pub fn minutes_before(anchor_ms: f64, minutes: i64) -> f64 {
    anchor_ms - minutes as f64 * MINUTE_MS
}

/// `HH:MM` in local time.
#[cfg(target_arch = "wasm32")]
pub fn clock_label(at_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at_ms));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_label(at_ms: f64) -> String {
    let minutes_of_day = (at_ms / MINUTE_MS).floor() as i64 % (24 * 60);
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

/// `HH:MM:SS` in local time.
#[cfg(target_arch = "wasm32")]
pub fn clock_label_seconds(at_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at_ms));
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_label_seconds(at_ms: f64) -> String {
    let seconds_of_day = (at_ms / 1000.0).floor() as i64 % (24 * 60 * 60);
    format!(
        "{:02}:{:02}:{:02}",
        seconds_of_day / 3600,
        (seconds_of_day / 60) % 60,
        seconds_of_day % 60
    )
}

/// `Mon DD, YYYY`.
#[cfg(target_arch = "wasm32")]
pub fn date_label(at_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at_ms));
    let month = MONTHS[(date.get_month() as usize).min(11)];
    format!("{month} {:02}, {}", date.get_date(), date.get_full_year())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn date_label(at_ms: f64) -> String {
    let days = (at_ms / (MINUTE_MS * 60.0 * 24.0)).floor() as i64;
    let (year, month, day) = civil_from_days(days);
    let month = MONTHS[(month as usize).saturating_sub(1).min(11)];
    format!("{month} {day:02}, {year}")
}

// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
#[cfg(not(target_arch = "wasm32"))]
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// "5 minutes ago", "3 hours ago", or the date once a day has passed.
pub fn relative_label(at_ms: f64, now_ms: f64) -> String {
    let minutes = ((now_ms - at_ms) / MINUTE_MS).floor().max(0.0) as i64;
    if minutes < 60 {
        return format!("{minutes} minutes ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hours ago");
    }
    date_label(at_ms)
}

/// Seconds-granularity label for sync indicators.
pub fn elapsed_label(seconds: u64) -> String {
    match seconds {
        0..=4 => "just now".to_string(),
        5..=59 => format!("{seconds}s ago"),
        _ => format!("{}m ago", seconds / 60),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MIN: f64 = 60_000.0;

    #[test]
    fn relative_label_switches_units() {
        let now = 1_736_159_400_000.0;
        assert_eq!(relative_label(now - 32.0 * MIN, now), "32 minutes ago");
        assert_eq!(relative_label(now - 150.0 * MIN, now), "2 hours ago");
        assert_eq!(relative_label(now, now), "0 minutes ago");
    }

    #[test]
    fn relative_label_falls_back_to_date() {
        // 2025-01-06T10:30:00Z
        let at = 1_736_159_400_000.0;
        assert_eq!(relative_label(at, at + 3.0 * 24.0 * 60.0 * MIN), "Jan 06, 2025");
    }

    #[test]
    fn clock_labels_are_zero_padded() {
        let at = 1_736_159_400_000.0 + 5_000.0;
        assert_eq!(clock_label(at), "10:30");
        assert_eq!(clock_label_seconds(at), "10:30:05");
    }

    #[test]
    fn elapsed_label_buckets() {
        assert_eq!(elapsed_label(0), "just now");
        assert_eq!(elapsed_label(12), "12s ago");
        assert_eq!(elapsed_label(125), "2m ago");
    }
}
