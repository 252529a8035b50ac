//! Heuristics layered on top of a report: rain emoji and the tips block.

pub const FREEZING_TIP: &str = "🧊 It's freezing! Bundle up and watch for ice!";
pub const CHILLY_TIP: &str = "🧥 Pretty chilly - grab a coat!";
pub const HOT_TIP: &str = "🔥 It's hot! Stay hydrated and find some shade!";
pub const PLEASANT_TIP: &str = "☀️ Perfect weather for outdoor activities!";
pub const UMBRELLA_TIP: &str = "☔ Don't forget your umbrella!";
pub const COCOA_TIP: &str = "❄️ Snow day! Perfect for hot cocoa!";
pub const SUNGLASSES_TIP: &str = "😎 Great day for sunglasses!";
pub const STICKY_TIP: &str = "💦 It's quite humid - you might feel sticky!";
pub const DRY_SKIN_TIP: &str = "🏜️ Low humidity - your skin might feel dry!";
pub const DEFAULT_TIP: &str = "🌤️ Have a great day!";

/// Emoji for a chance-of-rain percentage. Anything from 80 up is heavy rain.
pub fn rain_emoji(chance_pct: u8) -> &'static str {
    match chance_pct {
        0..20 => "☀️",
        20..40 => "⛅",
        40..60 => "🌥️",
        60..80 => "🌦️",
        _ => "🌧️",
    }
}

fn temperature_tip(temp_c: i32) -> Option<&'static str> {
    // Hot is checked before pleasant so only one of them fires above 30.
    match temp_c {
        t if t < 0 => Some(FREEZING_TIP),
        t if t < 10 => Some(CHILLY_TIP),
        t if t > 30 => Some(HOT_TIP),
        t if t > 25 => Some(PLEASANT_TIP),
        _ => None,
    }
}

fn description_tip(description: &str) -> Option<&'static str> {
    let description = description.to_lowercase();

    if description.contains("rain") || description.contains("shower") {
        Some(UMBRELLA_TIP)
    } else if description.contains("snow") {
        Some(COCOA_TIP)
    } else if description.contains("sun") || description.contains("clear") {
        Some(SUNGLASSES_TIP)
    } else {
        None
    }
}

fn humidity_tip(humidity_pct: u8) -> Option<&'static str> {
    match humidity_pct {
        h if h > 80 => Some(STICKY_TIP),
        h if h < 30 => Some(DRY_SKIN_TIP),
        _ => None,
    }
}

/// Tips for the given conditions, one per line, or the generic greeting when
/// nothing stands out.
pub fn weather_tip(temp_c: i32, description: &str, humidity_pct: u8) -> String {
    let tips: Vec<&str> = [
        temperature_tip(temp_c),
        description_tip(description),
        humidity_tip(humidity_pct),
    ]
    .into_iter()
    .flatten()
    .collect();

    if tips.is_empty() { DEFAULT_TIP.to_string() } else { tips.join("\n") }
}
