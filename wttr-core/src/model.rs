use chrono::NaiveTime;

/// Current conditions plus today's forecast for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub today: DailyForecast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub feels_like_c: i32,
    pub feels_like_f: i32,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_kmph: u32,
    /// 16-point compass direction, e.g. "WSW".
    pub wind_direction: String,
    pub pressure_hpa: u32,
    pub visibility_km: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub max_temp_c: i32,
    pub min_temp_c: i32,
    /// In the order the service returned them.
    pub hourly: Vec<HourlySample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub time: NaiveTime,
    pub temperature_c: i32,
    pub description: String,
    pub chance_of_rain_pct: u8,
}

impl HourlySample {
    /// Slot label such as "09:00".
    pub fn time_label(&self) -> String {
        self.time.format("%H:00").to_string()
    }
}
