//! Display Formatting
//!
//! pt-BR style dates for list rows.

use chrono::{DateTime, Local, NaiveDate, Utc};

fn parse(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `2024-01-10` -> `10/01/24`; anything unparseable is shown as stored
pub fn short_date(date: &str) -> String {
    parse(date)
        .map(|d| d.format("%d/%m/%y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// `2024-01-10` -> `10/01`
pub fn day_month(date: &str) -> String {
    parse(date)
        .map(|d| d.format("%d/%m").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Local wall-clock time, `HH:MM`
pub fn time_of_day(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}

/// Value for a date input pre-filled with today
pub fn today_input() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `1 registro`, `3 registros`
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Inventory banner text; `None` while nothing is at or below its minimum
pub fn low_stock_banner(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{} produto(s) com estoque baixo", count))
}

/// `Atendidos: 2/5`
pub fn served_summary(served: usize, total: usize) -> String {
    format!("Atendidos: {}/{}", served, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-01-10"), "10/01/24");
        assert_eq!(short_date("ontem"), "ontem");
    }

    #[test]
    fn test_day_month() {
        assert_eq!(day_month("2024-12-03"), "03/12");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "registro", "registros"), "0 registros");
        assert_eq!(count_label(1, "registro", "registros"), "1 registro");
    }

    #[test]
    fn test_low_stock_banner() {
        assert_eq!(low_stock_banner(0), None);
        assert_eq!(low_stock_banner(2).as_deref(), Some("2 produto(s) com estoque baixo"));
    }

    #[test]
    fn test_served_summary() {
        assert_eq!(served_summary(2, 5), "Atendidos: 2/5");
    }
}
