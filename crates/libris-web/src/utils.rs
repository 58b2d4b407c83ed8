use chrono::{DateTime, NaiveDateTime};
use libris_core::EventCategory;

pub fn format_time(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%H:%M:%S").to_string();
    }
    iso.get(11..19).unwrap_or(iso).to_string()
}

pub fn category_color(tag: &str) -> &'static str {
    match EventCategory::from_tag(tag) {
        Some(EventCategory::Connection) => "bg-emerald-500/10 text-emerald-400 border-emerald-500/20",
        Some(EventCategory::BookCreated) => "bg-sky-500/10 text-sky-400 border-sky-500/20",
        Some(EventCategory::BookUpdated) => "bg-amber-500/10 text-amber-400 border-amber-500/20",
        Some(EventCategory::BookDeleted) => "bg-red-500/10 text-red-400 border-red-500/20",
        Some(EventCategory::Error) => "bg-rose-500/10 text-rose-400 border-rose-500/20",
        Some(EventCategory::Message) | None => "bg-zinc-500/10 text-zinc-400 border-zinc-500/20",
    }
}

pub fn category_dot_color(tag: &str) -> &'static str {
    match EventCategory::from_tag(tag) {
        Some(EventCategory::Connection) => "bg-emerald-400",
        Some(EventCategory::BookCreated) => "bg-sky-400",
        Some(EventCategory::BookUpdated) => "bg-amber-400",
        Some(EventCategory::BookDeleted) => "bg-red-400",
        Some(EventCategory::Error) => "bg-rose-400",
        Some(EventCategory::Message) | None => "bg-zinc-400",
    }
}
