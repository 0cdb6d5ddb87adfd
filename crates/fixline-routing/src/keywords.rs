//! Trigger-keyword dictionary, keyed by category slug
//!
//! Compiled into the crate; never written after initialization. A catalog
//! slug without an entry here is tolerated and scores zero.

/// Lowercase trigger keywords per category slug
const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "room-maintenance",
        &[
            "room", "hostel", "maintenance", "fan", "light", "ac", "bed", "door", "window",
        ],
    ),
    (
        "mess",
        &[
            "mess", "cafeteria", "food", "canteen", "meal", "hygiene", "breakfast", "lunch",
        ],
    ),
    (
        "leakage",
        &["leak", "leakage", "pipe", "plumbing", "tap", "drip", "burst"],
    ),
    (
        "water-quality",
        &["water", "quality", "dirty", "smell", "taste", "contamination"],
    ),
    (
        "wifi",
        &["wifi", "wi-fi", "wireless", "internet", "slow", "disconnect"],
    ),
    ("lan", &["lan", "ethernet", "wired", "port"]),
    ("gate", &["gate", "entry", "exit", "parking", "guard"]),
    (
        "surveillance",
        &["cctv", "camera", "surveillance", "monitor", "security"],
    ),
];

/// Keywords for a category slug; empty for unknown slugs
pub fn keywords_for(slug: &str) -> &'static [&'static str] {
    KEYWORDS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// All slugs with a dictionary entry
pub fn known_slugs() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|(slug, _)| *slug)
}
