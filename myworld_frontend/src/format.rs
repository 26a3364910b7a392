/// Soft length the composer counts down from.
pub const COMPOSE_SOFT_LIMIT: usize = 280;

/// `999`, `1.2k`, `1.2M`.
pub fn compact_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Characters left before the soft limit; negative once over it.
pub fn remaining_chars(draft: &str) -> i64 {
    COMPOSE_SOFT_LIMIT as i64 - draft.chars().count() as i64
}
