//! Search and category filtering for the club list.

use crate::domain::Club;

/// Category value that matches every club.
pub const ALL_CATEGORIES: &str = "All";

/// Clubs whose name or description contains `query` (trimmed, case
/// insensitive) and whose category equals `category`, unless `category` is
/// [`ALL_CATEGORIES`]. Source order is preserved.
pub fn filter_clubs(clubs: &[Club], query: &str, category: &str) -> Vec<Club> {
    let needle = query.trim().to_lowercase();
    clubs
        .iter()
        .filter(|club| category == ALL_CATEGORIES || club.category == category)
        .filter(|club| {
            needle.is_empty()
                || club.name.to_lowercase().contains(&needle)
                || club.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// [`ALL_CATEGORIES`] followed by each distinct category in first-seen order.
pub fn categories(clubs: &[Club]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for club in clubs {
        if !categories.iter().any(|known| *known == club.category) {
            categories.push(club.category.clone());
        }
    }
    categories
}
