use catalog_models::{ContentItem, ContentType};

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    title: &str,
    content_type: ContentType,
    genre: &str,
    year: u32,
    rating: f32,
    duration: &str,
    description: &str,
    popularity: u32,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        duration: duration.to_string(),
        description: description.to_string(),
        popularity,
        content_type: Some(content_type),
    }
}

pub(super) fn seed_items() -> Vec<ContentItem> {
    use ContentType::{Movie, Series};

    vec![
        item(1, "The Midnight Quest", Movie, "action", 2023, 8.7, "2h 15m",
            "An epic adventure through mystical realms where heroes battle ancient evils.", 95),
        item(2, "Cosmic Horizons", Series, "sci-fi", 2024, 9.1, "3 Seasons",
            "A mind-bending journey across galaxies with stunning visual effects.", 98),
        item(3, "Laugh Out Loud", Movie, "comedy", 2023, 7.8, "1h 45m",
            "A hilarious comedy that will keep you entertained from start to finish.", 82),
        item(4, "Hearts Entwined", Series, "drama", 2024, 8.3, "2 Seasons",
            "A touching drama about love, loss, and finding hope in unexpected places.", 88),
        item(5, "Neon Nights", Movie, "action", 2023, 8.9, "2h 30m",
            "High-octane action in a cyberpunk world with incredible chase sequences.", 91),
        item(6, "Ocean's Mystery", Series, "thriller", 2024, 8.1, "1 Season",
            "A suspenseful thriller set in the depths of the ocean's darkest secrets.", 85),
        item(7, "The Crown Chronicles", Series, "drama", 2023, 9.0, "4 Seasons",
            "An intimate portrait of royal family dynamics across decades of change.", 94),
        item(8, "Quantum Leap", Movie, "sci-fi", 2024, 8.5, "2h 05m",
            "Time travel meets cutting-edge science in this thrilling adventure.", 87),
    ]
}
