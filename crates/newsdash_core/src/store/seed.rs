//! Mock feed source.
//!
//! Supplies the fixed five-item seed set the dashboard loads after its
//! simulated network delay. The mock never fails.

use crate::model::category::Category;
use crate::model::feed_item::{Comment, FeedItem, ItemId};

/// Placeholder reference for article images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";
/// Placeholder reference for comment avatars.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Source of the initial feed items.
pub trait FeedSource {
    fn fetch(&self) -> Vec<FeedItem>;
}

/// In-process source returning `seed_items()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockFeedSource;

impl FeedSource for MockFeedSource {
    fn fetch(&self) -> Vec<FeedItem> {
        seed_items()
    }
}

/// Source returning a caller-provided item list. Useful for fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticFeedSource {
    items: Vec<FeedItem>,
}

impl StaticFeedSource {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self { items }
    }
}

impl FeedSource for StaticFeedSource {
    fn fetch(&self) -> Vec<FeedItem> {
        self.items.clone()
    }
}

fn seed_comment(id: i64, author: &str, content: &str, date: &str) -> Comment {
    Comment::new(id, author, PLACEHOLDER_AVATAR, content, date)
}

#[allow(clippy::too_many_arguments)]
fn seed_item(
    id: ItemId,
    title: &str,
    excerpt: &str,
    content: &str,
    category: Category,
    date: &str,
    votes: i64,
    comments: Vec<Comment>,
) -> FeedItem {
    FeedItem {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        category,
        date: date.to_string(),
        votes,
        comments,
    }
}

/// Returns the five seed items, ids `1..=5`, in feed order.
pub fn seed_items() -> Vec<FeedItem> {
    vec![
        seed_item(
            1,
            "New Climate Policy Announced by Government",
            "The government has announced a new climate policy aimed at reducing carbon emissions by 50% by 2030.",
            "The government has announced a new climate policy aimed at reducing carbon emissions by 50% by 2030. \
             This ambitious plan includes investments in renewable energy, electric vehicles, and carbon capture technology. \
             Environmental groups have praised the move, while some industry leaders have expressed concerns about the timeline.\n\n\
             The policy includes tax incentives for businesses that adopt green technologies, subsidies for homeowners who install \
             solar panels, and stricter regulations on industrial emissions. The government has also committed to phasing out \
             coal-fired power plants by 2028 and investing in a nationwide network of charging stations for electric vehicles.",
            Category::Politics,
            "2023-06-15",
            24,
            vec![
                seed_comment(
                    1,
                    "Jane Smith",
                    "This is a step in the right direction, but we need more action.",
                    "2023-06-15",
                ),
                seed_comment(
                    2,
                    "John Doe",
                    "I'm concerned about the economic impact of these policies.",
                    "2023-06-16",
                ),
            ],
        ),
        seed_item(
            2,
            "New Blockbuster Movie Breaks Box Office Records",
            "The latest superhero movie has broken all box office records in its opening weekend.",
            "The latest superhero movie has broken all box office records in its opening weekend, grossing over $300 million \
             globally. Critics have praised the film's special effects, storytelling, and performances. Fans are already \
             speculating about potential sequels and spin-offs.\n\n\
             The film's success highlights the continued popularity of the superhero genre despite predictions of audience \
             fatigue. The director has credited the film's success to its focus on character development and emotional \
             storytelling, rather than just action sequences. The studio has already greenlit a sequel, scheduled for release in 2025.",
            Category::Entertainment,
            "2023-06-14",
            42,
            vec![seed_comment(
                1,
                "Movie Fan",
                "I saw it twice already! The special effects were amazing.",
                "2023-06-14",
            )],
        ),
        seed_item(
            3,
            "New Study Reveals Health Benefits of Mediterranean Diet",
            "A new study has found that following a Mediterranean diet can reduce the risk of heart disease by up to 30%.",
            "A new study published in the Journal of Nutrition has found that following a Mediterranean diet can reduce the \
             risk of heart disease by up to 30%. The study followed 10,000 participants over a period of 5 years and found \
             that those who adhered closely to the diet had significantly better cardiovascular outcomes.\n\n\
             The Mediterranean diet is rich in olive oil, nuts, fish, fruits, and vegetables, and has been associated with \
             numerous health benefits. Researchers believe that the combination of healthy fats, antioxidants, and fiber in \
             the diet contributes to its heart-protective effects. The study also found benefits for brain health and longevity.",
            Category::Health,
            "2023-06-13",
            18,
            vec![
                seed_comment(
                    1,
                    "Health Enthusiast",
                    "I've been following this diet for years and feel great!",
                    "2023-06-13",
                ),
                seed_comment(
                    2,
                    "Skeptic",
                    "I'd like to see more long-term studies on this.",
                    "2023-06-14",
                ),
            ],
        ),
        seed_item(
            4,
            "Popular Artist Announces Surprise Album Release",
            "A chart-topping artist has surprised fans with an unexpected album release at midnight.",
            "A chart-topping artist has surprised fans with an unexpected album release at midnight. The album, which was \
             not previously announced, features 12 new tracks and collaborations with several other popular musicians.\n\n\
             Fans and critics are already praising the album's innovative sound and lyrical depth. This marks the artist's \
             first release in three years and represents a new creative direction. The album explores themes of personal \
             growth, social justice, and mental health, with production that blends electronic, orchestral, and acoustic elements.",
            Category::Music,
            "2023-06-12",
            37,
            vec![seed_comment(
                1,
                "Music Lover",
                "I've been listening to it on repeat all day!",
                "2023-06-12",
            )],
        ),
        seed_item(
            5,
            "Tech Company Unveils Revolutionary New Smartphone",
            "A leading tech company has unveiled its latest smartphone with groundbreaking features.",
            "A leading tech company has unveiled its latest smartphone with groundbreaking features, including an all-day \
             battery life, advanced AI capabilities, and a revolutionary camera system. The phone will be available for \
             pre-order next week and is expected to ship by the end of the month.\n\n\
             Analysts predict strong sales despite the premium price point, citing the device's innovative features and the \
             company's loyal customer base. The new AI system can understand complex voice commands, translate languages in \
             real-time, and adapt to the user's habits to optimize performance and battery life. The camera system includes \
             a periscope lens for 10x optical zoom and computational photography features.",
            Category::Trending,
            "2023-06-11",
            29,
            vec![
                seed_comment(
                    1,
                    "Tech Enthusiast",
                    "Can't wait to get my hands on this!",
                    "2023-06-11",
                ),
                seed_comment(
                    2,
                    "Budget Conscious",
                    "Looks great but the price is too high for me.",
                    "2023-06-12",
                ),
            ],
        ),
    ]
}
