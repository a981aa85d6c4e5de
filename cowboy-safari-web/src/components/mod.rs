pub mod footer;
pub mod head_tags;
pub mod header;
pub mod hero_play_panel;
pub mod layout;
pub mod recommendation_card;
pub mod structured_data;
pub mod toast;

pub use footer::Footer;
pub use head_tags::HeadTags;
pub use header::Header;
pub use hero_play_panel::HeroPlayPanel;
pub use layout::Layout;
pub use recommendation_card::{RecommendationCard, RecommendationGrid};
pub use structured_data::StructuredData;
pub use toast::Toast;
