//! Static page sections between the header and the footer.

pub mod feature_banners;
pub mod hero;
pub mod journal_grid;
pub mod newsletter;
pub mod product_grid;
pub mod ticker;

pub use feature_banners::FeatureBanners;
pub use hero::Hero;
pub use journal_grid::JournalGrid;
pub use newsletter::Newsletter;
pub use product_grid::ProductGrid;
pub use ticker::Ticker;
