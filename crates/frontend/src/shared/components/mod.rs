pub mod feature_banner;
pub mod product_card;
pub mod ui;
pub mod wordmark;

pub use feature_banner::{BannerAlign, FeatureBanner};
pub use product_card::ProductCard;
pub use wordmark::BrandWordmark;
