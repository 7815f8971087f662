use crate::shared::components::{BannerAlign, FeatureBanner};
use leptos::prelude::*;

#[component]
pub fn FeatureBanners() -> impl IntoView {
    view! {
        <section class="feature-banners">
            <FeatureBanner
                title="Womens Focus"
                subtitle="New Arrivals"
                image="https://images.unsplash.com/photo-1509631179647-0177331693ae?q=80&w=1200&auto=format&fit=crop"
                align=BannerAlign::Left
            />
            <FeatureBanner
                title="Mens Tech"
                subtitle="Function First"
                image="https://images.unsplash.com/photo-1552346154-21d32810aba3?q=80&w=1200&auto=format&fit=crop"
                align=BannerAlign::Right
            />
        </section>
    }
}
