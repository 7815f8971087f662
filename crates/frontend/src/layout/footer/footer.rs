use crate::shared::components::BrandWordmark;
use crate::shared::config::Wordmark;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

const SHOP_LINKS: [&str; 5] = ["New Arrivals", "Brands", "Men", "Women", "Sale"];

const INFO_LINKS: [&str; 5] = [
    "About Us",
    "Shipping & Returns",
    "Terms & Conditions",
    "Privacy Policy",
    "Contact",
];

const SOCIAL_LINKS: [(Icon, &str); 3] = [
    (Icon::Instagram, "Instagram"),
    (Icon::Facebook, "Facebook"),
    (Icon::Twitter, "Twitter"),
];

fn link_list(labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="site-footer__links">
            {labels
                .iter()
                .map(|label| view! { <li><a href="#">{*label}</a></li> })
                .collect_view()}
        </ul>
    }
}

pub fn copyright_line(year: u16, name: &str) -> String {
    format!("© {} {}. All Rights Reserved.", year, name)
}

#[component]
pub fn Footer(wordmark: Wordmark, name: String, copyright_year: u16) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div class="site-footer__about">
                        <h3 class="site-footer__wordmark">
                            <BrandWordmark wordmark=wordmark />
                        </h3>
                        <p class="site-footer__blurb">
                            "A concept store dedicated to the curation of high-quality goods, independent design, and contemporary culture. Based in the Digital Realm."
                        </p>
                    </div>

                    <div class="site-footer__column">
                        <h4 class="site-footer__heading">"Shop"</h4>
                        {link_list(&SHOP_LINKS)}
                    </div>

                    <div class="site-footer__column">
                        <h4 class="site-footer__heading">"Info"</h4>
                        {link_list(&INFO_LINKS)}
                    </div>

                    <div class="site-footer__column">
                        <h4 class="site-footer__heading">"Follow"</h4>
                        <div class="site-footer__social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(kind, label)| {
                                    view! {
                                        <a href="#" class="site-footer__social-link" aria-label=*label>
                                            {icon(*kind, 18)}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="site-footer__legal">
                    <p>{copyright_line(copyright_year, &name)}</p>
                    <div class="site-footer__notes">
                        <span>"Secure Payment"</span>
                        <span>"Global Delivery"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
