use crate::shared::components::ProductCard;
use crate::shared::icons::{icon, Icon};
use contracts::Product;
use leptos::prelude::*;

/// "Fresh For The Week": one card per product, in catalog order.
#[component]
pub fn ProductGrid(products: &'static [Product]) -> impl IntoView {
    view! {
        <section class="products">
            <div class="container">
                <div class="products__head">
                    <div class="products__heading">
                        <span class="kicker">"Curated Goods"</span>
                        <h2 class="section-title">"Fresh For The Week"</h2>
                    </div>
                    <a href="#" class="products__view-all">
                        "View All Arrivals"
                        {icon(Icon::ArrowRight, 14)}
                    </a>
                </div>
                <div class="products__grid">
                    {products
                        .iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn rendered_ids(html: &str) -> Vec<String> {
        html.split("data-product-id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn renders_one_card_per_product_in_order() {
        let products = contracts::catalog().products.as_slice();
        let html = view! { <ProductGrid products=products /> }.to_html();

        let expected: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(rendered_ids(&html), expected);
        assert!(html.contains("$65.00"));
        assert!(html.contains("$210.00"));
    }

    #[test]
    fn renders_empty_grid() {
        let html = view! { <ProductGrid products=&[] /> }.to_html();
        assert!(html.contains("products__grid"));
        assert!(rendered_ids(&html).is_empty());
    }
}
