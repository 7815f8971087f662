use crate::shared::components::ui::Badge;
use crate::shared::format::format_price;
use crate::shared::icons::{icon, Icon};
use contracts::Product;
use leptos::prelude::*;

/// One product tile in the grid.
///
/// The "+" control is decorative; there is no cart on this page.
#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class="product-card" data-product-id=product.id.to_string()>
            <div class="product-card__media">
                <img
                    class="product-card__image"
                    src=product.image.as_str()
                    alt=product.name.as_str()
                    loading="lazy"
                />
                {product.visible_tag().map(|tag| view! { <Badge label=tag class="product-card__tag" /> })}
                <div class="product-card__shade"></div>
                <button class="product-card__add" type="button" aria-label="Add to bag">
                    {icon(Icon::Plus, 18)}
                </button>
            </div>
            <div class="product-card__info">
                <p class="product-card__brand">{product.brand.as_str()}</p>
                <h3 class="product-card__name">{product.name.as_str()}</h3>
                <p class="product-card__price">{format_price(product.price)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ProductId;
    use leptos::tachys::view::RenderHtml;

    fn leak(tag: Option<&str>, price: f64) -> &'static Product {
        Box::leak(Box::new(Product {
            id: ProductId(9),
            brand: "SNOW PEAK".into(),
            name: "Titanium Mug".into(),
            price,
            image: "https://example.com/mug.jpg".into(),
            tag: tag.map(str::to_string),
        }))
    }

    fn render(product: &'static Product) -> String {
        view! { <ProductCard product=product /> }.to_html()
    }

    #[test]
    fn renders_badge_with_tag_text() {
        let html = render(leak(Some("Limited"), 40.0));
        assert_eq!(html.matches("product-card__tag").count(), 1);
        assert!(html.contains("Limited"));
    }

    #[test]
    fn omits_badge_without_tag() {
        let html = render(leak(None, 40.0));
        assert!(!html.contains("product-card__tag"));
        assert!(!html.contains("class=\"badge"));
    }

    #[test]
    fn omits_badge_for_empty_tag() {
        let html = render(leak(Some(""), 40.0));
        assert!(!html.contains("product-card__tag"));
    }

    #[test]
    fn renders_required_fields() {
        let html = render(leak(None, 65.0));
        assert!(html.contains("SNOW PEAK"));
        assert!(html.contains("Titanium Mug"));
        assert!(html.contains("$65.00"));
        assert!(html.contains("src=\"https://example.com/mug.jpg\""));
        assert!(html.contains("data-product-id=\"9\""));
    }
}
