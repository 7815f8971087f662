use contracts::Brand;
use leptos::prelude::*;

/// Brand list laid end to end `repeat` times.
///
/// Every copy is identical, which is what lets the marquee reset after one
/// copy's width without a visible jump.
pub fn ticker_sequence(brands: &[Brand], repeat: usize) -> Vec<&str> {
    std::iter::repeat(brands)
        .take(repeat)
        .flatten()
        .map(String::as_str)
        .collect()
}

/// Scrolling brand marquee. Animation and hover pause live in the stylesheet.
#[component]
pub fn Ticker(brands: &'static [Brand], repeat: usize) -> impl IntoView {
    view! {
        <div class="ticker">
            <div class="ticker__track">
                {ticker_sequence(brands, repeat)
                    .into_iter()
                    .map(|brand| view! { <span class="ticker__item">{brand}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sequence_is_four_identical_copies() {
        let brands = &contracts::catalog().brands;
        let sequence = ticker_sequence(brands, 4);
        let n = brands.len();

        assert_eq!(sequence.len(), 4 * n);
        assert_eq!(sequence[..n], sequence[n..2 * n]);
        for copy in sequence.chunks(n) {
            assert_eq!(copy, brands.as_slice());
        }
    }

    #[test]
    fn test_empty_brand_list() {
        assert!(ticker_sequence(&[], 4).is_empty());
    }

    #[test]
    fn renders_one_item_per_sequence_entry() {
        let brands = contracts::catalog().brands.as_slice();
        let html = view! { <Ticker brands=brands repeat=4 /> }.to_html();
        assert_eq!(html.matches("class=\"ticker__item\"").count(), 4 * brands.len());
    }
}
