use crate::shared::components::ui::{Button, ButtonVariant};
use contracts::Story;
use leptos::prelude::*;

#[component]
fn StoryTile(story: &'static Story) -> impl IntoView {
    view! {
        <article class="story-tile" data-story-id=story.id.to_string()>
            <div class="story-tile__media">
                <img
                    class="story-tile__image"
                    src=story.image.as_str()
                    alt=story.title.as_str()
                    loading="lazy"
                />
            </div>
            <span class="story-tile__category">{story.category_label()}</span>
            <h3 class="story-tile__title">{story.title.as_str()}</h3>
        </article>
    }
}

/// "The Journal": one tile per story, in catalog order.
#[component]
pub fn JournalGrid(stories: &'static [Story]) -> impl IntoView {
    view! {
        <section class="journal">
            <div class="container">
                <div class="journal__head">
                    <h2 class="section-title">"The Journal"</h2>
                    <Button
                        label="Read All Stories"
                        variant=ButtonVariant::Outline
                        class="journal__all--wide"
                    />
                </div>
                <div class="journal__grid">
                    {stories
                        .iter()
                        .map(|story| view! { <StoryTile story=story /> })
                        .collect_view()}
                </div>
                <Button
                    label="Read All Stories"
                    variant=ButtonVariant::Outline
                    class="journal__all--narrow"
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn rendered_ids(html: &str) -> Vec<&str> {
        html.split("data-story-id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn renders_one_tile_per_story_in_order() {
        let stories = contracts::catalog().stories.as_slice();
        let html = view! { <JournalGrid stories=stories /> }.to_html();

        assert_eq!(rendered_ids(&html), vec!["1", "2", "3"]);
        assert_eq!(html.matches("<article").count(), stories.len());
        assert_eq!(html.matches("button button--outline").count(), 2);
    }

    #[test]
    fn renders_category_upper_case() {
        let story: &'static Story = Box::leak(Box::new(Story {
            id: contracts::StoryId(11),
            category: "Music".into(),
            title: "Monthly Mix".into(),
            image: String::new(),
        }));
        let html = view! { <StoryTile story=story /> }.to_html();
        assert!(html.contains("MUSIC"));
        assert!(!html.contains(">Music<"));
    }
}
