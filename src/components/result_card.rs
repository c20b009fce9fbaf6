//! Result item card with one-shot image fallback.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::render::ResultCardView;

/// Card for one result item.
///
/// The image source lives in a local signal: a load error swaps in the
/// placeholder once and the underlying item is never modified.
#[component]
pub fn ResultCard(card: ResultCardView) -> impl IntoView {
    let placeholder = expect_context::<WidgetConfig>().placeholder_image;
    let ResultCardView { name, description, category, image, image_ref, price, match_percent } = card;
    let alt = name.clone();
    let image = RwSignal::new(image);

    let on_error = move |_| {
        let switched = image.try_update(|src| src.on_load_error(&placeholder)).unwrap_or(false);
        if switched {
            leptos::logging::warn!("image failed to load: {image_ref}");
        }
    };

    view! {
        <div class="result-card">
            <div class="result-card__media">
                <img
                    class="result-card__image"
                    src=move || image.with(|src| src.url().to_owned())
                    alt=alt
                    on:error=on_error
                />
            </div>
            <div class="result-card__body">
                <h4 class="result-card__name">{name}</h4>
                <p class="result-card__description">{description}</p>
                <div class="result-card__meta">
                    <span class="result-card__category">{category}</span>
                    <span class="result-card__price">{price}</span>
                </div>
                {match_percent.map(|pct| view! { <div class="result-card__match">"Match: " {pct}</div> })}
            </div>
        </div>
    }
}
