use super::*;

const SPINNER_RADIUS: f32 = 37.5;

#[component]
/// Spinner indicating a loading state.
pub fn Loading(
    #[prop(default = LoadingType::Regular)] loading_type: LoadingType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] inactive: MaybeSignal<bool>,
) -> impl IntoView {
    let inactive = Signal::derive(move || inactive.get());
    let spinner = view! {
        <div
            class=merge_layout_class("ui-loading", layout_class)
            role="progressbar"
            aria-busy=move || bool_token(!inactive.get())
            data-ui-primitive="true"
            data-ui-kind="loading"
            data-ui-variant=loading_type.token()
            data-ui-state=move || if inactive.get() { "stopped" } else { "spinning" }
        >
            <svg viewBox="-75 -75 150 150" aria-hidden="true">
                <title>"Loading"</title>
                {(loading_type == LoadingType::Small).then(|| {
                    view! {
                        <circle data-ui-slot="background" cx="0" cy="0" r=SPINNER_RADIUS></circle>
                    }
                })}
                <circle data-ui-slot="stroke" cx="0" cy="0" r=SPINNER_RADIUS></circle>
            </svg>
        </div>
    };

    if loading_type != LoadingType::Overlay {
        return spinner.into_view();
    }

    view! {
        <div
            class="ui-loading-overlay"
            data-ui-primitive="true"
            data-ui-kind="loading-overlay"
            data-ui-state=move || if inactive.get() { "stopped" } else { "spinning" }
        >
            {spinner}
        </div>
    }
    .into_view()
}

#[component]
/// Placeholder text shown while content loads.
pub fn SkeletonText(
    #[prop(default = SkeletonTextType::Paragraph)] text_type: SkeletonTextType,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-skeleton-text", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="skeleton-text"
            data-ui-variant=text_type.token()
        ></p>
    }
}
