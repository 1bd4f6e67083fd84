use std::rc::Rc;

use pagination_runtime::{PageSizesSelectElement, PagesSelectElement};

use super::*;

#[component]
/// Page selector bound to a headless [`PagesSelectElement`].
pub fn PagesSelect(
    element: Rc<PagesSelectElement>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let revision = create_rw_signal(0u64);
    let observer = element.observe(move || bump_revision(revision));
    on_cleanup(move || observer.release());

    let value = {
        let element = element.clone();
        move || revision.with(|_| element.value().to_string())
    };
    let options = {
        let element = element.clone();
        move || {
            revision
                .with(|_| element.page_options())
                .into_iter()
                .map(|page| view! { <option value=page.to_string()>{page + 1}</option> })
                .collect_view()
        }
    };
    let total_label = {
        let element = element.clone();
        move || {
            revision
                .with(|_| element.total_pages())
                .map(|total_pages| format!("of {total_pages} pages"))
                .unwrap_or_default()
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-pages-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pages-select"
        >
            <select
                class="ui-field"
                aria-label=aria_label.unwrap_or_else(|| "Page number".to_string())
                prop:value=value
                data-ui-slot="pages"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<u64>() {
                        Ok(page) => element.select(page),
                        Err(err) => logging::warn!("page selection ignored: {err}"),
                    }
                }
            >
                {options}
            </select>
            <span data-ui-slot="total-pages">{total_label}</span>
        </div>
    }
}

#[component]
/// Page-size selector bound to a headless [`PageSizesSelectElement`].
pub fn PageSizesSelect(
    element: Rc<PageSizesSelectElement>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: MaybeSignal<String>,
) -> impl IntoView {
    let revision = create_rw_signal(0u64);
    let observer = element.observe(move || bump_revision(revision));
    on_cleanup(move || observer.release());

    let value = {
        let element = element.clone();
        move || revision.with(|_| element.value().to_string())
    };
    let options = element
        .page_sizes()
        .iter()
        .map(|page_size| view! { <option value=page_size.to_string()>{*page_size}</option> })
        .collect_view();

    view! {
        <label
            class=merge_layout_class("ui-page-sizes-select", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-sizes-select"
        >
            <span data-ui-slot="label">{move || label.get()}</span>
            <select
                class="ui-field"
                prop:value=value
                data-ui-slot="page-sizes"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<u64>() {
                        Ok(page_size) if page_size > 0 => element.select(page_size),
                        Ok(_) => logging::warn!("page size selection ignored: zero"),
                        Err(err) => logging::warn!("page size selection ignored: {err}"),
                    }
                }
            >
                {options}
            </select>
        </label>
    }
}
