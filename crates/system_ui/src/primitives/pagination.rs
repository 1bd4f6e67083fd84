use std::rc::Rc;

use element_contract::CustomElement;
use pagination_runtime::{
    PageSizesSelectElement, PagesSelectElement, PaginationElement, NEXT_BUTTON_PART,
    PREV_BUTTON_PART,
};

use super::*;

#[component]
fn CaretIcon(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <svg viewBox="0 0 32 32" width="24" height="24" aria-hidden="true">
            <path d=path></path>
        </svg>
    }
}

#[component]
/// Pagination bar rendering a [`PaginationElement`].
///
/// Selectors passed in are adopted into the element's light DOM for the lifetime of the view,
/// so the element keeps them in sync and receives their change events.
pub fn Pagination(
    element: PaginationElement,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] page_sizes_select: Option<Rc<PageSizesSelectElement>>,
    #[prop(optional)] pages_select: Option<Rc<PagesSelectElement>>,
) -> impl IntoView {
    let snapshot = create_rw_signal(element.view());
    let render_observer = element.on_render(move |view| {
        snapshot.try_set(view.clone());
    });

    if let Some(select) = page_sizes_select.as_ref() {
        element.adopt_page_sizes_select(select);
    }
    if let Some(select) = pages_select.as_ref() {
        element.adopt_pages_select(select);
    }
    element.connected();

    on_cleanup({
        let element = element.clone();
        let page_sizes_select = page_sizes_select.clone();
        let pages_select = pages_select.clone();
        move || {
            render_observer.release();
            element.disconnected();
            if let Some(select) = page_sizes_select {
                select.disconnected();
                element.light_dom().remove_child(&select);
            }
            if let Some(select) = pages_select {
                select.disconnected();
                element.light_dom().remove_child(&select);
            }
        }
    });

    let label = Signal::derive(move || snapshot.with(|view| view.page_size_label_text.clone()));
    let prev_element = element.clone();
    let next_element = element;

    view! {
        <div
            class=merge_layout_class("ui-pagination", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-disabled=move || bool_token(snapshot.with(|view| view.disabled))
        >
            <div data-ui-slot="left">
                {page_sizes_select.map(|select| view! { <PageSizesSelect element=select label=label/> })}
                <span data-ui-slot="status">
                    {move || snapshot.with(|view| view.status_text.clone())}
                </span>
            </div>
            <div data-ui-slot="right">
                {pages_select.map(|select| view! { <PagesSelect element=select/> })}
                <button
                    type="button"
                    class="ui-button"
                    data-ui-slot=PREV_BUTTON_PART
                    title=move || snapshot.with(|view| view.prev_button_text.clone())
                    aria-label=move || snapshot.with(|view| view.prev_button_text.clone())
                    disabled=move || snapshot.with(|view| view.prev_button_disabled)
                    data-ui-disabled=move || bool_token(snapshot.with(|view| view.prev_button_disabled))
                    on:click=move |_| {
                        prev_element.click_prev();
                    }
                >
                    <CaretIcon path="M20 24 12 16 20 8 21.4 9.4 14.8 16 21.4 22.6z"/>
                </button>
                <button
                    type="button"
                    class="ui-button"
                    data-ui-slot=NEXT_BUTTON_PART
                    title=move || snapshot.with(|view| view.next_button_text.clone())
                    aria-label=move || snapshot.with(|view| view.next_button_text.clone())
                    disabled=move || snapshot.with(|view| view.next_button_disabled)
                    data-ui-disabled=move || bool_token(snapshot.with(|view| view.next_button_disabled))
                    on:click=move |_| {
                        next_element.click_next();
                    }
                >
                    <CaretIcon path="M12 8 20 16 12 24 10.6 22.6 17.2 16 10.6 9.4z"/>
                </button>
            </div>
        </div>
    }
}
