use super::*;

#[component]
/// Modal footer; passes its children through to the action row.
pub fn ModalFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-modal-footer", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="modal-footer"
        >
            {children()}
        </footer>
    }
}
