use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close (close button, overlay click, Escape)
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no question on top of [`Modal`].
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="modal-message">{message}</p>
            <div class="modal-actions">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label}
                </Button>
            </div>
        </Modal>
    }
}
