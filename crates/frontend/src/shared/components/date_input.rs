use crate::shared::icons::icon;
use leptos::prelude::*;

/// DateInput component with native date picker and a clear button
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format, empty when no date is picked
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (yyyy-mm-dd, or empty when cleared)
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="date-input">
            <input
                type="date"
                class="date-input__field"
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="date-input__clear"
                    title="Clear date"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
