use leptos::prelude::*;
use leptos::ev;
use crate::models::CardForm as CardFormState;

#[component]
pub fn CardForm(
    #[prop(into)] form: Signal<CardFormState>,
    on_title: Callback<String>,
    on_content: Callback<String>,
    on_submit: Callback<()>,
    on_add_new: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit>
            <textarea
                name="title"
                placeholder="Title"
                on:input=move |ev| on_title.run(event_target_value(&ev))
                prop:value=move || form.with(|f| f.title.clone())
                required
            ></textarea>
            <textarea
                name="content"
                placeholder="Content"
                on:input=move |ev| on_content.run(event_target_value(&ev))
                prop:value=move || form.with(|f| f.content.clone())
                required
            ></textarea>
            <div class="buttons">
                <button type="submit">{move || form.with(|f| f.mode.submit_label())}</button>
                <button type="button" on:click=move |_| on_add_new.run(())>"Add New"</button>
            </div>
        </form>
    }
}
