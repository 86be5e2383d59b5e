//! 一時通知

use leptos::prelude::*;

#[component]
pub fn Toast<F>(message: ReadSignal<Option<String>>, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        let on_close = on_close.clone();
        message.get().map(|text| {
            view! {
                <div class="toast" role="status" on:click=move |_| on_close(())>
                    {text}
                </div>
            }
        })
    }
}
