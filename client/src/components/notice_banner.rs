//! Toast-style banner for the current notice.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notices.with(|n| n.current().cloned()).map(|notice| {
                let seq = notice.seq;
                let class = match notice.kind {
                    NoticeKind::Success => "notice notice--success",
                    NoticeKind::Error => "notice notice--error",
                };
                view! {
                    <div class=class role="status" on:click=move |_| {
                        notices.update(|n| {
                            n.dismiss(seq);
                        });
                    }>
                        <p class="notice__title">{notice.title}</p>
                        {notice.description.map(|d| view! { <p class="notice__description">{d}</p> })}
                    </div>
                }
            })
        }}
    }
}
