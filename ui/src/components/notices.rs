//! Toast-style notices shared by every component on the page

use std::time::Duration;

use leptos::prelude::*;

use crate::state::{Notice, NoticeId, NoticeQueue};

/// Handle for raising notices, provided through context by [`Toaster`]
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
}

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        log::debug!("notice: {}", notice.title);
        let now_ms = js_sys::Date::now() as u64;
        self.queue.update(|q| {
            q.push(notice, now_ms);
        });

        // Timers can fire a little early, so expire at the due time itself
        let lifetime_ms = self.queue.with_untracked(|q| q.lifetime_ms());
        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.expire(now_ms + lifetime_ms));
            },
            Duration::from_millis(lifetime_ms),
        );
    }

    pub fn dismiss(&self, id: NoticeId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

/// Fetch the page-wide notifier. Panics outside a [`Toaster`] scope.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Installs the notice queue and renders its entries.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let queue = RwSignal::new(NoticeQueue::new());
    let notifier = Notifier { queue };
    provide_context(notifier);

    view! {
        {children()}
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col space-y-2 w-80">
            {move || {
                queue
                    .get()
                    .iter()
                    .map(|(id, notice)| {
                        let notice = notice.clone();
                        let class = if notice.is_destructive() {
                            "p-4 rounded-md shadow-lg border bg-red-600 border-red-700 text-white"
                        } else {
                            "p-4 rounded-md shadow-lg border bg-white border-gray-200 text-gray-900"
                        };
                        view! {
                            <div class=class role="status">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <p class="text-sm font-semibold">{notice.title}</p>
                                        <p class="text-sm opacity-90">{notice.description}</p>
                                    </div>
                                    <button
                                        class="ml-4 text-sm opacity-70 hover:opacity-100"
                                        on:click=move |_| notifier.dismiss(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
