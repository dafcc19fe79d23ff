//! Simulated chat panel for one agent
//!
//! Each pending reply owns a browser timeout. All of them are cleared when the
//! panel unmounts, so a closed chat never receives a late reply.

use std::time::Duration;

use leptos::prelude::*;
use leptos::web_sys;

use crate::state::{ChatSession, ReplyTicket, Role};

#[component]
pub fn AgentChat(agent_name: String, on_close: Callback<()>) -> impl IntoView {
    let session = RwSignal::new(ChatSession::new(agent_name.clone()));
    let timers = StoredValue::new(Vec::<(ReplyTicket, TimeoutHandle)>::new());

    on_cleanup(move || {
        timers.try_with_value(|t| {
            for (_, handle) in t {
                handle.clear();
            }
        });
        session.try_update(|s| {
            let dropped = s.cancel_pending();
            if dropped > 0 {
                log::debug!("chat closed with {} reply(ies) pending", dropped);
            }
        });
    });

    let send = move || {
        let now_ms = js_sys::Date::now() as u64;
        let mut ticket = None;
        session.update(|s| ticket = s.submit(now_ms));
        let Some(ticket) = ticket else {
            return;
        };

        let delay = Duration::from_millis(session.with_untracked(|s| s.reply_delay_ms()));
        match set_timeout_with_handle(
            move || {
                session.try_update(|s| s.deliver(ticket));
            },
            delay,
        ) {
            Ok(handle) => timers.update_value(|t| {
                // Handles of delivered replies are no longer needed
                t.retain(|(pending, _)| session.with_untracked(|s| s.is_pending(*pending)));
                t.push((ticket, handle));
            }),
            Err(e) => log::error!("failed to schedule reply: {:?}", e),
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="flex flex-col h-[600px] max-w-2xl mx-auto bg-white rounded-lg shadow border border-gray-200">
            <div class="flex items-center justify-between p-4 border-b border-gray-200">
                <div class="flex items-center space-x-2">
                    <svg class="w-6 h-6 text-indigo-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/>
                    </svg>
                    <h2 class="text-lg font-semibold text-gray-900">{agent_name}</h2>
                </div>
                <button
                    class="px-3 py-1.5 text-sm text-gray-700 rounded hover:bg-gray-100"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                {move || {
                    session
                        .with(|s| s.messages().to_vec())
                        .into_iter()
                        .map(|message| {
                            let (row, bubble) = match message.role {
                                Role::Assistant => (
                                    "flex justify-start",
                                    "max-w-[80%] p-3 rounded-lg bg-white border border-gray-200 text-gray-900",
                                ),
                                Role::User => (
                                    "flex justify-end",
                                    "max-w-[80%] p-3 rounded-lg bg-indigo-600 text-white",
                                ),
                            };
                            view! {
                                <div class=row>
                                    <div class=bubble>{message.content}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="p-4 border-t border-gray-200">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        class="flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                        placeholder="Type your message..."
                        prop:value=move || session.with(|s| s.input().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            session.update(|s| s.set_input(value));
                        }
                        on:keydown=on_keydown
                    />
                    <button
                        class="px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                        on:click=move |_| send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
