//! Landing page: agent grid, creation dialog and the open chat
//!
//! The page owns the agent list and which agent is open for chat. Creates
//! and deletes are applied locally first and then forwarded to the catalog
//! service; a forwarding failure is only logged.

use leptos::prelude::*;

use crate::api;
use crate::components::agent_card::AgentCard;
use crate::components::agent_chat::AgentChat;
use crate::components::create_agent_dialog::CreateAgentDialog;
use crate::components::notices::use_notifier;
use crate::state::{AgentRegistry, AgentSubmission, IndexView, Notice};
use crate::types::CreateAgentRequest;

#[component]
pub fn Index() -> impl IntoView {
    let notifier = use_notifier();
    let registry = RwSignal::new(AgentRegistry::new());

    let on_agent_create = Callback::new(move |submission: AgentSubmission| {
        let now_ms = js_sys::Date::now() as u64;
        let mut created = None;
        registry.update(|r| created = Some(r.create(&submission, now_ms)));
        let Some(agent) = created else {
            return;
        };
        log::info!("created agent {} ({})", agent.name, agent.id);
        notifier.notify(Notice::agent_created());

        let request = CreateAgentRequest::new(&agent, &submission);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_agent(&request).await {
                Ok(record) => log::debug!("catalog registered agent {}", record.id),
                Err(e) => log::warn!("failed to forward agent {}: {}", request.id, e),
            }
        });
    });

    let on_agent_delete = move |id: String| {
        let mut removed = None;
        registry.update(|r| removed = r.delete(&id));
        if removed.is_none() {
            return;
        }
        notifier.notify(Notice::agent_deleted());

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::delete_agent(&id).await {
                log::warn!("failed to forward delete of agent {}: {}", id, e);
            }
        });
    };

    let on_chat_close = Callback::new(move |_: ()| registry.update(|r| r.close_chat()));

    // Only re-render the panel when the open agent changes, not on every list edit
    let open_agent = Memo::new(move |_| registry.with(|r| r.open_agent().cloned()));

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-50 to-white">
            <div class="container mx-auto px-4 py-8">
                <div class="flex justify-between items-center mb-8">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">"AI Agent Creator"</h1>
                        <p class="text-gray-500 mt-2">"Create and manage your AI agents with ease"</p>
                    </div>
                    <CreateAgentDialog on_create=on_agent_create />
                </div>

                {move || match open_agent.get() {
                    Some(agent) => view! {
                        <AgentChat agent_name=agent.name on_close=on_chat_close />
                    }
                    .into_any(),
                    None => registry.with(|r| match r.view() {
                        IndexView::Grid(agents) => {
                            let cards = agents
                                .iter()
                                .cloned()
                                .map(|agent| {
                                    let delete_id = agent.id.clone();
                                    let chat_id = agent.id.clone();
                                    view! {
                                        <AgentCard
                                            name=agent.name
                                            description=agent.description
                                            on_delete=Callback::new(move |_| on_agent_delete(delete_id.clone()))
                                            on_chat=Callback::new(move |_| {
                                                let id = chat_id.clone();
                                                registry.update(|r| {
                                                    r.open_chat(&id);
                                                });
                                            })
                                        />
                                    }
                                })
                                .collect_view();
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
                            }
                            .into_any()
                        }
                        // Rendered by the open-agent branch above
                        IndexView::Chat(_) => ().into_any(),
                        IndexView::Empty => view! {
                            <div class="text-center py-12">
                                <p class="text-gray-500">"No agents yet. Create your first agent to get started!"</p>
                            </div>
                        }
                        .into_any(),
                    }),
                }}
            </div>
        </div>
    }
}
