//! Modal form for defining a new agent
//!
//! Collects a name, a description, picked files, URLs and the recursive-crawl
//! flag. The only thing that leaves this component is the validated
//! submission passed to `on_create`.

use leptos::prelude::*;
use leptos::web_sys;

use crate::components::notices::use_notifier;
use crate::state::{AgentDraft, AgentSubmission, Notice, SelectedFile};

fn picked_files(input: &web_sys::HtmlInputElement) -> Vec<SelectedFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile {
            name: file.name(),
            size: file.size() as u64,
            content_type: file.type_(),
        })
        .collect()
}

#[component]
pub fn CreateAgentDialog(on_create: Callback<AgentSubmission>) -> impl IntoView {
    let notifier = use_notifier();
    let draft = RwSignal::new(AgentDraft::new());

    let add_url = move || {
        let mut result = Ok(());
        draft.update(|d| result = d.add_url());
        if let Err(e) = result {
            log::debug!("rejected URL: {}", e);
            notifier.notify(Notice::from(&e));
        }
    };

    let submit = move |_| {
        let mut result = None;
        draft.update(|d| result = Some(d.submit()));
        match result {
            Some(Ok(submission)) => on_create.run(submission),
            Some(Err(e)) => notifier.notify(Notice::from(&e)),
            None => {}
        }
    };

    let on_files = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let files = picked_files(&input);
        draft.update(|d| d.set_files(files));
    };

    let on_url_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_url();
        }
    };

    view! {
        <button
            class="inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
            on:click=move |_| draft.update(|d| d.set_open(true))
        >
            <svg class="w-4 h-4 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
            </svg>
            "Create Agent"
        </button>

        <Show when=move || draft.with(|d| d.is_open())>
            <div
                class="fixed inset-0 bg-gray-600 bg-opacity-50 z-50 flex items-center justify-center p-4"
                on:click=move |_| draft.update(|d| d.set_open(false))
            >
                <div
                    class="w-full max-w-lg p-6 bg-white rounded-lg shadow-xl border border-gray-200"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-gray-900">"Create New Agent"</h3>
                        <button
                            class="text-gray-400 hover:text-gray-600"
                            on:click=move |_| draft.update(|d| d.set_open(false))
                        >
                            "×"
                        </button>
                    </div>

                    <div class="space-y-6">
                        <div class="space-y-2">
                            <label for="agent-name" class="block text-sm font-medium text-gray-700">"Name"</label>
                            <input
                                id="agent-name"
                                type="text"
                                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                placeholder="My Agent"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                        </div>

                        <div class="space-y-2">
                            <label for="agent-description" class="block text-sm font-medium text-gray-700">"Description"</label>
                            <input
                                id="agent-description"
                                type="text"
                                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                placeholder="What this agent knows about..."
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.description = value);
                                }
                            />
                        </div>

                        <div class="space-y-2">
                            <span class="block text-sm font-medium text-gray-700">"Files"</span>
                            <input
                                id="file-upload"
                                type="file"
                                multiple=true
                                class="hidden"
                                on:change=on_files
                            />
                            <label
                                for="file-upload"
                                class="flex items-center justify-center w-full h-10 px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md shadow-sm hover:bg-gray-50 cursor-pointer"
                            >
                                "Upload Files"
                            </label>
                            {move || {
                                let count = draft.with(|d| d.files().len());
                                (count > 0).then(|| view! {
                                    <div class="text-sm text-gray-500">{format!("{} file(s) selected", count)}</div>
                                })
                            }}
                        </div>

                        <div class="space-y-2">
                            <span class="block text-sm font-medium text-gray-700">"URLs"</span>
                            <div class="flex items-center space-x-2">
                                <input
                                    type="text"
                                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                    placeholder="https://example.com"
                                    prop:value=move || draft.with(|d| d.url_input.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.url_input = value);
                                    }
                                    on:keydown=on_url_keydown
                                />
                                <button
                                    type="button"
                                    class="shrink-0 px-3 py-2 text-sm text-white bg-gray-800 rounded-md hover:bg-gray-700"
                                    on:click=move |_| add_url()
                                >
                                    "+"
                                </button>
                            </div>
                            <ul class="space-y-1">
                                {move || {
                                    draft
                                        .with(|d| d.urls().to_vec())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, url)| view! {
                                            <li class="flex items-center justify-between text-sm">
                                                <span class="text-gray-600 truncate">{url}</span>
                                                <button
                                                    class="ml-2 text-gray-400 hover:text-red-500"
                                                    on:click=move |_| draft.update(|d| d.remove_url(index))
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </div>

                        <label class="flex items-center space-x-2 text-sm text-gray-700">
                            <input
                                id="recursive"
                                type="checkbox"
                                class="h-4 w-4 text-indigo-600 border-gray-300 rounded"
                                prop:checked=move || draft.with(|d| d.recursive)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| d.recursive = checked);
                                }
                            />
                            <span>"Enable recursive crawling"</span>
                        </label>

                        <button
                            class="w-full px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                            on:click=submit
                        >
                            "Create Agent"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
