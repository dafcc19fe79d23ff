use leptos::prelude::*;

/// Summary card for one agent with delete and chat actions
#[component]
pub fn AgentCard(
    name: String,
    description: String,
    on_delete: Callback<()>,
    on_chat: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-white border border-gray-200 rounded-lg shadow-sm hover:shadow-lg transition-all duration-300">
            <div class="flex items-start justify-between">
                <div class="flex items-center space-x-3">
                    <div class="p-2 bg-indigo-50 rounded-lg">
                        <svg class="w-6 h-6 text-indigo-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/>
                        </svg>
                    </div>
                    <div>
                        <h3 class="font-semibold text-lg text-gray-900">{name}</h3>
                        <p class="text-sm text-gray-500">{description}</p>
                    </div>
                </div>
                <button
                    class="p-2 rounded text-gray-500 hover:text-red-500 hover:bg-gray-100"
                    title="Delete agent"
                    on:click=move |_| on_delete.run(())
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                    </svg>
                </button>
            </div>
            <div class="mt-4 flex justify-end">
                <button
                    class="px-4 py-2 text-sm font-medium text-white bg-indigo-600 rounded-md hover:bg-indigo-700"
                    on:click=move |_| on_chat.run(())
                >
                    "Chat with Agent"
                </button>
            </div>
        </div>
    }
}
