//! Terminal-styled recommendation chat.
//!
//! ARCHITECTURE
//! ============
//! The assistant is not wired to a model yet: each sent message is answered
//! with a fixed reply after `REPLY_DELAY_MS`. Conversations live only in the
//! page's state and are gone on reload.

use leptos::prelude::*;

use crate::components::auth_gate::{AuthGate, Recovery};
use crate::state::chat::{
    ChatRole, ChatState, HEADER_TITLE, PLACEHOLDER_REPLY, PROFILE_SUBTITLE, REPLY_DELAY_MS, SEND_LABEL, avatar_initial,
    prompt_label,
};
use crate::state::session::Session;
use crate::util::auth::use_auth;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <AuthGate auth=auth class="chat-page" recovery=Recovery::Retry>
            <ChatWorkspace />
        </AuthGate>
    }
}

#[component]
fn ChatWorkspace() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let username = Session::browser()
        .username()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "User".to_owned());
    let initial = avatar_initial(&username);
    let user_prompt = prompt_label(ChatRole::User, &username);
    let assistant_prompt = prompt_label(ChatRole::Assistant, &username);

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_typing()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(epoch) = chat.try_update(|c| c.submit(&text).map(|_| c.epoch())).flatten() else {
            return;
        };
        input.set(String::new());

        leptos::task::spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::TimeoutFuture::new(REPLY_DELAY_MS).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = REPLY_DELAY_MS;
            chat.try_update(|c| c.receive_reply(epoch, PLACEHOLDER_REPLY));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    let transcript = {
        let user_prompt = user_prompt.clone();
        move || {
            chat.with(|c| c.messages.clone())
                .into_iter()
                .map(|msg| {
                    let (prompt, role_class) = match msg.role {
                        ChatRole::User => (user_prompt.clone(), "chat-line chat-line--user"),
                        ChatRole::Assistant => (assistant_prompt.clone(), "chat-line chat-line--assistant"),
                    };
                    view! {
                        <div class=role_class>
                            <span class="chat-line__prompt">{prompt}</span>
                            <span class="chat-line__text">{msg.content}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    let sidebar = move || {
        chat.with(|c| c.conversations.clone())
            .into_iter()
            .map(|conversation| {
                let id = conversation.id;
                view! {
                    <button
                        class="chat-sidebar__item"
                        class=("chat-sidebar__item--active", conversation.active)
                        on:click=move |_| chat.update(|c| c.select_conversation(id))
                    >
                        <span class="chat-sidebar__title">{conversation.title}</span>
                        <span class="chat-sidebar__date">{conversation.date}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="chat-page">
            <aside class="chat-sidebar">
                <button class="chat-sidebar__new" on:click=move |_| chat.update(ChatState::start_new_conversation)>
                    "+ New Chat"
                </button>
                <div class="chat-sidebar__list">{sidebar}</div>
                <div class="chat-sidebar__user">
                    <span class="chat-sidebar__avatar">{initial}</span>
                    <div class="chat-sidebar__profile">
                        <span class="chat-sidebar__name">{username}</span>
                        <span class="chat-sidebar__subtitle">{PROFILE_SUBTITLE}</span>
                    </div>
                </div>
            </aside>

            <main class="chat-main">
                <header class="chat-main__header">
                    <h1 class="chat-main__title">{HEADER_TITLE}</h1>
                    <a class="chat-main__stats" href="/stats">
                        "Statistics"
                    </a>
                </header>

                <div class="chat-main__messages" node_ref=messages_ref>
                    {transcript}
                    <Show when=move || chat.with(ChatState::is_typing)>
                        <div class="chat-line chat-line--assistant chat-line--typing">
                            <span class="chat-line__prompt">{prompt_label(ChatRole::Assistant, "")}</span>
                            <span class="chat-line__text">"typing..."</span>
                            <span class="chat-line__cursor">"▋"</span>
                        </div>
                    </Show>
                </div>

                <form class="chat-main__composer" on:submit=on_submit>
                    <span class="chat-main__prompt">{user_prompt}</span>
                    <textarea
                        class="chat-main__input"
                        rows="1"
                        placeholder="Ask your query..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="chat-main__send" type="submit" disabled=move || !can_send()>
                        {SEND_LABEL}
                    </button>
                </form>
            </main>
        </div>
    }
}
