use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_starts_with_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
    assert!(!state.is_typing());
}

#[test]
fn chat_state_default_has_one_active_conversation() {
    let state = ChatState::default();
    assert_eq!(state.conversations.len(), 1);
    assert!(state.conversations[0].active);
}

// =============================================================
// submit / receive_reply
// =============================================================

#[test]
fn blank_submit_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("   \n"), None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_typing());
}

#[test]
fn submit_appends_user_message_and_awaits_reply() {
    let mut state = ChatState::default();
    let sent = state.submit("recommend a heist film").unwrap();
    assert_eq!(sent.role, ChatRole::User);
    assert_eq!(sent.id, 2);
    assert_eq!(state.messages.last(), Some(&sent));
    assert!(state.is_typing());
}

#[test]
fn transcript_is_append_only_with_increasing_ids() {
    let mut state = ChatState::default();
    state.submit("one");
    state.receive_reply(state.epoch(), PLACEHOLDER_REPLY);
    state.submit("two");
    let ids: Vec<_> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(state.messages[1].content, "one");
    assert_eq!(state.messages[2].role, ChatRole::Assistant);
}

#[test]
fn reply_clears_typing_indicator() {
    let mut state = ChatState::default();
    state.submit("hi");
    assert!(state.receive_reply(state.epoch(), PLACEHOLDER_REPLY).is_some());
    assert!(!state.is_typing());
}

#[test]
fn each_message_gets_one_reply() {
    let mut state = ChatState::default();
    state.submit("one");
    state.submit("two");
    let epoch = state.epoch();
    assert!(state.receive_reply(epoch, PLACEHOLDER_REPLY).is_some());
    assert!(state.is_typing());
    assert!(state.receive_reply(epoch, PLACEHOLDER_REPLY).is_some());
    assert!(state.receive_reply(epoch, PLACEHOLDER_REPLY).is_none());
    assert_eq!(state.messages.len(), 5);
}

#[test]
fn reply_after_new_conversation_is_dropped() {
    let mut state = ChatState::default();
    state.submit("hi");
    let old = state.epoch();
    state.start_new_conversation();
    assert_eq!(state.receive_reply(old, PLACEHOLDER_REPLY), None);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn stale_reply_does_not_answer_new_conversation() {
    let mut state = ChatState::default();
    state.submit("first chat");
    let old = state.epoch();
    state.start_new_conversation();
    state.submit("second chat");
    let current = state.epoch();

    assert_eq!(state.receive_reply(old, PLACEHOLDER_REPLY), None);
    assert!(state.is_typing());
    assert!(state.receive_reply(current, PLACEHOLDER_REPLY).is_some());
    assert!(!state.is_typing());
    assert_eq!(state.messages.len(), 3);
}

// =============================================================
// conversations
// =============================================================

#[test]
fn new_conversation_is_prepended_and_sole_active() {
    let mut state = ChatState::default();
    state.start_new_conversation();
    assert_eq!(state.conversations.len(), 2);
    assert_eq!(state.conversations[0].id, 2);
    assert!(state.conversations[0].active);
    assert!(!state.conversations[1].active);
}

#[test]
fn new_conversation_resets_transcript() {
    let mut state = ChatState::default();
    state.submit("hi");
    state.start_new_conversation();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, NEW_CHAT_GREETING);
    assert!(!state.is_typing());
    assert_eq!(state.submit("again").map(|m| m.id), Some(2));
}

#[test]
fn select_conversation_moves_active_flag() {
    let mut state = ChatState::default();
    state.start_new_conversation();
    state.select_conversation(1);
    let active: Vec<_> = state.conversations.iter().filter(|c| c.active).map(|c| c.id).collect();
    assert_eq!(active, vec![1]);
}

#[test]
fn select_unknown_conversation_is_noop() {
    let mut state = ChatState::default();
    let before = state.clone();
    state.select_conversation(99);
    assert_eq!(state, before);
}

// =============================================================
// labels
// =============================================================

#[test]
fn prompt_labels_follow_role() {
    assert_eq!(prompt_label(ChatRole::User, "Alex"), "alex@film:~$");
    assert_eq!(prompt_label(ChatRole::Assistant, "Alex"), "ai@film:~#");
}

#[test]
fn avatar_initial_is_uppercased() {
    assert_eq!(avatar_initial("alex"), "A");
    assert_eq!(avatar_initial(""), "");
}

#[test]
fn chrome_labels_match_terminal_theme() {
    assert_eq!(HEADER_TITLE, "Film-Recommender v0.1");
    assert_eq!(SEND_LABEL, "ENTER");
    assert_eq!(PROFILE_SUBTITLE, "Letterboxd User");
}
