#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const GREETING: &str =
    "Hello! I'm your film recommendation AI. I know all about your Letterboxd viewing history. What would you like to know?";
pub const NEW_CHAT_GREETING: &str = "Hello! I'm your film recommendation AI. What would you like to know?";
pub const PLACEHOLDER_REPLY: &str = "This is a placeholder response. Soon I'll be powered by your actual AI backend!";

pub const HEADER_TITLE: &str = "Film-Recommender v0.1";
pub const PROFILE_SUBTITLE: &str = "Letterboxd User";
pub const SEND_LABEL: &str = "ENTER";

/// Delay before the placeholder assistant reply lands.
pub const REPLY_DELAY_MS: u32 = 1_000;

/// Who wrote a transcript line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
}

/// An entry in the conversation sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub active: bool,
}

impl Conversation {
    fn fresh(id: u64) -> Self {
        Self { id, title: "New conversation".to_owned(), date: "Today".to_owned(), active: true }
    }
}

/// State for the chat screen. The transcript is append-only until a new
/// conversation replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub conversations: Vec<Conversation>,
    /// Replies still owed for messages sent in this transcript.
    pending_replies: u32,
    /// Bumped whenever the transcript is replaced.
    epoch: u64,
    next_message_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { id: 1, role: ChatRole::Assistant, content: GREETING.to_owned() }],
            conversations: vec![Conversation::fresh(1)],
            pending_replies: 0,
            epoch: 0,
            next_message_id: 2,
        }
    }
}

impl ChatState {
    fn push(&mut self, role: ChatRole, content: String) -> ChatMessage {
        let message = ChatMessage { id: self.next_message_id, role, content };
        self.next_message_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Append the user's message. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        let message = self.push(ChatRole::User, input.to_owned());
        self.pending_replies += 1;
        Some(message)
    }

    /// Identifies the current transcript. A reply timer carries the epoch it
    /// was started in.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the typing indicator should show.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Append an assistant reply for the oldest unanswered message.
    ///
    /// Returns `None` when nothing is owed or when `epoch` belongs to a
    /// transcript that a new conversation has since replaced.
    pub fn receive_reply(&mut self, epoch: u64, content: &str) -> Option<ChatMessage> {
        if epoch != self.epoch || self.pending_replies == 0 {
            return None;
        }
        self.pending_replies -= 1;
        Some(self.push(ChatRole::Assistant, content.to_owned()))
    }

    /// Prepend a fresh conversation, make it the only active one, and reset
    /// the transcript to the short greeting.
    pub fn start_new_conversation(&mut self) {
        let id = self.conversations.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        for conversation in &mut self.conversations {
            conversation.active = false;
        }
        self.conversations.insert(0, Conversation::fresh(id));
        self.messages = vec![ChatMessage { id: 1, role: ChatRole::Assistant, content: NEW_CHAT_GREETING.to_owned() }];
        self.next_message_id = 2;
        self.pending_replies = 0;
        self.epoch += 1;
    }

    /// Mark `id` as the active conversation. Unknown ids change nothing.
    pub fn select_conversation(&mut self, id: u64) {
        if !self.conversations.iter().any(|c| c.id == id) {
            return;
        }
        for conversation in &mut self.conversations {
            conversation.active = conversation.id == id;
        }
    }
}

/// Shell-style prompt shown before a line.
#[must_use]
pub fn prompt_label(role: ChatRole, username: &str) -> String {
    match role {
        ChatRole::User => format!("{}@film:~$", username.to_lowercase()),
        ChatRole::Assistant => "ai@film:~#".to_owned(),
    }
}

/// Uppercased first character of the username for the avatar.
#[must_use]
pub fn avatar_initial(username: &str) -> String {
    username.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
