use std::fmt;

/// Who authored a line in the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatSender {
    /// CSS modifier class used by the chat log markup.
    pub fn css_class(self) -> &'static str {
        match self {
            ChatSender::User => "user",
            ChatSender::Bot => "bot",
        }
    }
}

impl fmt::Display for ChatSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// One line of the chat log. Appended once, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: ChatSender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: ChatSender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: ChatSender::Bot }
    }
}
