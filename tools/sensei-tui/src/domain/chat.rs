//! Simulated assistant chat.
//!
//! Replies are canned and picked at random; each one is delivered
//! [`REPLY_DELAY`] after the message that triggered it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

pub const REPLY_DELAY: Duration = Duration::from_secs(1);

pub const CANNED_REPLIES: [&str; 4] = [
    "I can help explain that part of your C++ code! Which specific line would you like me to break down?",
    "That's a great question about the Fibonacci algorithm. The recursive approach you're using is elegant but has exponential time complexity.",
    "I notice your code uses recursion. Would you like me to explain how the function calls itself, or show you an iterative alternative?",
    "The iostream header you included gives you access to cout and cin for input/output operations. Would you like to know more about C++ headers?",
];

/// Preset prompts offered below the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    StepByStep,
    Optimize,
    FindErrors,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::StepByStep,
        QuickAction::Optimize,
        QuickAction::FindErrors,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::StepByStep => "step-by-step",
            QuickAction::Optimize => "optimize",
            QuickAction::FindErrors => "find-errors",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::StepByStep => "Explain step by step",
            QuickAction::Optimize => "Optimize code",
            QuickAction::FindErrors => "Find errors",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::StepByStep => "Can you explain my C++ code step by step?",
            QuickAction::Optimize => "How can I optimize my Fibonacci code?",
            QuickAction::FindErrors => "Are there any errors in my C++ code?",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Chat {
    messages: Vec<ChatMessage>,
    pending: Vec<Instant>,
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Post a user message and schedule a reply.
    ///
    /// Returns false, changing nothing, when the trimmed text is empty.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        self.pending.push(now + REPLY_DELAY);
        true
    }

    pub fn quick_action(&mut self, action: QuickAction, now: Instant) -> bool {
        self.send(action.prompt(), now)
    }

    /// Deliver every reply that is due; returns how many were delivered.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> usize {
        let due = self.pending.iter().filter(|at| **at <= now).count();
        self.pending.retain(|at| *at > now);
        for _ in 0..due {
            let reply = CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0]);
            self.messages.push(ChatMessage {
                sender: Sender::Ai,
                text: reply.to_string(),
            });
        }
        due
    }
}
