//! Whole-program walkthrough shown in full explanation mode.

use sensei_types::StyleMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub beginner: &'static str,
    pub advanced: &'static str,
}

impl Section {
    pub fn content(&self, style: StyleMode) -> &'static str {
        match style {
            StyleMode::Beginner => self.beginner,
            StyleMode::Advanced => self.advanced,
        }
    }
}

pub const SECTIONS: [Section; 4] = [
    Section {
        id: "overview",
        title: "What This Program Does",
        beginner: "This C++ program calculates and prints the first 10 Fibonacci numbers. \
            The Fibonacci sequence is famous in math and nature - each number is the sum of \
            the two before it: 0, 1, 1, 2, 3, 5, 8, 13, 21, 34... You can see this pattern in \
            sunflower seeds, pinecones, and even galaxies!",
        advanced: "Implementation of the Fibonacci sequence using recursive algorithm with \
            exponential time complexity O(2^n). Demonstrates basic C++ syntax, recursion, and \
            I/O operations.",
    },
    Section {
        id: "structure",
        title: "Program Structure",
        beginner: "Every C++ program has the same basic parts: 1) Include statements (like \
            importing tools), 2) The 'main' function (where the program starts), and 3) Other \
            functions we create. This program also has a 'fibonacci' function that we created \
            to do the math calculations.",
        advanced: "Standard C++ program structure with preprocessor directives, namespace \
            usage, function declarations, and the main entry point. Follows typical C++ \
            organizational patterns.",
    },
    Section {
        id: "algorithm",
        title: "How the Fibonacci Function Works",
        beginner: "The fibonacci function is 'recursive' - it calls itself! Think of it like \
            Russian nesting dolls. To find F(5), it needs F(4) and F(3). To find F(4), it needs \
            F(3) and F(2), and so on, until it reaches F(0)=0 and F(1)=1. Then it builds the \
            answer back up: F(2)=1, F(3)=2, F(4)=3, F(5)=5.",
        advanced: "Classic recursive approach with base cases (n ≤ 1) and recursive cases \
            (fibonacci(n-1) + fibonacci(n-2)). Demonstrates divide-and-conquer paradigm with \
            exponential time complexity.",
    },
    Section {
        id: "improvements",
        title: "Making It Better",
        beginner: "This code is great for learning, but it's slow for big numbers because it \
            recalculates the same values many times. Imagine asking 'What's 2+2?' a thousand \
            times instead of remembering the answer! We could make it faster by storing \
            previous answers or using a different approach.",
        advanced: "Consider memoization or dynamic programming to reduce time complexity from \
            O(2^n) to O(n). Iterative approach would be more memory efficient. Could also add \
            input validation and error handling for production code.",
    },
];

/// Accordion over [`SECTIONS`]: every section starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullExplanation {
    open: [bool; SECTIONS.len()],
    selected: usize,
}

impl FullExplanation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &'static [Section] {
        &SECTIONS
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Open a closed section or close an open one.
    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.open.get_mut(index) {
            *open = !*open;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn toggle_by_id(&mut self, id: &str) {
        if let Some(index) = SECTIONS.iter().position(|s| s.id == id) {
            self.toggle(index);
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SECTIONS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + SECTIONS.len() - 1) % SECTIONS.len();
    }

    /// Collapse everything, as a fresh render does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
