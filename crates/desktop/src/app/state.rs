//! Shared state models that keep the desktop UI in sync with the session.

#[derive(Debug, Clone, Default)]
pub(crate) struct ComposeForm {
    pub(crate) title: String,
    pub(crate) description: String,
}

impl ComposeForm {
    pub(crate) fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleSeed {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) const SAMPLE_SEEDS: &[SampleSeed] = &[
    SampleSeed {
        title: "Buy groceries",
        description: "Milk, eggs, bread, and something for the weekend",
    },
    SampleSeed {
        title: "Pay rent",
        description: "Transfer before the 1st to avoid the late fee",
    },
    SampleSeed {
        title: "Walk the dog",
        description: "Long loop through the park if the weather holds",
    },
    SampleSeed {
        title: "Book dentist appointment",
        description: "Ask about the evening slots",
    },
    SampleSeed {
        title: "Review insurance renewal",
        description: "Compare the quote against last year",
    },
    SampleSeed {
        title: "Plan birthday dinner",
        description: "Reserve a table for six on Saturday",
    },
    SampleSeed {
        title: "Back up laptop",
        description: "Full backup before the OS upgrade",
    },
];
