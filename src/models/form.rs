use super::CardRecord;

/// Whether the form creates a new card or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u32),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Creating => "Add",
            FormMode::Editing(_) => "Update",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardForm {
    pub mode: FormMode,
    pub title: String,
    pub content: String,
}

impl CardForm {
    pub fn editing(card: &CardRecord) -> Self {
        Self {
            mode: FormMode::Editing(card.id),
            title: card.title.clone(),
            content: card.content.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub add_count: u32,
    pub update_count: u32,
}
