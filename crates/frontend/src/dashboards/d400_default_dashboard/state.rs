pub use crate::shared::list_query::{QueryState, PAGE_SIZE_OPTIONS};

/// Per-row download confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DownloadPrompt {
    #[default]
    Closed,
    Open { transaction_id: String },
}

impl DownloadPrompt {
    pub fn open(transaction_id: String) -> Self {
        Self::Open { transaction_id }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            Self::Open { transaction_id } => Some(transaction_id),
            Self::Closed => None,
        }
    }

    /// Closes the prompt and hands back the transaction the user confirmed.
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Open { transaction_id } => Some(transaction_id),
            Self::Closed => None,
        }
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_prompt_cycle() {
        let mut prompt = DownloadPrompt::default();
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);

        prompt = DownloadPrompt::open("T1".to_string());
        assert_eq!(prompt.transaction_id(), Some("T1"));
        assert_eq!(prompt.confirm(), Some("T1".to_string()));
        assert_eq!(prompt, DownloadPrompt::Closed);

        prompt = DownloadPrompt::open("T2".to_string());
        prompt.dismiss();
        assert!(!prompt.is_open());
    }
}
