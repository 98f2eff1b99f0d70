use async_trait::async_trait;

/// User-facing interaction capability: an awaited yes/no confirmation plus
/// notices the user must see (the alerts of a browser UI).
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;

    async fn notify(&self, message: &str);
}

/// Prompter that answers every confirmation the same way and logs notices
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn yes() -> Self {
        Self { answer: true }
    }

    pub fn no() -> Self {
        Self { answer: false }
    }
}

#[async_trait]
impl Prompter for AutoConfirm {
    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!("Auto-answering {:?} with {}", message, self.answer);
        self.answer
    }

    async fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_confirm_answers() {
        assert!(AutoConfirm::yes().confirm("delete?").await);
        assert!(!AutoConfirm::no().confirm("delete?").await);
    }
}
