//! Optimistic command abstraction.
//!
//! An optimistic command changes local state **before** the server confirms,
//! then either keeps the change (commit succeeded) or reverts it (commit
//! failed). The three parts are kept separate so a single executor drives every
//! instance of the pattern:
//!
//! - `apply(&mut state)` writes the intended value locally,
//! - `commit()` performs the remote call (exactly one per execution),
//! - `rollback(&mut state)` restores the value captured before `apply`.
//!
//! There is no retry, no backoff and no batching: a failed commit is rolled
//! back and reported once. Two commands on different rows are independent;
//! nothing here coordinates them.

use async_trait::async_trait;

use crate::notify::{Notice, Notifier};

#[async_trait]
pub trait OptimisticCommand<S: ?Sized>: Send + Sync {
    type Error: core::fmt::Display + Send;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Write the intended value into local state.
    fn apply(&self, state: &mut S);

    /// Persist the change remotely.
    async fn commit(&self) -> Result<(), Self::Error>;

    /// Restore the local state captured before `apply`.
    fn rollback(&self, state: &mut S);
}

/// Run an optimistic command against local state.
///
/// On commit failure the state is rolled back, exactly one error notice is
/// emitted and the commit error is returned. Success emits nothing.
pub async fn execute_optimistic<S, C>(
    command: &C,
    state: &mut S,
    notifier: &dyn Notifier,
) -> Result<(), C::Error>
where
    S: ?Sized,
    C: OptimisticCommand<S>,
{
    command.apply(state);

    match command.commit().await {
        Ok(()) => {
            tracing::debug!(command = command.name(), "optimistic command committed");
            Ok(())
        }
        Err(err) => {
            command.rollback(state);
            tracing::warn!(command = command.name(), error = %err, "commit failed; rolled back");
            notifier.notify(Notice::error(err.to_string()));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{MemoryNotifier, NoticeLevel};

    struct SetValue {
        prior: i32,
        next: i32,
        fail: bool,
    }

    #[async_trait]
    impl OptimisticCommand<i32> for SetValue {
        type Error = String;

        fn name(&self) -> &'static str {
            "set_value"
        }

        fn apply(&self, state: &mut i32) {
            *state = self.next;
        }

        async fn commit(&self) -> Result<(), Self::Error> {
            if self.fail {
                Err("rejected".to_string())
            } else {
                Ok(())
            }
        }

        fn rollback(&self, state: &mut i32) {
            *state = self.prior;
        }
    }

    #[tokio::test]
    async fn keeps_applied_value_on_success() {
        let notifier = MemoryNotifier::new();
        let mut state = 1;
        let cmd = SetValue { prior: 1, next: 2, fail: false };

        execute_optimistic(&cmd, &mut state, &notifier).await.unwrap();

        assert_eq!(state, 2);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn rolls_back_and_notifies_once_on_failure() {
        let notifier = MemoryNotifier::new();
        let mut state = 1;
        let cmd = SetValue { prior: 1, next: 2, fail: true };

        let err = execute_optimistic(&cmd, &mut state, &notifier).await.unwrap_err();

        assert_eq!(err, "rejected");
        assert_eq!(state, 1);
        assert_eq!(notifier.count(NoticeLevel::Error), 1);
    }
}
