//! Debounced autosave.
//!
//! At most one delayed save is pending per session. Scheduling a new one
//! aborts the previous task, so only the last state after a quiet period is
//! written. Cancelling never forces a final write.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::draft_manager::DraftManager;
use crate::domain::submission::StudyForm;

pub struct Autosave {
    drafts: Arc<DraftManager>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Autosave {
    pub fn new(drafts: Arc<DraftManager>, delay: Duration) -> Self {
        Self {
            drafts,
            delay,
            pending: None,
        }
    }

    /// Restarts the quiet-period timer with `form` as the state to save.
    pub fn schedule(&mut self, form: StudyForm) {
        self.cancel();

        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(key = %self.drafts.key(), "No async runtime, autosave skipped");
                return;
            }
        };

        let drafts = Arc::clone(&self.drafts);
        let generation = drafts.generation();
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            drafts.save_draft_since(&form, generation);
        }));
    }

    /// Drops the pending save, if any, without writing.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            if !task.is_finished() {
                debug!(key = %self.drafts.key(), "Pending autosave cancelled");
            }
            task.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Autosave {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryDraftStorage;
    use crate::domain::draft::{DraftKey, SessionMode};

    fn setup() -> (InMemoryDraftStorage, Arc<DraftManager>) {
        let storage = InMemoryDraftStorage::new();
        let drafts = Arc::new(DraftManager::new(
            Arc::new(storage.clone()),
            DraftKey::for_session("meliaf_draft", SessionMode::Create),
        ));
        (storage, drafts)
    }

    fn titled(title: &str) -> StudyForm {
        StudyForm {
            study_title: title.to_string(),
            ..StudyForm::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn saves_only_after_quiet_period() {
        let (storage, drafts) = setup();
        let mut autosave = Autosave::new(drafts, Duration::from_millis(1000));

        autosave.schedule(titled("first"));
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(storage.write_count(), 0);
        assert!(autosave.has_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(storage.write_count(), 1);
        assert!(!autosave.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_restarts_the_timer() {
        let (storage, drafts) = setup();
        let mut autosave = Autosave::new(Arc::clone(&drafts), Duration::from_millis(1000));

        autosave.schedule(titled("first"));
        tokio::time::sleep(Duration::from_millis(500)).await;
        autosave.schedule(titled("second"));

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(storage.write_count(), 0);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(storage.write_count(), 1);
        assert_eq!(drafts.load_draft().unwrap().form.study_title, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_save() {
        let (storage, drafts) = setup();
        let mut autosave = Autosave::new(drafts, Duration::from_millis(1000));

        autosave.schedule(titled("unsaved"));
        autosave.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(storage.write_count(), 0);
        assert!(storage.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_save() {
        let (storage, drafts) = setup();
        {
            let mut autosave = Autosave::new(drafts, Duration::from_millis(1000));
            autosave.schedule(titled("unsaved"));
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_wins_over_save_scheduled_before_it() {
        let (storage, drafts) = setup();
        let mut autosave = Autosave::new(Arc::clone(&drafts), Duration::from_millis(1000));

        autosave.schedule(titled("stale"));
        drafts.clear_draft();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(storage.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn clear_after_cancel_is_final_on_worker_threads() {
        let (storage, drafts) = setup();
        for round in 0..50 {
            let mut autosave = Autosave::new(Arc::clone(&drafts), Duration::from_millis(1));
            autosave.schedule(titled(&format!("round {round}")));
            tokio::time::sleep(Duration::from_millis(round % 3)).await;
            autosave.cancel();
            drafts.clear_draft();
            tokio::time::sleep(Duration::from_millis(5)).await;
            assert!(storage.is_empty(), "draft reappeared in round {round}");
        }
    }

    #[test]
    fn scheduling_without_runtime_is_skipped() {
        let (storage, drafts) = setup();
        let mut autosave = Autosave::new(drafts, Duration::from_millis(10));

        autosave.schedule(titled("offline"));

        assert!(!autosave.has_pending());
        assert_eq!(storage.write_count(), 0);
    }
}
