//! Simulated matchmaker replies
//!
//! Every member send gets a canned matchmaker reply after a fixed delay.
//! Replies are scheduled as cancellable tasks tied to the scheduler's
//! lifetime: dropping the [`ReplyScheduler`] aborts every pending reply,
//! so a torn-down chat view never appends to a stale conversation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::conversation::Conversation;
use super::message::{ChatMessage, Sender};

/// Fixed set of canned matchmaker responses.
pub const CANNED_REPLIES: [&str; 6] = [
    "That's lovely to hear! I'll pass it along.",
    "Good question — let me check with your match and get back to you.",
    "Noted! I'll factor that into your next introduction.",
    "They said something very similar, actually. Worth a coffee to compare notes?",
    "Thanks for sharing. I've updated your preferences.",
    "Wonderful. I'll arrange the next step and confirm the details soon.",
];

/// Default delay before a simulated reply lands.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Schedules one-shot delayed matchmaker replies.
///
/// Multiple pending replies race independently; all delays are equal, so
/// completion is FIFO in send order. Pending tasks are aborted when the
/// scheduler is dropped.
#[derive(Debug)]
pub struct ReplyScheduler {
    delay: Duration,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl ReplyScheduler {
    /// Create a scheduler with the given reply delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Schedule one simulated reply to the conversation.
    ///
    /// After the delay elapses, a matchmaker-authored message with content
    /// chosen uniformly at random from [`CANNED_REPLIES`] is appended.
    pub fn schedule(&self, conversation: Arc<RwLock<Conversation>>, matchmaker: Sender) {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let content = CANNED_REPLIES
                .choose(&mut rand::rng())
                .copied()
                .unwrap_or(CANNED_REPLIES[0]);
            let message = ChatMessage::new(&matchmaker, content, true);

            let mut guard = conversation.write().await;
            tracing::info!(id = %message.id, "Simulated reply appended");
            guard.push(message);
        });

        let mut pending = self.pending.lock();
        pending.retain(|task| !task.is_finished());
        pending.push(handle);
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Scheduled simulated reply");
    }

    /// Number of replies still pending (best effort; completed tasks are
    /// pruned on the next schedule call).
    pub fn pending_count(&self) -> usize {
        self.pending.lock().iter().filter(|t| !t.is_finished()).count()
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        for task in self.pending.lock().drain(..) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchmaker() -> Sender {
        Sender::new("mm-1", "June", "J")
    }

    fn shared_conversation() -> Arc<RwLock<Conversation>> {
        Arc::new(RwLock::new(Conversation::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_after_delay() {
        let conversation = shared_conversation();
        let scheduler = ReplyScheduler::new(Duration::from_millis(1500));

        scheduler.schedule(conversation.clone(), matchmaker());

        // Nothing before the delay elapses.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(conversation.read().await.is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        let guard = conversation.read().await;
        assert_eq!(guard.len(), 1);

        let reply = guard.last_message().expect("reply should be appended");
        assert!(reply.from_matchmaker);
        assert!(CANNED_REPLIES.contains(&reply.content.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_quick_sends_get_two_replies() {
        let conversation = shared_conversation();
        let scheduler = ReplyScheduler::new(Duration::from_millis(1500));

        scheduler.schedule(conversation.clone(), matchmaker());
        scheduler.schedule(conversation.clone(), matchmaker());
        assert_eq!(scheduler.pending_count(), 2);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(conversation.read().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_replies() {
        let conversation = shared_conversation();
        let scheduler = ReplyScheduler::new(Duration::from_millis(1500));

        scheduler.schedule(conversation.clone(), matchmaker());
        drop(scheduler);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(conversation.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_replies_are_not_cancelled_retroactively() {
        let conversation = shared_conversation();
        let scheduler = ReplyScheduler::new(Duration::from_millis(100));

        scheduler.schedule(conversation.clone(), matchmaker());
        tokio::time::sleep(Duration::from_millis(200)).await;
        drop(scheduler);

        assert_eq!(conversation.read().await.len(), 1);
    }
}
