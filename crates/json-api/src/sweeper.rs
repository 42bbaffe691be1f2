//! Expired session sweeper.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, error, info};

use shop_app::sessions::SessionStore;

use crate::observability::observe_expired_sessions;

/// Purge expired sessions every `every` until `stop` changes or its sender is
/// dropped.
pub(crate) async fn run(
    sessions: Arc<dyn SessionStore>,
    every: Duration,
    mut stop: watch::Receiver<bool>,
) {
    let mut interval = time::interval(every);

    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                sweep(sessions.as_ref()).await;
            }
            _ = stop.changed() => {
                info!("session sweeper stopped");

                return;
            }
        }
    }
}

async fn sweep(sessions: &dyn SessionStore) -> usize {
    match sessions.purge_expired().await {
        Ok(0) => 0,
        Ok(expired) => {
            observe_expired_sessions(expired);

            debug!(expired, "purged expired sessions");

            expired
        }
        Err(source) => {
            error!("failed to purge expired sessions: {source}");

            0
        }
    }
}

#[cfg(test)]
mod tests {
    use shop_app::sessions::MockSessionStore;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn sweep_reports_purged_sessions() {
        let mut sessions = MockSessionStore::new();

        sessions.expect_purge_expired().once().return_once(|| Ok(2));
        sessions.expect_get().never();
        sessions.expect_put().never();
        sessions.expect_remove().never();

        assert_eq!(sweep(&sessions).await, 2);
    }

    #[tokio::test]
    async fn sweeper_stops_when_signalled() -> TestResult {
        let mut sessions = MockSessionStore::new();

        sessions.expect_purge_expired().returning(|| Ok(0));

        let (stop_tx, stop_rx) = watch::channel(false);

        let task = tokio::spawn(run(
            Arc::new(sessions),
            Duration::from_millis(5),
            stop_rx,
        ));

        time::sleep(Duration::from_millis(20)).await;

        stop_tx.send(true)?;

        time::timeout(Duration::from_secs(1), task).await??;

        Ok(())
    }
}
