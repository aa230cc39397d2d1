use std::time::Duration;

use eyespeak_common::{EyespeakError, Result};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::FrameRecord;

/// Replay `frames` on a background task, releasing each one when its
/// timestamp comes due relative to the first frame.
///
/// Only the newest frame is kept: a consumer that falls behind skips
/// straight to the latest frame instead of working through a backlog.
/// The receiver reports the channel closed once every frame was sent, or
/// once a frame's timestamp is too far out to schedule; the task then
/// returns [`EyespeakError::Source`].
pub fn spawn_realtime(
    frames: Vec<FrameRecord>,
) -> (JoinHandle<Result<()>>, watch::Receiver<Option<FrameRecord>>) {
    let (tx, rx) = watch::channel(None);

    let handle = tokio::spawn(async move {
        let Some(origin) = frames.first().map(|f| f.t) else {
            return Ok(());
        };
        let start = Instant::now();
        let total = frames.len();

        for frame in frames {
            let due = due_at(start, frame.t - origin).ok_or_else(|| {
                EyespeakError::Source(format!(
                    "frame at t={}ms is too far from the first frame to replay",
                    frame.t
                ))
            })?;
            tokio::time::sleep_until(due).await;
            if tx.send(Some(frame)).is_err() {
                tracing::debug!("frame consumer went away, stopping replay");
                return Ok(());
            }
        }
        tracing::debug!("realtime replay finished ({total} frames)");
        Ok(())
    });

    (handle, rx)
}

/// `start` plus `offset_ms`, or `None` when the result is not representable.
/// Negative offsets (out-of-order frames) are due immediately.
fn due_at(start: Instant, offset_ms: f64) -> Option<Instant> {
    let offset = Duration::try_from_secs_f64(offset_ms.max(0.0) / 1000.0).ok()?;
    start.checked_add(offset)
}
