// SPDX-License-Identifier: MPL-2.0
//! One-shot timers on the tokio clock.

use iced::Task;
use std::time::Duration;

/// Completes once `delay` has elapsed.
pub async fn elapsed(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Task delivering `message` once, after `delay`.
///
/// Nothing is scheduled until the runtime polls the task, so building one
/// outside a runtime is fine.
pub fn one_shot<M>(delay: Duration, message: M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(elapsed(delay), move |()| message)
}
