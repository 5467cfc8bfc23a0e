use std::future::Future;
use std::time::Duration;

/// Spawns an async task that runs in the background.
///
/// Event emission towards the native SDK is fire-and-forget from the host's
/// synchronous callbacks; the task is scheduled on the ambient tokio runtime
/// when one exists, otherwise on a lazily built fallback runtime.
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    use std::sync::LazyLock;
    use tokio::runtime::{Builder, Handle, Runtime};

    static BACKGROUND_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
        Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build background tokio runtime")
    });

    if let Ok(handle) = Handle::try_current() {
        handle.spawn(future);
    } else {
        let _ = BACKGROUND_RUNTIME.spawn(future);
    }
}

/// Asynchronously waits for the provided duration.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    tokio::time::sleep(duration).await;
}
