//! Browser hooks the components need: the blocking confirm dialog and a timer.

use std::time::Duration;

/// Ask the user to confirm `message`. Outside the browser nothing can be
/// confirmed, so the answer is no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("no confirm dialog outside the browser, declining: {message}");
        false
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_confirm_declines() {
        assert!(!confirm("Are you sure?"));
    }

    #[tokio::test]
    async fn test_sleep_returns() {
        sleep(Duration::from_millis(1)).await;
    }
}
