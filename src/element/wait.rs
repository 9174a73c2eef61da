//! Explicit wait primitives
//!
//! A wait polls a probe until it yields a value or the policy's timeout
//! elapses. Probes that fail because an element is missing or went stale are
//! treated as "not yet" and polled again; any other error aborts the wait.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::{Error, Result};

/// Timeout and poll configuration applied per wait call
#[derive(Debug, Clone)]
pub struct WaitPolicy {
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: Duration::from_millis(config.wait_timeout_ms),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(250),
        }
    }
}

/// Poll `probe` until it yields a value, raising a timeout error once the
/// policy's timeout elapses.
///
/// The probe runs at least once, so a zero timeout still observes the
/// current page state.
pub(crate) async fn wait_until<T, F, Fut>(policy: &WaitPolicy, what: &str, mut probe: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    let start = Instant::now();
    loop {
        match probe().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(err) if err.is_stale() || matches!(err, Error::ElementNotFound(_)) => {}
            Err(err) => return Err(err),
        }

        if start.elapsed() >= policy.timeout() {
            return Err(Error::timeout(format!(
                "waited {}ms for {}",
                policy.timeout().as_millis(),
                what
            )));
        }
        tokio::time::sleep(policy.poll_interval()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick_policy() -> WaitPolicy {
        WaitPolicy::new(Duration::from_millis(50), Duration::from_millis(5))
    }

    #[tokio::test]
    async fn yields_immediately_when_the_condition_holds() {
        let value = wait_until(&quick_policy(), "a ready value", || async {
            Ok(Some(42))
        })
        .await
        .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn times_out_when_the_condition_never_holds() {
        let err = wait_until::<(), _, _>(&quick_policy(), "the impossible", || async { Ok(None) })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
        assert!(err.to_string().contains("the impossible"));
    }

    #[tokio::test]
    async fn missing_and_stale_probes_are_polled_again() {
        let attempts = AtomicU32::new(0);
        let value = wait_until(&quick_policy(), "a flaky element", || {
            let attempt = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                match attempt {
                    0 => Err(Error::element_not_found("not rendered yet")),
                    1 => Err(Error::stale("re-rendered")),
                    _ => Ok(Some("found")),
                }
            }
        })
        .await
        .unwrap();
        assert_eq!(value, "found");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn unexpected_errors_abort_the_wait() {
        let err = wait_until::<(), _, _>(&quick_policy(), "a broken probe", || async {
            Err(Error::webdriver("connection reset"))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::WebDriver(_)));
    }
}
