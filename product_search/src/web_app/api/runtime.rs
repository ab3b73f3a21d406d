// web_app/api/runtime.rs - Browser clock and timers for the query cache

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::cache::Runtime;

/// `Date.now()` via chrono's wasmbind and `setTimeout` via gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
