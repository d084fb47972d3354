//! Restore handles returned by [`replace_globals`](crate::global::replace_globals)
//! and [`redirect_std_log`](crate::bridge::redirect_std_log)
//!
//! A handle reinstates exactly the state captured when it was created.
//! Nothing restores automatically: either call `restore()` on every exit
//! path, or turn the handle into a [`RestoreGuard`] that restores on drop.
//!
//! ```
//! use ambient_logger::{global, Logger};
//!
//! {
//!     let _restore = global::replace_globals(Logger::new()).guard();
//!     global::logger().info("goes to the replacement");
//! }
//! assert!(global::logger().is_nop());
//! ```

/// A single-use capability that reverts a global override
pub trait Restore {
    fn restore(self);
}

/// Drop guard that restores its handle when it goes out of scope
#[must_use = "dropping the guard restores immediately"]
pub struct RestoreGuard<R: Restore> {
    handle: Option<R>,
}

impl<R: Restore> RestoreGuard<R> {
    pub fn new(handle: R) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Take the handle back out, leaving the override installed
    pub fn into_inner(mut self) -> R {
        match self.handle.take() {
            Some(handle) => handle,
            None => unreachable!("handle is only taken by into_inner or drop"),
        }
    }
}

impl<R: Restore> Drop for RestoreGuard<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.restore();
        }
    }
}
