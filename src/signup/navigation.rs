//! Screen navigation seam.
//!
//! The form never switches screens itself. It asks a [`Navigator`] to do so,
//! either immediately or after a delay through a [`ScheduledNavigation`] that
//! is cancelled as soon as its owner lets go of it.

use log::*;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Specifying the screens reachable from the registration form.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Route {
    Signup,
    Login,
    Terms,
    Privacy,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Signup => "/signup",
            Route::Login => "/login",
            Route::Terms => "/terms",
            Route::Privacy => "/privacy",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/signup" => Some(Route::Signup),
            "/login" => Some(Route::Login),
            "/terms" => Some(Route::Terms),
            "/privacy" => Some(Route::Privacy),
            _ => None,
        }
    }
}

/// Capability to move the application to another screen.
///
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

impl Navigator for mpsc::Sender<Route> {
    fn navigate(&self, route: Route) {
        if self.send(route).is_err() {
            warn!("Dropped navigation to {}: receiver closed.", route.path());
        }
    }
}

/// One-shot navigation that fires after a delay unless cancelled first.
/// Dropping the handle cancels it.
///
pub struct ScheduledNavigation {
    route: Route,
    cancel_tx: Option<mpsc::Sender<()>>,
}

impl ScheduledNavigation {
    /// Start the countdown on a background thread.
    ///
    pub fn schedule(navigator: Arc<dyn Navigator>, route: Route, delay: Duration) -> Self {
        debug!(
            "Scheduling navigation to {} in {}ms...",
            route.path(),
            delay.as_millis()
        );
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        thread::spawn(move || match cancel_rx.recv_timeout(delay) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                debug!("Navigating to {}...", route.path());
                navigator.navigate(route);
            }
            _ => debug!("Cancelled pending navigation to {}.", route.path()),
        });
        ScheduledNavigation {
            route,
            cancel_tx: Some(cancel_tx),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Cancel the navigation if it has not fired yet.
    ///
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            // Fails only when the countdown already finished.
            let _ = cancel_tx.send(());
        }
    }
}

impl Drop for ScheduledNavigation {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Navigator that records every route it was asked to show.
    ///
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        routes: Mutex<Vec<Route>>,
    }

    impl RecordingNavigator {
        pub(crate) fn routes(&self) -> Vec<Route> {
            self.routes.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.routes.lock().unwrap().push(route);
        }
    }

    #[test]
    fn test_route_paths() {
        for route in [Route::Signup, Route::Login, Route::Terms, Route::Privacy] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/dashboard"), None);
    }

    #[test]
    fn test_scheduled_navigation_fires_once() {
        let navigator = Arc::new(RecordingNavigator::default());
        let pending =
            ScheduledNavigation::schedule(navigator.clone(), Route::Login, Duration::from_millis(10));
        assert_eq!(pending.route(), Route::Login);
        thread::sleep(Duration::from_millis(200));
        assert_eq!(navigator.routes(), vec![Route::Login]);
        drop(pending);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_scheduled_navigation_cancelled() {
        let navigator = Arc::new(RecordingNavigator::default());
        let pending =
            ScheduledNavigation::schedule(navigator.clone(), Route::Login, Duration::from_millis(100));
        pending.cancel();
        thread::sleep(Duration::from_millis(250));
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_scheduled_navigation_cancelled_on_drop() {
        let navigator = Arc::new(RecordingNavigator::default());
        {
            let _pending = ScheduledNavigation::schedule(
                navigator.clone(),
                Route::Login,
                Duration::from_millis(100),
            );
        }
        thread::sleep(Duration::from_millis(250));
        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn test_channel_navigator() {
        let (tx, rx) = mpsc::channel();
        tx.navigate(Route::Terms);
        assert_eq!(rx.recv().unwrap(), Route::Terms);
        drop(rx);
        tx.navigate(Route::Privacy);
    }
}
