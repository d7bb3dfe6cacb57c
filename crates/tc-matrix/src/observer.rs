//! Build observer trait for operator visibility.

use tc_zones::Zone;

use crate::{CatastrophicEvent, Notification};

/// Callbacks invoked by [`CostMatrixBuilder::build_observed`] once a build
/// has succeeded.
///
/// Nothing is reported for a failed build.  All methods have default no-op
/// implementations so implementors only override what they care about.
///
/// # Example — console alerts
///
/// ```rust,ignore
/// struct Console;
///
/// impl BuildObserver for Console {
///     fn on_notification(&mut self, n: &Notification) {
///         println!("{n}");
///     }
///     fn on_catastrophe(&mut self, e: &CatastrophicEvent) {
///         eprintln!("{e}");
///     }
/// }
/// ```
///
/// [`CostMatrixBuilder::build_observed`]: crate::CostMatrixBuilder::build_observed
pub trait BuildObserver {
    /// The zone set the time matrix was perturbed with.
    fn on_zones(&mut self, _zones: &[Zone]) {}

    /// One closed edge, in generation order.
    fn on_notification(&mut self, _notification: &Notification) {}

    /// Called at most once per build.
    fn on_catastrophe(&mut self, _event: &CatastrophicEvent) {}
}

/// A [`BuildObserver`] that does nothing.
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}
