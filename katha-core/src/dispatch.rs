//! Turning a selected story into a navigation request.
//!
//! The dispatcher is fire-and-forget: it does not track history, debounce,
//! or wait for the host to finish the transition. Its one job is to refuse
//! records the catalog never issued and to hand the host exactly one path
//! per accepted selection.

use crate::catalog::{Catalog, StoryRecord};
use thiserror::Error;
use tracing::{debug, warn};

/// The host's navigation capability.
///
/// The dashboard never changes screens itself; it asks its navigator to.
/// Implementations decide what a path means (the TUI maps it to a screen,
/// tests just record it).
pub trait Navigator {
    /// Request a transition to `path`.
    fn navigate_to(&mut self, path: &str);
}

/// Errors from [`Dispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The record is not one of the catalog's entries; navigation was
    /// suppressed. Recoverable: later dispatches proceed normally.
    #[error("story {name:?} is not in the catalog; navigation suppressed")]
    UnknownRecord { name: String },
}

/// Translates selected records into navigation requests.
///
/// Owns nothing but the injected navigator; the catalog is borrowed per
/// call, so one catalog can serve the dispatcher and the renderer at once.
#[derive(Debug)]
pub struct Dispatcher<N> {
    navigator: N,
}

impl<N: Navigator> Dispatcher<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Request navigation to `record`'s destination.
    ///
    /// `record` must be one of `catalog`'s own entries; an independently
    /// built record is refused so we never navigate to a destination the
    /// dashboard did not offer. On success the navigator is invoked exactly
    /// once with `/{route}`. Dispatching the same record again navigates
    /// again; deduplication is the host's business.
    pub fn dispatch(
        &mut self,
        catalog: &Catalog,
        record: &StoryRecord,
    ) -> Result<(), DispatchError> {
        if !catalog.contains(record) {
            warn!(
                name = %record.name,
                route = %record.route,
                "dispatch refused: record is not in the catalog"
            );
            return Err(DispatchError::UnknownRecord {
                name: record.name.clone(),
            });
        }

        let path = format!("/{}", record.route);
        debug!(%path, name = %record.name, "dispatching navigation");
        self.navigator.navigate_to(&path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_records;
    use crate::testing::RecordingNavigator;

    fn sample_catalog() -> Catalog {
        Catalog::new(sample_records()).unwrap()
    }

    #[test]
    fn test_dispatch_first_record_navigates_once() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

        dispatcher.dispatch(&catalog, &catalog.records()[0]).unwrap();

        assert_eq!(dispatcher.navigator().call_count(), 1);
        assert_eq!(dispatcher.navigator().paths(), ["/golconda"]);
    }

    #[test]
    fn test_dispatch_prefixes_route_with_slash() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

        dispatcher.dispatch(&catalog, &catalog.records()[1]).unwrap();

        assert_eq!(dispatcher.navigator().last_path(), Some("/cleanliness"));
    }

    #[test]
    fn test_dispatch_uses_the_records_own_route() {
        // Two records share "mahakumbh"; dispatching the later one must use
        // its own field, not anything looked up by name or position.
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

        dispatcher.dispatch(&catalog, &catalog.records()[5]).unwrap();

        assert_eq!(dispatcher.navigator().paths(), ["/mahakumbh"]);
    }

    #[test]
    fn test_unknown_record_is_refused_without_navigation() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());
        let stranger = StoryRecord::new("Ghost", "not listed", "ghost", "👻", "Mystery");

        let err = dispatcher.dispatch(&catalog, &stranger).unwrap_err();

        assert_eq!(
            err,
            DispatchError::UnknownRecord {
                name: "Ghost".to_string()
            }
        );
        assert_eq!(dispatcher.navigator().call_count(), 0);
    }

    #[test]
    fn test_unknown_record_does_not_poison_later_dispatches() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());
        let stranger = StoryRecord::new("Ghost", "not listed", "ghost", "👻", "Mystery");

        assert!(dispatcher.dispatch(&catalog, &stranger).is_err());
        dispatcher.dispatch(&catalog, &catalog.records()[3]).unwrap();

        assert_eq!(dispatcher.navigator().paths(), ["/charminar"]);
    }

    #[test]
    fn test_tampered_copy_of_an_entry_is_refused() {
        // A record that started as a catalog entry but was edited afterwards
        // no longer matches field-for-field.
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());
        let mut tampered = catalog.records()[0].clone();
        tampered.route = "elsewhere".to_string();

        assert!(dispatcher.dispatch(&catalog, &tampered).is_err());
        assert_eq!(dispatcher.navigator().call_count(), 0);
    }

    #[test]
    fn test_dispatching_twice_navigates_twice() {
        // No deduplication: two activations mean two requests.
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());

        dispatcher.dispatch(&catalog, &catalog.records()[0]).unwrap();
        dispatcher.dispatch(&catalog, &catalog.records()[0]).unwrap();

        assert_eq!(dispatcher.navigator().paths(), ["/golconda", "/golconda"]);
    }

    #[test]
    fn test_into_navigator_returns_the_recorder() {
        let catalog = sample_catalog();
        let mut dispatcher = Dispatcher::new(RecordingNavigator::new());
        dispatcher.dispatch(&catalog, &catalog.records()[2]).unwrap();

        let navigator = dispatcher.into_navigator();
        assert_eq!(navigator.paths(), ["/mahakumbh"]);
    }
}
