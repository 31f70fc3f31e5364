use serde_json::Value;

use crate::client::models::fetch_state::{FetchCache, FetchResult, FetchTicket};
use crate::common::endpoints::Endpoint;
use crate::common::errors::FetchError;

const TABS: &[Endpoint; 10] = &Endpoint::ACTUATOR;

/// Tab selection over the actuator endpoints with cached-until-refresh
/// results. Methods that start a fetch return the ticket to run.
#[derive(Debug)]
pub struct TabRouter {
    active: Endpoint,
    cache: FetchCache,
    primed: bool,
}

impl TabRouter {
    pub fn actuator() -> Self {
        Self { active: TABS[0], cache: FetchCache::default(), primed: false }
    }

    pub fn tabs(&self) -> &'static [Endpoint] {
        TABS
    }

    pub fn active(&self) -> Endpoint {
        self.active
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    pub fn result(&self, endpoint: Endpoint) -> Option<&FetchResult> {
        self.cache.get(endpoint)
    }

    /// Switches tab; fetches only if the tab has no result yet.
    pub fn activate(&mut self, endpoint: Endpoint) -> Option<FetchTicket> {
        if !TABS.contains(&endpoint) {
            return None;
        }
        self.active = endpoint;
        if self.cache.contains(endpoint) {
            None
        } else {
            Some(self.cache.begin(endpoint))
        }
    }

    /// Fetches the active tab again; the previous fetch time is kept until
    /// the new outcome lands.
    pub fn refresh(&mut self) -> FetchTicket {
        self.cache.begin(self.active)
    }

    /// Eager fetch of the first tab, once per configuration.
    pub fn prime(&mut self) -> Option<FetchTicket> {
        if self.primed {
            return None;
        }
        self.primed = true;
        let first = TABS[0];
        if self.cache.contains(first) {
            None
        } else {
            Some(self.cache.begin(first))
        }
    }

    /// Forgets every result; the next `prime` fetches again.
    pub fn reset(&mut self) {
        self.cache.clear_all();
        self.primed = false;
    }

    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Value, FetchError>) -> bool {
        self.cache.complete(ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_activation_fetches_once() {
        let mut router = TabRouter::actuator();
        let ticket = router.activate(Endpoint::Health).expect("first activation fetches");
        assert_eq!(ticket.endpoint, Endpoint::Health);
        assert!(router.activate(Endpoint::Health).is_none());
        router.complete(ticket, Ok(json!({"status": "UP"})));
        assert!(router.activate(Endpoint::Health).is_none());
    }

    #[test]
    fn switching_between_fetched_tabs_is_free() {
        let mut router = TabRouter::actuator();
        let mut issued = 0;
        for tab in [Endpoint::Info, Endpoint::Git, Endpoint::Info, Endpoint::Git] {
            if let Some(t) = router.activate(tab) {
                issued += 1;
                router.complete(t, Ok(json!({})));
            }
        }
        assert_eq!(issued, 2);
        assert_eq!(router.active(), Endpoint::Git);
    }

    #[test]
    fn failed_tab_stays_cached_until_refresh() {
        let mut router = TabRouter::actuator();
        let t = router.activate(Endpoint::Metrics).unwrap();
        router.complete(t, Err(FetchError::Timeout));
        assert!(router.activate(Endpoint::Metrics).is_none());
        let again = router.refresh();
        assert_eq!(again.endpoint, Endpoint::Metrics);
        assert_eq!(router.result(Endpoint::Metrics), Some(&FetchResult::Pending));
    }

    #[test]
    fn refresh_touches_only_active_tab() {
        let mut router = TabRouter::actuator();
        let info = router.activate(Endpoint::Info).unwrap();
        router.complete(info, Ok(json!({"app": "x"})));
        let health = router.activate(Endpoint::Health).unwrap();
        router.complete(health, Ok(json!({"status": "UP"})));

        let ticket = router.refresh();
        assert_eq!(ticket.endpoint, Endpoint::Health);
        assert!(matches!(router.result(Endpoint::Info), Some(FetchResult::Ready(_))));
        assert_eq!(router.result(Endpoint::Health), Some(&FetchResult::Pending));
    }

    #[test]
    fn refresh_keeps_last_fetch_time() {
        let mut router = TabRouter::actuator();
        let first = router.prime().unwrap();
        router.complete(first, Ok(json!({"app": "x"})));
        let fetched_at = router.cache().updated_at(Endpoint::Info);
        assert!(fetched_at.is_some());

        let ticket = router.refresh();
        assert_eq!(router.result(Endpoint::Info), Some(&FetchResult::Pending));
        assert_eq!(router.cache().updated_at(Endpoint::Info), fetched_at);

        // The superseded ticket can no longer land.
        assert!(!router.complete(first, Ok(json!({}))));
        assert!(router.complete(ticket, Ok(json!({"app": "y"}))));
    }

    #[test]
    fn tabs_are_the_actuator_endpoints() {
        let router = TabRouter::actuator();
        assert_eq!(router.tabs(), &Endpoint::ACTUATOR[..]);
        assert_eq!(router.active(), Endpoint::Info);
    }

    #[test]
    fn prime_fetches_first_tab_once() {
        let mut router = TabRouter::actuator();
        let ticket = router.prime().unwrap();
        assert_eq!(ticket.endpoint, Endpoint::Info);
        assert!(router.prime().is_none());
        assert!(router.activate(Endpoint::Info).is_none());

        router.reset();
        assert!(router.result(Endpoint::Info).is_none());
        assert!(router.prime().is_some());
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut router = TabRouter::actuator();
        assert!(router.activate(Endpoint::SwaggerJson).is_none());
        assert_eq!(router.active(), Endpoint::Info);
    }
}
