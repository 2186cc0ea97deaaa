use std::rc::Rc;

use shared::{ListGenerations, ListKey, Mutation};
use yew::prelude::*;

use crate::services::config::app_config;
use crate::services::logging::Logger;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefreshState {
    generations: ListGenerations,
}

pub enum RefreshAction {
    Invalidate(Mutation),
}

impl Reducible for RefreshState {
    type Action = RefreshAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RefreshAction::Invalidate(mutation) => {
                let mut generations = self.generations.clone();
                generations.invalidate(&mutation);
                Rc::new(Self { generations })
            }
        }
    }
}

/// Provided once by the root shell so lists on any screen see invalidations
pub type RefreshContext = UseReducerHandle<RefreshState>;

#[derive(Clone)]
pub struct ListRefresh {
    state: Option<RefreshContext>,
    enabled: bool,
}

impl ListRefresh {
    /// Current generation of `key`; part of that list's fetch dependencies
    pub fn generation(&self, key: ListKey) -> u32 {
        self.state
            .as_ref()
            .map(|state| state.generations.generation(key))
            .unwrap_or(0)
    }

    /// Re-trigger fetches of every list the resolved write may have changed.
    /// A no-op when refetching after writes is switched off.
    pub fn after_write(&self, mutation: Mutation) {
        let Some(state) = &self.state else {
            return;
        };
        if let Some(action) = Self::invalidation(self.enabled, mutation) {
            state.dispatch(action);
        }
    }

    fn invalidation(enabled: bool, mutation: Mutation) -> Option<RefreshAction> {
        if !enabled {
            return None;
        }
        Logger::debug_with_component(
            "list-refresh",
            &format!("Invalidating {:?} after {:?}", mutation.affected_lists(), mutation),
        );
        Some(RefreshAction::Invalidate(mutation))
    }
}

#[hook]
pub fn use_list_refresh() -> ListRefresh {
    let state = use_context::<RefreshContext>();
    ListRefresh {
        state,
        enabled: app_config().refetch_after_write,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LeaveDecision;

    #[test]
    fn test_reducer_bumps_affected_generation() {
        let state = Rc::new(RefreshState::default());
        let next = state.clone().reduce(RefreshAction::Invalidate(
            Mutation::DecideLeaveRequest {
                id: "9".to_string(),
                decision: LeaveDecision::Approve,
            },
        ));

        assert_eq!(next.generations.generation(ListKey::PendingLeaveRequests), 1);
        assert_eq!(next.generations.generation(ListKey::Album), 0);
        // The previous state is left untouched
        assert_eq!(state.generations.generation(ListKey::PendingLeaveRequests), 0);
    }

    #[test]
    fn test_outside_provider_generation_is_zero_and_writes_are_ignored() {
        let refresh = ListRefresh {
            state: None,
            enabled: true,
        };
        assert_eq!(refresh.generation(ListKey::Messages), 0);
        refresh.after_write(Mutation::SendMessage);
        assert_eq!(refresh.generation(ListKey::Messages), 0);
    }

    #[test]
    fn test_disabled_refetch_produces_no_invalidation() {
        assert!(ListRefresh::invalidation(false, Mutation::ConfirmMedicineRequest { id: "m1".to_string() }).is_none());
        assert!(matches!(
            ListRefresh::invalidation(true, Mutation::SendMessage),
            Some(RefreshAction::Invalidate(Mutation::SendMessage))
        ));
    }
}
