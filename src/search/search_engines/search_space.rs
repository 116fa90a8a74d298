use crate::search::{Plan, State};
use segvec::{Linear, SegVec};
use std::fmt::{self, Debug, Formatter};

/// Index of a [`State`] inside a [`SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Arena owning every state a single search has created. States refer to
/// their parent by [`StateId`], so a path is recovered by following parent ids
/// back to the root.
pub struct SearchSpace {
    root_state_id: StateId,
    states: SegVec<State, Linear>,
}

impl SearchSpace {
    pub fn new(root: State) -> Self {
        debug_assert!(root.is_root(), "search space must start from a root");
        let mut states = SegVec::new();
        states.push(root);
        Self {
            root_state_id: StateId(0),
            states,
        }
    }

    pub fn insert(&mut self, state: State) -> StateId {
        let state_id = StateId(self.states.len());
        self.states.push(state);
        state_id
    }

    pub fn extract_plan(&self, goal_id: StateId) -> Plan {
        let mut plan = vec![];
        let mut current = self.get_state(goal_id);
        while let Some(parent_id) = current.parent() {
            if let Some(step) = current.incoming_move() {
                plan.push(step);
            }
            current = self.get_state(parent_id);
        }
        plan.reverse();
        Plan::new(plan)
    }

    pub fn get_root_state_id(&self) -> StateId {
        self.root_state_id
    }

    pub fn get_state(&self, state_id: StateId) -> &State {
        self.states.get(state_id.0).expect("Invalid state id")
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false, the root is inserted on creation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Debug for SearchSpace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("root_state_id", &self.root_state_id)
            .field("states", &self.states.len())
            .finish()
    }
}
