/// Mount state of content that may animate out before unmounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    Unmounted,
    Present,
    /// Closed, but an exit animation or transition is still running.
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    Open,
    Close { animated: bool },
    AnimationEnd,
}

impl PresenceState {
    pub fn initial(open: bool) -> Self {
        if open {
            PresenceState::Present
        } else {
            PresenceState::Unmounted
        }
    }

    pub fn next(self, event: PresenceEvent) -> Self {
        match (self, event) {
            (_, PresenceEvent::Open) => PresenceState::Present,
            (PresenceState::Present, PresenceEvent::Close { animated: true }) => PresenceState::Exiting,
            (PresenceState::Exiting, PresenceEvent::Close { animated: true }) => PresenceState::Exiting,
            (_, PresenceEvent::Close { .. }) => PresenceState::Unmounted,
            (PresenceState::Exiting, PresenceEvent::AnimationEnd) => PresenceState::Unmounted,
            (state, PresenceEvent::AnimationEnd) => state,
        }
    }

    /// Whether the content should be in the rendered tree.
    pub fn is_present(&self) -> bool {
        !matches!(self, PresenceState::Unmounted)
    }
}

/// Whether a computed `animation-name` / `transition-duration` pair will
/// produce an exit animation worth waiting for.
pub fn has_exit_animation(animation_name: &str, transition_duration: &str) -> bool {
    let animated = !animation_name.is_empty() && animation_name != "none";
    let transitioned = transition_duration
        .split(',')
        .map(str::trim)
        .any(|duration| !duration.is_empty() && duration != "0s" && duration != "0ms");
    animated || transitioned
}
