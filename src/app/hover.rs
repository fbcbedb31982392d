use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::content::ProjectKey;

/// Which project's spec card is showing on the home hub. At most one.
///
/// Deactivating does not hide the card at once: it moves into a linger
/// state so the component can keep it mounted while the cursor crosses the
/// gap between the visual and the card itself. Re-entering the card during
/// that window re-activates it; `expire` closes the window; `dismiss`
/// hides everything immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverCard {
    active: Option<ProjectKey>,
    lingering: Option<ProjectKey>,
}

impl HoverCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ProjectKey> {
        self.active
    }

    /// The card to render: the active one, or one still in its linger
    /// window.
    pub fn visible(&self) -> Option<ProjectKey> {
        self.active.or(self.lingering)
    }

    pub fn is_active(&self, key: ProjectKey) -> bool {
        self.active == Some(key)
    }

    /// Last write wins: activating B while A is showing replaces A.
    pub fn set_active(&mut self, key: Option<ProjectKey>) {
        match key {
            Some(_) => {
                self.active = key;
                self.lingering = None;
            }
            None => self.lingering = self.active.take(),
        }
    }

    /// Ends the linger window. A card re-activated in the meantime stays
    /// visible; calling this with nothing lingering is a no-op.
    pub fn expire(&mut self) {
        self.lingering = None;
    }

    /// Hides the card immediately, skipping the linger window.
    pub fn dismiss(&mut self) {
        self.active = None;
        self.lingering = None;
    }
}

/// What the card's primary ("READ MORE") affordance should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOutcome {
    Navigate,
}

/// Interaction semantics for the project visuals, fixed once at mount.
///
/// The component wires the same three DOM surfaces (hover start, hover end,
/// press) to whichever policy the input modality selected; each policy
/// decides which of them drive the card.
pub trait InteractionPolicy: Send + Sync {
    fn hover_start(&self, card: &mut HoverCard, key: ProjectKey);
    fn hover_end(&self, card: &mut HoverCard, key: ProjectKey);
    fn press(&self, card: &mut HoverCard, key: ProjectKey);
    fn primary_action(&self, card: &mut HoverCard, key: ProjectKey) -> PrimaryOutcome;
}

/// Pointer-capable devices: the card tracks the cursor.
pub struct PointerPolicy;

impl InteractionPolicy for PointerPolicy {
    fn hover_start(&self, card: &mut HoverCard, key: ProjectKey) {
        card.set_active(Some(key));
    }

    fn hover_end(&self, card: &mut HoverCard, key: ProjectKey) {
        // leave events can arrive after the enter for the next project
        if card.is_active(key) {
            card.set_active(None);
        }
    }

    fn press(&self, _card: &mut HoverCard, _key: ProjectKey) {}

    fn primary_action(&self, card: &mut HoverCard, _key: ProjectKey) -> PrimaryOutcome {
        card.dismiss();
        PrimaryOutcome::Navigate
    }
}

/// Touch-only devices: tapping a visual toggles its card. Synthetic
/// mouseenter/mouseleave fired by tap handling are ignored.
pub struct TouchPolicy;

impl InteractionPolicy for TouchPolicy {
    fn hover_start(&self, _card: &mut HoverCard, _key: ProjectKey) {}

    fn hover_end(&self, _card: &mut HoverCard, _key: ProjectKey) {}

    fn press(&self, card: &mut HoverCard, key: ProjectKey) {
        if card.is_active(key) {
            // tap-off hides at once, no linger
            card.dismiss();
        } else {
            card.set_active(Some(key));
        }
    }

    fn primary_action(&self, card: &mut HoverCard, _key: ProjectKey) -> PrimaryOutcome {
        card.dismiss();
        PrimaryOutcome::Navigate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    Pointer,
    Touch,
}

impl InputModality {
    pub fn policy(self) -> &'static dyn InteractionPolicy {
        match self {
            InputModality::Pointer => &PointerPolicy,
            InputModality::Touch => &TouchPolicy,
        }
    }
}

/// Detect the input modality once at mount. On the server the media query
/// reports false and the pointer policy is used; hydration re-runs this on
/// the client with the real answer.
pub fn detect_modality() -> InputModality {
    let coarse = use_media_query("(pointer: coarse)");
    if coarse.get_untracked() {
        InputModality::Touch
    } else {
        InputModality::Pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_card_shown_on_mount() {
        let card = HoverCard::new();
        assert_eq!(card.active(), None);
    }

    #[test]
    fn test_pointer_hover_shows_and_hides_card() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        assert_eq!(card.active(), Some(ProjectKey::Ionboard));
        PointerPolicy.hover_end(&mut card, ProjectKey::Ionboard);
        assert_eq!(card.active(), None);
    }

    #[test]
    fn test_activation_is_last_write_wins() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::BofaCloud);
        PointerPolicy.hover_start(&mut card, ProjectKey::PawpawStory);
        assert_eq!(card.active(), Some(ProjectKey::PawpawStory));
        assert!(!card.is_active(ProjectKey::BofaCloud));
    }

    #[test]
    fn test_stale_hover_end_does_not_hide_new_card() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::BofaCloud);
        PointerPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        // the leave event for the first visual arrives late
        PointerPolicy.hover_end(&mut card, ProjectKey::BofaCloud);
        assert_eq!(card.active(), Some(ProjectKey::Ionboard));
    }

    #[test]
    fn test_pointer_card_lingers_until_expiry() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        PointerPolicy.hover_end(&mut card, ProjectKey::Ionboard);
        // still rendered while the cursor crosses the gap to the card
        assert_eq!(card.active(), None);
        assert_eq!(card.visible(), Some(ProjectKey::Ionboard));
        card.expire();
        assert_eq!(card.visible(), None);
    }

    #[test]
    fn test_reentering_card_survives_expiry() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        PointerPolicy.hover_end(&mut card, ProjectKey::Ionboard);
        // cursor reaches the card before the linger window closes
        PointerPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        card.expire();
        assert_eq!(card.active(), Some(ProjectKey::Ionboard));
        assert_eq!(card.visible(), Some(ProjectKey::Ionboard));
    }

    #[test]
    fn test_switching_projects_clears_old_linger() {
        let mut card = HoverCard::new();
        PointerPolicy.hover_start(&mut card, ProjectKey::BofaCloud);
        PointerPolicy.hover_end(&mut card, ProjectKey::BofaCloud);
        PointerPolicy.hover_start(&mut card, ProjectKey::PawpawStory);
        assert_eq!(card.visible(), Some(ProjectKey::PawpawStory));
        card.expire();
        assert_eq!(card.visible(), Some(ProjectKey::PawpawStory));
    }

    #[test]
    fn test_tap_toggles_card() {
        let mut card = HoverCard::new();
        TouchPolicy.press(&mut card, ProjectKey::BofaCloud);
        assert_eq!(card.active(), Some(ProjectKey::BofaCloud));
        TouchPolicy.press(&mut card, ProjectKey::BofaCloud);
        // tap-off is immediate, no linger window
        assert_eq!(card.active(), None);
        assert_eq!(card.visible(), None);
    }

    #[test]
    fn test_tap_on_other_project_switches_card() {
        let mut card = HoverCard::new();
        TouchPolicy.press(&mut card, ProjectKey::BofaCloud);
        TouchPolicy.press(&mut card, ProjectKey::BofaWorkplace);
        assert_eq!(card.active(), Some(ProjectKey::BofaWorkplace));
    }

    #[test]
    fn test_touch_ignores_synthetic_hover() {
        let mut card = HoverCard::new();
        TouchPolicy.hover_start(&mut card, ProjectKey::Ionboard);
        assert_eq!(card.active(), None);
        TouchPolicy.press(&mut card, ProjectKey::Ionboard);
        TouchPolicy.hover_end(&mut card, ProjectKey::Ionboard);
        assert_eq!(card.active(), Some(ProjectKey::Ionboard));
    }

    #[test]
    fn test_primary_action_navigates_and_dismisses() {
        let mut card = HoverCard::new();
        TouchPolicy.press(&mut card, ProjectKey::PawpawStory);
        let outcome = TouchPolicy.primary_action(&mut card, ProjectKey::PawpawStory);
        assert_eq!(outcome, PrimaryOutcome::Navigate);
        assert_eq!(card.active(), None);
        assert_eq!(card.visible(), None);
    }
}
