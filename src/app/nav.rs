use leptos::prelude::*;

use crate::content::SectionKey;

/// Section tab state for one mounted case-study page.
///
/// `select` always records an outgoing key and bumps the epoch, including
/// when the selected key is already current: the exit/enter animation pair
/// replays on repeat clicks, the value just doesn't change. `settle` is
/// called by the page once the transition duration has elapsed, after which
/// only the current entry stays mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionNav<K> {
    current: K,
    leaving: Option<K>,
    epoch: u64,
}

impl<K: SectionKey> Default for SectionNav<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SectionKey> SectionNav<K> {
    pub fn new() -> Self {
        Self {
            current: K::DEFAULT,
            leaving: None,
            epoch: 0,
        }
    }

    pub fn current(&self) -> K {
        self.current
    }

    /// The entry still playing its exit animation, if any.
    pub fn leaving(&self) -> Option<K> {
        self.leaving
    }

    /// Monotonic count of selections; keys the content node so a reselect
    /// remounts it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn in_transition(&self) -> bool {
        self.leaving.is_some()
    }

    pub fn select(&mut self, key: K) {
        self.leaving = Some(self.current);
        self.current = key;
        self.epoch += 1;
    }

    pub fn settle(&mut self) {
        self.leaving = None;
    }
}

#[component]
pub fn NavItem<K: SectionKey>(
    section: K,
    is_active: Signal<bool>,
    on_select: Callback<K>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_select.run(section)
            class="flex items-center gap-6 w-[216px] h-12 text-left group"
        >
            <div class=move || {
                if is_active.get() {
                    "w-12 h-12 relative transition-all duration-300 scale-110 stone-glow"
                } else {
                    "w-12 h-12 relative transition-all duration-300 opacity-60 group-hover:opacity-100"
                }
            }>
                <img src=section.stone() alt="" class="w-full h-full object-contain" />
            </div>
            <span class=move || {
                if is_active.get() {
                    "transition-all duration-200 text-black text-2xl font-bold"
                } else {
                    "transition-all duration-200 text-gray-400 text-lg font-medium"
                }
            }>{section.label()}</span>
        </button>
    }
}

/// Desktop sidebar: one stone per section, vertically centered.
#[component]
pub fn StoneRail<K: SectionKey>(
    current: Signal<K>,
    on_select: Callback<K>,
) -> impl IntoView {
    view! {
        <nav class="space-y-8">
            {K::ALL
                .iter()
                .map(|key| {
                    let section = *key;
                    view! {
                        <NavItem
                            section
                            is_active=Signal::derive(move || current.get() == section)
                            on_select
                        />
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Mobile bottom bar variant of the same navigation.
#[component]
pub fn StoneBar<K: SectionKey>(
    current: Signal<K>,
    on_select: Callback<K>,
) -> impl IntoView {
    view! {
        <div class="fixed bottom-0 left-0 right-0 z-50 bg-white/90 backdrop-blur-md border-t border-gray-200/50 px-2 py-3">
            <div class="flex justify-around">
                {K::ALL
                    .iter()
                    .map(|key| {
                        let key = *key;
                        view! {
                            <button
                                on:click=move |_| on_select.run(key)
                                class=move || {
                                    if current.get() == key {
                                        "flex flex-col items-center p-2 transition-all opacity-100 scale-110"
                                    } else {
                                        "flex flex-col items-center p-2 transition-all opacity-50"
                                    }
                                }
                            >
                                <img src=key.stone() alt="" class="w-10 h-10 object-contain" />
                                <span class="text-[9px] mt-1 capitalize font-medium">
                                    {key.label()}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKey {
        First,
        Second,
        Third,
    }

    impl SectionKey for TestKey {
        const ALL: &'static [Self] = &[TestKey::First, TestKey::Second, TestKey::Third];
        const DEFAULT: Self = TestKey::First;

        fn label(self) -> &'static str {
            match self {
                TestKey::First => "First",
                TestKey::Second => "Second",
                TestKey::Third => "Third",
            }
        }
    }

    #[test]
    fn test_default_key_on_mount() {
        let nav = SectionNav::<TestKey>::new();
        assert_eq!(nav.current(), TestKey::First);
        assert_eq!(nav.leaving(), None);
        assert!(!nav.in_transition());
    }

    #[test]
    fn test_select_is_write_then_read_consistent() {
        let mut nav = SectionNav::<TestKey>::new();
        for key in TestKey::ALL {
            nav.select(*key);
            assert_eq!(nav.current(), *key);
        }
    }

    #[test]
    fn test_select_records_outgoing_entry() {
        let mut nav = SectionNav::<TestKey>::new();
        nav.select(TestKey::Third);
        assert_eq!(nav.current(), TestKey::Third);
        assert_eq!(nav.leaving(), Some(TestKey::First));
    }

    #[test]
    fn test_reselect_replays_transition_without_changing_value() {
        let mut nav = SectionNav::<TestKey>::new();
        nav.select(TestKey::Second);
        nav.settle();
        let epoch_before = nav.epoch();

        // same key again: value unchanged, but exactly one more exit+enter
        nav.select(TestKey::Second);
        assert_eq!(nav.current(), TestKey::Second);
        assert_eq!(nav.leaving(), Some(TestKey::Second));
        assert_eq!(nav.epoch(), epoch_before + 1);
    }

    #[test]
    fn test_settle_leaves_only_current_mounted() {
        let mut nav = SectionNav::<TestKey>::new();
        nav.select(TestKey::Second);
        assert!(nav.in_transition());
        nav.settle();
        assert!(!nav.in_transition());
        assert_eq!(nav.leaving(), None);
        assert_eq!(nav.current(), TestKey::Second);
    }

    #[test]
    fn test_rapid_selection_tracks_last_write() {
        let mut nav = SectionNav::<TestKey>::new();
        nav.select(TestKey::Second);
        nav.select(TestKey::Third);
        // no settle in between: displayed key still matches current
        assert_eq!(nav.current(), TestKey::Third);
        assert_eq!(nav.leaving(), Some(TestKey::Second));
        nav.settle();
        assert_eq!(nav.current(), TestKey::Third);
    }
}
