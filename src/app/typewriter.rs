use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

/// How far along the character reveal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Idle,
    Typing,
    Done,
}

/// Character-by-character text reveal, modeled as a pure function of
/// elapsed time so tests can advance a virtual clock instead of waiting on
/// real timers. One mount runs the sequence exactly once; `Done` is
/// terminal.
#[derive(Debug, Clone)]
pub struct Typewriter {
    target: &'static str,
    start_delay: Duration,
    interval: Duration,
}

impl Typewriter {
    pub fn new(target: &'static str, start_delay: Duration, interval: Duration) -> Self {
        Self {
            target,
            start_delay,
            interval,
        }
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    fn chars_revealed(&self, elapsed: Duration) -> usize {
        if elapsed < self.start_delay {
            return 0;
        }
        let typing = elapsed - self.start_delay;
        let interval = self.interval.as_millis().max(1);
        let n = (typing.as_millis() / interval) as usize;
        n.min(self.target.chars().count())
    }

    /// The prefix of the target visible after `elapsed` time.
    pub fn revealed_at(&self, elapsed: Duration) -> String {
        self.target
            .chars()
            .take(self.chars_revealed(elapsed))
            .collect()
    }

    pub fn phase_at(&self, elapsed: Duration) -> TypewriterPhase {
        let n = self.chars_revealed(elapsed);
        if n == self.target.chars().count() {
            TypewriterPhase::Done
        } else if elapsed < self.start_delay {
            TypewriterPhase::Idle
        } else {
            TypewriterPhase::Typing
        }
    }

    /// Total time until the machine reaches `Done`.
    pub fn duration(&self) -> Duration {
        self.start_delay + self.interval * self.target.chars().count() as u32
    }
}

/// Cursor visibility with a fixed blink period, independent of the typing
/// timeline. Visible on the first half of each period.
#[derive(Debug, Clone, Copy)]
pub struct CursorBlink {
    period: Duration,
}

impl CursorBlink {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn visible_at(&self, elapsed: Duration) -> bool {
        let period = self.period.as_millis().max(1);
        (elapsed.as_millis() % period) < period / 2
    }
}

const TICK_MS: u64 = 40;
const BLINK_PERIOD_MS: u64 = 1000;

/// Banner line revealed one character at a time, with a blinking block
/// cursor. Both timers are owned by the component and cleaned up when it is
/// disposed.
#[component]
pub fn TypewriterLine(
    text: &'static str,
    #[prop(default = 800)] start_delay_ms: u64,
    #[prop(default = 55)] interval_ms: u64,
) -> impl IntoView {
    let machine = Typewriter::new(
        text,
        Duration::from_millis(start_delay_ms),
        Duration::from_millis(interval_ms),
    );
    let total = machine.duration();
    let machine = StoredValue::new(machine);

    let (elapsed_ms, set_elapsed_ms) = signal(0u64);
    let (blink_ms, set_blink_ms) = signal(0u64);

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            set_elapsed_ms.update(|ms| *ms += TICK_MS);
        },
        TICK_MS,
    );
    // reveal timer stops once the full string is shown
    Effect::new(move |_| {
        if Duration::from_millis(elapsed_ms.get()) >= total {
            pause();
        }
    });

    // cursor blink runs for as long as the component is mounted
    let _ = use_interval_fn(
        move || {
            set_blink_ms.update(|ms| *ms += TICK_MS);
        },
        TICK_MS,
    );

    let shown = Memo::new(move |_| {
        machine.with_value(|m| m.revealed_at(Duration::from_millis(elapsed_ms.get())))
    });
    let cursor_visible = Memo::new(move |_| {
        CursorBlink::new(Duration::from_millis(BLINK_PERIOD_MS))
            .visible_at(Duration::from_millis(blink_ms.get()))
    });

    view! {
        <p class="text-xs text-black/30 tracking-[3.6px] uppercase opacity-60">
            {move || shown.get()}
            <span class=move || {
                if cursor_visible.get() { "opacity-100" } else { "opacity-0" }
            }>"▍"</span>
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Typewriter {
        Typewriter::new(
            "ABC",
            Duration::from_millis(100),
            Duration::from_millis(50),
        )
    }

    #[test]
    fn test_idle_before_start_delay() {
        let m = machine();
        assert_eq!(m.phase_at(Duration::from_millis(0)), TypewriterPhase::Idle);
        assert_eq!(m.phase_at(Duration::from_millis(99)), TypewriterPhase::Idle);
        assert_eq!(m.revealed_at(Duration::from_millis(99)), "");
    }

    #[test]
    fn test_reveals_one_char_per_interval() {
        let m = machine();
        assert_eq!(m.revealed_at(Duration::from_millis(100)), "");
        assert_eq!(m.revealed_at(Duration::from_millis(150)), "A");
        assert_eq!(m.revealed_at(Duration::from_millis(200)), "AB");
        assert_eq!(m.revealed_at(Duration::from_millis(250)), "ABC");
    }

    #[test]
    fn test_done_after_start_delay_plus_len_intervals() {
        let m = machine();
        let t = Duration::from_millis(100 + 3 * 50);
        assert_eq!(m.revealed_at(t), "ABC");
        assert_eq!(m.phase_at(t), TypewriterPhase::Done);
        assert_eq!(m.duration(), t);
    }

    #[test]
    fn test_done_is_terminal() {
        let m = machine();
        for ms in [250u64, 300, 1000, 60_000] {
            let t = Duration::from_millis(ms);
            assert_eq!(m.phase_at(t), TypewriterPhase::Done);
            assert_eq!(m.revealed_at(t), "ABC");
        }
    }

    #[test]
    fn test_typing_phase_between_delay_and_done() {
        let m = machine();
        assert_eq!(
            m.phase_at(Duration::from_millis(150)),
            TypewriterPhase::Typing
        );
        assert_eq!(
            m.phase_at(Duration::from_millis(249)),
            TypewriterPhase::Typing
        );
    }

    #[test]
    fn test_multibyte_targets_reveal_whole_chars() {
        let m = Typewriter::new(
            "héllo",
            Duration::from_millis(0),
            Duration::from_millis(10),
        );
        assert_eq!(m.revealed_at(Duration::from_millis(20)), "hé");
        assert_eq!(m.revealed_at(Duration::from_millis(50)), "héllo");
    }

    #[test]
    fn test_cursor_blinks_on_its_own_period() {
        let blink = CursorBlink::new(Duration::from_millis(1000));
        assert!(blink.visible_at(Duration::from_millis(0)));
        assert!(blink.visible_at(Duration::from_millis(499)));
        assert!(!blink.visible_at(Duration::from_millis(500)));
        assert!(!blink.visible_at(Duration::from_millis(999)));
        assert!(blink.visible_at(Duration::from_millis(1000)));
    }
}
