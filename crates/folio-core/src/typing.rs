//! Typing effect state machines.
//!
//! The revealer never owns a timer. Each transition returns a [`Tick`]
//! describing the next callback the host must schedule; the host calls
//! [`TypingRevealer::tick`] with that tick's epoch when it fires. Starting a
//! new text, reconfiguring or stopping bumps the epoch, so a timer that the
//! host failed to cancel is recognised as stale and ignored. At most one
//! tick is live per instance.

use crate::config::typing::{
    DEFAULT_DELAY_MS, DEFAULT_SPEED_MS, MULTI_ITEM_PAUSE_MS, REPEAT_PAUSE_MS,
};
use crate::error::RevealError;

/// Timing options for a typing effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    speed_ms: u32,
    delay_ms: u32,
    repeat: bool,
}

impl TypingConfig {
    pub fn new(speed_ms: u32, delay_ms: u32, repeat: bool) -> Result<Self, RevealError> {
        if speed_ms == 0 {
            return Err(RevealError::ZeroSpeed);
        }
        Ok(Self {
            speed_ms,
            delay_ms,
            repeat,
        })
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    fn without_repeat(mut self) -> Self {
        self.repeat = false;
        self
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            delay_ms: DEFAULT_DELAY_MS,
            repeat: false,
        }
    }
}

/// A callback the host must schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Generation this tick belongs to.
    pub epoch: u64,
    /// Milliseconds to wait before calling `tick`.
    pub after_ms: u32,
}

/// Result of delivering a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belongs to a cancelled generation; nothing changed.
    Stale,
    /// One more character was revealed.
    Revealed { next: Tick },
    /// The last character was revealed. `next` is the repeat pause, if any.
    Completed { next: Option<Tick> },
    /// A repeat cycle started over from empty.
    Restarted { next: Tick },
}

impl TickOutcome {
    /// True when this tick finished a cycle; hosts fire their completion
    /// callback on it. Repeating effects complete once per cycle.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn next(&self) -> Option<Tick> {
        match *self {
            Self::Stale => None,
            Self::Revealed { next } | Self::Restarted { next } => Some(next),
            Self::Completed { next } => next,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Revealing,
    /// Completed and waiting for the repeat pause.
    Pausing,
}

// ============================================================================
// TypingRevealer
// ============================================================================

/// Reveals a string one character at a time.
#[derive(Clone, Debug)]
pub struct TypingRevealer {
    source: String,
    /// Number of characters revealed.
    revealed: usize,
    total: usize,
    complete: bool,
    phase: Phase,
    epoch: u64,
    config: TypingConfig,
}

impl TypingRevealer {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            source: String::new(),
            revealed: 0,
            total: 0,
            complete: false,
            phase: Phase::Idle,
            epoch: 0,
            config,
        }
    }

    /// Begin revealing `text` from empty, cancelling any cycle in progress.
    ///
    /// Returns the first tick, or `None` for empty text.
    pub fn start(&mut self, text: impl Into<String>) -> Option<Tick> {
        self.source = text.into();
        self.total = self.source.chars().count();
        self.restart()
    }

    /// Change timing and restart the current text.
    pub fn reconfigure(&mut self, config: TypingConfig) -> Option<Tick> {
        self.config = config;
        self.restart()
    }

    /// Cancel the cycle. Outstanding ticks become stale; revealed text stays.
    pub fn stop(&mut self) {
        self.epoch += 1;
        self.phase = Phase::Idle;
    }

    /// Deliver a scheduled tick.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if epoch != self.epoch {
            return TickOutcome::Stale;
        }

        match self.phase {
            Phase::Idle => TickOutcome::Stale,
            Phase::Revealing => {
                self.revealed = (self.revealed + 1).min(self.total);
                if self.revealed < self.total {
                    return TickOutcome::Revealed {
                        next: self.schedule(self.config.speed_ms),
                    };
                }

                self.complete = true;
                if self.config.repeat {
                    self.phase = Phase::Pausing;
                    TickOutcome::Completed {
                        next: Some(self.schedule(REPEAT_PAUSE_MS)),
                    }
                } else {
                    self.phase = Phase::Idle;
                    TickOutcome::Completed { next: None }
                }
            }
            Phase::Pausing => {
                self.revealed = 0;
                self.complete = false;
                self.phase = Phase::Revealing;
                tracing::debug!(epoch, "typing effect repeating");
                TickOutcome::Restarted {
                    next: self.schedule(self.config.delay_ms),
                }
            }
        }
    }

    /// The revealed prefix.
    pub fn displayed(&self) -> &str {
        match self.source.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.source[..byte],
            None => &self.source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// True while characters remain to be revealed in the current cycle.
    pub fn is_typing(&self) -> bool {
        self.phase == Phase::Revealing
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> TypingConfig {
        self.config
    }

    fn restart(&mut self) -> Option<Tick> {
        self.epoch += 1;
        self.revealed = 0;
        self.complete = false;
        if self.total == 0 {
            self.phase = Phase::Idle;
            return None;
        }
        self.phase = Phase::Revealing;
        Some(self.schedule(self.config.delay_ms))
    }

    fn schedule(&self, after_ms: u32) -> Tick {
        Tick {
            epoch: self.epoch,
            after_ms,
        }
    }
}

impl Default for TypingRevealer {
    fn default() -> Self {
        Self::new(TypingConfig::default())
    }
}

// ============================================================================
// MultiTyping
// ============================================================================

/// Result of delivering a tick to a [`MultiTyping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiOutcome {
    Stale,
    /// Progress within the current item.
    Progress { next: Option<Tick> },
    /// The current item finished; `next` is the pause before the next one.
    ItemDone { index: usize, next: Option<Tick> },
    /// The next item started.
    Advanced { index: usize, next: Option<Tick> },
}

/// Work a [`MultiTyping`] tick stands for, besides revealing characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    None,
    /// Pause between items is running; the tick starts the next one.
    Advance,
    /// The current item is empty; the tick reports it done.
    EmptyItem,
}

/// Types several strings one after another, pausing between them.
#[derive(Clone, Debug)]
pub struct MultiTyping {
    texts: Vec<String>,
    index: usize,
    finished: Vec<String>,
    revealer: TypingRevealer,
    pending: Pending,
}

impl MultiTyping {
    /// Items never repeat individually; `config.repeat` is ignored.
    pub fn new(texts: Vec<String>, config: TypingConfig) -> Self {
        Self {
            texts,
            index: 0,
            finished: Vec::new(),
            revealer: TypingRevealer::new(config.without_repeat()),
            pending: Pending::None,
        }
    }

    pub fn start(&mut self) -> Option<Tick> {
        self.index = 0;
        self.finished.clear();
        self.pending = Pending::None;
        if self.texts.is_empty() {
            self.revealer.start("");
            return None;
        }
        self.begin_item()
    }

    pub fn tick(&mut self, epoch: u64) -> MultiOutcome {
        if self.pending != Pending::None {
            if epoch != self.revealer.epoch() {
                return MultiOutcome::Stale;
            }
            let pending = std::mem::replace(&mut self.pending, Pending::None);
            if pending == Pending::Advance {
                self.index += 1;
                return MultiOutcome::Advanced {
                    index: self.index,
                    next: self.begin_item(),
                };
            }
            let next = self.finish_item();
            return MultiOutcome::ItemDone {
                index: self.index,
                next,
            };
        }

        match self.revealer.tick(epoch) {
            TickOutcome::Stale => MultiOutcome::Stale,
            TickOutcome::Completed { .. } => {
                let next = self.finish_item();
                MultiOutcome::ItemDone {
                    index: self.index,
                    next,
                }
            }
            other => MultiOutcome::Progress { next: other.next() },
        }
    }

    /// Items fully typed so far.
    pub fn finished(&self) -> &[String] {
        &self.finished
    }

    /// Revealed prefix of the item in progress.
    pub fn current_text(&self) -> &str {
        self.revealer.displayed()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// True once the last item is fully typed.
    pub fn is_complete(&self) -> bool {
        !self.texts.is_empty() && self.finished.len() == self.texts.len()
    }

    pub fn stop(&mut self) {
        self.pending = Pending::None;
        self.revealer.stop();
    }

    /// Start typing `texts[index]`.
    ///
    /// An empty item has nothing to reveal; it is reported done on the
    /// tick after its start delay.
    fn begin_item(&mut self) -> Option<Tick> {
        let text = self.texts[self.index].clone();
        match self.revealer.start(text) {
            Some(tick) => Some(tick),
            None => {
                self.pending = Pending::EmptyItem;
                Some(Tick {
                    epoch: self.revealer.epoch(),
                    after_ms: self.revealer.config().delay_ms(),
                })
            }
        }
    }

    /// Record the current item and schedule the pause before the next one.
    fn finish_item(&mut self) -> Option<Tick> {
        self.finished.push(self.texts[self.index].clone());
        if self.index + 1 < self.texts.len() {
            self.pending = Pending::Advance;
            Some(Tick {
                epoch: self.revealer.epoch(),
                after_ms: MULTI_ITEM_PAUSE_MS,
            })
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(speed: u32, delay: u32, repeat: bool) -> TypingConfig {
        TypingConfig::new(speed, delay, repeat).unwrap()
    }

    #[test]
    fn test_reveal_two_characters() {
        let mut r = TypingRevealer::new(config(10, 0, false));
        let first = r.start("AB").unwrap();
        assert_eq!(first.after_ms, 0);
        assert_eq!(r.displayed(), "");
        assert!(r.is_typing());

        let out = r.tick(first.epoch);
        assert_eq!(r.displayed(), "A");
        assert!(!r.is_complete());
        let next = out.next().unwrap();
        assert_eq!(next.after_ms, 10);

        assert_eq!(r.tick(next.epoch), TickOutcome::Completed { next: None });
        assert_eq!(r.displayed(), "AB");
        assert!(r.is_complete());
        assert!(!r.is_typing());

        assert_eq!(r.tick(next.epoch), TickOutcome::Stale);
        assert_eq!(r.displayed(), "AB");
    }

    #[test]
    fn test_delay_applies_to_first_tick() {
        let mut r = TypingRevealer::new(config(100, 500, false));
        assert_eq!(r.start("Jyothi").unwrap().after_ms, 500);
    }

    #[test]
    fn test_restart_cancels_previous_cycle() {
        let mut r = TypingRevealer::new(config(10, 0, false));
        let old = r.start("hello").unwrap();
        r.tick(old.epoch);
        assert_eq!(r.displayed(), "h");

        let new = r.start("world").unwrap();
        assert_eq!(r.displayed(), "");
        assert_eq!(r.tick(old.epoch), TickOutcome::Stale);
        assert_eq!(r.displayed(), "");
        r.tick(new.epoch);
        assert_eq!(r.displayed(), "w");
    }

    #[test]
    fn test_reconfigure_restarts() {
        let mut r = TypingRevealer::new(config(10, 0, false));
        let old = r.start("abc").unwrap();
        r.tick(old.epoch);
        let new = r.reconfigure(config(20, 5, false)).unwrap();
        assert_eq!(new.after_ms, 5);
        assert_eq!(r.revealed_len(), 0);
        assert_eq!(r.tick(old.epoch), TickOutcome::Stale);
    }

    #[test]
    fn test_stop_makes_ticks_stale() {
        let mut r = TypingRevealer::default();
        let t = r.start("abc").unwrap();
        r.stop();
        assert_eq!(r.tick(t.epoch), TickOutcome::Stale);
        assert!(!r.is_typing());
    }

    #[test]
    fn test_repeat_restarts_after_pause() {
        let mut r = TypingRevealer::new(config(10, 3, true));
        let t = r.start("a").unwrap();
        let done = r.tick(t.epoch);
        let pause = done.next().unwrap();
        assert_eq!(pause.after_ms, REPEAT_PAUSE_MS);
        assert!(r.is_complete());

        let restarted = r.tick(pause.epoch);
        assert!(matches!(restarted, TickOutcome::Restarted { .. }));
        assert_eq!(restarted.next().unwrap().after_ms, 3);
        assert_eq!(r.displayed(), "");
        assert!(!r.is_complete());
    }

    #[test]
    fn test_completion_reported_every_repeat_cycle() {
        let mut r = TypingRevealer::new(config(1, 0, true));
        let mut tick = r.start("ab");
        let mut completions = 0;
        for _ in 0..9 {
            let Some(t) = tick else { break };
            let outcome = r.tick(t.epoch);
            if outcome.is_completed() {
                completions += 1;
                assert_eq!(r.displayed(), "ab");
            }
            tick = outcome.next();
        }
        // reveal, reveal+complete, restart: three ticks per cycle
        assert_eq!(completions, 3);
        assert!(!TickOutcome::Stale.is_completed());
    }

    #[test]
    fn test_empty_text_is_idle() {
        let mut r = TypingRevealer::default();
        assert!(r.start("").is_none());
        assert!(!r.is_typing());
        assert!(!r.is_complete());
    }

    #[test]
    fn test_unicode_units() {
        let mut r = TypingRevealer::new(config(1, 0, false));
        let mut tick = r.start("✓é");
        let mut seen = Vec::new();
        while let Some(t) = tick {
            tick = r.tick(t.epoch).next();
            seen.push(r.displayed().to_string());
        }
        assert_eq!(seen, vec!["✓", "✓é"]);
        assert_eq!(r.revealed_len(), 2);
    }

    #[test]
    fn test_zero_speed_rejected() {
        assert_eq!(TypingConfig::new(0, 0, false), Err(RevealError::ZeroSpeed));
        assert_eq!(TypingConfig::default().speed_ms(), DEFAULT_SPEED_MS);
    }

    #[test]
    fn test_multi_typing_sequence() {
        let mut m = MultiTyping::new(vec!["ab".into(), "c".into()], config(1, 0, true));
        let mut tick = m.start();
        let mut pauses = Vec::new();
        while let Some(t) = tick {
            let out = m.tick(t.epoch);
            if let MultiOutcome::ItemDone { next: Some(p), .. } = out {
                pauses.push(p.after_ms);
            }
            tick = match out {
                MultiOutcome::Stale => None,
                MultiOutcome::Progress { next }
                | MultiOutcome::ItemDone { next, .. }
                | MultiOutcome::Advanced { next, .. } => next,
            };
        }
        assert_eq!(pauses, vec![MULTI_ITEM_PAUSE_MS]);
        assert_eq!(m.finished(), &["ab".to_string(), "c".to_string()]);
        assert_eq!(m.current_index(), 1);
        assert!(m.is_complete());
    }

    #[test]
    fn test_multi_typing_reports_empty_items_done() {
        let mut m = MultiTyping::new(vec!["".into(), "x".into()], config(1, 0, false));
        let first = m.start().unwrap();
        assert!(m.finished().is_empty());

        let MultiOutcome::ItemDone { index: 0, next: Some(pause) } = m.tick(first.epoch) else {
            panic!("expected empty item done");
        };
        assert_eq!(pause.after_ms, MULTI_ITEM_PAUSE_MS);
        assert_eq!(m.finished(), &["".to_string()]);

        let MultiOutcome::Advanced { index: 1, next } = m.tick(pause.epoch) else {
            panic!("expected advance");
        };
        let done = m.tick(next.unwrap().epoch);
        assert_eq!(done, MultiOutcome::ItemDone { index: 1, next: None });
        assert!(m.is_complete());
    }

    #[test]
    fn test_multi_typing_blank_middle_item() {
        let texts = vec!["a".to_string(), String::new(), "b".to_string()];
        let mut m = MultiTyping::new(texts.clone(), config(1, 0, false));
        let mut tick = m.start();
        let mut done = Vec::new();
        while let Some(t) = tick {
            let out = m.tick(t.epoch);
            if let MultiOutcome::ItemDone { index, .. } = out {
                done.push(index);
            }
            tick = match out {
                MultiOutcome::Stale => None,
                MultiOutcome::Progress { next }
                | MultiOutcome::ItemDone { next, .. }
                | MultiOutcome::Advanced { next, .. } => next,
            };
        }
        assert_eq!(done, vec![0, 1, 2]);
        assert_eq!(m.finished(), texts.as_slice());
        assert!(m.is_complete());
    }

    #[test]
    fn test_multi_typing_stale_tick_during_empty_item() {
        let mut m = MultiTyping::new(vec!["".into()], config(1, 0, false));
        let t = m.start().unwrap();
        assert_eq!(m.tick(t.epoch + 1), MultiOutcome::Stale);
        assert!(!m.is_complete());
        assert_eq!(m.tick(t.epoch), MultiOutcome::ItemDone { index: 0, next: None });
        assert!(m.is_complete());
    }

    #[test]
    fn test_multi_typing_stop() {
        let mut m = MultiTyping::new(vec!["ab".into()], TypingConfig::default());
        let t = m.start().unwrap();
        m.stop();
        assert_eq!(m.tick(t.epoch), MultiOutcome::Stale);
        assert!(!m.is_complete());
    }
}
