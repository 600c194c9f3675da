//! Typewriter headline: types a phrase one character at a time, holds it,
//! deletes it, then moves on to the next phrase, forever.

#[cfg(target_arch = "wasm32")]
pub mod render;

use crate::config::TypewriterConfig;

/// Text to display after a tick and the delay before the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct PhraseCycle {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Characters of the current phrase on screen.
    char_index: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    gap_ms: u32,
}

impl PhraseCycle {
    /// `None` when there is nothing to type.
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            gap_ms: config.gap_ms,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> Step {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        let mut delay_ms;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            delay_ms = self.delete_ms;
        } else {
            self.char_index = (self.char_index + 1).min(len);
            delay_ms = self.type_ms;
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = self.hold_ms;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.gap_ms;
        }

        Step { text, delay_ms }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_full_cycle_advances_phrase_index(
            phrases in prop::collection::vec("[a-z ]{0,12}", 1..6),
            start in 0usize..6,
        ) {
            let n = phrases.len();
            let start = start % n;
            let mut cycle = PhraseCycle::new(&TypewriterConfig {
                phrases: phrases.clone(),
                ..TypewriterConfig::default()
            })
            .unwrap();

            // Skip ahead to the start of phrase `start`.
            while cycle.phrase_index() != start {
                cycle.tick();
            }

            let len = phrases[start].chars().count();
            let ticks = 2 * len.max(1);
            for _ in 0..ticks - 1 {
                cycle.tick();
                prop_assert_eq!(cycle.phrase_index(), start);
            }
            cycle.tick();
            prop_assert_eq!(cycle.phrase_index(), (start + 1) % n);
            prop_assert_eq!(cycle.char_index(), 0);
        }

        #[test]
        fn prop_text_is_always_a_prefix(
            phrases in prop::collection::vec("[a-zé ]{0,8}", 1..4),
            ticks in 0usize..80,
        ) {
            let mut cycle = PhraseCycle::new(&TypewriterConfig {
                phrases: phrases.clone(),
                ..TypewriterConfig::default()
            })
            .unwrap();
            for _ in 0..ticks {
                let before = cycle.phrase_index();
                let step = cycle.tick();
                prop_assert!(phrases[before].starts_with(&step.text));
            }
        }
    }
}
