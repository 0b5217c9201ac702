//! Character-by-character line reveal driven by an explicit pending timer.
use std::time::Duration;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Reveals one character of `line` per `interval`.
///
/// The timer only advances when ticked, so the reveal is deterministic for a
/// given sequence of deltas.
#[derive(Debug, Clone)]
pub struct Typewriter {
    line: String,
    char_count: usize,
    revealed: usize,
    interval: Duration,
    pending: Duration,
}

impl Typewriter {
    pub fn new(line: impl Into<String>, interval: Duration) -> Self {
        let line = line.into();
        Self {
            char_count: line.chars().count(),
            line,
            revealed: 0,
            interval: interval.max(MIN_INTERVAL),
            pending: Duration::ZERO,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.revealed < self.char_count
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    /// Prefix of the line revealed so far.
    pub fn revealed(&self) -> &str {
        let end = self
            .line
            .char_indices()
            .nth(self.revealed)
            .map(|(offset, _)| offset)
            .unwrap_or(self.line.len());
        &self.line[..end]
    }

    /// Fires one timer step. Returns `true` when this step finished the line.
    pub fn step(&mut self) -> bool {
        if !self.is_typing() {
            return false;
        }
        self.revealed += 1;
        !self.is_typing()
    }

    /// Advances the timer by `delta`, returning how many steps fired.
    pub fn tick(&mut self, delta: Duration) -> usize {
        if !self.is_typing() {
            return 0;
        }

        self.pending += delta;
        let mut fired = 0;
        while self.pending >= self.interval && self.is_typing() {
            self.pending -= self.interval;
            self.revealed += 1;
            fired += 1;
        }
        if !self.is_typing() {
            self.pending = Duration::ZERO;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(25);

    #[test]
    fn reveal_is_monotonic_per_step() {
        let mut typewriter = Typewriter::new("Hi", INTERVAL);
        assert_eq!(typewriter.revealed(), "");
        assert!(typewriter.is_typing());

        assert!(!typewriter.step());
        assert_eq!(typewriter.revealed(), "H");
        assert!(typewriter.is_typing());

        assert!(typewriter.step());
        assert_eq!(typewriter.revealed(), "Hi");
        assert!(!typewriter.is_typing());

        assert!(!typewriter.step());
        assert_eq!(typewriter.revealed_chars(), 2);
    }

    #[test]
    fn tick_fires_one_step_per_interval() {
        let mut typewriter = Typewriter::new("Hello", INTERVAL);

        assert_eq!(typewriter.tick(Duration::from_millis(24)), 0);
        assert_eq!(typewriter.tick(Duration::from_millis(1)), 1);
        assert_eq!(typewriter.revealed(), "H");

        assert_eq!(typewriter.tick(Duration::from_millis(60)), 2);
        assert_eq!(typewriter.revealed(), "Hel");

        assert_eq!(typewriter.tick(Duration::from_secs(5)), 2);
        assert_eq!(typewriter.revealed(), "Hello");
        assert!(!typewriter.is_typing());
        assert_eq!(typewriter.tick(INTERVAL), 0);
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let mut typewriter = Typewriter::new("héé!", INTERVAL);
        typewriter.step();
        typewriter.step();
        assert_eq!(typewriter.revealed(), "hé");
    }

    #[test]
    fn empty_line_is_never_typing() {
        let mut typewriter = Typewriter::new("", INTERVAL);
        assert!(!typewriter.is_typing());
        assert_eq!(typewriter.tick(INTERVAL), 0);
        assert_eq!(typewriter.revealed(), "");
    }
}
