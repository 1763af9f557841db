//! Typewriter text reveal and erase

/// Default delay between characters in milliseconds
pub const TYPEWRITER_INTERVAL_MS: f64 = 0.8;
/// Delay between erased characters in milliseconds
pub const ERASE_INTERVAL_MS: f64 = 5.0;

/// Erase pass started at a fixed time
#[derive(Clone, Copy, Debug, PartialEq)]
struct Erase {
    start_ms: f64,
    /// Characters on screen when erasing began
    from: usize,
}

/// Reveals a text one character at a time, then optionally erases it
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    text: String,
    start_ms: f64,
    interval_ms: f64,
    erase: Option<Erase>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, start_ms: f64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            interval_ms: TYPEWRITER_INTERVAL_MS,
            erase: None,
        }
    }

    /// Use a different per-character delay (non-positive reveals everything at once)
    pub fn with_interval(mut self, interval_ms: f64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Full text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start deleting characters from the end at `start_ms`, one every
    /// [`ERASE_INTERVAL_MS`], beginning from whatever is visible then
    pub fn erase(&mut self, start_ms: f64) {
        let from = self.visible_chars(start_ms);
        self.erase = Some(Erase { start_ms, from });
        tracing::trace!(from, start_ms, "typewriter erasing");
    }

    fn revealed(&self, now_ms: f64) -> usize {
        let total = self.text.chars().count();
        let elapsed = now_ms - self.start_ms;
        if elapsed < 0.0 {
            return 0;
        }
        if self.interval_ms <= 0.0 {
            return total;
        }
        ((elapsed / self.interval_ms).floor() as usize).min(total)
    }

    /// Erase pass that has begun by `now_ms`
    fn active_erase(&self, now_ms: f64) -> Option<Erase> {
        self.erase.filter(|e| now_ms >= e.start_ms)
    }

    /// Number of characters on screen at `now_ms`
    pub fn visible_chars(&self, now_ms: f64) -> usize {
        match self.active_erase(now_ms) {
            Some(erase) => {
                let removed = ((now_ms - erase.start_ms) / ERASE_INTERVAL_MS).floor() as usize;
                erase.from.saturating_sub(removed)
            }
            None => self.revealed(now_ms),
        }
    }

    /// Text on screen, always cut on a character boundary
    pub fn visible_text(&self, now_ms: f64) -> &str {
        let count = self.visible_chars(now_ms);
        match self.text.char_indices().nth(count) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Whole text shown and no erase under way
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.active_erase(now_ms).is_none() && self.revealed(now_ms) == self.text.chars().count()
    }

    pub fn is_erasing(&self, now_ms: f64) -> bool {
        self.active_erase(now_ms).is_some() && !self.is_erased(now_ms)
    }

    /// Erase pass complete; the page after the text may be shown.
    ///
    /// The pass ends one interval after the last character goes, when the
    /// next deletion finds nothing left.
    pub fn is_erased(&self, now_ms: f64) -> bool {
        self.active_erase(now_ms).is_some_and(|erase| {
            now_ms - erase.start_ms >= (erase.from as f64 + 1.0) * ERASE_INTERVAL_MS
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_progresses() {
        let tw = Typewriter::new("hello", 0.0).with_interval(10.0);
        assert_eq!(tw.visible_text(0.0), "");
        assert_eq!(tw.visible_text(10.0), "h");
        assert_eq!(tw.visible_text(35.0), "hel");
        assert!(!tw.is_finished(49.0));
        assert_eq!(tw.visible_text(50.0), "hello");
        assert!(tw.is_finished(50.0));
        assert_eq!(tw.visible_text(500.0), "hello");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let tw = Typewriter::new("héllo ✓", 0.0).with_interval(1.0);
        assert_eq!(tw.visible_text(2.0), "hé");
        assert_eq!(tw.visible_text(7.0), "héllo ✓");
    }

    #[test]
    fn test_default_interval() {
        let tw = Typewriter::new("abcd", 100.0);
        assert_eq!(tw.visible_chars(100.0), 0);
        assert_eq!(tw.visible_chars(101.7), 2);
        assert!(tw.is_finished(104.0));
    }

    #[test]
    fn test_empty_text_is_finished() {
        let tw = Typewriter::new("", 0.0);
        assert!(tw.is_finished(0.0));
        assert_eq!(tw.visible_text(0.0), "");
    }

    #[test]
    fn test_erase_removes_from_the_end() {
        let mut tw = Typewriter::new("abc", 0.0).with_interval(10.0);
        assert!(tw.is_finished(30.0));
        tw.erase(100.0);

        // Nothing changes before the erase starts
        assert_eq!(tw.visible_text(99.0), "abc");
        assert!(tw.is_finished(99.0));
        assert!(!tw.is_erasing(99.0));

        assert_eq!(tw.visible_text(104.0), "abc");
        assert!(tw.is_erasing(104.0));
        assert!(!tw.is_finished(104.0));
        assert_eq!(tw.visible_text(105.0), "ab");
        assert_eq!(tw.visible_text(110.0), "a");
        assert_eq!(tw.visible_text(115.0), "");
        assert!(!tw.is_erased(119.0));
        assert!(tw.is_erased(120.0));
        assert!(!tw.is_erasing(120.0));
        assert_eq!(tw.visible_text(500.0), "");
    }

    #[test]
    fn test_erase_part_way_through_reveal() {
        let mut tw = Typewriter::new("héllo", 0.0).with_interval(10.0);
        tw.erase(25.0);
        assert_eq!(tw.visible_text(25.0), "hé");
        assert_eq!(tw.visible_text(30.0), "h");
        assert!(tw.is_erased(40.0));
    }

    #[test]
    fn test_not_erased_without_erase() {
        let tw = Typewriter::new("abc", 0.0);
        assert!(!tw.is_erased(1_000.0));
        assert!(!tw.is_erasing(1_000.0));
    }
}
