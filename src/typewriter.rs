use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Types out each role one character at a time, then deletes it and moves on.
///
/// The buffer is tracked as a count of chars typed into the current role, so
/// [`Typewriter::text`] is always a prefix of that role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypewriterTiming,
    role: usize,
    typed: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new(roles: Vec<String>) -> Option<Self> {
        Self::with_timing(roles, TypewriterTiming::default())
    }

    pub fn with_timing(roles: Vec<String>, timing: TypewriterTiming) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            timing,
            role: 0,
            typed: 0,
            mode: Mode::Typing,
        })
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn role_index(&self) -> usize {
        self.role
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn target(&self) -> &str {
        &self.roles[self.role]
    }

    fn target_len(&self) -> usize {
        self.target().chars().count()
    }

    pub fn text(&self) -> &str {
        let target = self.target();
        let end = target
            .char_indices()
            .nth(self.typed)
            .map_or(target.len(), |(i, _)| i);
        &target[..end]
    }

    /// Advances the animation by one step and returns the delay before the next.
    pub fn tick(&mut self) -> Duration {
        match self.mode {
            Mode::Typing => {
                if self.typed < self.target_len() {
                    self.typed += 1;
                }
                if self.typed == self.target_len() {
                    self.mode = Mode::Deleting;
                    self.timing.pause
                } else {
                    self.timing.typing
                }
            }
            Mode::Deleting => {
                self.typed = self.typed.saturating_sub(1);
                if self.typed == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.mode = Mode::Typing;
                    self.timing.typing
                } else {
                    self.timing.deleting
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(rs: &[&str]) -> Vec<String> {
        rs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_refuses_empty_roles() {
        assert!(Typewriter::new(Vec::new()).is_none());
    }

    #[test]
    fn test_two_role_scenario() {
        let timing = TypewriterTiming::default();
        let mut tw = Typewriter::new(roles(&["A", "BB"])).expect("roles");
        assert_eq!(tw.text(), "");
        assert_eq!(tw.mode(), Mode::Typing);

        // "A" is complete, so the next delay is the pause
        assert_eq!(tw.tick(), timing.pause);
        assert_eq!(tw.text(), "A");
        assert_eq!(tw.mode(), Mode::Deleting);

        // Deleted back to empty, moves on to the next role
        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);

        assert_eq!(tw.tick(), timing.typing);
        assert_eq!(tw.text(), "B");
        assert_eq!(tw.tick(), timing.pause);
        assert_eq!(tw.text(), "BB");

        assert_eq!(tw.tick(), timing.deleting);
        assert_eq!(tw.text(), "B");
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.role_index(), 0);
    }

    #[test]
    fn test_buffer_never_exceeds_role() {
        let rs = roles(&["Engineer", "", "Builder", "Ünïcödé"]);
        let mut tw = Typewriter::new(rs.clone()).expect("roles");
        for _ in 0..500 {
            let role = &rs[tw.role_index()];
            assert!(tw.text().chars().count() <= role.chars().count());
            assert!(role.starts_with(tw.text()));
            tw.tick();
        }
    }

    #[test]
    fn test_cycle_advances_role() {
        let rs = roles(&["ab", "cde", "f"]);
        let mut tw = Typewriter::new(rs.clone()).expect("roles");
        for k in 0..7 {
            assert_eq!(tw.role_index(), k % rs.len());
            let len = rs[k % rs.len()].len();
            // len ticks to type, len ticks to delete
            for _ in 0..2 * len {
                tw.tick();
            }
            assert_eq!(tw.role_index(), (k + 1) % rs.len());
            assert_eq!(tw.text(), "");
        }
    }

    #[test]
    fn test_empty_role_is_skipped_through() {
        let mut tw = Typewriter::new(roles(&["", "x"])).expect("roles");
        // Empty role completes at once, then deletes to the next role
        assert_eq!(tw.tick(), tw.timing().pause);
        assert_eq!(tw.mode(), Mode::Deleting);
        tw.tick();
        assert_eq!(tw.role_index(), 1);
        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_multibyte_prefixes() {
        let mut tw = Typewriter::new(roles(&["héllo"])).expect("roles");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }
}
