use std::num::NonZeroUsize;

/// Matches the CSS transition on slides; steps are ignored until it elapses.
pub const TRANSITION_MS: u64 = 500;
/// Interval between automatic advances of the testimonial slider.
pub const AUTO_ADVANCE_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    fn apply(self, index: usize, len: NonZeroUsize) -> usize {
        let len = len.get();
        match self {
            Step::Next => (index + 1) % len,
            Step::Prev => (index + len - 1) % len,
        }
    }
}

/// Selected position in a fixed, non-empty list of items.
///
/// Used by every carousel and single-select panel on the page. Stepping wraps
/// around in both directions and is refused while a transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: NonZeroUsize,
    index: usize,
    transitioning: bool,
}

impl Rotation {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            transitioning: false,
        }
    }

    pub fn for_items<T>(items: &[T]) -> Option<Self> {
        NonZeroUsize::new(items.len()).map(Self::new)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Moves one item in the given direction and starts a transition.
    ///
    /// Returns `false` without moving if a transition is already running.
    pub fn step(&mut self, step: Step) -> bool {
        if self.transitioning {
            return false;
        }
        self.index = step.apply(self.index, self.len);
        self.transitioning = true;
        true
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    /// Jumps straight to `index`. Not subject to the transition guard.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len() {
            log::warn!("ignoring selection {index} of {} items", self.len());
            return false;
        }
        self.index = index;
        true
    }
}

/// Expand/collapse state where at most one item is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(len: usize) -> Rotation {
        Rotation::new(NonZeroUsize::new(len).expect("test length must be non-zero"))
    }

    fn step_settled(r: &mut Rotation, step: Step) {
        assert!(r.step(step));
        r.finish_transition();
    }

    #[test]
    fn test_next_wraps_to_first() {
        for len in 1..6 {
            let mut r = rotation(len);
            for _ in 0..len - 1 {
                step_settled(&mut r, Step::Next);
            }
            assert_eq!(r.index(), len - 1);
            step_settled(&mut r, Step::Next);
            assert_eq!(r.index(), 0);
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        for len in 1..6 {
            let mut r = rotation(len);
            step_settled(&mut r, Step::Prev);
            assert_eq!(r.index(), len - 1);
        }
    }

    #[test]
    fn test_select_marks_exactly_one_active() {
        let mut r = rotation(4);
        for i in 0..4 {
            assert!(r.select(i));
            let active = (0..r.len()).filter(|&j| r.is_active(j)).collect::<Vec<_>>();
            assert_eq!(active, vec![i]);
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut r = rotation(3);
        assert!(r.select(1));
        assert!(!r.select(3));
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn test_transition_guard() {
        let mut r = rotation(3);
        assert!(r.step(Step::Next));
        assert!(r.is_transitioning());

        // Ignored while the previous slide is still animating
        assert!(!r.step(Step::Next));
        assert!(!r.step(Step::Prev));
        assert_eq!(r.index(), 1);

        r.finish_transition();
        assert!(!r.is_transitioning());
        assert!(r.step(Step::Prev));
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn test_select_ignores_transition_guard() {
        let mut r = rotation(3);
        assert!(r.step(Step::Next));
        assert!(r.select(2));
        assert_eq!(r.index(), 2);
        assert!(r.is_transitioning());
    }

    #[test]
    fn test_for_items_refuses_empty() {
        assert!(Rotation::for_items::<u8>(&[]).is_none());
        let r = Rotation::for_items(&["a", "b"]).expect("two items");
        assert_eq!(r.len(), 2);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn test_accordion_toggle() {
        let mut a = Accordion::new(3);
        assert_eq!(a.open_item(), None);

        assert_eq!(a.toggle(1), Some(1));
        assert!(a.is_open(1));

        // Opening another closes the first
        assert_eq!(a.toggle(2), Some(2));
        assert!(!a.is_open(1));

        // Toggling the open item closes it
        assert_eq!(a.toggle(2), None);
        assert_eq!(a.open_item(), None);
    }

    #[test]
    fn test_accordion_sized_at_construction() {
        let mut a = Accordion::new(1);
        assert_eq!(a.toggle(0), Some(0));
        assert_eq!(a.toggle(1), Some(0));
        assert_eq!(Accordion::new(0).toggle(0), None);
    }

    #[test]
    fn test_accordion_ignores_out_of_range() {
        let mut a = Accordion::new(2);
        a.toggle(0);
        assert_eq!(a.toggle(5), Some(0));
    }
}
