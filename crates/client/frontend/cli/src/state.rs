//! Transient UI state that lives alongside the view on screen.

/// UI-only state of the current view.
///
/// Keyed on the bridge generation: when the bridge replaces the view the
/// session starts over, while repeated renders of the same view keep it.
#[derive(Clone, Debug, Default)]
pub struct ViewSession {
    generation: Option<u64>,
    highlighted: Option<usize>,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligns the session with the view of `generation`.
    ///
    /// `reachable` lists the map nodes the player can move to, ascending; it is
    /// empty for views other than the map.
    pub fn sync(&mut self, generation: u64, reachable: &[usize]) {
        if self.generation != Some(generation) {
            self.generation = Some(generation);
            self.highlighted = reachable.first().copied();
            return;
        }

        if self
            .highlighted
            .is_some_and(|node| !reachable.contains(&node))
        {
            self.highlighted = reachable.first().copied();
        }
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Moves the highlight `step` places through `reachable`, wrapping around.
    pub fn cycle(&mut self, reachable: &[usize], step: isize) {
        if reachable.is_empty() {
            self.highlighted = None;
            return;
        }

        let len = reachable.len() as isize;
        let index = self
            .highlighted
            .and_then(|node| reachable.iter().position(|&n| n == node))
            .map_or(0, |i| (i as isize + step).rem_euclid(len));
        self.highlighted = Some(reachable[index as usize]);
    }
}
