//! Dashboard state container.
//!
//! Owns the item list, the loading flag and the shared remove-icon flag.
//! Each frame, the renderer reads an immutable [`CardPresentation`] per item.
//! Every observable change bumps [`DashboardState::revision`], which is
//! what subscribers watch to decide when to redraw.

use crate::item_list::{ItemList, ItemListError};
use crate::loading::{LoadingPhase, LoadingState};
use crate::widget::{WidgetColor, WidgetItem, WidgetKind};

/// How a card is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Loading placeholder.
    Shimmer,
    /// Normal content.
    Resolved,
}

/// Everything a card needs to draw itself for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPresentation {
    /// Position in the item list; also the removal target.
    pub index: usize,
    /// Widget category.
    pub kind: WidgetKind,
    /// Fill color.
    pub color: WidgetColor,
    /// Shimmer or resolved.
    pub mode: CardMode,
    /// Whether the remove badge is drawn. Never set for the placeholder.
    pub show_remove: bool,
}

impl CardPresentation {
    /// Intrinsic card height, from the kind.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.kind.height()
    }
}

/// State behind one dashboard screen.
#[derive(Debug, Clone)]
pub struct DashboardState<const N: usize> {
    items: ItemList<N>,
    loading: LoadingState,
    show_remove: bool,
    revision: u64,
}

impl<const N: usize> DashboardState<N> {
    /// Wrap an item list. Loading is idle and the remove icon hidden.
    #[must_use]
    pub const fn new(items: ItemList<N>) -> Self {
        Self {
            items,
            loading: LoadingState::new(),
            show_remove: false,
            revision: 0,
        }
    }

    /// State over the demo item list.
    pub fn seeded() -> Result<Self, ItemListError> {
        ItemList::seeded().map(Self::new)
    }

    /// The screen became visible: start loading.
    ///
    /// Returns `true` if this changed anything. A second call is a no-op.
    pub fn show(&mut self) -> bool {
        let changed = self.loading.start();
        if changed {
            self.bump();
            tracing::debug!(revision = self.revision, "dashboard shown, loading");
        }
        changed
    }

    /// Loading finished. Returns `true` if this changed anything.
    pub fn finish_loading(&mut self) -> bool {
        let changed = self.loading.finish();
        if changed {
            self.bump();
            tracing::debug!(revision = self.revision, "loading resolved");
        }
        changed
    }

    /// Long-press on the card at `index`.
    ///
    /// Toggles the shared remove-icon flag, which applies to every card at
    /// once. The placeholder has no long-press handler: pressing it returns
    /// `Ok(false)` and changes nothing.
    pub fn long_press(&mut self, index: usize) -> Result<bool, ItemListError> {
        let item = self.item(index)?;
        if item.kind.is_placeholder() {
            tracing::trace!(index, "long-press on placeholder ignored");
            return Ok(false);
        }
        self.show_remove = !self.show_remove;
        self.bump();
        tracing::debug!(index, show_remove = self.show_remove, "long-press");
        Ok(true)
    }

    /// Remove the item at `index`. Later items shift down by one.
    ///
    /// The remove-icon flag is left as it is.
    pub fn remove_item(&mut self, index: usize) -> Result<WidgetItem, ItemListError> {
        let removed = self.items.remove(index)?;
        self.bump();
        tracing::debug!(
            index,
            kind = ?removed.kind,
            remaining = self.items.len(),
            "item removed"
        );
        Ok(removed)
    }

    /// Per-item presentation for the current frame, in list order.
    pub fn presentations(&self) -> impl Iterator<Item = CardPresentation> + '_ {
        let mode = if self.loading.is_loading() {
            CardMode::Shimmer
        } else {
            CardMode::Resolved
        };
        let show_remove = self.show_remove;
        self.items
            .iter()
            .enumerate()
            .map(move |(index, item)| CardPresentation {
                index,
                kind: item.kind,
                color: item.color,
                mode,
                show_remove: show_remove && !item.kind.is_placeholder(),
            })
    }

    /// The backing item list.
    #[must_use]
    pub const fn items(&self) -> &ItemList<N> {
        &self.items
    }

    /// Whether cards currently render as shimmer.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Current loading phase.
    #[must_use]
    pub const fn loading_phase(&self) -> LoadingPhase {
        self.loading.phase()
    }

    /// Shared remove-icon flag.
    #[must_use]
    pub const fn remove_icon_visible(&self) -> bool {
        self.show_remove
    }

    /// Change counter; grows by one with every observable change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn item(&self, index: usize) -> Result<WidgetItem, ItemListError> {
        self.items
            .get(index)
            .copied()
            .ok_or(ItemListError::OutOfRange {
                index,
                len: self.items.len(),
            })
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::item_list::DashboardList;

    fn shown() -> DashboardState<32> {
        let mut state = DashboardState::seeded().unwrap();
        state.show();
        state
    }

    #[test]
    fn test_new_state_is_idle() {
        let state: DashboardState<32> = DashboardState::seeded().unwrap();
        assert_eq!(state.loading_phase(), LoadingPhase::Idle);
        assert!(!state.remove_icon_visible());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_show_renders_shimmer() {
        let state = shown();
        assert!(state.is_loading());
        assert!(state.presentations().all(|p| p.mode == CardMode::Shimmer));
    }

    #[test]
    fn test_finish_loading_resolves_every_card() {
        let mut state = shown();
        assert!(state.finish_loading());
        assert!(state.presentations().all(|p| p.mode == CardMode::Resolved));
        assert!(!state.finish_loading());
    }

    #[test]
    fn test_long_press_toggles_shared_flag() {
        let mut state = shown();
        assert!(state.long_press(0).unwrap());
        assert!(state.remove_icon_visible());

        // Every non-placeholder card shows the badge, not just the pressed one.
        for p in state.presentations() {
            assert_eq!(p.show_remove, p.kind != WidgetKind::AddNew);
        }

        assert!(state.long_press(5).unwrap());
        assert!(!state.remove_icon_visible());
    }

    #[test]
    fn test_long_press_on_placeholder_is_ignored() {
        let mut state = shown();
        let before = state.revision();
        assert!(!state.long_press(3).unwrap());
        assert!(!state.remove_icon_visible());
        assert_eq!(state.revision(), before);
    }

    #[test]
    fn test_long_press_out_of_range() {
        let mut state = shown();
        assert_eq!(
            state.long_press(40),
            Err(ItemListError::OutOfRange { index: 40, len: 13 })
        );
    }

    #[test]
    fn test_remove_item_shifts_indices() {
        let mut state = shown();
        let old_four = *state.items().get(4).unwrap();

        state.remove_item(3).unwrap();

        assert_eq!(state.items().len(), 12);
        assert_eq!(state.items().get(3), Some(&old_four));
        let indices: Vec<usize> = state.presentations().map(|p| p.index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_keeps_remove_icon_visible() {
        let mut state = shown();
        state.long_press(0).unwrap();
        state.remove_item(0).unwrap();
        assert!(state.remove_icon_visible());
    }

    #[test]
    fn test_remove_out_of_range_leaves_state_untouched() {
        let mut state = shown();
        let before = state.revision();
        assert!(state.remove_item(13).is_err());
        assert_eq!(state.items().len(), 13);
        assert_eq!(state.revision(), before);
    }

    #[test]
    fn test_revision_counts_changes() {
        let mut state = DashboardState::new(DashboardList::seeded().unwrap());
        state.show();
        state.long_press(0).unwrap();
        state.remove_item(1).unwrap();
        state.finish_loading();
        assert_eq!(state.revision(), 4);
    }

    #[test]
    fn test_empty_list_has_no_presentations() {
        let mut state = DashboardState::new(ItemList::<4>::new());
        state.show();
        assert_eq!(state.presentations().count(), 0);
    }
}
