//! Ordered, fixed-capacity sequence of dashboard cards.
//!
//! The list only shrinks: cards are removed by index from the rendered grid.
//! There is no insertion API; the add-new card is a static placeholder.

use heapless::Vec;

use crate::widget::{WidgetColor, WidgetItem, WidgetKind};

/// Maximum number of cards a dashboard list holds.
pub const MAX_ITEMS: usize = 32;

/// Error type for item list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItemListError {
    /// The list has reached its compile-time capacity.
    #[error("item list is full")]
    Full,
    /// The requested position does not exist.
    #[error("index {index} out of range for list of {len} items")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// List length at the time of the request.
        len: usize,
    },
}

/// A fixed-capacity, ordered list of [`WidgetItem`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList<const N: usize> {
    items: Vec<WidgetItem, N>,
}

/// The list type used by the dashboard.
pub type DashboardList = ItemList<MAX_ITEMS>;

/// Cards shown when the dashboard first opens.
const SEED: [WidgetItem; 13] = [
    WidgetItem::new(WidgetKind::Battery, WidgetColor::BatteryGreen),
    WidgetItem::new(WidgetKind::Range, WidgetColor::RangeBlue),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::DarkGray),
    WidgetItem::new(WidgetKind::AddNew, WidgetColor::White),
    WidgetItem::new(WidgetKind::Range, WidgetColor::RangeBlue),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::DarkGray),
    WidgetItem::new(WidgetKind::Battery, WidgetColor::BatteryGreen),
    WidgetItem::new(WidgetKind::Range, WidgetColor::RangeBlue),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::DarkGray),
    WidgetItem::new(WidgetKind::Range, WidgetColor::BatteryGreen),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::RangeBlue),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::Red),
    WidgetItem::new(WidgetKind::Directions, WidgetColor::Cyan),
];

impl<const N: usize> ItemList<N> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        ItemList { items: Vec::new() }
    }

    /// Build a list from a slice, preserving order.
    ///
    /// Returns `Err(ItemListError::Full)` when the slice exceeds capacity `N`.
    pub fn from_items(items: &[WidgetItem]) -> Result<Self, ItemListError> {
        Vec::from_slice(items)
            .map(|items| ItemList { items })
            .map_err(|_| ItemListError::Full)
    }

    /// The 13-card list the dashboard opens with.
    ///
    /// Returns `Err(ItemListError::Full)` when `N < 13`.
    pub fn seeded() -> Result<Self, ItemListError> {
        Self::from_items(&SEED)
    }

    /// Remove and return the item at `index`, shifting later items down by one.
    ///
    /// Returns `Err(ItemListError::OutOfRange)` when `index >= len()`; the list
    /// is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<WidgetItem, ItemListError> {
        let len = self.items.len();
        if index >= len {
            return Err(ItemListError::OutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Return a reference to the item at `index`, or `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WidgetItem> {
        self.items.get(index)
    }

    /// Number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in order.
    pub fn iter(&self) -> core::slice::Iter<'_, WidgetItem> {
        self.items.iter()
    }

    /// Borrow the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[WidgetItem] {
        &self.items
    }
}

impl<const N: usize> Default for ItemList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> IntoIterator for &'a ItemList<N> {
    type Item = &'a WidgetItem;
    type IntoIter = core::slice::Iter<'a, WidgetItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
