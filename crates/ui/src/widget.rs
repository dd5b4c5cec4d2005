//! Widget item model: the kind and color of one dashboard card.

/// Every widget category a dashboard card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Battery charge level.
    Battery,
    /// Turn-by-turn directions.
    Directions,
    /// Charging session status.
    Charging,
    /// Remaining range estimate.
    Range,
    /// Static "add new item" placeholder card.
    AddNew,
}

impl WidgetKind {
    /// Every kind, in declaration order.
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Battery,
        WidgetKind::Directions,
        WidgetKind::Charging,
        WidgetKind::Range,
        WidgetKind::AddNew,
    ];

    /// Intrinsic card height in device-independent units.
    #[must_use]
    pub const fn height(self) -> u32 {
        match self {
            WidgetKind::Battery => 190,
            WidgetKind::Directions => 240,
            WidgetKind::Charging => 220,
            WidgetKind::Range => 220,
            WidgetKind::AddNew => 190,
        }
    }

    /// Short human-readable title drawn on the card.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            WidgetKind::Battery => "Battery",
            WidgetKind::Directions => "Directions",
            WidgetKind::Charging => "Charging",
            WidgetKind::Range => "Range",
            WidgetKind::AddNew => "Add new",
        }
    }

    /// Reading shown along the bottom edge of the card. Empty for the placeholder.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            WidgetKind::Battery => "82%",
            WidgetKind::Directions => "2.4 km",
            WidgetKind::Charging => "Idle",
            WidgetKind::Range => "164 km",
            WidgetKind::AddNew => "",
        }
    }

    /// Whether this is the add-new placeholder rather than a real widget.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, WidgetKind::AddNew)
    }
}

/// Display palette for widget cards. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetColor {
    /// Battery accent green.
    BatteryGreen,
    /// Range accent blue.
    RangeBlue,
    /// Neutral dark gray.
    DarkGray,
    /// Plain white (placeholder cards).
    White,
    /// Alert red.
    Red,
    /// Cyan.
    Cyan,
}

impl WidgetColor {
    /// The color as an `(r, g, b)` triple.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            WidgetColor::BatteryGreen => (0x4C, 0xD9, 0x64),
            WidgetColor::RangeBlue => (0x3D, 0x8B, 0xF2),
            WidgetColor::DarkGray => (0x44, 0x44, 0x44),
            WidgetColor::White => (0xFF, 0xFF, 0xFF),
            WidgetColor::Red => (0xFF, 0x00, 0x00),
            WidgetColor::Cyan => (0x00, 0xFF, 0xFF),
        }
    }
}

/// One dashboard card. Identity is positional (its index in the list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetItem {
    /// Widget category; fixes the card height.
    pub kind: WidgetKind,
    /// Card fill color.
    pub color: WidgetColor,
}

impl WidgetItem {
    /// Create a new item.
    #[must_use]
    pub const fn new(kind: WidgetKind, color: WidgetColor) -> Self {
        Self { kind, color }
    }

    /// Intrinsic height of this item's card.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.kind.height()
    }
}
