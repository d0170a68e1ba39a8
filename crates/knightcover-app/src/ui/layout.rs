use eframe::egui::Vec2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
    pub(crate) padding: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.20);
    pub(crate) const PADDING_FACTOR: Vec2 = Vec2::new(0.20, 0.30);

    /// Smallest cell size, in points, at which glyphs stay legible.
    pub(crate) const MIN_CELL_SIZE: f32 = 8.0;
    pub(crate) const MAX_CELL_SIZE: f32 = 72.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        let padding = Vec2::splat(cell_size) * Self::PADDING_FACTOR;
        Self {
            cell_size,
            spacing,
            padding,
        }
    }

    /// Picks the largest cell size at which `units` fit into `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let by_width = available.x / units.width.max(1.0);
        let by_height = available.y / units.height.max(1.0);
        let cell_size = by_width
            .min(by_height)
            .clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        Self::new(cell_size)
    }
}

/// Size of a component measured in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Stacks `other` below `self`.
    #[must_use]
    pub(crate) fn stack(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height + other.height)
    }
}
