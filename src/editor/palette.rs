//! Color choices offered by the edit form
//!
//! The palette is the fixed theme colors, followed by the account's own
//! color when the theme lacks it, followed by at most one pending slot for a
//! color picked during this session. A later pick replaces the pending slot.
//! No color ever appears twice.

use crate::models::{Rgb, THEME_PALETTE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    base: Vec<Rgb>,
    pending: Option<Rgb>,
    selected: Option<usize>,
}

impl ColorPalette {
    /// Palette for an account whose stored color is `current`
    ///
    /// `current` is selected; nothing is selected when it is unset.
    pub fn build(current: Rgb) -> Self {
        let mut base = THEME_PALETTE.to_vec();
        if !current.is_unset() && !base.contains(&current) {
            base.push(current);
        }
        let mut palette = Self {
            base,
            pending: None,
            selected: None,
        };
        palette.selected = palette.index_of(current);
        palette
    }

    /// Rebuild after a layout change, keeping the pending pick and selection
    pub fn rebuilt(&self, current: Rgb) -> Self {
        let mut palette = Self::build(current);
        if let Some(pending) = self.pending {
            if palette.index_of(pending).is_none() {
                palette.pending = Some(pending);
            }
        }
        palette.selected = palette.index_of(current);
        palette
    }

    pub fn len(&self) -> usize {
        self.base.len() + usize::from(self.pending.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.base
            .get(index)
            .copied()
            .or_else(|| (index == self.base.len()).then_some(self.pending).flatten())
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.base.iter().copied().chain(self.pending)
    }

    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        if color.is_unset() {
            return None;
        }
        self.colors().position(|c| c == color)
    }

    pub fn pending(&self) -> Option<Rgb> {
        self.pending
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the slot at `index`, returning its color
    pub fn select(&mut self, index: usize) -> Option<Rgb> {
        let color = self.get(index)?;
        self.selected = Some(index);
        Some(color)
    }

    /// Take a color from the custom picker and select it
    ///
    /// Returns the selected position.
    pub fn apply_pick(&mut self, color: Rgb) -> usize {
        let index = match self.index_of(color) {
            Some(index) => index,
            None => {
                self.pending = Some(color);
                self.base.len()
            }
        };
        self.selected = Some(index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_ACCOUNT_COLOR;

    fn custom(n: u32) -> Rgb {
        Rgb::new(0x010203 + n)
    }

    fn selected_color(palette: &ColorPalette) -> Option<Rgb> {
        palette.selected().and_then(|idx| palette.get(idx))
    }

    #[test]
    fn test_theme_color_is_not_duplicated() {
        let palette = ColorPalette::build(DEFAULT_ACCOUNT_COLOR);
        assert_eq!(palette.len(), THEME_PALETTE.len());
        assert_eq!(palette.selected(), Some(5));
        assert_eq!(selected_color(&palette), Some(DEFAULT_ACCOUNT_COLOR));
    }

    #[test]
    fn test_account_color_gets_its_own_slot() {
        let palette = ColorPalette::build(custom(0));
        assert_eq!(palette.len(), THEME_PALETTE.len() + 1);
        assert_eq!(palette.selected(), Some(THEME_PALETTE.len()));
    }

    #[test]
    fn test_unset_color_selects_nothing() {
        let palette = ColorPalette::build(Rgb::UNSET);
        assert_eq!(palette.len(), THEME_PALETTE.len());
        assert_eq!(palette.selected(), None);
        assert_eq!(selected_color(&palette), None);
    }

    #[test]
    fn test_repeated_pick_yields_one_entry() {
        let mut palette = ColorPalette::build(DEFAULT_ACCOUNT_COLOR);
        let first = palette.apply_pick(custom(1));
        let second = palette.apply_pick(custom(1));
        assert_eq!(first, second);
        assert_eq!(palette.len(), THEME_PALETTE.len() + 1);
    }

    #[test]
    fn test_new_pick_replaces_pending_slot() {
        let mut palette = ColorPalette::build(custom(0));
        palette.apply_pick(custom(1));
        let idx = palette.apply_pick(custom(2));

        assert_eq!(palette.len(), THEME_PALETTE.len() + 2);
        assert_eq!(palette.get(idx), Some(custom(2)));
        assert_eq!(palette.index_of(custom(1)), None);
        // The account's own color survives
        assert_eq!(palette.index_of(custom(0)), Some(THEME_PALETTE.len()));
    }

    #[test]
    fn test_pick_of_existing_color_selects_it() {
        let mut palette = ColorPalette::build(DEFAULT_ACCOUNT_COLOR);
        let idx = palette.apply_pick(THEME_PALETTE[0]);
        assert_eq!(idx, 0);
        assert_eq!(palette.pending(), None);
    }

    #[test]
    fn test_rebuild_keeps_pending_pick_selected() {
        let mut palette = ColorPalette::build(DEFAULT_ACCOUNT_COLOR);
        palette.apply_pick(custom(7));

        let rebuilt = palette.rebuilt(custom(7));
        assert_eq!(selected_color(&rebuilt), Some(custom(7)));
        assert_eq!(rebuilt.colors().filter(|c| *c == custom(7)).count(), 1);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut palette = ColorPalette::build(DEFAULT_ACCOUNT_COLOR);
        assert_eq!(palette.select(palette.len()), None);
        assert_eq!(palette.selected(), Some(5));
        assert_eq!(palette.select(0), Some(THEME_PALETTE[0]));
    }
}
