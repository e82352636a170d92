// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared palette, spacing and sizing values for the viewer chrome.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Fixed component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_peek::ui::design_tokens::{palette, sizing, spacing};

let chrome = sizing::TOOLBAR_HEIGHT + sizing::STATUS_BAR_HEIGHT;
assert!(chrome > spacing::MD);
let _ = palette::VIEWER_DARK;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Area behind the image.
    pub const VIEWER_DARK: Color = Color::from_rgb(0.12, 0.12, 0.12);
    pub const VIEWER_LIGHT: Color = Color::from_rgb(0.94, 0.94, 0.94);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 32.0;

    /// The toolbar and status bar have fixed heights so the viewer pane
    /// size can be derived from the window size.
    pub const TOOLBAR_HEIGHT: f32 = 48.0;
    pub const STATUS_BAR_HEIGHT: f32 = 28.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Status bar text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(sizing::TOOLBAR_HEIGHT >= sizing::BUTTON_HEIGHT + spacing::XS);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }
}
