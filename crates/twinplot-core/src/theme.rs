// File: crates/twinplot-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome and the two series colors.

use skia_safe as skia;

/// tab:red, the primary (left axis) series color.
pub const TAB_RED: skia::Color = skia::Color::new(0xFF_D6_27_28);
/// tab:blue, the secondary (right axis) series color.
pub const TAB_BLUE: skia::Color = skia::Color::new(0xFF_1F_77_B4);

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub primary: skia::Color,
    pub secondary: skia::Color,
}

impl Theme {
    /// White figure with the tab10 red/blue pair.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 235),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            primary: TAB_RED,
            secondary: TAB_BLUE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            primary: TAB_RED,
            secondary: TAB_BLUE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
