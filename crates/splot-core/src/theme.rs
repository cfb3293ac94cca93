// File: crates/splot-core/src/theme.rs
// Summary: Color themes for figure rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Area outside the plot rectangle.
    pub paper: skia::Color,
    /// Area inside the plot rectangle.
    pub plot_background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    /// Outline drawn around surface quads.
    pub surface_edge: skia::Color,
}

impl Theme {
    /// White paper with a blue-grey plot area; pairs with the white grid in the default layout.
    pub fn plotly() -> Self {
        Self {
            name: "plotly",
            paper: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 229, 236, 246),
            axis_line: skia::Color::from_argb(255, 68, 68, 68),
            axis_label: skia::Color::from_argb(255, 42, 63, 95),
            tick: skia::Color::from_argb(255, 68, 68, 68),
            title: skia::Color::from_argb(255, 42, 63, 95),
            legend_background: skia::Color::from_argb(200, 255, 255, 255),
            surface_edge: skia::Color::from_argb(90, 30, 30, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            paper: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 28, 28, 34),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(200, 18, 18, 20),
            surface_edge: skia::Color::from_argb(90, 0, 0, 0),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            paper: skia::Color::from_argb(255, 250, 250, 252),
            plot_background: skia::Color::from_argb(255, 240, 240, 244),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_background: skia::Color::from_argb(200, 250, 250, 252),
            surface_edge: skia::Color::from_argb(80, 60, 60, 70),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::plotly() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::plotly(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to the default.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::default()
}
