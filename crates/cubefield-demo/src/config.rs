use std::path::PathBuf;

use winit::dpi::LogicalSize;

use cubefield_engine::coords::Vec2;
use cubefield_engine::paint::Color;
use cubefield_engine::window::RuntimeConfig;

/// Demo settings. There are no config files or flags; edit the defaults.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    /// Initial logical window size.
    pub width: f64,
    pub height: f64,

    /// Cube face image. A missing or broken file renders black cubes.
    pub texture_path: PathBuf,
    /// Fonts tried in order; the first readable one is used.
    pub font_candidates: Vec<PathBuf>,
    /// Glyph rasterization size in pixels.
    pub glyph_px: f32,
    /// Scale applied to rasterized glyphs when drawing.
    pub text_scale: f32,
    /// Baselines of the pointer and button debug lines, overlay space.
    pub pointer_text_origin: Vec2,
    pub button_text_origin: Vec2,

    pub clear_color: Color,
    pub panel_color: Color,
    pub button_color: Color,
    pub text_color: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "cubefield".to_string(),
            width: 800.0,
            height: 600.0,
            texture_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/container.png")),
            font_candidates: [
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            glyph_px: 48.0,
            text_scale: 0.5,
            pointer_text_origin: Vec2::new(25.0, 25.0),
            button_text_origin: Vec2::new(25.0, 55.0),
            clear_color: Color::rgb(0.2, 0.3, 0.3),
            panel_color: Color::rgb(0.663, 0.8, 0.95),
            button_color: Color::BLACK,
            text_color: Color::rgb(0.5, 0.8, 0.2),
        }
    }
}

impl DemoConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let cfg = DemoConfig::default();
        let rt = cfg.runtime_config();
        assert_eq!(rt.initial_size, LogicalSize::new(800.0, 600.0));
        assert_eq!(rt.title, "cubefield");
        assert_eq!(cfg.glyph_px, 48.0);
    }

    #[test]
    fn texture_path_points_into_the_crate() {
        let cfg = DemoConfig::default();
        assert!(cfg.texture_path.ends_with("assets/container.png"));
        assert!(!cfg.font_candidates.is_empty());
    }
}
