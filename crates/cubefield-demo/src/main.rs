use anyhow::{Context, Result};

use cubefield_demo::{CubefieldApp, DemoConfig};
use cubefield_engine::assets::DecodedImage;
use cubefield_engine::device::GpuInit;
use cubefield_engine::logging::{init_logging, LoggingConfig};
use cubefield_engine::text::{FontFace, GlyphAtlas};
use cubefield_engine::window::Runtime;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();

    let font = FontFace::load_first(&config.font_candidates).context("no usable font face")?;
    let atlas = GlyphAtlas::build(&font, config.glyph_px, (0u8..128).map(char::from));

    // Flipped so texture v = 0 is the bottom of the picture.
    let texture = match DecodedImage::from_file(&config.texture_path, true) {
        Ok(image) => Some(image),
        Err(e) => {
            log::error!("{e:#}; cubes will render black");
            None
        }
    };

    let runtime_config = config.runtime_config();
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(runtime_config, gpu_init, CubefieldApp::new(config, atlas, texture))
}
