use cubefield_engine::assets::DecodedImage;
use cubefield_engine::core::{App as EngineApp, AppControl, FrameCtx, PointerCapture, WindowCtx};
use cubefield_engine::coords::{Vec2, Viewport};
use cubefield_engine::input::{InputEvent, InputFrame, InputState, Key, MouseButton, PointerMoveEvent};
use cubefield_engine::render::{CameraMatrices, CubeRenderer, RectRenderer, TextRenderer};
use cubefield_engine::scene::DrawList;
use cubefield_engine::text::GlyphAtlas;

use crate::config::DemoConfig;
use crate::state::{DemoState, FrameInput, MotionSource};

/// Engine-facing application: feeds input into `DemoState` and draws it.
pub struct CubefieldApp {
    config: DemoConfig,
    state: DemoState,

    atlas: GlyphAtlas,
    draw_list: DrawList,

    cube_renderer: CubeRenderer,
    rect_renderer: RectRenderer,
    text_renderer: TextRenderer,

    /// Last capture result; `None` until the first frame applies it.
    capture: Option<PointerCapture>,
}

impl CubefieldApp {
    /// `texture` is the cube face image; `None` renders black cubes.
    pub fn new(config: DemoConfig, atlas: GlyphAtlas, texture: Option<DecodedImage>) -> Self {
        let state = DemoState::new(Viewport::new(config.width as f32, config.height as f32));

        let mut cube_renderer = CubeRenderer::new();
        if let Some(image) = texture {
            cube_renderer.set_texture(image);
        }

        Self {
            config,
            state,
            atlas,
            draw_list: DrawList::new(),
            cube_renderer,
            rect_renderer: RectRenderer::new(),
            text_renderer: TextRenderer::new(),
            capture: None,
        }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    fn apply_capture(&mut self, window: &WindowCtx<'_>) {
        let capture = window.set_pointer_capture(self.state.mode().captures_pointer());
        log::debug!("pointer capture: {capture:?}");

        self.state.set_motion_source(motion_source(capture));
        self.capture = Some(capture);
    }

    fn build_overlay(&mut self) {
        self.draw_list.clear();
        if !self.state.mode().is_overlay() {
            return;
        }

        let cfg = &self.config;
        let layout = self.state.layout();
        self.draw_list.push_rect(layout.panel, cfg.panel_color);
        self.draw_list.push_rect(layout.button, cfg.button_color);

        let [pointer, button] = self.state.debug_lines();
        self.draw_list.push_text(pointer, cfg.pointer_text_origin, cfg.text_scale, cfg.text_color);
        self.draw_list.push_text(button, cfg.button_text_origin, cfg.text_scale, cfg.text_color);
    }
}

/// Picks where look offsets come from for a capture result.
///
/// A confined cursor still stops at the window edge, so any grab reads raw
/// deltas.
fn motion_source(capture: PointerCapture) -> MotionSource {
    match capture {
        PointerCapture::Confined | PointerCapture::Locked => MotionSource::Relative,
        PointerCapture::Released | PointerCapture::Unavailable => MotionSource::Absolute,
    }
}

/// Reduces engine input to what the demo polls each frame.
///
/// A press and release inside one frame still counts as held.
fn frame_input(input: &InputState, frame: &InputFrame, dt: f32) -> FrameInput {
    let key = |k: Key| input.key_down(k) || frame.keys_pressed.contains(&k);

    FrameInput {
        dt,
        menu_held: key(Key::M),
        debug_held: key(Key::X),
        quit_held: key(Key::Escape),
        primary_held: input.button_down(MouseButton::Left)
            || frame.buttons_pressed.contains(&MouseButton::Left),
        forward_held: key(Key::W),
        backward_held: key(Key::S),
        left_held: key(Key::A),
        right_held: key(Key::D),
        pointer_positions: frame
            .events
            .iter()
            .filter_map(|ev| match ev {
                InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                    Some(Vec2::new(*x, *y))
                }
                _ => None,
            })
            .collect(),
        raw_motion: frame.pointer_delta,
        scroll: frame.scroll_delta.y,
    }
}

impl EngineApp for CubefieldApp {
    fn on_resize(&mut self, viewport: Viewport) {
        // Minimized windows report zero; keep the last usable layout.
        if viewport.is_valid() {
            self.state.resize(viewport);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.capture.is_none() {
            let info = ctx.gpu.adapter_info();
            log::info!(
                "first frame on {} ({:?}), surface {:?}",
                info.name,
                info.backend,
                ctx.gpu.surface_format()
            );
            self.apply_capture(&ctx.window);
        }

        let input = frame_input(ctx.input, ctx.input_frame, ctx.time.dt);
        let outcome = self.state.update(&input);

        if outcome.quit {
            log::info!("quit requested");
            ctx.runtime.exit();
            return AppControl::Continue;
        }
        if outcome.mode_changed.is_some() {
            self.apply_capture(&ctx.window);
        }

        self.build_overlay();

        let (projection, view) = self.state.camera_matrices();
        let camera = CameraMatrices { projection, view };
        let models = self.state.cubes().models();

        let dl = &self.draw_list;
        let atlas = &self.atlas;
        let r_cube = &mut self.cube_renderer;
        let r_rect = &mut self.rect_renderer;
        let r_text = &mut self.text_renderer;

        ctx.render(self.config.clear_color, |rctx, target| {
            r_cube.render(rctx, target, &camera, &models);
            r_rect.render(rctx, target, dl);
            r_text.render(rctx, target, dl, atlas);
        })
    }
}
