use winit::window::{CursorGrabMode, Window};

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Outcome of a pointer capture request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerCapture {
    /// Cursor visible and free.
    Released,
    /// Cursor hidden and kept inside the window; absolute positions still flow.
    Confined,
    /// Cursor hidden and pinned; only raw motion deltas are meaningful.
    Locked,
    /// Cursor hidden but the platform refused both grab modes.
    Unavailable,
}

/// Window handle passed to the application.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Logical window size.
    pub fn viewport(&self) -> Viewport {
        let logi: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        Viewport::new(logi.width as f32, logi.height as f32)
    }

    /// Hides and grabs the cursor (`true`) or shows and releases it (`false`).
    ///
    /// Confinement is tried first, then locking.
    pub fn set_pointer_capture(&self, capture: bool) -> PointerCapture {
        self.window.set_cursor_visible(!capture);

        if !capture {
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("failed to release cursor: {e}");
            }
            return PointerCapture::Released;
        }

        match self.window.set_cursor_grab(CursorGrabMode::Confined) {
            Ok(()) => PointerCapture::Confined,
            Err(_) => match self.window.set_cursor_grab(CursorGrabMode::Locked) {
                Ok(()) => PointerCapture::Locked,
                Err(e) => {
                    log::warn!("cursor grab unavailable: {e}");
                    PointerCapture::Unavailable
                }
            },
        }
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready
    /// [`RenderCtx`] and [`RenderTarget`], then presents the frame.
    ///
    /// Minimized windows skip the frame. Surface errors are handled through
    /// [`Gpu::handle_surface_error`]; only a fatal one returns `Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        // Clear pass, dropped before the encoder is borrowed by the target.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cubefield clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.window.viewport(),
            (size.width, size.height),
        );

        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
