use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use super::common::{
    create_overlay_ubo, overlay_pipeline, overlay_uniform_entry, InstanceBuffer, OverlayUniform, QuadBuffers,
};

/// Solid rectangle renderer for the overlay.
///
/// One instanced draw per frame; each `DrawCmd::Rect` becomes an instance
/// positioned by its bottom-left corner and size.
#[derive(Default)]
pub struct RectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    bind_group: Option<wgpu::BindGroup>,
    overlay_ubo: Option<wgpu::Buffer>,

    quad: Option<QuadBuffers>,
    instances: InstanceBuffer,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every rectangle in `draw_list` in insertion order.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        let instances: Vec<RectInstance> = draw_list
            .rects()
            .filter(|cmd| cmd.rect.is_finite() && !cmd.rect.is_empty())
            .map(|cmd| {
                let bl = cmd.rect.bottom_left();
                RectInstance {
                    origin: [bl.x, bl.y],
                    size: [cmd.rect.width(), cmd.rect.height()],
                    color: cmd.color.to_array(),
                }
            })
            .collect();

        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx.device, "cubefield rect"));
        }

        if let Some(ubo) = self.overlay_ubo.as_ref() {
            let u = OverlayUniform::for_viewport(ctx.viewport);
            ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
        }
        self.instances.upload(ctx.device, ctx.queue, "cubefield rect instances", &instances);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };
        let Some(instance_vbo) = self.instances.buffer() else { return };

        let mut rpass = target.overlay_pass("cubefield rect pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cubefield rect bgl"),
            entries: &[overlay_uniform_entry(0)],
        });

        self.pipeline = Some(overlay_pipeline(
            ctx.device,
            ctx.surface_format,
            "cubefield rect pipeline",
            include_str!("shaders/rect.wgsl"),
            &bind_group_layout,
            RectInstance::layout(),
        ));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.overlay_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.overlay_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let overlay_ubo = create_overlay_ubo(ctx.device, "cubefield rect overlay ubo");
        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cubefield rect bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: overlay_ubo.as_entire_binding(),
            }],
        }));
        self.overlay_ubo = Some(overlay_ubo);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin (bottom-left)
        2 => Float32x2, // size
        3 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RectInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
