//! Clear-pass presenter.
//!
//! One pass that clears color and depth using the scene background and
//! presents. The scene layer stays declarative data; nothing is rasterized.

use super::Context;
use crate::math::Color;
use crate::scene::{Background, Scene};

/// Render statistics for the current frame.
#[derive(Debug, Clone, Default)]
pub struct RenderInfo {
    /// Frame number.
    pub frame: u64,
}

/// The clear-pass renderer.
pub struct Renderer {
    /// Depth texture.
    #[allow(dead_code)]
    depth_texture: Option<wgpu::Texture>,
    /// Depth texture view.
    depth_view: Option<wgpu::TextureView>,
    /// Render statistics.
    info: RenderInfo,
    /// Fallback clear color when the scene has no background.
    default_clear_color: Color,
}

impl Renderer {
    /// Create a new renderer.
    pub fn new(ctx: &Context, depth: bool) -> Self {
        let depth_texture = depth.then(|| ctx.create_depth_texture());
        let depth_view =
            depth_texture.as_ref().map(|t| t.create_view(&wgpu::TextureViewDescriptor::default()));

        Self {
            depth_texture,
            depth_view,
            info: RenderInfo::default(),
            default_clear_color: Color::new(0.1, 0.1, 0.1),
        }
    }

    /// Get render info.
    #[inline]
    pub fn info(&self) -> &RenderInfo {
        &self.info
    }

    /// Set the fallback clear color.
    #[inline]
    pub fn set_default_clear_color(&mut self, color: Color) {
        self.default_clear_color = color;
    }

    /// Handle resize.
    pub fn resize(&mut self, ctx: &Context) {
        if self.depth_texture.is_some() {
            let depth_texture = ctx.create_depth_texture();
            let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());
            self.depth_texture = Some(depth_texture);
            self.depth_view = Some(depth_view);
        }
    }

    /// Resolve the clear color for a scene.
    fn clear_color_for(&self, scene: &Scene) -> wgpu::Color {
        let color = match scene.background() {
            Background::Color(c) => *c,
            Background::None => self.default_clear_color,
        };
        wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: 1.0,
        }
    }

    /// Present one frame of the scene (clear color + depth).
    pub fn render(&mut self, ctx: &Context, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        self.info.frame += 1;

        let output = ctx.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx.create_command_encoder();

        let color_attachment = wgpu::RenderPassColorAttachment {
            view: &view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(self.clear_color_for(scene)),
                store: wgpu::StoreOp::Store,
            },
        };

        let depth_attachment = self.depth_view.as_ref().map(|depth_view| {
            wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }
        });

        {
            let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(color_attachment)],
                depth_stencil_attachment: depth_attachment,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        ctx.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
