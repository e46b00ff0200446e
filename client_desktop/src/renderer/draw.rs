use wgpu::*;

use super::resources::{InstanceData, MAX_RECT_INSTANCES};
use super::{RenderError, Renderer};
use crate::scene::Scene;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), RenderError> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Swapchain no longer matches the window; rebuild it and skip this frame
            let (width, height) = renderer.size;
            renderer.resize(width, height);
            return Ok(());
        }
        Err(SurfaceError::Timeout) => {
            log::warn!("Timed out acquiring the next frame, skipping it");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let rect_count = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload this frame's instances. Returns how many rectangles to draw.
fn update_buffers(renderer: &mut Renderer, scene: &Scene) -> u32 {
    let rects: &[InstanceData] = if scene.rects.len() > MAX_RECT_INSTANCES {
        if !renderer.warned_overflow {
            log::warn!(
                "{} rectangles in scene, drawing the first {}",
                scene.rects.len(),
                MAX_RECT_INSTANCES
            );
            renderer.warned_overflow = true;
        }
        &scene.rects[..MAX_RECT_INSTANCES]
    } else {
        &scene.rects
    };

    // HUD text only changes when the clock ticks over or someone scores
    if renderer.last_rects.as_deref() != Some(rects) {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(rects));
        renderer.last_rects = Some(rects.to_vec());
    }
    renderer
        .queue
        .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[scene.ball]));

    rects.len() as u32
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, rect_count: u32) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles and HUD text)
    let (rect, circle) = &renderer.meshes;
    if rect_count > 0 {
        pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
        pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..rect.index_count, 0, 0..rect_count);
    }

    // Circle (Ball)
    pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
    pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..circle.index_count, 0, 0..1);
}
