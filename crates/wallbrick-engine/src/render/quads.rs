use bytemuck::{Pod, Zeroable};

use super::color::ColorRgba;
use super::ctx::{RenderCtx, RenderTarget};

const WORKGROUP: u32 = 8;

/// One packed quad, eight 32-bit signed integers.
///
/// Wire layout consumed by the compute shader: `(x, y, w, h)` in window
/// pixels followed by `(r, g, b, a)` with channels in `{0, 1}`, expanded to
/// float output by the shader. Records with `a == 0` produce no pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct QuadRecord {
    pub rect: [i32; 4],
    pub color: [i32; 4],
}

impl QuadRecord {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32, color: [i32; 4]) -> Self {
        Self {
            rect: [x, y, w, h],
            color,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Params {
    size: [u32; 2],
    quad_count: u32,
    _pad: u32,
    clear: [f32; 4],
}

/// Compute-based quad renderer.
///
/// Owns a fixed-resolution `rgba8unorm` storage target. Per frame: upload
/// records to a storage buffer, clear the target with one compute dispatch,
/// rasterize one invocation layer per record with a second dispatch, then
/// blit the target to the surface with a fullscreen triangle.
pub struct QuadRenderer {
    width: u32,
    height: u32,

    target_view: Option<wgpu::TextureView>,

    clear_pipeline: Option<wgpu::ComputePipeline>,
    quad_pipeline: Option<wgpu::ComputePipeline>,
    compute_bgl: Option<wgpu::BindGroupLayout>,
    compute_bind_group: Option<wgpu::BindGroup>,

    blit_format: Option<wgpu::TextureFormat>,
    blit_pipeline: Option<wgpu::RenderPipeline>,
    blit_bgl: Option<wgpu::BindGroupLayout>,
    blit_bind_group: Option<wgpu::BindGroup>,
    sampler: Option<wgpu::Sampler>,

    params_ubo: Option<wgpu::Buffer>,
    records_buf: Option<wgpu::Buffer>,
    records_capacity: usize,
}

impl QuadRenderer {
    /// Creates a renderer with a fixed target resolution in pixels.
    ///
    /// The target is the game's coordinate space; the blit stretches it to
    /// whatever size the surface currently has.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            target_view: None,
            clear_pipeline: None,
            quad_pipeline: None,
            compute_bgl: None,
            compute_bind_group: None,
            blit_format: None,
            blit_pipeline: None,
            blit_bgl: None,
            blit_bind_group: None,
            sampler: None,
            params_ubo: None,
            records_buf: None,
            records_capacity: 0,
        }
    }

    /// Renders `records` into `target`.
    ///
    /// Every texel is written each frame (clear then quads), so no
    /// frame-to-frame state accumulates in the offscreen target.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        records: &[QuadRecord],
        clear: ColorRgba,
    ) {
        self.ensure_target(ctx);
        self.ensure_compute_pipelines(ctx);
        self.ensure_blit_pipeline(ctx);
        self.ensure_records_capacity(ctx, records.len());
        self.ensure_bind_groups(ctx);

        let params = Params {
            size: [self.width, self.height],
            quad_count: records.len() as u32,
            _pad: 0,
            clear: [clear.r, clear.g, clear.b, clear.a],
        };

        let Some(params_ubo) = self.params_ubo.as_ref() else { return };
        ctx.queue.write_buffer(params_ubo, 0, bytemuck::bytes_of(&params));

        if !records.is_empty() {
            let Some(records_buf) = self.records_buf.as_ref() else { return };
            ctx.queue
                .write_buffer(records_buf, 0, bytemuck::cast_slice(records));
        }

        let Some(clear_pipeline) = self.clear_pipeline.as_ref() else { return };
        let Some(quad_pipeline) = self.quad_pipeline.as_ref() else { return };
        let Some(compute_bind_group) = self.compute_bind_group.as_ref() else { return };
        let Some(blit_pipeline) = self.blit_pipeline.as_ref() else { return };
        let Some(blit_bind_group) = self.blit_bind_group.as_ref() else { return };

        let groups_x = self.width.div_ceil(WORKGROUP);
        let groups_y = self.height.div_ceil(WORKGROUP);

        // Dispatches in one pass are ordered, so the quad pass sees the
        // cleared target.
        {
            let mut cpass = target
                .encoder
                .begin_compute_pass(&wgpu::ComputePassDescriptor {
                    label: Some("wallbrick quad compute"),
                    timestamp_writes: None,
                });

            cpass.set_pipeline(clear_pipeline);
            cpass.set_bind_group(0, compute_bind_group, &[]);
            cpass.dispatch_workgroups(groups_x, groups_y, 1);

            if !records.is_empty() {
                cpass.set_pipeline(quad_pipeline);
                cpass.dispatch_workgroups(groups_x, groups_y, records.len() as u32);
            }
        }

        let mut rpass = target
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("wallbrick blit"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

        rpass.set_pipeline(blit_pipeline);
        rpass.set_bind_group(0, blit_bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn ensure_target(&mut self, ctx: &RenderCtx<'_>) {
        if self.target_view.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("wallbrick quad target"),
            size: wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        self.target_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
    }

    fn ensure_compute_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.clear_pipeline.is_some() && self.quad_pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/quads.wgsl");
        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("wallbrick quads shader"),
                source: wgpu::ShaderSource::Wgsl(shader_src.into()),
            });

        let bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("wallbrick quad compute bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(params_min_binding_size()),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::StorageTexture {
                            access: wgpu::StorageTextureAccess::WriteOnly,
                            format: wgpu::TextureFormat::Rgba8Unorm,
                            view_dimension: wgpu::TextureViewDimension::D2,
                        },
                        count: None,
                    },
                ],
            });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("wallbrick quad compute layout"),
                bind_group_layouts: &[&bgl],
                immediate_size: 0,
            });

        let clear_pipeline =
            ctx.device
                .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                    label: Some("wallbrick clear pipeline"),
                    layout: Some(&layout),
                    module: &shader,
                    entry_point: Some("cs_clear"),
                    compilation_options: Default::default(),
                    cache: None,
                });

        let quad_pipeline =
            ctx.device
                .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                    label: Some("wallbrick quad pipeline"),
                    layout: Some(&layout),
                    module: &shader,
                    entry_point: Some("cs_quads"),
                    compilation_options: Default::default(),
                    cache: None,
                });

        self.clear_pipeline = Some(clear_pipeline);
        self.quad_pipeline = Some(quad_pipeline);
        self.compute_bgl = Some(bgl);
        self.compute_bind_group = None;
    }

    fn ensure_blit_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.blit_format == Some(ctx.surface_format) && self.blit_pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/blit.wgsl");
        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("wallbrick blit shader"),
                source: wgpu::ShaderSource::Wgsl(shader_src.into()),
            });

        let bgl = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("wallbrick blit bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("wallbrick blit layout"),
                bind_group_layouts: &[&bgl],
                immediate_size: 0,
            });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("wallbrick blit pipeline"),
                layout: Some(&layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        self.blit_format = Some(ctx.surface_format);
        self.blit_pipeline = Some(pipeline);
        self.blit_bgl = Some(bgl);
        self.blit_bind_group = None;
    }

    fn ensure_records_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.records_capacity && self.records_buf.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(4);
        let new_size = (new_cap * std::mem::size_of::<QuadRecord>()) as u64;

        self.records_buf = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("wallbrick quad records"),
            size: new_size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.records_capacity = new_cap;

        // Recreated buffer invalidates the bind group referencing it.
        self.compute_bind_group = None;
    }

    fn ensure_bind_groups(&mut self, ctx: &RenderCtx<'_>) {
        if self.params_ubo.is_none() {
            self.params_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("wallbrick quad params"),
                size: std::mem::size_of::<Params>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("wallbrick blit sampler"),
                mag_filter: wgpu::FilterMode::Nearest,
                min_filter: wgpu::FilterMode::Nearest,
                ..Default::default()
            }));
        }

        if self.compute_bind_group.is_none() {
            let (Some(bgl), Some(params_ubo), Some(records_buf), Some(view)) = (
                self.compute_bgl.as_ref(),
                self.params_ubo.as_ref(),
                self.records_buf.as_ref(),
                self.target_view.as_ref(),
            ) else {
                return;
            };

            self.compute_bind_group =
                Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("wallbrick quad compute bind group"),
                    layout: bgl,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: params_ubo.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: records_buf.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::TextureView(view),
                        },
                    ],
                }));
        }

        if self.blit_bind_group.is_none() {
            let (Some(bgl), Some(view), Some(sampler)) = (
                self.blit_bgl.as_ref(),
                self.target_view.as_ref(),
                self.sampler.as_ref(),
            ) else {
                return;
            };

            self.blit_bind_group =
                Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("wallbrick blit bind group"),
                    layout: bgl,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(sampler),
                        },
                    ],
                }));
        }
    }
}

/// `Params` is 32 bytes by construction, so its size is always non-zero.
fn params_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<Params>() as u64)
        .expect("Params has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_eight_ints() {
        assert_eq!(std::mem::size_of::<QuadRecord>(), 8 * 4);
    }

    #[test]
    fn params_matches_wgsl_layout() {
        // vec2<u32> + u32 + u32 + vec4<f32>
        assert_eq!(std::mem::size_of::<Params>(), 32);
    }
}
