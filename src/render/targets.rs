use super::helpers;

/// Multisampled colour and depth attachments matching the swapchain size;
/// rebuilt on resize.
pub(crate) struct FrameTargets {
    format: wgpu::TextureFormat,
    color_tex: wgpu::Texture,
    pub(crate) color_view: wgpu::TextureView,
    depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl FrameTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (color_tex, color_view) =
            helpers::create_msaa_color_texture(device, "msaa_color_tex", format, width, height);
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(device, "depth_tex", width, height);
        Self {
            format,
            color_tex,
            color_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.color_tex.destroy();
        self.depth_tex.destroy();
        *self = Self::new(device, self.format, width, height);
    }
}
