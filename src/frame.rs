use crate::audio::MicSampler;
use crate::core::params::Params;
use crate::core::scene::Visualizer;
use crate::core::spectrum::FrequencyBuffer;
use crate::render;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub visualizer: Visualizer<StdRng>,
    pub params: Rc<RefCell<Params>>,
    // filled in once the permission request resolves
    pub sampler: Rc<RefCell<Option<MicSampler>>>,
    pub frequency: FrequencyBuffer,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        // panel edits land between frames; read a snapshot for this one
        let params = *self.params.borrow();

        if let Some(sampler) = self.sampler.borrow().as_ref() {
            sampler.refresh(self.frequency.as_mut_slice(), params.smoothing);
        }

        self.visualizer
            .update(dt_sec, self.frequency.as_slice(), &params);

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.visualizer.camera.set_viewport(w, h);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(
                self.visualizer.shapes(),
                self.visualizer.template_ranges(),
                self.visualizer.camera.view_proj(),
                self.visualizer.shader_time() as f32,
            ) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    templates: &[crate::core::geometry::GeometryTemplate],
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, templates, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
