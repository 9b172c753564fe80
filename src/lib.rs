//! Audio-reactive shape field.
//!
//! `core` is plain Rust and builds everywhere; everything that touches the
//! browser (WebAudio, DOM, WebGPU) only builds for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod panel;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
use {
    crate::core::geometry::{templates, TEMPLATE_COUNT},
    crate::core::mic::MicStatus,
    crate::core::params::Params,
    crate::core::scene::Visualizer,
    crate::core::spectrum::FrequencyBuffer,
    crate::core::SHAPE_COUNT,
    instant::Instant,
    rand::rngs::StdRng,
    rand::SeedableRng,
    std::cell::RefCell,
    std::rc::Rc,
    std::sync::atomic::{AtomicBool, Ordering},
    wasm_bindgen::prelude::*,
    wasm_bindgen::JsCast,
    wasm_bindgen_futures::spawn_local,
    web_sys as web,
};

#[cfg(target_arch = "wasm32")]
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// One-shot permission request, resolved off the frame loop. Never retried.
#[cfg(target_arch = "wasm32")]
fn request_microphone(
    window: web::Window,
    audio_ctx: web::AudioContext,
    smoothing: f32,
    sampler_slot: Rc<RefCell<Option<audio::MicSampler>>>,
) {
    spawn_local(async move {
        let mut status = MicStatus::default();
        match audio::connect_microphone(&window, &audio_ctx, smoothing).await {
            Ok(sampler) => {
                status.on_granted();
                log::info!("[mic] connected bins={}", sampler.bin_count());
                *sampler_slot.borrow_mut() = Some(sampler);
            }
            Err(e) => {
                log::warn!("[mic] unavailable: {}", e);
                if status.on_denied() {
                    if let Some(document) = window.document() {
                        dom::show_mic_notice(&document);
                    }
                }
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shape-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::find_or_create_canvas(&document)?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let params = Rc::new(RefCell::new(Params::default()));
    if let Err(e) = panel::build(&document, params.clone()) {
        log::warn!("[panel] not built: {:?}", e);
    }
    events::wire_panel_toggle_h(&document);

    let templates = templates();
    let visualizer = Visualizer::new(TEMPLATE_COUNT, SHAPE_COUNT, StdRng::from_entropy());
    log::info!(
        "[scene] shapes={} templates={}",
        visualizer.shapes().len(),
        templates.len()
    );

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = audio_ctx.resume();
    events::wire_audio_resume(&audio_ctx);

    let sampler = Rc::new(RefCell::new(None));
    request_microphone(
        window.clone(),
        audio_ctx.clone(),
        params.borrow().smoothing,
        sampler.clone(),
    );

    let gpu = frame::init_gpu(&canvas, &templates, SHAPE_COUNT).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        visualizer,
        params,
        sampler,
        frequency: FrequencyBuffer::default(),
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
