use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Browsers keep an AudioContext suspended until a user gesture
pub fn wire_audio_resume(audio_ctx: &web::AudioContext) {
    if let Some(window) = web::window() {
        let audio = audio_ctx.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if audio.state() != web::AudioContextState::Running {
                _ = audio.resume();
                log::info!("[audio] resume requested");
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
