use crate::core::mic::MicError;
use crate::core::{FFT_SIZE, MAX_DECIBELS, MIN_DECIBELS};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn js_reason(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Analyser tapped onto the microphone; the only reader of live audio.
pub struct MicSampler {
    analyser: web::AnalyserNode,
    // held so the stream source stays connected
    _source: web::MediaStreamAudioSourceNode,
}

impl MicSampler {
    /// Copy the current byte spectrum into `out`, then apply `smoothing` so
    /// panel edits reach the analyser on the next frame.
    pub fn refresh(&self, out: &mut [u8], smoothing: f32) {
        self.analyser.get_byte_frequency_data(out);
        self.analyser.set_smoothing_time_constant(smoothing as f64);
    }

    pub fn bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }
}

// Create an analyser with the fixed window and decibel range
pub fn create_analyser(
    audio_ctx: &web::AudioContext,
    smoothing: f32,
) -> Result<web::AnalyserNode, MicError> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| MicError::AudioGraph {
        reason: js_reason(&e),
    })?;
    analyser.set_fft_size(FFT_SIZE);
    analyser.set_min_decibels(MIN_DECIBELS);
    analyser.set_max_decibels(MAX_DECIBELS);
    analyser.set_smoothing_time_constant(smoothing as f64);
    Ok(analyser)
}

async fn request_stream(window: &web::Window) -> Result<web::MediaStream, MicError> {
    if !window.is_secure_context() {
        return Err(MicError::InsecureContext);
    }
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| MicError::Unsupported {
            reason: js_reason(&e),
        })?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| MicError::Unsupported {
            reason: js_reason(&e),
        })?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| MicError::PermissionDenied {
            reason: js_reason(&e),
        })?;
    stream
        .dyn_into::<web::MediaStream>()
        .map_err(|e| MicError::AudioGraph {
            reason: js_reason(&e),
        })
}

/// Ask once for the microphone and connect it to a fresh analyser.
pub async fn connect_microphone(
    window: &web::Window,
    audio_ctx: &web::AudioContext,
    smoothing: f32,
) -> Result<MicSampler, MicError> {
    let stream = request_stream(window).await?;
    let analyser = create_analyser(audio_ctx, smoothing)?;
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| MicError::AudioGraph {
            reason: js_reason(&e),
        })?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| MicError::AudioGraph {
            reason: js_reason(&e),
        })?;
    Ok(MicSampler {
        analyser,
        _source: source,
    })
}
