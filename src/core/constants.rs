// Shared scene/audio tuning constants used by the web frontend.

// Population
pub const SHAPE_COUNT: usize = 1024;
pub const POSITION_EXTENT: f64 = 3000.0; // positions drawn from [-extent, extent)

// Analyser
pub const FFT_SIZE: u32 = 512;
pub const FREQUENCY_BIN_COUNT: usize = (FFT_SIZE / 2) as usize;
pub const MIN_DECIBELS: f64 = -90.0;
pub const MAX_DECIBELS: f64 = -10.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 100.0;
pub const CAMERA_FAR: f32 = 9000.0;

// Shader time starts here and only grows
pub const INITIAL_SHADER_TIME: f64 = 1.0;

// Colour target samples per pixel (WebGPU guarantees 1 and 4)
pub const MSAA_SAMPLE_COUNT: u32 = 4;

// Scene background (#171717)
pub const BACKGROUND_RGB: [f64; 3] = [
    0x17 as f64 / 255.0,
    0x17 as f64 / 255.0,
    0x17 as f64 / 255.0,
];

// Shown once when the microphone cannot be opened
pub const MIC_NOTICE_CLASS: &str = "mic-info";
pub const MIC_NOTICE_HTML: &str = "It's dangerous to go insecure, take <a href=\"https://codepen.io/dzhurley/full/mmbjLM\" target=\"_blank\">this</a>!";
