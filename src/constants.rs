/// Interaction tuning constants for the landing page.
///
/// These express intended behavior (typing cadence, spring feel, tilt gain) and
/// keep magic numbers out of the primitives and the DOM wiring.
// Typed hero title
pub const TYPED_INTERVAL_MS: u64 = 70; // per revealed character
pub const TYPED_DELAY_MS: u64 = 250; // before the first character
pub const TYPED_MIN_INTERVAL_MS: u64 = 1; // zero intervals are raised to this
pub const TYPED_POLL_MS: u64 = 10; // browser timer granularity driving the reveal

// Cursor flame spring
pub const FLAME_STIFFNESS: f32 = 300.0;
pub const FLAME_DAMPING: f32 = 30.0;
pub const FLAME_MASS: f32 = 0.4;
pub const FLAME_REST_DELTA: f32 = 0.01; // px; snap to target below this
pub const FLAME_REST_SPEED: f32 = 0.01; // px per second
pub const FLAME_START: [f32; 2] = [-100.0, -100.0]; // off-screen until the first move
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 0.004;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.25; // clamp after tab switches

// Tilt cards
pub const TILT_GAIN_DEG: f32 = 12.0; // full span; a corner tilts by half of this

// Hero glow
pub const GLOW_RADIUS_PX: u32 = 600;
