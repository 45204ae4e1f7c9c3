use std::time::Duration;

// Shared timing and threshold constants used by the web frontend.

// Rate limits for high-frequency events
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16); // ~one display refresh
pub const SPY_THROTTLE: Duration = Duration::from_millis(100);
pub const RESIZE_THROTTLE: Duration = Duration::from_millis(250);
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(300); // quiet period before rebuilding diagrams

// Counters
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const COUNTER_THRESHOLD: f64 = 0.5; // visible fraction that starts a counter

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SEC: f64 = 0.1; // per-element animation delay

// Connection diagrams
pub const DIAGRAM_THRESHOLD: f64 = 0.3;
pub const DIAGRAM_BUILD_DELAY: Duration = Duration::from_millis(500);
pub const CHAOS_EMPHASIS_STAGGER: Duration = Duration::from_millis(50);
pub const HUB_EMPHASIS_STAGGER: Duration = Duration::from_millis(100);
pub const IN_VIEW_ROOT_MARGIN: &str = "100px";

// Scroll responders
pub const NAV_SOLID_AFTER_PX: f64 = 100.0;
pub const FAB_VISIBLE_AFTER_PX: f64 = 500.0;
pub const SPY_PROBE_PX: f64 = 150.0; // viewport line a section must straddle to be active
pub const NAV_OFFSET_PX: f64 = 80.0; // fixed nav height subtracted from scroll targets
pub const PARALLAX_BASE_SPEED: f64 = 0.3;
pub const PARALLAX_SPEED_STEP: f64 = 0.1; // added per cube index

// Hover tilt
pub const TILT_DIVISOR: f64 = 15.0; // px of pointer offset per degree of rotation
pub const CARD_HOVER_LIFT_PX: f64 = -12.0;
pub const CARD_HOVER_ROTATE_X_DEG: f64 = 8.0;
pub const CARD_HOVER_SCALE: f64 = 1.02;
pub const CUBE_DELAY_STEP_SEC: f64 = 2.0;

// Use-case selection
pub const USE_CASE_SETTLE: Duration = Duration::from_millis(200);

// Completion modal
pub const MODAL_SHOW_DELAY: Duration = Duration::from_millis(100);
pub const MODAL_REMOVE_DELAY: Duration = Duration::from_millis(300);

// Intro timers
pub const HERO_INTRO_DELAY: Duration = Duration::from_millis(1000);
pub const PROTOCOL_RINGS_DELAY: Duration = Duration::from_millis(2000);

// Default section order used by keyboard navigation
pub const SECTION_ORDER: [&str; 5] = ["hero", "challenges", "solution", "use-cases", "architecture"];
