// Selectors, class names and fixed markup the web frontend relies on.

// Navigation
pub const NAV_LINKS: &str = ".nav-link";
pub const MAIN_NAV: &str = ".main-nav";
pub const SECTIONS: &str = ".section, .hero-section";
pub const FAB: &str = ".fab";
pub const CTA_BUTTON: &str = ".cta-button";
pub const CTA_TARGET: &str = "challenges"; // section the CTA scrolls to
pub const NEXT_MODULE_BUTTON: &str = ".next-module-btn";

// Counters
pub const COUNTERS: &str = "[data-count]";
pub const COUNT_ATTR: &str = "data-count";
pub const COUNTED_CLASS: &str = "counted";

// Reveal
pub const REVEAL_TARGETS: &str =
    ".challenge-card, .benefit-card, .use-case-card, .concept-card, .section-header";
pub const REVEAL_PENDING_CLASS: &str = "animate-on-scroll";
pub const REVEAL_DONE_CLASS: &str = "animated";

// Hover effects
pub const TILT_CARDS: &str = ".challenge-card, .benefit-card, .use-case-card, .concept-card";
pub const CARD_HOVER_SHADOW: &str = "0 25px 50px rgba(0,0,0,0.15)";
pub const CARD_TRANSITION: &str = "all 0.3s ease";
pub const FLOATING_CUBES: &str = ".floating-cube";
pub const CUBE_HOVER_SHADOW: &str = "0 20px 40px rgba(50, 184, 198, 0.4)";
pub const USE_CASE_CARDS: &str = ".use-case-card";
pub const USE_CASE_PULSE: &str = "scale(1.05) translateY(-5px)";
pub const USE_CASE_SETTLED: &str = "translateY(-4px)";
pub const USE_CASE_TRANSITION: &str = "all 0.2s ease";

// Connection diagrams
pub const CHAOS_CONTAINER: &str = ".connection-chaos";
pub const CHAOS_SOURCES: &str = ".app-node";
pub const CHAOS_TARGETS: &str = ".tool-node";
pub const CHAOS_VIEWPORT: &str = ".before-mcp-viz";
pub const HUB_CONTAINER: &str = ".mcp-hub";
pub const HUB_SOURCES: &str = ".app-node-new";
pub const HUB_CORE: &str = ".mcp-core";
pub const HUB_TARGETS: &str = ".tool-node-new";
pub const HUB_VIEWPORT: &str = ".after-mcp-viz";
pub const IN_VIEW_TARGETS: &str = ".floating-cube, .connection-chaos, .mcp-hub";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const OVERLAY_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;z-index:1";

// Intro
pub const HERO_STATS: &str = ".hero-stats";
pub const PROTOCOL_RINGS: &str = ".protocol-ring";
pub const PROTOCOL_RING_ANIMATION: &str = "rotateIn 3s ease-out infinite";
pub const LOADED_CLASS: &str = "loaded";

// Element registry
pub const FX_ID_ATTR: &str = "data-fx-id";

// Completion modal
pub const MODAL_ID: &str = "completion-modal";
pub const MODAL_STYLE_ID: &str = "completion-modal-style";
pub const MODAL_SHOW_CLASS: &str = "show";
pub const MODAL_CLOSE: &str = ".close-modal";
pub const MODAL_OVERLAY: &str = ".modal-overlay";

pub const MODAL_HTML: &str = r#"<div class="modal-overlay"></div>
<div class="modal-content">
  <div class="completion-icon">🎉</div>
  <h3>Congratulations!</h3>
  <p>You've completed Module 1: The Big Picture</p>
  <p>You now understand why MCP was created and how it revolutionizes AI tool integration.</p>
  <div class="modal-actions">
    <button class="btn btn--primary close-modal">Continue Learning</button>
  </div>
</div>"#;

pub const MODAL_CSS: &str = r#"
.completion-modal { position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 10000;
  display: flex; align-items: center; justify-content: center; opacity: 0; transition: opacity 0.3s ease; }
.modal-overlay { position: absolute; top: 0; left: 0; width: 100%; height: 100%;
  background: rgba(0, 0, 0, 0.8); backdrop-filter: blur(5px); }
.modal-content { background: var(--color-surface); border-radius: var(--radius-lg); padding: var(--space-32);
  text-align: center; max-width: 450px; margin: var(--space-24); border: 1px solid var(--color-card-border);
  position: relative; z-index: 2; transform: scale(0.8) translateY(50px); transition: all 0.3s ease;
  box-shadow: 0 20px 60px rgba(0,0,0,0.3); }
.completion-modal.show { opacity: 1; }
.completion-modal.show .modal-content { transform: scale(1) translateY(0); }
.completion-icon { font-size: 4rem; margin-bottom: var(--space-16); }
.modal-content h3 { color: var(--color-text); margin-bottom: var(--space-16); }
.modal-content p { color: var(--color-text-secondary); margin-bottom: var(--space-16); line-height: 1.6; }
.close-modal:hover { transform: translateY(-2px); box-shadow: 0 8px 25px rgba(var(--color-primary-rgb), 0.4); }
"#;

/// `href` of the nav link pointing at `section_id`.
#[inline]
pub fn section_href(section_id: &str) -> String {
    format!("#{}", section_id)
}

/// Section id from a nav link `href` such as `#solution`.
#[inline]
pub fn section_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// CSS animation delay for the reveal element at `index`, e.g. `"0.3s"`.
#[inline]
pub fn reveal_delay(index: usize, stagger_sec: f64) -> String {
    let delay = (index as f64 * stagger_sec * 1000.0).round() / 1000.0;
    format!("{}s", delay)
}
