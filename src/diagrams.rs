use crate::constants::*;
use crate::dom::{self, js_err};
use page_fx_core::{Diagram, DiagramLayout, LineSegment, LINE_ANIMATION, LINE_DASH_ARRAY};
use web_sys as web;

struct Selectors {
    container: &'static str,
    sources: &'static str,
    hub: Option<&'static str>,
    targets: &'static str,
}

fn selectors(diagram: Diagram) -> Selectors {
    match diagram {
        Diagram::Chaos => Selectors {
            container: CHAOS_CONTAINER,
            sources: CHAOS_SOURCES,
            hub: None,
            targets: CHAOS_TARGETS,
        },
        Diagram::Hub => Selectors {
            container: HUB_CONTAINER,
            sources: HUB_SOURCES,
            hub: Some(HUB_CORE),
            targets: HUB_TARGETS,
        },
    }
}

/// Section wrapper whose visibility triggers line emphasis.
pub fn viewport_selector(diagram: Diagram) -> &'static str {
    match diagram {
        Diagram::Chaos => CHAOS_VIEWPORT,
        Diagram::Hub => HUB_VIEWPORT,
    }
}

/// Measure the live boxes of a diagram; `None` when its container is absent.
pub fn measure(document: &web::Document, diagram: Diagram) -> Option<DiagramLayout> {
    let sel = selectors(diagram);
    let container = dom::query_one(document, sel.container)?;
    let boxes = |selector: &str| {
        dom::query_all(&container, selector)
            .iter()
            .map(|el| Some(dom::rect_of(el)))
            .collect::<Vec<_>>()
    };
    let hub = sel
        .hub
        .and_then(|h| container.query_selector(h).ok().flatten())
        .map(|el| dom::rect_of(&el));
    Some(DiagramLayout {
        container: Some(dom::rect_of(&container)),
        sources: boxes(sel.sources),
        hub,
        targets: boxes(sel.targets),
    })
}

fn line_style(opacity: f64, stroke_width: f64) -> String {
    format!(
        "stroke-dasharray:{};animation:{};opacity:{};stroke-width:{}",
        LINE_DASH_ARRAY, LINE_ANIMATION, opacity, stroke_width
    )
}

/// Replace the diagram's SVG overlay with one holding `lines`.
pub fn draw(document: &web::Document, diagram: Diagram, lines: &[LineSegment]) -> anyhow::Result<()> {
    let Some(container) = dom::query_one(document, selectors(diagram).container) else {
        return Ok(());
    };
    if let Ok(Some(existing)) = container.query_selector("svg") {
        existing.remove();
    }

    let svg = document
        .create_element_ns(Some(SVG_NS), "svg")
        .map_err(js_err)?;
    svg.set_attribute("style", OVERLAY_STYLE).map_err(js_err)?;

    for line in lines {
        let el = document
            .create_element_ns(Some(SVG_NS), "line")
            .map_err(js_err)?;
        let style = line.style;
        for (name, value) in [
            ("x1", line.from.x.to_string()),
            ("y1", line.from.y.to_string()),
            ("x2", line.to.x.to_string()),
            ("y2", line.to.y.to_string()),
            ("stroke", style.stroke().to_string()),
            ("stroke-width", style.stroke_width().to_string()),
            ("opacity", style.opacity().to_string()),
            ("style", line_style(style.opacity(), style.stroke_width())),
        ] {
            el.set_attribute(name, &value).map_err(js_err)?;
        }
        svg.append_child(&el).map_err(js_err)?;
    }

    container.append_child(&svg).map_err(js_err)?;
    log::debug!("[diagram] drew {} lines for {:?}", lines.len(), diagram);
    Ok(())
}

/// Switch line `index` of the drawn overlay to its emphasised stroke.
pub fn emphasize(document: &web::Document, diagram: Diagram, index: usize) {
    let selector = format!("{} svg", selectors(diagram).container);
    let Some(svg) = dom::query_one(document, &selector) else {
        return;
    };
    if let Some(line) = dom::query_all(&svg, "line").get(index) {
        let e = diagram.style().emphasis();
        _ = line.set_attribute("style", &line_style(e.opacity, e.stroke_width));
    }
}
