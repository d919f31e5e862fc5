use crate::lines::LineRegistry;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const LAYER_ID: &str = "viewport-lines";

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    // fallback for environments without CSS class
    _ = el.remove_attribute("hidden");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    // fallback
    _ = el.set_attribute("hidden", "");
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}

/// Fixed full-viewport SVG the connector lines are drawn into.
/// Reuses `#viewport-lines` from the page when present.
pub fn ensure_line_layer(document: &web::Document) -> Option<web::Element> {
    if let Some(el) = document.get_element_by_id(LAYER_ID) {
        return Some(el);
    }
    let svg = document.create_element_ns(Some(SVG_NS), "svg").ok()?;
    _ = svg.set_attribute("id", LAYER_ID);
    _ = svg.set_attribute("class", "viewport-lines-container");
    _ = svg.set_attribute(
        "style",
        "position:fixed;top:0;left:0;width:100vw;height:100vh;z-index:-1;pointer-events:none",
    );
    let body = document.body()?;
    _ = body.append_child(&svg);
    log::info!("[overlay] created line layer");
    Some(svg)
}

/// Redraw every active line. Bent lines get `<id>-segment1`/`-segment2`.
pub fn draw_lines(document: &web::Document, layer: &web::Element, lines: &LineRegistry) {
    layer.set_inner_html("");
    for line in lines.active_lines() {
        let segments = line.segments();
        let split = segments.len() > 1;
        for (i, seg) in segments.iter().enumerate() {
            let Ok(el) = document.create_element_ns(Some(SVG_NS), "line") else {
                continue;
            };
            _ = el.set_attribute("x1", &seg.from.x.to_string());
            _ = el.set_attribute("y1", &seg.from.y.to_string());
            _ = el.set_attribute("x2", &seg.to.x.to_string());
            _ = el.set_attribute("y2", &seg.to.y.to_string());
            _ = el.set_attribute("stroke", &line.color);
            _ = el.set_attribute("stroke-width", &line.width.to_string());
            let tag = if split {
                format!("{}-segment{}", line.id, i + 1)
            } else {
                line.id.clone()
            };
            _ = el.set_attribute("data-component-id", &tag);
            _ = layer.append_child(&el);
        }
    }
}
