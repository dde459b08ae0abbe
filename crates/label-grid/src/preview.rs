use std::fmt::Write;

use crate::constants::FALLBACK_CSS_UNIT;
use crate::sheet::SheetLayout;

/// Render a print preview of the sheet as a standalone HTML document.
///
/// Each page becomes a fixed-size section with labels absolutely positioned
/// inside it. Fragments are inserted verbatim since they are pre-rendered.
pub fn render_html(layout: &SheetLayout) -> String {
    let unit = if layout.unit.is_empty() {
        FALLBACK_CSS_UNIT
    } else {
        layout.unit.as_str()
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    let _ = writeln!(
        html,
        "@page {{ size: {w}{u} {h}{u}; margin: 0; }}",
        w = layout.page.width,
        h = layout.page.height,
        u = unit
    );
    let _ = writeln!(
        html,
        ".page {{ position: relative; width: {w}{u}; height: {h}{u}; overflow: hidden; page-break-after: always; }}",
        w = layout.page.width,
        h = layout.page.height,
        u = unit
    );
    let _ = writeln!(
        html,
        ".label {{ position: absolute; width: {w}{u}; height: {h}{u}; overflow: hidden; }}",
        w = layout.label_width,
        h = layout.label_height,
        u = unit
    );
    html.push_str(".message { color: #b00020; font-family: sans-serif; }\n");
    html.push_str("@media print { .message { display: none; } }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    if let Some(message) = layout.fit.message() {
        let _ = writeln!(html, "<p class=\"message\">{}</p>", escape(&message));
    }

    for page in 1..=layout.pages {
        let _ = writeln!(html, "<section class=\"page\" data-page=\"{}\">", page);
        for slot in layout.page_slots(page) {
            let pos = slot.position();
            let _ = write!(
                html,
                "<div class=\"label{}\" data-row=\"{}\" data-col=\"{}\" style=\"left: {}{u}; top: {}{u};\">",
                if slot.is_blank() { " blank" } else { "" },
                pos.row,
                pos.col,
                slot.placement.x,
                slot.placement.y,
                u = unit
            );
            if let Some(fragment) = &slot.fragment {
                html.push_str(fragment);
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
