use crate::core::{MIC_NOTICE_CLASS, MIC_NOTICE_HTML};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `#app-canvas` if the page provides one, otherwise a new canvas on `<body>`.
pub fn find_or_create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id("app-canvas") {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id("app-canvas");
            _ = el.set_attribute("style", "position:fixed;inset:0;width:100vw;height:100vh");
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Append the secure-context notice unless one is already on the page.
pub fn show_mic_notice(document: &web::Document) {
    let selector = format!(".{}", MIC_NOTICE_CLASS);
    if let Ok(Some(_)) = document.query_selector(&selector) {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    if let Ok(section) = document.create_element("section") {
        _ = section.class_list().add_1(MIC_NOTICE_CLASS);
        section.set_inner_html(MIC_NOTICE_HTML);
        _ = body.append_child(&section);
    }
}
