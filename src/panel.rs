use crate::core::params::{Params, ParamSpec, PARAM_SPECS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "param-panel";
const PANEL_STYLE: &str = "position:fixed;top:0;right:12px;padding:8px 12px;color:#eee;font:11px monospace;background:rgba(26,26,26,0.9);";

/// Build one labelled range slider per knob and bind it to `params`.
pub fn build(document: &web::Document, params: Rc<RefCell<Params>>) -> anyhow::Result<()> {
    if document.get_element_by_id(PANEL_ID).is_some() {
        return Ok(());
    }
    let panel = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    panel.set_id(PANEL_ID);
    _ = panel.set_attribute("style", PANEL_STYLE);

    for spec in PARAM_SPECS.iter() {
        let row = add_row(document, spec, params.clone())?;
        _ = panel.append_child(&row);
    }

    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn add_row(
    document: &web::Document,
    spec: &'static ParamSpec,
    params: Rc<RefCell<Params>>,
) -> anyhow::Result<web::Element> {
    let err = |e| anyhow::anyhow!("{:?}", e);
    let row = document.create_element("label").map_err(err)?;
    _ = row.set_attribute("style", "display:flex;gap:8px;align-items:center;");

    let name = document.create_element("span").map_err(err)?;
    name.set_text_content(Some(spec.label));
    let readout = document.create_element("span").map_err(err)?;

    let current = params.borrow().get(spec.key);
    readout.set_text_content(Some(&format_value(current, spec.step)));

    let input = document
        .create_element("input")
        .map_err(err)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_type("range");
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&current.to_string());

    let input_for_cb = input.clone();
    let readout_for_cb = readout.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Ok(raw) = input_for_cb.value().parse::<f32>() else {
            return;
        };
        let stored = params.borrow_mut().set(spec.key, raw);
        readout_for_cb.set_text_content(Some(&format_value(stored, spec.step)));
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();

    _ = row.append_child(&name);
    _ = row.append_child(&input);
    _ = row.append_child(&readout);
    Ok(row)
}

fn format_value(value: f32, step: f32) -> String {
    if step < 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.0}", value)
    }
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.set_attribute("style", PANEL_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
