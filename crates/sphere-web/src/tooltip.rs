use skill_sphere_core::TooltipUpdate;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement, text: &str, x: f64, y: f64) {
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
    let _ = style.set_property("opacity", "1");
    el.set_text_content(Some(text));
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    let _ = el.style().set_property("opacity", "0");
}

pub fn apply(el: &web::HtmlElement, update: &TooltipUpdate) {
    match update {
        TooltipUpdate::Show { text, x, y } => show(el, text, *x, *y),
        TooltipUpdate::Hide => hide(el),
    }
}
