//! Contact form submission wiring and the toast it shows.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::{Page, Shared};
use crate::consts::TOAST_SUCCESS_TEXT;
use crate::contact::{ContactSubmission, SHOW_CLASS, ToastId, ToastSchedule};
use crate::dom;
use crate::error::PageError;

pub(super) fn attach(page: &mut Page, doc: &Document) -> Result<bool, PageError> {
    let selector = page.config(|c| c.selectors.contact_form.clone());
    let Some(form) = dom::query(doc, &selector)?.and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()) else {
        return Ok(false);
    };
    let body = dom::body(doc)?;
    let core = Rc::clone(&page.core);
    let document = doc.clone();
    let form_el = form.clone();
    page.listen(&form, "submit", move |event| {
        event.prevent_default();
        let submission = read_submission(&core, &document);
        let (id, schedule) = core.borrow_mut().submit_contact(&submission);
        dom::report("contact-form", show_toast(&core, &document, &body, id, schedule));
        form_el.reset();
    })?;
    Ok(true)
}

fn read_submission(core: &Shared, doc: &Document) -> ContactSubmission {
    let fields = core.borrow().config.contact_fields.clone();
    ContactSubmission {
        name: field_value(doc, &fields.name),
        email: field_value(doc, &fields.email),
        subject: field_value(doc, &fields.subject),
        message: field_value(doc, &fields.message),
    }
}

/// Value of an `<input>`, `<textarea>` or `<select>` by id; empty if the field is missing.
fn field_value(doc: &Document, id: &str) -> String {
    let Some(el) = doc.get_element_by_id(id) else {
        log::warn!("contact-form: missing field #{id}");
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        log::warn!("contact-form: #{id} is not a text field");
        String::new()
    }
}

fn show_toast(
    core: &Shared,
    doc: &Document,
    body: &HtmlElement,
    id: ToastId,
    schedule: ToastSchedule,
) -> Result<(), PageError> {
    let toast = dom::create(doc, "div", "notification success")?;
    let icon = dom::create(doc, "i", "fas fa-check-circle")?;
    let text = doc.create_element("span")?;
    text.set_text_content(Some(TOAST_SUCCESS_TEXT));
    toast.append_child(&icon)?;
    toast.append_child(&text)?;
    body.append_child(&toast)?;

    {
        let core = Rc::clone(core);
        let toast = toast.clone();
        Timeout::new(schedule.show_at_ms, move || {
            if core.borrow_mut().toasts.show(id) {
                dom::report("contact-form", dom::set_class(&toast, SHOW_CLASS, true));
            }
        })
        .forget();
    }

    let core = Rc::clone(core);
    Timeout::new(schedule.hide_at_ms, move || {
        if !core.borrow_mut().toasts.hide(id) {
            return;
        }
        dom::report("contact-form", dom::set_class(&toast, SHOW_CLASS, false));
        Timeout::new(schedule.remove_after_hide_ms, move || {
            if core.borrow_mut().toasts.remove(id) {
                toast.remove();
            }
        })
        .forget();
    })
    .forget();
    Ok(())
}
