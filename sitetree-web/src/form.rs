use sitetree::request::FormFields;
use sitetree::{Error, Result};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::js_error;

/// Collects the form's current fields, in document order, as the browser would submit them.
///
/// Entries that are not text, such as selected files, are skipped.
pub fn form_fields(form: &HtmlFormElement) -> Result<FormFields> {
    let data = FormData::new_with_form(form).map_err(js_error)?;
    let entries = js_sys::try_iter(&data)
        .map_err(js_error)?
        .ok_or_else(|| Error::Js("FormData is not iterable".to_string()))?;

    let mut fields = FormFields::new();
    for entry in entries {
        let entry: js_sys::Array = entry.map_err(js_error)?.dyn_into().map_err(js_error)?;
        let name = entry.get(0).as_string().unwrap_or_default();
        match entry.get(1).as_string() {
            Some(value) => fields.push(name, value),
            None => debug!(%name, "skipping non-text form field"),
        }
    }
    Ok(fields)
}
