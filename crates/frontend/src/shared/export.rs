//! Spreadsheet export: the workbook is built by SheetJS (loaded by
//! `index.html`) and handed to the browser as a blob download.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// JS binding to the SheetJS glue in `index.html`
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = buildXlsxWorkbook, catch)]
    fn build_xlsx_workbook(rows: JsValue, sheet_name: &str) -> Result<Uint8Array, JsValue>;
}

/// Writes `table` (header row first) into a one-sheet `.xlsx` file and starts
/// the download.
pub fn export_to_xlsx(table: &[Vec<String>], sheet_name: &str, filename: &str) -> Result<(), String> {
    if table.len() < 2 {
        return Err("No data to export".to_string());
    }

    let rows = serde_wasm_bindgen::to_value(table)
        .map_err(|e| format!("Failed to convert rows: {}", e))?;
    let bytes = build_xlsx_workbook(rows, sheet_name)
        .map_err(|e| format!("Failed to build workbook: {:?}", e))?;

    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, filename)
}

fn create_xlsx_blob(bytes: &Uint8Array) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(bytes);

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Starts a browser download of `blob` through a temporary anchor.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
