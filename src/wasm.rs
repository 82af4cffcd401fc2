//! WebAssembly bindings for the converter.
//!
//! This module provides JavaScript-friendly wrappers around the core converter.

use wasm_bindgen::prelude::*;
use crate::convert::{convert_with_warnings, summarize, Conversion, DEFAULT_NOTATION_LIMIT};
use crate::trace::{parse_trace, SyntheticTraceSource};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly wrapper around one conversion.
#[wasm_bindgen]
pub struct WasmConversion {
    conversion: Conversion,
}

#[wasm_bindgen]
impl WasmConversion {
    /// Convert a trace given as JSON text.
    #[wasm_bindgen(constructor)]
    pub fn new(trace_json: &str, source: &str) -> Result<WasmConversion, JsError> {
        let trace = parse_trace(trace_json)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self {
            conversion: convert_with_warnings(&trace, source),
        })
    }

    /// Musical document as pretty-printed JSON.
    #[wasm_bindgen]
    pub fn document_json(&self) -> Result<String, JsError> {
        self.conversion.document.to_json()
            .map_err(|e| JsError::new(&format!("{}", e)))
    }

    /// Tempo in beats per minute.
    #[wasm_bindgen]
    pub fn tempo(&self) -> u32 {
        self.conversion.document.tempo
    }

    /// Key letter.
    #[wasm_bindgen]
    pub fn key(&self) -> String {
        self.conversion.document.key.to_string()
    }

    /// Note names as a JS array.
    #[wasm_bindgen]
    pub fn notes(&self) -> js_sys::Array {
        self.conversion.document.notes
            .iter()
            .map(|n| JsValue::from_str(n.as_str()))
            .collect()
    }

    /// Durations, one per note.
    #[wasm_bindgen]
    pub fn rhythms(&self) -> Vec<f64> {
        self.conversion.document.rhythms.clone()
    }

    /// Instrument names as a JS array.
    #[wasm_bindgen]
    pub fn instruments(&self) -> js_sys::Array {
        self.conversion.document.instruments
            .iter()
            .map(|i| JsValue::from_str(i.as_str()))
            .collect()
    }

    /// Partial-data warnings, one message per entry.
    #[wasm_bindgen]
    pub fn warnings(&self) -> js_sys::Array {
        self.conversion.warnings
            .iter()
            .map(|w| JsValue::from_str(&w.to_string()))
            .collect()
    }

    /// Printable summary.
    #[wasm_bindgen]
    pub fn summary(&self) -> String {
        summarize(&self.conversion.document, DEFAULT_NOTATION_LIMIT).to_string()
    }
}

/// Convert trace JSON straight to musical JSON.
#[wasm_bindgen]
pub fn wasm_convert(trace_json: &str, source: &str) -> Result<String, JsError> {
    WasmConversion::new(trace_json, source)?.document_json()
}

/// Build a synthetic trace from text and return it as JSON.
#[wasm_bindgen]
pub fn wasm_synthesize(text: &str) -> Result<String, JsError> {
    let trace = SyntheticTraceSource::new(text).generate();
    serde_json::to_string_pretty(&trace)
        .map_err(|e| JsError::new(&format!("{}", e)))
}
