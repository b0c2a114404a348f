//! WASM bindings for Thai payment-slip parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and
//! Node.js, where the slip image is recognized client-side and the raw
//! text is handed to the parser.

use wasm_bindgen::prelude::*;

use slipscan_core::models::slip::ParsedSlip;
use slipscan_core::slip::{RuleSlipParser, SlipParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse payment-slip text into structured slip data.
///
/// Takes raw recognized text and returns the extracted fields as a plain
/// object matching the transaction form contract.
#[wasm_bindgen]
pub fn parse_slip_text(text: &str) -> Result<JsValue, JsValue> {
    let slip = slipscan_core::slip::parse_slip_text(text);
    serde_wasm_bindgen::to_value(&slip).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Slip parser class for browser use.
#[wasm_bindgen]
pub struct SlipScanner {
    parser: RuleSlipParser,
}

#[wasm_bindgen]
impl SlipScanner {
    /// Create a new slip scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: RuleSlipParser::new(),
        }
    }

    /// Parse slip text.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        serde_wasm_bindgen::to_value(&result.slip).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Parse slip text, returning the fields together with extraction
    /// warnings.
    #[wasm_bindgen]
    pub fn parse_with_warnings(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.parser.parse(text);

        #[derive(serde::Serialize)]
        struct ParseOutput {
            slip: ParsedSlip,
            warnings: Vec<String>,
        }

        let output = ParseOutput {
            slip: result.slip,
            warnings: result.warnings,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for SlipScanner {
    fn default() -> Self {
        Self::new()
    }
}
