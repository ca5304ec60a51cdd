//! WASM-compatible diagnostic types.
//!
//! This module provides JavaScript-compatible wrappers for Rust errors.

use mobius_mesh::MeshError;
use mobius_view::ViewError;
use wasm_bindgen::prelude::*;

/// Pipeline stage that rejected the request.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parameter validation and mesh construction.
    Mesh,
    /// Rendering, animation and serialization.
    View,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { build_strip(0, 0.3, 10); }
/// // catch (diag) { console.log(diag.parameter, diag.message); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    stage: Stage,
    parameter: Option<String>,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the stage that failed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the rejected parameter name, if any.
    pub fn parameter(&self) -> Option<String> {
        self.parameter.clone()
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object.
    ///
    /// This is useful for passing data between the worker and main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    pub fn to_js_object(&self) -> JsValue {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        let stage = match self.stage {
            Stage::Mesh => "mesh",
            Stage::View => "view",
        };
        // Reflect::set only fails on frozen objects or proxies
        let _ = Reflect::set(&obj, &JsValue::from_str("stage"), &JsValue::from_str(stage));
        let _ = Reflect::set(&obj, &JsValue::from_str("message"), &JsValue::from_str(&self.message));
        if let Some(parameter) = &self.parameter {
            let _ = Reflect::set(&obj, &JsValue::from_str("parameter"), &JsValue::from_str(parameter));
        }

        JsValue::from(obj)
    }
}

impl From<MeshError> for Diagnostic {
    fn from(err: MeshError) -> Self {
        Self {
            stage: Stage::Mesh,
            parameter: Some(err.parameter().to_string()),
            message: err.to_string(),
        }
    }
}

impl From<ViewError> for Diagnostic {
    fn from(err: ViewError) -> Self {
        Self {
            stage: Stage::View,
            parameter: None,
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
