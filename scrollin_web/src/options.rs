// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading [`RevealOptions`] from a plain JS object.
//!
//! Accepted keys: `offset` (alias `y`), `duration`, `stagger`,
//! `triggerRegion` (alias `start`). Missing or non-numeric values keep their
//! defaults; a region that fails to parse is replaced by the default region.

use wasm_bindgen::JsValue;

use scrollin_core::options::RevealOptions;
use scrollin_core::region::{ParseRegionError, TriggerRegion};

/// Option values as found on the JS object, before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RawOptions {
    pub(crate) offset: Option<f64>,
    pub(crate) duration: Option<f64>,
    pub(crate) stagger: Option<f64>,
    pub(crate) region: Option<String>,
}

impl RawOptions {
    /// Reads the known keys from `value`. Anything that is not an object
    /// yields all-`None`.
    pub(crate) fn from_js(value: &JsValue) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        let get = |key: &str| js_sys::Reflect::get(value, &JsValue::from_str(key)).ok();
        let number = |key: &str| get(key).and_then(|v| v.as_f64());
        let string = |key: &str| get(key).and_then(|v| v.as_string());
        Self {
            offset: number("offset").or_else(|| number("y")),
            duration: number("duration"),
            stagger: number("stagger"),
            region: string("triggerRegion").or_else(|| string("start")),
        }
    }

    /// Builds options, reporting a rejected region descriptor.
    pub(crate) fn resolve(&self) -> (RevealOptions, Option<ParseRegionError>) {
        let mut options = RevealOptions::new();
        if let Some(offset) = self.offset {
            options = options.with_offset(offset);
        }
        if let Some(duration) = self.duration {
            options = options.with_duration(duration);
        }
        if let Some(stagger) = self.stagger {
            options = options.with_stagger(stagger);
        }
        let mut rejected = None;
        if let Some(region) = &self.region {
            match TriggerRegion::parse(region) {
                Ok(region) => options = options.with_trigger(region),
                Err(e) => rejected = Some(e),
            }
        }
        (options.sanitized(), rejected)
    }
}
