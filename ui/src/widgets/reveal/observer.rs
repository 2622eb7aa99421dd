//! `IntersectionObserver` subscription for the web build.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::engine::IntersectionSample;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes one element until `on_sample` returns `true`. The observer is
/// disconnected on that sample and again when the watch is dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl IntersectionWatch {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_sample: impl FnMut(IntersectionSample) -> bool + 'static,
    ) -> Result<Self, JsValue> {
        let callback = EntriesCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if on_sample(sample) {
                    observer.disconnect();
                    break;
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
