use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::engine::{RevealEngine, RevealOptions, DEFAULT_THRESHOLD};
use crate::core::platform;

#[cfg(target_arch = "wasm32")]
use super::observer::IntersectionWatch;

#[cfg(target_arch = "wasm32")]
type WatchSlot = Rc<RefCell<Option<IntersectionWatch>>>;
#[cfg(not(target_arch = "wasm32"))]
type WatchSlot = Rc<RefCell<Option<()>>>;

/// Wraps children in a container that fades/slides in the first time it is
/// scrolled into view.
#[component]
pub fn Reveal(
    children: Element,
    #[props(default, into)] class: String,
    // Transition delay, staggers sibling reveals.
    #[props(default)]
    delay_ms: u32,
    #[props(default = DEFAULT_THRESHOLD)] threshold: f64,
) -> Element {
    let options = RevealOptions { threshold };
    let engine = use_signal(move || {
        if platform::supports_intersection_observer() {
            RevealEngine::new(options)
        } else {
            RevealEngine::visible(options)
        }
    });

    let watch: WatchSlot = use_hook(|| Rc::new(RefCell::new(None)));
    {
        let watch = watch.clone();
        use_drop(move || {
            watch.borrow_mut().take();
        });
    }

    let on_mounted = move |evt: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        attach_observer(&evt, engine, watch.clone());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (&evt, &watch);
    };

    let state_class = if engine.read().is_visible() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        div {
            class: "{state_class} {class}",
            style: "transition-delay: {delay_ms}ms",
            onmounted: on_mounted,
            {children}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_observer(evt: &MountedEvent, mut engine: Signal<RevealEngine>, slot: WatchSlot) {
    if engine.peek().is_visible() || slot.borrow().is_some() {
        return;
    }

    let data = evt.data();
    let Some(element) = data.downcast::<web_sys::Element>().cloned() else {
        tracing::warn!("[reveal] mounted node is not a DOM element; showing content");
        engine.with_mut(|e| e.fail_open());
        return;
    };

    let threshold = engine.peek().options().threshold;
    let watch = IntersectionWatch::observe(&element, threshold, move |sample| {
        engine.with_mut(|e| e.observe(sample))
    });

    match watch {
        Ok(watch) => {
            slot.borrow_mut().replace(watch);
        }
        Err(err) => {
            tracing::warn!("[reveal] IntersectionObserver unavailable ({err:?}); showing content");
            engine.with_mut(|e| e.fail_open());
        }
    }
}
