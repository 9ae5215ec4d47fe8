//! Online/offline monitoring bound to window events.
//!
//! Seeds an [`OnlineSignal`] from `navigator.onLine` and keeps it current
//! from the `online`/`offline` window events. Both listeners are removed on
//! drop so repeated form mounts never leak callbacks.

use report_core::OnlineSignal;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

type EventCallback = Closure<dyn FnMut(Event)>;

#[wasm_bindgen]
pub struct ConnectivityMonitor {
    signal: OnlineSignal,
    on_online: EventCallback,
    on_offline: EventCallback,
}

#[wasm_bindgen]
impl ConnectivityMonitor {
    /// Subscribe to the platform's connectivity transitions.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ConnectivityMonitor, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let signal = OnlineSignal::new(window.navigator().on_line());

        let online_signal = signal.clone();
        let on_online = Closure::wrap(Box::new(move |_event: Event| {
            online_signal.set_online(true);
        }) as Box<dyn FnMut(Event)>);

        let offline_signal = signal.clone();
        let on_offline = Closure::wrap(Box::new(move |_event: Event| {
            offline_signal.set_online(false);
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())?;
        window
            .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())?;

        Ok(ConnectivityMonitor {
            signal,
            on_online,
            on_offline,
        })
    }

    /// Current status; last-known value if the platform never fired events.
    #[wasm_bindgen(js_name = isOnline)]
    pub fn is_online(&self) -> bool {
        self.signal.is_online()
    }
}

impl ConnectivityMonitor {
    /// The underlying signal, for Rust-side subscribers.
    pub fn signal(&self) -> OnlineSignal {
        self.signal.clone()
    }
}

impl Drop for ConnectivityMonitor {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "online",
                self.on_online.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "offline",
                self.on_offline.as_ref().unchecked_ref(),
            );
        }
    }
}
