use std::{cell::RefCell, rc::Rc};

use gloo_console::error;
use gloo_utils::window;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Position, PositionError};
use workout_lib::{
    capability::{Geolocation, Notifier, PositionCallback},
    coordinates::Coordinates,
    error::LocationError,
};

pub struct BrowserGeolocation;

impl Geolocation for BrowserGeolocation {
    fn current_position(&self, callback: PositionCallback) {
        let Ok(geolocation) = window().navigator().geolocation() else {
            callback(Err(LocationError::Unsupported));
            return;
        };

        // Shared so that whichever of the two browser callbacks fires consumes it
        let callback = Rc::new(RefCell::new(Some(callback)));

        let on_success = {
            let callback = callback.clone();
            Closure::once_into_js(move |position: JsValue| {
                let coords = position.unchecked_into::<Position>().coords();
                if let Some(callback) = callback.borrow_mut().take() {
                    callback(Ok(Coordinates::new(coords.latitude(), coords.longitude())));
                }
            })
        };

        let on_failure = {
            let callback = callback.clone();
            Closure::once_into_js(move |err: JsValue| {
                let message = err.unchecked_into::<PositionError>().message();
                if let Some(callback) = callback.borrow_mut().take() {
                    callback(Err(LocationError::Denied(message)));
                }
            })
        };

        if let Err(err) = geolocation.get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_failure.unchecked_ref())) {
            error!("Geolocation request failed", err);
            if let Some(callback) = callback.borrow_mut().take() {
                callback(Err(LocationError::Unsupported));
            }
        }
    }
}

pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!("Failed to show alert", err);
        }
    }
}
