use std::{cell::RefCell, rc::Rc};

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::{
    capability::{ClickHandler, Clock, Geolocation, MapProvider, MapSurface, Notifier, PositionCallback, ViewOptions},
    config::TileConfig,
    coordinates::Coordinates,
    error::LocationError,
    render::Popup,
};

pub fn fixed_time(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_owned());
    }
}

pub struct FakeGeolocation(pub Result<Coordinates, LocationError>);

impl Geolocation for FakeGeolocation {
    fn current_position(&self, callback: PositionCallback) {
        callback(self.0.clone());
    }
}

#[derive(Default)]
struct MapLog {
    created: Vec<(Coordinates, f64)>,
    markers: Vec<(Coordinates, Popup)>,
    views: Vec<(Coordinates, f64, ViewOptions)>,
    on_click: Option<ClickHandler>,
}

/// Map provider whose maps write everything they are asked to draw into a shared log.
#[derive(Clone, Default)]
pub struct RecordingProvider {
    log: Rc<RefCell<MapLog>>,
}

impl RecordingProvider {
    pub fn created(&self) -> Vec<(Coordinates, f64)> {
        self.log.borrow().created.clone()
    }

    pub fn markers(&self) -> Vec<(Coordinates, Popup)> {
        self.log.borrow().markers.clone()
    }

    pub fn views(&self) -> Vec<(Coordinates, f64, ViewOptions)> {
        self.log.borrow().views.clone()
    }

    pub fn click(&self, at: Coordinates) {
        if let Some(handler) = self.log.borrow().on_click.as_ref() {
            handler(at);
        }
    }
}

pub struct RecordingMap {
    log: Rc<RefCell<MapLog>>,
}

impl MapSurface for RecordingMap {
    fn set_view(&mut self, center: Coordinates, zoom: f64, options: ViewOptions) {
        self.log.borrow_mut().views.push((center, zoom, options));
    }

    fn add_marker(&mut self, at: Coordinates, popup: Popup) {
        self.log.borrow_mut().markers.push((at, popup));
    }
}

impl MapProvider for RecordingProvider {
    type Map = RecordingMap;

    fn create_map(&mut self, center: Coordinates, zoom: f64, _tiles: &TileConfig, on_click: ClickHandler) -> Self::Map {
        let mut log = self.log.borrow_mut();
        log.created.push((center, zoom));
        log.on_click = Some(on_click);
        RecordingMap { log: self.log.clone() }
    }
}
