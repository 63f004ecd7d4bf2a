use gloo_console::info;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, Popup as LeafletPopup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, JsValue, prelude::{Closure, wasm_bindgen}};
use web_sys::{HtmlElement, Node, js_sys::{Object, Reflect}};
use workout_lib::{
    capability::{ClickHandler, MapProvider, MapSurface, ViewOptions},
    config::TileConfig,
    coordinates::Coordinates,
    render::Popup,
};
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    // The parts of L.Map the leaflet bindings don't expose with options
    type MapHandle;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view_with_options(this: &MapHandle, center: &LatLng, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method)]
    fn on(this: &MapHandle, kind: &str, handler: &JsValue);
}

/// Builds the leaflet map into a container element owned by the root component.
pub struct LeafletProvider {
    container: HtmlElement,
}

impl LeafletProvider {
    pub fn new() -> Result<Self, JsValue> {
        let container: HtmlElement = document().create_element("div")?.dyn_into()?;
        container.set_id("map");
        Ok(Self { container })
    }

    pub fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapProvider for LeafletProvider {
    type Map = LeafletMap;

    fn create_map(&mut self, center: Coordinates, zoom: f64, tiles: &TileConfig, on_click: ClickHandler) -> LeafletMap {
        let map = Map::new_with_element(&self.container, &MapOptions::default());
        map.set_view(&lat_lng(center), zoom);
        add_tile_layer(&map, tiles);

        let click = Closure::<dyn Fn(JsValue)>::new(move |event: JsValue| {
            let at = event.unchecked_into::<leaflet::MouseEvent>().lat_lng();
            on_click(Coordinates::new(at.lat(), at.lng()));
        });
        map.unchecked_ref::<MapHandle>().on("click", click.as_ref());

        info!(format!("Map ready at {}, {}", center.latitude, center.longitude));
        LeafletMap { map, _click: click }
    }
}

pub struct LeafletMap {
    map: Map,
    _click: Closure<dyn Fn(JsValue)>,
}

impl MapSurface for LeafletMap {
    fn set_view(&mut self, center: Coordinates, zoom: f64, options: ViewOptions) {
        let pan = Object::new();
        set_property(&pan, "duration", &options.pan_duration_secs.into());
        let opts = Object::new();
        set_property(&opts, "animate", &options.animate.into());
        set_property(&opts, "pan", &pan);

        self.map.unchecked_ref::<MapHandle>().set_view_with_options(&lat_lng(center), zoom, &opts);
    }

    fn add_marker(&mut self, at: Coordinates, popup: Popup) {
        let opts = PopupOptions::default();
        opts.set_max_width(popup.options.max_width);
        opts.set_min_width(popup.options.min_width);
        opts.set_auto_close(popup.options.auto_close);
        opts.set_close_on_click(popup.options.close_on_click);
        opts.set_class_name(popup.options.class_name);

        let leaflet_popup = LeafletPopup::new(&opts, None);
        leaflet_popup.set_content(&popup.content.into());

        let marker = Marker::new(&lat_lng(at));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        marker.open_popup();
    }
}

fn lat_lng(coordinates: Coordinates) -> LatLng {
    LatLng::new(coordinates.latitude, coordinates.longitude)
}

fn set_property(target: &JsValue, key: &str, value: &JsValue) {
    if Reflect::set(target, &key.into(), value).is_err() {
        gloo_console::error!(format!("Failed to set map option {key}"));
    }
}

fn add_tile_layer(map: &Map, tiles: &TileConfig) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    set_property(&opts, "attribution", &tiles.attribution.as_str().into());
    TileLayer::new_options(&tiles.url_template, &opts).add_to(map);
}
