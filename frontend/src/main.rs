use browser::{BrowserAlert, BrowserGeolocation};
use components::{
    map_component::LeafletProvider,
    workout_form::WorkoutForm,
    workout_list::{WorkoutItem, entry_click},
};
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use workout_lib::{
    capability::SystemClock,
    config::SessionConfig,
    coordinates::Coordinates,
    error::{LocationError, SessionError},
    form::Field,
    session::SessionController,
    workout::WorkoutKind,
};
use yew::prelude::*;

mod browser;
mod components;
mod logging;

enum MainMsg {
    Located(Result<Coordinates, LocationError>),
    MapClicked(Coordinates),
    SelectKind(WorkoutKind),
    Input(Field, String),
    Submit,
    RestoreLayout,
    EntryClicked(Option<String>),
}

struct Model {
    session: SessionController<LeafletProvider, BrowserAlert, SystemClock>,
    map_view: Html,
    distance_ref: NodeRef,
    focus_distance: bool,
    restore_timeout: Option<Timeout>,
}

fn load_config() -> SessionConfig {
    SessionConfig::from_json_str(include_str!("../session_config.json")).unwrap_or_else(|err| {
        error!(format!("{err}, using defaults"));
        SessionConfig::default()
    })
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let provider = match LeafletProvider::new() {
            Ok(provider) => provider,
            Err(err) => {
                error!("Failed to create map container", err);
                panic!("No document to render the map into");
            }
        };
        let map_view = provider.render_map();

        let session = SessionController::new(load_config(), provider, BrowserAlert, SystemClock);

        let located = ctx.link().callback(MainMsg::Located);
        session.request_location(&BrowserGeolocation, Box::new(move |result| located.emit(result)));

        Self {
            session,
            map_view,
            distance_ref: NodeRef::default(),
            focus_distance: false,
            restore_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Located(result) => {
                let clicked = ctx.link().callback(MainMsg::MapClicked);
                if let Err(err) = self.session.handle_position(result, Box::new(move |at| clicked.emit(at))) {
                    error!(format!("{err}"));
                }
            }
            MainMsg::MapClicked(at) => {
                self.session.handle_map_click(at);
                self.focus_distance = self.session.form_state().is_visible();
            }
            MainMsg::SelectKind(kind) => self.session.select_kind(kind),
            MainMsg::Input(field, text) => self.session.set_field(field, text),
            MainMsg::Submit => match self.session.submit() {
                Ok(id) => {
                    info!(format!("Workout {id} added"));
                    let restore = ctx.link().callback(|()| MainMsg::RestoreLayout);
                    let delay = self.session.config().layout_restore_delay_ms;
                    self.restore_timeout = Some(Timeout::new(delay, move || restore.emit(())));
                }
                Err(SessionError::InvalidInput(err)) => info!(format!("Rejected input: {err}")),
                Err(err) => error!(format!("{err}")),
            },
            MainMsg::RestoreLayout => {
                self.restore_timeout = None;
                self.session.restore_form_layout();
            }
            MainMsg::EntryClicked(id) => {
                self.session.handle_list_click(id.as_deref());
                return false;
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.focus_distance) {
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    error!("Failed to focus distance input", err);
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let session = &self.session;

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts" onclick={entry_click(link.callback(MainMsg::EntryClicked))}>
                        <WorkoutForm
                            visible={session.form_state().is_visible()}
                            layout={session.form_layout()}
                            fields={session.fields().clone()}
                            rows={session.type_rows()}
                            distance_ref={self.distance_ref.clone()}
                            on_kind={link.callback(MainMsg::SelectKind)}
                            on_input={link.callback(|(field, text)| MainMsg::Input(field, text))}
                            on_submit={link.callback(|()| MainMsg::Submit)} />
                        { for session.list_entries().map(|entry| {
                            let key = entry.id.to_string();
                            html! { <WorkoutItem key={key} entry={entry} /> }
                        }) }
                    </ul>
                </div>
                <div class="map-container">
                    {self.map_view.clone()}
                </div>
            </>
        }
    }
}

fn main() {
    logging::init();
    yew::Renderer::<Model>::new().render();
}
