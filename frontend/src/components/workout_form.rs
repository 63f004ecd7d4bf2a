use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_lib::{
    form::{Field, FormFields, FormLayout, TypeRows},
    workout::WorkoutKind,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub visible: bool,
    pub layout: FormLayout,
    pub fields: FormFields,
    pub rows: TypeRows,
    pub distance_ref: NodeRef,
    pub on_kind: Callback<WorkoutKind>,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn WorkoutForm(props: &Props) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_kind = props.on_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<WorkoutKind>() {
                on_kind.emit(kind);
            }
        })
    };

    let input = |field: Field| {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    let row_class = |visible: bool| classes!("form__row", (!visible).then_some("form__row--hidden"));
    let style = match props.layout {
        FormLayout::Grid => "display: grid",
        FormLayout::Collapsed => "display: none",
    };

    html! {
        <form class={classes!("form", (!props.visible).then_some("hidden"))} {style} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" {onchange}>
                    <option value="running" selected={props.fields.kind() == WorkoutKind::Running}>{"Running"}</option>
                    <option value="cycling" selected={props.fields.kind() == WorkoutKind::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input class="form__input form__input--distance" placeholder="km"
                    ref={props.distance_ref.clone()}
                    value={props.fields.distance.clone()}
                    oninput={input(Field::Distance)} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input class="form__input form__input--duration" placeholder="min"
                    value={props.fields.duration.clone()}
                    oninput={input(Field::Duration)} />
            </div>
            <div class={row_class(props.rows.cadence_visible())}>
                <label class="form__label">{"Cadence"}</label>
                <input class="form__input form__input--cadence" placeholder="step/min"
                    value={props.fields.cadence.clone()}
                    oninput={input(Field::Cadence)} />
            </div>
            <div class={row_class(props.rows.elevation_visible())}>
                <label class="form__label">{"Elev Gain"}</label>
                <input class="form__input form__input--elevation" placeholder="meters"
                    value={props.fields.elevation.clone()}
                    oninput={input(Field::Elevation)} />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
