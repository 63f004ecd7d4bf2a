use web_sys::Element;
use workout_lib::render::ListEntry;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct ItemProps {
    pub entry: ListEntry,
}

#[function_component]
pub fn WorkoutItem(props: &ItemProps) -> Html {
    let entry = &props.entry;
    html! {
        <li class={entry.class_name()} data-id={entry.id.to_string()}>
            <h2 class="workout__title">{entry.title.clone()}</h2>
            { for entry.details.iter().map(|detail| html! {
                <div class="workout__details">
                    <span class="workout__icon">{detail.icon}</span>
                    <span class="workout__value">{detail.value.clone()}</span>
                    <span class="workout__unit">{detail.unit}</span>
                </div>
            }) }
        </li>
    }
}

/// Click handler for the list container. Only clicks inside a workout entry
/// are forwarded, carrying the entry's id if it has one.
pub fn entry_click(on_entry: Callback<Option<String>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        let Some(target) = e.target_dyn_into::<Element>() else {
            return;
        };
        if let Ok(Some(entry)) = target.closest(".workout") {
            on_entry.emit(entry.get_attribute("data-id"));
        }
    })
}
