use crate::{config, dom};
use models::{
    api::players::NewPlayer,
    data::players::PlayerStatus,
    form::PlayerForm,
};
use tracing::debug;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NewPlayerFormProps {
    pub on_create: Callback<NewPlayer>,
    pub on_cancel: Callback<()>,
}

/// Nothing is emitted unless every field is filled in and the image URL
/// points at a JPEG or PNG. Failures are reported with an alert.
#[function_component(NewPlayerForm)]
pub fn new_player_form(props: &NewPlayerFormProps) -> Html {
    let name = use_node_ref();
    let breed = use_node_ref();
    let status = use_node_ref();
    let url = use_node_ref();
    let team = use_node_ref();

    let submit = {
        let (name, breed, status, url, team) =
            (name.clone(), breed.clone(), status.clone(), url.clone(), team.clone());
        let on_create = props.on_create.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let form = PlayerForm {
                name: dom::input_value(&name),
                breed: dom::input_value(&breed),
                status: dom::select_value(&status),
                url: dom::input_value(&url),
                team: dom::select_value(&team),
            };

            match form.validate() {
                Ok(new_player) => on_create.emit(new_player),
                Err(error) => {
                    debug!(error = %error, "Rejected new player form");
                    dom::alert(&error.to_string());
                }
            }
        })
    };

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_cancel.emit(());
        })
    };

    let statuses = PlayerStatus::ALL
        .iter()
        .map(|status| {
            html! { <option value={status.as_str()}>{status.label()}</option> }
        })
        .collect::<Html>();

    let teams = config::teams()
        .into_iter()
        .map(|team| {
            html! { <option value={team.id.to_string()}>{team.name}</option> }
        })
        .collect::<Html>();

    html! {
        <form class="form-style-9" onsubmit={submit}>
            <ul>
                <li>
                    <input ref={name} type="text" id="name" class="field-style field-full align-none" placeholder="Name" />
                </li>
                <li>
                    <input ref={breed} type="text" id="breed" class="field-style field-full align-none" placeholder="Breed" />
                </li>
                <li>
                    <label for="status">{" Status: "}</label>
                    <select ref={status} id="status" name="status">{statuses}</select>
                </li>
                <li>
                    <input ref={url} type="text" id="url" class="field-style field-full align-none" placeholder="url" />
                </li>
                <li>
                    <label for="team">{" Team: "}</label>
                    <select ref={team} id="team" name="team">{teams}</select>
                </li>
                <li>
                    <input class="details-button btn btn-primary btn-round-2" type="submit" id="create-button" value="Create" />
                    <input class="delete-button btn btn-danger btn-round-2" type="button" id="cancel-button" value="Cancel" onclick={cancel} />
                </li>
            </ul>
        </form>
    }
}
