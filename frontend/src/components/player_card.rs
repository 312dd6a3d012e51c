use models::data::players::{Player, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerCardProps {
    pub player: Player,
    pub on_details: Callback<PlayerId>,
    pub on_delete: Callback<PlayerId>,
}

#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let id = props.player.id;

    let details = {
        let on_details = props.on_details.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(id))
    };

    let delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div class="column">
            <div class="card">
                <img
                    class="img-card"
                    src={props.player.image_url.clone()}
                    alt="Avatar"
                    style="width:100%"
                />
                <div class="container">
                    <h1>{props.player.name.clone()}</h1>
                    <div class="btn-container">
                        <button
                            class="details-button btn btn-primary btn-round-2"
                            data-id={id.to_string()}
                            onclick={details}
                        >
                            {"Details"}
                        </button>
                        <button
                            class="delete-button btn btn-danger btn-round-2"
                            data-id={id.to_string()}
                            onclick={delete}
                        >
                            {"Delete"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
