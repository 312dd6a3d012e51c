use models::data::players::Player;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerDetailProps {
    pub player: Player,
    pub on_close: Callback<()>,
}

#[function_component(PlayerDetail)]
pub fn player_detail(props: &PlayerDetailProps) -> Html {
    let player = &props.player;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let joined = match player.created_at {
        Some(created_at) => html! {
            <p class="joined">{format!("Joined {}", created_at.date())}</p>
        },
        None => html! {},
    };

    html! {
        <div class="column">
            <div class="card-puppy-details">
                <img class="img-card" src={player.image_url.clone()} alt="Avatar" style="width:100%" />
                <div class="container">
                    <h1>{player.name.clone()}</h1>
                    <h2>{player.status.to_string()}</h2>
                    <p class="breed">{player.breed.clone()}</p>
                    {joined}
                    <div class="btn-container">
                        <button class="btn btn-primary btn-round-2 close-button" onclick={close}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
