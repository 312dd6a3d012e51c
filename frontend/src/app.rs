use crate::{
    components::{
        new_player_form::NewPlayerForm, player_detail::PlayerDetail, player_list::PlayerList,
    },
    config, dom,
};
use api_client::{ApiConfig, PlayerApiClient};
use models::{
    api::players::NewPlayer,
    data::players::{Player, PlayerId},
};
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Which part of the page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Roster,
    /// `player` is `None` while it is still being fetched.
    Detail {
        id: PlayerId,
        player: Option<Player>,
    },
    NewPlayer,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Roster => config::ROSTER_TITLE,
            View::Detail { .. } => config::DETAIL_TITLE,
            View::NewPlayer => config::NEW_PLAYER_TITLE,
        }
    }

    pub fn shows_roster(&self) -> bool {
        matches!(self, View::Roster)
    }

    pub fn shows_detail(&self) -> bool {
        matches!(self, View::Detail { .. })
    }

    pub fn shows_new_player_form(&self) -> bool {
        matches!(self, View::NewPlayer)
    }

    pub fn shows_new_player_button(&self) -> bool {
        !self.shows_new_player_form()
    }

    /// Results of requests are only applied while the view that started them
    /// is still showing.
    fn next(&self, action: ViewAction) -> Option<View> {
        match (action, self) {
            (ViewAction::ShowRoster, _) => Some(View::Roster),
            (ViewAction::OpenDetail(id), _) => Some(View::Detail { id, player: None }),
            (
                ViewAction::DetailLoaded(player),
                View::Detail {
                    id,
                    player: None,
                },
            ) if *id == player.id => Some(View::Detail {
                id: *id,
                player: Some(player),
            }),
            (
                ViewAction::DetailFailed(failed),
                View::Detail {
                    id,
                    player: None,
                },
            ) if *id == failed => Some(View::Roster),
            (ViewAction::OpenNewPlayerForm, _) => Some(View::NewPlayer),
            (ViewAction::PlayerCreated, View::NewPlayer) => Some(View::Roster),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ViewAction {
    ShowRoster,
    OpenDetail(PlayerId),
    DetailLoaded(Player),
    DetailFailed(PlayerId),
    OpenNewPlayerForm,
    PlayerCreated,
}

impl Reducible for View {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Shared handle to the API client. Compared by identity so it can be used
/// as a hook dependency.
#[derive(Clone)]
struct Api(Rc<PlayerApiClient>);

impl PartialEq for Api {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

async fn refresh_roster(api: &PlayerApiClient, players: &UseStateSetter<Vec<Player>>) {
    match api.fetch_all_players().await {
        Ok(roster) => {
            info!(count = roster.len(), "Fetched players");
            players.set(roster);
        }
        Err(error) => error!(error = %error, "Uh oh, trouble fetching players!"),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let api = use_state(|| {
        Api(Rc::new(PlayerApiClient::from_config(
            &ApiConfig::from_build_env(),
        )))
    });
    let players: UseStateHandle<Vec<Player>> = use_state(Vec::new);
    let view = use_reducer(|| View::Roster);

    let load_players = use_callback(
        ((*api).clone(), players.setter()),
        move |_: (), (api, players)| {
            let api = api.clone();
            let players = players.clone();
            spawn_local(async move {
                refresh_roster(&api.0, &players).await;
            });
        },
    );

    use_effect_with((), {
        let load_players = load_players.clone();
        move |_| {
            load_players.emit(());
        }
    });

    let show_details = use_callback(
        ((*api).clone(), view.dispatcher()),
        move |id: PlayerId, (api, view)| {
            view.dispatch(ViewAction::OpenDetail(id));

            let api = api.clone();
            let view = view.clone();
            spawn_local(async move {
                match api.0.fetch_single_player(id).await {
                    Ok(player) => view.dispatch(ViewAction::DetailLoaded(player)),
                    Err(error) => {
                        error!(error = %error, id, "Oh no, trouble fetching player!");
                        view.dispatch(ViewAction::DetailFailed(id));
                    }
                }
            });
        },
    );

    let delete_player = use_callback(
        ((*api).clone(), players.setter()),
        move |id: PlayerId, (api, players)| {
            let api = api.clone();
            let players = players.clone();
            spawn_local(async move {
                if let Err(error) = api.0.remove_player(id).await {
                    error!(
                        error = %error,
                        id,
                        "Whoops, trouble removing player from the roster!"
                    );
                }
                refresh_roster(&api.0, &players).await;
            });
        },
    );

    let create_player = use_callback(
        ((*api).clone(), players.setter(), view.dispatcher()),
        move |new_player: NewPlayer, (api, players, view)| {
            let api = api.clone();
            let players = players.clone();
            let view = view.clone();
            spawn_local(async move {
                match api.0.add_new_player(&new_player).await {
                    Ok(player) => info!(id = player.id, name = %player.name, "Added player"),
                    Err(error) => error!(
                        error = %error,
                        "Oops, something went wrong with adding that player!"
                    ),
                }
                refresh_roster(&api.0, &players).await;
                view.dispatch(ViewAction::PlayerCreated);
            });
        },
    );

    let show_roster = use_callback(view.dispatcher(), move |_: (), view| {
        view.dispatch(ViewAction::ShowRoster);
    });

    let show_new_player_form =
        use_callback(view.dispatcher(), move |event: MouseEvent, view| {
            event.prevent_default();
            view.dispatch(ViewAction::OpenNewPlayerForm);
        });

    let detail = match &*view {
        View::Detail {
            player: Some(player),
            ..
        } => html! {
            <PlayerDetail player={player.clone()} on_close={show_roster.clone()} />
        },
        _ => html! {},
    };

    let form = match &*view {
        View::NewPlayer => html! {
            <NewPlayerForm on_create={create_player} on_cancel={show_roster.clone()} />
        },
        _ => html! {},
    };

    html! {
        <main>
            <h1 id={config::TITLE_ID}>{view.title()}</h1>
            <button
                id={config::NEW_PLAYER_BUTTON_ID}
                class="btn btn-primary btn-round-2"
                style={dom::hidden_unless(view.shows_new_player_button())}
                onclick={show_new_player_form}
            >
                {"Add a new Player"}
            </button>
            <PlayerList
                players={(*players).clone()}
                visible={view.shows_roster()}
                on_details={show_details}
                on_delete={delete_player}
            />
            <div
                id={config::PLAYER_DETAIL_CONTAINER_ID}
                style={dom::hidden_unless(view.shows_detail())}
            >
                {detail}
            </div>
            <div
                id={config::NEW_PLAYER_FORM_ID}
                style={dom::hidden_unless(view.shows_new_player_form())}
            >
                {form}
            </div>
        </main>
    }
}
