use super::player_card::PlayerCard;
use crate::{config, dom};
use models::data::players::{Player, PlayerId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlayerListProps {
    pub players: Vec<Player>,
    pub visible: bool,
    pub on_details: Callback<PlayerId>,
    pub on_delete: Callback<PlayerId>,
}

/// One card per player, in the order the API returned them.
#[function_component(PlayerList)]
pub fn player_list(props: &PlayerListProps) -> Html {
    let cards = props
        .players
        .iter()
        .map(|player| {
            html! {
                <PlayerCard
                    key={player.id.to_string()}
                    player={player.clone()}
                    on_details={props.on_details.clone()}
                    on_delete={props.on_delete.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div id={config::PLAYERS_CONTAINER_ID} style={dom::hidden_unless(props.visible)}>
            {cards}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::data::players::PlayerStatus;
    use yew::ServerRenderer;

    fn player(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            breed: String::from("Beagle"),
            status: PlayerStatus::Bench,
            image_url: format!("https://example.com/{}.png", name.to_lowercase()),
            team_id: Some(375),
            cohort_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    async fn render(players: Vec<Player>, visible: bool) -> String {
        ServerRenderer::<PlayerList>::with_props(move || PlayerListProps {
            players,
            visible,
            on_details: Callback::noop(),
            on_delete: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn one_card_per_player() {
        let html = render(vec![player(4, "Crumpet"), player(9, "Pumpkin")], true).await;

        assert_eq!(html.matches(r#"class="column""#).count(), 2);
        assert_eq!(html.matches(r#"class="card""#).count(), 2);
        assert_eq!(html.matches(r#"class="img-card""#).count(), 2);

        assert!(html.contains(r#"src="https://example.com/crumpet.png""#));
        assert!(html.contains("<h1>Crumpet</h1>"));
        assert!(html.contains("<h1>Pumpkin</h1>"));
        assert_eq!(html.matches(r#"data-id="4""#).count(), 2);
        assert_eq!(html.matches(r#"data-id="9""#).count(), 2);
        assert_eq!(html.matches("details-button").count(), 2);
        assert_eq!(html.matches("delete-button").count(), 2);
    }

    #[tokio::test]
    async fn cards_keep_api_order() {
        let html = render(vec![player(9, "Pumpkin"), player(4, "Crumpet")], true).await;

        let pumpkin = html.find("Pumpkin").unwrap();
        let crumpet = html.find("Crumpet").unwrap();
        assert!(pumpkin < crumpet);
    }

    #[tokio::test]
    async fn empty_roster() {
        let html = render(Vec::new(), true).await;

        assert!(html.contains(r#"id="players-container""#));
        assert!(!html.contains(r#"class="card""#));
    }

    #[tokio::test]
    async fn visibility_is_only_ever_hidden_inline() {
        let shown = render(vec![player(4, "Crumpet")], true).await;
        assert!(!shown.contains("display:"));

        let hidden = render(vec![player(4, "Crumpet")], false).await;
        assert!(hidden.contains(r#"style="display: none""#));
    }
}
