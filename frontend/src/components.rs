pub mod new_player_form;
pub mod player_card;
pub mod player_detail;
pub mod player_list;
