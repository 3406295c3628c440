pub mod player;

pub use player::{
    PlayerRecord, Sex, CLUB_COLUMN, CLUB_NAMES, FIRST_NAME_COLUMN, LAST_NAME_COLUMN, PLAYER_COLUMNS,
    SEX_COLUMN, SPORT_COLUMN,
};
