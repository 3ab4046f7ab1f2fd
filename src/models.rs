pub mod banlist;
pub mod card;
pub mod deck;
pub mod response;
