pub mod map;
pub mod route_card;
pub mod spinner;
pub mod steps;
