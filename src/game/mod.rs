pub mod algebra_2d;
pub mod court;
pub mod entities;
pub mod mechanics;
pub mod roster;
pub mod strategy;
