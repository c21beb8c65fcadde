pub mod blocks;
pub mod context;
pub mod events;
pub mod output;
pub mod primitives;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
