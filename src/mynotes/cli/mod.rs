//! Terminal front end: argument parsing, the login prompts and the numbered menu.

pub mod menu;
mod print;
pub mod setup;
