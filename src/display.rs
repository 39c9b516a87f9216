pub mod board_getter;
pub mod filter;
pub mod helpers;
pub mod models;
pub mod run_board;
pub mod slide_renderer;
pub mod slides;
