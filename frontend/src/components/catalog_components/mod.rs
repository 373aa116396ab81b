pub mod active_filter_chips;
pub mod board_tabs;
pub mod card_action_buttons;
pub mod course_card;
pub mod course_grid;
pub mod empty_state;
pub mod filter_drawer;
pub mod filter_sidebar;
pub mod search_box;
pub mod sort_selector;
