pub(crate) mod board;
pub(crate) mod board_theme;
pub(crate) mod control_panel;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod main_screen;
pub(crate) mod modal;
pub(crate) mod sidebar;
pub(crate) mod spinner;
pub(crate) mod status_line;
