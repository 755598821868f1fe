//! UI Components

pub mod category_view;
pub mod counter_control;
pub mod dhikr_card;
pub mod tab_bar;
pub mod theme_toggle;

pub use category_view::CategoryView;
pub use counter_control::CounterControl;
pub use dhikr_card::DhikrCard;
pub use tab_bar::TabBar;
pub use theme_toggle::ThemeToggle;
