mod create_poll_form;
mod icons;
mod nav_drawer;
mod poll_card;

pub use create_poll_form::CreatePollForm;
pub use nav_drawer::NavDrawer;
pub use poll_card::PollCard;
