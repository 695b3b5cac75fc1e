pub mod card;
pub mod forms;
pub mod toast;
