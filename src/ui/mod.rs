pub mod browser;
pub mod countdown;
pub mod exit_popup;
pub mod icon;
pub mod lead_form;
pub mod notifications;
pub mod pages;
pub mod rotating_text;
pub mod scroll_reveal;

pub use icon::{Icon, icons};
pub use lead_form::LeadForm;
pub use notifications::{
    NotificationManager, NotificationsContainer, provide_notifications, use_notifications,
};
