pub mod counter;
pub mod faq;
pub mod observer;
pub mod reveal;
pub mod waitlist_form;
