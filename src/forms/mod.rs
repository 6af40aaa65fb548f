pub mod form;
pub mod synthesis;


pub use form::{Form, Lick};
pub use synthesis::{calculate_form, calculate_form_from, FormShape};
