pub mod renderer;


pub use renderer::{render_form, render_notes};
