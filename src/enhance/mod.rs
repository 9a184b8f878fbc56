//! Page Enhancements
//!
//! Small behaviors layered over the server-rendered pages. Each one goes
//! inert on its own when its elements are absent.

mod contact_form;
mod header_state;
mod lazy_images;
mod phone_mask;
mod preloader;
mod smooth_scroll;

pub use contact_form::init_contact_form;
pub use header_state::init_header_state;
pub use lazy_images::init_lazy_images;
pub use phone_mask::init_phone_mask;
pub use preloader::init_preloader;
pub use smooth_scroll::init_smooth_scroll;
