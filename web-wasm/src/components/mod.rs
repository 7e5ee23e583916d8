pub mod cart_page;
pub mod confirmation_page;
pub mod header;
pub mod landing_page;
pub mod loading;
pub mod menu_page;
pub mod payment_page;
pub mod progress_bar;
pub mod tracking_page;
