mod login;
pub use login::Login;

mod guarded_layout;
pub use guarded_layout::GuardedLayout;

mod pages;
pub use pages::{Analytics, Catalog, Home, Search, Upload};
