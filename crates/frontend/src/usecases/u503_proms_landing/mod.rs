pub mod view;

pub use view::PromsLandingPage;
