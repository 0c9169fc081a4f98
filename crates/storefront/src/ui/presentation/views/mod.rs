pub mod pack_view;

pub use pack_view::PackView;
