mod lenient;
pub mod navigation;
pub mod section;
pub mod template;
pub mod validation;
