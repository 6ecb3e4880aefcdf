pub mod gallery;
pub mod product_form;
