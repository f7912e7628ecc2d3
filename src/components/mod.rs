pub mod chart_gallery;
pub mod publisher_list;
