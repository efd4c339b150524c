//! Declarative view layer: node trees and the functions that build them.

pub mod node;
pub mod render;

pub use node::{Element, Node};
pub use render::{
    marker_popup_html, name_class, render_detail_page, render_directory_page, render_restaurant_item,
    render_select, DirectoryPage, ImageSettings,
};
