//! Shared chrome wrapped around every view.

use crate::ui::render::{Node, Page};
use crate::ui::routes::Route;

pub const BRAND: &str = "Bookshelf";

pub struct Layout;

impl Layout {
    /// Prepends the navigation header to a view's body.
    pub fn wrap(body: Vec<Node>) -> Page {
        let mut nodes = Vec::with_capacity(body.len() + 1);
        nodes.push(Self::header());
        nodes.extend(body);
        Page::View(nodes)
    }

    fn header() -> Node {
        Node::Nav(vec![
            Node::text(BRAND),
            Node::link("Home", Route::Home),
            Node::link("Books", Route::Books),
            Node::link("Create Book", Route::CreateBook),
            Node::link("Counter", Route::Counter),
        ])
    }
}
