use tracing::{info, warn};

use crate::classes::ERROR;
use crate::render::{render_tree, MAX_DECODABLE_DEPTH};
use crate::renderer::{NativeHandle, Renderer, Tag};
use crate::{Error, Result, TreeNode};

/// The container element crawl results are shown in, together with the renderer that owns it.
///
/// Each call to [`show_tree`](CrawlView::show_tree) or [`show_error`](CrawlView::show_error)
/// replaces the container's entire content.
pub struct CrawlView {
    renderer: Box<dyn Renderer>,
    container: NativeHandle,
    max_depth: usize,
}

impl CrawlView {
    /// `max_depth` is capped at [`MAX_DECODABLE_DEPTH`], since deeper responses never decode.
    pub fn new(renderer: Box<dyn Renderer>, container: NativeHandle, max_depth: usize) -> Self {
        if max_depth > MAX_DECODABLE_DEPTH {
            warn!(max_depth, cap = MAX_DECODABLE_DEPTH, "max_depth capped");
        }
        let max_depth = max_depth.min(MAX_DECODABLE_DEPTH);
        Self {
            renderer,
            container,
            max_depth,
        }
    }

    /// Replaces the container's content with the rendered `tree`.
    ///
    /// If the tree can't be rendered the container is left as it was.
    pub fn show_tree(&mut self, tree: &TreeNode) -> Result<()> {
        let list = render_tree(self.renderer.as_mut(), tree, self.max_depth)?;
        self.renderer.clear_children(&self.container);
        self.renderer.append_child(&self.container, &list);
        info!(root = %tree.name, nodes = tree.len(), "rendered crawl tree");
        Ok(())
    }

    /// Replaces the container's content with a `div.error` describing `error`.
    pub fn show_error(&mut self, error: &Error) {
        let message = self.renderer.create_element(Tag::Div);
        self.renderer.add_class(&message, ERROR);
        self.renderer.set_text_content(&message, &error.to_string());
        self.renderer.clear_children(&self.container);
        self.renderer.append_child(&self.container, &message);
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
