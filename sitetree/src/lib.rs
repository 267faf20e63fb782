//! `sitetree` renders the link tree returned by a crawl server as an expandable list,
//! and drives the two requests a crawl page makes: starting a crawl and stopping it.
//!
//! Nothing here touches a browser directly. The UI is reached through [`Renderer`](renderer::Renderer),
//! the network through [`Transport`](transport::Transport), and user notification through
//! [`Notifier`](handlers::Notifier). `sitetree-web` provides the browser implementations.

#[cfg(test)]
#[allow(dead_code)]
mod tests;

///Runtime configuration for the viewer: endpoints, element ids and limits.
pub mod config;
mod error;
///Submit and stop flows.
pub mod handlers;
///The tree data returned by the crawl server.
pub mod node;
///The trait through which the tree is built in a platform-specific UI.
pub mod renderer;
///Converts a `TreeNode` into native UI elements.
pub mod render;
///Requests and responses exchanged with the crawl server.
pub mod request;
///A reference-counted interior-mutable cell.
pub mod shared;
///An abstraction over issuing HTTP requests.
pub mod transport;
///The container a tree or error state is shown in.
pub mod view;

pub use error::{Error, Result};
pub use node::TreeNode;

/// CSS class names forming the contract with the page's stylesheet.
pub mod classes {
    /// Every node's name label.
    pub const NODE_LABEL: &str = "node-label";
    /// Labels of nodes that have children.
    pub const EXPANDABLE: &str = "expandable";
    /// A list holding a node's children.
    pub const NESTED: &str = "nested";
    /// A collapsed nested list.
    pub const HIDDEN: &str = "hidden";
    /// An expanded nested list.
    pub const ACTIVE: &str = "active";
    /// The label of an expanded node.
    pub const EXPANDED: &str = "expanded";
    /// The element shown in place of a tree when a request fails.
    pub const ERROR: &str = "error";
}
