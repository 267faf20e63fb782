use crate::classes::{ACTIVE, EXPANDABLE, EXPANDED, HIDDEN, NESTED, NODE_LABEL};
use crate::renderer::{ClickListener, EventContext, NativeHandle, Renderer, Tag};
use crate::{Error, Result, TreeNode};

/// Deepest tree [`render_tree`] accepts unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Deepest tree a crawl response can carry. Each tree level is an object inside a `children`
/// array, and `serde_json` refuses input nested more than 128 levels.
pub const MAX_DECODABLE_DEPTH: usize = 63;

/// Builds the expandable list view of `tree` and returns the handle of its top-level `ul`.
///
/// The top-level list holds a single `li` for the root. Every `li` holds a `span.node-label`
/// with the node's name; a node with children additionally gets `expandable` on its label and a
/// collapsed `ul.nested.hidden` holding one `li` per child, in order. Clicking such a label
/// expands or collapses its list without affecting any ancestor.
///
/// Trees deeper than `max_depth` are rejected with [`Error::TooDeep`] before any element is
/// created.
pub fn render_tree(
    renderer: &mut dyn Renderer,
    tree: &TreeNode,
    max_depth: usize,
) -> Result<NativeHandle> {
    let depth = tree.depth();
    if depth > max_depth {
        return Err(Error::TooDeep {
            depth,
            limit: max_depth,
        });
    }

    // `lists[0]` is the top-level list; every other entry is a nested list, and the stack
    // refers to the list a node's item is appended to by index.
    let mut lists = vec![renderer.create_element(Tag::Ul)];
    let mut stack = vec![(tree, 0)];

    while let Some((node, list)) = stack.pop() {
        let item = renderer.create_element(Tag::Li);
        let label = renderer.create_element(Tag::Span);
        renderer.set_text_content(&label, &node.name);
        renderer.add_class(&label, NODE_LABEL);
        renderer.append_child(&item, &label);

        if !node.is_leaf() {
            renderer.add_class(&label, EXPANDABLE);
            let nested = renderer.create_element(Tag::Ul);
            renderer.add_class(&nested, NESTED);
            renderer.add_class(&nested, HIDDEN);
            renderer.append_child(&item, &nested);

            let listener = toggle_listener(
                renderer.duplicate_handle(&label),
                renderer.duplicate_handle(&nested),
            );
            renderer.add_click_listener(&label, listener);

            // Reversed so the first child is popped, and appended, first.
            let nested_idx = lists.len();
            lists.push(nested);
            stack.extend(node.children.iter().rev().map(|child| (child, nested_idx)));
        }

        renderer.append_child(&lists[list], &item);
    }

    Ok(lists.swap_remove(0))
}

fn toggle_listener(label: NativeHandle, nested: NativeHandle) -> ClickListener {
    Box::new(move |event: &mut dyn EventContext| {
        event.stop_propagation();
        event.toggle_class(&nested, HIDDEN);
        event.toggle_class(&nested, ACTIVE);
        event.toggle_class(&label, EXPANDED);
    })
}
