
use std::cell::Cell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classes::{ACTIVE, ERROR, EXPANDABLE, EXPANDED, HIDDEN, NESTED, NODE_LABEL};
use crate::render::{render_tree, DEFAULT_MAX_DEPTH, MAX_DECODABLE_DEPTH};
use crate::renderer::{EventContext, Renderer, Tag};
use crate::shared::Shared;
use crate::view::CrawlView;
use crate::{Error, TreeNode};

use self::native_mock::{Node, Root};
use self::native_repr::{item, tree, Repr};
use self::renderer::TestRenderer;

fn example() -> TreeNode {
    serde_json::from_str(
        r#"{"name": "root", "children": [{"name": "a"}, {"name": "b", "children": [{"name": "c"}]}]}"#,
    )
    .unwrap()
}

/// Renders `tree` with a fresh mock root, returning the root and the top-level list.
fn render(tree: &TreeNode) -> (Shared<Root>, Node) {
    let root = Shared::new(Root::new());
    let mut renderer = TestRenderer::new(root.clone());
    let list = render_tree(&mut renderer, tree, DEFAULT_MAX_DEPTH).unwrap();
    (root, Node::from_handle(&list).clone())
}

/// Creates a view over a mock container element.
fn view(max_depth: usize) -> (Shared<Root>, Node, CrawlView) {
    let root = Shared::new(Root::new());
    let container = root.exec_mut(|root| root.create_node(Tag::Div));
    let renderer = TestRenderer::new(root.clone());
    let view = CrawlView::new(Box::new(renderer), Box::new(container.clone()), max_depth);
    (root, container, view)
}

fn chain(depth: usize) -> TreeNode {
    let mut node = TreeNode::leaf(format!("n{}", depth));
    for i in (0..depth).rev() {
        node = TreeNode::with_children(format!("n{}", i), vec![node]);
    }
    node
}

#[test]
fn example_tree() {
    let (_, list) = render(&example());
    assert_eq!(
        list.to_repr(),
        tree(item(
            "root",
            vec![item("a", vec![]), item("b", vec![item("c", vec![])])]
        ))
    );
}

#[test]
fn leaf_root() {
    for json in [
        r#"{"name": "solo"}"#,
        r#"{"name": "solo", "children": []}"#,
    ] {
        let (root, list) = render(&serde_json::from_str(json).unwrap());
        assert_eq!(
            list.to_repr(),
            Repr::element(
                Tag::Ul,
                vec![],
                vec![Repr::element(
                    Tag::Li,
                    vec![],
                    vec![Repr {
                        tag: Tag::Span,
                        text: "solo".to_string(),
                        classes: vec![NODE_LABEL],
                        has_on_click: false,
                        children: vec![],
                    }]
                )]
            )
        );
        assert!(root.exec(|root| root.label("solo")).nested_list().is_none());
    }
}

#[test]
fn children_keep_server_order() {
    let names = ["https://e.com/z", "https://e.com/a", "https://e.com/m", "https://e.com/b"];
    let node = TreeNode::with_children(
        "https://e.com/",
        names.iter().map(|name| TreeNode::leaf(*name)).collect(),
    );
    let (root, _) = render(&node);
    let nested = root
        .exec(|root| root.label("https://e.com/"))
        .nested_list()
        .unwrap();
    assert_eq!(nested.children_len(), names.len());
    for (pos, name) in names.iter().enumerate() {
        let label = nested.child(pos).child(0);
        assert_eq!(label.to_repr().text, *name);
    }
}

#[test]
fn click_toggles_nested_list() {
    let (root, _) = render(&example());
    let label = root.exec(|root| root.label("root"));
    let nested = label.nested_list().unwrap();
    assert_eq!(nested.classes(), [NESTED, HIDDEN]);

    label.click();
    assert_eq!(nested.classes(), [NESTED, ACTIVE]);
    assert_eq!(label.classes(), [NODE_LABEL, EXPANDABLE, EXPANDED]);

    label.click();
    assert_eq!(nested.classes(), [NESTED, HIDDEN]);
    assert_eq!(label.classes(), [NODE_LABEL, EXPANDABLE]);
}

#[test]
fn child_click_stays_within_child() {
    let root = Shared::new(Root::new());
    let mut renderer = TestRenderer::new(root.clone());

    // An ancestor listening for clicks, as a page might.
    let ancestor = renderer.create_element(Tag::Div);
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    renderer.add_click_listener(&ancestor, Box::new(move |_: &mut dyn EventContext| {
        counter.set(counter.get() + 1)
    }));

    let list = render_tree(&mut renderer, &example(), DEFAULT_MAX_DEPTH).unwrap();
    renderer.append_child(&ancestor, &list);

    let root_label = root.exec(|root| root.label("root"));
    let b_label = root.exec(|root| root.label("b"));
    root_label.click();
    assert_eq!(clicks.get(), 0);

    b_label.click();
    b_label.click();
    b_label.click();
    assert_eq!(clicks.get(), 0);
    assert!(b_label.nested_list().unwrap().has_class(ACTIVE));
    assert_eq!(root_label.nested_list().unwrap().classes(), [NESTED, ACTIVE]);
    assert!(root_label.has_class(EXPANDED));

    // Leaf labels have no listener of their own, so their clicks bubble.
    root.exec(|root| root.label("c")).click();
    assert_eq!(clicks.get(), 1);
    assert!(b_label.nested_list().unwrap().has_class(ACTIVE));
}

#[test]
fn rendering_is_deterministic() {
    let (_, first) = render(&example());
    let (_, second) = render(&example());
    assert_eq!(first.to_repr(), second.to_repr());

    // Reusing one renderer gives the same structure, and the first tree is unaffected.
    let root = Shared::new(Root::new());
    let mut renderer = TestRenderer::new(root.clone());
    let a = render_tree(&mut renderer, &example(), DEFAULT_MAX_DEPTH).unwrap();
    let b = render_tree(&mut renderer, &example(), DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(
        Node::from_handle(&a).to_repr(),
        Node::from_handle(&b).to_repr()
    );
}

#[test]
fn too_deep_creates_nothing() {
    let root = Shared::new(Root::new());
    let mut renderer = TestRenderer::new(root.clone());
    match render_tree(&mut renderer, &chain(5), 4) {
        Err(Error::TooDeep { depth, limit }) => {
            assert_eq!(depth, 5);
            assert_eq!(limit, 4);
        }
        other => panic!("expected TooDeep, got {:?}", other.map(|_| ())),
    }
    assert_eq!(root.exec(|root| root.created()), 0);

    let list = render_tree(&mut renderer, &chain(4), 4).unwrap();
    assert_eq!(Node::from_handle(&list).children_len(), 1);
}

#[test]
fn deep_tree_renders_without_recursion() {
    let depth = 20_000;
    let root = Shared::new(Root::new());
    let mut renderer = TestRenderer::new(root.clone());
    render_tree(&mut renderer, &chain(depth), depth).unwrap();
    // One list, then an item, a label and a nested list per non-leaf, then the leaf's item and label.
    assert_eq!(root.exec(|root| root.created()), 1 + 3 * depth + 2);
    let leaf = root.exec(|root| root.label(&format!("n{}", depth)));
    assert!(leaf.nested_list().is_none());
}

fn random_tree(rng: &mut StdRng, depth_left: usize, next: &mut usize) -> TreeNode {
    let name = format!("node-{}", next);
    *next += 1;
    let width = if depth_left == 0 { 0 } else { rng.gen_range(0..4) };
    let children = (0..width)
        .map(|_| random_tree(rng, depth_left - 1, next))
        .collect();
    TreeNode::with_children(name, children)
}

/// Checks that a rendered item mirrors `node` and its descendants.
fn assert_mirrors(repr: &Repr, node: &TreeNode) {
    assert_eq!(repr.tag, Tag::Li);
    let label = &repr.children[0];
    assert_eq!(label.tag, Tag::Span);
    assert_eq!(label.text, node.name);
    assert!(label.classes.contains(&NODE_LABEL));
    if node.is_leaf() {
        assert_eq!(repr.children.len(), 1);
        assert!(!label.has_on_click);
        assert!(!label.classes.contains(&EXPANDABLE));
    } else {
        assert_eq!(repr.children.len(), 2);
        assert!(label.has_on_click);
        assert!(label.classes.contains(&EXPANDABLE));
        let nested = &repr.children[1];
        assert_eq!(nested.classes, [NESTED, HIDDEN]);
        assert_eq!(nested.children.len(), node.children.len());
        for (child_repr, child) in nested.children.iter().zip(&node.children) {
            assert_mirrors(child_repr, child);
        }
    }
}

#[test]
fn random_trees_mirror_input() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut next = 0;
        let node = random_tree(&mut rng, 5, &mut next);
        let (root, list) = render(&node);
        let repr = list.to_repr();
        assert_eq!(repr.children.len(), 1);
        assert_mirrors(&repr.children[0], &node);
        assert_eq!(next, node.len());
        // Every node produced exactly one label.
        assert_eq!(root.exec(|root| root.label("node-0")).to_repr().text, "node-0");
    }
}

#[test]
fn view_replaces_previous_content() {
    let (_, container, mut view) = view(DEFAULT_MAX_DEPTH);
    view.show_tree(&example()).unwrap();
    assert_eq!(container.children_len(), 1);

    let next = TreeNode::with_children("next", vec![TreeNode::leaf("only")]);
    view.show_tree(&next).unwrap();
    assert_eq!(container.children_len(), 1);
    assert_eq!(
        container.child(0).to_repr(),
        tree(item("next", vec![item("only", vec![])]))
    );
}

#[test]
fn view_shows_error() {
    let (_, container, mut view) = view(DEFAULT_MAX_DEPTH);
    view.show_tree(&example()).unwrap();
    view.show_error(&Error::Transport("connection refused".to_string()));
    assert_eq!(container.children_len(), 1);
    assert_eq!(
        container.child(0).to_repr(),
        Repr {
            tag: Tag::Div,
            text: "request failed: connection refused".to_string(),
            classes: vec![ERROR],
            has_on_click: false,
            children: vec![],
        }
    );
}

#[test]
fn view_keeps_content_when_tree_is_too_deep() {
    let (_, container, mut view) = view(3);
    view.show_tree(&example()).unwrap();
    let before = container.to_repr();
    assert!(matches!(
        view.show_tree(&chain(4)),
        Err(Error::TooDeep { depth: 4, limit: 3 })
    ));
    assert_eq!(container.to_repr(), before);
    assert_eq!(view.max_depth(), 3);
}

#[test]
fn view_caps_depth_at_decodable_depth() {
    let (_, container, mut view) = view(MAX_DECODABLE_DEPTH + 40);
    assert_eq!(view.max_depth(), MAX_DECODABLE_DEPTH);
    view.show_tree(&chain(MAX_DECODABLE_DEPTH)).unwrap();
    assert_eq!(container.children_len(), 1);
    assert!(matches!(
        view.show_tree(&chain(MAX_DECODABLE_DEPTH + 1)),
        Err(Error::TooDeep { limit: MAX_DECODABLE_DEPTH, .. })
    ));
}
