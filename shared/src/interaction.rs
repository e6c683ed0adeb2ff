//! Pointer interaction: which scene nodes can be targeted and what a click on them does.
//!
//! Node names are a contract with the scene asset. A ray hit usually lands on an unnamed
//! geometry child, so targets are resolved by climbing the hit's ancestor chain.
//! Authoring tools export names such as `board.001`; they are compared after
//! [`sanitize_node_name`], which yields `board001`.

use std::borrow::Cow;

/// Nodes the pointer can target.
pub const INTERACTIVE_NODES: [&str; 8] = [
    "board",
    "board001",
    "board002",
    "board003",
    "character",
    "tuttle",
    "Snorlax",
    "name",
];

/// Interactive nodes that hop when clicked instead of opening a modal.
pub const CREATURES: [&str; 2] = ["tuttle", "Snorlax"];

/// Upper bound on ancestor hops, so a malformed hierarchy cannot loop forever.
const MAX_ANCESTOR_DEPTH: usize = 64;

/// Characters dropped from node names. Whitespace becomes `_`.
const RESERVED_NAME_CHARS: [char; 5] = ['[', ']', '.', ':', '/'];

/// Normalize an exported node name into the form the allow-lists use.
pub fn sanitize_node_name(name: &str) -> Cow<'_, str> {
    let dirty = |c: char| c.is_whitespace() || RESERVED_NAME_CHARS.contains(&c);
    if !name.chars().any(dirty) {
        return Cow::Borrowed(name);
    }
    Cow::Owned(
        name.chars()
            .filter(|c| !RESERVED_NAME_CHARS.contains(c))
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect(),
    )
}

/// The canonical interactive node name matching `name` once sanitized, if any.
#[inline]
pub fn interactive_name(name: &str) -> Option<&'static str> {
    let name = sanitize_node_name(name);
    INTERACTIVE_NODES.iter().copied().find(|node| *node == name)
}

#[inline]
pub fn is_interactive(name: &str) -> bool {
    interactive_name(name).is_some()
}

#[inline]
pub fn is_creature(name: &str) -> bool {
    CREATURES.contains(&name)
}

/// Walk from `hit` through its ancestors and return the first node with an interactive name.
///
/// `name_of` returns `None` for unnamed nodes, `parent_of` returns `None` at the root.
pub fn resolve_interactive<'a, N: Copy>(
    hit: N,
    name_of: impl Fn(N) -> Option<&'a str>,
    parent_of: impl Fn(N) -> Option<N>,
) -> Option<(N, &'static str)> {
    let mut node = hit;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        if let Some(name) = name_of(node).and_then(interactive_name) {
            return Some((node, name));
        }
        node = parent_of(node)?;
    }
    None
}

/// First interactive target along depth-sorted `hits`.
///
/// Hits that resolve to nothing (scenery) are skipped; a hit for which `blocks` is true
/// (an overlay in front of the scene) ends the search.
pub fn first_interactive<'a, N: Copy>(
    hits: impl IntoIterator<Item = N>,
    blocks: impl Fn(N) -> bool,
    name_of: impl Fn(N) -> Option<&'a str> + Copy,
    parent_of: impl Fn(N) -> Option<N> + Copy,
) -> Option<(N, &'static str)> {
    hits.into_iter()
        .take_while(|hit| !blocks(*hit))
        .find_map(|hit| resolve_interactive(hit, name_of, parent_of))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Play the squash-and-hop on the clicked creature.
    Hop,
    /// Show the project modal for the clicked node.
    OpenModal,
}

/// Decide what a click does. Nothing happens without a hover target or while a modal is open.
pub fn dispatch_click(hovered: Option<&str>, modal_open: bool) -> Option<ClickAction> {
    if modal_open {
        return None;
    }
    let name = hovered?;
    Some(if is_creature(name) {
        ClickAction::Hop
    } else {
        ClickAction::OpenModal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tiny scene graph: (name, parent index).
    const GRAPH: [(Option<&str>, Option<usize>); 6] = [
        (Some("Scene"), None),
        (Some("board001"), Some(0)),
        // Unnamed primitive group and its geometry child.
        (None, Some(1)),
        (Some("Plane.004"), Some(2)),
        (Some("tree"), Some(0)),
        (None, Some(4)),
    ];

    fn resolve(hit: usize) -> Option<(usize, &'static str)> {
        resolve_interactive(hit, |n| GRAPH[n].0, |n| GRAPH[n].1)
    }

    #[test]
    fn resolves_by_climbing_past_geometry_children() {
        assert_eq!(resolve(3), Some((1, "board001")));
        assert_eq!(resolve(2), Some((1, "board001")));
        assert_eq!(resolve(1), Some((1, "board001")));
    }

    #[test]
    fn non_interactive_branches_resolve_to_nothing() {
        assert_eq!(resolve(5), None);
        assert_eq!(resolve(0), None);
    }

    #[test]
    fn cyclic_hierarchy_terminates() {
        let found = resolve_interactive(0u8, |_| Some("rock"), |n| Some(n ^ 1));
        assert_eq!(found, None);
    }

    #[test]
    fn scenery_in_front_does_not_hide_a_target() {
        // Tree geometry (5) is nearer than the board geometry (3).
        let blocks = |_: usize| false;
        let found = first_interactive([5, 3], blocks, |n| GRAPH[n].0, |n| GRAPH[n].1);
        assert_eq!(found, Some((1, "board001")));

        assert_eq!(first_interactive([5, 0], blocks, |n| GRAPH[n].0, |n| GRAPH[n].1), None);
    }

    #[test]
    fn overlay_hits_stop_the_search() {
        let found = first_interactive([7, 3], |n| n == 7, |n| GRAPH[n].0, |n| GRAPH[n].1);
        assert_eq!(found, None);
    }

    #[test]
    fn exported_names_are_sanitized() {
        assert_eq!(interactive_name("board.001"), Some("board001"));
        assert_eq!(interactive_name("board.003"), Some("board003"));
        assert_eq!(sanitize_node_name("ground collider"), "ground_collider");
        assert_eq!(sanitize_node_name("a[b]:c/d"), "abcd");
        assert!(matches!(sanitize_node_name("tuttle"), Cow::Borrowed("tuttle")));
        assert_eq!(interactive_name("board.004"), None);
    }

    #[test]
    fn clicks_dispatch_by_target_kind() {
        assert_eq!(dispatch_click(Some("tuttle"), false), Some(ClickAction::Hop));
        assert_eq!(dispatch_click(Some("Snorlax"), false), Some(ClickAction::Hop));
        assert_eq!(dispatch_click(Some("board"), false), Some(ClickAction::OpenModal));
        assert_eq!(dispatch_click(None, false), None);
    }

    #[test]
    fn clicks_are_ignored_while_modal_is_open() {
        assert_eq!(dispatch_click(Some("board"), true), None);
        assert_eq!(dispatch_click(Some("tuttle"), true), None);
    }

    #[test]
    fn creatures_are_interactive() {
        assert!(CREATURES.iter().all(|name| is_interactive(name)));
        assert!(!is_interactive("ground_collider"));
        assert_eq!(interactive_name(&String::from("board003")), Some("board003"));
    }
}
