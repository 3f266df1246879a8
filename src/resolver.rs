//! The focus resolution algorithm.
//!
//! Resolution runs in two stages.  First the *neighbor selector* looks for
//! a leaf within the focused window's own workspace: candidates are the
//! workspace leaves whose far-edge anchor lies in the requested direction
//! of the reference's shifted near-edge anchor, ranked by Euclidean
//! distance between the two anchors.  If that yields nothing, the
//! *workspace locator* looks for a workspace positioned in that direction,
//! consulting the last-departed-workspace history when several qualify,
//! and the target workspace's focus order is descended to the leaf it
//! last had focused.
//!
//! [`FocusSwitcher`] orchestrates the two stages against the
//! [`WindowManager`] and [`HistoryStore`] traits; the stage functions
//! themselves are pure over a [`Tree`] snapshot.

use crate::direction::Direction;
use crate::geometry::{Point, Rect, SHIFT};
use crate::traits::{HistoryStore, WindowManager};
use crate::tree::{Node, NodeId, Tree};
use log::debug;

/// The reference's anchor on the edge facing the move, tie-break shifted.
///
/// Horizontal moves shift the anchor up, vertical moves shift it left, so
/// that exact primary-axis ties resolve to the topmost respectively
/// leftmost candidate.
fn near_anchor(rect: &Rect, direction: Direction) -> Point {
    match direction {
        Direction::Left => rect.left_anchor().shifted_up(SHIFT),
        Direction::Right => rect.right_anchor().shifted_up(SHIFT),
        Direction::Up => rect.top_anchor().shifted_left(SHIFT),
        Direction::Down => rect.bottom_anchor().shifted_left(SHIFT),
    }
}

/// A candidate's anchor on the edge facing *back* at the reference,
/// unshifted.
fn far_anchor(rect: &Rect, direction: Direction) -> Point {
    match direction {
        Direction::Left => rect.right_anchor(),
        Direction::Right => rect.left_anchor(),
        Direction::Up => rect.bottom_anchor(),
        Direction::Down => rect.top_anchor(),
    }
}

/// Whether `far` lies in `direction` of `near`.  Inclusive on purpose:
/// adjacent window edges often share the exact coordinate.
fn in_direction(far: &Point, near: &Point, direction: Direction) -> bool {
    match direction {
        Direction::Left => far.left_of(near),
        Direction::Right => far.right_of(near),
        Direction::Up => far.up_of(near),
        Direction::Down => far.down_of(near),
    }
}

/// Select the closest leaf in `direction` within the reference's workspace.
///
/// Candidates are compared by Euclidean distance between the reference's
/// shifted near anchor and their unshifted far anchor.  On an exact
/// distance tie the first candidate in tree order wins; the tie-break
/// shift already made that situation deterministic for aligned layouts.
pub fn neighbor_in_direction<'a>(
    tree: &'a Tree,
    reference: &Node,
    direction: Direction,
) -> Option<&'a Node> {
    let workspace = tree.workspace_of(reference.id)?;
    let near = near_anchor(&reference.rect, direction);

    let mut best: Option<(&Node, f64)> = None;
    for leaf in tree.leaves_of(workspace.id) {
        if leaf.id == reference.id {
            continue;
        }
        let far = far_anchor(&leaf.rect, direction);
        if !in_direction(&far, &near, direction) {
            continue;
        }
        let d = far.distance(&near);
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((leaf, d));
        }
    }
    best.map(|(node, _)| node)
}

/// Find a workspace positioned in `direction` of `current`.
///
/// Workspaces compare by raw rectangle origin with strict inequality and
/// no tie-break shift; the `up`/`down` comparisons run in the opposite
/// sense of the leaf predicates.  With a single match it is the target.
/// With several, the one matching the stored last-departed-workspace id
/// wins; no match means the move stays unresolved rather than guessed.
pub fn workspace_in_direction<'a, H: HistoryStore>(
    tree: &'a Tree,
    current: &Node,
    direction: Direction,
    history: &H,
) -> Option<&'a Node> {
    let origin = current.rect.position();
    let candidates: Vec<&Node> = tree
        .workspaces()
        .into_iter()
        .filter(|ws| ws.id != current.id)
        .filter(|ws| {
            let p = ws.rect.position();
            match direction {
                Direction::Left => p.x < origin.x,
                Direction::Right => p.x > origin.x,
                Direction::Up => p.y > origin.y,
                Direction::Down => p.y < origin.y,
            }
        })
        .collect();

    match candidates.as_slice() {
        [] => None,
        [only] => Some(*only),
        several => {
            let last = history.read();
            several.iter().copied().find(|ws| ws.id == last)
        }
    }
}

/// Follow a workspace's recorded focus order down to the leaf it last had
/// focused.
///
/// Repeatedly takes the first focus-order entry until a node with an
/// empty list is reached.  An id that is missing from the snapshot ends
/// the descent at the node reached so far.
pub fn descend_focus<'a>(tree: &'a Tree, from: &'a Node) -> &'a Node {
    let mut node = from;
    while let Some(&next) = node.focus.first() {
        match tree.get(next) {
            Some(child) => node = child,
            None => break,
        }
    }
    node
}

/// Possible errors from a focus resolution.
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
}

/// What a resolution did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A focus command was issued for this container.
    Focused(NodeId),
    /// Nothing qualified; no command was issued and no state was touched.
    NoCandidate,
}

/// Orchestrates one focus resolution per call.
///
/// Generic over any [`WindowManager`] and [`HistoryStore`], so the whole
/// pipeline runs unchanged against synthetic snapshots in tests.
///
/// # Typical usage
///
/// ```ignore
/// let switcher = FocusSwitcher::new(I3Wm::new(), FileHistory::new());
/// switcher.focus(Direction::Left)?;
/// ```
pub struct FocusSwitcher<W: WindowManager, H: HistoryStore> {
    wm: W,
    history: H,
}

impl<W: WindowManager, H: HistoryStore> FocusSwitcher<W, H> {
    pub fn new(wm: W, history: H) -> Self {
        Self { wm, history }
    }

    /// Resolve `direction` from the currently focused window and issue the
    /// focus command.
    ///
    /// Fetches one snapshot, tries the in-workspace neighbor first, then
    /// the cross-workspace fallback.  When the resolved target sits on a
    /// different workspace than the origin, the origin workspace id is
    /// persisted before focus is issued.
    pub fn focus(&self, direction: Direction) -> Result<Outcome, SwitchError> {
        let tree = self
            .wm
            .snapshot()
            .map_err(|e| SwitchError::WindowManager(e.to_string()))?;

        let Some(focused) = tree.find_focused() else {
            debug!("snapshot has no focused container");
            return Ok(Outcome::NoCandidate);
        };
        let Some(origin) = tree.workspace_of(focused.id) else {
            debug!("focused container {} has no owning workspace", focused.id);
            return Ok(Outcome::NoCandidate);
        };

        let target = match neighbor_in_direction(&tree, focused, direction) {
            Some(leaf) => leaf,
            None => {
                let Some(ws) =
                    workspace_in_direction(&tree, origin, direction, &self.history)
                else {
                    debug!("nothing {} of workspace {}", direction, origin.id);
                    return Ok(Outcome::NoCandidate);
                };
                descend_focus(&tree, ws)
            }
        };

        let target_ws = tree.workspace_of(target.id).map(|ws| ws.id);
        if target_ws != Some(origin.id) {
            self.history.write(origin.id);
        }

        debug!("focus {} -> {} ({})", focused.id, target.id, direction);
        self.wm
            .focus(target.id)
            .map_err(|e| SwitchError::WindowManager(e.to_string()))?;
        Ok(Outcome::Focused(target.id))
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeData, NodeKind};
    use std::cell::{Cell, RefCell};

    //  Snapshot construction helpers

    fn leaf(id: NodeId, rect: Rect) -> NodeData {
        NodeData {
            id,
            kind: NodeKind::Container,
            name: Some(format!("win-{}", id)),
            rect,
            focused: false,
            focus: vec![],
            children: vec![],
        }
    }

    fn focused_leaf(id: NodeId, rect: Rect) -> NodeData {
        NodeData {
            focused: true,
            ..leaf(id, rect)
        }
    }

    /// A workspace whose focus order is simply its child order.
    fn workspace(id: NodeId, rect: Rect, children: Vec<NodeData>) -> NodeData {
        let focus = children.iter().map(|c| c.id).collect();
        NodeData {
            id,
            kind: NodeKind::Workspace,
            name: Some(format!("ws-{}", id)),
            rect,
            focused: false,
            focus,
            children,
        }
    }

    fn root(workspaces: Vec<NodeData>) -> NodeData {
        let focus = workspaces.iter().map(|w| w.id).collect();
        let output = NodeData {
            id: 2,
            kind: NodeKind::Output,
            name: Some("out".into()),
            rect: Rect::new(0.0, 0.0, 4000.0, 4000.0),
            focused: false,
            focus,
            children: workspaces,
        };
        NodeData {
            id: 1,
            kind: NodeKind::Root,
            name: Some("root".into()),
            rect: Rect::new(0.0, 0.0, 4000.0, 4000.0),
            focused: false,
            focus: vec![2],
            children: vec![output],
        }
    }

    //  Trait doubles

    /// Serves a fresh copy of a fixed snapshot and records focus calls.
    struct MockWm {
        snapshot: NodeData,
        focus_log: RefCell<Vec<NodeId>>,
    }

    impl MockWm {
        fn new(snapshot: NodeData) -> Self {
            Self {
                snapshot,
                focus_log: RefCell::new(vec![]),
            }
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl WindowManager for MockWm {
        type Error = MockError;

        fn snapshot(&self) -> Result<Tree, MockError> {
            Ok(Tree::from_root(self.snapshot.clone()))
        }

        fn focus(&self, node: NodeId) -> Result<(), MockError> {
            self.focus_log.borrow_mut().push(node);
            Ok(())
        }
    }

    /// In-memory history that counts reads.
    #[derive(Default)]
    struct MemoryHistory {
        value: Cell<NodeId>,
        reads: Cell<usize>,
    }

    impl HistoryStore for MemoryHistory {
        fn read(&self) -> NodeId {
            self.reads.set(self.reads.get() + 1);
            self.value.get()
        }

        fn write(&self, id: NodeId) {
            self.value.set(id);
        }
    }

    //  Neighbor selector

    #[test]
    fn picks_nearest_leaf_to_the_left() {
        let tree = Tree::from_root(root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 300.0, 100.0),
            vec![
                leaf(101, Rect::new(0.0, 0.0, 100.0, 100.0)),
                leaf(102, Rect::new(100.0, 0.0, 100.0, 100.0)),
                focused_leaf(103, Rect::new(200.0, 0.0, 100.0, 100.0)),
            ],
        )]));
        let reference = tree.find_focused().unwrap();
        let found = neighbor_in_direction(&tree, reference, Direction::Left);
        assert_eq!(found.map(|n| n.id), Some(102));
    }

    #[test]
    fn mirrors_hold_in_all_four_directions() {
        // 3x3 grid of 100x100 leaves, focus in the middle.
        let mut leaves = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                let id = 100 + row * 3 + col;
                let rect = Rect::new(col as f64 * 100.0, row as f64 * 100.0, 100.0, 100.0);
                leaves.push(if id == 104 {
                    focused_leaf(id, rect)
                } else {
                    leaf(id, rect)
                });
            }
        }
        let tree = Tree::from_root(root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 300.0, 300.0),
            leaves,
        )]));
        let reference = tree.find_focused().unwrap();
        let go = |d| neighbor_in_direction(&tree, reference, d).map(|n| n.id);
        assert_eq!(go(Direction::Left), Some(103));
        assert_eq!(go(Direction::Right), Some(105));
        assert_eq!(go(Direction::Up), Some(101));
        assert_eq!(go(Direction::Down), Some(107));
    }

    #[test]
    fn single_leaf_has_no_neighbor_in_any_direction() {
        let tree = Tree::from_root(root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 100.0, 100.0))],
        )]));
        let reference = tree.find_focused().unwrap();
        for d in Direction::ALL {
            assert_eq!(
                neighbor_in_direction(&tree, reference, d).map(|n| n.id),
                None,
                "direction {}",
                d
            );
        }
    }

    #[test]
    fn horizontal_tie_prefers_topmost() {
        // Two stacked leaves to the left, vertically symmetric around the
        // reference midline.  The up-shift breaks the tie towards the top.
        let top = leaf(101, Rect::new(0.0, 0.0, 50.0, 50.0));
        let bottom = leaf(102, Rect::new(0.0, 50.0, 50.0, 50.0));
        let focused = focused_leaf(103, Rect::new(50.0, 0.0, 50.0, 100.0));
        for children in [
            vec![top.clone(), bottom.clone(), focused.clone()],
            vec![bottom.clone(), top.clone(), focused.clone()],
        ] {
            let tree = Tree::from_root(root(vec![workspace(
                10,
                Rect::new(0.0, 0.0, 100.0, 100.0),
                children,
            )]));
            let reference = tree.find_focused().unwrap();
            let found = neighbor_in_direction(&tree, reference, Direction::Left);
            assert_eq!(found.map(|n| n.id), Some(101));
        }
    }

    #[test]
    fn vertical_tie_prefers_leftmost() {
        // Two side-by-side leaves above, horizontally symmetric around the
        // reference midline.  The left-shift breaks the tie to the left.
        let left = leaf(101, Rect::new(0.0, 0.0, 50.0, 50.0));
        let right = leaf(102, Rect::new(50.0, 0.0, 50.0, 50.0));
        let focused = focused_leaf(103, Rect::new(0.0, 50.0, 100.0, 50.0));
        for children in [
            vec![left.clone(), right.clone(), focused.clone()],
            vec![right.clone(), left.clone(), focused.clone()],
        ] {
            let tree = Tree::from_root(root(vec![workspace(
                10,
                Rect::new(0.0, 0.0, 100.0, 100.0),
                children,
            )]));
            let reference = tree.find_focused().unwrap();
            let found = neighbor_in_direction(&tree, reference, Direction::Up);
            assert_eq!(found.map(|n| n.id), Some(101));
        }
    }

    #[test]
    fn exactly_aligned_anchor_still_qualifies() {
        // Documented boundary behavior: the predicates are inclusive, so a
        // candidate whose far anchor coincides with the shifted reference
        // anchor is a valid neighbor (distance zero).
        //
        // Reference left anchor is (100, 23); shifted up it is (100, 21).
        // The candidate's right anchor is exactly (100, 21).
        let tree = Tree::from_root(root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 200.0, 100.0),
            vec![
                leaf(101, Rect::new(50.0, -2.0, 50.0, 46.0)),
                focused_leaf(102, Rect::new(100.0, 0.0, 50.0, 46.0)),
            ],
        )]));
        let reference = tree.find_focused().unwrap();
        let found = neighbor_in_direction(&tree, reference, Direction::Left);
        assert_eq!(found.map(|n| n.id), Some(101));
    }

    #[test]
    fn leaf_behind_the_reference_is_excluded() {
        // The only other leaf is to the right; a `left` query must not
        // pick it.
        let tree = Tree::from_root(root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 200.0, 100.0),
            vec![
                focused_leaf(101, Rect::new(0.0, 0.0, 100.0, 100.0)),
                leaf(102, Rect::new(100.0, 0.0, 100.0, 100.0)),
            ],
        )]));
        let reference = tree.find_focused().unwrap();
        assert!(neighbor_in_direction(&tree, reference, Direction::Left).is_none());
    }

    //  Workspace locator

    fn two_output_snapshot() -> NodeData {
        // ws 10 on the left output (focused leaf 100), ws 20 on the right
        // output with a container whose focus order points at leaf 202.
        let ws1 = workspace(
            10,
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 1920.0, 1080.0))],
        );
        let container = NodeData {
            id: 200,
            kind: NodeKind::Container,
            name: None,
            rect: Rect::new(1920.0, 0.0, 1920.0, 1080.0),
            focused: false,
            focus: vec![202, 201],
            children: vec![
                leaf(201, Rect::new(1920.0, 0.0, 960.0, 1080.0)),
                leaf(202, Rect::new(2880.0, 0.0, 960.0, 1080.0)),
            ],
        };
        let ws2 = NodeData {
            id: 20,
            kind: NodeKind::Workspace,
            name: Some("ws-20".into()),
            rect: Rect::new(1920.0, 0.0, 1920.0, 1080.0),
            focused: false,
            focus: vec![200],
            children: vec![container],
        };
        root(vec![ws1, ws2])
    }

    #[test]
    fn single_workspace_candidate_skips_history() {
        let tree = Tree::from_root(two_output_snapshot());
        let history = MemoryHistory::default();
        let current = tree.get(10).unwrap();
        let found = workspace_in_direction(&tree, current, Direction::Right, &history);
        assert_eq!(found.map(|n| n.id), Some(20));
        assert_eq!(history.reads.get(), 0);
    }

    #[test]
    fn workspace_locator_uses_strict_comparison() {
        // ws 20 shares ws 10's x origin, so it is neither left nor right.
        let ws1 = workspace(
            10,
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 1920.0, 1080.0))],
        );
        let ws2 = workspace(20, Rect::new(0.0, 0.0, 1920.0, 1080.0), vec![]);
        let tree = Tree::from_root(root(vec![ws1, ws2]));
        let history = MemoryHistory::default();
        let current = tree.get(10).unwrap();
        for d in [Direction::Left, Direction::Right] {
            assert!(workspace_in_direction(&tree, current, d, &history).is_none());
        }
    }

    #[test]
    fn ambiguous_workspaces_resolve_only_through_history() {
        // Three workspaces "above" the current one (workspace comparisons
        // treat larger y as up).
        let current = workspace(
            10,
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 1000.0, 1000.0))],
        );
        let others: Vec<NodeData> = [20, 30, 40]
            .iter()
            .map(|&id| workspace(id, Rect::new(0.0, 1000.0, 1000.0, 1000.0), vec![]))
            .collect();
        let mut all = vec![current];
        all.extend(others);
        let tree = Tree::from_root(root(all));
        let history = MemoryHistory::default();
        let current = tree.get(10).unwrap();

        assert!(workspace_in_direction(&tree, current, Direction::Up, &history).is_none());
        assert_eq!(history.reads.get(), 1);

        history.write(30);
        let found = workspace_in_direction(&tree, current, Direction::Up, &history);
        assert_eq!(found.map(|n| n.id), Some(30));
    }

    #[test]
    fn stale_history_id_matches_nothing() {
        let current = workspace(
            10,
            Rect::new(0.0, 0.0, 1000.0, 1000.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 1000.0, 1000.0))],
        );
        let others: Vec<NodeData> = [20, 30]
            .iter()
            .map(|&id| workspace(id, Rect::new(0.0, 1000.0, 1000.0, 1000.0), vec![]))
            .collect();
        let mut all = vec![current];
        all.extend(others);
        let tree = Tree::from_root(root(all));
        let history = MemoryHistory::default();
        history.write(999);
        let current = tree.get(10).unwrap();
        assert!(workspace_in_direction(&tree, current, Direction::Up, &history).is_none());
    }

    //  Focus-order descent

    #[test]
    fn descends_to_last_focused_leaf() {
        let tree = Tree::from_root(two_output_snapshot());
        let ws = tree.get(20).unwrap();
        assert_eq!(descend_focus(&tree, ws).id, 202);
    }

    #[test]
    fn descent_on_empty_workspace_stops_at_workspace() {
        let ws = workspace(20, Rect::new(0.0, 0.0, 100.0, 100.0), vec![]);
        let tree = Tree::from_root(root(vec![ws]));
        let ws = tree.get(20).unwrap();
        assert_eq!(descend_focus(&tree, ws).id, 20);
    }

    #[test]
    fn descent_stops_on_missing_focus_id() {
        let mut ws = workspace(20, Rect::new(0.0, 0.0, 100.0, 100.0), vec![]);
        ws.focus = vec![777];
        let tree = Tree::from_root(root(vec![ws]));
        let ws = tree.get(20).unwrap();
        assert_eq!(descend_focus(&tree, ws).id, 20);
    }

    //  Full resolution

    #[test]
    fn in_workspace_move_issues_focus_without_history_write() {
        let snapshot = root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 200.0, 100.0),
            vec![
                leaf(101, Rect::new(0.0, 0.0, 100.0, 100.0)),
                focused_leaf(102, Rect::new(100.0, 0.0, 100.0, 100.0)),
            ],
        )]);
        let switcher = FocusSwitcher::new(MockWm::new(snapshot), MemoryHistory::default());
        let outcome = switcher.focus(Direction::Left).unwrap();
        assert_eq!(outcome, Outcome::Focused(101));
        assert_eq!(*switcher.wm.focus_log.borrow(), vec![101]);
        assert_eq!(switcher.history.value.get(), 0);
    }

    #[test]
    fn cross_workspace_move_descends_and_records_departure() {
        let switcher = FocusSwitcher::new(
            MockWm::new(two_output_snapshot()),
            MemoryHistory::default(),
        );
        let outcome = switcher.focus(Direction::Right).unwrap();
        assert_eq!(outcome, Outcome::Focused(202));
        assert_eq!(*switcher.wm.focus_log.borrow(), vec![202]);
        assert_eq!(switcher.history.value.get(), 10);
    }

    #[test]
    fn move_to_empty_workspace_focuses_the_workspace_itself() {
        let ws1 = workspace(
            10,
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 1920.0, 1080.0))],
        );
        let ws2 = workspace(20, Rect::new(1920.0, 0.0, 1920.0, 1080.0), vec![]);
        let switcher = FocusSwitcher::new(
            MockWm::new(root(vec![ws1, ws2])),
            MemoryHistory::default(),
        );
        let outcome = switcher.focus(Direction::Right).unwrap();
        assert_eq!(outcome, Outcome::Focused(20));
        assert_eq!(switcher.history.value.get(), 10);
    }

    #[test]
    fn failed_resolution_touches_nothing() {
        let snapshot = root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            vec![focused_leaf(100, Rect::new(0.0, 0.0, 100.0, 100.0))],
        )]);
        let switcher = FocusSwitcher::new(MockWm::new(snapshot), MemoryHistory::default());
        for d in Direction::ALL {
            assert_eq!(switcher.focus(d).unwrap(), Outcome::NoCandidate);
        }
        assert!(switcher.wm.focus_log.borrow().is_empty());
        assert_eq!(switcher.history.value.get(), 0);
    }

    #[test]
    fn snapshot_without_focus_is_a_no_op() {
        let snapshot = root(vec![workspace(
            10,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            vec![leaf(100, Rect::new(0.0, 0.0, 100.0, 100.0))],
        )]);
        let switcher = FocusSwitcher::new(MockWm::new(snapshot), MemoryHistory::default());
        assert_eq!(switcher.focus(Direction::Left).unwrap(), Outcome::NoCandidate);
        assert!(switcher.wm.focus_log.borrow().is_empty());
    }

    #[test]
    fn history_round_trip_enables_later_disambiguation() {
        // First jump right and record the departure, then verify an
        // ambiguous query in a snapshot with two left candidates resolves
        // to the recorded workspace.
        let history = MemoryHistory::default();
        {
            let switcher = FocusSwitcher::new(MockWm::new(two_output_snapshot()), &history);
            switcher.focus(Direction::Right).unwrap();
        }
        assert_eq!(history.value.get(), 10);

        let ws10 = workspace(10, Rect::new(0.0, 0.0, 960.0, 1080.0), vec![]);
        let ws15 = workspace(15, Rect::new(960.0, 0.0, 960.0, 1080.0), vec![]);
        let ws20 = workspace(
            20,
            Rect::new(1920.0, 0.0, 1920.0, 1080.0),
            vec![focused_leaf(200, Rect::new(1920.0, 0.0, 1920.0, 1080.0))],
        );
        let tree = Tree::from_root(root(vec![ws10, ws15, ws20]));
        let current = tree.get(20).unwrap();
        let found = workspace_in_direction(&tree, current, Direction::Left, &history);
        assert_eq!(found.map(|n| n.id), Some(10));
    }
}
