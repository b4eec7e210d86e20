//! Pointer-move decision logic.
//!
//! [`evaluate`] reads the layout and the current [`ModeState`] and returns
//! the next state plus the marker writes to perform. It never touches the
//! host; [`crate::controller::ChromeController`] applies the commands.
//!
//! Policy, per event:
//! - pointer within the registry's edge band of any viewport edge: every
//!   element in the active set whose own edge test passes is revealed.
//!   Top-anchored elements reveal as one group.
//! - otherwise, if something is revealed: the top group is concealed once the
//!   pointer leaves its combined box, and each visible non-top element is
//!   concealed once the pointer leaves its own box.
//! - otherwise nothing happens. This is the common case and costs one
//!   comparison per edge.

use crate::edge::{Edge, Pointer, near_any_edge};
use crate::registry::{ElementName, LayoutView, ManagedElement, Registry, resolve_element};
use crate::state::ModeState;

/// A single marker write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityCommand<N> {
    pub element: ElementName,
    pub node: N,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<N> {
    pub state: ModeState,
    pub commands: Vec<VisibilityCommand<N>>,
}

impl<N> Transition<N> {
    fn unchanged(state: &ModeState) -> Self {
        Self {
            state: *state,
            commands: Vec::new(),
        }
    }

    pub fn is_noop(&self, before: &ModeState) -> bool {
        self.commands.is_empty() && self.state == *before
    }
}

pub fn evaluate<V: LayoutView + ?Sized>(
    pointer: Pointer,
    state: &ModeState,
    registry: &Registry,
    view: &V,
) -> Transition<V::Node> {
    if !state.is_active() {
        return Transition::unchanged(state);
    }
    let viewport = view.viewport();
    if near_any_edge(pointer, viewport, registry.edge_band()) {
        reveal_pass(pointer, state, registry, view)
    } else if state.revealed().is_some() {
        conceal_pass(pointer, state, registry, view)
    } else {
        Transition::unchanged(state)
    }
}

fn reveal_pass<V: LayoutView + ?Sized>(
    pointer: Pointer,
    state: &ModeState,
    registry: &Registry,
    view: &V,
) -> Transition<V::Node> {
    let viewport = view.viewport();
    let zen = state.is_zen();
    let mut next = *state;
    let mut commands = Vec::new();
    let mut top_group_shown = false;

    for element in registry.active_set(zen) {
        let Some(node) = resolve_element(view, element) else {
            continue;
        };
        if !element.edge().is_near(pointer, viewport, element.threshold()) {
            continue;
        }
        if element.edge() == Edge::Top {
            if !top_group_shown {
                for top in registry.active_set(zen).filter(is_top) {
                    if let Some(top_node) = resolve_element(view, top) {
                        show(view, &mut commands, top.name(), top_node);
                    }
                }
                top_group_shown = true;
            }
        } else {
            show(view, &mut commands, element.name(), node);
        }
        next.reveal(element.edge(), element.name());
    }

    Transition {
        state: next,
        commands,
    }
}

fn conceal_pass<V: LayoutView + ?Sized>(
    pointer: Pointer,
    state: &ModeState,
    registry: &Registry,
    view: &V,
) -> Transition<V::Node> {
    let zen = state.is_zen();
    let mut next = *state;
    let mut commands = Vec::new();

    if state.revealed_edge() == Some(Edge::Top) {
        let tops = registry.active_set(zen).filter(is_top).map(|el| el.name());
        let combined = registry.combined_bounding_box(view, tops);
        if combined.is_empty() {
            next.clear_reveal();
        } else if Edge::Top.is_outside(pointer, combined) {
            for top in registry.active_set(zen).filter(is_top) {
                if let Some(node) = resolve_element(view, top) {
                    hide(view, &mut commands, top.name(), node);
                }
            }
            next.clear_reveal();
        }
    }

    for element in registry.active_set(zen).filter(|el| !is_top(el)) {
        let Some(node) = resolve_element(view, element) else {
            continue;
        };
        if view.is_hidden(node) {
            continue;
        }
        let rect = view.bounding_rect(node);
        if element.edge().is_outside(pointer, rect) {
            hide(view, &mut commands, element.name(), node);
            if next.revealed_element() == Some(element.name()) {
                next.clear_reveal();
            }
        }
    }

    Transition {
        state: next,
        commands,
    }
}

fn is_top(element: &&ManagedElement) -> bool {
    element.edge() == Edge::Top
}

fn show<V: LayoutView + ?Sized>(
    view: &V,
    commands: &mut Vec<VisibilityCommand<V::Node>>,
    element: ElementName,
    node: V::Node,
) {
    if view.is_hidden(node) {
        commands.push(VisibilityCommand {
            element,
            node,
            hidden: false,
        });
    }
}

fn hide<V: LayoutView + ?Sized>(
    view: &V,
    commands: &mut Vec<VisibilityCommand<V::Node>>,
    element: ElementName,
    node: V::Node,
) {
    if !view.is_hidden(node) {
        commands.push(VisibilityCommand {
            element,
            node,
            hidden: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rect;
    use ratatui::layout::Rect;
    use std::collections::BTreeMap;

    /// Fixed geometry, every element present, hidden flags settable.
    struct StubView {
        viewport: Rect,
        rects: BTreeMap<ElementName, Rect>,
        hidden: BTreeMap<ElementName, bool>,
    }

    impl StubView {
        fn new() -> Self {
            let mut rects = BTreeMap::new();
            rects.insert(ElementName::Ribbon, rect(0, 0, 50, 800));
            rects.insert(ElementName::TitleBar, rect(0, 0, 1000, 10));
            rects.insert(ElementName::Header, rect(50, 10, 950, 20));
            rects.insert(ElementName::ViewHeader, rect(50, 30, 950, 10));
            rects.insert(ElementName::StatusBar, rect(700, 780, 300, 20));
            let hidden = rects.keys().map(|k| (*k, true)).collect();
            Self {
                viewport: rect(0, 0, 1000, 800),
                rects,
                hidden,
            }
        }

        fn apply(&mut self, commands: &[VisibilityCommand<ElementName>]) {
            for cmd in commands {
                self.hidden.insert(cmd.node, cmd.hidden);
            }
        }

        fn step(&mut self, state: &mut ModeState, reg: &Registry, x: u16, y: u16) -> usize {
            let t = evaluate(Pointer::new(x, y), state, reg, self);
            self.apply(&t.commands);
            *state = t.state;
            t.commands.len()
        }
    }

    impl LayoutView for StubView {
        type Node = ElementName;

        fn viewport(&self) -> Rect {
            self.viewport
        }

        fn query_one(&self, selector: &str) -> Option<ElementName> {
            use crate::constants::selectors::*;
            let name = match selector {
                RIBBON => ElementName::Ribbon,
                TAB_HEADER => ElementName::Header,
                TITLE_BAR => ElementName::TitleBar,
                STATUS_BAR => ElementName::StatusBar,
                _ => return None,
            };
            self.rects.contains_key(&name).then_some(name)
        }

        fn current_view_container(&self) -> Option<ElementName> {
            self.rects
                .contains_key(&ElementName::ViewHeader)
                .then_some(ElementName::Header)
        }

        fn first_child(&self, _node: ElementName) -> Option<ElementName> {
            Some(ElementName::ViewHeader)
        }

        fn bounding_rect(&self, node: ElementName) -> Rect {
            self.rects.get(&node).copied().unwrap_or_default()
        }

        fn is_hidden(&self, node: ElementName) -> bool {
            self.hidden.get(&node).copied().unwrap_or(false)
        }
    }

    #[test]
    fn inactive_state_is_ignored() {
        let view = StubView::new();
        let state = ModeState::new();
        let t = evaluate(Pointer::new(0, 0), &state, &Registry::default(), &view);
        assert!(t.is_noop(&state));
    }

    #[test]
    fn left_edge_reveals_ribbon_and_leaving_conceals_it() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);

        view.step(&mut state, &reg, 5, 400);
        assert!(!view.is_hidden(ElementName::Ribbon));
        assert_eq!(state.revealed_edge(), Some(Edge::Left));
        assert_eq!(state.revealed_element(), Some(ElementName::Ribbon));

        view.step(&mut state, &reg, 500, 400);
        assert!(view.is_hidden(ElementName::Ribbon));
        assert_eq!(state.revealed(), None);
    }

    #[test]
    fn pointer_inside_revealed_ribbon_keeps_it() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);
        view.step(&mut state, &reg, 0, 400);
        assert_eq!(view.step(&mut state, &reg, 45, 400), 0);
        assert!(!view.is_hidden(ElementName::Ribbon));
    }

    #[test]
    fn top_edge_reveals_whole_group() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);

        view.step(&mut state, &reg, 500, 5);
        for name in [ElementName::Header, ElementName::TitleBar, ElementName::ViewHeader] {
            assert!(!view.is_hidden(name), "{name} should be visible");
        }
        assert!(view.is_hidden(ElementName::Ribbon));
        assert!(view.is_hidden(ElementName::StatusBar));
        assert_eq!(state.revealed_edge(), Some(Edge::Top));
        // last top element matched in active-set order
        assert_eq!(state.revealed_element(), Some(ElementName::ViewHeader));
    }

    #[test]
    fn top_group_conceals_only_below_combined_height() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);
        view.step(&mut state, &reg, 500, 5);

        // combined top box spans rows 0..40
        assert_eq!(view.step(&mut state, &reg, 500, 40), 0);
        assert!(!view.is_hidden(ElementName::Header));

        view.step(&mut state, &reg, 500, 41);
        for name in [ElementName::Header, ElementName::TitleBar, ElementName::ViewHeader] {
            assert!(view.is_hidden(name), "{name} should be hidden");
        }
        assert_eq!(state.revealed(), None);
    }

    #[test]
    fn zen_reveal_leaves_full_screen_only_elements_alone() {
        let mut view = StubView::new();
        view.hidden.insert(ElementName::ViewHeader, false);
        view.hidden.insert(ElementName::StatusBar, false);
        let reg = Registry::default();
        let mut state = ModeState::entered(true);

        view.step(&mut state, &reg, 500, 5);
        assert!(!view.is_hidden(ElementName::Header));
        assert!(!view.is_hidden(ElementName::TitleBar));
        assert_eq!(state.revealed_element(), Some(ElementName::TitleBar));

        // leaving the top region must not hide the view header in zen
        view.step(&mut state, &reg, 500, 400);
        assert!(view.is_hidden(ElementName::Header));
        assert!(!view.is_hidden(ElementName::ViewHeader));
        assert!(!view.is_hidden(ElementName::StatusBar));
    }

    #[test]
    fn bottom_edge_reveals_status_bar_individually() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);

        view.step(&mut state, &reg, 800, 795);
        assert!(!view.is_hidden(ElementName::StatusBar));
        assert!(view.is_hidden(ElementName::Header));

        // still inside the bottom band
        assert_eq!(view.step(&mut state, &reg, 100, 785), 0);
        view.step(&mut state, &reg, 500, 700);
        assert!(view.is_hidden(ElementName::StatusBar));
        assert_eq!(state.revealed(), None);
    }

    #[test]
    fn corner_reveals_both_edges_and_records_last_match() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);

        view.step(&mut state, &reg, 2, 2);
        assert!(!view.is_hidden(ElementName::Ribbon));
        assert!(!view.is_hidden(ElementName::TitleBar));
        assert_eq!(state.revealed_edge(), Some(Edge::Top));
    }

    #[test]
    fn away_from_edges_with_nothing_revealed_is_noop() {
        let view = StubView::new();
        let reg = Registry::default();
        let state = ModeState::entered(false);
        for (x, y) in [(500, 400), (100, 100), (900, 700), (21, 21)] {
            let t = evaluate(Pointer::new(x, y), &state, &reg, &view);
            assert!(t.is_noop(&state), "({x}, {y}) changed something");
        }
    }

    #[test]
    fn repeated_reveal_emits_no_duplicate_writes() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);
        assert_eq!(view.step(&mut state, &reg, 500, 0), 3);
        assert_eq!(view.step(&mut state, &reg, 501, 1), 0);
    }

    #[test]
    fn missing_elements_are_skipped() {
        let mut view = StubView::new();
        view.rects.remove(&ElementName::TitleBar);
        view.rects.remove(&ElementName::ViewHeader);
        let reg = Registry::default();
        let mut state = ModeState::entered(false);

        view.step(&mut state, &reg, 500, 5);
        assert!(!view.is_hidden(ElementName::Header));
        assert_eq!(state.revealed_element(), Some(ElementName::Header));
    }

    #[test]
    fn top_reveal_with_no_top_elements_left_clears_state() {
        let mut view = StubView::new();
        let reg = Registry::default();
        let mut state = ModeState::entered(false);
        view.step(&mut state, &reg, 500, 5);

        for name in [ElementName::TitleBar, ElementName::Header, ElementName::ViewHeader] {
            view.rects.remove(&name);
        }
        let t = evaluate(Pointer::new(500, 400), &state, &reg, &view);
        assert!(t.commands.is_empty());
        assert_eq!(t.state.revealed(), None);
    }
}
