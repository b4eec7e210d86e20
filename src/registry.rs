//! Static table of managed chrome elements and read-through geometry lookups.

use std::fmt;

use ratatui::layout::Rect;

use crate::constants::{DEFAULT_EDGE_THRESHOLD, selectors};
use crate::edge::Edge;

/// Logical name of a managed chrome element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementName {
    Ribbon,
    Header,
    ViewHeader,
    TitleBar,
    StatusBar,
}

impl ElementName {
    pub const ALL: [ElementName; 5] = [
        ElementName::Ribbon,
        ElementName::Header,
        ElementName::ViewHeader,
        ElementName::TitleBar,
        ElementName::StatusBar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementName::Ribbon => "ribbon",
            ElementName::Header => "header",
            ElementName::ViewHeader => "viewHeader",
            ElementName::TitleBar => "titleBar",
            ElementName::StatusBar => "statusBar",
        }
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule for finding the live node of an element in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Selector(&'static str),
    /// First child of the active view's container.
    ViewHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedElement {
    name: ElementName,
    locator: Locator,
    edge: Edge,
    threshold: u16,
}

impl ManagedElement {
    pub fn new(name: ElementName, locator: Locator, edge: Edge, threshold: u16) -> Self {
        Self {
            name,
            locator,
            edge,
            threshold,
        }
    }

    pub fn name(&self) -> ElementName {
        self.name
    }

    pub fn locator(&self) -> Locator {
        self.locator
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }
}

/// Read access to the host's live layout.
pub trait LayoutView {
    type Node: Copy + Eq + fmt::Debug;

    fn viewport(&self) -> Rect;
    fn query_one(&self, selector: &str) -> Option<Self::Node>;
    fn current_view_container(&self) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn bounding_rect(&self, node: Self::Node) -> Rect;
    fn is_hidden(&self, node: Self::Node) -> bool;
}

/// Which elements each mode hides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSets {
    /// Hidden in zen and full.
    pub common: Vec<ElementName>,
    /// Hidden in full only.
    pub full_screen_only: Vec<ElementName>,
}

impl Default for ModeSets {
    fn default() -> Self {
        Self {
            common: vec![
                ElementName::Ribbon,
                ElementName::Header,
                ElementName::TitleBar,
            ],
            full_screen_only: vec![ElementName::ViewHeader, ElementName::StatusBar],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    elements: Vec<ManagedElement>,
    sets: ModeSets,
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard(DEFAULT_EDGE_THRESHOLD)
    }
}

impl Registry {
    pub fn new(elements: Vec<ManagedElement>, sets: ModeSets) -> Self {
        let mut seen = Vec::with_capacity(elements.len());
        let elements = elements
            .into_iter()
            .filter(|el| {
                if seen.contains(&el.name) {
                    tracing::warn!(element = %el.name, "duplicate registry entry ignored");
                    false
                } else {
                    seen.push(el.name);
                    true
                }
            })
            .collect();
        Self { elements, sets }
    }

    /// The five workspace chrome elements, all sharing `threshold`.
    pub fn standard(threshold: u16) -> Self {
        use ElementName::*;
        let entry = |name, locator, edge| ManagedElement::new(name, locator, edge, threshold);
        Self::new(
            vec![
                entry(Ribbon, Locator::Selector(selectors::RIBBON), Edge::Left),
                entry(Header, Locator::Selector(selectors::TAB_HEADER), Edge::Top),
                entry(ViewHeader, Locator::ViewHeader, Edge::Top),
                entry(TitleBar, Locator::Selector(selectors::TITLE_BAR), Edge::Top),
                entry(StatusBar, Locator::Selector(selectors::STATUS_BAR), Edge::Bottom),
            ],
            ModeSets::default(),
        )
    }

    pub fn elements(&self) -> &[ManagedElement] {
        &self.elements
    }

    pub fn get(&self, name: ElementName) -> Option<&ManagedElement> {
        self.elements.iter().find(|el| el.name == name)
    }

    pub fn sets(&self) -> &ModeSets {
        &self.sets
    }

    /// Adds or removes `name` from the full-screen-only set.
    pub fn set_full_screen_member(&mut self, name: ElementName, member: bool) {
        let list = &mut self.sets.full_screen_only;
        let present = list.contains(&name);
        if member && !present {
            list.push(name);
        } else if !member && present {
            list.retain(|n| *n != name);
        }
    }

    /// Elements taking part in the given mode, common set first.
    pub fn active_set(&self, zen: bool) -> impl Iterator<Item = &ManagedElement> + '_ {
        let extra: &[ElementName] = if zen {
            &[]
        } else {
            &self.sets.full_screen_only
        };
        self.sets
            .common
            .iter()
            .chain(extra.iter())
            .filter_map(|name| self.get(*name))
    }

    /// Width of the band checked before any per-element test: the largest
    /// configured threshold.
    pub fn edge_band(&self) -> u16 {
        self.elements
            .iter()
            .map(|el| el.threshold)
            .max()
            .unwrap_or(0)
    }

    pub fn resolve<V: LayoutView + ?Sized>(
        &self,
        view: &V,
        name: ElementName,
    ) -> Option<V::Node> {
        self.get(name).and_then(|el| resolve_element(view, el))
    }

    pub fn bounding_box<V: LayoutView + ?Sized>(
        &self,
        view: &V,
        name: ElementName,
    ) -> Option<Rect> {
        self.resolve(view, name).map(|node| view.bounding_rect(node))
    }

    /// Union of the boxes of every present element in `names`.
    ///
    /// Returns an empty rectangle at the origin when nothing resolves; callers
    /// must not run proximity tests against it.
    pub fn combined_bounding_box<V, I>(&self, view: &V, names: I) -> Rect
    where
        V: LayoutView + ?Sized,
        I: IntoIterator<Item = ElementName>,
    {
        names
            .into_iter()
            .filter_map(|name| self.bounding_box(view, name))
            .reduce(union)
            .unwrap_or_default()
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    let left = a.left().min(b.left());
    let top = a.top().min(b.top());
    Rect {
        x: left,
        y: top,
        width: a.right().max(b.right()) - left,
        height: a.bottom().max(b.bottom()) - top,
    }
}

pub(crate) fn resolve_element<V: LayoutView + ?Sized>(
    view: &V,
    element: &ManagedElement,
) -> Option<V::Node> {
    match element.locator {
        Locator::Selector(selector) => view.query_one(selector),
        Locator::ViewHeader => view
            .current_view_container()
            .and_then(|container| view.first_child(container)),
    }
}
