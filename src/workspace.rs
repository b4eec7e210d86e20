//! Terminal workspace that hosts the managed chrome.
//!
//! Layout reflows like a document: a hidden element takes no space and
//! reports an empty bounding box, and its neighbours move into the freed
//! rows or columns.

use std::collections::BTreeSet;

use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::constants::selectors;
use crate::edge::Pointer;
use crate::host::{ChromeHost, Dock, DockHost};
use crate::registry::LayoutView;
use crate::state::DisplayMode;
use crate::ui::{UiFrame, rect};

/// Nodes of the workspace tree the registry can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChromeNode {
    TitleBar,
    Ribbon,
    LeftDock,
    RightDock,
    TabHeader,
    ViewContainer,
    ViewHeader,
    StatusBar,
}

/// Sizes of the chrome regions, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub title_bar_height: u16,
    pub ribbon_width: u16,
    pub dock_width: u16,
    pub tab_header_height: u16,
    pub view_header_height: u16,
    pub status_bar_height: u16,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            title_bar_height: 1,
            ribbon_width: 3,
            dock_width: 18,
            tab_header_height: 1,
            view_header_height: 1,
            status_bar_height: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    pub title_bar: Rect,
    pub ribbon: Rect,
    pub left_dock: Rect,
    pub right_dock: Rect,
    pub tab_header: Rect,
    pub view_container: Rect,
    pub view_header: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

#[derive(Debug)]
pub struct Workspace {
    viewport: Rect,
    layout: WorkspaceLayout,
    has_title_bar: bool,
    hidden: BTreeSet<ChromeNode>,
    collapsed: BTreeSet<Dock>,
    mode_marker: Option<DisplayMode>,
    pointer_capture: bool,
    pointer_capture_dirty: bool,
    pointer: Option<Pointer>,
    document: Vec<String>,
}

impl Workspace {
    pub fn new(viewport: Rect) -> Self {
        Self::with_layout(viewport, WorkspaceLayout::default())
    }

    pub fn with_layout(viewport: Rect, layout: WorkspaceLayout) -> Self {
        Self {
            viewport,
            layout,
            has_title_bar: true,
            hidden: BTreeSet::new(),
            collapsed: BTreeSet::new(),
            mode_marker: None,
            pointer_capture: false,
            pointer_capture_dirty: false,
            pointer: None,
            document: Vec::new(),
        }
    }

    /// Hosts without a title bar (for example tiling window managers) never
    /// resolve it.
    pub fn set_title_bar_present(&mut self, present: bool) {
        self.has_title_bar = present;
    }

    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_document<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.document = lines.into_iter().map(Into::into).collect();
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = Some(pointer);
    }

    pub fn mode_marker(&self) -> Option<DisplayMode> {
        self.mode_marker
    }

    pub fn pointer_capture(&self) -> bool {
        self.pointer_capture
    }

    /// Returns the pointer-capture state once after each change, so the
    /// caller can forward it to the input driver.
    pub fn take_pointer_capture_change(&mut self) -> Option<bool> {
        if self.pointer_capture_dirty {
            self.pointer_capture_dirty = false;
            Some(self.pointer_capture)
        } else {
            None
        }
    }

    fn set_pointer_capture(&mut self, enabled: bool) {
        if self.pointer_capture == enabled {
            return;
        }
        self.pointer_capture = enabled;
        self.pointer_capture_dirty = true;
    }

    fn shown(&self, node: ChromeNode) -> bool {
        !self.hidden.contains(&node)
    }

    pub fn regions(&self) -> Regions {
        let vp = self.viewport;
        let l = &self.layout;
        let mut regions = Regions::default();
        let mut top = vp.top();
        let mut bottom = vp.bottom();

        if self.has_title_bar && self.shown(ChromeNode::TitleBar) {
            let h = l.title_bar_height.min(bottom - top);
            regions.title_bar = rect(vp.x, top, vp.width, h);
            top += h;
        }
        if self.shown(ChromeNode::StatusBar) {
            let h = l.status_bar_height.min(bottom - top);
            regions.status_bar = rect(vp.x, bottom - h, vp.width, h);
            bottom -= h;
        }

        let body_h = bottom - top;
        let mut left = vp.left();
        let mut right = vp.right();
        if self.shown(ChromeNode::Ribbon) {
            let w = l.ribbon_width.min(right - left);
            regions.ribbon = rect(left, top, w, body_h);
            left += w;
        }
        if !self.collapsed.contains(&Dock::Left) {
            let w = l.dock_width.min(right - left);
            regions.left_dock = rect(left, top, w, body_h);
            left += w;
        }
        if !self.collapsed.contains(&Dock::Right) {
            let w = l.dock_width.min(right - left);
            regions.right_dock = rect(right - w, top, w, body_h);
            right -= w;
        }

        let view_w = right - left;
        let mut view_top = top;
        if self.shown(ChromeNode::TabHeader) {
            let h = l.tab_header_height.min(bottom - view_top);
            regions.tab_header = rect(left, view_top, view_w, h);
            view_top += h;
        }
        regions.view_container = rect(left, view_top, view_w, bottom - view_top);
        if self.shown(ChromeNode::ViewHeader) {
            let h = l.view_header_height.min(bottom - view_top);
            regions.view_header = rect(left, view_top, view_w, h);
            view_top += h;
        }
        regions.content = rect(left, view_top, view_w, bottom - view_top);
        regions
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, status_right: &str) {
        let r = self.regions();

        frame.fill(r.title_bar, crate::theme::title_bar());
        frame.set_string(
            r.title_bar,
            r.title_bar.x + 1,
            r.title_bar.y,
            concat!(env!("CARGO_PKG_NAME"), " - notes.md"),
            crate::theme::title_bar(),
        );

        frame.fill(r.ribbon, crate::theme::ribbon());
        for (i, icon) in ["≡", "⌕", "☰", "⚙"].iter().enumerate() {
            let y = r.ribbon.y.saturating_add(i as u16 * 2);
            frame.set_string(r.ribbon, r.ribbon.x + 1, y, icon, crate::theme::ribbon());
        }

        for (area, title) in [(r.left_dock, "Files"), (r.right_dock, "Outline")] {
            frame.fill(area, crate::theme::dock());
            frame.set_string(area, area.x + 1, area.y, title, crate::theme::dock());
        }

        frame.fill(r.tab_header, crate::theme::tab_header());
        frame.set_string(
            r.tab_header,
            r.tab_header.x + 1,
            r.tab_header.y,
            " notes.md ",
            crate::theme::tab_active(),
        );

        frame.fill(r.view_header, crate::theme::view_header());
        frame.set_string(
            r.view_header,
            r.view_header.x + 1,
            r.view_header.y,
            "< >  notes.md",
            crate::theme::view_header(),
        );

        let text = Text::from(
            self.document
                .iter()
                .map(|line| Line::from(line.as_str()))
                .collect::<Vec<_>>(),
        );
        frame.render_widget(
            Paragraph::new(text).style(crate::theme::content()),
            r.content,
        );
        if let Some(mode) = self.mode_marker {
            let marker = match mode {
                DisplayMode::Zen => crate::constants::markers::ZEN_MODE,
                _ => crate::constants::markers::FULL_SCREEN_MODE,
            };
            let x = r
                .content
                .right()
                .saturating_sub(marker.chars().count() as u16 + 1);
            frame.set_string(r.content, x, r.content.y, marker, crate::theme::mode_marker());
        }

        frame.fill(r.status_bar, crate::theme::status_bar());
        let left = match self.pointer {
            Some(p) => format!(" {},{} ", p.x, p.y),
            None => " - ".to_string(),
        };
        frame.set_string(
            r.status_bar,
            r.status_bar.x,
            r.status_bar.y,
            &left,
            crate::theme::status_bar(),
        );
        let right_w = status_right.chars().count() as u16;
        let start = r
            .status_bar
            .right()
            .saturating_sub(right_w)
            .max(r.status_bar.x + left.chars().count() as u16);
        frame.set_string(
            r.status_bar,
            start,
            r.status_bar.y,
            status_right,
            crate::theme::status_bar(),
        );
    }
}

impl LayoutView for Workspace {
    type Node = ChromeNode;

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn query_one(&self, selector: &str) -> Option<ChromeNode> {
        match selector {
            selectors::RIBBON => Some(ChromeNode::Ribbon),
            selectors::TAB_HEADER => Some(ChromeNode::TabHeader),
            selectors::TITLE_BAR => self.has_title_bar.then_some(ChromeNode::TitleBar),
            selectors::STATUS_BAR => Some(ChromeNode::StatusBar),
            _ => None,
        }
    }

    fn current_view_container(&self) -> Option<ChromeNode> {
        Some(ChromeNode::ViewContainer)
    }

    fn first_child(&self, node: ChromeNode) -> Option<ChromeNode> {
        match node {
            ChromeNode::ViewContainer => Some(ChromeNode::ViewHeader),
            _ => None,
        }
    }

    fn bounding_rect(&self, node: ChromeNode) -> Rect {
        let r = self.regions();
        match node {
            ChromeNode::TitleBar => r.title_bar,
            ChromeNode::Ribbon => r.ribbon,
            ChromeNode::LeftDock => r.left_dock,
            ChromeNode::RightDock => r.right_dock,
            ChromeNode::TabHeader => r.tab_header,
            ChromeNode::ViewContainer => r.view_container,
            ChromeNode::ViewHeader => r.view_header,
            ChromeNode::StatusBar => r.status_bar,
        }
    }

    fn is_hidden(&self, node: ChromeNode) -> bool {
        self.hidden.contains(&node)
    }
}

impl ChromeHost for Workspace {
    fn set_hidden(&mut self, node: ChromeNode, hidden: bool) {
        if hidden {
            self.hidden.insert(node);
        } else {
            self.hidden.remove(&node);
        }
    }

    fn set_mode_marker(&mut self, mode: Option<DisplayMode>) {
        self.mode_marker = mode;
    }

    fn install_pointer_listener(&mut self) {
        self.set_pointer_capture(true);
    }

    fn remove_pointer_listener(&mut self) {
        self.set_pointer_capture(false);
    }

    fn docks(&mut self) -> Option<&mut dyn DockHost> {
        Some(self)
    }
}

impl DockHost for Workspace {
    fn collapse(&mut self, dock: Dock) {
        self.collapsed.insert(dock);
    }

    fn expand(&mut self, dock: Dock) {
        self.collapsed.remove(&dock);
    }

    fn is_collapsed(&self, dock: Dock) -> bool {
        self.collapsed.contains(&dock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn workspace() -> Workspace {
        Workspace::new(rect(0, 0, 80, 24))
    }

    #[test]
    fn regions_stack_top_chrome_in_order() {
        let ws = workspace();
        let r = ws.regions();
        assert_eq!(r.title_bar, rect(0, 0, 80, 1));
        assert_eq!(r.ribbon, rect(0, 1, 3, 22));
        assert_eq!(r.left_dock, rect(3, 1, 18, 22));
        assert_eq!(r.right_dock, rect(62, 1, 18, 22));
        assert_eq!(r.tab_header, rect(21, 1, 41, 1));
        assert_eq!(r.view_header, rect(21, 2, 41, 1));
        assert_eq!(r.content, rect(21, 3, 41, 20));
        assert_eq!(r.status_bar, rect(0, 23, 80, 1));
    }

    #[test]
    fn hidden_nodes_take_no_space() {
        let mut ws = workspace();
        for node in [ChromeNode::TitleBar, ChromeNode::Ribbon, ChromeNode::StatusBar] {
            ws.set_hidden(node, true);
        }
        ws.collapse(Dock::Left);
        let r = ws.regions();
        assert!(r.title_bar.is_empty());
        assert!(ws.bounding_rect(ChromeNode::Ribbon).is_empty());
        assert_eq!(r.tab_header, rect(0, 0, 62, 1));
        assert_eq!(r.content.bottom(), 24);
    }

    #[test]
    fn docks_collapse_and_expand_independently() {
        let mut ws = workspace();
        ws.collapse(Dock::Right);
        ws.collapse(Dock::Left);
        ws.collapse(Dock::Right);
        assert!(ws.is_collapsed(Dock::Left) && ws.is_collapsed(Dock::Right));
        assert!(ws.regions().left_dock.is_empty());

        ws.expand(Dock::Left);
        assert!(!ws.is_collapsed(Dock::Left));
        assert!(ws.is_collapsed(Dock::Right));
        let r = ws.regions();
        assert_eq!(r.left_dock, rect(3, 1, 18, 22));
        assert!(r.right_dock.is_empty());
        assert_eq!(r.tab_header, rect(21, 1, 59, 1));
    }

    #[test]
    fn title_bar_can_be_absent() {
        let mut ws = workspace();
        ws.set_title_bar_present(false);
        assert_eq!(ws.query_one(selectors::TITLE_BAR), None);
        assert_eq!(ws.regions().tab_header.y, 0);
    }

    #[test]
    fn pointer_capture_change_is_reported_once() {
        let mut ws = workspace();
        ws.install_pointer_listener();
        assert_eq!(ws.take_pointer_capture_change(), Some(true));
        assert_eq!(ws.take_pointer_capture_change(), None);
        ws.install_pointer_listener();
        assert_eq!(ws.take_pointer_capture_change(), None);
        ws.remove_pointer_listener();
        assert_eq!(ws.take_pointer_capture_change(), Some(false));
    }

    #[test]
    fn tiny_viewport_does_not_underflow() {
        let mut ws = Workspace::new(rect(0, 0, 2, 1));
        ws.set_document(["hello"]);
        let r = ws.regions();
        assert_eq!(r.title_bar.height, 1);
        assert_eq!(r.status_bar.height, 0);
        let area = rect(0, 0, 2, 1);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        ws.render(&mut frame, "status");
    }

    #[test]
    fn render_draws_mode_marker() {
        let mut ws = workspace();
        ws.set_mode_marker(Some(DisplayMode::Zen));
        let area = ws.viewport();
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        ws.render(&mut frame, "ready");
        let content = ws.regions().content;
        let row: String = (content.left()..content.right())
            .map(|x| buffer[(x, content.y)].symbol().to_string())
            .collect();
        assert!(row.contains(crate::constants::markers::ZEN_MODE));
    }
}
