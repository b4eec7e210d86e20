mod common;

use chrome_reveal::{ChromeNode, ChromeOptions, Edge, ElementName, LayoutView};
use common::{controller, move_to, pixel_workspace};

#[test]
fn left_edge_reveals_ribbon_until_pointer_leaves_it() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, false);
    assert!(ws.is_hidden(ChromeNode::Ribbon));

    move_to(&mut ctl, &mut ws, 5, 400);
    assert!(!ws.is_hidden(ChromeNode::Ribbon));
    assert_eq!(ctl.state().revealed_edge(), Some(Edge::Left));
    assert_eq!(ctl.state().revealed_element(), Some(ElementName::Ribbon));

    // Still over the ribbon.
    move_to(&mut ctl, &mut ws, 30, 400);
    assert!(!ws.is_hidden(ChromeNode::Ribbon));

    move_to(&mut ctl, &mut ws, 500, 400);
    assert!(ws.is_hidden(ChromeNode::Ribbon));
    assert_eq!(ctl.state().revealed(), None);
}

#[test]
fn zen_top_reveal_leaves_full_screen_only_elements_alone() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, true);
    assert!(!ws.is_hidden(ChromeNode::ViewHeader));
    assert!(!ws.is_hidden(ChromeNode::StatusBar));

    move_to(&mut ctl, &mut ws, 500, 5);
    assert!(!ws.is_hidden(ChromeNode::TabHeader));
    assert!(!ws.is_hidden(ChromeNode::TitleBar));
    assert!(ws.is_hidden(ChromeNode::Ribbon));
    assert!(!ws.is_hidden(ChromeNode::ViewHeader));
    assert!(!ws.is_hidden(ChromeNode::StatusBar));
    assert_eq!(ctl.state().revealed_edge(), Some(Edge::Top));

    // Inside the combined top box (title 10 + tab header 20).
    move_to(&mut ctl, &mut ws, 500, 25);
    assert!(!ws.is_hidden(ChromeNode::TabHeader));

    move_to(&mut ctl, &mut ws, 500, 100);
    assert!(ws.is_hidden(ChromeNode::TabHeader));
    assert!(ws.is_hidden(ChromeNode::TitleBar));
    assert!(!ws.is_hidden(ChromeNode::ViewHeader));
    assert!(!ws.is_hidden(ChromeNode::StatusBar));
}

#[test]
fn full_top_group_appears_and_disappears_together() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, false);
    let tops = [ChromeNode::TitleBar, ChromeNode::TabHeader, ChromeNode::ViewHeader];

    move_to(&mut ctl, &mut ws, 500, 5);
    assert!(tops.iter().all(|node| !ws.is_hidden(*node)));

    // Combined height is 40; the boundary row still counts as inside.
    move_to(&mut ctl, &mut ws, 500, 40);
    assert!(tops.iter().all(|node| !ws.is_hidden(*node)));

    move_to(&mut ctl, &mut ws, 500, 41);
    assert!(tops.iter().all(|node| ws.is_hidden(*node)));
    assert_eq!(ctl.state().revealed(), None);
}

#[test]
fn bottom_edge_reveals_status_bar_in_full_mode() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, false);
    assert!(ws.is_hidden(ChromeNode::StatusBar));

    move_to(&mut ctl, &mut ws, 500, 790);
    assert!(!ws.is_hidden(ChromeNode::StatusBar));
    assert_eq!(ctl.state().revealed_edge(), Some(Edge::Bottom));

    move_to(&mut ctl, &mut ws, 500, 700);
    assert!(ws.is_hidden(ChromeNode::StatusBar));
}

#[test]
fn status_bar_stays_visible_when_option_is_off() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions {
        hide_status_bar: false,
        collapse_docks: false,
    });
    ctl.activate(&mut ws, false);
    assert!(!ws.is_hidden(ChromeNode::StatusBar));
    move_to(&mut ctl, &mut ws, 500, 790);
    move_to(&mut ctl, &mut ws, 500, 400);
    assert!(!ws.is_hidden(ChromeNode::StatusBar));
}

#[test]
fn interior_moves_change_nothing() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, false);
    let before = ws.regions();
    let state = *ctl.state();
    for (x, y) in [(300, 300), (600, 450), (21, 21), (979, 779)] {
        move_to(&mut ctl, &mut ws, x, y);
    }
    assert_eq!(ws.regions(), before);
    assert_eq!(*ctl.state(), state);
}

#[test]
fn top_group_outlives_a_hop_to_another_edge() {
    let mut ws = pixel_workspace();
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, false);

    move_to(&mut ctl, &mut ws, 500, 5);
    assert!(!ws.is_hidden(ChromeNode::TabHeader));

    // The left reveal replaces the top one, so the top group is no longer
    // tracked for concealment.
    move_to(&mut ctl, &mut ws, 5, 400);
    assert_eq!(ctl.state().revealed_edge(), Some(Edge::Left));
    move_to(&mut ctl, &mut ws, 500, 400);
    assert!(ws.is_hidden(ChromeNode::Ribbon));
    assert!(!ws.is_hidden(ChromeNode::TabHeader));
    assert!(!ws.is_hidden(ChromeNode::TitleBar));
    assert!(!ws.is_hidden(ChromeNode::ViewHeader));
    assert_eq!(ctl.state().revealed(), None);

    // Touching the top edge again brings the group back under control.
    move_to(&mut ctl, &mut ws, 500, 5);
    move_to(&mut ctl, &mut ws, 500, 100);
    assert!(ws.is_hidden(ChromeNode::TabHeader));
    assert!(ws.is_hidden(ChromeNode::TitleBar));
    assert!(ws.is_hidden(ChromeNode::ViewHeader));
}

#[test]
fn host_without_title_bar_still_reveals_headers() {
    let mut ws = pixel_workspace();
    ws.set_title_bar_present(false);
    let mut ctl = controller(ChromeOptions::default());
    ctl.activate(&mut ws, true);
    move_to(&mut ctl, &mut ws, 500, 5);
    assert!(!ws.is_hidden(ChromeNode::TabHeader));
    assert_eq!(ctl.state().revealed_element(), Some(ElementName::Header));
    move_to(&mut ctl, &mut ws, 500, 300);
    assert!(ws.is_hidden(ChromeNode::TabHeader));
}
