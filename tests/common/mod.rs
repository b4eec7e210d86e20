#![allow(dead_code)]

use chrome_reveal::ui::rect;
use chrome_reveal::{ChromeController, ChromeOptions, Pointer, Registry, Workspace, WorkspaceLayout};

/// 1000x800 workspace with pixel-scale chrome.
///
/// Title bar 0..10, ribbon 0..50 wide, docks 200 wide, tab header 20 tall,
/// view header 10 tall, status bar 20 tall.
pub fn pixel_workspace() -> Workspace {
    let layout = WorkspaceLayout {
        title_bar_height: 10,
        ribbon_width: 50,
        dock_width: 200,
        tab_header_height: 20,
        view_header_height: 10,
        status_bar_height: 20,
    };
    Workspace::with_layout(rect(0, 0, 1000, 800), layout)
}

pub fn controller(options: ChromeOptions) -> ChromeController {
    ChromeController::new(Registry::standard(20), options)
}

pub fn move_to(controller: &mut ChromeController, ws: &mut Workspace, x: u16, y: u16) {
    ws.set_pointer(Pointer::new(x, y));
    controller.handle_pointer_move(ws, Pointer::new(x, y));
}
