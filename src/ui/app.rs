use crate::service::{CommandSink, Completion, SwitchCommand};
use crate::switch::{PortId, PortRole};
use crate::ui::selection::SelectionController;

/// Keyboard cursor over the port grids. Doubles as the hover position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    pub role: PortRole,
    pub port: PortId,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            role: PortRole::Ingress,
            port: 1,
        }
    }
}

/// Presentation state wrapped around the selection controller.
pub struct App<C> {
    should_quit: bool,
    layout_width: u32,
    cursor: Cursor,
    controller: SelectionController<C>,
}

impl<C: CommandSink> App<C> {
    pub fn new(controller: SelectionController<C>, layout_width: u32) -> Self {
        Self {
            should_quit: false,
            layout_width: layout_width.max(1),
            cursor: Cursor::default(),
            controller,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &SelectionController<C> {
        &self.controller
    }

    pub fn layout_width(&self) -> u32 {
        self.layout_width
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Rows needed to lay out every port of `role`.
    pub fn grid_rows(&self, role: PortRole) -> u32 {
        self.controller.view().port_count(role) / self.layout_width
    }

    /// Move the cursor within its grid, clamping at the edges.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let count = self.controller.view().port_count(self.cursor.role);
        if count == 0 {
            return;
        }
        let width = self.layout_width as i64;
        let rows = (count as i64 + width - 1) / width;
        let index = self.cursor.port.saturating_sub(1) as i64;
        let col = (index % width + dx as i64).clamp(0, width - 1);
        let row = (index / width + dy as i64).clamp(0, rows - 1);
        let target = (row * width + col).min(count as i64 - 1);
        self.cursor.port = target as PortId + 1;
    }

    /// Jump between the ingress and egress grids, keeping the column.
    pub fn switch_grid(&mut self) {
        let role = self.cursor.role.opposite();
        let count = self.controller.view().port_count(role);
        self.cursor = Cursor {
            role,
            port: self.cursor.port.min(count.max(1)),
        };
    }

    /// Toggle selection of the port under the cursor.
    pub fn activate(&mut self) {
        let Cursor { role, port } = self.cursor;
        if !self.controller.view().in_range(role, port) {
            return;
        }
        self.controller.select(role, port);
    }

    pub fn connect(&mut self) -> Option<SwitchCommand> {
        self.controller.connect()
    }

    pub fn disconnect(&mut self) -> Option<SwitchCommand> {
        self.controller.disconnect()
    }

    pub fn disconnect_all(&mut self) -> Option<SwitchCommand> {
        self.controller.disconnect_all()
    }

    pub fn on_completion(&mut self, completion: Completion) {
        self.controller.on_completion(completion);
    }

    pub fn show_error_popup(&self) -> bool {
        self.controller.last_error().is_some()
    }

    pub fn dismiss_error(&mut self) {
        self.controller.dismiss_error();
    }

    /// Hover highlight: the connected port under the cursor and its mate.
    pub fn is_highlighted(&self, role: PortRole, port: PortId) -> bool {
        let Some(mate) = self.controller.view().partner(self.cursor.role, self.cursor.port)
        else {
            return false;
        };
        (role == self.cursor.role && port == self.cursor.port)
            || (role == self.cursor.role.opposite() && port == mate)
    }
}
