use waymark_primitives::Slot;

/// What a command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
	/// Bind (or toggle off) a slot at the active cursor.
	Set(Slot),
	/// Jump to a slot's saved position.
	Jump(Slot),
	/// Reveal the bookmark list panel.
	ShowList,
}

/// A host-bindable command definition.
///
/// The engine exposes commands as data; the host registers them with its
/// own command/hotkey system and routes invocations back through
/// [`dispatch`](crate::BookmarkController::dispatch).
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
	/// Stable id the host binds hotkeys to.
	pub id: &'static str,
	/// Human-readable description for palettes and keymap UIs.
	pub description: &'static str,
	pub action: CommandAction,
}

/// All bookmark commands: one set/jump pair per slot plus the list command.
pub const COMMANDS: [CommandDef; 19] = [
	CommandDef {
		id: "set-bookmark-1",
		description: "Set bookmark 1 at the cursor",
		action: CommandAction::Set(Slot::ALL[0]),
	},
	CommandDef {
		id: "set-bookmark-2",
		description: "Set bookmark 2 at the cursor",
		action: CommandAction::Set(Slot::ALL[1]),
	},
	CommandDef {
		id: "set-bookmark-3",
		description: "Set bookmark 3 at the cursor",
		action: CommandAction::Set(Slot::ALL[2]),
	},
	CommandDef {
		id: "set-bookmark-4",
		description: "Set bookmark 4 at the cursor",
		action: CommandAction::Set(Slot::ALL[3]),
	},
	CommandDef {
		id: "set-bookmark-5",
		description: "Set bookmark 5 at the cursor",
		action: CommandAction::Set(Slot::ALL[4]),
	},
	CommandDef {
		id: "set-bookmark-6",
		description: "Set bookmark 6 at the cursor",
		action: CommandAction::Set(Slot::ALL[5]),
	},
	CommandDef {
		id: "set-bookmark-7",
		description: "Set bookmark 7 at the cursor",
		action: CommandAction::Set(Slot::ALL[6]),
	},
	CommandDef {
		id: "set-bookmark-8",
		description: "Set bookmark 8 at the cursor",
		action: CommandAction::Set(Slot::ALL[7]),
	},
	CommandDef {
		id: "set-bookmark-9",
		description: "Set bookmark 9 at the cursor",
		action: CommandAction::Set(Slot::ALL[8]),
	},
	CommandDef {
		id: "jump-to-bookmark-1",
		description: "Jump to bookmark 1",
		action: CommandAction::Jump(Slot::ALL[0]),
	},
	CommandDef {
		id: "jump-to-bookmark-2",
		description: "Jump to bookmark 2",
		action: CommandAction::Jump(Slot::ALL[1]),
	},
	CommandDef {
		id: "jump-to-bookmark-3",
		description: "Jump to bookmark 3",
		action: CommandAction::Jump(Slot::ALL[2]),
	},
	CommandDef {
		id: "jump-to-bookmark-4",
		description: "Jump to bookmark 4",
		action: CommandAction::Jump(Slot::ALL[3]),
	},
	CommandDef {
		id: "jump-to-bookmark-5",
		description: "Jump to bookmark 5",
		action: CommandAction::Jump(Slot::ALL[4]),
	},
	CommandDef {
		id: "jump-to-bookmark-6",
		description: "Jump to bookmark 6",
		action: CommandAction::Jump(Slot::ALL[5]),
	},
	CommandDef {
		id: "jump-to-bookmark-7",
		description: "Jump to bookmark 7",
		action: CommandAction::Jump(Slot::ALL[6]),
	},
	CommandDef {
		id: "jump-to-bookmark-8",
		description: "Jump to bookmark 8",
		action: CommandAction::Jump(Slot::ALL[7]),
	},
	CommandDef {
		id: "jump-to-bookmark-9",
		description: "Jump to bookmark 9",
		action: CommandAction::Jump(Slot::ALL[8]),
	},
	CommandDef {
		id: "show-bookmark-list",
		description: "Show the bookmark list",
		action: CommandAction::ShowList,
	},
];

/// Looks up a command definition by id.
pub fn find(id: &str) -> Option<&'static CommandDef> {
	COMMANDS.iter().find(|def| def.id == id)
}
