//! Shared test doubles for the host capability seam.
//!
//! The same pattern the host would implement for real, reduced to
//! in-memory state with recorded call logs that tests assert against.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use waymark_host::{
	ActiveContext, ActiveView, DocumentHost, EditorSurface, HighlightSurface, HostError, Notice,
	NoticeSink, SettingsStore,
};
use waymark_primitives::{DocumentId, Position, ResolvedPosition};

/// Settings store over a shared in-memory blob.
pub(crate) struct MemorySettings {
	pub blob: Rc<RefCell<Option<String>>>,
}

impl MemorySettings {
	pub fn empty() -> (Self, Rc<RefCell<Option<String>>>) {
		let blob = Rc::new(RefCell::new(None));
		(Self { blob: blob.clone() }, blob)
	}

	pub fn with_blob(blob: &str) -> (Self, Rc<RefCell<Option<String>>>) {
		let blob = Rc::new(RefCell::new(Some(blob.to_owned())));
		(Self { blob: blob.clone() }, blob)
	}
}

impl SettingsStore for MemorySettings {
	fn load(&self) -> Result<Option<String>, HostError> {
		Ok(self.blob.borrow().clone())
	}

	fn save(&mut self, blob: &str) -> Result<(), HostError> {
		*self.blob.borrow_mut() = Some(blob.to_owned());
		Ok(())
	}
}

/// Scriptable workspace state shared between the mock host and the test.
#[derive(Default)]
pub(crate) struct WorkspaceState {
	/// Document contents, as lines.
	pub docs: BTreeMap<DocumentId, Vec<String>>,
	pub active: Option<ActiveContext>,
	pub opened: Vec<DocumentId>,
	pub cursors: Vec<(DocumentId, ResolvedPosition)>,
	pub scrolls: Vec<(DocumentId, usize)>,
	pub panel_reveals: usize,
	pub fail_reads: bool,
}

impl WorkspaceState {
	pub fn add_doc(&mut self, id: &str, lines: &[&str]) {
		self.docs.insert(
			DocumentId::from(id),
			lines.iter().map(|line| (*line).to_owned()).collect(),
		);
	}

	pub fn focus(&mut self, id: &str, line: usize, column: usize) {
		self.active = Some(ActiveContext {
			document: DocumentId::from(id),
			cursor: Position::new(line, column),
		});
	}
}

pub(crate) struct MockWorkspace {
	state: Rc<RefCell<WorkspaceState>>,
}

impl MockWorkspace {
	pub fn new() -> (Self, Rc<RefCell<WorkspaceState>>) {
		let state = Rc::new(RefCell::new(WorkspaceState::default()));
		(
			Self {
				state: state.clone(),
			},
			state,
		)
	}
}

impl DocumentHost for MockWorkspace {
	fn active_context(&self) -> Option<ActiveContext> {
		self.state.borrow().active.clone()
	}

	fn active_view(&self) -> Option<ActiveView> {
		let state = self.state.borrow();
		let active = state.active.as_ref()?;
		let lines = state.docs.get(&active.document)?;
		Some(ActiveView {
			document: active.document.clone(),
			line_count: lines.len(),
		})
	}

	fn exists(&self, id: &DocumentId) -> bool {
		self.state.borrow().docs.contains_key(id)
	}

	fn open(&mut self, id: &DocumentId) -> Result<Box<dyn EditorSurface + '_>, HostError> {
		let mut state = self.state.borrow_mut();
		if !state.docs.contains_key(id) {
			return Err(HostError::DocumentNotFound(id.clone()));
		}
		state.opened.push(id.clone());
		state.active = Some(ActiveContext {
			document: id.clone(),
			cursor: Position::default(),
		});
		drop(state);
		Ok(Box::new(MockEditor {
			state: self.state.clone(),
			document: id.clone(),
		}))
	}

	fn read_content(&self, id: &DocumentId) -> Result<String, HostError> {
		let state = self.state.borrow();
		if state.fail_reads {
			return Err(HostError::Io("read failed".to_owned()));
		}
		state
			.docs
			.get(id)
			.map(|lines| lines.join("\n"))
			.ok_or_else(|| HostError::DocumentNotFound(id.clone()))
	}

	fn reveal_list_panel(&mut self) {
		self.state.borrow_mut().panel_reveals += 1;
	}
}

pub(crate) struct MockEditor {
	state: Rc<RefCell<WorkspaceState>>,
	document: DocumentId,
}

impl EditorSurface for MockEditor {
	fn line_count(&self) -> usize {
		self.state.borrow().docs[&self.document].len()
	}

	fn line_len(&self, line: usize) -> usize {
		self.state.borrow().docs[&self.document]
			.get(line)
			.map_or(0, |text| text.chars().count())
	}

	fn set_cursor(&mut self, position: ResolvedPosition) {
		self.state
			.borrow_mut()
			.cursors
			.push((self.document.clone(), position));
	}

	fn scroll_into_view(&mut self, line: usize) {
		self.state
			.borrow_mut()
			.scrolls
			.push((self.document.clone(), line));
	}
}

/// Highlight surface recording every add/remove call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceCall {
	Add(usize, String),
	Remove(usize, String),
}

pub(crate) struct RecordingSurface {
	calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
	pub fn new() -> (Self, Rc<RefCell<Vec<SurfaceCall>>>) {
		let calls = Rc::new(RefCell::new(Vec::new()));
		(
			Self {
				calls: calls.clone(),
			},
			calls,
		)
	}
}

impl HighlightSurface for RecordingSurface {
	fn add_line_class(&mut self, line: usize, class: &str) {
		self.calls
			.borrow_mut()
			.push(SurfaceCall::Add(line, class.to_owned()));
	}

	fn remove_line_class(&mut self, line: usize, class: &str) {
		self.calls
			.borrow_mut()
			.push(SurfaceCall::Remove(line, class.to_owned()));
	}
}

/// Notice sink with a scripted confirm answer.
#[derive(Default)]
pub(crate) struct NoticeLog {
	pub notices: Vec<Notice>,
	pub confirms: Vec<String>,
	pub accept_confirms: bool,
}

pub(crate) struct MockNotices {
	log: Rc<RefCell<NoticeLog>>,
}

impl MockNotices {
	pub fn new(accept_confirms: bool) -> (Self, Rc<RefCell<NoticeLog>>) {
		let log = Rc::new(RefCell::new(NoticeLog {
			accept_confirms,
			..NoticeLog::default()
		}));
		(Self { log: log.clone() }, log)
	}
}

impl NoticeSink for MockNotices {
	fn notice(&mut self, notice: Notice) {
		self.log.borrow_mut().notices.push(notice);
	}

	fn confirm(&mut self, prompt: &str) -> bool {
		let mut log = self.log.borrow_mut();
		log.confirms.push(prompt.to_owned());
		log.accept_confirms
	}
}
