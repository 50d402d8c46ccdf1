use rustc_hash::FxHashMap;
use tracing::trace;
use waymark_host::DocumentHost;
use waymark_store::BookmarkStore;

use crate::config::EngineConfig;
use crate::list::{self, BookmarkListItem};


/// Identity of a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// State handed to observers when they render.
pub struct RenderContext<'a> {
	pub store: &'a BookmarkStore,
	pub documents: &'a dyn DocumentHost,
	pub config: &'a EngineConfig,
}

impl RenderContext<'_> {
	/// Assembles the list panel rows, ascending by slot.
	pub fn list_items(&self) -> Vec<BookmarkListItem> {
		list::list_items(self.store, self.documents, self.config)
	}
}

/// A view that renders itself from bookmark state.
///
/// An explicit contract instead of a host-inherited view base class: the
/// hub drives `mount` on registration, `render` on every notification,
/// and `unmount` on removal.
pub trait Observer {
	/// Called once when the observer is registered.
	fn mount(&mut self) {}

	/// Called when the observer is unregistered.
	fn unmount(&mut self) {}

	/// Redraws the view from current state.
	///
	/// Renders are idempotent full redraws. The render may complete
	/// asynchronously host-side; the hub learns of completion through
	/// [`ObserverHub::render_complete`].
	fn render(&mut self, cx: &RenderContext<'_>);
}

/// Render pipeline state for one observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderState {
	/// No render in flight.
	Idle,
	/// A render is in flight; nothing further requested.
	InFlight,
	/// A render is in flight and at least one request arrived meanwhile.
	InFlightDirty,
}

struct Registered {
	observer: Box<dyn Observer>,
	state: RenderState,
}

/// Registry of views with at-most-one-render-in-flight coalescing.
///
/// A render request against an observer whose render is still in flight
/// is absorbed into it: when the host reports completion, one follow-up
/// render runs with current state. Intermediate states absorbed this way
/// are never drawn, and two renders for the same observer never overlap.
#[derive(Default)]
pub struct ObserverHub {
	observers: FxHashMap<ObserverId, Registered>,
	order: Vec<ObserverId>,
	next_id: u64,
}

impl ObserverHub {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers an observer and immediately requests a render.
	pub fn register(&mut self, mut observer: Box<dyn Observer>, cx: &RenderContext<'_>) -> ObserverId {
		let id = ObserverId(self.next_id);
		self.next_id += 1;
		observer.mount();
		self.observers.insert(
			id,
			Registered {
				observer,
				state: RenderState::Idle,
			},
		);
		self.order.push(id);
		self.request_render(id, cx);
		id
	}

	/// Removes an observer; unknown ids are ignored.
	pub fn unregister(&mut self, id: ObserverId) {
		if let Some(mut registered) = self.observers.remove(&id) {
			registered.observer.unmount();
			self.order.retain(|other| *other != id);
		}
	}

	/// Requests a render from every registered observer, in registration
	/// order.
	pub fn notify_all(&mut self, cx: &RenderContext<'_>) {
		for id in self.order.clone() {
			self.request_render(id, cx);
		}
	}

	/// Host callback: the observer's asynchronous render finished.
	///
	/// A request absorbed while the render was in flight re-renders once
	/// with current state; the newest state wins.
	pub fn render_complete(&mut self, id: ObserverId, cx: &RenderContext<'_>) {
		let Some(registered) = self.observers.get_mut(&id) else {
			return;
		};
		match registered.state {
			RenderState::Idle => {}
			RenderState::InFlight => registered.state = RenderState::Idle,
			RenderState::InFlightDirty => {
				registered.state = RenderState::InFlight;
				registered.observer.render(cx);
			}
		}
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	fn request_render(&mut self, id: ObserverId, cx: &RenderContext<'_>) {
		let Some(registered) = self.observers.get_mut(&id) else {
			return;
		};
		match registered.state {
			RenderState::Idle => {
				registered.state = RenderState::InFlight;
				registered.observer.render(cx);
			}
			RenderState::InFlight | RenderState::InFlightDirty => {
				trace!(?id, "coalescing render request into in-flight render");
				registered.state = RenderState::InFlightDirty;
			}
		}
	}
}
