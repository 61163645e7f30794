use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Asynchronous source a gateway task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
	/// Address lookup by postal code.
	PostalCode,
	/// Device location and reverse geocoding.
	Location,
}

impl Channel {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::PostalCode => "postal_code",
			Self::Location => "location",
		}
	}
}

/// Returns the ambient runtime, or a small shared one when the engine is
/// driven from plain synchronous code.
///
/// Gateway calls must make progress while the caller is not awaiting
/// anything, so without an ambient runtime they need threads of their own.
pub(crate) fn runtime_handle() -> Handle {
	if let Ok(handle) = Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(1)
			.thread_name("signup-gateway")
			.build()
			.expect("failed to build signup gateway runtime")
	});
	runtime.handle().clone()
}

/// Spawns a gateway call tagged with its channel.
pub(crate) fn spawn<F>(handle: &Handle, channel: Channel, fut: F) -> JoinHandle<()>
where
	F: Future<Output = ()> + Send + 'static,
{
	tracing::trace!(channel = channel.as_str(), "gateway.spawn");
	handle.spawn(fut)
}
