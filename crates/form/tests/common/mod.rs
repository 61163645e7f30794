#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use signup_form::{FormEngine, FormOptions, Gateways};
use signup_gateway::{Address, AddressLookup, Geolocation, LocationError, LookupError, Permission, Place};
use signup_primitives::FieldId;
use tokio::sync::oneshot;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn praca_da_se() -> Address {
	Address {
		street: "Praça da Sé".into(),
		neighborhood: "Sé".into(),
		city: "São Paulo".into(),
		state: "SP".into(),
		complement: "lado ímpar".into(),
		postal_code: "01001-000".into(),
	}
}

pub fn avenida_paulista() -> Address {
	Address {
		street: "Avenida Paulista".into(),
		neighborhood: "Bela Vista".into(),
		city: "São Paulo".into(),
		state: "SP".into(),
		complement: "de 612 a 1510 - lado par".into(),
		postal_code: "01310-100".into(),
	}
}

pub fn se_place() -> Place {
	Place {
		name: Some("Catedral da Sé".into()),
		street: Some("Praça da Sé".into()),
		district: Some("Sé".into()),
		subregion: None,
		city: Some("São Paulo".into()),
		region: Some("sp".into()),
		postal_code: Some("01001000".into()),
	}
}

/// Lookup answering from a table, with optional per-code gates released by the test.
#[derive(Default)]
pub struct ScriptedLookup {
	found: Mutex<HashMap<String, Address>>,
	gates: Mutex<HashMap<String, oneshot::Receiver<Result<Address, LookupError>>>>,
	unreachable: Mutex<HashSet<String>>,
	calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn found(&self, cep: &str, address: Address) {
		self.found.lock().unwrap().insert(cep.to_string(), address);
	}

	pub fn unreachable(&self, cep: &str) {
		self.unreachable.lock().unwrap().insert(cep.to_string());
	}

	/// Holds the next lookup for `cep` until the returned sender fires.
	pub fn gate(&self, cep: &str) -> oneshot::Sender<Result<Address, LookupError>> {
		let (tx, rx) = oneshot::channel();
		self.gates.lock().unwrap().insert(cep.to_string(), rx);
		tx
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl AddressLookup for ScriptedLookup {
	async fn lookup(&self, cep: &str) -> Result<Address, LookupError> {
		self.calls.lock().unwrap().push(cep.to_string());
		let gate = self.gates.lock().unwrap().remove(cep);
		if let Some(rx) = gate {
			return rx.await.unwrap_or_else(|_| Err(LookupError::Task("gate dropped".into())));
		}
		if self.unreachable.lock().unwrap().contains(cep) {
			return Err(LookupError::Transport("connection refused".into()));
		}
		self.found.lock().unwrap().get(cep).cloned().ok_or(LookupError::NotFound)
	}
}

/// Locator with a fixed answer, optionally held until the test releases it.
pub struct ScriptedLocator {
	permission: Permission,
	place: Option<Place>,
	gate: Mutex<Option<oneshot::Receiver<()>>>,
	requests: AtomicUsize,
}

impl ScriptedLocator {
	pub fn new(permission: Permission, place: Option<Place>) -> Arc<Self> {
		Arc::new(Self {
			permission,
			place,
			gate: Mutex::new(None),
			requests: AtomicUsize::new(0),
		})
	}

	pub fn gate(&self) -> oneshot::Sender<()> {
		let (tx, rx) = oneshot::channel();
		*self.gate.lock().unwrap() = Some(rx);
		tx
	}

	pub fn requests(&self) -> usize {
		self.requests.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Geolocation for ScriptedLocator {
	async fn request_permission(&self) -> Result<Permission, LocationError> {
		self.requests.fetch_add(1, Ordering::SeqCst);
		Ok(self.permission)
	}

	async fn current_place(&self) -> Result<Option<Place>, LocationError> {
		let gate = self.gate.lock().unwrap().take();
		if let Some(rx) = gate {
			let _ = rx.await;
		}
		Ok(self.place.clone())
	}
}

pub fn engine(lookup: &Arc<ScriptedLookup>, locator: &Arc<ScriptedLocator>) -> FormEngine {
	engine_with(lookup, locator, FormOptions::default())
}

pub fn engine_with(lookup: &Arc<ScriptedLookup>, locator: &Arc<ScriptedLocator>, options: FormOptions) -> FormEngine {
	init_tracing();
	let gateways = Gateways {
		lookup: lookup.clone(),
		locator: locator.clone(),
	};
	FormEngine::new(gateways, options)
}

pub fn no_location() -> Arc<ScriptedLocator> {
	ScriptedLocator::new(Permission::Denied, None)
}

/// Lets spawned gateway tasks run, then applies whatever they reported.
pub async fn flush(engine: &mut FormEngine) {
	for _ in 0..16 {
		tokio::task::yield_now().await;
	}
	engine.drain_messages();
}

/// Fills every personal field with valid values.
pub fn fill_personal(engine: &mut FormEngine) {
	engine.edit(FieldId::Name, "Ana Souza");
	engine.edit(FieldId::Email, "ana@example.com");
	engine.edit(FieldId::Password, "segredo1");
	engine.edit(FieldId::Phone, "82982225210");
	engine.edit(FieldId::Number, "100");
}
