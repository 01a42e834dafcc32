//! In-memory surface host used by the unit tests.
//!
//! Every surface shares one `FakeState`, so a test keeps a clone of the
//! `FakeHost` and inspects bounds, loads and pushes after handing the
//! boxed host to the coordinator.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use vela_common::{NavSeq, Rect, Size, Surface, SurfaceError, SurfaceHost, SurfaceId, SurfaceRole};

/// One recorded call against the host or a surface.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(SurfaceId, SurfaceRole),
    Destroy(SurfaceId),
    SetBounds(SurfaceId, Rect),
    Load(SurfaceId, String, NavSeq),
    Send(SurfaceId, String),
}

#[derive(Debug)]
pub(crate) struct FakeSurfaceState {
    pub role: SurfaceRole,
    pub url: String,
    pub bounds: Vec<Rect>,
    pub loading: bool,
    pub back: Vec<String>,
    pub forward: Vec<String>,
    pub seq: NavSeq,
    pub sent: Vec<(String, serde_json::Value)>,
    pub fail_next_load: Option<String>,
    pub alive: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    pub size: Option<Size>,
    pub surfaces: BTreeMap<SurfaceId, FakeSurfaceState>,
    pub log: Vec<Call>,
    pub fail_create: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    state: Rc<RefCell<FakeState>>,
}

impl FakeHost {
    pub fn with_size(size: Size) -> Self {
        let host = Self::default();
        host.state.borrow_mut().size = Some(size);
        host
    }

    pub fn uninitialized() -> Self {
        Self::default()
    }

    pub fn set_size(&self, size: Size) {
        self.state.borrow_mut().size = Some(size);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.state.borrow_mut().fail_create = fail;
    }

    pub fn fail_next_load(&self, id: SurfaceId, message: &str) {
        if let Some(s) = self.state.borrow_mut().surfaces.get_mut(&id) {
            s.fail_next_load = Some(message.to_string());
        }
    }

    pub fn set_loading(&self, id: SurfaceId, loading: bool) {
        if let Some(s) = self.state.borrow_mut().surfaces.get_mut(&id) {
            s.loading = loading;
        }
    }

    pub fn live_surface_count(&self) -> usize {
        self.state.borrow().surfaces.values().filter(|s| s.alive).count()
    }

    pub fn is_alive(&self, id: SurfaceId) -> bool {
        self.state
            .borrow()
            .surfaces
            .get(&id)
            .is_some_and(|s| s.alive)
    }

    /// Most recent bounds applied to a surface.
    pub fn bounds(&self, id: SurfaceId) -> Option<Rect> {
        self.state
            .borrow()
            .surfaces
            .get(&id)
            .and_then(|s| s.bounds.last().copied())
    }

    pub fn url(&self, id: SurfaceId) -> Option<String> {
        self.state.borrow().surfaces.get(&id).map(|s| s.url.clone())
    }

    pub fn seq(&self, id: SurfaceId) -> Option<NavSeq> {
        self.state.borrow().surfaces.get(&id).map(|s| s.seq)
    }

    pub fn sent(&self, id: SurfaceId) -> Vec<(String, serde_json::Value)> {
        self.state
            .borrow()
            .surfaces
            .get(&id)
            .map(|s| s.sent.clone())
            .unwrap_or_default()
    }

    pub fn sent_channels(&self, id: SurfaceId) -> Vec<String> {
        self.sent(id).into_iter().map(|(channel, _)| channel).collect()
    }

    /// Last payload pushed to `id` on `channel`.
    pub fn last_sent(&self, id: SurfaceId, channel: &str) -> Option<serde_json::Value> {
        self.sent(id)
            .into_iter()
            .rev()
            .find(|(c, _)| c == channel)
            .map(|(_, payload)| payload)
    }

    pub fn log(&self) -> Vec<Call> {
        self.state.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }
}

impl SurfaceHost for FakeHost {
    fn create_surface(
        &mut self,
        id: SurfaceId,
        role: SurfaceRole,
        url: &str,
    ) -> Result<Box<dyn Surface>, SurfaceError> {
        let mut state = self.state.borrow_mut();
        if state.fail_create {
            return Err(SurfaceError::Creation("fake host refused".into()));
        }
        state.surfaces.insert(
            id,
            FakeSurfaceState {
                role,
                url: url.to_string(),
                bounds: Vec::new(),
                loading: true,
                back: Vec::new(),
                forward: Vec::new(),
                seq: 0,
                sent: Vec::new(),
                fail_next_load: None,
                alive: true,
            },
        );
        state.log.push(Call::Create(id, role));
        Ok(Box::new(FakeSurface {
            id,
            role,
            state: Rc::clone(&self.state),
        }))
    }

    fn destroy_surface(&mut self, surface: Box<dyn Surface>) {
        let id = surface.id();
        let mut state = self.state.borrow_mut();
        if let Some(s) = state.surfaces.get_mut(&id) {
            s.alive = false;
        }
        state.log.push(Call::Destroy(id));
    }

    fn content_size(&self) -> Option<Size> {
        self.state.borrow().size
    }
}

pub(crate) struct FakeSurface {
    id: SurfaceId,
    role: SurfaceRole,
    state: Rc<RefCell<FakeState>>,
}

impl FakeSurface {
    fn with<R>(&self, f: impl FnOnce(&mut FakeSurfaceState) -> R) -> Result<R, SurfaceError> {
        let mut state = self.state.borrow_mut();
        match state.surfaces.get_mut(&self.id) {
            Some(s) if s.alive => Ok(f(s)),
            _ => Err(SurfaceError::Closed),
        }
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().log.push(call);
    }
}

impl Surface for FakeSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn role(&self) -> SurfaceRole {
        self.role
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError> {
        if bounds.width < 0.0 || bounds.height < 0.0 {
            return Err(SurfaceError::Bounds(format!("negative size {bounds:?}")));
        }
        self.with(|s| s.bounds.push(bounds))?;
        self.record(Call::SetBounds(self.id, bounds));
        Ok(())
    }

    fn load_url(&mut self, url: &str, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with(|s| {
            if let Some(message) = s.fail_next_load.take() {
                return Err(SurfaceError::Navigation(message));
            }
            let previous = std::mem::replace(&mut s.url, url.to_string());
            s.back.push(previous);
            s.forward.clear();
            s.seq = seq;
            s.loading = true;
            Ok(())
        })??;
        self.record(Call::Load(self.id, url.to_string(), seq));
        Ok(())
    }

    fn url(&self) -> String {
        self.with(|s| s.url.clone()).unwrap_or_default()
    }

    fn is_loading(&self) -> bool {
        self.with(|s| s.loading).unwrap_or(false)
    }

    fn can_go_back(&self) -> bool {
        self.with(|s| !s.back.is_empty()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.with(|s| !s.forward.is_empty()).unwrap_or(false)
    }

    fn go_back(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with(|s| {
            if let Some(url) = s.back.pop() {
                let current = std::mem::replace(&mut s.url, url);
                s.forward.push(current);
                s.seq = seq;
                s.loading = true;
            }
        })
    }

    fn go_forward(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with(|s| {
            if let Some(url) = s.forward.pop() {
                let current = std::mem::replace(&mut s.url, url);
                s.back.push(current);
                s.seq = seq;
                s.loading = true;
            }
        })
    }

    fn reload(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with(|s| {
            s.seq = seq;
            s.loading = true;
        })
    }

    fn send(&self, channel: &str, payload: &serde_json::Value) -> Result<(), SurfaceError> {
        self.with(|s| s.sent.push((channel.to_string(), payload.clone())))?;
        self.record(Call::Send(self.id, channel.to_string()));
        Ok(())
    }
}
