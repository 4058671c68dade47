// ── Create-or-update intent ──
//
// The only thing that separates a create from an update is whether the
// identifier input holds a value. The decision is made once, up front.

use cadastro_api::WireNumber;

/// What a form submission asks the server to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<P> {
    /// No identifier: POST the payload, which carries no id.
    Create(P),
    /// Identifier present: PUT the payload, which carries `id`.
    Update { id: WireNumber, payload: P },
}

impl<P> Intent<P> {
    /// Decide from the raw identifier input. `build` receives the id to
    /// embed in the body (`None` for a create).
    pub fn decide(raw_id: &str, build: impl FnOnce(Option<WireNumber>) -> P) -> Self {
        match WireNumber::parse(raw_id) {
            Some(id) => Self::Update {
                payload: build(Some(id.clone())),
                id,
            },
            None => Self::Create(build(None)),
        }
    }

    pub fn payload(&self) -> &P {
        match self {
            Self::Create(payload) | Self::Update { payload, .. } => payload,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// HTTP verb the intent maps to, for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "POST",
            Self::Update { .. } => "PUT",
        }
    }
}
