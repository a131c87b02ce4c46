use common::state::registration::RegistrationState;

pub struct RegistrationForm {
    pub state: RegistrationState,
    /// Guard so the catalog is requested on the first render only.
    pub loaded: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            state: RegistrationState::new(),
            loaded: false,
        }
    }
}
