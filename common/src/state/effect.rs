use crate::api::ApiCall;

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue this request and feed the outcome back into the state.
    Call(ApiCall),
    /// Blocking message box.
    Alert(String),
    /// Transient confirmation toast.
    Notify(String),
    /// Invoke the callback handed down by the parent view.
    NotifyParent,
}

impl Effect {
    pub fn call(&self) -> Option<&ApiCall> {
        match self {
            Effect::Call(call) => Some(call),
            _ => None,
        }
    }
}
