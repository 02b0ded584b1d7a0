/// An authenticated user or service principal.
///
/// Authentication itself happens outside this crate; a principal arrives
/// already established by the surrounding framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier for this principal
    pub id: String,
    /// Display name
    pub name: String,
}
